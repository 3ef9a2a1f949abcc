//! 対話式検索モジュール
//!
//! 1行ずつ検索語を受け取り、結果の表示とファイル出力を繰り返す。
//! 終了コマンド（デフォルト `exit`）の入力でループを抜ける。

use crate::cli::ExportFormat;
use crate::error::{PriceFinderError, Result};
use crate::export;
use dialoguer::Input;
use price_finder_common::Catalog;
use std::path::{Path, PathBuf};
use tracing::warn;

/// 対話コマンド
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    /// 検索を実行
    Search(String),
    /// 空入力（再入力）
    Empty,
    /// 終了
    Exit,
}

impl SessionCommand {
    /// 空白は終了判定にのみ使い、検索語は入力どおりに渡す
    pub fn parse(input: &str, exit_word: &str) -> Self {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            SessionCommand::Empty
        } else if trimmed.to_lowercase() == exit_word.to_lowercase() {
            SessionCommand::Exit
        } else {
            SessionCommand::Search(input.to_string())
        }
    }
}

/// 対話モードの設定
#[derive(Debug, Clone)]
pub struct SessionOptions {
    pub exit_word: String,
    pub format: ExportFormat,
    pub output: PathBuf,
}

/// 1回分の検索: 結果を表示し、ファイルに出力する
///
/// 出力したファイルのパスを返す。該当なしでも出力は行う。
pub fn find_text(
    catalog: &Catalog,
    query: &str,
    format: &ExportFormat,
    output: &Path,
) -> Result<(usize, Vec<PathBuf>)> {
    let results = catalog.search(query)?;

    print!("{}", export::table::render_table(&results));
    if results.is_empty() {
        println!("該当する商品はありません: {}", query);
    }

    let written = export::export_results(&results, format, output)?;
    for path in &written {
        println!("✔ 検索結果を保存: {}", path.display());
    }

    Ok((results.len(), written))
}

/// 入力関数から1行ずつ読み込んで検索を繰り返す
///
/// `next_input` が `None` を返した場合（入力終了）もループを抜ける。
/// 戻り値は実行した検索の回数。
pub fn run_session<F>(catalog: &Catalog, options: &SessionOptions, mut next_input: F) -> Result<usize>
where
    F: FnMut() -> Result<Option<String>>,
{
    let mut searches = 0;

    while let Some(input) = next_input()? {
        match SessionCommand::parse(&input, &options.exit_word) {
            SessionCommand::Exit => break,
            SessionCommand::Empty => continue,
            SessionCommand::Search(query) => {
                searches += 1;
                match find_text(catalog, &query, &options.format, &options.output) {
                    Ok(_) => {}
                    Err(e) if e.is_query_syntax() => {
                        println!("⚠ {}", e);
                    }
                    Err(e) => {
                        warn!(query = %query, error = %e, "検索結果の出力に失敗");
                        println!("⚠ {}", e);
                    }
                }
            }
        }
    }

    println!("作業を終了しました。");
    Ok(searches)
}

/// 端末から対話式で検索する
pub fn run_interactive(catalog: &Catalog, options: &SessionOptions) -> Result<usize> {
    let prompt = format!("検索語を入力 ('{}' で終了)", options.exit_word);

    run_session(catalog, options, || {
        let input: String = Input::new()
            .with_prompt(&prompt)
            .allow_empty(true)
            .interact_text()
            .map_err(|e| PriceFinderError::Prompt(e.to_string()))?;
        Ok(Some(input))
    })
}
