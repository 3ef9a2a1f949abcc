//! 検索結果の出力
//!
//! コンソール表・HTML・Excelはすべて同じ列構成
//! `[#, Name, Price, Weight, SourceFile, PricePerUnit]` で出力する。

pub mod table;
pub mod html;
pub mod excel;

use crate::cli::ExportFormat;
use crate::error::Result;
use price_finder_common::Item;
use std::path::{Path, PathBuf};

/// 出力表のヘッダー
pub const HEADERS: [&str; 6] = ["#", "Name", "Price", "Weight", "SourceFile", "PricePerUnit"];

/// 数値の表示（不要な小数点以下を出さない）
pub fn format_number(value: f64) -> String {
    format!("{}", value)
}

/// 検索結果を表の行（文字列）に変換する
pub fn table_rows(results: &[&Item]) -> Vec<[String; 6]> {
    results
        .iter()
        .enumerate()
        .map(|(i, item)| {
            [
                (i + 1).to_string(),
                item.name.clone(),
                format_number(item.unit_price),
                format_number(item.weight),
                item.source_file.clone(),
                format!("{:.2}", item.price_per_unit),
            ]
        })
        .collect()
}

fn output_path_for_format(output: &Path, extension: &str) -> PathBuf {
    if output.is_dir() {
        output.join(format!("find_results.{}", extension))
    } else {
        output.with_extension(extension)
    }
}

/// 検索結果をファイルに出力する（既存ファイルは上書き）
pub fn export_results(
    results: &[&Item],
    format: &ExportFormat,
    output: &Path,
) -> Result<Vec<PathBuf>> {
    let mut written = Vec::new();

    if format.includes_html() {
        let path = output_path_for_format(output, "html");
        html::write_html(results, &path)?;
        written.push(path);
    }

    if format.includes_excel() {
        let path = output_path_for_format(output, "xlsx");
        excel::generate_excel(results, &path)?;
        written.push(path);
    }

    Ok(written)
}
