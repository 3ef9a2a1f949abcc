//! 価格表読み込みモジュール
//!
//! フォルダ内の価格表CSVを列挙し、各行を正規化してカタログに追加する。
//! 行やファイル単位の失敗は読み飛ばし、フォルダ自体が読めない場合のみエラーを返す。

use crate::error::{PriceFinderError, Result};
use crate::scanner::{self, FileSelector};
use csv::{ErrorKind, ReaderBuilder, Trim};
use price_finder_common::{Catalog, HeaderMap, Item, KeywordTable};
use std::io::Read;
use std::path::Path;
use tracing::{debug, info, warn};

/// 1ファイル分の読み込み結果
#[derive(Debug, Clone, Default)]
pub struct FileLoad {
    pub items: Vec<Item>,
    pub rows_skipped: usize,
}

/// フォルダ読み込みの集計
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub files_loaded: usize,
    pub files_skipped: usize,
    pub rows_loaded: usize,
    pub rows_skipped: usize,
}

impl std::fmt::Display for LoadReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}ファイル / {}件 (スキップ: {}ファイル, {}行)",
            self.files_loaded, self.rows_loaded, self.files_skipped, self.rows_skipped
        )
    }
}

/// CSVを解析して Item を取り出す
pub fn parse_price_csv<R: Read>(
    reader: R,
    source_file: &str,
    table: &KeywordTable,
) -> Result<FileLoad> {
    let mut reader = ReaderBuilder::new()
        .flexible(true)
        .trim(Trim::Headers)
        .from_reader(reader);

    let headers = reader.headers().map_err(|e| PriceFinderError::FileRead {
        file: source_file.to_string(),
        reason: format!("ヘッダー行を読み込めません: {}", e),
    })?;
    let header_map = HeaderMap::from_headers(headers.iter(), table);

    if !header_map.is_complete() {
        let missing: Vec<String> = header_map
            .missing_roles()
            .iter()
            .map(|r| r.to_string())
            .collect();
        warn!(file = source_file, missing = %missing.join(","), "必要な列が見つかりません");
    }

    let mut load = FileLoad::default();

    for (index, record) in reader.records().enumerate() {
        let line = index + 2;
        let record = match record {
            Ok(record) => record,
            Err(e) if matches!(e.kind(), ErrorKind::Io(_)) => {
                return Err(PriceFinderError::FileRead {
                    file: source_file.to_string(),
                    reason: e.to_string(),
                });
            }
            Err(e) => {
                debug!(file = source_file, line, error = %e, "行を読み込めないためスキップ");
                load.rows_skipped += 1;
                continue;
            }
        };

        let fields: Vec<&str> = record.iter().collect();
        match header_map.extract(&fields, source_file) {
            Ok(item) => load.items.push(item),
            Err(e) => {
                debug!(file = source_file, line, reason = %e, "行をスキップ");
                load.rows_skipped += 1;
            }
        }
    }

    Ok(load)
}

/// 価格表ファイルを1つ読み込む
pub fn load_price_file(path: &Path, file_name: &str, table: &KeywordTable) -> Result<FileLoad> {
    let file = std::fs::File::open(path).map_err(|e| PriceFinderError::FileRead {
        file: file_name.to_string(),
        reason: e.to_string(),
    })?;
    parse_price_csv(file, file_name, table)
}

/// フォルダ内の価格表をすべてカタログに追加する
///
/// 同じフォルダを2回読み込むと重複して追加される。
pub fn load_prices(
    folder: &Path,
    selector: &FileSelector,
    table: &KeywordTable,
    catalog: &mut Catalog,
) -> Result<LoadReport> {
    let files = scanner::scan_folder(folder, selector)?;
    let mut report = LoadReport::default();

    for file in &files {
        match load_price_file(&file.path, &file.file_name, table) {
            Ok(load) => {
                info!(
                    file = %file.file_name,
                    items = load.items.len(),
                    skipped = load.rows_skipped,
                    "価格表を読み込みました"
                );
                report.files_loaded += 1;
                report.rows_loaded += load.items.len();
                report.rows_skipped += load.rows_skipped;
                catalog.extend(load.items);
            }
            Err(e) => {
                warn!(file = %file.file_name, error = %e, "ファイルをスキップ");
                report.files_skipped += 1;
            }
        }
    }

    Ok(report)
}
