//! エラー型定義

use crate::roles::ColumnRole;
use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("検索パターンが不正です: {0}")]
    QuerySyntax(#[from] regex::Error),

    #[error("行の解析に失敗: {0}")]
    Row(#[from] RowError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// 行単位の解析エラー（その行だけを捨てて読み込みは続行する）
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RowError {
    #[error("{0}列が見つかりません")]
    MissingColumn(ColumnRole),

    #[error("{0}の値が空です")]
    MissingValue(ColumnRole),

    #[error("{role}の値を数値に変換できません: {value:?}")]
    InvalidNumber { role: ColumnRole, value: String },

    #[error("{role}の値が正ではありません: {value}")]
    NonPositive { role: ColumnRole, value: f64 },

    #[error("重量が0のため単価を計算できません")]
    ZeroWeight,

    #[error("商品名が空です")]
    EmptyName,
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;
