use thiserror::Error;

#[derive(Error, Debug)]
pub enum PriceFinderError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("フォルダが見つかりません: {0}")]
    FolderNotFound(String),

    #[error("フォルダを読み込めません: {path}: {source}")]
    DirectoryAccess {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("ファイル読み込みエラー: {file}: {reason}")]
    FileRead { file: String, reason: String },

    #[error("{0}")]
    Core(#[from] price_finder_common::Error),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error("Excel生成エラー: {0}")]
    ExcelGeneration(String),

    #[error("入力エラー: {0}")]
    Prompt(String),
}

impl PriceFinderError {
    /// 検索パターンの構文エラーかどうか
    pub fn is_query_syntax(&self) -> bool {
        matches!(
            self,
            PriceFinderError::Core(price_finder_common::Error::QuerySyntax(_))
        )
    }
}

pub type Result<T> = std::result::Result<T, PriceFinderError>;
