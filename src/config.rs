use crate::error::{PriceFinderError, Result};
use crate::scanner::FileSelector;
use price_finder_common::KeywordTable;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 対象ファイル名に含まれる目印（大文字小文字無視）
    pub marker: String,
    /// 対象ファイルの拡張子
    pub extension: String,
    /// 検索結果のHTML出力先
    pub export_file: String,
    /// 対話モードの終了コマンド
    pub exit_word: String,
    /// 列判定キーワードの上書き
    pub keywords: Option<KeywordTable>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            marker: "price".into(),
            extension: "csv".into(),
            export_file: "find_results.html".into(),
            exit_word: "exit".into(),
            keywords: None,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| PriceFinderError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("price-finder").join("config.json"))
    }

    pub fn file_selector(&self) -> FileSelector {
        FileSelector::new(&self.marker, &self.extension)
    }

    pub fn keyword_table(&self) -> KeywordTable {
        self.keywords.clone().unwrap_or_default()
    }

    pub fn set_marker(&mut self, marker: String) -> Result<()> {
        if marker.trim().is_empty() {
            return Err(PriceFinderError::Config("目印の文字列が空です".into()));
        }
        self.marker = marker;
        self.save()
    }

    pub fn set_export_file(&mut self, file: String) -> Result<()> {
        if file.trim().is_empty() {
            return Err(PriceFinderError::Config("出力ファイル名が空です".into()));
        }
        self.export_file = file;
        self.save()
    }
}
