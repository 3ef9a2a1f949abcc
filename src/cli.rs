use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "price-finder")]
#[command(about = "価格表CSV横断検索ツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 価格表フォルダを読み込んで商品を検索
    Search {
        /// 価格表フォルダのパス
        #[arg(default_value = ".")]
        folder: PathBuf,

        /// 検索語（正規表現）。省略時は対話モード
        #[arg(short, long)]
        query: Option<String>,

        /// 出力形式 (html/excel/both/none)
        #[arg(short, long, default_value = "html")]
        format: ExportFormat,

        /// 出力ファイル（デフォルト: 設定のexport_file）
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// 読み込んだ全商品を一覧表示
    List {
        /// 価格表フォルダのパス
        #[arg(default_value = ".")]
        folder: PathBuf,
    },

    /// 設定を表示/編集
    Config {
        /// 対象ファイル名の目印を設定
        #[arg(long)]
        set_marker: Option<String>,

        /// HTML出力ファイル名を設定
        #[arg(long)]
        set_export_file: Option<String>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ExportFormat {
    #[default]
    Html,
    Excel,
    Both,
    None,
}

impl ExportFormat {
    pub fn includes_html(&self) -> bool {
        matches!(self, ExportFormat::Html | ExportFormat::Both)
    }

    pub fn includes_excel(&self) -> bool {
        matches!(self, ExportFormat::Excel | ExportFormat::Both)
    }
}

impl std::str::FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "html" | "htm" => Ok(ExportFormat::Html),
            "excel" | "xlsx" => Ok(ExportFormat::Excel),
            "both" => Ok(ExportFormat::Both),
            "none" | "off" => Ok(ExportFormat::None),
            _ => Err(format!("Unknown format: {}. Use html, excel, both, or none", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_format_from_str() {
        assert_eq!("HTML".parse::<ExportFormat>(), Ok(ExportFormat::Html));
        assert_eq!("xlsx".parse::<ExportFormat>(), Ok(ExportFormat::Excel));
        assert_eq!("none".parse::<ExportFormat>(), Ok(ExportFormat::None));
        assert!("pdf".parse::<ExportFormat>().is_err());
    }

    #[test]
    fn test_export_format_includes() {
        assert!(ExportFormat::Both.includes_html());
        assert!(ExportFormat::Both.includes_excel());
        assert!(!ExportFormat::Html.includes_excel());
        assert!(!ExportFormat::None.includes_html());
    }

    #[test]
    fn test_cli_parse_search() {
        let cli = Cli::try_parse_from(["price-finder", "search", "data", "-q", "milk", "-f", "both"])
            .unwrap();
        match cli.command {
            Commands::Search { folder, query, format, output } => {
                assert_eq!(folder, PathBuf::from("data"));
                assert_eq!(query.as_deref(), Some("milk"));
                assert_eq!(format, ExportFormat::Both);
                assert!(output.is_none());
            }
            _ => panic!("search subcommand expected"),
        }
    }
}
