//! 価格表CSVを横断して商品を検索し、重量あたり価格で並べるツール

pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod loader;
pub mod scanner;
pub mod session;
