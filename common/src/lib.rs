//! Price Finder Common Library
//!
//! 価格表の列判定・正規化と、商品検索のコアロジック

pub mod types;
pub mod roles;
pub mod normalize;
pub mod catalog;
pub mod query;
pub mod error;

pub use types::{Item, round2};
pub use roles::{ColumnRole, KeywordTable};
pub use normalize::{HeaderMap, parse_decimal};
pub use catalog::Catalog;
pub use query::{Query, search};
pub use error::{Error, Result, RowError};
