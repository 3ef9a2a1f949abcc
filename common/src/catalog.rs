//! カタログ（読み込み済み商品の一覧）

use crate::query::Query;
use crate::types::Item;
use crate::Result;

/// 読み込み順を保持した商品一覧
///
/// ファイルの列挙順、ファイル内の行順で並ぶ。重複は除去しない。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    items: Vec<Item>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, item: Item) {
        self.items.push(item);
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Item> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// 商品名を検索し、単価の昇順で返す
    pub fn search(&self, pattern: &str) -> Result<Vec<&Item>> {
        let query = Query::new(pattern)?;
        Ok(query.run(&self.items))
    }
}

impl Extend<Item> for Catalog {
    fn extend<T: IntoIterator<Item = Item>>(&mut self, iter: T) {
        self.items.extend(iter);
    }
}

impl FromIterator<Item> for Catalog {
    fn from_iter<T: IntoIterator<Item = Item>>(iter: T) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Item;
    type IntoIter = std::slice::Iter<'a, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
