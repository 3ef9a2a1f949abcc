//! 検索テスト
//!
//! 読み込んだカタログに対する検索・並び順を検証

use price_finder::loader::load_prices;
use price_finder::scanner::FileSelector;
use price_finder_common::{Catalog, Error, KeywordTable};
use tempfile::tempdir;

fn milk_catalog() -> Catalog {
    let dir = tempdir().expect("Failed to create temp dir");
    std::fs::write(dir.path().join("price1.csv"), "Name,Price,Weight\nMilk 1L,60,1.0\n").unwrap();
    std::fs::write(
        dir.path().join("price2.csv"),
        "Name,Price,Weight\nMilk powder,300,0.5\nCoffee,900,0.25\n",
    )
    .unwrap();

    let mut catalog = Catalog::new();
    load_prices(dir.path(), &FileSelector::default(), &KeywordTable::default(), &mut catalog)
        .unwrap();
    catalog
}

#[test]
fn test_milk_example() {
    let catalog = milk_catalog();
    let results = catalog.search("milk").unwrap();
    let names: Vec<&str> = results.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names, vec!["Milk 1L", "Milk powder"]);
    assert_eq!(results[0].price_per_unit, 60.0);
    assert_eq!(results[1].price_per_unit, 600.0);
}

#[test]
fn test_results_sorted_ascending() {
    let catalog = milk_catalog();
    let results = catalog.search(".").unwrap();
    assert_eq!(results.len(), 3);
    assert!(results
        .windows(2)
        .all(|w| w[0].price_per_unit <= w[1].price_per_unit));
}

#[test]
fn test_no_match_is_empty_not_error() {
    let catalog = milk_catalog();
    let results = catalog.search("tea").unwrap();
    assert!(results.is_empty());
}

#[test]
fn test_invalid_regex_then_still_queryable() {
    let catalog = milk_catalog();
    let result = catalog.search("[a-");
    assert!(matches!(result, Err(Error::QuerySyntax(_))));
    assert_eq!(catalog.search("coffee").unwrap().len(), 1);
}
