//! 対話式検索テスト
//!
//! 入力を差し替えてループの終了・エラー継続を検証

use price_finder::cli::ExportFormat;
use price_finder::session::{find_text, run_session, SessionOptions};
use price_finder_common::{Catalog, Item};
use std::collections::VecDeque;
use tempfile::tempdir;

fn catalog() -> Catalog {
    vec![
        Item::new("Milk 1L", 60.0, 1.0, "price1.csv").unwrap(),
        Item::new("Milk powder", 300.0, 0.5, "price2.csv").unwrap(),
    ]
    .into_iter()
    .collect()
}

fn scripted(lines: &[&str]) -> impl FnMut() -> price_finder::error::Result<Option<String>> {
    let mut queue: VecDeque<String> = lines.iter().map(|s| s.to_string()).collect();
    move || Ok(queue.pop_front())
}

#[test]
fn test_session_stops_at_exit_word() {
    let dir = tempdir().expect("Failed to create temp dir");
    let options = SessionOptions {
        exit_word: "exit".into(),
        format: ExportFormat::Html,
        output: dir.path().join("find_results.html"),
    };

    let searches = run_session(&catalog(), &options, scripted(&["milk", "", "EXIT", "milk"])).unwrap();

    assert_eq!(searches, 1);
    assert!(options.output.exists());
}

#[test]
fn test_session_continues_after_invalid_pattern() {
    let dir = tempdir().expect("Failed to create temp dir");
    let options = SessionOptions {
        exit_word: "exit".into(),
        format: ExportFormat::Html,
        output: dir.path().join("find_results.html"),
    };

    let searches = run_session(&catalog(), &options, scripted(&["[milk", "powder", "exit"])).unwrap();

    assert_eq!(searches, 2);
    let content = std::fs::read_to_string(&options.output).unwrap();
    assert!(content.contains("Milk powder"));
    assert!(!content.contains("Milk 1L"));
}

#[test]
fn test_session_ends_on_input_eof() {
    let dir = tempdir().expect("Failed to create temp dir");
    let options = SessionOptions {
        exit_word: "exit".into(),
        format: ExportFormat::None,
        output: dir.path().join("find_results.html"),
    };

    let searches = run_session(&catalog(), &options, scripted(&["milk"])).unwrap();
    assert_eq!(searches, 1);
}

#[test]
fn test_find_text_no_results_still_exports() {
    let dir = tempdir().expect("Failed to create temp dir");
    let output = dir.path().join("find_results.html");

    let (count, written) = find_text(&catalog(), "coffee", &ExportFormat::Html, &output).unwrap();

    assert_eq!(count, 0);
    assert_eq!(written, vec![output.clone()]);
    assert!(output.exists());
}

#[test]
fn test_find_text_invalid_pattern() {
    let dir = tempdir().expect("Failed to create temp dir");
    let output = dir.path().join("find_results.html");

    let err = find_text(&catalog(), "(milk", &ExportFormat::Html, &output).unwrap_err();
    assert!(err.is_query_syntax());
    assert!(!output.exists());
}

#[test]
fn test_session_keeps_spaces_in_query() {
    let dir = tempdir().expect("Failed to create temp dir");
    let options = SessionOptions {
        exit_word: "exit".into(),
        format: ExportFormat::Html,
        output: dir.path().join("find_results.html"),
    };

    run_session(&catalog(), &options, scripted(&[" 1l", "exit"])).unwrap();
    let content = std::fs::read_to_string(&options.output).unwrap();
    assert!(content.contains("Milk 1L"));
    assert!(!content.contains("Milk powder"));

    // 末尾の空白も検索語の一部
    run_session(&catalog(), &options, scripted(&["powder ", "exit"])).unwrap();
    let content = std::fs::read_to_string(&options.output).unwrap();
    assert!(!content.contains("Milk powder"));
}
