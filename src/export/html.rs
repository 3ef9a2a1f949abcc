//! HTML出力

use super::{table_rows, HEADERS};
use crate::error::Result;
use price_finder_common::Item;
use std::path::Path;

/// HTML特殊文字のエスケープ
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// 検索結果のHTML文書を生成する
pub fn render_html(results: &[&Item], generated_at: &str) -> String {
    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str("<title>find results</title>\n</head>\n<body>\n");
    html.push_str("<table>\n<thead>\n<tr>");
    for header in HEADERS {
        html.push_str(&format!("<th>{}</th>", escape_html(header)));
    }
    html.push_str("</tr>\n</thead>\n<tbody>\n");

    for row in table_rows(results) {
        html.push_str("<tr>");
        for cell in &row {
            html.push_str(&format!("<td>{}</td>", escape_html(cell)));
        }
        html.push_str("</tr>\n");
    }

    html.push_str("</tbody>\n</table>\n");
    html.push_str(&format!("<p>{}</p>\n", escape_html(generated_at)));
    html.push_str("</body>\n</html>\n");
    html
}

/// HTMLファイルに書き出す（既存ファイルは上書き）
pub fn write_html(results: &[&Item], output_path: &Path) -> Result<()> {
    let generated_at = chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
    let html = render_html(results, &generated_at);
    std::fs::write(output_path, html)?;
    Ok(())
}
