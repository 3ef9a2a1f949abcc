//! コンソール表示（罫線付きグリッド）

use super::{table_rows, HEADERS};
use price_finder_common::Item;

/// 検索結果をグリッド表の文字列にする
pub fn render_table(results: &[&Item]) -> String {
    let rows = table_rows(results);

    let mut widths: Vec<usize> = HEADERS.iter().map(|h| h.chars().count()).collect();
    for row in &rows {
        for (w, cell) in widths.iter_mut().zip(row.iter()) {
            *w = (*w).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    out.push_str(&border(&widths, '-'));
    out.push_str(&line(&widths, HEADERS.iter().copied()));
    out.push_str(&border(&widths, '='));
    for row in &rows {
        out.push_str(&line(&widths, row.iter().map(|s| s.as_str())));
        out.push_str(&border(&widths, '-'));
    }
    if rows.is_empty() {
        out.push_str(&border(&widths, '-'));
    }
    out
}

fn border(widths: &[usize], fill: char) -> String {
    let mut s = String::from("+");
    for w in widths {
        s.extend(std::iter::repeat(fill).take(w + 2));
        s.push('+');
    }
    s.push('\n');
    s
}

fn line<'a>(widths: &[usize], cells: impl Iterator<Item = &'a str>) -> String {
    let mut s = String::from("|");
    for (w, cell) in widths.iter().zip(cells) {
        let pad = w - cell.chars().count();
        s.push(' ');
        s.push_str(cell);
        s.extend(std::iter::repeat(' ').take(pad + 1));
        s.push('|');
    }
    s.push('\n');
    s
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_table() {
        let item = Item::new("Молоко", 60.0, 1.0, "price1.csv").unwrap();
        let table = render_table(&[&item]);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 5);
        assert!(lines[1].contains("PricePerUnit"));
        assert!(lines[2].starts_with("+==="));
        assert!(lines[3].contains("| Молоко "));
        assert!(lines[3].contains("60.00"));

        // キリル文字でも列がずれない
        let widths: Vec<usize> = lines.iter().map(|l| l.chars().count()).collect();
        assert!(widths.iter().all(|w| *w == widths[0]));
    }

    #[test]
    fn test_render_empty_table() {
        let table = render_table(&[]);
        assert_eq!(table.lines().count(), 4);
        assert!(table.contains("SourceFile"));
    }
}
