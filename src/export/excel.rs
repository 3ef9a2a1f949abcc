//! Excel出力

use super::{table_rows, HEADERS};
use crate::error::{PriceFinderError, Result};
use price_finder_common::Item;
use rust_xlsxwriter::{Format, Workbook};
use std::path::Path;

const COLUMN_WIDTHS: [f64; 6] = [6.0, 40.0, 12.0, 10.0, 20.0, 14.0];

pub fn generate_excel(results: &[&Item], output_path: &Path) -> Result<()> {
    let mut workbook = Workbook::new();
    let header_format = Format::new().set_bold();

    let worksheet = workbook.add_worksheet();
    worksheet
        .set_name("results")
        .map_err(|e| PriceFinderError::ExcelGeneration(format!("シート名設定エラー: {}", e)))?;

    for (col, (header, width)) in HEADERS.iter().zip(COLUMN_WIDTHS).enumerate() {
        let col = col as u16;
        worksheet
            .set_column_width(col, width)
            .map_err(|e| PriceFinderError::ExcelGeneration(format!("列幅設定エラー: {}", e)))?;
        worksheet
            .write_string_with_format(0, col, *header, &header_format)
            .map_err(|e| PriceFinderError::ExcelGeneration(format!("ヘッダー書き込みエラー: {}", e)))?;
    }

    for (i, (item, row)) in results.iter().zip(table_rows(results)).enumerate() {
        let r = (i + 1) as u32;
        let write = |e: rust_xlsxwriter::XlsxError| {
            PriceFinderError::ExcelGeneration(format!("値書き込みエラー: {}", e))
        };
        worksheet.write_number(r, 0, (i + 1) as f64).map_err(write)?;
        worksheet.write_string(r, 1, &row[1]).map_err(write)?;
        worksheet.write_number(r, 2, item.unit_price).map_err(write)?;
        worksheet.write_number(r, 3, item.weight).map_err(write)?;
        worksheet.write_string(r, 4, &row[4]).map_err(write)?;
        worksheet.write_number(r, 5, item.price_per_unit).map_err(write)?;
    }

    workbook
        .save(output_path)
        .map_err(|e| PriceFinderError::ExcelGeneration(format!("Excel保存エラー: {}", e)))?;

    Ok(())
}
