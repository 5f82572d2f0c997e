//! Excel export of the delivery history log

use std::path::Path;

use delivery_domain::model::{LogEntry, LOG_HEADER};
use delivery_types::{Error, Result};
use rust_xlsxwriter::{Format, Workbook, Worksheet};

/// Export history entries to an Excel file
pub fn export_to_excel(entries: &[LogEntry], output_path: &Path) -> Result<()> {
    let mut workbook = Workbook::new();

    let sheet = workbook.add_worksheet();
    write_deliveries_sheet(sheet, entries)?;

    workbook
        .save(output_path)
        .map_err(|e| Error::Excel(e.to_string()))?;

    Ok(())
}

fn write_deliveries_sheet(sheet: &mut Worksheet, entries: &[LogEntry]) -> Result<()> {
    sheet
        .set_name("Deliveries")
        .map_err(|e| Error::Excel(e.to_string()))?;

    let header_format = Format::new().set_bold();

    for (col, header) in LOG_HEADER.iter().enumerate() {
        sheet
            .write_string_with_format(0, col as u16, *header, &header_format)
            .map_err(|e| Error::Excel(e.to_string()))?;
    }

    for (row_idx, entry) in entries.iter().enumerate() {
        let row = (row_idx + 1) as u32;
        for (col, value) in entry.to_row().iter().enumerate() {
            sheet
                .write_string(row, col as u16, value)
                .map_err(|e| Error::Excel(e.to_string()))?;
        }
    }

    // Approximate widths: date, customer, address
    sheet
        .set_column_width(0, 20)
        .map_err(|e| Error::Excel(e.to_string()))?;
    sheet
        .set_column_width(1, 28)
        .map_err(|e| Error::Excel(e.to_string()))?;
    sheet
        .set_column_width(2, 36)
        .map_err(|e| Error::Excel(e.to_string()))?;

    Ok(())
}
