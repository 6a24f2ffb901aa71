use std::io::Write;
use std::path::Path;

use rust_xlsxwriter::Workbook;

use crate::application::AppError;
use crate::domain::TransactionRow;

/// Output column headers, in order.
const HEADERS: [&str; 10] = [
    "ID",
    "Date",
    "Category",
    "Type",
    "Description",
    "Amount",
    "Priority",
    "PaymentMethod",
    "Week",
    "Month",
];

/// Exporter for writing a finalized transaction table.
pub struct Exporter<'a> {
    rows: &'a [TransactionRow],
}

impl<'a> Exporter<'a> {
    pub fn new(rows: &'a [TransactionRow]) -> Self {
        Self { rows }
    }

    /// Write the table as a single-sheet workbook: one header row, then one
    /// row per transaction, no formatting or formulas. Returns the number
    /// of data rows written.
    pub fn export_xlsx<P: AsRef<Path>>(&self, path: P) -> Result<usize, AppError> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        worksheet.set_name("Transactions")?;

        for (col, header) in HEADERS.iter().enumerate() {
            worksheet.write_string(0, col as u16, *header)?;
        }

        for (index, row) in self.rows.iter().enumerate() {
            let line = index as u32 + 1;
            worksheet.write_number(line, 0, row.id as f64)?;
            worksheet.write_string(line, 1, row.date.to_string())?;
            worksheet.write_string(line, 2, &row.category)?;
            worksheet.write_string(line, 3, row.kind.as_str())?;
            worksheet.write_string(line, 4, &row.description)?;
            worksheet.write_number(line, 5, row.amount_units())?;
            worksheet.write_string(line, 6, row.priority.map(|p| p.as_str()).unwrap_or(""))?;
            worksheet.write_string(line, 7, row.payment_method.as_str())?;
            worksheet.write_number(line, 8, row.week as f64)?;
            worksheet.write_string(line, 9, &row.month)?;
        }

        workbook.save(path)?;
        Ok(self.rows.len())
    }

    /// Write the table as CSV with the same columns and header names.
    /// Returns the number of data rows written.
    pub fn export_csv<W: Write>(&self, writer: W) -> Result<usize, AppError> {
        let mut csv_writer = csv::Writer::from_writer(writer);

        for row in self.rows {
            csv_writer.serialize(row)?;
        }

        csv_writer.flush()?;
        Ok(self.rows.len())
    }
}
