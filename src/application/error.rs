use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Spreadsheet write failed: {0}")]
    Spreadsheet(#[from] rust_xlsxwriter::XlsxError),

    #[error("CSV write failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
