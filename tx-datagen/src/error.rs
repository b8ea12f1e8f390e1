use std::io;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DataGenError {
    #[error("CSV Error")]
    CsvError(#[from] csv::Error),
    #[error("I/O Error")]
    IoError(#[from] io::Error),
    #[error("Amounts must be non-negative")]
    InvalidAmount,
    #[error("Invalid argument: {0}")]
    InvalidArgument(&'static str),
}
