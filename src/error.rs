use thiserror::Error;

/// Everything that can abort a report run.
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("malformed input: {0}")]
    MalformedInput(String),

    #[error("missing field `{field}` on line {line}")]
    MissingField { field: &'static str, line: u64 },

    #[error("table has {found} columns but the layout expects {expected}")]
    LayoutMismatch { expected: usize, found: usize },

    #[error("could not write spreadsheet: {0}")]
    Emission(#[from] rust_xlsxwriter::XlsxError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<csv::Error> for ReportError {
    fn from(err: csv::Error) -> Self {
        let message = err.to_string();
        match err.into_kind() {
            csv::ErrorKind::Io(io) => ReportError::Io(io),
            _ => ReportError::MalformedInput(message),
        }
    }
}
