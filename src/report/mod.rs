//! Spreadsheet output: styles, workbook layout and the staged artifact.

pub mod artifact;
pub mod style;
pub mod writer;
