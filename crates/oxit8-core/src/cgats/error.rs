//! CGATS Error Types

use std::fmt;

/// Errors raised by the CGATS tokenizer and table accessors
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CgatsError {
    /// Input contains no sheet at all
    Empty,
    /// Input is not valid UTF-8
    Encoding { offset: usize },
    /// A quoted string runs to the end of its line
    UnterminatedString { line: usize },
    /// A property keyword has no value
    MissingValue { line: usize, keyword: String },
    /// A token appears where the grammar does not allow it
    UnexpectedToken { line: usize, token: String },
    /// A `BEGIN_*` block is never closed
    UnterminatedSection { line: usize, section: &'static str },
    /// A structural property holds an unusable value
    InvalidProperty { keyword: String, value: String },
    /// `NUMBER_OF_FIELDS` disagrees with the data format
    FieldCountMismatch { declared: usize, found: usize },
    /// Data is present but the column count is unknown
    NoDataFormat,
    /// Data token count is not a multiple of the field count
    RaggedData { fields: usize, tokens: usize },
    /// More rows than `NUMBER_OF_SETS` declares
    TooManySets { declared: usize, found: usize },
    /// Row index past the end of the table
    RowOutOfRange { row: usize, count: usize },
    /// Column index past the end of a row
    ColumnOutOfRange { row: usize, col: usize, count: usize },
    /// Cell text is not a number
    InvalidNumber { row: usize, col: usize, text: String },
}

impl fmt::Display for CgatsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Sheet is empty"),
            Self::Encoding { offset } => {
                write!(f, "Invalid UTF-8 at byte offset {}", offset)
            }
            Self::UnterminatedString { line } => {
                write!(f, "Line {}: unterminated quoted string", line)
            }
            Self::MissingValue { line, keyword } => {
                write!(f, "Line {}: keyword {} has no value", line, keyword)
            }
            Self::UnexpectedToken { line, token } => {
                write!(f, "Line {}: unexpected token '{}'", line, token)
            }
            Self::UnterminatedSection { line, section } => {
                write!(f, "Line {}: {} is never closed", line, section)
            }
            Self::InvalidProperty { keyword, value } => {
                write!(f, "Invalid value for {}: '{}'", keyword, value)
            }
            Self::FieldCountMismatch { declared, found } => {
                write!(
                    f,
                    "NUMBER_OF_FIELDS is {} but the data format names {} fields",
                    declared, found
                )
            }
            Self::NoDataFormat => write!(f, "Data block without a data format"),
            Self::RaggedData { fields, tokens } => {
                write!(
                    f,
                    "{} data values do not fill rows of {} fields",
                    tokens, fields
                )
            }
            Self::TooManySets { declared, found } => {
                write!(
                    f,
                    "NUMBER_OF_SETS is {} but {} rows are present",
                    declared, found
                )
            }
            Self::RowOutOfRange { row, count } => {
                write!(f, "Row {} out of range (table has {} rows)", row, count)
            }
            Self::ColumnOutOfRange { row, col, count } => {
                write!(
                    f,
                    "Column {} out of range in row {} ({} columns)",
                    col, row, count
                )
            }
            Self::InvalidNumber { row, col, text } => {
                write!(f, "Cell ({}, {}) is not a number: '{}'", row, col, text)
            }
        }
    }
}

impl std::error::Error for CgatsError {}
