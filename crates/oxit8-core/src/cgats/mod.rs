//! CGATS / IT8.7 Text Sheets
//!
//! This module provides the structural layer underneath the IT8 document
//! model: a tokenizer, an in-memory sheet and a writer for the CGATS.17
//! text format used by Argyll CMS and lcms2.
//!
//! # Structure
//!
//! A sheet consists of one or more tables. Each table has:
//! 1. A sheet type line (`CTI3`, `CCMX`, ...)
//! 2. `KEYWORD value` property lines
//! 3. A `BEGIN_DATA_FORMAT` / `END_DATA_FORMAT` block naming the columns
//! 4. A `BEGIN_DATA` / `END_DATA` block holding the rows
//!
//! Nothing here knows what the keywords mean. Semantic validation lives in
//! [`crate::it8`].
//!
//! # Example
//!
//! ```
//! use oxit8_core::cgats::Sheet;
//!
//! let text = b"CCMX\nCOLOR_REP \"XYZ\"\nNUMBER_OF_FIELDS 3\n\
//!              BEGIN_DATA_FORMAT\nXYZ_X XYZ_Y XYZ_Z\nEND_DATA_FORMAT\n\
//!              NUMBER_OF_SETS 1\nBEGIN_DATA\n1 0 0\nEND_DATA\n";
//! let sheet = Sheet::parse(text).unwrap();
//! let table = sheet.table();
//! assert_eq!(table.sheet_type(), "CCMX");
//! assert_eq!(table.property("COLOR_REP"), Some("XYZ"));
//! assert_eq!(table.numeric_cell(0, 0).unwrap(), 1.0);
//! ```

mod error;
mod parser;
mod table;
mod writer;

pub use error::CgatsError;
pub use parser::Sheet;
pub use table::{Property, Table, ValueKind};
pub use writer::format_number;
