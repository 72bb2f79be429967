//! CGATS Tokenizer and Sheet
//!
//! The parser is line oriented. Property lines, the data format block and
//! the data block are recognised by their leading keyword; data values are
//! read as a flat token stream and cut into rows of `NUMBER_OF_FIELDS`.

use super::error::CgatsError;
use super::table::{Table, ValueKind};

/// A parsed CGATS file: one or more tables
///
/// The first table is the one IT8 documents are read from. Argyll appends
/// extra tables (for example a `CAL` table in `.ti3` files); those are kept
/// so they survive a parse/write cycle.
#[derive(Debug, Clone, PartialEq)]
pub struct Sheet {
    tables: Vec<Table>,
}

#[derive(Debug, Clone, PartialEq)]
struct Token {
    text: String,
    quoted: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    SheetType,
    Header,
    DataFormat { start: usize },
    Data { start: usize },
}

impl Sheet {
    /// Create a sheet from one table
    pub fn from_table(table: Table) -> Self {
        Self {
            tables: vec![table],
        }
    }

    /// Parse a sheet from bytes
    ///
    /// Trailing NUL bytes are ignored.
    pub fn parse(data: &[u8]) -> Result<Self, CgatsError> {
        let end = data.iter().rposition(|&b| b != 0).map_or(0, |p| p + 1);
        let text = std::str::from_utf8(&data[..end]).map_err(|e| CgatsError::Encoding {
            offset: e.valid_up_to(),
        })?;

        let mut tables = Vec::new();
        let mut current = Table::default();
        let mut data_tokens: Vec<String> = Vec::new();
        let mut state = State::SheetType;

        for (idx, raw_line) in text.lines().enumerate() {
            let line = idx + 1;
            let tokens = tokenize(raw_line, line)?;
            let mut iter = tokens.into_iter();

            while let Some(token) = iter.next() {
                match state {
                    State::SheetType => {
                        current = Table::new(token.text);
                        state = State::Header;
                        // Anything after the tag on the same line is free text
                        break;
                    }
                    State::Header => {
                        if token.quoted {
                            return Err(CgatsError::UnexpectedToken {
                                line,
                                token: token.text,
                            });
                        }
                        match token.text.as_str() {
                            "BEGIN_DATA_FORMAT" => {
                                state = State::DataFormat { start: line };
                            }
                            "BEGIN_DATA" => {
                                data_tokens.clear();
                                state = State::Data { start: line };
                            }
                            "KEYWORD" => {
                                // Custom keyword declaration, nothing to store
                                iter.next();
                            }
                            "END_DATA_FORMAT" | "END_DATA" => {
                                return Err(CgatsError::UnexpectedToken {
                                    line,
                                    token: token.text,
                                });
                            }
                            _ => {
                                let value = iter.next().ok_or_else(|| CgatsError::MissingValue {
                                    line,
                                    keyword: token.text.clone(),
                                })?;
                                if let Some(extra) = iter.next() {
                                    return Err(CgatsError::UnexpectedToken {
                                        line,
                                        token: extra.text,
                                    });
                                }
                                let kind = if value.quoted {
                                    ValueKind::Quoted
                                } else {
                                    ValueKind::Bare
                                };
                                current.insert(token.text, value.text, kind);
                            }
                        }
                    }
                    State::DataFormat { .. } => {
                        if !token.quoted && token.text == "END_DATA_FORMAT" {
                            state = State::Header;
                        } else {
                            current.push_format(token.text);
                        }
                    }
                    State::Data { .. } => {
                        if !token.quoted && token.text == "END_DATA" {
                            let rows = split_rows(&current, std::mem::take(&mut data_tokens))?;
                            current.set_rows(rows);
                            tables.push(std::mem::take(&mut current));
                            state = State::SheetType;
                        } else {
                            data_tokens.push(token.text);
                        }
                    }
                }
            }
        }

        match state {
            State::SheetType => {}
            State::Header => tables.push(current),
            State::DataFormat { start } => {
                return Err(CgatsError::UnterminatedSection {
                    line: start,
                    section: "BEGIN_DATA_FORMAT",
                });
            }
            State::Data { start } => {
                return Err(CgatsError::UnterminatedSection {
                    line: start,
                    section: "BEGIN_DATA",
                });
            }
        }

        if tables.is_empty() {
            return Err(CgatsError::Empty);
        }
        Ok(Self { tables })
    }

    /// The first table
    pub fn table(&self) -> &Table {
        &self.tables[0]
    }

    /// All tables in file order
    pub fn tables(&self) -> &[Table] {
        &self.tables
    }

    /// Number of tables
    pub fn table_count(&self) -> usize {
        self.tables.len()
    }
}

/// Split one line into tokens, honouring quotes and `#` comments
fn tokenize(line: &str, line_no: usize) -> Result<Vec<Token>, CgatsError> {
    let mut tokens = Vec::new();
    let mut chars = line.char_indices().peekable();

    while let Some(&(start, c)) = chars.peek() {
        if c.is_whitespace() {
            chars.next();
            continue;
        }
        if c == '#' {
            break;
        }
        if c == '"' || c == '\'' {
            chars.next();
            let body_start = start + c.len_utf8();
            let close = line[body_start..]
                .find(c)
                .ok_or(CgatsError::UnterminatedString { line: line_no })?;
            let body_end = body_start + close;
            tokens.push(Token {
                text: line[body_start..body_end].to_string(),
                quoted: true,
            });
            while chars.peek().is_some_and(|&(i, _)| i <= body_end) {
                chars.next();
            }
            continue;
        }

        let mut end = line.len();
        while let Some(&(i, ch)) = chars.peek() {
            if ch.is_whitespace() || ch == '#' {
                end = i;
                break;
            }
            chars.next();
        }
        tokens.push(Token {
            text: line[start..end].to_string(),
            quoted: false,
        });
    }

    Ok(tokens)
}

/// Group data tokens into rows
fn split_rows(table: &Table, tokens: Vec<String>) -> Result<Vec<Vec<String>>, CgatsError> {
    let declared = match table.property("NUMBER_OF_FIELDS") {
        Some(text) => Some(parse_count("NUMBER_OF_FIELDS", text)?),
        None => None,
    };
    let format_len = table.data_format().len();

    let fields = match declared {
        Some(declared) if format_len != 0 && declared != format_len => {
            return Err(CgatsError::FieldCountMismatch {
                declared,
                found: format_len,
            });
        }
        Some(declared) => declared,
        None => format_len,
    };

    if tokens.is_empty() {
        return Ok(Vec::new());
    }
    if fields == 0 {
        return Err(CgatsError::NoDataFormat);
    }
    if tokens.len() % fields != 0 {
        return Err(CgatsError::RaggedData {
            fields,
            tokens: tokens.len(),
        });
    }

    let rows: Vec<Vec<String>> = tokens.chunks(fields).map(<[String]>::to_vec).collect();

    if let Some(text) = table.property("NUMBER_OF_SETS") {
        let declared = parse_count("NUMBER_OF_SETS", text)?;
        if rows.len() > declared {
            return Err(CgatsError::TooManySets {
                declared,
                found: rows.len(),
            });
        }
    }

    Ok(rows)
}

fn parse_count(keyword: &str, text: &str) -> Result<usize, CgatsError> {
    text.trim()
        .parse::<usize>()
        .map_err(|_| CgatsError::InvalidProperty {
            keyword: keyword.to_string(),
            value: text.to_string(),
        })
}
