//! Problem-set text reader
//!
//! Parses the plain-text batch format: a line with the number of
//! grids, then per grid a `H W` header line followed by exactly `H`
//! rows of `W` space-separated non-negative integers.
//!
//! Tokenization and parsing are separated: the tokenizer reduces the
//! input to number/space/end-of-line tokens, and the parser checks the
//! exact shape of the format against that token stream. Any deviation
//! (junk characters, doubled separators, short or long rows, missing
//! rows) rejects the whole problem set.

use crate::error::{Error, Result};
use crate::grid::TerrainGrid;
use std::io::Read;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token {
    Number(u64),
    Space,
    Eol,
}

fn tokenize(input: &str) -> Result<Vec<Token>> {
    let mut tokens = Vec::new();
    let mut number = String::new();

    for ch in input.chars() {
        match ch {
            ' ' | '\n' => {
                if !number.is_empty() {
                    tokens.push(parse_number(&number)?);
                    number.clear();
                }
                tokens.push(if ch == ' ' { Token::Space } else { Token::Eol });
            }
            _ => number.push(ch),
        }
    }
    if !number.is_empty() {
        tokens.push(parse_number(&number)?);
    }

    Ok(tokens)
}

fn parse_number(text: &str) -> Result<Token> {
    text.parse::<u64>()
        .map(Token::Number)
        .map_err(|_| Error::Parse(format!("expected a non-negative integer, found {text:?}")))
}

struct TokenStream {
    tokens: Vec<Token>,
    index: usize,
}

impl TokenStream {
    fn new(tokens: Vec<Token>) -> Self {
        Self { tokens, index: 0 }
    }

    fn peek(&self) -> Option<Token> {
        self.tokens.get(self.index).copied()
    }

    fn advance(&mut self) -> Option<Token> {
        let token = self.peek();
        if token.is_some() {
            self.index += 1;
        }
        token
    }

    fn expect_number(&mut self, what: &str) -> Result<u64> {
        match self.advance() {
            Some(Token::Number(n)) => Ok(n),
            other => Err(Error::Parse(format!("expected {what}, found {other:?}"))),
        }
    }

    fn expect_space(&mut self, what: &str) -> Result<()> {
        match self.advance() {
            Some(Token::Space) => Ok(()),
            other => Err(Error::Parse(format!(
                "expected a space after {what}, found {other:?}"
            ))),
        }
    }

    fn expect_eol(&mut self, what: &str) -> Result<()> {
        // End of input counts as end of line for the final row.
        match self.advance() {
            Some(Token::Eol) | None => Ok(()),
            other => Err(Error::Parse(format!(
                "expected end of line after {what}, found {other:?}"
            ))),
        }
    }
}

/// Read a whole problem set into one grid per instance.
///
/// A malformed instance fails the whole read; the caller never sees a
/// partially parsed problem set.
pub fn read_problem_set(input: &str) -> Result<Vec<TerrainGrid<i64>>> {
    let mut stream = TokenStream::new(tokenize(input)?);

    let count = stream.expect_number("grid count")?;
    if count == 0 {
        return Ok(Vec::new());
    }
    stream.expect_eol("grid count")?;

    let mut grids = Vec::with_capacity(count as usize);
    for _ in 0..count {
        grids.push(parse_grid(&mut stream)?);
    }

    Ok(grids)
}

/// Read a problem set from any reader (file, stdin, ...).
pub fn read_problem_set_from<R: Read>(mut reader: R) -> Result<Vec<TerrainGrid<i64>>> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    read_problem_set(&text)
}

fn parse_grid(stream: &mut TokenStream) -> Result<TerrainGrid<i64>> {
    let rows = stream.expect_number("grid height")? as usize;
    stream.expect_space("grid height")?;
    let cols = stream.expect_number("grid width")? as usize;
    stream.expect_eol("grid header")?;

    let mut rows_data = Vec::with_capacity(rows);
    for row in 0..rows {
        let values = parse_row(stream)?;
        if values.len() != cols {
            return Err(Error::RowWidthMismatch {
                row,
                expected: cols,
                actual: values.len(),
            });
        }
        rows_data.push(values);
    }

    TerrainGrid::from_rows(rows_data)
}

/// Read one row of single-space-separated numbers up to the next end
/// of line (or end of input).
fn parse_row(stream: &mut TokenStream) -> Result<Vec<i64>> {
    let mut values = Vec::new();

    loop {
        match stream.peek() {
            Some(Token::Number(n)) => {
                stream.advance();
                let v = i64::try_from(n)
                    .map_err(|_| Error::Parse(format!("elevation {n} is out of range")))?;
                values.push(v);

                // A single space separates values within the row.
                if stream.peek() == Some(Token::Space) {
                    stream.advance();
                }
            }
            Some(Token::Eol) => {
                stream.advance();
                break;
            }
            None => break,
            Some(Token::Space) => {
                return Err(Error::Parse("unexpected space in grid row".to_string()));
            }
        }
    }

    Ok(values)
}
