use crate::lang::source_buffer::SourceBuffer;
use std::fmt::{self, Display, Formatter};

/// The integer type held by the data stack and produced by numeric literals.
pub type Cell = i64;

/// A token is a single whitespace delimited piece of a line of source code.  The token borrows its
/// text from the line, it is only valid while that line is being processed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Token<'a> {
    /// The 1 based column in the line where the token starts.
    column: usize,

    /// The text of the token, never empty.
    text: &'a str,
}

impl Display for Token<'_> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl<'a> Token<'a> {
    /// Where in the line the token was found.
    pub fn column(&self) -> usize {
        self.column
    }

    /// The raw text of the token.
    pub fn text(&self) -> &'a str {
        self.text
    }

    /// Try to interpret the token as a numeric literal.
    pub fn number(&self) -> Option<Cell> {
        to_number(self.text)
    }

    /// Check if the token is exactly the given marker, such as `:` or `)`.
    pub fn is(&self, marker: &str) -> bool {
        self.text == marker
    }
}

/// The whitespace characters that separate tokens.  Vertical tab is included, which rules out
/// `char::is_ascii_whitespace`.
pub fn is_whitespace(next: char) -> bool {
    matches!(next, ' ' | '\t' | '\n' | '\x0b' | '\r' | '\x0c')
}

/// Classify a token as a numeric literal.  The whole token has to be an optionally negative run of
/// decimal digits that fits within a cell.  Anything else, including values that overflow, is not a
/// number.
pub fn to_number(text: &str) -> Option<Cell> {
    let digits = text.strip_prefix('-').unwrap_or(text);

    if digits.is_empty() || !digits.bytes().all(|byte| byte.is_ascii_digit()) {
        return None;
    }

    text.parse::<Cell>().ok()
}

/// A lazy iterator over the tokens of a single line of source code.
pub struct Tokens<'a> {
    buffer: SourceBuffer<'a>,
}

impl<'a> Iterator for Tokens<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        skip_whitespace(&mut self.buffer);

        self.buffer.peek_next()?;

        let column = self.buffer.column();
        let start = self.buffer.offset();

        while let Some(next) = self.buffer.peek_next() {
            if is_whitespace(next) {
                break;
            }

            let _ = self.buffer.next_char();
        }

        let text = self.buffer.slice(start, self.buffer.offset());

        Some(Token { column, text })
    }
}

/// Skip over any whitespace at the cursor, leaving the cursor at the start of the next token or at
/// the end of the line.
fn skip_whitespace(buffer: &mut SourceBuffer) {
    while let Some(next) = buffer.peek_next() {
        if !is_whitespace(next) {
            break;
        }

        let _ = buffer.next_char();
    }
}

/// Break a line of source code into its tokens.  Nothing is read until the iterator is advanced.
pub fn tokenize(line: &str) -> Tokens<'_> {
    Tokens {
        buffer: SourceBuffer::new(line),
    }
}
