use core::str::CharIndices;
use std::fmt::{ self,
                Display,
                Formatter };



/// Where a token was read from: the source's path and the 1 based line and column of the token.
/// Error reports are prefixed with it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceLocation
{
    /// Either the path to the file or a description of the source, "\<stdin\>" for example.
    path: String,

    line: usize,
    column: usize
}


/// Formats as `path (line, column)`.
impl Display for SourceLocation
{
    fn fmt(&self, formatter: &mut Formatter<'_>) -> Result<(), fmt::Error>
    {
        write!(formatter, "{} ({}, {})", self.path, self.line, self.column)
    }
}


impl SourceLocation
{
    pub fn new(path: &str, line: usize, column: usize) -> Self
    {
        SourceLocation { path: path.to_owned(), line, column }
    }

    pub fn path(&self) -> &str
    {
        &self.path
    }

    pub fn line(&self) -> usize
    {
        self.line
    }

    pub fn column(&self) -> usize
    {
        self.column
    }
}



/// A cursor over a single line of source code.  The tokenizer uses it to find the boundaries of
/// the tokens within the line, while the cursor keeps track of the current column.
///
/// The SourceBuffer only holds a reference to the line, the text is not copied.  Slices handed out
/// by `slice` borrow from the original line.
pub struct SourceBuffer<'a>
{
    /// The full text of the line being processed.
    source: &'a str,

    /// An iterator over the characters of the line along with their byte offsets.
    chars: CharIndices<'a>,

    /// The character under the cursor, if it has been peeked at but not consumed yet.
    current: Option<( usize, char )>,

    /// Byte offset of the cursor within the line.
    offset: usize,

    /// The 1 based column of the cursor within the line.
    column: usize
}


impl<'a> SourceBuffer<'a>
{
    /// Create a new SourceBuffer over the given line.
    pub fn new(source: &'a str) -> Self {
        SourceBuffer {
            source,
            chars: source.char_indices(),
            current: None,
            offset: 0,
            column: 1
        }
    }

    /// The byte offset the cursor is at within the line.
    pub fn offset(&self) -> usize
    {
        self.offset
    }

    /// The 1 based column the cursor is at within the line.
    pub fn column(&self) -> usize
    {
        self.column
    }

    /// Take a peek at the next character in the line without consuming it.
    pub fn peek_next(&mut self) -> Option<char>
    {
        if self.current.is_none()
        {
            self.current = self.chars.next();
        }

        self.current.map(|( _, next )| next)
    }

    /// Get and consume the next character in the line.
    pub fn next_char(&mut self) -> Option<char>
    {
        let next = match self.current.take()
            {
                Some(found) => Some(found),
                None => self.chars.next()
            };

        if let Some(( index, next_char )) = next
        {
            self.offset = index + next_char.len_utf8();
            self.column += 1;
        }

        next.map(|( _, next_char )| next_char)
    }

    /// Borrow the text of the line between two byte offsets previously reported by `offset`.
    pub fn slice(&self, start: usize, end: usize) -> &'a str
    {
        &self.source[start..end]
    }
}
