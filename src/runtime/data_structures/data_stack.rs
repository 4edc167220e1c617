use crate::{
    lang::tokenizing::Cell,
    runtime::error::{self, ScriptError},
};
use std::fmt::{self, Display, Formatter};

/// The interpreter's data stack.  A simple last in first out list of cells, where reading from an
/// empty stack is reported as a stack underflow rather than panicking.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DataStack {
    cells: Vec<Cell>,
}

/// Print the stack from the bottom to the top, each value followed by a space.  This is the format
/// used by `.s`.
impl Display for DataStack {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        for cell in self.cells.iter() {
            write!(formatter, "{} ", cell)?;
        }

        Ok(())
    }
}

impl DataStack {
    /// Create a new empty stack.
    pub fn new() -> DataStack {
        DataStack {
            cells: Vec::with_capacity(20),
        }
    }

    /// Push a value onto the top of the stack.
    pub fn push(&mut self, value: Cell) {
        self.cells.push(value);
    }

    /// Remove and return the top value of the stack.
    pub fn pop(&mut self) -> error::Result<Cell> {
        self.cells.pop().ok_or(ScriptError::StackUnderflow)
    }

    /// Read the top value of the stack without removing it.
    pub fn top(&self) -> error::Result<Cell> {
        self.peek(0)
    }

    /// Read the value `depth` places down from the top of the stack, 0 being the top itself.
    pub fn peek(&self, depth: usize) -> error::Result<Cell> {
        if depth >= self.cells.len() {
            return ScriptError::StackUnderflow.into_result();
        }

        Ok(self.cells[self.cells.len() - 1 - depth])
    }

    /// How many values are on the stack?
    pub fn size(&self) -> usize {
        self.cells.len()
    }

    /// Iterate over the values from the bottom of the stack to the top.
    pub fn iter(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// The listing printed by `.s`, bottom to top, terminated by a new line.
    pub fn render(&self) -> String {
        format!("{}\n", self)
    }
}
