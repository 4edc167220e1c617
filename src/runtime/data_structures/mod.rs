/// The data stack of integer cells that words operate on.
pub mod data_stack;

/// The dictionary module provides the word dictionary and the word definitions used by the
/// interpreter.
pub mod dictionary;
