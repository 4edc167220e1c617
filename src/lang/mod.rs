/// Module for tracking where in the original source code things were found.
pub mod source_buffer;

/// Module for turning a line of source code into a lazy stream of tokens, and for recognizing
/// which of those tokens are numeric literals.
pub mod tokenizing;
