use thiserror::Error;



pub type Result<T> = std::result::Result<T, ScriptError>;



/// Any error that occurs while interpreting or compiling a Forth script.
///
/// Apart from `Io`, all of these are recovered from at the token boundary.  The interpreter reports
/// them and carries on with the next token or line.
#[derive(Debug, Error)]
pub enum ScriptError
{
    /// A word needed more values than the data stack holds.
    #[error("Stack underflow.")]
    StackUnderflow,

    /// `/` was asked to divide by zero.
    #[error("Division by zero.")]
    DivisionByZero,

    /// A token that isn't a number or a marker has no entry in the dictionary.
    #[error("Word {0} not found.")]
    WordNotFound(String),

    /// A word definition referenced an unknown word.  The partial definition was discarded.
    #[error("Compilation failed: word {0} not found.")]
    CompileAborted(String),

    /// Reading the source or writing the output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error)
}


impl ScriptError
{
    /// Wrap the error in a Result::Err.
    pub fn into_result<T>(self) -> Result<T>
    {
        Err(self)
    }

    /// Can the session carry on after reporting this error?
    pub fn is_recoverable(&self) -> bool
    {
        !matches!(self, ScriptError::Io(_))
    }
}
