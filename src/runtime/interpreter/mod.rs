use crate::{
    lang::{source_buffer::SourceLocation, tokenizing::Cell},
    runtime::{
        data_structures::{
            data_stack::DataStack,
            dictionary::{Dictionary, Word},
        },
        error,
    },
};
use std::{io::{BufRead, Write}, rc::Rc};

pub mod forth_interpreter;

/// The two states of the interpreter's token loop.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    /// Tokens are executed as soon as they are read.
    Interpret,

    /// Tokens are being collected into the body of a new word.
    Compile,
}

/// Trait for managing the interpreter's data stack.  Intended to be called by native words.
pub trait InterpreterStack {
    /// Use to examine the full data stack when required.  One example is for the stack dump command
    /// `.s` in the repl.
    fn stack(&self) -> &DataStack;

    /// Push a value onto the stack.  This is the primary way of sending values to words.
    fn push(&mut self, value: Cell);

    /// Pop a value from the stack.  This is the primary way of receiving outputs from words.  If
    /// the stack is empty a stack underflow error is returned.
    fn pop(&mut self) -> error::Result<Cell>;

    /// Read the top value of the stack without removing it.  If the stack is empty a stack
    /// underflow error is returned.
    fn top(&self) -> error::Result<Cell>;
}

/// Definition of a word handler function.  This is the function that is called when a native word
/// is to be executed.  Can be a lambda, a callable object or a Rust function.
pub type WordHandler = dyn Fn(&mut dyn Interpreter) -> error::Result<()>;

/// Simplify registering a native word with the interpreter.
///
/// Required parameters are, the interpreter instance to register with, the name of the word to
/// register and the word function handler to execute for the word.
#[macro_export]
macro_rules! add_native_word {
    (
        $interpreter:expr ,
        $name:expr ,
        $function:expr
    ) => {{
        use std::rc::Rc;
        use $crate::runtime::data_structures::dictionary::Word;

        $interpreter.add_word(Word::primitive($name.to_string(), Rc::new($function)));
    }};
}

/// Trait for managing and executing words known to the interpreter.
pub trait WordManagement {
    /// Add a new word to the interpreter's dictionary, replacing any word of the same name.
    fn add_word(&mut self, word: Word);

    /// Find a word in the interpreter's dictionary by name.
    fn find_word(&self, name: &str) -> Option<Rc<Word>>;

    /// The current word dictionary of words known to the interpreter.
    fn dictionary(&self) -> &Dictionary;

    /// Execute a word.  Native words run their handler, composite words run each of the words
    /// they were built from in order.  The first failure stops the word and is returned, anything
    /// done to the stack before that point stays done.
    fn execute_word(&mut self, word: &Word) -> error::Result<()>;

    /// Find and execute a word by name.  If the word is not found an error is returned.
    fn execute_word_named(&mut self, name: &str) -> error::Result<()>;
}

/// Trait for feeding source code to the interpreter.
///
/// Errors raised by the code itself are reported on the interpreter's output and do not stop
/// processing.  Only I/O failures are returned.
pub trait CodeManagement {
    /// Process one line of source code.  Interpreter state, such as a word definition in
    /// progress, carries over to the next line.
    fn process_line(&mut self, line: &str) -> error::Result<()>;

    /// Process every line read from the given reader until the input runs out or `bye` is
    /// executed.
    ///
    /// The path parameter is used to represent the source code in error reporting.  For example,
    /// standard input uses a path of "\<stdin\>".
    fn process_reader(&mut self, path: &str, reader: &mut dyn BufRead) -> error::Result<()>;

    /// Process an in memory source string, line by line.
    fn process_source(&mut self, path: &str, source: &str) -> error::Result<()> {
        self.process_reader(path, &mut source.as_bytes())
    }

    /// Read and process a source file.
    fn process_source_file(&mut self, path: &str) -> error::Result<()>;

    /// Where the token currently being processed came from.
    fn current_location(&self) -> SourceLocation;
}

/// Core interpreter trait.
///
/// This trait brings together the traits that define the core functionality of the interpreter,
/// managing the data stack, managing and executing words and processing source code.  Along with
/// that it gives words access to the output channel and the ability to end the session.
pub trait Interpreter: InterpreterStack + WordManagement + CodeManagement {
    /// Is the interpreter executing tokens or compiling a new word?
    fn mode(&self) -> Mode;

    /// The channel that words print to.
    fn output(&mut self) -> &mut dyn Write;

    /// Stop the session.  No further tokens are processed once halted.
    fn halt(&mut self);

    /// Has `bye` been executed?
    fn is_halted(&self) -> bool;
}
