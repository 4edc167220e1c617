/// Integer arithmetic words.
mod simple_arithmetic_words;

/// Words that manipulate the data stack.
mod stack_words;

/// Mostly words that are used to read or change the state of the interpreter.
mod interpreter_words;

use crate::runtime::{
    built_ins::base_words::{
        interpreter_words::register_interpreter_words,
        simple_arithmetic_words::register_simple_arithmetic_words,
        stack_words::register_stack_words,
    },
    interpreter::Interpreter,
};

/// Called to register all of the core words of the language.  This needs to happen before the
/// interpreter is handed any source code.
pub fn register_base_words(interpreter: &mut dyn Interpreter) {
    register_interpreter_words(interpreter);
    register_stack_words(interpreter);
    register_simple_arithmetic_words(interpreter);
}
