use crate::{
    add_native_word,
    runtime::{
        error::{self, ScriptError},
        interpreter::Interpreter,
    },
};

/// Duplicate the top value on the data stack.
///
/// Signature: `value -- value value`
fn word_dup(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    let value = interpreter.top()?;

    interpreter.push(value);
    Ok(())
}

/// Drop the top value on the data stack.
///
/// Signature: `value -- `
fn word_drop(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    let _ = interpreter.pop()?;

    Ok(())
}

/// Make a copy of the second value and push it on top.  The stack is left alone if there are
/// fewer than two values.
///
/// Signature: `a b -- a b a`
fn word_over(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    let stack = interpreter.stack();

    if stack.size() < 2 {
        return ScriptError::StackUnderflow.into_result();
    }

    let a = stack.peek(1)?;

    interpreter.push(a);
    Ok(())
}

/// Register the stack manipulation words.
pub fn register_stack_words(interpreter: &mut dyn Interpreter) {
    add_native_word!(interpreter, "dup", word_dup);
    add_native_word!(interpreter, "drop", word_drop);
    add_native_word!(interpreter, "over", word_over);
}
