use crate::{
    add_native_word,
    lang::tokenizing::Cell,
    runtime::{
        error::{self, ScriptError},
        interpreter::Interpreter,
    },
};

/// Pop the two operands of a binary operator, the first value popped is the top of the stack.
fn pop_operands(interpreter: &mut dyn Interpreter) -> error::Result<(Cell, Cell)> {
    let a = interpreter.pop()?;
    let b = interpreter.pop()?;

    Ok((a, b))
}

/// Signature: `b a -- b+a`
fn word_add(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    let (a, b) = pop_operands(interpreter)?;

    interpreter.push(b.wrapping_add(a));
    Ok(())
}

/// Subtract the top value from the one below it.
///
/// Signature: `b a -- b-a`
fn word_subtract(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    let (a, b) = pop_operands(interpreter)?;

    interpreter.push(b.wrapping_sub(a));
    Ok(())
}

/// Signature: `b a -- b*a`
fn word_multiply(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    let (a, b) = pop_operands(interpreter)?;

    interpreter.push(b.wrapping_mul(a));
    Ok(())
}

/// Divide the second value by the top value, truncating towards zero.  Both operands are consumed
/// even when the divisor is zero.
///
/// Signature: `b a -- b/a`
fn word_divide(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    let (a, b) = pop_operands(interpreter)?;

    if a == 0 {
        return ScriptError::DivisionByZero.into_result();
    }

    interpreter.push(b.wrapping_div(a));
    Ok(())
}

/// Register the integer arithmetic words.
pub fn register_simple_arithmetic_words(interpreter: &mut dyn Interpreter) {
    add_native_word!(interpreter, "+", word_add);
    add_native_word!(interpreter, "-", word_subtract);
    add_native_word!(interpreter, "*", word_multiply);
    add_native_word!(interpreter, "/", word_divide);
}
