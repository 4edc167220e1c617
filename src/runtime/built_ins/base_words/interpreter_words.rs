use crate::{
    add_native_word,
    runtime::{error, interpreter::Interpreter},
};

/// Print out the current data stack without changing it, bottom to top.
///
/// Signature: ` -- `
fn word_print_stack(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    let listing = interpreter.stack().render();

    interpreter.output().write_all(listing.as_bytes())?;
    Ok(())
}

/// Print out the current word dictionary.
///
/// Signature: ` -- `
fn word_print_dictionary(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    let listing = interpreter.dictionary().to_string();

    interpreter.output().write_all(listing.as_bytes())?;
    Ok(())
}

/// End the session.  Nothing after this word is executed, not even the rest of the word that
/// called it.
///
/// Signature: ` -- `
fn word_bye(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    interpreter.halt();
    Ok(())
}

/// Register the words that read or change the state of the interpreter itself.
pub fn register_interpreter_words(interpreter: &mut dyn Interpreter) {
    add_native_word!(interpreter, ".s", word_print_stack);
    add_native_word!(interpreter, ".w", word_print_dictionary);
    add_native_word!(interpreter, "bye", word_bye);
}
