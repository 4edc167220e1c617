/// The core words of the language.
pub mod base_words;
