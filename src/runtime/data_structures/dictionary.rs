impl Default for Dictionary {
    fn default() -> Self {
        Self::new()
    }
}

use crate::runtime::interpreter::WordHandler;
use std::{
    collections::HashMap,
    fmt::{self, Debug, Display, Formatter},
    rc::Rc,
};

/// What a word does when executed.
#[derive(Clone)]
pub enum WordType {
    /// The word is a native word written in Rust.
    Primitive(Rc<WordHandler>),

    /// The word was defined by the user with `:` ... `;`.  The constituent words are the
    /// definitions that were current when the word was compiled.  Later redefinitions of those
    /// names do not change this list.
    Composite(Vec<Rc<Word>>),
}

/// A named entry in the dictionary.  Words are never changed once built, redefining a name
/// replaces the whole entry.
#[derive(Clone)]
pub struct Word {
    name: String,
    word_type: WordType,
}

/// Print the word the way `.w` lists it: the name, the kind of the word, and for composite words
/// the names of the words it was built from.
impl Display for Word {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        write!(formatter, "{} {} ", self.name, self.kind_label())?;

        for word in self.definition() {
            write!(formatter, "{} ", word.name)?;
        }

        Ok(())
    }
}

impl Debug for Word {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        write!(formatter, "{}", self)
    }
}

impl Word {
    /// Create a new native word.
    pub fn primitive(name: String, handler: Rc<WordHandler>) -> Word {
        Word {
            name,
            word_type: WordType::Primitive(handler),
        }
    }

    /// Create a new user defined word from the words that make up its body.
    pub fn composite(name: String, definition: Vec<Rc<Word>>) -> Word {
        Word {
            name,
            word_type: WordType::Composite(definition),
        }
    }

    /// The name of the word.
    pub fn name(&self) -> &String {
        &self.name
    }

    /// What the word does when executed, either a native handler or a compiled body.
    pub fn word_type(&self) -> &WordType {
        &self.word_type
    }

    /// Is this one of the native words?
    pub fn is_primitive(&self) -> bool {
        matches!(self.word_type, WordType::Primitive(_))
    }

    /// The words this word was compiled from.  Native words have an empty definition.
    pub fn definition(&self) -> &[Rc<Word>] {
        match &self.word_type {
            WordType::Primitive(_) => &[],
            WordType::Composite(definition) => definition,
        }
    }

    /// The label used for the word's kind in the `.w` listing.
    pub fn kind_label(&self) -> &'static str {
        match self.word_type {
            WordType::Primitive(_) => "PRIMITIVE",
            WordType::Composite(_) => "COMPOSITE",
        }
    }
}

/// The word dictionary used by the interpreter.  We use this to keep track of all of the words
/// known to the interpreter, both native and user defined.
///
/// Entries are reference counted so that a lookup can hand out the word without keeping the
/// dictionary borrowed while the word runs, and so compiled words can capture their constituents
/// cheaply.
pub struct Dictionary {
    words: HashMap<String, Rc<Word>>,
}

/// Pretty print the dictionary, one word per line, sorted by name.
impl Display for Dictionary {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        for word in self.iter() {
            writeln!(formatter, "{}", word)?;
        }

        Ok(())
    }
}

impl Dictionary {
    /// Create a new empty dictionary.
    pub fn new() -> Dictionary {
        Dictionary {
            words: HashMap::new(),
        }
    }

    /// Insert a word into the dictionary.  Any previous word of the same name is replaced.
    pub fn insert(&mut self, word: Word) {
        let _ = self.words.insert(word.name.clone(), Rc::new(word));
    }

    /// Try to find a word in the dictionary.
    pub fn try_get(&self, name: &str) -> Option<Rc<Word>> {
        self.words.get(name).cloned()
    }

    /// How many words are defined?  Redefined names count once.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// True until the first word is registered.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate over the words, sorted by name.
    pub fn iter(&self) -> impl Iterator<Item = &Rc<Word>> {
        let mut words: Vec<&Rc<Word>> = self.words.values().collect();
        words.sort_by(|a, b| a.name.cmp(&b.name));

        words.into_iter()
    }
}
