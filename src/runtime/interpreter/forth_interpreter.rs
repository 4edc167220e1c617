use std::{ fs::File,
           io::{ stdout,
                 BufRead,
                 BufReader,
                 Stdout,
                 Write },
           rc::Rc };
use tracing::{ debug,
               info,
               trace };
use crate::{ lang::{ source_buffer::SourceLocation,
                     tokenizing::{ tokenize,
                                   Cell,
                                   Token,
                                   Tokens } },
             runtime::{ data_structures::{ data_stack::DataStack,
                                           dictionary::{ Dictionary,
                                                         Word,
                                                         WordType } },
                        error::{ self,
                                 ScriptError },
                        interpreter::{ CodeManagement,
                                       Interpreter,
                                       InterpreterStack,
                                       Mode,
                                       WordManagement } } };



/// Starts the definition of a new word.
const DEFINITION_START: &str = ":";

/// Ends the definition of a new word.
const DEFINITION_END: &str = ";";

/// Opens a comment.
const COMMENT_START: &str = "(";

/// Closes a comment.
const COMMENT_END: &str = ")";



/// A word definition that is still being compiled.
struct Construction
{
    /// The name of the new word, once the token after `:` has been read.
    name: Option<String>,

    /// The words making up the body so far.
    definition: Vec<Rc<Word>>
}



/// The core interpreter implementation.  Holds the data stack, the word dictionary and the state of
/// the interpret/compile token loop, and prints everything words output to `W`.
pub struct ForthInterpreter<W: Write = Stdout>
{
    /// The data stack used by the interpreter.
    stack: DataStack,

    /// The dictionary of words known by the interpreter.
    dictionary: Dictionary,

    /// The word currently being compiled.  While this is set the interpreter is in compile mode.
    construction: Option<Construction>,

    /// Where words print to, and where errors are reported.
    output: W,

    /// Set by `bye`, once set no more tokens are processed.
    halted: bool,

    /// The path or description of the source being processed.
    path: String,

    /// The 1 based line number of the line being processed.
    line: usize,

    /// The 1 based column of the token being processed.
    column: usize
}


impl<W: Write> Interpreter for ForthInterpreter<W>
{
    fn mode(&self) -> Mode
    {
        if self.construction.is_some()
        {
            Mode::Compile
        }
        else
        {
            Mode::Interpret
        }
    }

    fn output(&mut self) -> &mut dyn Write
    {
        &mut self.output
    }

    fn halt(&mut self)
    {
        debug!("Halting the interpreter.");
        self.halted = true;
    }

    fn is_halted(&self) -> bool
    {
        self.halted
    }
}


impl<W: Write> InterpreterStack for ForthInterpreter<W>
{
    fn stack(&self) -> &DataStack
    {
        &self.stack
    }

    fn push(&mut self, value: Cell)
    {
        self.stack.push(value);
    }

    fn pop(&mut self) -> error::Result<Cell>
    {
        self.stack.pop()
    }

    fn top(&self) -> error::Result<Cell>
    {
        self.stack.top()
    }
}


impl<W: Write> WordManagement for ForthInterpreter<W>
{
    fn add_word(&mut self, word: Word)
    {
        trace!(word = %word.name(), kind = word.kind_label(), "Adding word.");
        self.dictionary.insert(word);
    }

    fn find_word(&self, name: &str) -> Option<Rc<Word>>
    {
        self.dictionary.try_get(name)
    }

    fn dictionary(&self) -> &Dictionary
    {
        &self.dictionary
    }

    fn execute_word(&mut self, word: &Word) -> error::Result<()>
    {
        trace!(word = %word.name(), "Executing word.");

        match word.word_type()
        {
            WordType::Primitive(handler) => (**handler)(self),

            WordType::Composite(definition) =>
                {
                    for constituent in definition.iter()
                    {
                        if self.halted
                        {
                            break;
                        }

                        self.execute_word(constituent)?;
                    }

                    Ok(())
                }
        }
    }

    fn execute_word_named(&mut self, name: &str) -> error::Result<()>
    {
        match self.dictionary.try_get(name)
        {
            Some(word) => self.execute_word(&word),
            None => ScriptError::WordNotFound(name.to_string()).into_result()
        }
    }
}


impl<W: Write> CodeManagement for ForthInterpreter<W>
{
    fn process_line(&mut self, line: &str) -> error::Result<()>
    {
        self.line += 1;
        self.column = 1;

        let mut tokens = tokenize(line);

        while !self.halted
        {
            let Some(token) = tokens.next() else { break };

            self.column = token.column();

            let result =
                match self.mode()
                {
                    Mode::Interpret => self.interpret_token(token, &mut tokens),
                    Mode::Compile   => self.compile_token(token)
                };

            if let Err(script_error) = result
            {
                let aborted = matches!(script_error, ScriptError::CompileAborted(_));

                self.report(script_error)?;

                // A failed definition takes the rest of its line with it.
                if aborted
                {
                    break;
                }
            }
        }

        self.output.flush()?;
        Ok(())
    }

    fn process_reader(&mut self, path: &str, reader: &mut dyn BufRead) -> error::Result<()>
    {
        info!(path, "Processing source.");

        self.path = path.to_string();
        self.line = 0;

        let mut line = Vec::new();

        while !self.halted
        {
            line.clear();

            if reader.read_until(b'\n', &mut line)? == 0
            {
                break;
            }

            // Bytes that aren't valid UTF-8 become replacement characters, they never end the
            // session.
            self.process_line(&String::from_utf8_lossy(&line))?;
        }

        if let Some(construction) = &self.construction
        {
            debug!(name = ?construction.name, "Input ended inside of a word definition.");
        }

        info!(path, lines = self.line, halted = self.halted, "Finished processing source.");
        Ok(())
    }

    fn process_source_file(&mut self, path: &str) -> error::Result<()>
    {
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);

        self.process_reader(path, &mut reader)
    }

    fn current_location(&self) -> SourceLocation
    {
        SourceLocation::new(&self.path, self.line, self.column)
    }
}


// Helper methods for the token loop.
impl<W: Write> ForthInterpreter<W>
{
    fn interpret_token(&mut self, token: Token, tokens: &mut Tokens) -> error::Result<()>
    {
        if let Some(value) = token.number()
        {
            self.push(value);
            return Ok(());
        }

        match token.text()
        {
            DEFINITION_START =>
                {
                    debug!(location = %self.current_location(), "Starting a new word definition.");

                    self.construction = Some(Construction { name: None, definition: Vec::new() });
                    Ok(())
                },

            // Comments end with the line they started on, even when left unterminated.
            COMMENT_START =>
                {
                    let _ = tokens.find(|skipped| skipped.is(COMMENT_END));
                    Ok(())
                },

            name => self.execute_word_named(name)
        }
    }

    fn compile_token(&mut self, token: Token) -> error::Result<()>
    {
        let Some(construction) = self.construction.as_mut() else { return Ok(()) };

        if construction.name.is_none()
        {
            construction.name = Some(token.text().to_string());
            return Ok(());
        }

        if token.is(DEFINITION_END)
        {
            self.finish_construction();
            return Ok(());
        }

        match self.dictionary.try_get(token.text())
        {
            Some(word) =>
                {
                    construction.definition.push(word);
                    Ok(())
                },

            None =>
                {
                    debug!(name = ?construction.name,
                           missing = token.text(),
                           "Discarding word definition.");

                    self.construction = None;
                    ScriptError::CompileAborted(token.text().to_string()).into_result()
                }
        }
    }

    fn finish_construction(&mut self)
    {
        if let Some(Construction { name: Some(name), definition }) = self.construction.take()
        {
            debug!(name = %name, words = definition.len(), "Defined new word.");
            self.add_word(Word::composite(name, definition));
        }
    }

    /// Report a script error on the output and carry on.  I/O errors can't be reported this way,
    /// those are passed back up to the caller.
    fn report(&mut self, script_error: ScriptError) -> error::Result<()>
    {
        if !script_error.is_recoverable()
        {
            return Err(script_error);
        }

        let location = self.current_location();

        debug!(%location, error = %script_error, "Reporting script error.");
        writeln!(self.output, "{}: {}", location, script_error)?;

        Ok(())
    }
}


impl<W: Write> ForthInterpreter<W>
{
    /// Create an interpreter that prints to the given writer.  The dictionary starts out empty,
    /// register the built-in words before processing any source.
    pub fn with_output(output: W) -> ForthInterpreter<W>
    {
        ForthInterpreter
            {
                stack: DataStack::new(),

                dictionary: Dictionary::new(),
                construction: None,

                output,
                halted: false,

                path: "<input>".to_string(),
                line: 0,
                column: 1
            }
    }

    /// The writer the interpreter prints to.
    pub fn writer(&self) -> &W
    {
        &self.output
    }

    /// Consume the interpreter, returning the writer it printed to.
    pub fn into_writer(self) -> W
    {
        self.output
    }
}


impl ForthInterpreter<Stdout>
{
    /// Create an interpreter that prints to standard output.
    pub fn new() -> ForthInterpreter<Stdout>
    {
        ForthInterpreter::with_output(stdout())
    }
}


impl Default for ForthInterpreter<Stdout> {
    fn default() -> Self {
        Self::new()
    }
}
