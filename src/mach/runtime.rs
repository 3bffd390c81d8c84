use super::frame::MAX_FRAMES;
use super::{AddressTable, Frame, Functions, Hooks, Listing, Stack};
use crate::error;
use crate::lang::{Cursor, Error, Line, LineNumber};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::{BufRead, BufReader, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{debug, trace};

type Result<T> = std::result::Result<T, Error>;

/// Limit and step of an active FOR loop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForLoop {
    pub limit: f64,
    pub step: f64,
}

/// What the terminal should do after a line was entered.
#[derive(Debug, PartialEq)]
pub enum Event {
    Stopped,
    Errors(Error),
    Load(String),
    Save(String),
    Bye,
}

/// ## Interpreter state
///
/// Owns the program, the variables, and the control stacks.
/// Lines are scanned and executed directly; nothing is compiled.

pub struct Runtime {
    pub(super) listing: Listing,
    pub(super) addr: AddressTable,
    pub(super) crt_line: usize,
    pub(super) stop: bool,
    pub(super) frame: Frame,
    pub(super) frames: Stack<Frame>,
    pub(super) rstack: Stack<usize>,
    pub(super) dstack: Stack<ForLoop>,
    pub(super) functions: Functions,
    pub(super) rng: StdRng,
    pub(super) hooks: Hooks,
    pub(super) input: Box<dyn BufRead>,
    pub(super) output: Box<dyn Write>,
    pub(super) error: Box<dyn Write>,
    interrupt: Arc<AtomicBool>,
}

impl Default for Runtime {
    fn default() -> Runtime {
        Runtime::with_io(
            Box::new(BufReader::new(std::io::stdin())),
            Box::new(std::io::stdout()),
            Box::new(std::io::stderr()),
        )
    }
}

impl Runtime {
    pub fn with_io(
        input: Box<dyn BufRead>,
        output: Box<dyn Write>,
        error: Box<dyn Write>,
    ) -> Runtime {
        Runtime {
            listing: Listing::default(),
            addr: AddressTable::default(),
            crt_line: 0,
            stop: false,
            frame: Frame::default(),
            frames: Stack::with_max_len("FUNCTION CALLS NESTED TOO DEEP", MAX_FRAMES),
            rstack: Stack::new("RETURN STACK FULL"),
            dstack: Stack::new("FOR STACK FULL"),
            functions: Functions::new(),
            rng: StdRng::from_entropy(),
            hooks: Hooks::default(),
            input,
            output,
            error,
            interrupt: Arc::default(),
        }
    }

    /// Flag checked between lines; setting it breaks into a running program.
    pub fn set_interrupt(&mut self, interrupt: Arc<AtomicBool>) {
        self.interrupt = interrupt;
    }

    pub fn interrupt(&self) {
        self.interrupt.store(true, Ordering::SeqCst);
    }

    pub fn listing(&self) -> &Listing {
        &self.listing
    }

    pub fn set_listing(&mut self, listing: Listing) {
        self.listing = listing;
    }

    pub fn stopped(&self) -> bool {
        self.stop
    }

    pub fn var(&self, name: &str) -> Option<f64> {
        self.frame.vars.get(&name.to_lowercase())
    }

    pub fn set_var(&mut self, name: &str, value: f64) -> Result<()> {
        self.frame.vars.store(&name.to_lowercase(), value)
    }

    pub fn cursor(&mut self) -> &mut Cursor {
        &mut self.frame.cursor
    }

    pub fn output(&mut self) -> &mut dyn Write {
        &mut *self.output
    }

    /// Handles one line typed at the shell.
    pub fn enter(&mut self, s: &str) -> Event {
        let event = match self.command(s) {
            Ok(event) => event,
            Err(error) => Event::Errors(error),
        };
        if let Err(error) = self.output.flush() {
            return Event::Errors(error.into());
        }
        event
    }

    fn command(&mut self, s: &str) -> Result<Event> {
        if s.trim().is_empty() {
            return Ok(Event::Stopped);
        }
        if let Some(line) = Line::from_str(s)? {
            self.listing.insert(line);
            return Ok(Event::Stopped);
        }
        let mut cursor = Cursor::new(s);
        match cursor.match_keyword().as_deref() {
            Some("bye") => return Ok(Event::Bye),
            Some("list") => self.list()?,
            Some("run") => self.run()?,
            Some("continue") | Some("cont") => self.cont()?,
            Some("clear") => self.frame.vars.clear(),
            Some("new") => self.new_program(),
            Some("delete") => match cursor.match_number() {
                Some(n) => {
                    self.listing.remove(n as LineNumber);
                }
                None => return Err(error!(SyntaxError; "LINE # EXPECTED")),
            },
            Some("load") => return Ok(Event::Load(Runtime::filename(&mut cursor)?)),
            Some("save") => return Ok(Event::Save(Runtime::filename(&mut cursor)?)),
            _ => self.exec_direct(s)?,
        }
        Ok(Event::Stopped)
    }

    fn filename(cursor: &mut Cursor) -> Result<String> {
        match cursor.match_string()? {
            Some(s) => Ok(s),
            None => Err(error!(SyntaxError; "STRING EXPECTED")),
        }
    }

    pub fn list(&mut self) -> Result<()> {
        write!(self.output, "{}", self.listing)?;
        Ok(())
    }

    pub fn new_program(&mut self) {
        self.listing.clear();
        self.addr = AddressTable::default();
        self.crt_line = 0;
    }

    /// Executes a statement that is not part of the program.
    /// Errors carry the column but no line number.
    pub fn exec_direct(&mut self, s: &str) -> Result<()> {
        self.frame.cursor = Cursor::new(s);
        match self.execute_line() {
            Ok(()) => Ok(()),
            Err(error) => Err(error.in_column(self.frame.cursor.pos())),
        }
    }

    /// Starts the program from its first line with empty control stacks.
    /// Variables are kept; user functions are forgotten.
    pub fn run(&mut self) -> Result<()> {
        self.functions.forget_user();
        self.rstack.clear();
        self.dstack.clear();
        self.frames.clear();
        self.interrupt.store(false, Ordering::SeqCst);
        self.addr = AddressTable::snapshot(&self.listing);
        self.crt_line = 0;
        debug!(lines = self.addr.len(), "run");
        self.execute()
    }

    /// Resumes after STOP, a break, or an error, at the next line.
    pub fn cont(&mut self) -> Result<()> {
        if self.crt_line >= self.addr.len() {
            return Err(error!(CantContinue));
        }
        debug!(index = self.crt_line, "continue");
        self.execute()
    }

    fn execute(&mut self) -> Result<()> {
        self.stop = false;
        let result = self.execute_lines();
        self.output.flush()?;
        if let Err(error) = &result {
            debug!(%error, "execution ended");
        }
        result
    }

    fn execute_lines(&mut self) -> Result<()> {
        while self.crt_line < self.addr.len() && !self.stop {
            let line_number = match self.addr.line_number(self.crt_line) {
                Some(n) => n,
                None => return Err(error!(InternalError; "ADDRESS OUT OF RANGE")),
            };
            if self.interrupt.swap(false, Ordering::SeqCst) {
                self.stop = true;
                return Err(error!(Break, line_number));
            }
            let text = match self.listing.get(line_number) {
                Some(line) => line.text().to_string(),
                None => {
                    return Err(error!(UndefinedLine, line_number; "LINE WAS DELETED"));
                }
            };
            self.crt_line += 1;
            self.frame.cursor = Cursor::new(text);
            trace!(line = line_number, "execute");
            if let Err(error) = self.execute_line() {
                return Err(error
                    .in_line_number(line_number)
                    .in_column(self.frame.cursor.pos()));
            }
        }
        Ok(())
    }

    fn execute_line(&mut self) -> Result<()> {
        self.parse_statement()?;
        if self.frame.cursor.match_eol() {
            Ok(())
        } else {
            Err(error!(SyntaxError; "END OF STATEMENT EXPECTED"))
        }
    }
}
