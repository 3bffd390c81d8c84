use basic::mach::{Event, Runtime};
use std::cell::RefCell;
use std::io::Write;
use std::rc::Rc;

/// Writer whose bytes stay readable after it is boxed into a Runtime.
#[derive(Clone, Default)]
pub struct Shared(Rc<RefCell<Vec<u8>>>);

impl Shared {
    pub fn take(&self) -> String {
        let bytes = std::mem::take(&mut *self.0.borrow_mut());
        String::from_utf8_lossy(&bytes).into_owned()
    }
}

impl Write for Shared {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }
    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

pub struct Basic {
    pub runtime: Runtime,
    output: Shared,
    warnings: Shared,
}

impl Basic {
    pub fn new() -> Basic {
        Basic::with_input("")
    }

    /// `input` is what INPUT statements will read.
    pub fn with_input(input: &str) -> Basic {
        let output = Shared::default();
        let warnings = Shared::default();
        let runtime = Runtime::with_io(
            Box::new(std::io::Cursor::new(input.as_bytes().to_vec())),
            Box::new(output.clone()),
            Box::new(warnings.clone()),
        );
        Basic {
            runtime,
            output,
            warnings,
        }
    }

    pub fn warnings(&self) -> String {
        self.warnings.take()
    }

    pub fn var(&self, name: &str) -> Option<f64> {
        self.runtime.var(name)
    }
}

/// Enters `line` and returns everything printed, errors included.
pub fn exec(b: &mut Basic, line: &str) -> String {
    let event = b.runtime.enter(line);
    let mut s = b.output.take();
    if let Event::Errors(error) = event {
        s.push_str(&format!("?{}\n", error));
    }
    s
}

/// Enters every line of a program.
pub fn program(b: &mut Basic, lines: &[&str]) {
    for line in lines {
        assert_eq!(exec(b, line), "", "{}", line);
    }
}
