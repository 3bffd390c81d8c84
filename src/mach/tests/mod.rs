use crate::mach::{Event, Runtime};
use std::cell::RefCell;
use std::io::Write;
use std::rc::Rc;


#[derive(Clone, Default)]
struct Capture(Rc<RefCell<Vec<u8>>>);

impl Capture {
    fn take(&self) -> String {
        let bytes = std::mem::take(&mut *self.0.borrow_mut());
        String::from_utf8_lossy(&bytes).into_owned()
    }
}

impl Write for Capture {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }
    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

fn runtime(input: &str) -> (Runtime, Capture) {
    let output = Capture::default();
    let r = Runtime::with_io(
        Box::new(std::io::Cursor::new(input.as_bytes().to_vec())),
        Box::new(output.clone()),
        Box::new(Capture::default()),
    );
    (r, output)
}

fn run(r: &mut Runtime, output: &Capture, s: &str) -> String {
    let mut out = String::new();
    if let Event::Errors(error) = r.enter(s) {
        out.push_str(&output.take());
        out.push_str(&format!("?{}\n", error));
        return out;
    }
    out.push_str(&output.take());
    out
}
