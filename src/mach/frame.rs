use super::{Runtime, Var};
use crate::lang::{Cursor, Error};

type Result<T> = std::result::Result<T, Error>;

/// Deepest nesting of user function calls.
pub const MAX_FRAMES: usize = 100;

/// ## Execution frame
///
/// The line being scanned and the variables it sees. A user function
/// call runs in a frame of its own holding only its arguments.

#[derive(Debug, Default)]
pub struct Frame {
    pub cursor: Cursor,
    pub vars: Var,
}

impl Frame {
    pub fn new(cursor: Cursor, vars: Var) -> Frame {
        Frame { cursor, vars }
    }
}

impl Runtime {
    /// Runs `f` inside `frame`. The caller's frame is back in place
    /// when this returns, whether `f` succeeded or not.
    pub(super) fn with_frame<T, F>(&mut self, frame: Frame, f: F) -> Result<T>
    where
        F: FnOnce(&mut Runtime) -> Result<T>,
    {
        if self.frames.is_full() {
            return Err(self.frames.overflow_error());
        }
        let caller = std::mem::replace(&mut self.frame, frame);
        self.frames.push(caller)?;
        let result = f(self);
        if let Ok(caller) = self.frames.pop() {
            self.frame = caller;
        }
        result
    }
}
