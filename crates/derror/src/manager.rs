//! Process-wide error logging.
//!
//! [`ErrManager`] owns the debug flag and the sink. Configure once, then
//! share: the severity methods take `&self` and the sink is mutex-guarded,
//! so a single manager serves every handler thread. Reconfiguration after
//! first use is not supported.

use std::io::{self, Write};
use std::process;
use std::sync::Mutex;

use crate::envelope::Envelope;

/// Renders envelopes and writes them at three severities.
///
/// With `debug(true)` the rendered line names the construction site;
/// production output carries only the private text, context and code.
///
/// ```rust
/// use derror::{std_err, ErrManager};
/// use std::io;
///
/// let em = ErrManager::new().debug(true);
/// let env = std_err!(io::Error::new(io::ErrorKind::TimedOut, "db timeout"));
/// em.println(&env);
/// ```
pub struct ErrManager {
    debug: bool,
    sink:  Mutex<Box<dyn Write + Send>>,
}

impl ErrManager {
    /// Manager with debug rendering off, logging to stderr.
    pub fn new() -> Self {
        Self {
            debug: false,
            sink:  Mutex::new(Box::new(io::stderr())),
        }
    }

    /// Select verbose rendering. Off by default.
    pub fn debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Redirect rendered lines to `sink`. Defaults to stderr.
    pub fn logger<W>(mut self, sink: W) -> Self
    where
        W: Write + Send + 'static,
    {
        self.sink = Mutex::new(Box::new(sink));
        self
    }

    /// True if debug rendering is selected.
    pub fn debug_enabled(&self) -> bool {
        self.debug
    }

    /// Render and write, then return.
    pub fn println(&self, err: &Envelope) {
        self.emit(err);
    }

    /// Render and write, then terminate the process. Non-recoverable; the
    /// sink is flushed before exit.
    pub fn fatalln(&self, err: &Envelope) -> ! {
        self.emit(err);
        process::exit(1);
    }

    /// Render and write, then unwind with the rendered line as the panic
    /// payload. Interceptable by an enclosing `catch_unwind`.
    pub fn panicln(&self, err: &Envelope) -> ! {
        let line = self.emit(err);
        panic!("{}", line);
    }

    /// Write one rendered line. Sink failures are the sink's concern; the
    /// write is flushed so the terminal severities lose nothing.
    fn emit(&self, err: &Envelope) -> String {
        let line = err.render(self.debug);
        if let Ok(mut sink) = self.sink.lock() {
            let _ = sink.write_all(line.as_bytes());
            let _ = sink.write_all(b"\n");
            let _ = sink.flush();
        }
        line
    }
}

impl Default for ErrManager {
    fn default() -> Self {
        Self::new()
    }
}
