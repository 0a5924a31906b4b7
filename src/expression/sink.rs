//! Output destinations for stream lambdas.
//!
//! An [`OutputSink`] does not own its writer: it keeps a weak handle to a
//! writer the caller owns through `Rc<RefCell<W>>`. Lambdas holding a sink can
//! be cloned and evaluated any number of times; writes fail with
//! [`LambdaError::SinkClosed`] once the caller drops the writer.

use crate::expression::error::{LambdaError, LambdaResult};
use crate::expression::value::Value;
use log::trace;
use std::cell::RefCell;
use std::fmt;
use std::io::{self, Write};
use std::rc::{Rc, Weak};

/// Formatting directives that can be written into a stream chain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Directive {
    /// Write a line break and flush
    EndLine,
    /// Flush without writing anything
    Flush,
}

impl Directive {
    /// Apply the directive to a writer
    pub fn apply(self, out: &mut dyn Write) -> io::Result<()> {
        match self {
            Directive::EndLine => {
                out.write_all(b"\n")?;
                out.flush()
            }
            Directive::Flush => out.flush(),
        }
    }
}

impl fmt::Display for Directive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Directive::EndLine => f.write_str("endl"),
            Directive::Flush => f.write_str("flush"),
        }
    }
}

/// Non-owning handle to an output destination
#[derive(Clone)]
pub struct OutputSink {
    destination: Weak<RefCell<dyn Write>>,
}

impl OutputSink {
    /// Create a sink writing into `destination`
    pub fn new<W: Write + 'static>(destination: &Rc<RefCell<W>>) -> Self {
        let destination: Weak<RefCell<W>> = Rc::downgrade(destination);
        Self { destination }
    }

    /// Whether the writer is still alive
    pub fn is_open(&self) -> bool {
        self.destination.strong_count() > 0
    }

    /// Whether both sinks write into the same writer
    pub fn same_destination(&self, other: &OutputSink) -> bool {
        Weak::ptr_eq(&self.destination, &other.destination)
    }

    /// Write one value. Directives are applied instead of printed.
    pub fn write_value(&self, value: &Value) -> LambdaResult<()> {
        let destination = self.destination.upgrade().ok_or(LambdaError::SinkClosed)?;
        let mut out = destination
            .try_borrow_mut()
            .map_err(|_| LambdaError::SinkBusy)?;

        match value {
            Value::Directive(directive) => directive.apply(&mut *out)?,
            other => write!(out, "{}", other)?,
        }

        trace!("wrote {:?} to output sink", value);
        Ok(())
    }
}

impl PartialEq for OutputSink {
    fn eq(&self, other: &Self) -> bool {
        self.same_destination(other)
    }
}

impl fmt::Debug for OutputSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OutputSink")
            .field("open", &self.is_open())
            .finish()
    }
}
