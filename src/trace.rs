//! Diagnostic trace sinks for the golden model.
//!
//! Tracing is chosen per buffer type, so a quiet model carries no output
//! code at all. The trait is sealed: the set of sinks is fixed here.

use core::fmt;

use libc_print::std_name::println;
use sealed::sealed;

#[sealed]
pub trait Trace {
    fn initialized() {}
    fn pushed(_data: u32, _count: usize, _wr_idx: usize) {}
    fn push_rejected(_data: u32) {}
    fn popped(_data: u32, _count: usize, _rd_idx: usize) {}
    fn pop_rejected() {}
}

/// One traced operation, rendered as a single line.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Event {
    Initialized,
    Pushed { data: u32, count: usize, wr_idx: usize },
    PushRejected { data: u32 },
    Popped { data: u32, count: usize, rd_idx: usize },
    PopRejected,
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("model: ")?;
        match *self {
            Event::Initialized => f.write_str("FIFO initialized"),
            Event::Pushed { data, count, wr_idx } => {
                write!(f, "pushed data=0x{:02x}, count={}, wptr={}", data, count, wr_idx)
            }
            Event::PushRejected { data } => write!(f, "FIFO full, cannot push data=0x{:02x}", data),
            Event::Popped { data, count, rd_idx } => {
                write!(f, "popped data=0x{:02x}, count={}, rptr={}", data, count, rd_idx)
            }
            Event::PopRejected => f.write_str("FIFO empty, cannot pop"),
        }
    }
}

/// No diagnostic output.
#[derive(Copy, Clone, Debug, Default)]
pub struct Quiet;

#[sealed]
impl Trace for Quiet {}

/// One line per operation on stdout, success or rejection.
#[derive(Copy, Clone, Debug, Default)]
pub struct Console;

#[sealed]
impl Trace for Console {
    fn initialized() {
        println!("{}", Event::Initialized);
    }

    fn pushed(data: u32, count: usize, wr_idx: usize) {
        println!("{}", Event::Pushed { data, count, wr_idx });
    }

    fn push_rejected(data: u32) {
        println!("{}", Event::PushRejected { data });
    }

    fn popped(data: u32, count: usize, rd_idx: usize) {
        println!("{}", Event::Popped { data, count, rd_idx });
    }

    fn pop_rejected() {
        println!("{}", Event::PopRejected);
    }
}
