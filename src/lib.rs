//! Golden reference model of a fixed-depth circular FIFO.
//!
//! Mirrors what a hardware FIFO is expected to do so a verification harness
//! can check the device against it: pushes into a full FIFO are refused, pops
//! from an empty one return nothing, and every word is truncated to the bus
//! width on the way in.
#![cfg_attr(not(test), no_std)]

#[macro_use]
extern crate bitfield;

pub mod index;
pub mod ring_buffer;
pub mod scoreboard;
pub mod status;
pub mod trace;

#[cfg(feature = "dpi")]
pub mod dpi;

pub use ring_buffer::{RingBuffer, MAX_DEPTH};
pub use scoreboard::{Flag, Mismatch, Scoreboard};
pub use status::FifoStatus;
pub use trace::{Console, Quiet, Trace};

/// FIFO depth of the device under test (ASIZE = 4).
pub const FIFO_DEPTH: usize = 16;
/// Data bus width of the device under test (DSIZE = 8).
pub const DATA_WIDTH: u32 = 8;

/// The model matching the device under test.
pub type GoldenFifo<T = Quiet> = RingBuffer<FIFO_DEPTH, DATA_WIDTH, T>;
