//! Operation-by-operation checker for co-simulation.
//!
//! The harness reports what the device did for each stimulus; the scoreboard
//! replays the same stimulus on its own golden model and compares. The model
//! always advances by its own rules, so one device mismatch does not derail
//! the checks that follow.

use core::fmt;

use thiserror::Error;

use crate::ring_buffer::RingBuffer;
use crate::trace::{Quiet, Trace};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Flag {
    Full,
    Empty,
}

impl fmt::Display for Flag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Flag::Full => f.write_str("full"),
            Flag::Empty => f.write_str("empty"),
        }
    }
}

/// A disagreement between the device and the golden model.
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum Mismatch {
    #[error("push of 0x{value:02x}: model accepted={model}, device accepted={device}")]
    PushAccepted { value: u32, model: bool, device: bool },

    #[error("pop data: model={model:?}, device={device:?}")]
    PopData { model: Option<u32>, device: Option<u32> },

    #[error("{flag} flag: model={model}, device={device}")]
    StatusFlag { flag: Flag, model: bool, device: bool },

    #[error("occupancy: model={model}, device={device}")]
    Occupancy { model: usize, device: usize },
}

pub struct Scoreboard<const N: usize, const WIDTH: u32, T: Trace = Quiet> {
    model: RingBuffer<N, WIDTH, T>,
    checks: usize,
    mismatches: usize,
}

impl<const N: usize, const WIDTH: u32, T: Trace> Scoreboard<N, WIDTH, T> {
    pub const fn new() -> Self {
        Scoreboard { model: RingBuffer::new(), checks: 0, mismatches: 0 }
    }

    /// Reinitialize the model and clear the counters, as after a device reset.
    pub fn reset(&mut self) {
        self.model.initialize();
        self.checks = 0;
        self.mismatches = 0;
    }

    pub fn model(&self) -> &RingBuffer<N, WIDTH, T> {
        &self.model
    }

    /// Number of comparisons made so far.
    pub fn checks(&self) -> usize {
        self.checks
    }

    pub fn mismatches(&self) -> usize {
        self.mismatches
    }

    fn record(&mut self, result: Result<(), Mismatch>) -> Result<(), Mismatch> {
        self.checks += 1;
        if result.is_err() {
            self.mismatches += 1;
        }
        result
    }

    /// Apply a push to the model and compare acceptance with the device.
    pub fn push(&mut self, value: u32, device_accepted: bool) -> Result<(), Mismatch> {
        let model = self.model.push(value);
        let result = if model == device_accepted {
            Ok(())
        } else {
            Err(Mismatch::PushAccepted { value, model, device: device_accepted })
        };
        self.record(result)
    }

    /// Apply a pop to the model and compare with what the device returned,
    /// `None` meaning the device signalled empty.
    pub fn pop(&mut self, device: Option<u32>) -> Result<(), Mismatch> {
        let model = self.model.pop();
        let result = if model == device {
            Ok(())
        } else {
            Err(Mismatch::PopData { model, device })
        };
        self.record(result)
    }

    /// Compare the device's status outputs against the model.
    pub fn check_status(&mut self, full: bool, empty: bool, count: usize) -> Result<(), Mismatch> {
        let result = if self.model.is_full() != full {
            Err(Mismatch::StatusFlag { flag: Flag::Full, model: self.model.is_full(), device: full })
        } else if self.model.is_empty() != empty {
            Err(Mismatch::StatusFlag { flag: Flag::Empty, model: self.model.is_empty(), device: empty })
        } else if self.model.occupancy() != count {
            Err(Mismatch::Occupancy { model: self.model.occupancy(), device: count })
        } else {
            Ok(())
        };
        self.record(result)
    }
}

impl<const N: usize, const WIDTH: u32, T: Trace> Default for Scoreboard<N, WIDTH, T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use std::string::ToString;

    #[test]
    fn matching_device_passes() {
        let mut sb: Scoreboard<4, 8> = Scoreboard::new();
        assert_eq!(sb.push(0x11, true), Ok(()));
        assert_eq!(sb.push(0x122, true), Ok(()));
        assert_eq!(sb.check_status(false, false, 2), Ok(()));
        assert_eq!(sb.pop(Some(0x11)), Ok(()));
        assert_eq!(sb.pop(Some(0x22)), Ok(()));
        assert_eq!(sb.pop(None), Ok(()));
        assert_eq!(sb.check_status(false, true, 0), Ok(()));
        assert_eq!(sb.checks(), 7);
        assert_eq!(sb.mismatches(), 0);
    }

    #[test]
    fn device_overwriting_when_full_is_caught() {
        let mut sb: Scoreboard<2, 8> = Scoreboard::new();
        assert!(sb.push(1, true).is_ok());
        assert!(sb.push(2, true).is_ok());
        assert_eq!(
            sb.push(3, true),
            Err(Mismatch::PushAccepted { value: 3, model: false, device: true })
        );
        // Model kept its own state
        assert_eq!(sb.model().occupancy(), 2);
        assert_eq!(
            sb.check_status(true, false, 3),
            Err(Mismatch::Occupancy { model: 2, device: 3 })
        );
        assert_eq!(sb.mismatches(), 2);
    }

    #[test]
    fn wrong_data_and_flags_are_reported() {
        let mut sb: Scoreboard<4, 8> = Scoreboard::new();
        assert!(sb.push(0xAB, true).is_ok());
        let err = sb.pop(Some(0xBA)).unwrap_err();
        assert_eq!(err, Mismatch::PopData { model: Some(0xAB), device: Some(0xBA) });
        assert_eq!(err.to_string(), "pop data: model=Some(171), device=Some(186)");

        let err = sb.check_status(false, false, 0).unwrap_err();
        assert_eq!(err.to_string(), "empty flag: model=true, device=false");
    }

    #[test]
    fn reset_clears_model_and_counters() {
        let mut sb: Scoreboard<4, 8> = Scoreboard::default();
        assert!(sb.push(5, false).is_err());
        sb.reset();
        assert_eq!(sb.checks(), 0);
        assert_eq!(sb.mismatches(), 0);
        assert!(sb.model().is_empty());
    }
}
