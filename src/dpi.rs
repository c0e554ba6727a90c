//! C-ABI entry points for simulator import.
//!
//! A simulator imports these by name and calls them once per stimulus, so
//! they keep the flat integer signatures and the -1 empty value. Each call
//! locks the shared model for its whole duration.

use core::ffi::c_int;

use spin::Mutex;

use crate::trace::Console;
use crate::{GoldenFifo, RingBuffer};

/// Returned by [`fifo_pop`] when the model holds no data.
pub const FIFO_EMPTY: c_int = -1;

static FIFO: Mutex<GoldenFifo<Console>> = Mutex::new(RingBuffer::new());

#[inline]
fn flag(b: bool) -> c_int {
    if b { 1 } else { 0 }
}

#[no_mangle]
pub extern "C" fn fifo_init() {
    FIFO.lock().initialize();
}

/// Returns 1 when accepted, 0 when the model is full.
#[no_mangle]
pub extern "C" fn fifo_push(data: c_int) -> c_int {
    // Two's complement bits, so -1 stores as 0xFF
    flag(FIFO.lock().push(data as u32))
}

#[no_mangle]
pub extern "C" fn fifo_pop() -> c_int {
    match FIFO.lock().pop() {
        Some(data) => data as c_int,
        None => FIFO_EMPTY,
    }
}

#[no_mangle]
pub extern "C" fn fifo_is_empty() -> c_int {
    flag(FIFO.lock().is_empty())
}

#[no_mangle]
pub extern "C" fn fifo_is_full() -> c_int {
    flag(FIFO.lock().is_full())
}

#[no_mangle]
pub extern "C" fn fifo_get_count() -> c_int {
    FIFO.lock().occupancy() as c_int
}

/// Packed [`FifoStatus`](crate::FifoStatus) word.
#[no_mangle]
pub extern "C" fn fifo_get_status() -> u64 {
    FIFO.lock().status().all()
}
