use core::marker::PhantomData;

use crate::index::Index;
use crate::status::{FifoStatus, FIFO_STATUS_0};
use crate::trace::{Quiet, Trace};

/// Largest depth whose count and pointers still fit in [`FifoStatus`].
pub const MAX_DEPTH: usize = 0xFFFF;

/// Fixed-depth circular FIFO of `WIDTH`-bit words.
///
/// A full buffer refuses new data instead of overwriting it, and an empty
/// buffer reports no data. Neither case touches the ring indices.
pub struct RingBuffer<const N: usize, const WIDTH: u32, T: Trace = Quiet> {
    // this is from where we dequeue items
    rd_idx: Index<N>,
    // where we enqueue new items
    wr_idx: Index<N>,
    count: usize,
    storage: [u32; N],
    _trace: PhantomData<T>,
}

impl<const N: usize, const WIDTH: u32, T: Trace> RingBuffer<N, WIDTH, T> {
    const VALID: () = assert!(
        N >= 1 && N <= MAX_DEPTH && WIDTH >= 1 && WIDTH <= 32,
        "FIFO depth must be 1..=MAX_DEPTH and word width 1..=32 bits"
    );

    /// Mask applied to every pushed word.
    pub const WORD_MASK: u32 = if WIDTH >= 32 { u32::MAX } else { (1 << WIDTH) - 1 };

    /// Depth and width are checked when the type is instantiated; an
    /// out-of-range configuration does not build.
    ///
    /// ```compile_fail,E0080
    /// let _fifo: fifo_golden::RingBuffer<0, 8> = fifo_golden::RingBuffer::new();
    /// ```
    ///
    /// ```compile_fail,E0080
    /// let _fifo: fifo_golden::RingBuffer<4, 0> = Default::default();
    /// ```
    ///
    /// ```compile_fail,E0080
    /// let _fifo: fifo_golden::RingBuffer<4, 33> = fifo_golden::RingBuffer::new();
    /// ```
    ///
    /// ```compile_fail,E0080
    /// const DEPTH: usize = fifo_golden::MAX_DEPTH + 1;
    /// let _fifo: fifo_golden::RingBuffer<DEPTH, 8> = fifo_golden::RingBuffer::new();
    /// ```
    ///
    /// ```
    /// let fifo: fifo_golden::RingBuffer<{ fifo_golden::MAX_DEPTH }, 32> =
    ///     fifo_golden::RingBuffer::new();
    /// assert_eq!(fifo.capacity(), fifo_golden::MAX_DEPTH);
    /// ```
    #[inline]
    pub const fn new() -> Self {
        let () = Self::VALID;
        RingBuffer {
            rd_idx: Index::ZERO,
            wr_idx: Index::ZERO,
            count: 0,
            storage: [0; N],
            _trace: PhantomData,
        }
    }

    /// Reset both indices and the count, and zero every slot.
    pub fn initialize(&mut self) {
        self.rd_idx = Index::ZERO;
        self.wr_idx = Index::ZERO;
        self.count = 0;
        self.storage = [0; N];
        T::initialized();
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.count == N
    }

    #[inline]
    pub fn occupancy(&self) -> usize {
        self.count
    }

    #[inline]
    pub const fn capacity(&self) -> usize {
        N
    }

    #[inline]
    pub const fn word_mask(&self) -> u32 {
        Self::WORD_MASK
    }

    /// Slot the next accepted push lands in.
    #[inline]
    pub fn write_index(&self) -> usize {
        self.wr_idx.get()
    }

    /// Slot the next pop reads from.
    #[inline]
    pub fn read_index(&self) -> usize {
        self.rd_idx.get()
    }

    /// Store the low `WIDTH` bits of `value`.
    ///
    /// Returns `false` and leaves the buffer untouched when it is full.
    #[must_use]
    pub fn push(&mut self, value: u32) -> bool {
        if self.is_full() {
            T::push_rejected(value);
            return false;
        }
        let data = value & Self::WORD_MASK;
        self.storage[self.wr_idx.get()] = data;
        self.wr_idx.advance();
        self.count += 1;
        T::pushed(data, self.count, self.wr_idx.get());
        true
    }

    /// Remove the oldest word, or `None` when empty.
    pub fn pop(&mut self) -> Option<u32> {
        if self.is_empty() {
            T::pop_rejected();
            return None;
        }
        let data = self.storage[self.rd_idx.get()];
        self.rd_idx.advance();
        self.count -= 1;
        T::popped(data, self.count, self.rd_idx.get());
        Some(data)
    }

    /// The word the next pop would return.
    #[inline]
    pub fn peek(&self) -> Option<u32> {
        if self.is_empty() {
            None
        } else {
            Some(self.storage[self.rd_idx.get()])
        }
    }

    pub fn status(&self) -> FifoStatus {
        let mut st = FIFO_STATUS_0;
        st.set_empty(self.is_empty());
        st.set_full(self.is_full());
        // All three fit in 16 bits, bounded by MAX_DEPTH
        st.set_count(self.count as u32);
        st.set_wr_ptr(self.wr_idx.get() as u32);
        st.set_rd_ptr(self.rd_idx.get() as u32);
        st
    }
}

impl<const N: usize, const WIDTH: u32, T: Trace> Default for RingBuffer<N, WIDTH, T> {
    fn default() -> Self {
        Self::new()
    }
}
