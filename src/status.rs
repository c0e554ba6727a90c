// Packed status word, laid out like a FIFO status register so a harness can
// compare every observable field of the model against the device at once.
bitfield! {
    #[derive(Copy, Clone, Eq, PartialEq)]
    pub struct FifoStatus(u64);
    impl Debug;
    pub empty, set_empty: 0;
    pub full, set_full: 1;
    // Type of the multi-bit fields below
    u32;
    pub count, set_count: 17, 2;
    pub wr_ptr, set_wr_ptr: 33, 18;
    pub rd_ptr, set_rd_ptr: 49, 34;
    u64;
    pub all, set_all: 63, 0;
}

pub const FIFO_STATUS_0: FifoStatus = FifoStatus(0);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fields_pack_into_expected_bits() {
        let mut st = FIFO_STATUS_0;
        st.set_full(true);
        st.set_count(16);
        st.set_wr_ptr(3);
        st.set_rd_ptr(3);
        assert!(!st.empty());
        assert!(st.full());
        assert_eq!(st.all(), (1 << 1) | (16 << 2) | (3 << 18) | (3 << 34));
    }

    #[test]
    fn unpacks_raw_word() {
        let st = FifoStatus((5 << 34) | (7 << 18) | (2 << 2));
        assert_eq!(st.count(), 2);
        assert_eq!(st.wr_ptr(), 7);
        assert_eq!(st.rd_ptr(), 5);
        assert!(!st.empty() && !st.full());
    }
}
