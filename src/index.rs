/// Slot index into a ring of `N` entries, always in `[0, N)`.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Index<const N: usize> {
    val: usize,
}

impl<const N: usize> Index<N> {
    pub const ZERO: Index<N> = Index { val: 0 };

    /// Step to the next slot, wrapping from `N - 1` back to 0.
    #[inline]
    pub fn advance(&mut self) {
        if N.is_power_of_two() {
            // Natural wrap matches the ring size
            self.val = (self.val + 1) & (N - 1);
        } else if self.val + 1 == N {
            self.val = 0;
        } else {
            self.val += 1;
        }
    }

    #[inline]
    pub fn get(&self) -> usize {
        self.val
    }
}

#[cfg(test)]
mod tests {
    use super::Index;

    #[test]
    fn wraps_power_of_two() {
        let mut idx: Index<4> = Index::ZERO;
        for expected in [1, 2, 3, 0, 1] {
            idx.advance();
            assert_eq!(idx.get(), expected);
        }
    }

    #[test]
    fn wraps_odd_depth() {
        let mut idx: Index<3> = Index::ZERO;
        for expected in [1, 2, 0, 1, 2, 0] {
            idx.advance();
            assert_eq!(idx.get(), expected);
        }
    }

    #[test]
    fn depth_one_stays_at_zero() {
        let mut idx: Index<1> = Index::ZERO;
        idx.advance();
        idx.advance();
        assert_eq!(idx.get(), 0);
    }
}
