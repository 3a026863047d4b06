//! Bit-indexed addressing of cell corners and children.
//!
//! Corner `i` of a `D`-dimensional cell sits on the high side of axis `d` iff
//! bit `d` of `i` is set. Children are numbered the same way, so the child
//! covering corner `i` has index `i`.

/// Low or high side of a cell along one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Low,
    High,
}

impl Side {
    /// Both sides, low first.
    pub const BOTH: [Side; 2] = [Side::Low, Side::High];

    pub const fn from_bit(bit: usize) -> Self {
        if bit & 1 == 0 { Side::Low } else { Side::High }
    }

    pub const fn bit(self) -> usize {
        match self {
            Side::Low => 0,
            Side::High => 1,
        }
    }

    pub const fn opposite(self) -> Self {
        match self {
            Side::Low => Side::High,
            Side::High => Side::Low,
        }
    }
}

/// Index of a corner (or child) of a `D`-dimensional cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CornerMask<const D: usize>(usize);

impl<const D: usize> CornerMask<D> {
    /// Number of corners, equivalently children, of a cell.
    pub const COUNT: usize = 1 << D;

    pub const fn enumerate() -> CornerMaskIter<D> {
        CornerMaskIter { cursor: 0 }
    }

    pub const fn from_linear(linear: usize) -> Self {
        Self(linear)
    }

    pub const fn to_linear(self) -> usize {
        self.0
    }

    pub const fn is_set(self, axis: usize) -> bool {
        (self.0 >> axis) & 1 == 1
    }

    /// Side of the cell this corner lies on along `axis`.
    pub const fn side(self, axis: usize) -> Side {
        Side::from_bit(self.0 >> axis)
    }

    /// The corner mirrored across the midplane of `axis`.
    pub const fn toggled(self, axis: usize) -> Self {
        Self(self.0 ^ (1 << axis))
    }

    /// Corners lying on `side` along `axis`, in ascending order.
    pub fn on_side(axis: usize, side: Side) -> impl Iterator<Item = Self> {
        Self::enumerate().filter(move |mask| mask.side(axis) == side)
    }
}

pub struct CornerMaskIter<const D: usize> {
    cursor: usize,
}

impl<const D: usize> Iterator for CornerMaskIter<D> {
    type Item = CornerMask<D>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.cursor >= CornerMask::<D>::COUNT {
            return None;
        }

        let result = self.cursor;
        self.cursor += 1;
        Some(CornerMask::from_linear(result))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = CornerMask::<D>::COUNT.saturating_sub(self.cursor);
        (remaining, Some(remaining))
    }
}

impl<const D: usize> ExactSizeIterator for CornerMaskIter<D> {}
