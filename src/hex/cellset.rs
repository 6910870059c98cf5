use crate::hex::bits::FixedBitset;
use crate::hex::error::Result;

/// Board side length implied by a cell count, found by linear search for
/// the integer square root. `N` is always `S*S` by construction of the
/// type aliases in `sizes.rs`, so this always terminates exactly.
pub const fn board_side(n: u32) -> u32 {
    let mut s = 1u32;
    while s * s < n {
        s += 1;
    }
    s
}

/// `block | (block << block_size) | (block << 2*block_size) | ...`,
/// `count` repetitions, confined to a single 64-bit lane.
const fn repeat_block(block: u64, block_size: u32, count: u32) -> u64 {
    let mut acc = 0u64;
    let mut i = 0u32;
    while i < count {
        let shift = i * block_size;
        if shift < 64 {
            acc |= block << shift;
        }
        i += 1;
    }
    acc
}

/// A `FixedBitset<N>` plus the board's adjacency geometry: edges and
/// neighbours, where `N` is always a perfect square `S*S`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CellSet<const N: u32>(FixedBitset<N>);

impl<const N: u32> CellSet<N> {
    const S: u32 = board_side(N);

    pub fn empty() -> Self {
        CellSet(FixedBitset::empty())
    }

    pub fn universe() -> Self {
        CellSet(FixedBitset::universe())
    }

    pub fn from_bitset(fb: FixedBitset<N>) -> Self {
        CellSet(fb)
    }

    pub fn bitset(&self) -> FixedBitset<N> {
        self.0
    }

    pub fn board_side() -> u32 {
        Self::S
    }

    /// The top row: cells `0..S`.
    pub fn top() -> Self {
        CellSet(FixedBitset::from_u64(repeat_block(1, 1, Self::S)))
    }

    /// The bottom row: `top()` shifted up by `S*(S-1)` cells.
    pub fn bottom() -> Self {
        CellSet(Self::top().0.shl(Self::S * (Self::S - 1)))
    }

    /// The leftmost column: bit 0 of every row.
    pub fn left() -> Self {
        let mut fb = FixedBitset::empty();
        for r in 0..Self::S {
            fb.set(r * Self::S).expect("row index within bounds by construction");
        }
        CellSet(fb)
    }

    /// The rightmost column: bit `S-1` of every row.
    pub fn right() -> Self {
        let mut fb = FixedBitset::empty();
        for r in 0..Self::S {
            fb.set(r * Self::S + (Self::S - 1)).expect("row index within bounds by construction");
        }
        CellSet(fb)
    }

    pub fn any(&self) -> bool {
        self.0.any()
    }

    pub fn none(&self) -> bool {
        self.0.none()
    }

    pub fn count(&self) -> u32 {
        self.0.count()
    }

    pub fn test(&self, i: u32) -> bool {
        self.0.test(i)
    }

    pub fn set(&mut self, i: u32) -> Result<&mut Self> {
        self.0.set(i)?;
        Ok(self)
    }

    pub fn min(&self) -> Result<u32> {
        self.0.min()
    }

    pub fn iter(&self) -> impl Iterator<Item = u32> {
        self.0.iter()
    }

    /// Hex adjacency: the six neighbours of each cell in `s`, excluding `s`
    /// itself where it is its own neighbour's neighbour only by coincidence
    /// (the formula never adds a cell back to its own source row/column
    /// incorrectly because wrap-risk terms are masked by `~left()`/`~right()`
    /// before being OR'd in).
    pub fn neighbors(&self) -> Self {
        let s = self.0;
        let left = Self::left().0;
        let right = Self::right().0;
        let side = Self::S;

        let up = s.shr(side);
        let down = s.shl(side);
        let up_left = (s.shr(side - 1) | s.shl(1)) & !left;
        let down_right = (s.shl(side - 1) | s.shr(1)) & !right;

        CellSet(up | up_left | down_right | down)
    }

    /// Same computation as `neighbors`, but built from `fast_lsh`/`fast_not`
    /// so chained shifts and complements skip redundant masking; the one
    /// `clean()` at the end is the single canonicalisation point.
    pub fn fast_neighbors(&self) -> Self {
        let s = self.0;
        let left = Self::left().0;
        let right = Self::right().0;
        let side = Self::S;

        let up = s.shr(side);
        let down = s.fast_lsh(side);
        let up_left = (s.shr(side - 1) | s.fast_lsh(1)) & left.fast_not();
        let down_right = (s.fast_lsh(side - 1) | s.shr(1)) & right.fast_not();

        CellSet((up | up_left | down_right | down).clean())
    }
}

impl<const N: u32> std::ops::BitAnd for CellSet<N> {
    type Output = Self;
    fn bitand(self, rhs: Self) -> Self {
        CellSet(self.0 & rhs.0)
    }
}

impl<const N: u32> std::ops::BitOr for CellSet<N> {
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        CellSet(self.0 | rhs.0)
    }
}

impl<const N: u32> std::ops::Sub for CellSet<N> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        CellSet(self.0 - rhs.0)
    }
}

impl<const N: u32> std::ops::Not for CellSet<N> {
    type Output = Self;
    fn not(self) -> Self {
        CellSet(!self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hex::sizes::{CellSet3, CellSet4};

    #[test]
    fn board_side_recovers_perfect_squares() {
        assert_eq!(board_side(1), 1);
        assert_eq!(board_side(9), 3);
        assert_eq!(board_side(169), 13);
    }

    #[test]
    fn edges_for_side_3() {
        // Board:
        // 0 1 2
        // 3 4 5
        // 6 7 8
        assert_eq!(CellSet3::top().iter().collect::<Vec<_>>(), vec![0, 1, 2]);
        assert_eq!(CellSet3::bottom().iter().collect::<Vec<_>>(), vec![6, 7, 8]);
        assert_eq!(CellSet3::left().iter().collect::<Vec<_>>(), vec![0, 3, 6]);
        assert_eq!(CellSet3::right().iter().collect::<Vec<_>>(), vec![2, 5, 8]);
    }

    #[test]
    fn neighbours_of_corner_cell_side_4() {
        // Cell 0 (top-left) on a 4x4 board has neighbours 1 (right) and
        // 4 (down) only, plus the bridge-adjacent set used elsewhere; the
        // raw Hex adjacency for the corner is {1, 4}.
        let mut s = CellSet4::empty();
        s.set(0).unwrap();
        let n = s.neighbors();
        assert_eq!(n.iter().collect::<Vec<_>>(), vec![1, 4]);
    }

    #[test]
    fn fast_and_standard_neighbours_agree() {
        let mut s = CellSet4::empty();
        s.set(5).unwrap();
        s.set(10).unwrap();
        assert_eq!(s.neighbors(), s.fast_neighbors());
    }

    #[test]
    fn neighbour_symmetry() {
        let side = CellSet4::board_side();
        for i in 0..(side * side) {
            for j in 0..(side * side) {
                let mut si = CellSet4::empty();
                si.set(i).unwrap();
                let mut sj = CellSet4::empty();
                sj.set(j).unwrap();
                assert_eq!(si.neighbors().test(j), sj.neighbors().test(i), "i={i} j={j}");
            }
        }
    }
}
