mod fixed_bitset;
mod primitives;

pub use fixed_bitset::{FixedBitset, FixedBitsetIter};
pub use primitives::{bit_range, highest_set, lowest_set, popcount};
