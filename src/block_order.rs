//! Orderings for pre-sorting blocks before packing.
//!
//! The packer places blocks strictly in the order that they are given and only ever grows the
//! container along one axis at a time. A block that is both wider and taller than the container
//! is rejected, so feeding in the largest blocks first matters a great deal.

use crate::{Block, WidthHeight};

use core::cmp::Ordering;

/// Used to compare blocks when sorting them.
///
/// A larger key means that the block should be packed earlier.
pub type BlockSortKeyFn = dyn Fn(WidthHeight) -> u64;

/// The width of the block
pub fn width_key(whd: WidthHeight) -> u64 {
    whd.width as u64
}

/// The height of the block
pub fn height_key(whd: WidthHeight) -> u64 {
    whd.height as u64
}

/// The area of the block
pub fn area_key(whd: WidthHeight) -> u64 {
    whd.area()
}

/// The longer of the block's two sides
pub fn max_side_key(whd: WidthHeight) -> u64 {
    whd.width.max(whd.height) as u64
}

/// The shorter of the block's two sides
pub fn min_side_key(whd: WidthHeight) -> u64 {
    whd.width.min(whd.height) as u64
}

/// Compare two blocks using a chain of keys, largest first.
///
/// The first key that tells the blocks apart decides the order.
pub fn compare_by_keys(a: WidthHeight, b: WidthHeight, keys: &[&BlockSortKeyFn]) -> Ordering {
    for key in keys {
        match key(b).cmp(&key(a)) {
            Ordering::Equal => continue,
            o => return o,
        }
    }

    Ordering::Equal
}

const WIDTH_KEYS: [&BlockSortKeyFn; 2] = [&width_key, &height_key];
const HEIGHT_KEYS: [&BlockSortKeyFn; 2] = [&height_key, &width_key];
const AREA_KEYS: [&BlockSortKeyFn; 3] = [&area_key, &height_key, &width_key];
const MAX_SIDE_KEYS: [&BlockSortKeyFn; 4] =
    [&max_side_key, &min_side_key, &height_key, &width_key];

/// An order to pack blocks in.
///
/// Every order sorts descending and falls back to further keys on ties.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BlockOrder {
    /// Widest first, then tallest.
    Width,
    /// Tallest first, then widest.
    Height,
    /// Largest area first, then tallest, then widest.
    Area,
    /// Longest side first, then longest short side, then tallest, then widest.
    #[default]
    MaxSide,
}

impl BlockOrder {
    /// The chain of keys that this order compares with.
    pub fn keys(&self) -> &'static [&'static BlockSortKeyFn] {
        match self {
            BlockOrder::Width => &WIDTH_KEYS,
            BlockOrder::Height => &HEIGHT_KEYS,
            BlockOrder::Area => &AREA_KEYS,
            BlockOrder::MaxSide => &MAX_SIDE_KEYS,
        }
    }

    /// Compare the extents of two blocks.
    pub fn compare(&self, a: WidthHeight, b: WidthHeight) -> Ordering {
        compare_by_keys(a, b, self.keys())
    }
}

/// Sort blocks into the given order.
///
/// The sort is stable, so blocks that compare equal keep their relative order.
pub fn sort_blocks(blocks: &mut [Block], order: BlockOrder) {
    blocks.sort_by(|a, b| order.compare(a.whd, b.whd));
}
