use crate::packed_location::PackedLocation;
use crate::width_height::WidthHeight;

/// A rectangle that we want to place into the growing container.
///
/// Blocks are owned by the caller. Packing mutates them in two ways: the padding is added to the
/// block's extents, and the block is given a [`PackedLocation`] if it could be placed.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Block {
    pub(crate) whd: WidthHeight,
    pub(crate) placement: Option<PackedLocation>,
}

impl From<WidthHeight> for Block {
    fn from(whd: WidthHeight) -> Self {
        Block {
            whd,
            placement: None,
        }
    }
}

#[allow(missing_docs)]
impl Block {
    pub fn new(width: u32, height: u32) -> Self {
        Block::from(WidthHeight::new(width, height))
    }
}

#[allow(missing_docs)]
impl Block {
    pub fn width(&self) -> u32 {
        self.whd.width
    }

    pub fn height(&self) -> u32 {
        self.whd.height
    }

    pub fn whd(&self) -> WidthHeight {
        self.whd
    }

    /// Where the block was placed during the last packing, or `None` if it was rejected or has
    /// not been packed yet.
    pub fn placement(&self) -> Option<PackedLocation> {
        self.placement
    }

    pub fn is_placed(&self) -> bool {
        self.placement.is_some()
    }
}

impl Block {
    /// The extents that this block would have after adding `gap` to every side, or `None` if that
    /// would overflow.
    pub fn padded_whd(&self, gap: u32) -> Option<WidthHeight> {
        let both_sides = gap.checked_mul(2)?;

        Some(WidthHeight {
            width: self.whd.width.checked_add(both_sides)?,
            height: self.whd.height.checked_add(both_sides)?,
        })
    }

    /// Replace the block's extents with its padded extents, discarding any previous placement.
    ///
    /// Callers that later need the unpadded extents must keep their own copy.
    pub(crate) fn pad(&mut self, padded: WidthHeight) {
        self.whd = padded;
        self.placement = None;
    }
}
