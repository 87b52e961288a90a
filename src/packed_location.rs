use crate::width_height::WidthHeight;

mod overlaps;

/// Describes where a block was packed inside of the growing container.
///
/// The extents are the padded extents that were reserved for the block, not the size that the
/// caller originally requested.
#[derive(Debug, PartialEq, Eq, Copy, Clone, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PackedLocation {
    pub(crate) x: u32,
    pub(crate) y: u32,
    pub(crate) whd: WidthHeight,
}

#[allow(missing_docs)]
impl PackedLocation {
    pub fn new(x: u32, y: u32, whd: WidthHeight) -> Self {
        PackedLocation { x, y, whd }
    }

    pub fn x(&self) -> u32 {
        self.x
    }

    pub fn y(&self) -> u32 {
        self.y
    }

    pub fn width(&self) -> u32 {
        self.whd.width
    }

    pub fn height(&self) -> u32 {
        self.whd.height
    }

    pub fn whd(&self) -> WidthHeight {
        self.whd
    }
}
