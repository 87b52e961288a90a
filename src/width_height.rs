/// The extents of a rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Ord, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[allow(missing_docs)]
pub struct WidthHeight {
    pub width: u32,
    pub height: u32,
}

#[allow(missing_docs)]
impl WidthHeight {
    pub fn new(width: u32, height: u32) -> Self {
        WidthHeight { width, height }
    }

    pub fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    /// Whether or not a rectangle of size `other` fits inside of a rectangle of this size.
    pub fn can_contain(&self, other: WidthHeight) -> bool {
        other.width <= self.width && other.height <= self.height
    }
}

impl From<(u32, u32)> for WidthHeight {
    fn from((width, height): (u32, u32)) -> Self {
        WidthHeight { width, height }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Verify that the area does not overflow for large extents.
    #[test]
    fn area_of_large_extents() {
        let whd = WidthHeight::new(u32::MAX, 2);

        assert_eq!(whd.area(), u32::MAX as u64 * 2);
    }

    /// Verify that a rectangle contains another rectangle of the same size, but not one that is
    /// larger along either axis.
    #[test]
    fn can_contain() {
        let container = WidthHeight::new(10, 20);

        assert!(container.can_contain(WidthHeight::new(10, 20)));
        assert!(container.can_contain(WidthHeight::new(0, 0)));
        assert!(!container.can_contain(WidthHeight::new(11, 20)));
        assert!(!container.can_contain(WidthHeight::new(10, 21)));
    }
}
