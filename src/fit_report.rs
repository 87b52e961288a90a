use crate::packed_location::PackedLocation;
use crate::width_height::WidthHeight;

/// A summary of a single packing.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FitReport {
    pub(crate) placed: usize,
    pub(crate) rejected: usize,
    pub(crate) container: WidthHeight,
    pub(crate) used_area: u64,
}

#[allow(missing_docs)]
impl FitReport {
    pub fn placed(&self) -> usize {
        self.placed
    }

    pub fn rejected(&self) -> usize {
        self.rejected
    }

    /// The size of the container once every block was packed.
    pub fn container(&self) -> WidthHeight {
        self.container
    }

    /// The total padded area of every placed block.
    pub fn used_area(&self) -> u64 {
        self.used_area
    }

    pub fn all_placed(&self) -> bool {
        self.rejected == 0
    }

    /// How much of the container is covered by placed blocks, from `0.0` to `1.0`.
    ///
    /// An empty container has a fill ratio of `0.0`.
    pub fn fill_ratio(&self) -> f64 {
        match self.container.area() {
            0 => 0.0,
            area => self.used_area as f64 / area as f64,
        }
    }
}

impl FitReport {
    pub(crate) fn record_placed(&mut self, placement: PackedLocation) {
        self.placed += 1;
        self.used_area += placement.whd.area();
    }

    pub(crate) fn record_rejected(&mut self) {
        self.rejected += 1;
    }
}
