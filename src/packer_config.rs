/// The padding that is added to every side of a block when no other gap is configured.
pub const DEFAULT_GAP: u32 = 10;

/// The direction that the container prefers to grow in when no free space fits a block.
///
/// The axis that is not the growth axis is bounded by the configured constrained size, although
/// the container will still grow along it when growing along the preferred axis is impossible.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GrowthAxis {
    /// Grow the container's width. The height starts at the constrained size.
    #[default]
    Rightward,
    /// Grow the container's height. The width starts at the constrained size.
    Downward,
}

/// Settings that stay fixed for the lifetime of a [`GrowingPacker`].
///
/// [`GrowingPacker`]: crate::GrowingPacker
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "UncheckedPackerConfig")
)]
pub struct PackerConfig {
    pub(crate) growth_axis: GrowthAxis,
    pub(crate) constrained_size: u32,
    pub(crate) gap: u32,
}

/// An error while creating a [`PackerConfig`].
#[derive(Debug, thiserror::Error, Eq, PartialEq)]
pub enum PackerConfigError {
    /// The container would start out with no room along the constrained axis.
    #[error("The constrained size of the container must be greater than 0.")]
    ZeroConstrainedSize,
}

/// A deserialized config that has not been validated yet.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct UncheckedPackerConfig {
    growth_axis: GrowthAxis,
    constrained_size: u32,
    #[serde(default = "default_gap")]
    gap: u32,
}

#[cfg(feature = "serde")]
fn default_gap() -> u32 {
    DEFAULT_GAP
}

#[cfg(feature = "serde")]
impl TryFrom<UncheckedPackerConfig> for PackerConfig {
    type Error = PackerConfigError;

    fn try_from(unchecked: UncheckedPackerConfig) -> Result<Self, Self::Error> {
        Ok(PackerConfig::try_new(unchecked.growth_axis, unchecked.constrained_size)?
            .with_gap(unchecked.gap))
    }
}

impl PackerConfig {
    /// Create a config that uses the [`DEFAULT_GAP`].
    ///
    /// # Panics
    ///
    /// Panics if the constrained size is 0 since that would mean the container starts out with
    /// no room along the constrained axis.
    pub fn new(growth_axis: GrowthAxis, constrained_size: u32) -> Self {
        match PackerConfig::try_new(growth_axis, constrained_size) {
            Ok(config) => config,
            Err(err) => panic!("{}", err),
        }
    }

    /// Create a config that uses the [`DEFAULT_GAP`], or an error if the constrained size is 0.
    pub fn try_new(
        growth_axis: GrowthAxis,
        constrained_size: u32,
    ) -> Result<Self, PackerConfigError> {
        if constrained_size == 0 {
            return Err(PackerConfigError::ZeroConstrainedSize);
        }

        Ok(PackerConfig {
            growth_axis,
            constrained_size,
            gap: DEFAULT_GAP,
        })
    }

    /// Set the padding that is added to every side of every block.
    pub fn with_gap(mut self, gap: u32) -> Self {
        self.gap = gap;
        self
    }
}

#[allow(missing_docs)]
impl PackerConfig {
    pub fn growth_axis(&self) -> GrowthAxis {
        self.growth_axis
    }

    pub fn constrained_size(&self) -> u32 {
        self.constrained_size
    }

    pub fn gap(&self) -> u32 {
        self.gap
    }
}
