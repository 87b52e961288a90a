use crate::block::Block;
use crate::fit_report::FitReport;
use crate::pack_node::PackNode;
use crate::packed_location::PackedLocation;
use crate::packer_config::{GrowthAxis, PackerConfig};
use crate::width_height::WidthHeight;

use alloc::{boxed::Box, vec::Vec};
use core::fmt::{Debug, Formatter, Result as FmtResult};

mod grow;

/// Called every time that the container grows.
///
/// Useful for resizing whatever is displaying the packed blocks.
pub type ContainerGrowthFn = dyn FnMut(ContainerGrowth);

/// Describes a single growth of the container.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ContainerGrowth {
    pub(crate) axis: GrowthAxis,
    pub(crate) container: WidthHeight,
}

#[allow(missing_docs)]
impl ContainerGrowth {
    /// The axis that the container grew along.
    pub fn axis(&self) -> GrowthAxis {
        self.axis
    }

    /// The size of the container after growing.
    pub fn container(&self) -> WidthHeight {
        self.container
    }
}

/// An error that prevented a packing from starting.
///
/// Blocks that can not be placed are not an error, they are simply left without a placement.
#[derive(Debug, thiserror::Error, Eq, PartialEq)]
pub enum FitError {
    /// Adding the padding to a block would make it too large to represent.
    #[error("Block {index} ({width}x{height}) is too large to be padded by {gap} on every side.")]
    PaddedDimensionOverflow {
        /// The position of the block in the slice that was passed in.
        index: usize,
        #[allow(missing_docs)]
        width: u32,
        #[allow(missing_docs)]
        height: u32,
        #[allow(missing_docs)]
        gap: u32,
    },
}

/// Packs blocks into a single container that starts out the size of the first block and grows
/// whenever a block does not fit.
///
/// Each call to [`GrowingPacker::fit`] starts over with a fresh container. The container from the
/// most recent packing stays around for inspection until the next packing.
///
/// Two packings that need to run at the same time need their own packers.
pub struct GrowingPacker {
    config: PackerConfig,
    root: PackNode,
    growth_listener: Option<Box<ContainerGrowthFn>>,
}

impl Debug for GrowingPacker {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("GrowingPacker")
            .field("config", &self.config)
            .field("root", &self.root)
            .field("has_growth_listener", &self.growth_listener.is_some())
            .finish()
    }
}

impl GrowingPacker {
    #[allow(missing_docs)]
    pub fn new(config: PackerConfig) -> Self {
        GrowingPacker {
            config,
            root: PackNode::default(),
            growth_listener: None,
        }
    }

    /// Register a function that gets told about every growth of the container.
    ///
    /// The packer never resizes anything on its own, this is the hook for keeping an external
    /// container in sync with the packing.
    pub fn on_container_growth(&mut self, listener: impl FnMut(ContainerGrowth) + 'static) {
        self.growth_listener = Some(Box::new(listener));
    }
}

#[allow(missing_docs)]
impl GrowingPacker {
    pub fn config(&self) -> &PackerConfig {
        &self.config
    }

    /// The outermost node of the most recent packing.
    pub fn root(&self) -> &PackNode {
        &self.root
    }

    /// The size of the container after the most recent packing.
    pub fn container(&self) -> WidthHeight {
        self.root.whd
    }
}

impl GrowingPacker {
    /// Pack the blocks in the order that they are given.
    ///
    /// Every block first has the configured gap added to each of its sides. This changes the
    /// caller's blocks permanently, so keep a copy of the original sizes if you need them. Use
    /// [`GrowingPacker::fit_sizes`] to leave your sizes untouched.
    ///
    /// The container starts out as wide as the first block and as tall as the constrained size
    /// when growing rightward, or as tall as the first block and as wide as the constrained size
    /// when growing downward.
    ///
    /// Every block that could be placed is given a [`PackedLocation`]. A block that is both wider
    /// and taller than the container at the moment that it is packed is rejected and left
    /// without a placement. Rejected blocks do not stop the blocks after them from being packed.
    ///
    /// If any block is too large to pad no block is modified and an error is returned.
    #[tracing::instrument(
        level = "debug",
        skip_all,
        fields(blocks = blocks.len(), growth_axis = ?self.config.growth_axis)
    )]
    pub fn fit(&mut self, blocks: &mut [Block]) -> Result<FitReport, FitError> {
        let gap = self.config.gap;

        let padded = blocks
            .iter()
            .enumerate()
            .map(|(index, block)| {
                block
                    .padded_whd(gap)
                    .ok_or(FitError::PaddedDimensionOverflow {
                        index,
                        width: block.width(),
                        height: block.height(),
                        gap,
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        for (block, padded) in blocks.iter_mut().zip(padded) {
            block.pad(padded);
        }

        self.root = self.initial_root(blocks.first());

        let mut report = FitReport::default();

        for (index, block) in blocks.iter_mut().enumerate() {
            block.placement = self.place(block.whd);

            match block.placement {
                Some(placement) => {
                    tracing::trace!(
                        index,
                        x = placement.x,
                        y = placement.y,
                        width = placement.whd.width,
                        height = placement.whd.height,
                        "placed block"
                    );
                    report.record_placed(placement);
                }
                None => {
                    tracing::debug!(
                        index,
                        width = block.whd.width,
                        height = block.whd.height,
                        container_width = self.root.whd.width,
                        container_height = self.root.whd.height,
                        "block is wider and taller than the container, leaving it unplaced"
                    );
                    report.record_rejected();
                }
            }
        }

        report.container = self.root.whd;

        tracing::debug!(
            placed = report.placed,
            rejected = report.rejected,
            width = report.container.width,
            height = report.container.height,
            "finished packing"
        );

        Ok(report)
    }

    /// Pack copies of the given sizes, leaving the caller's sizes unpadded.
    ///
    /// The placements are returned in the same order as the sizes.
    pub fn fit_sizes(
        &mut self,
        sizes: &[WidthHeight],
    ) -> Result<Vec<Option<PackedLocation>>, FitError> {
        let mut blocks: Vec<Block> = sizes.iter().copied().map(Block::from).collect();

        self.fit(&mut blocks)?;

        Ok(blocks.iter().map(Block::placement).collect())
    }

    fn initial_root(&self, first: Option<&Block>) -> PackNode {
        let first = match first {
            Some(first) => first,
            None => return PackNode::default(),
        };

        let whd = match self.config.growth_axis {
            GrowthAxis::Rightward => WidthHeight::new(first.width(), self.config.constrained_size),
            GrowthAxis::Downward => WidthHeight::new(self.config.constrained_size, first.height()),
        };

        PackNode::new(0, 0, whd)
    }

    fn place(&mut self, incoming: WidthHeight) -> Option<PackedLocation> {
        match self.root.find_free_node(incoming) {
            Some(node) => {
                let placed = node.try_place(incoming);

                // find_free_node only returns free nodes that can contain the block.
                debug_assert!(placed.is_ok(), "{:?}", placed);

                placed.ok()
            }
            None => self.grow_node(incoming),
        }
    }
}
