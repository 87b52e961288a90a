//! A deterministic rectangle packer whose container grows on demand.
//!
//! The container starts out the size of the first block and is bounded along one axis by a
//! constrained size. Blocks are placed in the order that they are given into the first free
//! region of a binary tree that fits them. When nothing fits, the container grows along a single
//! axis by exactly as much as the block needs.
//!
//! # Basic Usage
//!
//! ```
//! use growing_rectangle_pack::{
//!     sort_blocks, Block, BlockOrder, GrowingPacker, GrowthAxis, PackerConfig,
//! };
//!
//! let mut blocks = vec![Block::new(80, 80), Block::new(100, 100), Block::new(100, 100)];
//!
//! // Packing the largest blocks first avoids blocks that can not be grown into.
//! sort_blocks(&mut blocks, BlockOrder::MaxSide);
//!
//! let mut packer = GrowingPacker::new(PackerConfig::new(GrowthAxis::Rightward, 100).with_gap(0));
//! let report = packer.fit(&mut blocks).unwrap();
//!
//! assert!(report.all_placed());
//! assert_eq!(blocks[0].placement().unwrap().x(), 0);
//! assert_eq!(packer.container().width, 280);
//! ```
//!
//! # Padding
//!
//! Every block has the configured gap added to each of its sides before it is packed, and that
//! padded size is written back into the block. Use [`GrowingPacker::fit_sizes`] if you want to
//! keep your original sizes.

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]

extern crate alloc;

pub use crate::block::Block;
pub use crate::block_order::*;
pub use crate::fit_report::FitReport;
pub use crate::growing_packer::{ContainerGrowth, ContainerGrowthFn, FitError, GrowingPacker};
pub use crate::pack_node::{PackNode, PackNodeError};
pub use crate::packed_location::PackedLocation;
pub use crate::packer_config::{GrowthAxis, PackerConfig, PackerConfigError, DEFAULT_GAP};
pub use crate::width_height::WidthHeight;

mod block;
mod block_order;
mod fit_report;
mod growing_packer;
mod pack_node;
mod packed_location;
mod packer_config;
mod width_height;
