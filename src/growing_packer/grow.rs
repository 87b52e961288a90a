//! Methods for growing the container when no free space fits an incoming block.
//!
//! The container only ever grows along one axis at a time. Growing wraps the current root in a
//! new, larger root that owns the old root as one child and a fresh strip of free space as the
//! other.

use crate::growing_packer::{ContainerGrowth, GrowingPacker};
use crate::pack_node::PackNode;
use crate::packed_location::PackedLocation;
use crate::packer_config::GrowthAxis;
use crate::width_height::WidthHeight;

use core::mem;

impl GrowingPacker {
    /// Grow the container so that it can hold the incoming block, then place the block into the
    /// new space.
    ///
    /// Only called after searching the current tree found no free node that fits.
    ///
    /// The container prefers to grow along the configured growth axis and falls back to the
    /// other axis when the block is too large along the axis that would have to stay fixed.
    ///
    /// Returns `None` if the block is both wider and taller than the container, since growing
    /// along a single axis can not make room for it.
    pub(crate) fn grow_node(&mut self, incoming: WidthHeight) -> Option<PackedLocation> {
        match growth_direction(self.config.growth_axis, self.root.whd, incoming)? {
            GrowthAxis::Rightward => self.grow_right(incoming),
            GrowthAxis::Downward => self.grow_down(incoming),
        }
    }

    /// Widen the container by the width of the incoming block.
    ///
    /// ```text
    /// ┌──────────────┬─────────┐
    /// │              │         │
    /// │   Old Root   │   New   │
    /// │    (down)    │  Strip  │
    /// │              │ (right) │
    /// │              │         │
    /// └──────────────┴─────────┘
    /// ```
    fn grow_right(&mut self, incoming: WidthHeight) -> Option<PackedLocation> {
        let old = self.root.whd;

        let width = match old.width.checked_add(incoming.width) {
            Some(width) => width,
            None => {
                tracing::warn!(
                    container_width = old.width,
                    block_width = incoming.width,
                    "growing rightward would overflow the container width"
                );
                return None;
            }
        };

        let strip = PackNode::new(
            old.width,
            0,
            WidthHeight {
                width: incoming.width,
                height: old.height,
            },
        );
        let old_root = mem::take(&mut self.root);

        self.root = PackNode::new_used(
            0,
            0,
            WidthHeight {
                width,
                height: old.height,
            },
            old_root,
            strip,
        );

        self.notify_growth(GrowthAxis::Rightward);
        self.place_after_growth(incoming)
    }

    /// Heighten the container by the height of the incoming block.
    ///
    /// ```text
    /// ┌─────────────────────┐
    /// │                     │
    /// │  Old Root (right)   │
    /// │                     │
    /// ├─────────────────────┤
    /// │  New Strip (down)   │
    /// └─────────────────────┘
    /// ```
    fn grow_down(&mut self, incoming: WidthHeight) -> Option<PackedLocation> {
        let old = self.root.whd;

        let height = match old.height.checked_add(incoming.height) {
            Some(height) => height,
            None => {
                tracing::warn!(
                    container_height = old.height,
                    block_height = incoming.height,
                    "growing downward would overflow the container height"
                );
                return None;
            }
        };

        let strip = PackNode::new(
            0,
            old.height,
            WidthHeight {
                width: old.width,
                height: incoming.height,
            },
        );
        let old_root = mem::take(&mut self.root);

        self.root = PackNode::new_used(
            0,
            0,
            WidthHeight {
                width: old.width,
                height,
            },
            strip,
            old_root,
        );

        self.notify_growth(GrowthAxis::Downward);
        self.place_after_growth(incoming)
    }

    // The new strip is exactly as long as the incoming block along the grown axis and as long as
    // the old container along the other, so the search always finds a node that fits.
    fn place_after_growth(&mut self, incoming: WidthHeight) -> Option<PackedLocation> {
        let node = self.root.find_free_node(incoming);
        debug_assert!(node.is_some(), "no free node after growing for {:?}", incoming);

        let placed = node?.try_place(incoming);
        debug_assert!(placed.is_ok(), "{:?}", placed);

        placed.ok()
    }

    fn notify_growth(&mut self, axis: GrowthAxis) {
        let growth = ContainerGrowth {
            axis,
            container: self.root.whd,
        };

        tracing::debug!(
            ?axis,
            width = growth.container.width,
            height = growth.container.height,
            "grew container"
        );

        if let Some(listener) = self.growth_listener.as_mut() {
            listener(growth);
        }
    }
}

/// Decide which way the container should grow to make room for the incoming block, or `None` if
/// it can not grow to fit the block.
///
/// Growing down keeps the container's width, so it only works for blocks that are no wider than
/// the container. Growing right likewise only works for blocks that are no taller than it.
///
/// The preferred axis wins whenever it is legal, both when growing along it keeps the container
/// closer to square and when it does not. The other axis is only used when the preferred one is
/// illegal.
pub(crate) fn growth_direction(
    preferred: GrowthAxis,
    container: WidthHeight,
    incoming: WidthHeight,
) -> Option<GrowthAxis> {
    let can_grow_down = incoming.width <= container.width;
    let can_grow_right = incoming.height <= container.height;

    let (can_grow_preferred, can_grow_other, other) = match preferred {
        GrowthAxis::Rightward => (can_grow_right, can_grow_down, GrowthAxis::Downward),
        GrowthAxis::Downward => (can_grow_down, can_grow_right, GrowthAxis::Rightward),
    };

    if can_grow_preferred {
        Some(preferred)
    } else if can_grow_other {
        Some(other)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Block, PackerConfig};

    /// Verify that we grow along the preferred axis whenever it is legal.
    #[test]
    fn prefers_configured_axis() {
        GrowthDirectionTest {
            label: "Rightward, container is tall",
            preferred: GrowthAxis::Rightward,
            container: WidthHeight::new(10, 100),
            incoming: WidthHeight::new(10, 10),
            expected: Some(GrowthAxis::Rightward),
        }
        .test();

        GrowthDirectionTest {
            label: "Rightward, container is already wide",
            preferred: GrowthAxis::Rightward,
            container: WidthHeight::new(100, 10),
            incoming: WidthHeight::new(10, 10),
            expected: Some(GrowthAxis::Rightward),
        }
        .test();

        GrowthDirectionTest {
            label: "Downward, container is wide",
            preferred: GrowthAxis::Downward,
            container: WidthHeight::new(100, 10),
            incoming: WidthHeight::new(10, 10),
            expected: Some(GrowthAxis::Downward),
        }
        .test();

        GrowthDirectionTest {
            label: "Downward, container is already tall",
            preferred: GrowthAxis::Downward,
            container: WidthHeight::new(10, 100),
            incoming: WidthHeight::new(10, 10),
            expected: Some(GrowthAxis::Downward),
        }
        .test();
    }

    /// Verify that we fall back to the other axis when the block is too large along the axis
    /// that would have to stay fixed.
    #[test]
    fn falls_back_to_other_axis() {
        GrowthDirectionTest {
            label: "Rightward, block taller than container",
            preferred: GrowthAxis::Rightward,
            container: WidthHeight::new(50, 20),
            incoming: WidthHeight::new(30, 40),
            expected: Some(GrowthAxis::Downward),
        }
        .test();

        GrowthDirectionTest {
            label: "Downward, block wider than container",
            preferred: GrowthAxis::Downward,
            container: WidthHeight::new(20, 50),
            incoming: WidthHeight::new(40, 30),
            expected: Some(GrowthAxis::Rightward),
        }
        .test();
    }

    /// Verify that a block that is both wider and taller than the container can not be grown
    /// into.
    #[test]
    fn rejects_block_larger_along_both_axes() {
        for preferred in [GrowthAxis::Rightward, GrowthAxis::Downward] {
            GrowthDirectionTest {
                label: "Larger along both axes",
                preferred,
                container: WidthHeight::new(10, 20),
                incoming: WidthHeight::new(11, 21),
                expected: None,
            }
            .test();
        }
    }

    /// Verify that growing right keeps the old root as the down child and adds a strip as tall
    /// as the old root.
    #[test]
    fn grow_right_geometry() {
        let mut packer = packer_with_one_block(GrowthAxis::Rightward, 20);

        let placed = packer.grow_right(WidthHeight::new(15, 5)).unwrap();

        assert_eq!(placed, PackedLocation::new(10, 0, WidthHeight::new(15, 5)));

        let root = packer.root();
        assert_eq!(root.whd(), WidthHeight::new(25, 20));
        assert!(root.is_used());
        assert_eq!(root.placed_block(), None);
        assert_eq!(root.down().unwrap().whd(), WidthHeight::new(10, 20));
        assert!(root.down().unwrap().is_used());

        let strip = root.right().unwrap();
        assert_eq!((strip.x(), strip.y()), (10, 0));
        assert_eq!(strip.whd(), WidthHeight::new(15, 20));
        assert!(strip.is_used());
    }

    /// Verify that growing down keeps the old root as the right child and adds a strip as wide
    /// as the old root.
    #[test]
    fn grow_down_geometry() {
        let mut packer = packer_with_one_block(GrowthAxis::Downward, 20);

        let placed = packer.grow_down(WidthHeight::new(5, 15)).unwrap();

        assert_eq!(placed, PackedLocation::new(0, 10, WidthHeight::new(5, 15)));

        let root = packer.root();
        assert_eq!(root.whd(), WidthHeight::new(20, 25));
        assert_eq!(root.right().unwrap().whd(), WidthHeight::new(20, 10));
        assert!(root.right().unwrap().is_used());

        let strip = root.down().unwrap();
        assert_eq!((strip.x(), strip.y()), (0, 10));
        assert_eq!(strip.whd(), WidthHeight::new(20, 15));
    }

    /// Verify that growth which would overflow the container leaves the block unplaced and the
    /// container untouched.
    #[test]
    fn overflowing_growth_is_rejected() {
        let mut packer = packer_with_one_block(GrowthAxis::Rightward, 20);

        assert_eq!(packer.grow_right(WidthHeight::new(u32::MAX, 5)), None);
        assert_eq!(packer.container(), WidthHeight::new(10, 20));
    }

    /// Packs a single 10x10 block with no gap.
    fn packer_with_one_block(axis: GrowthAxis, constrained_size: u32) -> GrowingPacker {
        let mut packer = GrowingPacker::new(PackerConfig::new(axis, constrained_size).with_gap(0));
        packer.fit(&mut [Block::new(10, 10)]).unwrap();
        packer
    }

    struct GrowthDirectionTest {
        label: &'static str,
        preferred: GrowthAxis,
        container: WidthHeight,
        incoming: WidthHeight,
        expected: Option<GrowthAxis>,
    }

    impl GrowthDirectionTest {
        fn test(self) {
            assert_eq!(
                growth_direction(self.preferred, self.container, self.incoming),
                self.expected,
                "{}",
                self.label
            );
        }
    }
}
