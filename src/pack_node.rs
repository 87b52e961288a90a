use crate::packed_location::PackedLocation;
use crate::width_height::WidthHeight;

use alloc::boxed::Box;

/// A rectangular region of the growing container.
///
/// Nodes form a binary tree. A free node has no children and can hold exactly one block. Once a
/// block is placed into a node the node becomes used, and the space that the block did not take
/// up is handed to two children: the space `down` below the block and the space `right` of it.
///
/// ```text
/// ┌──────────────┬──────────────┐
/// │              │              │
/// │    Placed    │    Right     │
/// │    Block     │              │
/// │              │              │
/// ├──────────────┴──────────────┤
/// │                             │
/// │            Down             │
/// │                             │
/// └─────────────────────────────┘
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PackNode {
    pub(crate) x: u32,
    pub(crate) y: u32,
    pub(crate) whd: WidthHeight,
    pub(crate) split: Option<Box<SplitChildren>>,
}

/// The two regions that a used node was split into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SplitChildren {
    pub(crate) down: PackNode,
    pub(crate) right: PackNode,
    /// The block that the node was split by. `None` for the roots created by growing the
    /// container, which wrap the old root instead of holding a block.
    pub(crate) block: Option<WidthHeight>,
}

/// An error while attempting to place a block within a pack node.
#[derive(Debug, thiserror::Error, Eq, PartialEq)]
pub enum PackNodeError {
    /// The block is wider than the node.
    #[error("Can not place a block inside of a node that is narrower than that block.")]
    PlacementWiderThanNode,
    /// The block is taller than the node.
    #[error("Can not place a block inside of a node that is shorter than that block.")]
    PlacementTallerThanNode,
    /// The node was already split by another block.
    #[error("Can not place a block inside of a node that already holds a block.")]
    NodeAlreadyUsed,
}

impl PackNode {
    /// Create a new free node.
    pub fn new(x: u32, y: u32, whd: WidthHeight) -> Self {
        PackNode {
            x,
            y,
            whd,
            split: None,
        }
    }

    /// Create a used node that already owns its two children.
    pub(crate) fn new_used(
        x: u32,
        y: u32,
        whd: WidthHeight,
        down: PackNode,
        right: PackNode,
    ) -> Self {
        PackNode {
            x,
            y,
            whd,
            split: Some(Box::new(SplitChildren {
                down,
                right,
                block: None,
            })),
        }
    }
}

#[allow(missing_docs)]
impl PackNode {
    pub fn x(&self) -> u32 {
        self.x
    }

    pub fn y(&self) -> u32 {
        self.y
    }

    pub fn whd(&self) -> WidthHeight {
        self.whd
    }

    pub fn is_used(&self) -> bool {
        self.split.is_some()
    }

    /// The space below the block that was placed in this node, if the node is used.
    pub fn down(&self) -> Option<&PackNode> {
        self.split.as_ref().map(|split| &split.down)
    }

    /// The space to the right of the block that was placed in this node, if the node is used.
    pub fn right(&self) -> Option<&PackNode> {
        self.split.as_ref().map(|split| &split.right)
    }

    /// Where the block that split this node was placed.
    ///
    /// `None` for free nodes and for the nodes that were created by growing the container.
    pub fn placed_block(&self) -> Option<PackedLocation> {
        let block = self.split.as_ref()?.block?;

        Some(PackedLocation::new(self.x, self.y, block))
    }
}

impl PackNode {
    /// Find the first free node in this subtree that is at least as large as `incoming` along
    /// both axes.
    ///
    /// The tree is searched depth first, and the `right` child of a used node is always searched
    /// before its `down` child. The first node that fits wins, even if a later node would be a
    /// tighter fit.
    ///
    /// Nodes with no area are never split away from the tree, they simply never fit anything
    /// larger than themselves.
    pub fn find_free_node(&mut self, incoming: WidthHeight) -> Option<&mut PackNode> {
        if self.split.is_none() {
            return if self.whd.can_contain(incoming) {
                Some(self)
            } else {
                None
            };
        }

        let SplitChildren { down, right, .. } = self.split.as_deref_mut()?;

        if let Some(found) = right.find_free_node(incoming) {
            return Some(found);
        }

        down.find_free_node(incoming)
    }

    /// Place a block into this free node, splitting the rest of the node's space into a `down`
    /// and a `right` child.
    ///
    /// The `down` child spans the full width of the node below the block. The `right` child is
    /// only as tall as the block.
    ///
    /// ```text
    /// ┌──────────┬───────────────────┐
    /// │  Placed  │ Right             │
    /// │  Block   │ (node.w - w) x h  │
    /// ├──────────┴───────────────────┤
    /// │ Down                         │
    /// │ node.w x (node.h - h)        │
    /// └──────────────────────────────┘
    /// ```
    ///
    /// Either child can end up with no area when the block spans the node's full width or
    /// height. Those children are kept.
    pub fn try_place(&mut self, incoming: WidthHeight) -> Result<PackedLocation, PackNodeError> {
        self.incoming_can_fit(incoming)?;

        let down = PackNode::new(
            self.x,
            self.y + incoming.height,
            WidthHeight {
                width: self.whd.width,
                height: self.whd.height - incoming.height,
            },
        );
        let right = PackNode::new(
            self.x + incoming.width,
            self.y,
            WidthHeight {
                width: self.whd.width - incoming.width,
                height: incoming.height,
            },
        );

        self.split = Some(Box::new(SplitChildren {
            down,
            right,
            block: Some(incoming),
        }));

        Ok(PackedLocation::new(self.x, self.y, incoming))
    }

    fn incoming_can_fit(&self, incoming: WidthHeight) -> Result<(), PackNodeError> {
        if self.is_used() {
            return Err(PackNodeError::NodeAlreadyUsed);
        }
        if incoming.width > self.whd.width {
            return Err(PackNodeError::PlacementWiderThanNode);
        }
        if incoming.height > self.whd.height {
            return Err(PackNodeError::PlacementTallerThanNode);
        }

        Ok(())
    }
}
