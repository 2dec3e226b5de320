//! Arena-backed box tree with anchor placement and padding propagation.

use nestbox_types::Alignment;
use nestbox_types::config::DEFAULT_PADDING;

use crate::rect::Rect;

/// Index into a [`BoxTree`]'s arena.
pub type BoxId = usize;

/// Columns between a parent's left border and its first child's left border.
const FIRST_CHILD_INSET_X: usize = 2;
/// Rows between a parent's top border and its first child's top border.
const FIRST_CHILD_INSET_Y: usize = 1;
/// Right border of the previous sibling, one blank column, then the new box.
const SIBLING_STEP_X: usize = 3;
/// Bottom border of the previous sibling, then the new box.
const SIBLING_STEP_Y: usize = 2;
/// Extra columns a vertical stack opens for its first child: the inset on
/// the left plus one blank column before the right border.
const FIRST_CHILD_WIDEN_X: usize = 3;

/// A single rectangle in the diagram.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NestedBox {
    alignment: Alignment,
    parent: Option<BoxId>,
    children: Vec<BoxId>,
    vertical_padding: usize,
    horizontal_padding: usize,
    anchor_x: usize,
    anchor_y: usize,
}

impl NestedBox {
    fn new(alignment: Alignment, vertical_padding: usize, horizontal_padding: usize) -> Self {
        Self {
            alignment,
            parent: None,
            children: Vec::new(),
            vertical_padding,
            horizontal_padding,
            anchor_x: 0,
            anchor_y: 0,
        }
    }

    /// How this box arranges its own children.
    pub fn alignment(&self) -> Alignment {
        self.alignment
    }

    /// The box this one is nested in, `None` for a master box.
    pub fn parent(&self) -> Option<BoxId> {
        self.parent
    }

    /// Children in attachment order.
    pub fn children(&self) -> &[BoxId] {
        &self.children
    }

    /// Interior rows, excluding the border.
    pub fn vertical_padding(&self) -> usize {
        self.vertical_padding
    }

    /// Interior columns, excluding the border.
    pub fn horizontal_padding(&self) -> usize {
        self.horizontal_padding
    }

    /// Column of the top-left border cell.
    pub fn anchor_x(&self) -> usize {
        self.anchor_x
    }

    /// Row of the top-left border cell.
    pub fn anchor_y(&self) -> usize {
        self.anchor_y
    }

    pub fn is_master(&self) -> bool {
        self.parent.is_none()
    }

    /// Bordered rectangle in absolute grid coordinates.
    pub fn bounds(&self) -> Rect {
        Rect::new(
            self.anchor_x,
            self.anchor_y,
            self.horizontal_padding + 2,
            self.vertical_padding + 2,
        )
    }
}

/// Owns every box of one or more trees.
///
/// Boxes are never removed. A box without a parent is a master box and sits
/// at the origin.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoxTree {
    boxes: Vec<NestedBox>,
}

impl BoxTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a detached box with the default 1x1 interior.
    pub fn add_box(&mut self, alignment: Alignment) -> BoxId {
        self.add_box_with_padding(alignment, DEFAULT_PADDING, DEFAULT_PADDING)
    }

    /// Create a detached box with an explicit starting interior.
    pub fn add_box_with_padding(
        &mut self,
        alignment: Alignment,
        vertical_padding: usize,
        horizontal_padding: usize,
    ) -> BoxId {
        let id = self.boxes.len();
        self.boxes.push(NestedBox::new(
            alignment,
            vertical_padding,
            horizontal_padding,
        ));
        id
    }

    /// Get a box by ID.
    pub fn get(&self, id: BoxId) -> &NestedBox {
        &self.boxes[id]
    }

    pub fn len(&self) -> usize {
        self.boxes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }

    /// Iterate over every box with its ID, in creation order.
    pub fn iter(&self) -> impl Iterator<Item = (BoxId, &NestedBox)> {
        self.boxes.iter().enumerate()
    }

    /// Walk parent links up to the master box.
    pub fn root_of(&self, mut id: BoxId) -> BoxId {
        while let Some(parent) = self.boxes[id].parent {
            id = parent;
        }
        id
    }

    /// Bordered rectangle of a box.
    pub fn bounds(&self, id: BoxId) -> Rect {
        self.boxes[id].bounds()
    }

    /// Whether a box's bordered rectangle lies inside its parent's interior.
    ///
    /// Always true for a master box.
    pub fn is_contained(&self, id: BoxId) -> bool {
        match self.boxes[id].parent {
            Some(parent) => self
                .bounds(parent)
                .interior()
                .contains_rect(&self.bounds(id)),
            None => true,
        }
    }

    /// Nest `child` inside `parent` after its existing children.
    ///
    /// The child's anchor is fixed here and never changes afterwards, and
    /// every ancestor that can no longer contain the child grows. `parent`
    /// must not be `child` or one of its descendants.
    pub fn attach(&mut self, parent: BoxId, child: BoxId) {
        let container = &self.boxes[parent];
        let (anchor_x, anchor_y) = match container.children.last() {
            None => (
                container.anchor_x + FIRST_CHILD_INSET_X,
                container.anchor_y + FIRST_CHILD_INSET_Y,
            ),
            Some(&last) => {
                let last = &self.boxes[last];
                match container.alignment {
                    Alignment::Horizontal => (
                        last.anchor_x + last.horizontal_padding + SIBLING_STEP_X,
                        container.anchor_y + FIRST_CHILD_INSET_Y,
                    ),
                    Alignment::Vertical => (
                        container.anchor_x + FIRST_CHILD_INSET_X,
                        last.anchor_y + last.vertical_padding + SIBLING_STEP_Y,
                    ),
                }
            },
        };

        let nested = &mut self.boxes[child];
        nested.parent = Some(parent);
        nested.anchor_x = anchor_x;
        nested.anchor_y = anchor_y;
        let (child_v, child_h) = (nested.vertical_padding, nested.horizontal_padding);

        let container = &mut self.boxes[parent];
        container.children.push(child);
        let child_count = container.children.len();
        let alignment = container.alignment;

        let v_growth = overflow(
            anchor_y + child_v,
            container.anchor_y + container.vertical_padding,
            child_v,
        );
        let h_growth = overflow(
            anchor_x + child_h,
            container.anchor_x + container.horizontal_padding,
            child_h,
        );
        log::debug!(
            "Attached box {child} to {parent} at ({anchor_x}, {anchor_y}), \
             growth h={h_growth} v={v_growth}"
        );

        if h_growth > 0 || v_growth > 0 {
            self.propagate_padding(parent, h_growth, v_growth, child_count, alignment);
        }
    }

    /// Grow `start` and then each ancestor in turn until one already fits.
    ///
    /// `child_count` and `alignment` describe the attachment that triggered
    /// the growth and are applied unchanged at every level.
    fn propagate_padding(
        &mut self,
        start: BoxId,
        mut h_growth: usize,
        mut v_growth: usize,
        child_count: usize,
        alignment: Alignment,
    ) {
        let first_child = child_count == 1;
        let mut current = start;
        loop {
            let node = &mut self.boxes[current];

            // A first child also opens up the cross axis.
            if first_child {
                match alignment {
                    Alignment::Horizontal if v_growth > 0 => {
                        node.vertical_padding += v_growth + 1;
                    },
                    Alignment::Vertical if h_growth > 0 => {
                        node.horizontal_padding += h_growth + FIRST_CHILD_WIDEN_X;
                    },
                    _ => {},
                }
            }
            match alignment {
                Alignment::Vertical if v_growth > 0 => {
                    node.vertical_padding += v_growth + if first_child { 1 } else { 2 };
                },
                Alignment::Horizontal if h_growth > 0 => {
                    node.horizontal_padding += h_growth + SIBLING_STEP_X;
                },
                _ => {},
            }
            log::trace!(
                "Box {current} padding now {}x{}",
                node.vertical_padding,
                node.horizontal_padding
            );

            let Some(parent) = node.parent else {
                break;
            };
            let (bottom, right) = (
                node.anchor_y + node.vertical_padding,
                node.anchor_x + node.horizontal_padding,
            );
            let container = &self.boxes[parent];
            v_growth = overflow(
                bottom,
                container.anchor_y + container.vertical_padding,
                v_growth,
            );
            h_growth = overflow(
                right,
                container.anchor_x + container.horizontal_padding,
                h_growth,
            );
            if h_growth == 0 && v_growth == 0 {
                break;
            }
            current = parent;
        }
    }
}

/// `growth` if `extent` reaches `limit`, otherwise zero.
fn overflow(extent: usize, limit: usize, growth: usize) -> usize {
    if extent < limit { 0 } else { growth }
}
