//! Building a [`BoxTree`] from a [`TreeSpec`].

use nestbox_types::TreeSpec;

use crate::tree::{BoxId, BoxTree};

impl BoxTree {
    /// Lay out a described tree and return it with its master box.
    ///
    /// Children are attached depth-first: each child's subtree is finished
    /// before the next sibling is placed, so siblings see their
    /// predecessor's final size.
    pub fn from_spec(spec: &TreeSpec) -> (Self, BoxId) {
        let mut tree = Self::new();
        let master = tree.add_box_with_padding(
            spec.alignment,
            spec.vertical_padding,
            spec.horizontal_padding,
        );
        tree.attach_described(master, &spec.children);
        log::debug!("Built tree of {} boxes", tree.len());
        (tree, master)
    }

    fn attach_described(&mut self, parent: BoxId, children: &[TreeSpec]) {
        for spec in children {
            let child = self.add_box_with_padding(
                spec.alignment,
                spec.vertical_padding,
                spec.horizontal_padding,
            );
            self.attach(parent, child);
            self.attach_described(child, &spec.children);
        }
    }
}
