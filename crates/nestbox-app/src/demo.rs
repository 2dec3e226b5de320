//! Built-in demo tree.

use nestbox_types::{Alignment, TreeSpec};

/// A vertical master holding a nested box, then a row of two boxes.
pub fn demo_tree() -> TreeSpec {
    let master = Alignment::Vertical;
    let row = master.flipped();
    TreeSpec::new(master)
        .with_child(TreeSpec::new(row).with_child(TreeSpec::new(master)))
        .with_child(
            TreeSpec::new(row)
                .with_child(TreeSpec::new(master))
                .with_child(TreeSpec::new(master)),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use nestbox_layout::BoxTree;

    #[test]
    fn demo_lays_out_contained() {
        let spec = demo_tree();
        assert_eq!(spec.box_count(), 6);
        let (tree, master) = BoxTree::from_spec(&spec);
        for (id, _) in tree.iter() {
            assert!(tree.is_contained(id), "box {id} overflows its parent");
        }
        let text = nestbox_render::render(&tree, master).unwrap();
        assert!(text.starts_with('+'));
        assert!(text.ends_with("+\n"));
    }
}
