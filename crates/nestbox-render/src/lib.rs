//! nestbox-render: rasterizes a laid-out box tree into ASCII art.
//!
//! A [`RenderContext`] holds the character grid for one pass. The grid is
//! sized by the first box drawn into it, children are drawn before their
//! parent, and only border cells are ever written, so nested boxes stay
//! visible inside their containers.

pub mod cell;
pub mod context;

use std::io::Write;

use nestbox_layout::{BoxId, BoxTree};
use nestbox_types::Result;

pub use cell::Cell;
pub use context::RenderContext;

/// Render the tree under `master` to a newline-terminated string.
///
/// Fails with [`NestBoxError::InvalidMaster`](nestbox_types::NestBoxError::InvalidMaster)
/// if `master` has a parent.
pub fn render(tree: &BoxTree, master: BoxId) -> Result<String> {
    let mut ctx = RenderContext::new();
    ctx.rasterize(tree, master)?;
    Ok(ctx.serialize())
}

/// Render the tree under `master` and write it to standard output.
pub fn print(tree: &BoxTree, master: BoxId) -> Result<()> {
    let text = render(tree, master)?;
    let mut out = std::io::stdout().lock();
    out.write_all(text.as_bytes())?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use nestbox_layout::Alignment;
    use nestbox_types::NestBoxError;

    #[test]
    fn render_lone_master() {
        let mut tree = BoxTree::new();
        let master = tree.add_box(Alignment::Vertical);
        assert_eq!(render(&tree, master).unwrap(), "+-+\n| |\n+-+\n");
    }

    #[test]
    fn render_nested_child() {
        let mut tree = BoxTree::new();
        let master = tree.add_box(Alignment::Vertical);
        let a = tree.add_box(Alignment::Horizontal);
        tree.attach(master, a);

        let expected = "\
+-----+
| +-+ |
| | | |
| +-+ |
+-----+
";
        assert_eq!(render(&tree, master).unwrap(), expected);
    }

    #[test]
    fn render_horizontal_pair() {
        let mut tree = BoxTree::new();
        let master = tree.add_box(Alignment::Horizontal);
        let a = tree.add_box(Alignment::Vertical);
        let b = tree.add_box(Alignment::Vertical);
        tree.attach(master, a);
        tree.attach(master, b);

        let expected = "\
+---------+
| +-+ +-+ |
| | | | | |
| +-+ +-+ |
+---------+
";
        assert_eq!(render(&tree, master).unwrap(), expected);
    }

    #[test]
    fn render_vertical_pair() {
        let mut tree = BoxTree::new();
        let master = tree.add_box(Alignment::Vertical);
        let a = tree.add_box(Alignment::Horizontal);
        let b = tree.add_box(Alignment::Horizontal);
        tree.attach(master, a);
        tree.attach(master, b);

        let expected = "\
+-----+
| +-+ |
| | | |
| +-+ |
| +-+ |
| | | |
| +-+ |
+-----+
";
        assert_eq!(render(&tree, master).unwrap(), expected);
    }

    #[test]
    fn render_three_levels() {
        let mut tree = BoxTree::new();
        let master = tree.add_box(Alignment::Vertical);
        let a = tree.add_box(Alignment::Horizontal);
        let b = tree.add_box(Alignment::Vertical);
        tree.attach(master, a);
        tree.attach(a, b);

        let expected = "\
+---------+
| +-----+ |
| | +-+ | |
| | | | | |
| | +-+ | |
| +-----+ |
+---------+
";
        assert_eq!(render(&tree, master).unwrap(), expected);
    }

    #[test]
    fn render_non_root_fails() {
        let mut tree = BoxTree::new();
        let master = tree.add_box(Alignment::Vertical);
        let a = tree.add_box(Alignment::Horizontal);
        tree.attach(master, a);

        let err = render(&tree, a).unwrap_err();
        assert!(matches!(err, NestBoxError::InvalidMaster(id) if id == a));
    }

    #[test]
    fn print_non_root_fails_before_output() {
        let mut tree = BoxTree::new();
        let master = tree.add_box(Alignment::Vertical);
        let a = tree.add_box(Alignment::Vertical);
        tree.attach(master, a);
        assert!(matches!(print(&tree, a), Err(NestBoxError::InvalidMaster(_))));
    }

    #[test]
    fn render_clips_overflowing_sibling() {
        let mut tree = BoxTree::new();
        let master = tree.add_box(Alignment::Vertical);
        let a = tree.add_box(Alignment::Vertical);
        let wide = tree.add_box_with_padding(Alignment::Vertical, 1, 10);
        tree.attach(master, a);
        tree.attach(master, wide);

        let text = render(&tree, master).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 8);
        assert!(lines.iter().all(|l| l.chars().count() == 7));
        // The master's own border is drawn last and survives intact.
        assert_eq!(lines[0], "+-----+");
        assert_eq!(lines[7], "+-----+");
    }
}
