//! nestbox command-line entry point.
//!
//! Usage: `nestbox [TREE_FILE]`
//!
//! Loads a TOML or JSON tree description, lays it out, and prints the
//! diagram to stdout. Without a file, prints a built-in demo tree.
//! Set `RUST_LOG` for layout diagnostics on stderr.

mod demo;

use std::path::PathBuf;

use anyhow::{Context, Result};

use nestbox_layout::BoxTree;
use nestbox_types::TreeSpec;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let spec = match std::env::args().nth(1).map(PathBuf::from) {
        Some(path) => TreeSpec::load(&path)
            .with_context(|| format!("loading tree from {}", path.display()))?,
        None => {
            log::info!("No tree file given, rendering demo tree");
            demo::demo_tree()
        },
    };

    let (tree, master) = BoxTree::from_spec(&spec);
    log::info!(
        "Laid out {} boxes in a {}x{} grid",
        tree.len(),
        tree.get(master).vertical_padding() + 2,
        tree.get(master).horizontal_padding() + 2,
    );
    nestbox_render::print(&tree, master)?;
    Ok(())
}
