//! Tree description files.
//!
//! A [`TreeSpec`] is a recursive description of a box tree: each node names
//! its alignment, optionally overrides its starting paddings, and lists its
//! children in the order they are attached. TOML and JSON are both accepted.

use std::path::Path;

use serde::Deserialize;

use crate::alignment::Alignment;
use crate::error::{NestBoxError, Result};

/// Interior size a box starts with when nothing overrides it.
pub const DEFAULT_PADDING: usize = 1;

/// Largest starting padding a tree description may request on either axis.
///
/// Keeps the rendered grid to a size that can actually be allocated.
pub const MAX_PADDING: usize = 1024;

/// One node of a tree description.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TreeSpec {
    /// How this node's own children are arranged.
    pub alignment: Alignment,
    /// Interior rows before any children are attached.
    #[serde(default = "default_padding")]
    pub vertical_padding: usize,
    /// Interior columns before any children are attached.
    #[serde(default = "default_padding")]
    pub horizontal_padding: usize,
    /// Children, in attachment order.
    #[serde(default)]
    pub children: Vec<TreeSpec>,
}

fn default_padding() -> usize {
    DEFAULT_PADDING
}

impl TreeSpec {
    /// A leaf node with default paddings.
    pub fn new(alignment: Alignment) -> Self {
        Self {
            alignment,
            vertical_padding: DEFAULT_PADDING,
            horizontal_padding: DEFAULT_PADDING,
            children: Vec::new(),
        }
    }

    /// Append a child description.
    pub fn with_child(mut self, child: TreeSpec) -> Self {
        self.children.push(child);
        self
    }

    /// Override the starting paddings.
    pub fn with_padding(mut self, vertical: usize, horizontal: usize) -> Self {
        self.vertical_padding = vertical;
        self.horizontal_padding = horizontal;
        self
    }

    /// Parse a TOML tree description.
    pub fn from_toml(source: &str) -> Result<Self> {
        let spec: Self = toml::from_str(source)?;
        spec.validate()?;
        Ok(spec)
    }

    /// Parse a JSON tree description.
    pub fn from_json(source: &str) -> Result<Self> {
        let spec: Self = serde_json::from_str(source)?;
        spec.validate()?;
        Ok(spec)
    }

    /// Check every node's paddings against [`MAX_PADDING`].
    pub fn validate(&self) -> Result<()> {
        self.validate_at("root")
    }

    fn validate_at(&self, path: &str) -> Result<()> {
        for (axis, value) in [
            ("vertical_padding", self.vertical_padding),
            ("horizontal_padding", self.horizontal_padding),
        ] {
            if value > MAX_PADDING {
                return Err(NestBoxError::Config(format!(
                    "{path}: {axis} {value} exceeds maximum of {MAX_PADDING}"
                )));
            }
        }
        for (i, child) in self.children.iter().enumerate() {
            child.validate_at(&format!("{path}.children[{i}]"))?;
        }
        Ok(())
    }

    /// Load a tree description, picking the format from the file extension.
    ///
    /// `.json` is parsed as JSON; `.toml` or no extension as TOML.
    pub fn load(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        let parse: fn(&str) -> Result<Self> = match extension.as_deref() {
            Some("json") => Self::from_json,
            Some("toml") | None => Self::from_toml,
            Some(other) => {
                return Err(NestBoxError::Config(format!(
                    "{}: unsupported tree file extension '.{other}'",
                    path.display()
                )));
            },
        };
        let spec = parse(&std::fs::read_to_string(path)?)?;
        log::debug!(
            "Loaded tree description from {} ({} boxes)",
            path.display(),
            spec.box_count()
        );
        Ok(spec)
    }

    /// Number of boxes described, this node included.
    pub fn box_count(&self) -> usize {
        1 + self.children.iter().map(TreeSpec::box_count).sum::<usize>()
    }
}
