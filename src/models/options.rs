use std::path::PathBuf;

/// Validated per-invocation configuration, consumed by the tree renderer.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TruffulaOptions {
    /// Absolute path of an existing directory. Never a regular file.
    pub root: PathBuf,
    /// Include hidden entries (dotfiles) in the listing.
    pub show_hidden: bool,
    /// Apply ANSI color keyed to nesting depth.
    pub use_color: bool,
}
