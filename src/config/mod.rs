pub mod settings;
pub mod words;

pub use settings::*;
pub use words::*;

use std::path::{Path, PathBuf};

/// Project-local config directory: `<root>/.wordmask/`
pub fn dirs_project(project_root: &Path) -> PathBuf {
    project_root.join(".wordmask")
}
