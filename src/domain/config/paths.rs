use std::path::{Path, PathBuf};

/// Default config file name, looked up in the working directory.
pub const CONFIG_FILE: &str = "provkit.toml";

/// `<root>/provkit.toml`
pub fn config(root: &Path) -> PathBuf {
    root.join(CONFIG_FILE)
}
