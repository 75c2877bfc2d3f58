//! Project layout
//!
//! A project keeps its check configuration in a config directory. The
//! directory is either given explicitly or found next to the project's
//! wrapper script at `<wrapper dir>/okcheck/config`.

use std::path::{Path, PathBuf};

/// Base check configuration file within the config directory.
pub const CHECK_CONFIG_FILE: &str = "check.yml";

/// Project-wide exclude file within the config directory.
pub const EXCLUDE_FILE: &str = "exclude.yml";

const WRAPPER_CONFIG_DIR: &[&str] = &["okcheck", "config"];

/// Errors locating the config directory
#[derive(Debug, thiserror::Error)]
pub enum LayoutError {
    #[error("wrapper script does not exist: {}", .0.display())]
    MissingWrapper(PathBuf),

    #[error("config directory does not exist: {}", .0.display())]
    MissingConfigDir(PathBuf),
}

/// Determine the config directory.
///
/// An explicit directory wins. Without one, the directory is derived from
/// the wrapper script's location; with neither, there is no config directory.
pub fn config_dir(
    explicit: Option<&Path>,
    wrapper_script: Option<&Path>,
) -> Result<Option<PathBuf>, LayoutError> {
    if let Some(dir) = explicit.filter(|p| !p.as_os_str().is_empty()) {
        return Ok(Some(dir.to_path_buf()));
    }
    let Some(wrapper) = wrapper_script.filter(|p| !p.as_os_str().is_empty()) else {
        return Ok(None);
    };

    if !wrapper.is_file() {
        return Err(LayoutError::MissingWrapper(wrapper.to_path_buf()));
    }

    let mut dir = wrapper.parent().unwrap_or(Path::new("")).to_path_buf();
    dir.extend(WRAPPER_CONFIG_DIR);
    if !dir.is_dir() {
        return Err(LayoutError::MissingConfigDir(dir));
    }
    Ok(Some(dir))
}

/// Path of the base check configuration file in `dir`.
pub fn check_config_path(dir: &Path) -> PathBuf {
    dir.join(CHECK_CONFIG_FILE)
}

/// Path of the exclude file in `dir`.
pub fn exclude_path(dir: &Path) -> PathBuf {
    dir.join(EXCLUDE_FILE)
}
