//! Where the driver reads preferences from and writes images to.

use std::path::PathBuf;

/// Directory containing the running executable. Falls back to current directory if unavailable.
pub fn exe_directory() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(PathBuf::from))
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
}

/// Per-user config directory, used when no preferences sit next to the executable.
pub fn config_directory() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", "Mandelzoom").map(|d| d.config_dir().to_path_buf())
}

/// Directory for exported frames.
pub fn images_directory() -> PathBuf {
    exe_directory().join("images")
}
