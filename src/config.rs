//! Configuration file support.
//!
//! Options can be kept in a TOML file whose keys mirror [`PartialOptions`]:
//!
//! ```toml
//! group_indent = 4
//! label_start = "<"
//! label_end = ">"
//! info_color = "brightgreen"
//! ```
//!
//! Merge precedence (highest first): explicit settings such as CLI flags, the
//! config file, built-in defaults.

use std::path::{Path, PathBuf};

use crate::error::{LonkerError, Result};
use crate::options::PartialOptions;

/// Default config file path: `$XDG_CONFIG_HOME/lonker/config.toml` or
/// `~/.config/lonker/config.toml`.
pub fn default_config_path() -> PathBuf {
    if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME") {
        PathBuf::from(xdg).join("lonker").join("config.toml")
    } else if let Some(home) = std::env::var_os("HOME") {
        PathBuf::from(home)
            .join(".config")
            .join("lonker")
            .join("config.toml")
    } else {
        PathBuf::from(".config/lonker/config.toml")
    }
}

/// Parse a TOML document into partial options.
pub fn parse(content: &str) -> Result<PartialOptions> {
    Ok(toml::from_str(content)?)
}

/// Read and parse the config file at `path`.
pub fn load(path: &Path) -> Result<PartialOptions> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        LonkerError::Config(format!("cannot read config file {}: {e}", path.display()))
    })?;
    parse(&content)
}

/// Load `explicit` if given (it must exist), otherwise the default path if a
/// file is there. No file at the default path yields empty options.
pub fn load_or_default(explicit: Option<&Path>) -> Result<PartialOptions> {
    match explicit {
        Some(path) => load(path),
        None => {
            let path = default_config_path();
            if path.exists() {
                load(&path)
            } else {
                Ok(PartialOptions::default())
            }
        }
    }
}
