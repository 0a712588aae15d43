use std::env;
use std::path::PathBuf;

use thiserror::Error;

const INSTALL_ENV_VARS: [&str; 2] = ["ChocolateyInstall", "CHOCOLATEYINSTALL"];
const DEFAULT_INSTALL_ROOT: &str = r"C:\ProgramData\chocolatey";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("no Chocolatey installation found; pass --root or set ChocolateyInstall")]
    RootNotFound,
    #[error("install root {0} is not a directory")]
    InvalidRoot(PathBuf),
}

pub type Result<T> = std::result::Result<T, ConfigError>;

pub fn resolve_install_root(root: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(root) = root {
        return validate_root(root);
    }

    for var in INSTALL_ENV_VARS {
        if let Ok(value) = env::var(var) {
            return validate_root(PathBuf::from(value));
        }
    }

    let default = PathBuf::from(DEFAULT_INSTALL_ROOT);
    if default.is_dir() {
        return Ok(default);
    }

    Err(ConfigError::RootNotFound)
}

fn validate_root(root: PathBuf) -> Result<PathBuf> {
    if root.is_dir() {
        Ok(root)
    } else {
        Err(ConfigError::InvalidRoot(root))
    }
}
