//! Save file location.
//!
//! The default location depends on the platform and a few environment
//! values. Those are passed in explicitly as [`PathEnv`] so resolution is a
//! pure function and can be tested without touching the process environment.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::{Error, Result};

/// Save file name used by the Director's Cut
pub const SAVE_FILE_NAME: &str = "FarawaySave4.save";

/// Unity persistent data directory for the game (company, product)
const GAME_DIR: [&str; 2] = ["Pine Studio", "Faraway_ Director's Cut"];

/// Platform family for default path lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    /// Linux and macOS
    Unix,
    Windows,
}

impl Platform {
    pub fn current() -> Self {
        if cfg!(unix) {
            Self::Unix
        } else {
            Self::Windows
        }
    }
}

/// Environment values used to build the default save path
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathEnv {
    /// `$HOME`
    pub home: Option<PathBuf>,
    /// `$XDG_CONFIG_HOME`
    pub xdg_config_home: Option<PathBuf>,
    /// User profile directory (Windows)
    pub user_profile: Option<PathBuf>,
}

fn non_empty(path: Option<&PathBuf>) -> Option<&Path> {
    path.map(PathBuf::as_path)
        .filter(|p| !p.as_os_str().is_empty())
}

fn game_save_path(base: &Path, prefix: &[&str]) -> PathBuf {
    let mut path = base.to_path_buf();
    path.extend(prefix);
    path.extend(GAME_DIR);
    path.push(SAVE_FILE_NAME);
    path
}

/// Resolve the default save path for `platform`.
///
/// On Unix the macOS Application Support location is tried first; when
/// `exists` reports it missing, the Unity XDG config location is returned.
/// The returned path is not checked for existence.
pub fn resolve_default_path<F>(platform: Platform, env: &PathEnv, exists: F) -> Result<PathBuf>
where
    F: Fn(&Path) -> bool,
{
    match platform {
        Platform::Unix => {
            let home = non_empty(env.home.as_ref()).ok_or(Error::HomeDirectoryUnavailable)?;

            let mac_path = game_save_path(home, &["Library", "Application Support"]);
            if exists(&mac_path) {
                debug!("Using macOS save location {}", mac_path.display());
                return Ok(mac_path);
            }

            let config_dir = match non_empty(env.xdg_config_home.as_ref()) {
                Some(dir) => dir.to_path_buf(),
                None => home.join(".config"),
            };
            let xdg_path = game_save_path(&config_dir, &["unity3d"]);
            warn!(
                "{} not found, falling back to {}",
                mac_path.display(),
                xdg_path.display()
            );
            Ok(xdg_path)
        }
        Platform::Windows => {
            let profile =
                non_empty(env.user_profile.as_ref()).ok_or(Error::HomeDirectoryUnavailable)?;
            let path = game_save_path(profile, &["AppData", "LocalLow"]);
            debug!("Using Windows save location {}", path.display());
            Ok(path)
        }
    }
}

/// Pick the save path: a non-empty explicit path verbatim, otherwise the
/// platform default.
pub fn locate<F>(
    explicit: Option<&Path>,
    platform: Platform,
    env: &PathEnv,
    exists: F,
) -> Result<PathBuf>
where
    F: Fn(&Path) -> bool,
{
    match explicit {
        Some(path) if !path.as_os_str().is_empty() => Ok(path.to_path_buf()),
        _ => resolve_default_path(platform, env, exists),
    }
}
