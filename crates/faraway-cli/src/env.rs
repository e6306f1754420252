//! Process environment lookup for default save path resolution.

use std::ffi::OsString;
use std::path::PathBuf;

use faraway_core::PathEnv;

/// Collect path-related environment values from the running process
pub fn path_env() -> PathEnv {
    path_env_from(|key| std::env::var_os(key), dirs::home_dir())
}

/// `HOME` wins over the platform home directory; the user profile is always
/// the platform home directory.
fn path_env_from<F>(var: F, home_dir: Option<PathBuf>) -> PathEnv
where
    F: Fn(&str) -> Option<OsString>,
{
    let home = var("HOME")
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .or_else(|| home_dir.clone());

    PathEnv {
        home,
        xdg_config_home: var("XDG_CONFIG_HOME").map(PathBuf::from),
        user_profile: home_dir,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_env_from_vars() {
        let env = path_env_from(
            |key| match key {
                "HOME" => Some("/home/u".into()),
                "XDG_CONFIG_HOME" => Some("/home/u/cfg".into()),
                _ => None,
            },
            Some(PathBuf::from("/profile")),
        );
        assert_eq!(env.home, Some(PathBuf::from("/home/u")));
        assert_eq!(env.xdg_config_home, Some(PathBuf::from("/home/u/cfg")));
        assert_eq!(env.user_profile, Some(PathBuf::from("/profile")));
    }

    #[test]
    fn test_path_env_home_fallback() {
        let env = path_env_from(|_| None, Some(PathBuf::from("/profile")));
        assert_eq!(env.home, Some(PathBuf::from("/profile")));
        assert_eq!(env.xdg_config_home, None);
    }

    #[test]
    fn test_path_env_empty_home_falls_back() {
        let env = path_env_from(
            |key| (key == "HOME").then(OsString::new),
            Some(PathBuf::from("/profile")),
        );
        assert_eq!(env.home, Some(PathBuf::from("/profile")));
    }

    #[test]
    fn test_path_env_nothing_available() {
        let env = path_env_from(|_| None, None);
        assert_eq!(env, PathEnv::default());
    }
}
