// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use std::path::{Path, PathBuf};

use path_clean::clean;

/// Strategy used to look for a config file above a directory.
pub type FindInParent = fn(&Path, &str) -> Option<PathBuf>;

/// Where the configuration file path came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigLocation {
    /// Passed with `--config`; the file must exist
    Explicit(PathBuf),
    /// Found in the working directory or one of its ancestors
    Discovered(PathBuf),
    /// Nothing found; the per-user config directory is tried last
    Fallback(PathBuf),
}

impl ConfigLocation {
    pub fn path(&self) -> &Path {
        match self {
            Self::Explicit(p) | Self::Discovered(p) | Self::Fallback(p) => p,
        }
    }

    pub fn into_path(self) -> PathBuf {
        match self {
            Self::Explicit(p) | Self::Discovered(p) | Self::Fallback(p) => p,
        }
    }

    pub fn is_explicit(&self) -> bool {
        matches!(self, Self::Explicit(_))
    }
}

/// Nearest `filename` in `start` or any ancestor of it.
pub fn find_in_parent(start: &Path, filename: &str) -> Option<PathBuf> {
    start
        .ancestors()
        .map(|dir| dir.join(filename))
        .find(|candidate| candidate.is_file())
}

/// Picks the config file: `--config` first, relative paths against `cwd`, then a search
/// upwards from `cwd`, then `fallback_dir`.
pub fn locate_config(
    search: FindInParent,
    cwd: &Path,
    fallback_dir: &Path,
    filename: &str,
    cli_file: Option<&Path>,
) -> ConfigLocation {
    match cli_file {
        Some(file) if file.is_absolute() => ConfigLocation::Explicit(file.to_path_buf()),
        Some(file) => ConfigLocation::Explicit(clean(cwd.join(file))),
        None => search(cwd, filename)
            .map(ConfigLocation::Discovered)
            .unwrap_or_else(|| ConfigLocation::Fallback(clean(fallback_dir.join(filename)))),
    }
}

#[cfg(test)]
mod tests {
    use super::{find_in_parent, locate_config, ConfigLocation};
    use anyhow::Result;
    use std::path::{Path, PathBuf};

    const NAME: &str = "mathlib.config.yaml";

    fn not_found(_: &Path, _: &str) -> Option<PathBuf> {
        None
    }

    fn found(_: &Path, _: &str) -> Option<PathBuf> {
        Some(PathBuf::from("/foo/mathlib.config.yaml"))
    }

    #[test]
    fn test_fallback_dir() {
        let location = locate_config(
            not_found,
            Path::new("/foo/bar"),
            Path::new("/my/config"),
            NAME,
            None,
        );
        assert_eq!(
            location,
            ConfigLocation::Fallback(PathBuf::from("/my/config/mathlib.config.yaml"))
        );
        assert!(!location.is_explicit());
    }

    #[test]
    fn test_cli_file_wins_over_search() {
        let location = locate_config(
            found,
            Path::new("/foo/bar"),
            Path::new("/my/config"),
            NAME,
            Some(Path::new("/my/absolute/conf.yaml")),
        );
        assert_eq!(
            location,
            ConfigLocation::Explicit(PathBuf::from("/my/absolute/conf.yaml"))
        );
        assert!(location.is_explicit());

        let location = locate_config(
            found,
            Path::new("/foo/bar"),
            Path::new("/my/config"),
            NAME,
            Some(Path::new("../conf/demo.json")),
        );
        assert_eq!(location.path(), Path::new("/foo/conf/demo.json"));
    }

    #[test]
    fn test_discovered_in_parent() {
        let location = locate_config(
            found,
            Path::new("/foo/bar"),
            Path::new("/my/config"),
            NAME,
            None,
        );
        assert_eq!(
            location.into_path(),
            PathBuf::from("/foo/mathlib.config.yaml")
        );
    }

    #[test]
    fn test_find_in_parent_walks_up() -> Result<()> {
        let root = tempfile::tempdir()?;
        let nested = root.path().join("a").join("b");
        std::fs::create_dir_all(&nested)?;
        std::fs::write(root.path().join(NAME), "name: test\n")?;

        assert_eq!(find_in_parent(&nested, NAME), Some(root.path().join(NAME)));
        assert_eq!(find_in_parent(&nested, "missing.yaml"), None);
        Ok(())
    }

    #[test]
    fn test_find_in_parent_skips_directories() -> Result<()> {
        let root = tempfile::tempdir()?;
        std::fs::create_dir_all(root.path().join(NAME))?;
        assert_eq!(find_in_parent(root.path(), NAME), None);
        Ok(())
    }
}
