// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use std::path::{Path, PathBuf};

use path_clean::clean;

pub type FindInParent = fn(&Path, &str) -> Option<PathBuf>;

pub fn find_in_parent(path: &Path, filename: &str) -> Option<PathBuf> {
    let mut current = path.to_path_buf();

    loop {
        let file_path = current.join(filename);
        if file_path.exists() {
            return Some(file_path);
        }

        if !current.pop() {
            break;
        }
    }

    None
}

/// Where to look for the configuration file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Named on the command line, so it has to exist
    Explicit(PathBuf),
    /// Found walking up from the working directory
    Found(PathBuf),
    /// The per user location, which may not exist
    Default(PathBuf),
    /// No file, defaults and environment only
    None,
}

impl ConfigSource {
    pub fn path(&self) -> Option<&Path> {
        match self {
            ConfigSource::Explicit(p) | ConfigSource::Found(p) | ConfigSource::Default(p) => {
                Some(p)
            }
            ConfigSource::None => None,
        }
    }
}

pub fn resolve_config_path(
    find_in_parent: FindInParent,
    cwd: &Path,
    default_config_dir: Option<&Path>,
    default_filename: &str,
    cli_file: Option<&Path>,
) -> ConfigSource {
    if let Some(cli_file) = cli_file {
        if cli_file.is_absolute() {
            return ConfigSource::Explicit(cli_file.to_path_buf());
        }
        return ConfigSource::Explicit(clean(cwd.join(cli_file)));
    }

    if let Some(found) = find_in_parent(cwd, default_filename) {
        return ConfigSource::Found(found);
    }

    match default_config_dir {
        Some(dir) => ConfigSource::Default(clean(dir.join(default_filename))),
        None => ConfigSource::None,
    }
}
