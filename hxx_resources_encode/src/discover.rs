use anyhow::Context as _;
use tracing::debug;

use crate::config::EmbedConfig;
use crate::identifier::{derive_identifier, Identifier};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SymlinkRules {
    /// Abort discovery when a resource directory contains a symbolic link
    Forbid,
    /// Skip symbolic links
    Ignore,
    /// Treat a symbolic link like its target
    #[default]
    Follow,
}

#[derive(thiserror::Error, Debug)]
pub enum DiscoveryError {
    #[error("Encountered a symbolic link: {}", .0.display())]
    SymbolicLink(std::path::PathBuf),
    #[error("Non-UTF-8 file name: '{}'", .0.display())]
    NonUtf8FileName(std::path::PathBuf),
}

/// A file found directly inside a resource directory
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResourceFile {
    /// Path of the file, starting with the search root
    pub path: std::path::PathBuf,
    /// Last component of `path`
    pub file_name: smartstring::SmartString<smartstring::LazyCompact>,
}

impl ResourceFile {
    pub fn identifier(&self) -> Identifier {
        derive_identifier(&self.file_name)
    }
}

fn is_hidden(ent: &walkdir::DirEntry) -> bool {
    // never hide the root itself, it may well be `.`
    ent.depth() > 0 && ent.file_name().as_encoded_bytes().first() == Some(&b'.')
}

fn in_resource_dir(ent: &walkdir::DirEntry, config: &EmbedConfig) -> bool {
    // depth 1 entries sit in the root, which is never a resource directory
    ent.depth() >= 2
        && ent
            .path()
            .parent()
            .and_then(std::path::Path::file_name)
            .is_some_and(|name| name == config.resource_dir_name.as_str())
}

/// Find all resource files below `config.root`.
///
/// A resource is a file whose parent directory is named `config.resource_dir_name` (at any depth below the root).
/// Hidden files and directories (names starting with `.`) are skipped, as are files which already end in the output extension.
/// Files are returned sorted by path component, so repeated runs see the same order.
pub fn discover(config: &EmbedConfig) -> anyhow::Result<std::vec::Vec<ResourceFile>> {
    let (follow_symlinks, ignore_symlinks) = match config.links {
        SymlinkRules::Forbid => (false, false),
        SymlinkRules::Ignore => (false, true),
        SymlinkRules::Follow => (true, false),
    };
    let suffix = config.output_suffix();

    debug!(root = %config.root.display(), "discovering resources");
    let walker = walkdir::WalkDir::new(&config.root)
        .sort_by_file_name()
        .follow_links(follow_symlinks)
        .into_iter()
        .filter_entry(|ent| !is_hidden(ent));

    let mut resources = vec![];
    for dirent in walker {
        let ent = dirent.with_context(|| format!("couldn't scan below '{}'", config.root.display()))?;
        if !in_resource_dir(&ent, config) {
            continue;
        }
        let file_type = ent.file_type();
        if file_type.is_dir() {
            continue; // only its own children can be resources
        } else if file_type.is_symlink() {
            if ignore_symlinks {
                debug!(path = %ent.path().display(), "ignoring symbolic link");
                continue;
            } else {
                return Err(DiscoveryError::SymbolicLink(ent.path().to_path_buf()).into());
            }
        } else if !file_type.is_file() {
            debug!(path = %ent.path().display(), "ignoring special file");
            continue;
        }

        if ent.file_name().as_encoded_bytes().ends_with(suffix.as_bytes()) {
            debug!(path = %ent.path().display(), "skipping generated file");
            continue;
        }
        let file_name = ent
            .file_name()
            .to_str()
            .ok_or_else(|| DiscoveryError::NonUtf8FileName(ent.path().to_path_buf()))?;
        resources.push(ResourceFile {
            path: ent.path().to_path_buf(),
            file_name: file_name.into(),
        });
    }
    Ok(resources)
}
