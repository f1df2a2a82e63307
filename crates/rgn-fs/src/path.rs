// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::{
    fs,
    path::{Component, Path, PathBuf},
};

use log::trace;

/// Moves an absolute device path (e.g. `/persist/speccfg/spec`) under `root`.
///
/// Used only for testing purposes, `root` is None in production and the path is returned as is.
pub fn change_root_of_path(path: &Path, root: &Option<PathBuf>) -> PathBuf {
    match root {
        Some(root) => join_device_path(root, path),
        None => path.to_path_buf(),
    }
}

/// Appends `relative` to `base`, treating a leading `/` in `relative` as part of the
/// device layout rather than as a new filesystem root.
///
/// `Path::join` would discard `base` when given an absolute path, which is never what we
/// want when composing `<storage>/<package>/system/media/...` style paths.
pub fn join_device_path<P: AsRef<Path>>(base: &Path, relative: P) -> PathBuf {
    let mut result = base.to_path_buf();
    for component in relative.as_ref().components() {
        match component {
            Component::RootDir | Component::Prefix(_) | Component::CurDir => {}
            other => result.push(other.as_os_str()),
        }
    }
    result
}

/// Whether the file at `path` exists and can be opened for reading.
pub fn is_readable_file(path: &Path) -> bool {
    if !path.is_file() {
        return false;
    }
    match fs::File::open(path) {
        Ok(_) => true,
        Err(err) => {
            trace!("File {:?} exists but is not readable: {}", path, err);
            false
        }
    }
}

/// Whether `path` is a readable file, or a directory whose entries can be listed.
pub fn is_readable(path: &Path) -> bool {
    if path.is_dir() {
        return fs::read_dir(path).is_ok();
    }
    is_readable_file(path)
}
