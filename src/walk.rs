//! Recursive candidate enumeration.
//!
//! This is the only layer that touches the filesystem. Unreadable
//! directories and entries (permission denied, races with deletion) are
//! swallowed here and never reach the matching core; it only ever sees
//! valid path strings.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

/// Options controlling the traversal.
#[derive(Debug, Clone, Default)]
pub struct WalkOptions {
    /// Include entries whose name starts with a dot.
    pub hidden: bool,
    /// Maximum recursion depth below each root. None = unlimited.
    pub depth: Option<usize>,
}

/// Collect file paths under the given roots.
///
/// Paths are deduplicated on their literal string form, so overlapping
/// roots cannot emit a file twice. Symlinked directories are not followed.
pub fn collect_paths(roots: &[PathBuf], options: &WalkOptions) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut paths = Vec::new();
    for root in roots {
        walk_dir(root, 0, options, &mut seen, &mut paths);
    }
    paths
}

fn walk_dir(
    dir: &Path,
    current_depth: usize,
    options: &WalkOptions,
    seen: &mut HashSet<String>,
    out: &mut Vec<String>,
) {
    if let Some(max) = options.depth {
        if current_depth >= max {
            return;
        }
    }

    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };

    for entry in entries.flatten() {
        let name = entry.file_name();
        let name_str = name.to_string_lossy();
        if !options.hidden && name_str.starts_with('.') {
            continue;
        }

        // file_type() does not follow symlinks, so symlinked directories
        // terminate here instead of cycling. Symlinks that resolve to
        // regular files are still candidates; the path-string dedup absorbs
        // any repeats they introduce.
        let Ok(file_type) = entry.file_type() else {
            continue;
        };

        let path = entry.path();
        if file_type.is_dir() {
            walk_dir(&path, current_depth + 1, options, seen, out);
        } else if file_type.is_file()
            || (file_type.is_symlink() && fs::metadata(&path).is_ok_and(|m| m.is_file()))
        {
            let path_str = path.to_string_lossy().to_string();
            if seen.insert(path_str.clone()) {
                out.push(path_str);
            }
        }
    }
}
