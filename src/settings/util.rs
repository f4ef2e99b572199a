use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Anchor relative profile paths at `base` and drop duplicates, keeping the
/// first occurrence so that merge order is preserved.
pub(super) fn anchor_paths(paths: Vec<PathBuf>, base: &Path) -> Vec<PathBuf> {
	let mut seen = HashSet::new();
	let mut anchored = Vec::new();
	for path in paths {
		if path.as_os_str().is_empty() {
			continue;
		}
		let path = if path.is_relative() {
			base.join(path)
		} else {
			path
		};
		if seen.insert(path.clone()) {
			anchored.push(path);
		}
	}
	anchored
}
