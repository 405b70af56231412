//! Lexical path relativization.

use std::path::{Component, Path, PathBuf};

/// Resolve `.` and `..` components without touching the filesystem.
pub fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !out.pop() {
                    out.push(component);
                }
            }
            other => out.push(other),
        }
    }
    out
}

/// `path` relative to `base`, with `..` components when it lies outside.
///
/// A relative `path` is anchored at `base` first.
pub fn relative_to(path: &Path, base: &Path) -> PathBuf {
    let target = normalize(&base.join(path));
    let base = normalize(base);

    let common = target
        .components()
        .zip(base.components())
        .take_while(|(a, b)| a == b)
        .count();

    let mut out = PathBuf::new();
    for _ in base.components().skip(common) {
        out.push(Component::ParentDir);
    }
    for component in target.components().skip(common) {
        out.push(component);
    }
    if out.as_os_str().is_empty() {
        out.push(Component::CurDir);
    }
    out
}
