//! Source-tree scanning.
//!
//! Walks a project root and lazily yields the text content of every file
//! that may contain translation calls. Files are selected by name suffix
//! (so `.blade.php` templates are covered by the `.php` suffix) and whole
//! directories are pruned by name before descent.

use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// Directories never descended into, regardless of configuration.
pub const DEFAULT_EXCLUDED_DIRS: &[&str] = &["storage", "vendor", "lang", "node_modules", ".git"];

/// File-name suffixes that are scanned for translation calls. The
/// `.blade.php` entry is subsumed by `.php` but kept so the published
/// default config names every supported template kind.
pub const DEFAULT_SUFFIXES: &[&str] = &[".php", ".twig", ".vue", ".blade.php"];

/// One candidate file: its path relative to the scan root and its full text.
#[derive(Debug)]
pub struct SourceFile {
    pub relative_path: String,
    pub content: String,
}

/// A file or directory that could not be visited; the scan continues.
#[derive(Debug)]
pub struct ScanError {
    pub path: PathBuf,
    pub message: String,
}

/// Lazily enumerate scannable files under `root`.
///
/// Directories whose name appears in `excluded_dirs` are pruned entirely.
/// Unreadable entries and files that do not decode as UTF-8 are yielded as
/// `Err` so the caller can count and report them without aborting.
pub fn scan(
    root: &Path,
    excluded_dirs: &[String],
    suffixes: &[String],
) -> impl Iterator<Item = Result<SourceFile, ScanError>> + use<> {
    let root = root.to_path_buf();
    let excluded: Vec<String> = excluded_dirs.to_vec();
    let suffixes: Vec<String> = suffixes.to_vec();

    WalkDir::new(root.clone())
        .into_iter()
        .filter_entry(move |entry| {
            if !entry.file_type().is_dir() {
                return true;
            }
            let name = entry.file_name().to_string_lossy();
            !excluded.iter().any(|d| d == name.as_ref())
        })
        .filter_map(move |entry| {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    let path = err.path().map(Path::to_path_buf).unwrap_or_default();
                    return Some(Err(ScanError {
                        path,
                        message: err.to_string(),
                    }));
                }
            };

            if !entry.file_type().is_file() {
                return None;
            }
            let name = entry.file_name().to_string_lossy();
            if !suffixes.iter().any(|s| name.ends_with(s.as_str())) {
                return None;
            }

            let path = entry.path();
            match fs::read_to_string(path) {
                Ok(content) => {
                    let relative_path = path
                        .strip_prefix(&root)
                        .unwrap_or(path)
                        .to_string_lossy()
                        .into_owned();
                    Some(Ok(SourceFile {
                        relative_path,
                        content,
                    }))
                }
                Err(err) => Some(Err(ScanError {
                    path: path.to_path_buf(),
                    message: err.to_string(),
                })),
            }
        })
}

/// The built-in exclusion list plus any user-configured directory names.
pub fn excluded_dirs(extra: &[String]) -> Vec<String> {
    let mut dirs: Vec<String> = DEFAULT_EXCLUDED_DIRS.iter().map(|s| s.to_string()).collect();
    for dir in extra {
        if !dirs.contains(dir) {
            dirs.push(dir.clone());
        }
    }
    dirs
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn suffixes() -> Vec<String> {
        DEFAULT_SUFFIXES.iter().map(|s| s.to_string()).collect()
    }

    fn collect_paths(root: &Path, excluded: &[String]) -> Vec<String> {
        let mut paths: Vec<String> = scan(root, excluded, &suffixes())
            .filter_map(|r| r.ok())
            .map(|f| f.relative_path.replace('\\', "/"))
            .collect();
        paths.sort();
        paths
    }

    #[test]
    fn test_scans_matching_suffixes() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("index.php"), "<?php").unwrap();
        fs::write(dir.path().join("page.twig"), "{{ x }}").unwrap();
        fs::write(dir.path().join("App.vue"), "<template/>").unwrap();
        fs::write(dir.path().join("notes.md"), "skip me").unwrap();

        let paths = collect_paths(dir.path(), &[]);
        assert_eq!(paths, ["App.vue", "index.php", "page.twig"]);
    }

    #[test]
    fn test_blade_templates_match_php_suffix() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("home.blade.php"), "@lang('x')").unwrap();

        let paths = collect_paths(dir.path(), &[]);
        assert_eq!(paths, ["home.blade.php"]);
    }

    #[test]
    fn test_excluded_directories_are_pruned() {
        let dir = tempdir().unwrap();
        for sub in ["vendor", "storage", "lang"] {
            fs::create_dir(dir.path().join(sub)).unwrap();
            fs::write(dir.path().join(sub).join("file.php"), "<?php").unwrap();
        }
        fs::create_dir(dir.path().join("app")).unwrap();
        fs::write(dir.path().join("app").join("Kernel.php"), "<?php").unwrap();

        let paths = collect_paths(dir.path(), &excluded_dirs(&[]));
        assert_eq!(paths, ["app/Kernel.php"]);
    }

    #[test]
    fn test_custom_excluded_directory() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("generated")).unwrap();
        fs::write(dir.path().join("generated").join("cache.php"), "<?php").unwrap();
        fs::write(dir.path().join("index.php"), "<?php").unwrap();

        let excluded = excluded_dirs(&["generated".to_string()]);
        let paths = collect_paths(dir.path(), &excluded);
        assert_eq!(paths, ["index.php"]);
    }

    #[test]
    fn test_undecodable_file_is_an_error_not_a_stop() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("bad.php"), [0xff, 0xfe, 0x00]).unwrap();
        fs::write(dir.path().join("good.php"), "<?php").unwrap();

        let results: Vec<_> = scan(dir.path(), &[], &suffixes()).collect();
        assert_eq!(results.iter().filter(|r| r.is_err()).count(), 1);
        assert_eq!(results.iter().filter(|r| r.is_ok()).count(), 1);
    }

    #[test]
    fn test_relative_paths_are_relative_to_root() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("resources").join("views")).unwrap();
        fs::write(
            dir.path().join("resources").join("views").join("home.blade.php"),
            "@lang('x')",
        )
        .unwrap();

        let paths = collect_paths(dir.path(), &[]);
        assert_eq!(paths, ["resources/views/home.blade.php"]);
    }
}
