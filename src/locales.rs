//! Locale discovery.
//!
//! Locales are derived from the translations root's layout: each immediate
//! subdirectory is a locale holding grouped catalogs, and each top-level
//! `<locale>.json` file is a locale with a flat catalog. The deprecated
//! `vendor.json` file is never a locale.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::catalog::{self, Catalog, FLAT_GROUP, VENDOR_FILE};

/// Default locale, synthesized when the translations root is empty.
pub const DEFAULT_LOCALE: &str = "en";

/// List the locales available under the translations root.
///
/// If no subdirectory and no top-level JSON catalog exists, the default
/// locale is synthesized and an empty `en.json` is created on disk so a
/// first run on a fresh project has somewhere to put its keys.
pub fn available_locales(root: &Path) -> Result<BTreeSet<String>> {
    let mut locales = BTreeSet::new();

    if root.is_dir() {
        let entries = fs::read_dir(root)
            .with_context(|| format!("Failed to read translations root: {}", root.display()))?;

        for entry in entries {
            let entry = entry?;
            let path = entry.path();
            let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
                continue;
            };

            if path.is_dir() {
                locales.insert(name.to_string());
            } else if name != VENDOR_FILE
                && let Some(stem) = name.strip_suffix(".json")
            {
                locales.insert(stem.to_string());
            }
        }
    }

    if locales.is_empty() {
        let flat_path = catalog::catalog_path(root, DEFAULT_LOCALE, FLAT_GROUP);
        catalog::save(&flat_path, &Catalog::new())?;
        locales.insert(DEFAULT_LOCALE.to_string());
    }

    Ok(locales)
}
