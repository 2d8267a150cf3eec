//! Reconciliation of extracted keys against on-disk catalogs.
//!
//! One run walks the source tree, aggregates every referenced translation
//! key into a grouped set and a flat set, then pads each locale's catalogs
//! with placeholder entries for the keys it is missing. Placeholders equal
//! the key text itself; existing values are never overwritten, so a run is
//! idempotent. A trailing cleanup step retires the deprecated `vendor.json`
//! catalog by folding it into the default locale.

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use serde_json::Value;

use crate::catalog::{self, FLAT_GROUP, VENDOR_FILE};
use crate::config::Config;
use crate::keys::{self, TranslationKey};
use crate::locales::{self, DEFAULT_LOCALE};
use crate::{extract, reporter, scanner};

/// Counters reported at the end of a run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Distinct grouped (dotted) keys referenced by the source tree.
    pub grouped_found: usize,
    /// Distinct flat keys referenced by the source tree.
    pub flat_found: usize,
    /// Placeholder entries inserted into grouped catalogs.
    pub grouped_added: usize,
    /// Placeholder entries inserted into flat catalogs.
    pub flat_added: usize,
    pub files_scanned: usize,
    pub files_skipped: usize,
    /// True when a `vendor.json` was found and retired.
    pub vendor_migrated: bool,
}

/// The deduplicated key sets produced by one scan.
#[derive(Debug, Default)]
struct KeySets {
    grouped: BTreeSet<String>,
    flat: BTreeSet<String>,
    files_scanned: usize,
    files_skipped: usize,
}

/// One scan-and-merge pass over a project.
///
/// All paths and options are provided at construction; the engine holds no
/// ambient state and touches only the given translations root.
pub struct Reconciler {
    config: Config,
    scan_root: PathBuf,
    lang_root: PathBuf,
    verbose: bool,
}

impl Reconciler {
    pub fn new(config: Config, scan_root: &Path, lang_root: &Path, verbose: bool) -> Self {
        Self {
            config,
            scan_root: scan_root.to_path_buf(),
            lang_root: lang_root.to_path_buf(),
            verbose,
        }
    }

    /// Scan the source tree and bring every locale's catalogs up to date.
    pub fn run(&self) -> Result<RunSummary> {
        let sets = self.collect_keys();
        let locales = locales::available_locales(&self.lang_root)?;

        let grouped_added = self.merge_grouped(&sets.grouped, &locales)?;
        let flat_added = self.merge_flat(&sets.flat, &locales)?;
        let vendor_migrated = self.migrate_vendor()?;

        Ok(RunSummary {
            grouped_found: sets.grouped.len(),
            flat_found: sets.flat.len(),
            grouped_added,
            flat_added,
            files_scanned: sets.files_scanned,
            files_skipped: sets.files_skipped,
            vendor_migrated,
        })
    }

    /// Walk the source tree and classify every extracted key into the
    /// grouped or flat set. Files that cannot be read are counted and, in
    /// verbose mode, reported; the scan always continues.
    fn collect_keys(&self) -> KeySets {
        let mut sets = KeySets::default();
        let excluded = scanner::excluded_dirs(&self.config.exclude_dirs);

        for result in scanner::scan(&self.scan_root, &excluded, &self.config.file_suffixes) {
            let file = match result {
                Ok(file) => file,
                Err(err) => {
                    sets.files_skipped += 1;
                    if self.verbose {
                        reporter::warn_skipped_file(&err.path, &err.message);
                    }
                    continue;
                }
            };
            sets.files_scanned += 1;

            let raw_keys = extract::extract(&file.content);
            for raw in &raw_keys {
                match keys::classify(raw) {
                    Some(TranslationKey::Grouped { .. }) => {
                        sets.grouped.insert(raw.clone());
                    }
                    Some(TranslationKey::Flat(key)) => {
                        sets.flat.insert(key);
                    }
                    None => {}
                }
            }

            if self.verbose {
                let mut file_keys = raw_keys;
                file_keys.sort();
                file_keys.dedup();
                reporter::print_file_keys(&file.relative_path, &file_keys);
            }
        }

        sets
    }

    /// Insert placeholders for grouped keys, one load-merge-save cycle per
    /// `(locale, group)` pair. Returns the number of insertions.
    fn merge_grouped(
        &self,
        grouped: &BTreeSet<String>,
        locales: &BTreeSet<String>,
    ) -> Result<usize> {
        // Bucket the in-group keys by group so each catalog file is
        // loaded and written at most once per locale.
        let mut by_group: BTreeMap<&str, BTreeSet<&str>> = BTreeMap::new();
        for full_key in grouped {
            let Some(TranslationKey::Grouped { .. }) = keys::classify(full_key) else {
                continue;
            };
            let Some((group, key)) = full_key.split_once('.') else {
                continue;
            };
            by_group.entry(group).or_default().insert(key);
        }

        let mut added = 0;
        for (&group, group_keys) in &by_group {
            if self.config.exclude_groups.iter().any(|g| g == group) {
                continue;
            }

            for locale in locales {
                if self.is_excluded_locale(locale) {
                    continue;
                }

                let path = catalog::catalog_path(&self.lang_root, locale, group);
                let mut translations = catalog::load(&path);

                let mut changed = false;
                for key in group_keys {
                    if !translations.contains_key(*key) {
                        translations.insert(key.to_string(), Value::String(key.to_string()));
                        changed = true;
                        added += 1;
                        if self.verbose {
                            reporter::print_added(locale, Some(group), key);
                        }
                    }
                }

                if changed {
                    if self.config.sort_keys {
                        translations = catalog::sorted(&translations);
                    }
                    catalog::save(&path, &translations)?;
                }
            }
        }

        Ok(added)
    }

    /// Insert placeholders for flat keys into each locale's JSON catalog.
    /// Returns the number of insertions.
    fn merge_flat(&self, flat: &BTreeSet<String>, locales: &BTreeSet<String>) -> Result<usize> {
        let mut added = 0;

        for locale in locales {
            // vendor is a grouped-catalog namespace, never a flat locale
            if locale == "vendor" || self.is_excluded_locale(locale) {
                continue;
            }

            let path = catalog::catalog_path(&self.lang_root, locale, FLAT_GROUP);
            let mut translations = catalog::load(&path);

            let mut changed = false;
            for key in flat {
                // Dotted keys were routed to grouped catalogs already.
                if key.contains('.') {
                    continue;
                }
                if !translations.contains_key(key) {
                    translations.insert(key.clone(), Value::String(key.clone()));
                    changed = true;
                    added += 1;
                    if self.verbose {
                        reporter::print_added(locale, None, key);
                    }
                }
            }

            if changed {
                if self.config.sort_keys {
                    translations = catalog::sorted(&translations);
                }
                catalog::save(&path, &translations)?;
            }
        }

        Ok(added)
    }

    /// Fold a deprecated `vendor.json` into the default locale's flat
    /// catalog, then delete it. Vendor entries win key collisions. Returns
    /// true when a vendor catalog was found.
    fn migrate_vendor(&self) -> Result<bool> {
        let vendor_path = self.lang_root.join(VENDOR_FILE);
        if !vendor_path.exists() {
            return Ok(false);
        }

        let vendor = catalog::load(&vendor_path);
        if !vendor.is_empty() {
            let target = catalog::catalog_path(&self.lang_root, DEFAULT_LOCALE, FLAT_GROUP);
            let mut translations = catalog::load(&target);
            for (key, value) in vendor {
                translations.insert(key, value);
            }
            if self.config.sort_keys {
                translations = catalog::sorted(&translations);
            }
            catalog::save(&target, &translations)?;
        }

        if let Err(err) = fs::remove_file(&vendor_path) {
            reporter::warn(&format!(
                "Failed to delete {}: {}",
                vendor_path.display(),
                err
            ));
        }

        Ok(true)
    }

    fn is_excluded_locale(&self, locale: &str) -> bool {
        self.config.exclude_langs.iter().any(|l| l == locale)
    }
}
