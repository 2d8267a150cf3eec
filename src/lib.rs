//! Langfill - missing-translation finder for Laravel-style projects
//!
//! Langfill scans a source tree for translation-lookup calls (`__()`,
//! `trans()`, `@lang`, attribute bindings and the rest), reconciles the
//! referenced keys against the per-locale catalog files under the
//! translations root, and inserts a placeholder for every key that is
//! referenced but not yet defined. Placeholders equal the key text itself,
//! so nothing is silently missing at runtime and a later translation pass
//! can grep for untranslated strings.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer
//! - `config`: Configuration file loading and parsing
//! - `scanner`: Lazy source-tree walker yielding candidate files
//! - `extract`: The translation-call pattern set
//! - `keys`: Grouped-vs-flat key classification
//! - `catalog`: Dual-format (JSON / PHP array) catalog store
//! - `locales`: Locale discovery under the translations root
//! - `reconcile`: The scan-and-merge engine
//! - `reporter`: Progress and summary output

pub mod catalog;
pub mod cli;
pub mod config;
pub mod extract;
pub mod keys;
pub mod locales;
pub mod reconcile;
pub mod reporter;
pub mod scanner;
