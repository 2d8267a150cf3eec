//! Catalog loading and persistence.
//!
//! A catalog is one locale-and-group's key-to-translation mapping, stored
//! as exactly one file on disk. Values are usually strings; nested
//! sections and other scalars found in existing files are carried through
//! load and save untouched. Two serialization formats exist, selected by
//! the target path's extension:
//!
//! - *Flat* (`.json`): pretty-printed JSON object, one per locale, holding
//!   the ungrouped sentence-style keys.
//! - *Grouped* (`.php`): a PHP source file whose body is a literal
//!   `return array (...);` statement, one file per `(locale, group)`.
//!
//! The in-memory representation is format-agnostic (an order-preserving
//! string map), so merge logic never branches on format.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde_json::{Map, Value};

/// Sentinel group name routing a key to the locale's flat JSON catalog.
pub const FLAT_GROUP: &str = "_json";

/// File name of the deprecated vendor catalog (see [`crate::reconcile`]).
pub const VENDOR_FILE: &str = "vendor.json";

/// An in-memory catalog: key to translation value, insertion-ordered.
pub type Catalog = Map<String, Value>;

/// On-disk serialization format, selected by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFormat {
    /// Locale-wide JSON catalog of ungrouped keys.
    Flat,
    /// Per-group PHP array file.
    Grouped,
}

impl CatalogFormat {
    fn for_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => CatalogFormat::Flat,
            _ => CatalogFormat::Grouped,
        }
    }
}

/// Resolve the on-disk path for a `(locale, group)` catalog.
///
/// Grouped catalogs live at `<root>/<locale>/<group>.php`; the flat catalog
/// (sentinel group [`FLAT_GROUP`]) lives at `<root>/<locale>.json`. The
/// pseudo-locale `vendor` is never a valid flat-catalog locale, so its flat
/// path is redirected to the default locale `en`.
pub fn catalog_path(root: &Path, locale: &str, group: &str) -> PathBuf {
    if group == FLAT_GROUP {
        let locale = if locale == "vendor" { "en" } else { locale };
        return root.join(format!("{locale}.json"));
    }

    root.join(locale).join(format!("{group}.php"))
}

/// Load a catalog from disk.
///
/// A missing file yields an empty catalog. So does a file that fails to
/// parse in its expected format or whose parsed value is not a mapping:
/// malformed catalogs are treated as empty rather than aborting the run.
/// Entries with non-string values (nested sections, numbers) are kept as
/// they are so a later save writes them back untouched.
pub fn load(path: &Path) -> Catalog {
    let Ok(content) = fs::read_to_string(path) else {
        return Catalog::new();
    };

    match CatalogFormat::for_path(path) {
        CatalogFormat::Flat => match serde_json::from_str::<Value>(&content) {
            Ok(Value::Object(map)) => map,
            _ => Catalog::new(),
        },
        CatalogFormat::Grouped => parse_php_array(&content).unwrap_or_default(),
    }
}

/// Persist a catalog, fully overwriting any existing file.
///
/// The containing directory is created if needed. Flat catalogs are written
/// as pretty-printed JSON (serde_json leaves non-ASCII unescaped); grouped
/// catalogs as a `return array (...);` PHP source file.
pub fn save(path: &Path, catalog: &Catalog) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    let content = match CatalogFormat::for_path(path) {
        CatalogFormat::Flat => {
            let json = serde_json::to_string_pretty(&Value::Object(catalog.clone()))
                .context("Failed to serialize catalog")?;
            format!("{json}\n")
        }
        CatalogFormat::Grouped => write_php_array(catalog),
    };

    fs::write(path, content).with_context(|| format!("Failed to write file: {}", path.display()))
}

/// Return a copy of `catalog` with entries sorted by key.
pub fn sorted(catalog: &Catalog) -> Catalog {
    let mut entries: Vec<_> = catalog.iter().collect();
    entries.sort_by_key(|(k, _)| k.clone());
    entries
        .into_iter()
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect()
}

/// Serialize a catalog in `var_export` style, nested sections included.
fn write_php_array(catalog: &Catalog) -> String {
    let mut out = String::from("<?php\n\nreturn array (\n");
    write_php_entries(&mut out, catalog, 1);
    out.push_str(");\n");
    out
}

fn write_php_entries(out: &mut String, map: &Catalog, depth: usize) {
    let indent = "  ".repeat(depth);
    for (key, value) in map {
        let key = escape_php(key);
        match value {
            Value::Object(inner) => {
                out.push_str(&format!("{indent}'{key}' => \n{indent}array (\n"));
                write_php_entries(out, inner, depth + 1);
                out.push_str(&format!("{indent}),\n"));
            }
            Value::String(s) => {
                out.push_str(&format!("{indent}'{key}' => '{}',\n", escape_php(s)));
            }
            Value::Null => out.push_str(&format!("{indent}'{key}' => NULL,\n")),
            other => out.push_str(&format!("{indent}'{key}' => {other},\n")),
        }
    }
}

fn escape_php(s: &str) -> String {
    s.replace('\\', "\\\\").replace('\'', "\\'")
}

/// Parse a PHP translation file of the form `<?php return array(...);`.
///
/// Accepts both `array (...)` and `[...]` bodies, single- or double-quoted
/// string keys, nested arrays, scalar values (strings, numbers, booleans,
/// null), trailing commas, and `//`, `#` and `/* */` comments. Anything
/// else (non-string keys, expressions, missing `return`) makes the file
/// invalid and yields `None`.
fn parse_php_array(content: &str) -> Option<Catalog> {
    let mut p = PhpParser::new(content);

    if p.rest().starts_with("<?php") {
        p.advance(5);
    }
    p.skip_trivia();
    if !p.eat_keyword("return") {
        return None;
    }
    p.skip_trivia();

    let catalog = p.parse_array()?;

    p.skip_trivia();
    p.eat_char(';'); // tolerate a missing trailing semicolon
    Some(catalog)
}

/// Minimal cursor over the PHP file's bytes. Keys and values are plain
/// scalar strings, so full tokenization is unnecessary.
struct PhpParser<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> PhpParser<'a> {
    fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    fn rest(&self) -> &'a str {
        &self.input[self.pos..]
    }

    fn advance(&mut self, n: usize) {
        self.pos += n;
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn eat_char(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.advance(expected.len_utf8());
            true
        } else {
            false
        }
    }

    fn eat_str(&mut self, expected: &str) -> bool {
        if self.rest().starts_with(expected) {
            self.advance(expected.len());
            true
        } else {
            false
        }
    }

    fn eat_keyword(&mut self, keyword: &str) -> bool {
        if self.rest().starts_with(keyword) {
            let after = self.rest()[keyword.len()..].chars().next();
            if after.is_none_or(|c| !c.is_alphanumeric() && c != '_') {
                self.advance(keyword.len());
                return true;
            }
        }
        false
    }

    fn skip_trivia(&mut self) {
        loop {
            let rest = self.rest();
            if let Some(c) = rest.chars().next().filter(|c| c.is_whitespace()) {
                self.advance(c.len_utf8());
            } else if rest.starts_with("//") || rest.starts_with('#') {
                let len = rest.find('\n').unwrap_or(rest.len());
                self.advance(len);
            } else if rest.starts_with("/*") {
                match rest.find("*/") {
                    Some(end) => self.advance(end + 2),
                    None => self.advance(rest.len()),
                }
            } else {
                break;
            }
        }
    }

    fn parse_array(&mut self) -> Option<Catalog> {
        let close = if self.eat_keyword("array") {
            self.skip_trivia();
            if !self.eat_char('(') {
                return None;
            }
            ')'
        } else if self.eat_char('[') {
            ']'
        } else {
            return None;
        };

        let mut map = Catalog::new();
        loop {
            self.skip_trivia();
            if self.eat_char(close) {
                break;
            }

            let key = self.parse_string()?;
            self.skip_trivia();
            if !self.eat_str("=>") {
                return None;
            }
            self.skip_trivia();
            let value = self.parse_value()?;
            map.insert(key, value);

            self.skip_trivia();
            if !self.eat_char(',') {
                // No comma: the closer must follow.
                self.skip_trivia();
                if !self.eat_char(close) {
                    return None;
                }
                break;
            }
        }

        Some(map)
    }

    fn parse_value(&mut self) -> Option<Value> {
        match self.peek()? {
            '\'' | '"' => self.parse_string().map(Value::String),
            '[' => self.parse_array().map(Value::Object),
            'a' if self.rest().starts_with("array") => self.parse_array().map(Value::Object),
            _ => {
                if self.eat_keyword("true") || self.eat_keyword("TRUE") {
                    Some(Value::Bool(true))
                } else if self.eat_keyword("false") || self.eat_keyword("FALSE") {
                    Some(Value::Bool(false))
                } else if self.eat_keyword("null") || self.eat_keyword("NULL") {
                    Some(Value::Null)
                } else {
                    self.parse_number()
                }
            }
        }
    }

    fn parse_number(&mut self) -> Option<Value> {
        let rest = self.rest();
        let end = rest
            .char_indices()
            .find(|&(_, c)| !matches!(c, '0'..='9' | '-' | '+' | '.' | 'e' | 'E'))
            .map_or(rest.len(), |(i, _)| i);
        if end == 0 {
            return None;
        }

        let number: serde_json::Number = rest[..end].parse().ok()?;
        self.advance(end);
        Some(Value::Number(number))
    }

    fn parse_string(&mut self) -> Option<String> {
        let quote = self.peek()?;
        if quote != '\'' && quote != '"' {
            return None;
        }
        self.advance(1);

        let mut out = String::new();
        let mut chars = self.rest().char_indices();
        while let Some((i, c)) = chars.next() {
            if c == '\\' {
                let (_, escaped) = chars.next()?;
                match escaped {
                    '\\' => out.push('\\'),
                    c if c == quote => out.push(quote),
                    'n' if quote == '"' => out.push('\n'),
                    't' if quote == '"' => out.push('\t'),
                    // PHP leaves unknown escapes verbatim
                    other => {
                        out.push('\\');
                        out.push(other);
                    }
                }
            } else if c == quote {
                self.advance(i + 1);
                return Some(out);
            } else {
                out.push(c);
            }
        }
        None
    }
}
