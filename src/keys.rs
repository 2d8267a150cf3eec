//! Translation key classification.
//!
//! Every raw key pulled out of a source file is either *grouped* (it starts
//! with a group prefix like `members.` and lives in a per-group catalog
//! file) or *flat* (it is a plain string that lives in the locale-wide JSON
//! catalog).

use std::sync::LazyLock;

use regex::Regex;

// A key belongs to a group iff it starts with a group token followed by a dot.
static GROUP_PREFIX_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]+\.").unwrap());

/// A classified translation key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TranslationKey {
    /// A dotted key of form `group.rest`; `key` keeps any further dots verbatim.
    Grouped { group: String, key: String },
    /// A plain key stored directly in the locale's flat JSON catalog.
    Flat(String),
}

/// Classify a raw key string extracted from source text.
///
/// Splits at the first `.` only; `"members.profile.title"` becomes group
/// `members` with key `profile.title`. Returns `None` for keys that should
/// be discarded: a leading dot (empty group) or a trailing dot with nothing
/// after it (empty in-group key).
pub fn classify(raw: &str) -> Option<TranslationKey> {
    if !GROUP_PREFIX_REGEX.is_match(raw) {
        if raw.starts_with('.') {
            return None;
        }
        return Some(TranslationKey::Flat(raw.to_string()));
    }

    let (group, key) = raw.split_once('.')?;
    if group.is_empty() || key.is_empty() {
        return None;
    }

    Some(TranslationKey::Grouped {
        group: group.to_string(),
        key: key.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_grouped() {
        assert_eq!(
            classify("members.title"),
            Some(TranslationKey::Grouped {
                group: "members".to_string(),
                key: "title".to_string(),
            })
        );
    }

    #[test]
    fn test_classify_grouped_keeps_further_dots() {
        assert_eq!(
            classify("members.profile.title"),
            Some(TranslationKey::Grouped {
                group: "members".to_string(),
                key: "profile.title".to_string(),
            })
        );
    }

    #[test]
    fn test_classify_flat() {
        assert_eq!(
            classify("hello"),
            Some(TranslationKey::Flat("hello".to_string()))
        );
    }

    #[test]
    fn test_classify_flat_with_spaces() {
        // Sentence-style keys are flat even though they contain punctuation.
        assert_eq!(
            classify("Welcome back!"),
            Some(TranslationKey::Flat("Welcome back!".to_string()))
        );
    }

    #[test]
    fn test_classify_sentence_with_inner_dot_is_flat() {
        // "Mr. Smith" has a dot but no leading group token (space breaks it).
        assert_eq!(
            classify("Hello Mr. Smith"),
            Some(TranslationKey::Flat("Hello Mr. Smith".to_string()))
        );
    }

    #[test]
    fn test_classify_leading_dot_discarded() {
        assert_eq!(classify(".oops"), None);
    }

    #[test]
    fn test_classify_trailing_dot_discarded() {
        assert_eq!(classify("group."), None);
    }

    #[test]
    fn test_classify_group_with_underscore_and_dash() {
        assert_eq!(
            classify("my_group-2.key"),
            Some(TranslationKey::Grouped {
                group: "my_group-2".to_string(),
                key: "key".to_string(),
            })
        );
    }
}
