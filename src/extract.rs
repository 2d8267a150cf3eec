//! Translation-call extraction.
//!
//! Pulls raw translation keys out of a file's text by running a fixed,
//! ordered set of regular expressions over it. Each pattern recognizes one
//! textual idiom for invoking a translation lookup: plain helper calls,
//! Blade directives, template interpolations and attribute bindings.
//!
//! The pattern set is fixed at compile time; the `transFunctions` config
//! list is informational and does not change what is matched.

use std::sync::LazyLock;

use regex::Regex;

/// A single recognition pattern paired with the capture group that holds
/// the key. Most patterns capture the key in group 1; component-tag
/// patterns wrap the binding in an outer group and need group 2.
pub struct Matcher {
    regex: Regex,
    group: usize,
}

impl Matcher {
    fn new(pattern: &str) -> Self {
        Self {
            regex: Regex::new(pattern).unwrap(),
            group: 1,
        }
    }

    fn with_group(pattern: &str, group: usize) -> Self {
        Self {
            regex: Regex::new(pattern).unwrap(),
            group,
        }
    }
}

/// The ordered pattern set. One entry per call idiom; a file is matched
/// against every entry and all captures are collected.
static MATCHERS: LazyLock<Vec<Matcher>> = LazyLock::new(|| {
    vec![
        // @lang directive
        Matcher::new(r#"@lang\(\s*['"]([^'"]+)['"]\s*\)"#),
        // __ helper, with and without a parameter list
        Matcher::new(r#"__\(\s*['"]([^'"]+)['"]\s*\)"#),
        Matcher::new(r#"__\(\s*['"]([^'"]+)['"]\s*,"#),
        // trans helper, with and without a parameter list
        Matcher::new(r#"trans\(\s*['"]([^'"]+)['"]\s*\)"#),
        Matcher::new(r#"trans\(\s*['"]([^'"]+)['"]\s*,"#),
        // Lang::get, with and without a parameter list
        Matcher::new(r#"Lang::get\(\s*['"]([^'"]+)['"]\s*\)"#),
        Matcher::new(r#"Lang::get\(\s*['"]([^'"]+)['"]\s*,"#),
        // pluralization variants always carry a count argument
        Matcher::new(r#"trans_choice\(\s*['"]([^'"]+)['"]\s*,"#),
        Matcher::new(r#"Lang::choice\(\s*['"]([^'"]+)['"]\s*,"#),
        // component attribute bindings: :attr="__('key')" and :attr='__("key")'
        Matcher::new(r#":[a-zA-Z0-9_-]+="__\(['"]([^'"]+)['"]\)"#),
        Matcher::new(r#":[a-zA-Z0-9_-]+='__\(['"]([^'"]+)['"]\)"#),
        // :attr="__("key")" with bare inner double quotes
        Matcher::new(r#":[a-zA-Z0-9_-]+="__\("([^"]+)"\)"#),
        // plain attribute holding an interpolated call: attr="{{ __('key') }}"
        Matcher::new(r#"(?is)[a-zA-Z0-9_-]+="\{\{\s*__\(['"]([^'"]+)['"]\s*\)\s*\}\}""#),
        Matcher::new(r#"(?is)[a-zA-Z0-9_-]+='\{\{\s*__\(['"]([^'"]+)['"]\s*\)\s*\}\}'"#),
        // bare interpolations, escaping and non-escaping delimiters
        Matcher::new(r#"\{\{\s*__\(['"]([^'"]+)['"]\)\s*\}\}"#),
        Matcher::new(r#"\{!!\s*__\(['"]([^'"]+)['"]\)\s*!!\}"#),
        // <x-component ... :attr="__('key')" ...> — the binding sits inside a
        // larger attribute list, so the key is in the nested second group
        Matcher::with_group(
            r#"(?s)<x-[^>]*?(\s+:[a-zA-Z0-9_-]+\s*=\s*"__\(['"]([^'"]+)['"][^>]*?)>"#,
            2,
        ),
    ]
});

/// Extract every raw translation key referenced in `content`.
///
/// Keys are returned in pattern order then match order. Duplicates within a
/// file are kept; deduplication happens at the aggregate level.
pub fn extract(content: &str) -> Vec<String> {
    let mut keys = Vec::new();

    for matcher in MATCHERS.iter() {
        for captures in matcher.regex.captures_iter(content) {
            if let Some(m) = captures.get(matcher.group) {
                keys.push(m.as_str().to_string());
            }
        }
    }

    keys
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract_unique(content: &str) -> Vec<String> {
        let mut keys = extract(content);
        keys.sort();
        keys.dedup();
        keys
    }

    #[test]
    fn test_helper_call() {
        assert_eq!(extract_unique("<?php echo __('greeting');"), ["greeting"]);
    }

    #[test]
    fn test_helper_call_with_parameters() {
        assert_eq!(
            extract_unique("__('welcome.user', ['name' => $name])"),
            ["welcome.user"]
        );
    }

    #[test]
    fn test_trans_call() {
        assert_eq!(extract_unique("trans('members.title')"), ["members.title"]);
    }

    #[test]
    fn test_lang_facade() {
        let content = "Lang::get('auth.failed'); Lang::choice('apples', 3);";
        assert_eq!(extract_unique(content), ["apples", "auth.failed"]);
    }

    #[test]
    fn test_trans_choice() {
        assert_eq!(
            extract_unique("trans_choice('messages.count', $n)"),
            ["messages.count"]
        );
    }

    #[test]
    fn test_lang_directive() {
        assert_eq!(extract_unique("<p>@lang('nav.home')</p>"), ["nav.home"]);
    }

    #[test]
    fn test_interpolation() {
        assert_eq!(extract_unique("{{ __('Save') }}"), ["Save"]);
        assert_eq!(extract_unique("{!! __('raw.html') !!}"), ["raw.html"]);
    }

    #[test]
    fn test_attribute_binding_single_in_double() {
        assert_eq!(
            extract_unique(r#"<x-input :placeholder="__('forms.email')" />"#),
            ["forms.email"]
        );
    }

    #[test]
    fn test_attribute_binding_double_in_single() {
        assert_eq!(
            extract_unique(r#"<x-input :label='__("forms.name")' />"#),
            ["forms.name"]
        );
    }

    #[test]
    fn test_attribute_binding_double_in_double() {
        assert_eq!(
            extract_unique(r#":title="__("pages.about")""#),
            ["pages.about"]
        );
    }

    #[test]
    fn test_templated_attribute_double_quoted() {
        assert_eq!(
            extract_unique(r#"<input placeholder="{{ __('Search') }}">"#),
            ["Search"]
        );
    }

    #[test]
    fn test_templated_attribute_single_quoted() {
        assert_eq!(
            extract_unique(r#"<input title='{{ __("nav.menu") }}'>"#),
            ["nav.menu"]
        );
    }

    #[test]
    fn test_component_tag_spanning_lines() {
        let content = "<x-alert\n    class=\"mt-2\"\n    :message=\"__('alerts.saved')\">";
        assert_eq!(extract_unique(content), ["alerts.saved"]);
    }

    #[test]
    fn test_duplicates_within_file_are_kept() {
        let keys = extract("__('hi') __('hi')");
        assert_eq!(keys, ["hi", "hi"]);
    }

    #[test]
    fn test_no_match_on_unquoted_argument() {
        assert!(extract("__($variable)").is_empty());
        assert!(extract("trans($key, [])").is_empty());
    }

    #[test]
    fn test_mixed_file() {
        let content = r#"
            <h1>{{ __('members.profile.title') }}</h1>
            <p>@lang('Welcome back!')</p>
            <x-button :label="__('actions.save')" />
        "#;
        assert_eq!(
            extract_unique(content),
            ["Welcome back!", "actions.save", "members.profile.title"]
        );
    }
}
