//! Filename sanitization - the fixed substitution table
//!
//! Maps characters that break shells, scripts or foreign filesystems to safe
//! substitutes, then collapses runs of the substitute separators. The table
//! is process-wide immutable data; there is nothing to configure.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Substitutions applied per character. Fullwidth and typographic variants
/// map like their ASCII forms.
static CHAR_MAP: &[(char, char)] = &[
    (':', '_'),
    ('：', '_'), // fullwidth colon U+FF1A
    (',', '-'),
    ('，', '-'), // fullwidth comma U+FF0C
    (' ', '-'),
    ('\u{3000}', '-'), // ideographic space
    (';', '_'),
    ('；', '_'), // fullwidth semicolon U+FF1B
    ('?', '_'),
    ('？', '_'), // fullwidth question mark U+FF1F
    ('<', '_'),
    ('＜', '_'), // fullwidth less-than U+FF1C
    ('>', '_'),
    ('＞', '_'), // fullwidth greater-than U+FF1E
    ('|', '_'),
    ('｜', '_'), // fullwidth vertical bar U+FF5C
    ('"', '_'),
    ('“', '_'), // left double quotation mark U+201C
    ('”', '_'), // right double quotation mark U+201D
    ('‘', '_'), // left single quotation mark U+2018
    ('’', '_'), // right single quotation mark U+2019
    ('*', '_'),
    ('＊', '_'), // fullwidth asterisk U+FF0A
    ('/', '_'),
    ('／', '_'), // fullwidth slash U+FF0F
    ('\\', '_'),
    ('＼', '_'), // fullwidth backslash U+FF3C
];

static LOOKUP: Lazy<HashMap<char, char>> = Lazy::new(|| CHAR_MAP.iter().copied().collect());

/// Replace every mapped character in `name`, then collapse repeated
/// separators.
///
/// Idempotent: no substitute is itself a mapped character, and collapsing
/// leaves nothing left to collapse.
pub fn sanitize_filename(name: &str) -> String {
    let mapped: String = name
        .chars()
        .map(|c| LOOKUP.get(&c).copied().unwrap_or(c))
        .collect();

    collapse(&collapse(&mapped, "--", "-"), "__", "_")
}

/// Replace `pattern` with `with` until no occurrence remains, so a run of any
/// length reduces to a single separator.
fn collapse(name: &str, pattern: &str, with: &str) -> String {
    let mut out = name.to_string();
    while out.contains(pattern) {
        out = out.replace(pattern, with);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_name_untouched() {
        assert_eq!(sanitize_filename("report.txt"), "report.txt");
        assert_eq!(sanitize_filename("a-b_c.tar.gz"), "a-b_c.tar.gz");
        assert_eq!(sanitize_filename("日本語.md"), "日本語.md");
    }

    #[test]
    fn test_basic_replacements() {
        assert_eq!(sanitize_filename("a:b.txt"), "a_b.txt");
        assert_eq!(sanitize_filename("a,b.txt"), "a-b.txt");
        assert_eq!(sanitize_filename("a b.txt"), "a-b.txt");
        assert_eq!(sanitize_filename("a;b?c.txt"), "a_b_c.txt");
        assert_eq!(sanitize_filename("a<b>c|d.txt"), "a_b_c_d.txt");
        assert_eq!(sanitize_filename("a*b/c\\d.txt"), "a_b_c_d.txt");
        assert_eq!(sanitize_filename("a\"b.txt"), "a_b.txt");
    }

    #[test]
    fn test_fullwidth_variants() {
        assert_eq!(sanitize_filename("ファイル：テスト？.txt"), "ファイル_テスト_.txt");
        assert_eq!(sanitize_filename("a，b.txt"), "a-b.txt");
        assert_eq!(sanitize_filename("a\u{3000}b.txt"), "a-b.txt");
        assert_eq!(sanitize_filename("a＊b／c＼d.txt"), "a_b_c_d.txt");
        assert_eq!(sanitize_filename("a＜b＞c｜d；e.txt"), "a_b_c_d_e.txt");
    }

    #[test]
    fn test_typographic_quotes() {
        assert_eq!(sanitize_filename("“quoted”.txt"), "_quoted_.txt");
        assert_eq!(sanitize_filename("it’s ‘here’.txt"), "it_s-_here_.txt");
    }

    #[test]
    fn test_plain_apostrophe_is_kept() {
        // Only the typographic single quotes are mapped.
        assert_eq!(sanitize_filename("it's.txt"), "it's.txt");
    }

    #[test]
    fn test_collapse_dashes() {
        assert_eq!(sanitize_filename("a--b"), "a-b");
        assert_eq!(sanitize_filename("a----b"), "a-b");
    }

    #[test]
    fn test_collapse_underscores() {
        assert_eq!(sanitize_filename("a__b"), "a_b");
        assert_eq!(sanitize_filename("a___b"), "a_b");
    }

    #[test]
    fn test_collapse_after_substitution() {
        // ", " becomes "--" before collapsing.
        assert_eq!(sanitize_filename("Report: Q1, Q2.txt"), "Report_-Q1-Q2.txt");
        assert_eq!(sanitize_filename("a  b.txt"), "a-b.txt");
        assert_eq!(sanitize_filename("a:;b.txt"), "a_b.txt");
    }

    #[test]
    fn test_mixed_separators_do_not_collapse() {
        assert_eq!(sanitize_filename("a_-b"), "a_-b");
        assert_eq!(sanitize_filename("a-_-b"), "a-_-b");
    }

    #[test]
    fn test_reference_name() {
        assert_eq!(sanitize_filename("my file: v1.txt"), "my-file_-v1.txt");
    }

    #[test]
    fn test_idempotent() {
        for name in [
            "my file: v1.txt",
            "Report: Q1, Q2.txt",
            "a--b__c.txt",
            "ファイル：テスト？.txt",
            "“it’s here”.txt",
            "clean.txt",
        ] {
            let once = sanitize_filename(name);
            assert_eq!(sanitize_filename(&once), once, "not idempotent for {:?}", name);
        }
    }
}
