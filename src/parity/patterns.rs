//! Grammars for test declarations.
//!
//! Both grammars run over text with every whitespace character removed, so
//! `public void Foo ()` is matched as `publicvoidFoo()`.

use once_cell::sync::Lazy;
use regex::Regex;

use super::tag::Tag;

/// `[<label>Test()]` followed by a public, void, zero-argument method.
///
/// Group 1 is the label, group 2 the method name.
pub const SOURCE_TEST_PATTERN: &str = r"\[(\w*?)Test\(\)\]publicvoid(\w+?)\(\)";

/// `test(<quoted name>,` with either double or single quotes.
///
/// Group 1 holds a double-quoted name, group 2 a single-quoted one.
pub const TARGET_TEST_PATTERN: &str = r#"test\((?:"(\w+)"|'(\w+)'),"#;

static SOURCE_TEST_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(SOURCE_TEST_PATTERN).expect("source test pattern is valid"));

static TARGET_TEST_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(TARGET_TEST_PATTERN).expect("target test pattern is valid"));

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceTest {
    pub tag: Tag,
    pub name: String,
}

impl SourceTest {
    pub fn new(tag: Tag, name: impl Into<String>) -> Self {
        Self {
            tag,
            name: name.into(),
        }
    }
}

pub fn strip_whitespace(text: &str) -> String {
    text.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Extracts tagged test methods in declaration order. Expects stripped text.
pub fn extract_source_tests(stripped: &str) -> Vec<SourceTest> {
    SOURCE_TEST_RE
        .captures_iter(stripped)
        .map(|caps| SourceTest::new(Tag::from_prefix(&caps[1]), &caps[2]))
        .collect()
}

/// Extracts registered test names in call order. Expects stripped text.
pub fn extract_target_tests(stripped: &str) -> Vec<String> {
    TARGET_TEST_RE
        .captures_iter(stripped)
        .filter_map(|caps| caps.get(1).or_else(|| caps.get(2)))
        .map(|m| m.as_str().to_string())
        .collect()
}
