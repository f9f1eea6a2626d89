//! Literal search patterns shared by both rewriters.
//!
//! Both the production and the staging values are "old" values: whichever
//! environment is active, every known base URL and API key is rewritten to
//! the resolved one.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::{Captures, NoExpand, Regex};

use crate::config::EnvironmentConfig;
use crate::environment::ResolvedEnvironment;

/// Placeholder token left in docs for readers to fill in.
pub const API_KEY_PLACEHOLDER: &str = "YOUR_API_KEY";

// Quoted forms first so the match carries its quotes.
static PLACEHOLDER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r#"'{0}'|"{0}"|{0}"#,
        API_KEY_PLACEHOLDER
    ))
    .unwrap()
});

/// Compile a regex matching `value` literally.
///
/// Returns `None` for an empty value: an empty pattern matches between
/// every character and would splice the replacement everywhere. A value too
/// large to compile is also skipped, with a warning.
///
/// # Example
///
/// ```
/// use docenv::rewrite::literal_pattern;
///
/// let re = literal_pattern("https://api.example.com/v1?x=(1)").unwrap();
/// assert!(re.is_match("curl https://api.example.com/v1?x=(1)"));
/// assert!(!re.is_match("https://apiXexample.com/v1?x=(1)"));
/// assert!(literal_pattern("").is_none());
/// ```
pub fn literal_pattern(value: &str) -> Option<Regex> {
    if value.is_empty() {
        return None;
    }
    match Regex::new(&regex::escape(value)) {
        Ok(re) => Some(re),
        Err(e) => {
            tracing::warn!(
                "Ignoring configured value of {} bytes, it cannot be matched: {}",
                value.len(),
                e
            );
            None
        }
    }
}

/// One old literal and the value that replaces it.
#[derive(Debug, Clone)]
pub struct LiteralReplacement {
    pattern: Regex,
    replacement: String,
}

impl LiteralReplacement {
    /// Build a replacement; `None` if `old` is empty.
    pub fn new(old: &str, replacement: &str) -> Option<Self> {
        literal_pattern(old).map(|pattern| Self {
            pattern,
            replacement: replacement.to_string(),
        })
    }

    /// Replace every occurrence. The replacement is inserted verbatim.
    pub fn apply<'a>(&self, text: &'a str) -> Cow<'a, str> {
        self.pattern
            .replace_all(text, NoExpand(self.replacement.as_str()))
    }
}

/// The full set of URL and key substitutions for one run.
#[derive(Debug, Clone)]
pub struct Replacements {
    urls: Vec<LiteralReplacement>,
    keys: Vec<LiteralReplacement>,
    api_key: String,
}

impl Replacements {
    /// Build the substitutions from the known production and staging values.
    ///
    /// A missing environment or empty value contributes no pattern.
    pub fn new(config: &EnvironmentConfig, resolved: &ResolvedEnvironment) -> Self {
        let known: Vec<_> = [config.production(), config.staging()]
            .into_iter()
            .flatten()
            .collect();

        let urls = known
            .iter()
            .filter_map(|s| LiteralReplacement::new(&s.base_url, &resolved.base_url))
            .collect();
        let keys = known
            .iter()
            .filter_map(|s| LiteralReplacement::new(&s.api_key, &resolved.api_key))
            .collect();

        Self {
            urls,
            keys,
            api_key: resolved.api_key.clone(),
        }
    }

    /// Number of compiled patterns (URLs plus keys).
    pub fn len(&self) -> usize {
        self.urls.len() + self.keys.len()
    }

    /// Whether no pattern could be built at all.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Rewrite known base URLs. Returns the text and whether it changed.
    pub fn replace_urls(&self, text: &str) -> (String, bool) {
        apply_all(&self.urls, text)
    }

    /// Rewrite known API keys. Returns the text and whether it changed.
    pub fn replace_keys(&self, text: &str) -> (String, bool) {
        apply_all(&self.keys, text)
    }

    /// Replace `YOUR_API_KEY` placeholders, keeping any surrounding quotes.
    ///
    /// # Example
    ///
    /// ```
    /// use docenv::config::{EnvironmentConfig, EnvironmentSettings};
    /// use docenv::environment::{BranchDetection, ResolvedEnvironment};
    /// use docenv::rewrite::Replacements;
    ///
    /// let config = EnvironmentConfig::new()
    ///     .with_environment("production", EnvironmentSettings::new("https://api.example.com", "sk_live"));
    /// let resolved = ResolvedEnvironment::resolve(&config, BranchDetection::from_flag("main")).unwrap();
    /// let replacements = Replacements::new(&config, &resolved);
    ///
    /// let (text, changed) = replacements.replace_placeholders(r#"key = 'YOUR_API_KEY'"#);
    /// assert!(changed);
    /// assert_eq!(text, "key = 'sk_live'");
    /// ```
    pub fn replace_placeholders(&self, text: &str) -> (String, bool) {
        let replaced = PLACEHOLDER_REGEX.replace_all(text, |caps: &Captures| {
            let found = &caps[0];
            if found.starts_with('\'') {
                format!("'{}'", self.api_key)
            } else if found.starts_with('"') {
                format!("\"{}\"", self.api_key)
            } else {
                self.api_key.clone()
            }
        });
        let changed = replaced != text;
        (replaced.into_owned(), changed)
    }

    /// Rewrite URLs then keys, the way structured documents are handled.
    pub fn replace_urls_and_keys(&self, text: &str) -> String {
        let (text, _) = self.replace_urls(text);
        let (text, _) = self.replace_keys(&text);
        text
    }
}

fn apply_all(replacements: &[LiteralReplacement], text: &str) -> (String, bool) {
    let mut current = text.to_string();
    let mut changed = false;
    for replacement in replacements {
        let updated = replacement.apply(&current).into_owned();
        if updated != current {
            changed = true;
            current = updated;
        }
    }
    (current, changed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{EnvironmentSettings, PRODUCTION, STAGING};
    use crate::environment::BranchDetection;

    const PROD_URL: &str = "https://api.example.com";
    const STAGING_URL: &str = "https://staging.example.com";

    fn config() -> EnvironmentConfig {
        EnvironmentConfig::new()
            .with_environment(PRODUCTION, EnvironmentSettings::new(PROD_URL, "sk_live_1"))
            .with_environment(STAGING, EnvironmentSettings::new(STAGING_URL, "sk_test_1"))
    }

    fn replacements_for(branch: &str) -> Replacements {
        let config = config();
        let resolved =
            ResolvedEnvironment::resolve(&config, BranchDetection::from_flag(branch)).unwrap();
        Replacements::new(&config, &resolved)
    }

    #[test]
    fn oversized_value_is_skipped() {
        // Far beyond the regex crate's default compiled size limit.
        let huge = "x".repeat(12 << 20);
        assert!(literal_pattern(&huge).is_none());
        assert!(LiteralReplacement::new(&huge, "new").is_none());
        assert!(literal_pattern("sk_live_1").is_some());
    }

    #[test]
    fn literal_pattern_escapes_metacharacters() {
        let re = literal_pattern("a.b*c+d?e^f$g{h}i(j)k|l[m]n\\o").unwrap();
        assert!(re.is_match("a.b*c+d?e^f$g{h}i(j)k|l[m]n\\o"));
        assert!(!re.is_match("aXb*c+d?e^f$g{h}i(j)k|l[m]n\\o"));
    }

    #[test]
    fn literal_pattern_rejects_empty() {
        assert!(literal_pattern("").is_none());
        assert!(LiteralReplacement::new("", "x").is_none());
    }

    #[test]
    fn replacement_is_not_expanded() {
        let replacement = LiteralReplacement::new("old", "$1-$0-${name}").unwrap();
        assert_eq!(replacement.apply("x old y"), "x $1-$0-${name} y");
    }

    #[test]
    fn replaces_every_occurrence() {
        let replacements = replacements_for("main");
        let input = format!("{STAGING_URL}/a and {STAGING_URL}/b");
        let (out, changed) = replacements.replace_urls(&input);
        assert!(changed);
        assert_eq!(out, format!("{PROD_URL}/a and {PROD_URL}/b"));
    }

    #[test]
    fn production_values_on_production_are_unchanged() {
        let replacements = replacements_for("main");
        let input = format!("{PROD_URL} sk_live_1");
        let (out, url_changed) = replacements.replace_urls(&input);
        let (out, key_changed) = replacements.replace_keys(&out);
        assert!(!url_changed);
        assert!(!key_changed);
        assert_eq!(out, input);
    }

    #[test]
    fn staging_run_rewrites_production_literals() {
        let replacements = replacements_for("dev");
        let out = replacements.replace_urls_and_keys(&format!("{PROD_URL} sk_live_1"));
        assert_eq!(out, format!("{STAGING_URL} sk_test_1"));
    }

    #[test]
    fn placeholders_keep_their_quotes() {
        let replacements = replacements_for("main");
        let (out, changed) = replacements
            .replace_placeholders(r#"a "YOUR_API_KEY" b 'YOUR_API_KEY' c YOUR_API_KEY"#);
        assert!(changed);
        assert_eq!(out, r#"a "sk_live_1" b 'sk_live_1' c sk_live_1"#);
    }

    #[test]
    fn placeholders_absent_means_unchanged() {
        let replacements = replacements_for("main");
        let (out, changed) = replacements.replace_placeholders("no key here");
        assert!(!changed);
        assert_eq!(out, "no key here");
    }

    #[test]
    fn missing_staging_contributes_no_patterns() {
        let config = EnvironmentConfig::new()
            .with_environment(PRODUCTION, EnvironmentSettings::new(PROD_URL, "sk_live_1"));
        let resolved =
            ResolvedEnvironment::resolve(&config, BranchDetection::from_flag("main")).unwrap();
        let replacements = Replacements::new(&config, &resolved);
        assert_eq!(replacements.len(), 2);
        assert!(!replacements.is_empty());
    }

    #[test]
    fn empty_values_contribute_no_patterns() {
        let config = EnvironmentConfig::new()
            .with_environment(PRODUCTION, EnvironmentSettings::new("", ""))
            .with_environment(STAGING, EnvironmentSettings::new("", ""));
        let resolved =
            ResolvedEnvironment::resolve(&config, BranchDetection::from_flag("main")).unwrap();
        let replacements = Replacements::new(&config, &resolved);
        assert!(replacements.is_empty());
        let (out, changed) = replacements.replace_urls("anything");
        assert!(!changed);
        assert_eq!(out, "anything");
    }
}
