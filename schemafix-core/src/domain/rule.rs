//! Rewrite rules - single text-to-text substitutions
//!
//! A rule pairs a search pattern with a replacement template. Rules are
//! compiled once at startup and applied in a fixed order; each rule sees
//! the output of the previous one.

use regex::Regex;

use super::result::Result;

/// One rewrite rule: a compiled pattern, a replacement template, and an
/// optional guard.
///
/// The replacement template uses the `regex` crate expansion syntax
/// (`${1}` for capture groups, `$$` for a literal `$`). When a guard is
/// set, a match is left untouched if the text immediately following it
/// satisfies the guard pattern.
#[derive(Debug)]
pub struct RewriteRule {
    name: &'static str,
    pattern: Regex,
    replacement: String,
    unless_following: Option<Regex>,
}

impl RewriteRule {
    /// Compile an unconditional rule
    pub fn new(name: &'static str, pattern: &str, replacement: &str) -> Result<Self> {
        Ok(Self {
            name,
            pattern: Regex::new(pattern)?,
            replacement: replacement.to_string(),
            unless_following: None,
        })
    }

    /// Compile a guarded rule
    ///
    /// The guard pattern is matched against the text directly after each
    /// occurrence of `pattern`, so it should be anchored with `^`.
    pub fn new_guarded(
        name: &'static str,
        pattern: &str,
        replacement: &str,
        guard: &str,
    ) -> Result<Self> {
        Ok(Self {
            name,
            pattern: Regex::new(pattern)?,
            replacement: replacement.to_string(),
            unless_following: Some(Regex::new(guard)?),
        })
    }

    /// Rule name, for listings and diagnostics
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The search pattern as written
    pub fn pattern_str(&self) -> &str {
        self.pattern.as_str()
    }

    /// The replacement template as written
    pub fn replacement(&self) -> &str {
        &self.replacement
    }

    /// The guard pattern, if any
    pub fn guard_str(&self) -> Option<&str> {
        self.unless_following.as_ref().map(|re| re.as_str())
    }

    /// Apply the rule to `text`, replacing every non-overlapping match
    /// left to right. Guarded matches are copied through unchanged.
    pub fn apply(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        let mut last = 0;

        for caps in self.pattern.captures_iter(text) {
            let m = caps.get(0).unwrap();

            if let Some(guard) = &self.unless_following {
                if guard.is_match(&text[m.end()..]) {
                    out.push_str(&text[last..m.end()]);
                    last = m.end();
                    continue;
                }
            }

            out.push_str(&text[last..m.start()]);
            caps.expand(&self.replacement, &mut out);
            last = m.end();
        }

        out.push_str(&text[last..]);
        out
    }
}
