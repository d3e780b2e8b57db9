//! Exclude patterns
//!
//! A narrow dialect: the only wildcard is `*` (any run of
//! characters, including `/`), every other character is literal, and the
//! pattern is anchored at the start of the path relative to the media root
//! but not at the end. `tmp*` therefore excludes `tmp/a.txt` and
//! `tmpfoo.txt` but not `sub/tmp.txt`, and `cache` excludes `cache/x` as
//! well as `cache.bak`.

use mediasweep_errors::{Error, OpsError};
use regex::Regex;

#[derive(Debug, Clone)]
pub struct ExcludePattern {
    source: String,
    regex: Regex,
}

impl ExcludePattern {
    /// Compile a pattern
    ///
    /// # Errors
    ///
    /// Returns `OpsError::InvalidPattern` if the translated expression does
    /// not compile.
    pub fn new(pattern: &str) -> Result<Self, Error> {
        let translated = format!("^{}", regex::escape(pattern).replace(r"\*", ".*"));
        let regex = Regex::new(&translated).map_err(|e| OpsError::InvalidPattern {
            pattern: pattern.to_string(),
            message: e.to_string(),
        })?;
        Ok(Self {
            source: pattern.to_string(),
            regex,
        })
    }

    /// Compile a list of patterns
    ///
    /// # Errors
    ///
    /// Returns the first compilation failure.
    pub fn compile_all<S: AsRef<str>>(patterns: &[S]) -> Result<Vec<Self>, Error> {
        patterns.iter().map(|p| Self::new(p.as_ref())).collect()
    }

    /// Whether a media-root-relative path (with `/` separators) is excluded
    #[must_use]
    pub fn matches(&self, relative: &str) -> bool {
        self.regex.is_match(relative)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.source
    }
}
