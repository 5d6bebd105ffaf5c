use std::path::Path;

use regex::Regex;
use tokio::fs::File;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::config::Config;
use crate::util::{compile_pattern, matches_one};

/// Pattern-based ignore filtering for console logs and network requests
///
/// - [IgnoreFilter::load_patterns_from_file] reads a newline-delimited pattern
///   file and fully replaces the pattern set
/// - [IgnoreFilter::should_ignore_console_log] and
///   [IgnoreFilter::should_ignore_network_request] test a string against the
///   set, true if any pattern matches (case-insensitive, unanchored)
///
/// The pattern file is UTF-8 text, one pattern per line. Lines that are empty
/// after trimming are skipped, lines whose first non-whitespace character is
/// ```#``` are comments. Anything else is compiled as a case-insensitive regex,
/// a line that fails to compile is skipped without aborting the load.
///
/// Loading never fails to the caller, a missing or unreadable file leaves the
/// current set as is and a mid-stream read error keeps whatever was parsed up
/// to that point. All conditions are reported via [crate::debug].
pub struct IgnoreFilter
{
    patterns: Vec<Regex>
}

impl IgnoreFilter
{
    pub fn new() -> IgnoreFilter
    {
        IgnoreFilter { patterns: vec![] }
    }

    /// A filter loaded from [Config::ignore_file]
    pub async fn from_config(config: &Config) -> IgnoreFilter
    {
        let mut filter = IgnoreFilter::new();
        filter.load_patterns_from_file(&config.ignore_file).await;
        filter
    }

    /// Replace the pattern set with the contents of the file at ```path```
    ///
    /// The set is cleared once the file is open, readers calling the
    /// predicates while a load is in flight may observe the empty window
    /// between the clear and the last appended pattern. Overlapping loads
    /// are not guarded, one logical caller is assumed
    pub async fn load_patterns_from_file(&mut self, path: &str)
    {
        if !Path::new(&path).exists()
        {
            crate::debug(format!("Ignore file not found: {}", path), None);
            return
        }

        let file = match File::open(path).await
        {
            Ok(f) => f,
            Err(why) =>
            {
                crate::debug(format!("Error opening ignore file {}\n{}", path, why), None);
                return
            }
        };

        crate::debug(format!("Loading ignore patterns from: {}", path), None);

        self.patterns.clear();

        let mut lines = BufReader::new(file).lines();

        loop
        {
            let line = match lines.next_line().await
            {
                Ok(Some(l)) => l,
                Ok(None) => break,
                Err(why) =>
                {
                    // keep the patterns parsed so far
                    crate::debug(format!("Error reading ignore file {}\n{}", path, why), None);
                    break
                }
            };

            let trimmed = line.trim();

            if trimmed.is_empty() || trimmed.starts_with("#")
            {
                continue
            }

            match compile_pattern(trimmed)
            {
                Ok(pattern) =>
                {
                    self.patterns.push(pattern);
                    crate::debug(format!("Added ignore pattern: {}", trimmed), None);
                },
                Err(why) =>
                {
                    crate::debug(format!("Invalid regex pattern: {}\n{}", trimmed, why), None);
                }
            }
        }

        crate::debug(format!("Loaded {} ignore patterns", self.patterns.len()), None);
    }

    /// True if a console log message should be suppressed
    ///
    /// An empty message, or an empty pattern set, is never ignored
    pub fn should_ignore_console_log(&self, message: &str) -> bool
    {
        if self.patterns.is_empty() || message.is_empty()
        {
            return false
        }

        matches_one(message, &self.patterns)
    }

    /// True if a network request url should be suppressed
    ///
    /// Same matching semantics as [IgnoreFilter::should_ignore_console_log],
    /// the two share one pattern set
    pub fn should_ignore_network_request(&self, url: &str) -> bool
    {
        if self.patterns.is_empty() || url.is_empty()
        {
            return false
        }

        matches_one(url, &self.patterns)
    }

    pub fn pattern_count(&self) -> usize
    {
        self.patterns.len()
    }

    /// A copy of the current pattern set, in insertion order
    pub fn patterns(&self) -> Vec<Regex>
    {
        self.patterns.clone()
    }
}
