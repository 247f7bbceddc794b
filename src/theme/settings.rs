use std::fs;
use std::path::Path;

use crate::state::{Category, SortOrder};
use crate::theme::paths::resolve_settings_config_path;
use crate::theme::types::Settings;

/// What: Strip a trailing `# comment` from a value.
///
/// Details:
/// - Only a `#` at the start or preceded by whitespace opens a comment, so URL
///   fragments such as `https://host/p#x` survive.
fn strip_inline_comment(s: &str) -> &str {
    let bytes = s.as_bytes();
    let cut = s
        .char_indices()
        .find(|&(i, c)| c == '#' && (i == 0 || bytes[i - 1].is_ascii_whitespace()))
        .map_or(s.len(), |(i, _)| i);
    s[..cut].trim()
}

/// What: Parse settings.conf content into `settings`.
///
/// Inputs:
/// - `content`: File contents, `key = value` per line
/// - `settings`: Settings to update in place
///
/// Output:
/// - None (modifies `settings` in-place).
///
/// Details:
/// - Skips blank lines, `#`/`//` comments and lines without `=`.
/// - Keys are case-insensitive; `.`, `-` and spaces normalize to `_`.
/// - Values that fail to parse keep the previous setting; unknown keys are ignored.
pub fn parse_settings(content: &str, settings: &mut Settings) {
    for line in content.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with("//") {
            continue;
        }
        let Some((raw_key, raw_val)) = trimmed.split_once('=') else {
            continue;
        };
        let key = raw_key.trim().to_lowercase().replace(['.', '-', ' '], "_");
        let val = strip_inline_comment(raw_val.trim());
        match key.as_str() {
            "catalog_url" | "endpoint" => {
                if !val.is_empty() {
                    settings.catalog_url = val.to_string();
                }
            }
            "connect_timeout_secs" | "connect_timeout" => {
                if let Ok(v) = val.parse::<u64>() {
                    settings.connect_timeout_secs = v;
                }
            }
            "request_timeout_secs" | "request_timeout" | "timeout" => {
                if let Ok(v) = val.parse::<u64>() {
                    settings.request_timeout_secs = v;
                }
            }
            "default_sort" | "sort_order" => {
                if let Some(order) = SortOrder::from_config_key(val) {
                    settings.default_sort = order;
                } else {
                    tracing::warn!(value = val, "ignoring unknown default_sort");
                }
            }
            "default_category" | "category" => {
                settings.default_category = Category::from_value(val);
            }
            _ => {
                tracing::debug!(key = %key, "ignoring unknown settings key");
            }
        }
    }
}

/// What: Load settings from a specific file.
///
/// Output:
/// - Defaults overlaid with the file's values; plain defaults when unreadable.
pub fn load_settings_from(path: &Path) -> Settings {
    let mut settings = Settings::default();
    match fs::read_to_string(path) {
        Ok(content) => {
            parse_settings(&content, &mut settings);
            tracing::info!(path = %path.display(), "loaded settings");
        }
        Err(e) => {
            tracing::warn!(
                path = %path.display(),
                error = %e,
                "failed to read settings; using defaults"
            );
        }
    }
    settings
}

/// What: Load user settings from the resolved settings.conf.
///
/// Output:
/// - Parsed settings, or defaults when no settings file exists.
pub fn settings() -> Settings {
    resolve_settings_config_path().map_or_else(Settings::default, |p| load_settings_from(&p))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Every key is read and junk lines are tolerated
    ///
    /// - Input: Content with comments, junk, unknown keys and all supported keys
    /// - Output: Settings carry the configured values
    fn parse_settings_reads_all_keys() {
        let content = "\
# storefront settings
catalog_url = http://127.0.0.1:8080/products#frag   # local mirror
connect-timeout-secs = 3
request_timeout_secs = 12
default_sort = highToLow
default_category = groceries
this line is junk
mystery = 1
";
        let mut s = Settings::default();
        parse_settings(content, &mut s);
        assert_eq!(s.catalog_url, "http://127.0.0.1:8080/products#frag");
        assert_eq!(s.connect_timeout_secs, 3);
        assert_eq!(s.request_timeout_secs, 12);
        assert_eq!(s.default_sort, SortOrder::HighToLow);
        assert_eq!(s.default_category, Category::Named("groceries".into()));
    }

    #[test]
    /// What: Invalid values keep the defaults
    fn parse_settings_keeps_defaults_on_bad_values() {
        let mut s = Settings::default();
        parse_settings(
            "connect_timeout_secs = soon\ndefault_sort = by-name\ncatalog_url =\n",
            &mut s,
        );
        assert_eq!(s, Settings::default());
    }

    #[test]
    /// What: Loading from a file on disk; a missing file yields defaults
    fn load_settings_from_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("settings.conf");
        let content = "default_category = All\ndefault_sort = low_to_high\n";
        fs::write(&path, content).expect("write settings");
        let s = load_settings_from(&path);
        assert_eq!(s.default_category, Category::All);
        assert_eq!(s.default_sort, SortOrder::LowToHigh);
        assert_eq!(
            load_settings_from(&dir.path().join("missing.conf")),
            Settings::default()
        );
    }
}
