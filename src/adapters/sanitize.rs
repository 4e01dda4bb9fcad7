//! Filename sanitizing

use super::host::FilenameSanitizer;

/// Characters rejected by at least one mainstream filesystem
const ILLEGAL_CHARS: &[char] = &['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

/// Device names Windows refuses as file stems
const RESERVED_STEMS: &[&str] = &[
    "CON", "PRN", "AUX", "NUL", "COM1", "COM2", "COM3", "COM4", "COM5", "COM6", "COM7", "COM8",
    "COM9", "LPT1", "LPT2", "LPT3", "LPT4", "LPT5", "LPT6", "LPT7", "LPT8", "LPT9",
];

/// Replacement for every rejected character
const REPLACEMENT: char = '_';

/// Portable sanitizer producing names valid on Windows, macOS and Linux
///
/// # Examples
///
/// ```
/// use regionsplit::adapters::host::FilenameSanitizer;
/// use regionsplit::adapters::sanitize::DefaultSanitizer;
///
/// let safe = DefaultSanitizer.sanitize("01-Live: AC/DC?.mp3");
/// assert_eq!(safe, "01-Live_ AC_DC_.mp3");
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultSanitizer;

impl FilenameSanitizer for DefaultSanitizer {
    fn sanitize(&self, raw: &str) -> String {
        let replaced: String = raw
            .chars()
            .map(|c| {
                if ILLEGAL_CHARS.contains(&c) || c.is_control() {
                    REPLACEMENT
                } else {
                    c
                }
            })
            .collect();

        let trimmed = replaced.trim_end_matches([' ', '.']);
        if trimmed.is_empty() {
            return REPLACEMENT.to_string();
        }

        let stem = trimmed.split('.').next().unwrap_or(trimmed);
        if RESERVED_STEMS
            .iter()
            .any(|reserved| stem.trim_end().eq_ignore_ascii_case(reserved))
        {
            return format!("{REPLACEMENT}{trimmed}");
        }

        trimmed.to_string()
    }
}
