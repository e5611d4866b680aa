use std::collections::HashSet;

/// Longest sheet name a workbook accepts, in characters.
pub const MAX_SHEET_NAME_LEN: usize = 31;

const INVALID_CHARS: [char; 7] = ['[', ']', ':', '*', '?', '/', '\\'];
const RESERVED: &str = "history";

/// Hands out workbook-safe, unique sheet names.
///
/// Uniqueness is case-insensitive, matching how spreadsheet applications
/// compare sheet names.
#[derive(Debug)]
pub struct SheetNamer {
    taken: HashSet<String>,
}

impl Default for SheetNamer {
    fn default() -> Self {
        Self::new()
    }
}

impl SheetNamer {
    pub fn new() -> Self {
        let mut taken = HashSet::new();
        taken.insert(RESERVED.to_string());
        Self { taken }
    }

    /// Sanitize `raw` and make it unique, using `fallback` when nothing usable is left.
    pub fn claim(&mut self, raw: &str, fallback: &str) -> String {
        let mut base = sanitize_sheet_name(raw);
        if base.is_empty() {
            base = sanitize_sheet_name(fallback);
        }

        let mut candidate = base.clone();
        let mut n = 2;
        while self.taken.contains(&candidate.to_lowercase()) {
            let suffix = format!(" ({n})");
            let keep = MAX_SHEET_NAME_LEN - suffix.chars().count();
            let head: String = base.chars().take(keep).collect();
            candidate = format!("{}{suffix}", head.trim_end());
            n += 1;
        }

        self.taken.insert(candidate.to_lowercase());
        candidate
    }
}

/// Replace forbidden characters, strip edge apostrophes and truncate.
pub fn sanitize_sheet_name(raw: &str) -> String {
    let replaced: String = raw
        .chars()
        .map(|c| if INVALID_CHARS.contains(&c) { '_' } else { c })
        .collect();
    let trimmed = replaced.trim().trim_matches('\'');
    let truncated: String = trimmed.chars().take(MAX_SHEET_NAME_LEN).collect();
    truncated.trim_end().trim_end_matches('\'').to_string()
}
