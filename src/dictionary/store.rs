// Dictionary store - parses the two-column CSV format into an exact-match mapping
//
// Rows look like `"term","transliteration"` or `term,transliteration`. Quotes are
// stripped unconditionally rather than honored as escaping, so a value containing
// a comma produces three fields and the row is dropped.

use std::collections::HashMap;

/// UTF-8 byte order mark some editors prepend to CSV exports
const BOM: char = '\u{feff}';

/// A single dictionary row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictionaryEntry {
    /// Normalized (trimmed, lower-cased) source term
    pub term: String,
    /// Katakana rendering, stored verbatim apart from trimming
    pub transliteration: String,
}

impl DictionaryEntry {
    /// Parse one CSV line into an entry
    ///
    /// Returns None for blank lines and for any line that does not split into
    /// exactly two fields once quotes are removed.
    pub fn from_line(line: &str) -> Option<Self> {
        let unquoted = line.replace('"', "");
        let mut fields = unquoted.split(',');
        let term = fields.next()?;
        let transliteration = fields.next()?;
        if fields.next().is_some() {
            return None;
        }

        Some(Self {
            term: normalize_term(term),
            transliteration: transliteration.trim().to_string(),
        })
    }
}

/// Normalize a term for insertion or lookup
pub fn normalize_term(term: &str) -> String {
    term.trim().to_lowercase()
}

/// Case-insensitive term -> transliteration mapping
///
/// Built once by [`parse`] and never mutated afterwards; a refresh replaces the
/// whole value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    entries: HashMap<String, String>,
}

impl Dictionary {
    /// Create an empty dictionary
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up an already-normalized term
    pub fn get(&self, normalized_term: &str) -> Option<&str> {
        self.entries.get(normalized_term).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Insert an entry, overwriting any previous value for the same term
    fn insert(&mut self, entry: DictionaryEntry) {
        self.entries.insert(entry.term, entry.transliteration);
    }
}

impl FromIterator<DictionaryEntry> for Dictionary {
    fn from_iter<I: IntoIterator<Item = DictionaryEntry>>(iter: I) -> Self {
        let mut dictionary = Dictionary::new();
        for entry in iter {
            dictionary.insert(entry);
        }
        dictionary
    }
}

/// Parse a CSV blob into a dictionary
///
/// Accepts `\n`, `\r\n` and bare `\r` line endings. Never fails: blank and
/// malformed lines are skipped, and the last row wins on duplicate terms.
pub fn parse(text: &str) -> Dictionary {
    let text = text.strip_prefix(BOM).unwrap_or(text);

    let mut skipped = 0usize;
    let dictionary: Dictionary = text
        .split(['\r', '\n'])
        .filter(|line| !line.trim().is_empty())
        .filter_map(|line| {
            let entry = DictionaryEntry::from_line(line);
            if entry.is_none() {
                skipped += 1;
            }
            entry
        })
        .collect();

    if skipped > 0 {
        crate::debug!("Skipped {} malformed dictionary rows", skipped);
    }
    crate::debug!("Parsed {} dictionary entries", dictionary.len());
    dictionary
}

#[cfg(test)]
#[path = "store_test.rs"]
mod tests;
