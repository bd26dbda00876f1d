//! CSV header normalization.

use std::collections::HashSet;

/// Name given to a blank header cell at `index`.
pub fn unnamed_header(index: usize) -> String {
    format!("Unnamed: {index}")
}

/// Produces unique column names from a raw header record.
///
/// Blank names become `Unnamed: {index}`. A name seen before gets a `.1`,
/// `.2`, ... suffix, skipping suffixes already taken.
pub fn normalize_headers<S: AsRef<str>>(raw: &[S]) -> Vec<String> {
    let mut seen: HashSet<String> = HashSet::with_capacity(raw.len());
    let mut names = Vec::with_capacity(raw.len());

    for (idx, value) in raw.iter().enumerate() {
        let value = value.as_ref();
        let base = if value.is_empty() {
            unnamed_header(idx)
        } else {
            value.to_string()
        };

        let mut name = base.clone();
        let mut suffix = 1usize;
        while seen.contains(&name) {
            name = format!("{base}.{suffix}");
            suffix += 1;
        }
        seen.insert(name.clone());
        names.push(name);
    }

    names
}
