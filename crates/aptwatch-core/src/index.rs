//! Parser for the `Packages` index format
//!
//! The index is RFC822-style text: one paragraph of `Key: value` lines per
//! package, paragraphs separated by blank lines, multi-line fields continued
//! on lines starting with whitespace. Parsing is best-effort; paragraphs that
//! do not form a complete record are logged and dropped, never fatal.

use std::collections::HashMap;

use crate::package::{FIELD_FILENAME, FIELD_NAME, FIELD_SHA1, FIELD_VERSION, Package};

/// A parsed `Packages` index.
#[derive(Debug, Clone, Default)]
pub struct PackagesIndex {
    /// Successfully parsed records, in input order.
    pub packages: Vec<Package>,
}

impl PackagesIndex {
    /// Parse raw index text.
    ///
    /// Never fails: malformed lines and incomplete paragraphs are skipped
    /// with a warning, and whatever valid records exist are returned.
    pub fn parse(input: &str) -> Self {
        let mut packages = Vec::new();
        let mut fields: HashMap<&'static str, String> = HashMap::new();

        for line in input.lines() {
            if line.trim().is_empty() {
                flush(&mut fields, &mut packages);
                continue;
            }

            if line.starts_with(|c: char| c.is_whitespace()) {
                // Continuation of a multi-line field such as Description.
                continue;
            }

            let Some((key, value)) = line.split_once(':') else {
                tracing::warn!("Skipping malformed index line: {:?}", line);
                continue;
            };

            if let Some(field) = tracked_field(key) {
                // Last occurrence of a key within a paragraph wins.
                fields.insert(field, value.trim().to_string());
            }
        }

        // A final paragraph without a trailing blank line still counts.
        flush(&mut fields, &mut packages);

        Self { packages }
    }

    pub fn len(&self) -> usize {
        self.packages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }
}

fn flush(fields: &mut HashMap<&'static str, String>, packages: &mut Vec<Package>) {
    if fields.is_empty() {
        return;
    }

    match Package::from_fields(std::mem::take(fields)) {
        Ok(package) => packages.push(package),
        Err(err) => tracing::warn!("Dropping incomplete package paragraph: {}", err),
    }
}

fn tracked_field(key: &str) -> Option<&'static str> {
    match key {
        "Package" => Some(FIELD_NAME),
        "Version" => Some(FIELD_VERSION),
        "SHA1" => Some(FIELD_SHA1),
        "Filename" => Some(FIELD_FILENAME),
        _ => None,
    }
}
