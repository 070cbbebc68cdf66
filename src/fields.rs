//! Line-oriented `key: value` field lookup
//!
//! The manifest, target, and settings files all share one trivial format:
//! each line is `<field>:<optional whitespace><value>`. The lookup here scans
//! for the first line carrying the requested field and returns its value.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::trace;

/// Reads the value of `field` from the `key: value` lines of `path`.
///
/// The field name is matched as a literal, case-sensitive prefix immediately
/// followed by `:`; whitespace after the colon is skipped and the remainder
/// of the line is the value. Scanning stops at the first matching line, even
/// when its value is empty.
///
/// An unopenable file, a read error, a missing field, and an empty value all
/// collapse into `None`. Callers cannot distinguish them, which is the
/// intended "field absent" signal.
pub fn read_field(path: &Path, field: &str) -> Option<String> {
    let file = File::open(path).ok()?;
    for line in BufReader::new(file).lines() {
        let line = line.ok()?;
        if let Some(value) = match_field_line(&line, field) {
            trace!(field, path = %path.display(), "field found");
            if value.is_empty() {
                return None;
            }
            return Some(value.to_string());
        }
    }
    None
}

/// Literal prefix + delimiter check. Field names are never interpreted as
/// patterns, so they need no escaping.
fn match_field_line<'a>(line: &'a str, field: &str) -> Option<&'a str> {
    let rest = line.strip_prefix(field)?;
    let rest = rest.strip_prefix(':')?;
    Some(rest.trim_start())
}
