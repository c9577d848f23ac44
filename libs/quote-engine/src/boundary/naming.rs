//! # Artifact Naming
//!
//! Collision-resistant names for persisted uploads:
//!
//! ```text
//! {stem}_{YYYY-MM-DDTHH-MM-SS-nnnnnnnnnZ}.{ext}
//! ```
//!
//! The stamp has nanosecond resolution and is strictly increasing per
//! [`ArtifactNamer`], so two uploads of the same file name through the same
//! namer never share a name, even within one clock tick.

use std::sync::atomic::{AtomicI64, Ordering};

use chrono::{DateTime, TimeZone, Utc};
use config::constants::{
    DEFAULT_ARTIFACT_EXTENSION, DEFAULT_ARTIFACT_STEM, MAX_ARTIFACT_STEM_CHARS,
};

const STAMP_FORMAT: &str = "%Y-%m-%dT%H-%M-%S-%9fZ";
const MAX_EXTENSION_CHARS: usize = 8;

/// Generates unique artifact names.
#[derive(Debug)]
pub struct ArtifactNamer {
    last_nanos: AtomicI64,
}

impl Default for ArtifactNamer {
    fn default() -> Self {
        Self::new()
    }
}

impl ArtifactNamer {
    pub fn new() -> Self {
        Self {
            last_nanos: AtomicI64::new(i64::MIN),
        }
    }

    /// Unique name for `file_name` stamped with the current time.
    pub fn unique_name(&self, file_name: &str) -> String {
        self.unique_name_at(file_name, Utc::now())
    }

    /// Unique name for `file_name` stamped no earlier than `now`.
    ///
    /// # Examples
    /// ```
    /// use chrono::{TimeZone, Utc};
    /// use quote_engine::boundary::ArtifactNamer;
    ///
    /// let namer = ArtifactNamer::new();
    /// let at = Utc.with_ymd_and_hms(2024, 3, 9, 14, 5, 7).unwrap();
    /// assert_eq!(
    ///     namer.unique_name_at("bracket.stl", at),
    ///     "bracket_2024-03-09T14-05-07-000000000Z.stl"
    /// );
    /// ```
    pub fn unique_name_at(&self, file_name: &str, now: DateTime<Utc>) -> String {
        let (stem, extension) = split_file_name(file_name);
        let stamp = self.next_stamp(now).format(STAMP_FORMAT);
        format!("{stem}_{stamp}.{extension}")
    }

    fn next_stamp(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        let candidate = now.timestamp_nanos_opt().unwrap_or(i64::MAX);
        let mut previous = self.last_nanos.load(Ordering::Relaxed);
        loop {
            let next = candidate.max(previous.saturating_add(1));
            match self.last_nanos.compare_exchange_weak(
                previous,
                next,
                Ordering::AcqRel,
                Ordering::Relaxed,
            ) {
                Ok(_) => return Utc.timestamp_nanos(next),
                Err(actual) => previous = actual,
            }
        }
    }
}

/// Splits a client file name into a sanitized stem and extension.
///
/// Directory components are dropped. Characters outside `[A-Za-z0-9_-]` in
/// the stem become `_`.
fn split_file_name(file_name: &str) -> (String, String) {
    let base = file_name
        .rsplit(|c: char| c == '/' || c == '\\')
        .next()
        .unwrap_or(file_name);

    let (raw_stem, raw_extension) = match base.rsplit_once('.') {
        Some((stem, extension)) => (stem, extension),
        None => (base, ""),
    };

    let stem: String = raw_stem
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .take(MAX_ARTIFACT_STEM_CHARS)
        .collect();
    let stem = if stem.trim_matches('_').is_empty() {
        DEFAULT_ARTIFACT_STEM.to_string()
    } else {
        stem
    };

    let extension: String = raw_extension
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .collect();
    let extension = if extension.is_empty() || extension.len() > MAX_EXTENSION_CHARS {
        DEFAULT_ARTIFACT_EXTENSION.to_string()
    } else {
        extension
    };

    (stem, extension)
}
