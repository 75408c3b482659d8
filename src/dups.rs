//! Near-duplicate detection by track name and whole-second duration.
//!
//! The first track seen under a name fixes the reference duration for that
//! name. Later tracks with the same name count as duplicates only when their
//! length truncates to the same second; any other length under that name is
//! ignored rather than opening a second group.

use std::collections::HashMap;

use tracing::{debug, trace};

use crate::catalog::{Catalog, extract};

pub mod report;

pub use report::write_report;

/// Integer floor of a millisecond duration to whole seconds.
pub fn truncated_seconds(duration_ms: u64) -> u64 {
    duration_ms / 1000
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct DuplicateGroup {
    name: String,
    reference_ms: u64,
    count: usize,
}

/// One reported duplicate group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Duplicate {
    pub count: usize,
    pub name: String,
}

/// Result of a duplicate pass, in first-seen order of each name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DuplicateReport {
    duplicates: Vec<Duplicate>,
}

impl DuplicateReport {
    pub fn duplicates(&self) -> &[Duplicate] {
        &self.duplicates
    }

    /// Number of duplicate groups (not the number of duplicate tracks).
    pub fn len(&self) -> usize {
        self.duplicates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.duplicates.is_empty()
    }
}

/// Group tracks by name and count same-second matches.
pub fn find_duplicates(catalog: &Catalog) -> DuplicateReport {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<DuplicateGroup> = Vec::new();

    for (id, record) in catalog.tracks() {
        let (name, duration_ms) = match extract::name(record)
            .and_then(|name| Ok((name, extract::total_time(record)?)))
        {
            Ok(fields) => fields,
            Err(err) => {
                trace!(track_id = id, %err, "skipping track");
                continue;
            }
        };

        match index.get(name) {
            Some(&i) => {
                let group = &mut groups[i];
                if truncated_seconds(duration_ms) == truncated_seconds(group.reference_ms) {
                    group.count += 1;
                }
            }
            None => {
                index.insert(name, groups.len());
                groups.push(DuplicateGroup {
                    name: name.to_string(),
                    reference_ms: duration_ms,
                    count: 1,
                });
            }
        }
    }

    let duplicates: Vec<Duplicate> = groups
        .into_iter()
        .filter(|g| g.count > 1)
        .map(|g| Duplicate {
            count: g.count,
            name: g.name,
        })
        .collect();

    debug!(
        "{} distinct names, {} duplicate groups",
        index.len(),
        duplicates.len()
    );
    DuplicateReport { duplicates }
}

#[cfg(test)]
mod tests;
