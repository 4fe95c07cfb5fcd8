//! Source-version specifications for migration edges

use crate::error::EdgeError;

/// Which version(s) a migration step may start from.
///
/// The four shapes are equivalent surfaces over the same validated core: an
/// edge is declared from one of these plus a target version. Cross-field
/// rules (bound order, target exclusion, schema consistency) are checked
/// when the edge is constructed, so every shape goes through one validation
/// path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceSpec {
    /// No predecessor: the edge sets its schema up from scratch.
    Initial,
    /// A single source version.
    Single(i64),
    /// An explicit list of source versions.
    List(Vec<i64>),
    /// An inclusive range of source versions.
    Range { start: i64, end: i64 },
}

impl SourceSpec {
    /// Parse a free-text source spec.
    ///
    /// `"5"` is a single version, `"1,3,5"` a list and `"2..5"` an
    /// inclusive range. Entries tolerate surrounding whitespace; empty list
    /// entries are dropped. Duplicates survive here and are removed during
    /// edge construction.
    pub fn parse(text: &str) -> Result<Self, EdgeError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(EdgeError::EmptySource);
        }

        if text.contains("..") {
            let bounds: Vec<&str> = text.split("..").collect();
            if bounds.len() != 2 {
                return Err(EdgeError::RangeBoundCount(bounds.len()));
            }
            let start = parse_bound(bounds[0])?;
            let end = parse_bound(bounds[1])?;
            return Ok(SourceSpec::Range { start, end });
        }

        if text.contains(',') {
            let mut versions = Vec::new();
            for entry in text.split(',') {
                let entry = entry.trim();
                if entry.is_empty() {
                    continue;
                }
                let version = entry
                    .parse()
                    .map_err(|_| EdgeError::ListEntryNotInteger(entry.to_string()))?;
                versions.push(version);
            }
            if versions.is_empty() {
                return Err(EdgeError::EmptySourceList);
            }
            return Ok(SourceSpec::List(versions));
        }

        let version = text
            .parse()
            .map_err(|_| EdgeError::InvalidSourceVersion(text.to_string()))?;
        Ok(SourceSpec::Single(version))
    }
}

fn parse_bound(text: &str) -> Result<i64, EdgeError> {
    let text = text.trim();
    text.parse()
        .map_err(|_| EdgeError::InvalidRangeBound(text.to_string()))
}
