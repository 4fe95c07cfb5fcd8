//! Four-segment version values with trailing wildcard segments

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use crate::error::VersionError;

/// A database version with major, minor, patch and build segments.
///
/// Segments after the major may be wildcards (`x`), which match any value
/// when comparing: `1.3.x.x` equals `1.3.5.123`. Once a segment is a
/// wildcard every following segment is one too; parsing and direct
/// construction both reject a concrete segment after a wildcard.
///
/// Wildcard matching makes equality reflexive and symmetric but not
/// transitive (`1.2.x` matches `1.x.x` and `1.x.x` matches `1.3.x`, yet
/// `1.2.x` does not match `1.3.x`), so `Eq` is not implemented and
/// hash equality only tracks structural identity. Keys in associative
/// containers should be fully concrete versions.
#[derive(Debug, Clone, Copy)]
pub struct VersionValue {
    major: i32,
    minor: Option<i32>,
    patch: Option<i32>,
    build: Option<i32>,
}

impl VersionValue {
    /// Sentinel for a failed parse, the only value with a negative major.
    pub const INVALID: VersionValue = VersionValue {
        major: -1,
        minor: None,
        patch: None,
        build: None,
    };

    /// Build a version directly from four optional segments.
    ///
    /// `None` is a wildcard. The major segment cannot be a wildcard, no
    /// segment may be negative, and a concrete segment may not follow a
    /// wildcard one.
    pub fn new(
        major: i32,
        minor: Option<i32>,
        patch: Option<i32>,
        build: Option<i32>,
    ) -> Result<Self, VersionError> {
        if minor.is_none() && patch.is_some() {
            return Err(VersionError::SegmentAfterWildcard("patch"));
        }
        if patch.is_none() && build.is_some() {
            return Err(VersionError::SegmentAfterWildcard("build"));
        }
        if major < 0
            || minor.is_some_and(|v| v < 0)
            || patch.is_some_and(|v| v < 0)
            || build.is_some_and(|v| v < 0)
        {
            return Err(VersionError::Negative);
        }

        Ok(VersionValue {
            major,
            minor,
            patch,
            build,
        })
    }

    /// Parse a version string such as `"1.2.3.4"`, `"1.2"` or `"3.x"`.
    ///
    /// Only the major segment is required. Missing trailing segments
    /// default to `0`, except after a wildcard where they default to
    /// wildcards: `"1.3"` is `1.3.0.0` while `"3.x"` is `3.x.x.x`.
    pub fn parse(text: &str) -> Result<Self, VersionError> {
        if text.trim().is_empty() {
            return Err(VersionError::Empty);
        }

        let segments: Vec<&str> = text.split('.').collect();
        if segments.len() > 4 {
            return Err(VersionError::TooManySegments(segments.len()));
        }

        let major = parse_segment(segments[0])?;

        let minor = match segments.get(1) {
            Some(text) => parse_optional_segment(text)?,
            None => Some(0),
        };

        let patch = match segments.get(2) {
            Some(text) => {
                let value = parse_optional_segment(text)?;
                if minor.is_none() && value.is_some() {
                    return Err(VersionError::SegmentAfterWildcard("patch"));
                }
                value
            }
            None => minor.map(|_| 0),
        };

        let build = match segments.get(3) {
            Some(text) => {
                let value = parse_optional_segment(text)?;
                if patch.is_none() && value.is_some() {
                    return Err(VersionError::SegmentAfterWildcard("build"));
                }
                value
            }
            None => patch.map(|_| 0),
        };

        Self::new(major, minor, patch, build)
    }

    /// Parse, mapping any failure to [`VersionValue::INVALID`].
    pub fn parse_or_invalid(text: &str) -> Self {
        Self::parse(text).unwrap_or(Self::INVALID)
    }

    /// True for the [`INVALID`](Self::INVALID) sentinel.
    pub fn is_invalid(&self) -> bool {
        self.major < 0
    }

    /// Major segment, never a wildcard.
    pub fn major(&self) -> i32 {
        self.major
    }

    /// Minor segment, `None` when wildcard.
    pub fn minor(&self) -> Option<i32> {
        self.minor
    }

    /// Patch segment, `None` when wildcard.
    pub fn patch(&self) -> Option<i32> {
        self.patch
    }

    /// Build segment, `None` when wildcard.
    pub fn build(&self) -> Option<i32> {
        self.build
    }

    /// Compare two versions segment by segment, major first.
    ///
    /// A wildcard on either side makes that position contribute no
    /// ordering difference: `1.2.x` compares equal to `1.2.3`.
    pub fn compare(&self, other: &Self) -> Ordering {
        self.major
            .cmp(&other.major)
            .then(segment_cmp(self.minor, other.minor))
            .then(segment_cmp(self.patch, other.patch))
            .then(segment_cmp(self.build, other.build))
    }
}

fn parse_segment(text: &str) -> Result<i32, VersionError> {
    let text = text.trim();
    text.parse()
        .map_err(|_| VersionError::InvalidSegment(text.to_string()))
}

/// `x` is a wildcard, anything else must be an integer.
fn parse_optional_segment(text: &str) -> Result<Option<i32>, VersionError> {
    let text = text.trim();
    if text.eq_ignore_ascii_case("x") {
        return Ok(None);
    }
    parse_segment(text).map(Some)
}

fn segment_cmp(a: Option<i32>, b: Option<i32>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(&b),
        _ => Ordering::Equal,
    }
}

// Not `Eq`: wildcard matching is not transitive.
impl PartialEq for VersionValue {
    fn eq(&self, other: &Self) -> bool {
        self.compare(other) == Ordering::Equal
    }
}

impl PartialOrd for VersionValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.compare(other))
    }
}

// Structurally identical values hash identically. A pair that is equal only
// through wildcard matching, such as `1.2.x` and `1.2.3`, does not.
impl Hash for VersionValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (self.major, self.minor, self.patch, self.build).hash(state);
    }
}

impl fmt::Display for VersionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.major)?;
        for segment in [self.minor, self.patch, self.build] {
            match segment {
                Some(value) => write!(f, ".{}", value)?,
                None => write!(f, ".x")?,
            }
        }
        Ok(())
    }
}

impl FromStr for VersionValue {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
