//! Validated migration edge declarations

use std::fmt;

use indexmap::IndexSet;

use crate::error::EdgeError;
use crate::source::SourceSpec;

/// A validated declaration that a migration step may run from a set of
/// source versions (or an inclusive range) to a target version, optionally
/// scoped to named schemas.
///
/// Every rule is checked up front: an invalid declaration never produces an
/// edge, and a constructed edge is immutable. An edge with no source
/// versions is an initial setup edge, materializing its schema from
/// scratch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrationEdge {
    from_versions: Vec<i64>,
    is_range: bool,
    to_version: i64,
    from_schema: Option<String>,
    to_schema: Option<String>,
    should_avoid: bool,
}

impl MigrationEdge {
    /// Declare an edge in the default schema.
    pub fn new(from: SourceSpec, to: i64) -> Result<Self, EdgeError> {
        Self::between_schemas(None, from, None, to)
    }

    /// Declare an edge that starts and ends in the same schema.
    pub fn in_schema(schema: Option<&str>, from: SourceSpec, to: i64) -> Result<Self, EdgeError> {
        Self::between_schemas(schema, from, schema, to)
    }

    /// Declare an edge between two schemas. Every other constructor funnels
    /// here.
    ///
    /// `None` is the default schema, distinct from any named schema. Named
    /// schemas are trimmed and must not be blank. Checks run in a fixed
    /// order (source shape, then schemas, then the initial-setup rule) so
    /// the reported error for a given input never varies.
    pub fn between_schemas(
        from_schema: Option<&str>,
        from: SourceSpec,
        to_schema: Option<&str>,
        to: i64,
    ) -> Result<Self, EdgeError> {
        let (from_versions, is_range) = match from {
            SourceSpec::Initial => (Vec::new(), false),
            SourceSpec::Single(version) => {
                if version == to {
                    return Err(EdgeError::TargetInSources(to));
                }
                (vec![version], false)
            }
            SourceSpec::List(versions) => {
                let versions: Vec<i64> = versions
                    .into_iter()
                    .collect::<IndexSet<_>>()
                    .into_iter()
                    .collect();
                if versions.contains(&to) {
                    return Err(EdgeError::TargetInSources(to));
                }
                (versions, false)
            }
            SourceSpec::Range { start, end } => {
                if start >= end {
                    return Err(EdgeError::InvalidRange { start, end });
                }
                if (start..=end).contains(&to) {
                    return Err(EdgeError::TargetInsideRange { start, end, to });
                }
                (vec![start, end], true)
            }
        };

        let from_schema = normalize_schema(from_schema, "from")?;
        let to_schema = normalize_schema(to_schema, "to")?;

        if from_versions.is_empty() && from_schema != to_schema {
            return Err(EdgeError::InitialEdgeSchemaMismatch);
        }

        Ok(MigrationEdge {
            from_versions,
            is_range,
            to_version: to,
            from_schema,
            to_schema,
            should_avoid: false,
        })
    }

    /// Declare an edge in the default schema from free text.
    ///
    /// A `from` of `None` declares an initial setup edge. See
    /// [`SourceSpec::parse`] for the source grammar; the target text must
    /// trim to an integer.
    pub fn parse(from: Option<&str>, to: &str) -> Result<Self, EdgeError> {
        Self::parse_between(None, from, None, to)
    }

    /// Free-text edge that starts and ends in the same schema.
    pub fn parse_in_schema(
        schema: Option<&str>,
        from: Option<&str>,
        to: &str,
    ) -> Result<Self, EdgeError> {
        Self::parse_between(schema, from, schema, to)
    }

    /// Free-text edge between two schemas.
    pub fn parse_between(
        from_schema: Option<&str>,
        from: Option<&str>,
        to_schema: Option<&str>,
        to: &str,
    ) -> Result<Self, EdgeError> {
        let source = match from {
            Some(text) => SourceSpec::parse(text)?,
            None => SourceSpec::Initial,
        };
        let to = parse_target(to)?;
        Self::between_schemas(from_schema, source, to_schema, to)
    }

    /// Mark this edge as a last resort: a resolver picks it only when no
    /// other path exists.
    pub fn avoid(mut self) -> Self {
        self.should_avoid = true;
        self
    }

    /// Source versions this edge may start from, duplicates removed in
    /// first-seen order; empty for an initial setup edge. For a range edge
    /// this holds the two bounds.
    pub fn from_versions(&self) -> &[i64] {
        &self.from_versions
    }

    /// Whether [`from_versions`](Self::from_versions) holds the inclusive
    /// bounds of a range.
    pub fn is_range(&self) -> bool {
        self.is_range
    }

    /// Version this edge produces.
    pub fn to_version(&self) -> i64 {
        self.to_version
    }

    /// Schema this edge starts in; `None` is the default schema.
    pub fn from_schema(&self) -> Option<&str> {
        self.from_schema.as_deref()
    }

    /// Schema this edge produces; `None` is the default schema.
    pub fn to_schema(&self) -> Option<&str> {
        self.to_schema.as_deref()
    }

    /// Priority hint: use this edge only when no alternative path exists.
    pub fn should_avoid(&self) -> bool {
        self.should_avoid
    }

    /// True when this edge has no predecessor versions.
    pub fn is_initial(&self) -> bool {
        self.from_versions.is_empty()
    }
}

fn normalize_schema(
    schema: Option<&str>,
    side: &'static str,
) -> Result<Option<String>, EdgeError> {
    match schema {
        None => Ok(None),
        Some(text) => {
            let text = text.trim();
            if text.is_empty() {
                return Err(EdgeError::BlankSchema(side));
            }
            Ok(Some(text.to_string()))
        }
    }
}

fn parse_target(text: &str) -> Result<i64, EdgeError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(EdgeError::EmptyTarget);
    }
    text.parse()
        .map_err(|_| EdgeError::TargetNotInteger(text.to_string()))
}

impl fmt::Display for MigrationEdge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(schema) = &self.from_schema {
            write!(f, "{}: ", schema)?;
        }
        if self.from_versions.is_empty() {
            write!(f, "*")?;
        } else if self.is_range {
            write!(f, "{}..{}", self.from_versions[0], self.from_versions[1])?;
        } else {
            let versions: Vec<String> =
                self.from_versions.iter().map(|v| v.to_string()).collect();
            write!(f, "{}", versions.join(","))?;
        }
        write!(f, " -> ")?;
        if let Some(schema) = &self.to_schema {
            write!(f, "{}: ", schema)?;
        }
        write!(f, "{}", self.to_version)?;
        if self.should_avoid {
            write!(f, " (avoid)")?;
        }
        Ok(())
    }
}
