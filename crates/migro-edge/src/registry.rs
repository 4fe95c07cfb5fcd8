//! Explicit registration collection for migration edges

use indexmap::IndexSet;

use crate::edge::MigrationEdge;

/// A collection of validated migration edges.
///
/// Callers construct [`MigrationEdge`] values and hand them in; the
/// registry stores and serves the declarations and never chooses between
/// them. Path resolution, including the handling of
/// [`should_avoid`](MigrationEdge::should_avoid) edges, lives with the
/// consumer.
#[derive(Debug, Clone, Default)]
pub struct EdgeRegistry {
    edges: Vec<MigrationEdge>,
}

impl EdgeRegistry {
    pub fn new() -> Self {
        EdgeRegistry { edges: Vec::new() }
    }

    /// Add a validated edge to the registry.
    pub fn register(&mut self, edge: MigrationEdge) {
        self.edges.push(edge);
    }

    /// All registered edges, in registration order.
    pub fn edges(&self) -> &[MigrationEdge] {
        &self.edges
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Edges between the given schema pair, in registration order.
    ///
    /// `None` is the default schema; it only matches edges declared
    /// without a schema on that side.
    pub fn between(
        &self,
        from_schema: Option<&str>,
        to_schema: Option<&str>,
    ) -> impl Iterator<Item = &MigrationEdge> + '_ {
        let from_schema = from_schema.map(str::to_owned);
        let to_schema = to_schema.map(str::to_owned);
        self.edges.iter().filter(move |edge| {
            edge.from_schema() == from_schema.as_deref()
                && edge.to_schema() == to_schema.as_deref()
        })
    }

    /// Distinct `(from, to)` schema pairs, in first-seen order.
    pub fn schema_pairs(&self) -> Vec<(Option<&str>, Option<&str>)> {
        let pairs: IndexSet<(Option<&str>, Option<&str>)> = self
            .edges
            .iter()
            .map(|edge| (edge.from_schema(), edge.to_schema()))
            .collect();
        pairs.into_iter().collect()
    }
}

impl Extend<MigrationEdge> for EdgeRegistry {
    fn extend<I: IntoIterator<Item = MigrationEdge>>(&mut self, iter: I) {
        self.edges.extend(iter);
    }
}

impl FromIterator<MigrationEdge> for EdgeRegistry {
    fn from_iter<I: IntoIterator<Item = MigrationEdge>>(iter: I) -> Self {
        EdgeRegistry {
            edges: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::SourceSpec;

    fn sample_registry() -> EdgeRegistry {
        let mut registry = EdgeRegistry::new();
        registry.register(MigrationEdge::new(SourceSpec::Initial, 1).unwrap());
        registry.register(MigrationEdge::new(SourceSpec::Single(1), 2).unwrap());
        registry.register(
            MigrationEdge::new(SourceSpec::Single(1), 2)
                .unwrap()
                .avoid(),
        );
        registry.register(
            MigrationEdge::between_schemas(
                Some("free"),
                SourceSpec::Single(2),
                Some("paid"),
                1,
            )
            .unwrap(),
        );
        registry.register(
            MigrationEdge::in_schema(Some("paid"), SourceSpec::Range { start: 1, end: 4 }, 5)
                .unwrap(),
        );
        registry
    }

    #[test]
    fn test_register_and_len() {
        let registry = sample_registry();
        assert_eq!(registry.len(), 5);
        assert!(!registry.is_empty());
        assert!(EdgeRegistry::new().is_empty());
    }

    #[test]
    fn test_edges_keeps_registration_order() {
        let registry = sample_registry();
        let targets: Vec<i64> = registry.edges().iter().map(|e| e.to_version()).collect();
        assert_eq!(targets, vec![1, 2, 2, 1, 5]);
    }

    #[test]
    fn test_between_filters_by_schema_pair() {
        let registry = sample_registry();

        let default_pair: Vec<&MigrationEdge> = registry.between(None, None).collect();
        assert_eq!(default_pair.len(), 3);
        assert!(default_pair.iter().any(|e| e.should_avoid()));

        let cross: Vec<&MigrationEdge> =
            registry.between(Some("free"), Some("paid")).collect();
        assert_eq!(cross.len(), 1);
        assert_eq!(cross[0].to_version(), 1);

        assert_eq!(registry.between(Some("paid"), Some("free")).count(), 0);
        assert_eq!(registry.between(Some("paid"), Some("paid")).count(), 1);
    }

    #[test]
    fn test_schema_pairs_in_first_seen_order() {
        let registry = sample_registry();
        assert_eq!(
            registry.schema_pairs(),
            vec![
                (None, None),
                (Some("free"), Some("paid")),
                (Some("paid"), Some("paid")),
            ]
        );
    }

    #[test]
    fn test_from_iterator_and_extend() {
        let mut registry: EdgeRegistry = [
            MigrationEdge::new(SourceSpec::Initial, 1).unwrap(),
            MigrationEdge::new(SourceSpec::Single(1), 2).unwrap(),
        ]
        .into_iter()
        .collect();
        assert_eq!(registry.len(), 2);

        registry.extend([MigrationEdge::new(SourceSpec::Single(2), 3).unwrap()]);
        assert_eq!(registry.len(), 3);
    }
}
