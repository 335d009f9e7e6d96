use std::borrow::Cow;
use std::collections::HashSet;

use serde::Serialize;

/// An ordered sequence of `(label, value)` points with unique labels.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct AnalyticsSeries {
    points: Vec<(Cow<'static, str>, f64)>,
}

impl AnalyticsSeries {
    /// Builds a series, keeping the first point for any repeated label.
    pub fn new<L, I>(points: I) -> Self
    where
        L: Into<Cow<'static, str>>,
        I: IntoIterator<Item = (L, f64)>,
    {
        let mut seen = HashSet::new();
        let points = points
            .into_iter()
            .map(|(label, value)| (label.into(), value))
            .filter(|(label, _)| {
                let fresh = seen.insert(label.clone());
                if !fresh {
                    tracing::warn!(%label, "dropping duplicate series label");
                }
                fresh
            })
            .collect();
        Self { points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn labels(&self) -> Vec<String> {
        self.points
            .iter()
            .map(|(label, _)| label.to_string())
            .collect()
    }

    pub fn values(&self) -> Vec<f64> {
        self.points.iter().map(|(_, value)| *value).collect()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_preserves_order() {
        let series = AnalyticsSeries::new([("Aug", 40.0), ("Sep", 50.0), ("Oct", 60.0)]);
        assert_eq!(series.labels(), vec!["Aug", "Sep", "Oct"]);
        assert_eq!(series.values(), vec![40.0, 50.0, 60.0]);
    }

    #[test]
    fn test_drops_repeated_labels() {
        let series = AnalyticsSeries::new([("Aug", 40.0), ("Sep", 50.0), ("Aug", 99.0)]);
        assert_eq!(series.len(), 2);
        assert_eq!(series.values(), vec![40.0, 50.0]);
    }

    #[test]
    fn test_values_are_unconstrained() {
        let series = AnalyticsSeries::new([("a", -12.5), ("b", 1e6)]);
        assert_eq!(series.values(), vec![-12.5, 1e6]);
    }

    #[test]
    fn test_empty() {
        let series = AnalyticsSeries::new(Vec::<(&'static str, f64)>::new());
        assert!(series.is_empty());
    }
}
