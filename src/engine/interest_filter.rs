// ==========================================
// Jharkhand Trip Planner - interest filter
// ==========================================
// Pure view of the catalog by interest tag. Stateless and
// order-preserving; "all" is a reserved sentinel.
// ==========================================

use crate::domain::Attraction;

/// Reserved tag returning the catalog unchanged
pub const ALL_INTERESTS: &str = "all";

/// Tag-based catalog filtering
pub struct InterestFilter;

impl InterestFilter {
    pub fn new() -> Self {
        Self
    }

    /// Filter the catalog by interest tag, preserving catalog order
    ///
    /// `"all"` returns the catalog unchanged. Any other tag selects
    /// exactly the attractions whose `interest_tags` contain it;
    /// attractions with no tags never match.
    pub fn filter(&self, catalog: &[Attraction], tag: &str) -> Vec<Attraction> {
        if tag == ALL_INTERESTS {
            return catalog.to_vec();
        }

        catalog
            .iter()
            .filter(|a| a.has_interest(tag))
            .cloned()
            .collect()
    }

    /// Number of attractions matching the tag, as shown on filter buttons
    pub fn count(&self, catalog: &[Attraction], tag: &str) -> usize {
        if tag == ALL_INTERESTS {
            return catalog.len();
        }
        catalog.iter().filter(|a| a.has_interest(tag)).count()
    }
}

impl Default for InterestFilter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::GeoPoint;

    fn attraction(id: &str, tags: &[&str]) -> Attraction {
        Attraction {
            id: id.to_string(),
            name: id.to_string(),
            city: "Ranchi".to_string(),
            coordinates: GeoPoint::new(23.4, 85.5),
            category: "waterfall".to_string(),
            interest_tags: tags.iter().map(|t| t.to_string()).collect(),
            description: String::new(),
            best_time: None,
            duration: None,
            image: None,
        }
    }

    #[test]
    fn test_all_sentinel_is_identity() {
        let filter = InterestFilter::new();
        let catalog = vec![attraction("a", &["Adventure"]), attraction("b", &[])];
        assert_eq!(filter.filter(&catalog, ALL_INTERESTS), catalog);
    }

    #[test]
    fn test_untagged_never_matches() {
        let filter = InterestFilter::new();
        let catalog = vec![attraction("a", &[]), attraction("b", &["Culture"])];
        let result = filter.filter(&catalog, "Culture");
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, "b");
    }

    #[test]
    fn test_filter_is_idempotent() {
        let filter = InterestFilter::new();
        let catalog = vec![
            attraction("a", &["Adventure"]),
            attraction("b", &["Relaxation"]),
            attraction("c", &["Adventure", "Culture"]),
        ];
        let once = filter.filter(&catalog, "Adventure");
        let twice = filter.filter(&catalog, "Adventure");
        assert_eq!(once, twice);
        assert_eq!(once.iter().map(|a| a.id.as_str()).collect::<Vec<_>>(), vec!["a", "c"]);
    }
}
