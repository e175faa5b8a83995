use std::collections::BTreeSet;

// ---------------------------------------------------------------------------
// Tag vocabulary
// ---------------------------------------------------------------------------

// Well-known tags with filtering semantics. The vocabulary is open; records
// may carry any number of additional free-form tags.
pub const TAG_FREE: &str = "free";
pub const TAG_PAID: &str = "paid";
pub const TAG_UNDER_18: &str = "18-";
pub const TAG_ADULT: &str = "18+";

/// How long after its `updated` stamp a resource is shown with a NEW badge.
pub const FRESHNESS_WINDOW_MS: i64 = 24 * 60 * 60 * 1000;

// ---------------------------------------------------------------------------
// Resource – one row of the dataset
// ---------------------------------------------------------------------------

/// A single curated resource entry.
#[derive(Debug, Clone)]
pub struct Resource {
    /// Display title, unique within the catalog.
    pub title: String,
    pub description: String,
    pub url: String,
    /// Open-vocabulary labels; order preserved for display.
    pub tags: Vec<String>,
    /// Last-updated stamp, milliseconds since the Unix epoch.
    pub updated_ms: i64,
}

impl Resource {
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Whether the resource is inside the freshness window at `now_ms`.
    pub fn is_new(&self, now_ms: i64) -> bool {
        now_ms - self.updated_ms < FRESHNESS_WINDOW_MS
    }
}

// ---------------------------------------------------------------------------
// Catalog – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The full parsed dataset with the derived tag vocabulary.
#[derive(Debug, Clone)]
pub struct Catalog {
    /// All resources in file order.
    pub resources: Vec<Resource>,
    /// Sorted set of every tag occurring in `resources`.
    pub tags: BTreeSet<String>,
}

impl Catalog {
    /// Build the tag vocabulary from the loaded resources.
    pub fn from_resources(resources: Vec<Resource>) -> Self {
        let mut tags: BTreeSet<String> = BTreeSet::new();
        for res in &resources {
            for tag in &res.tags {
                tags.insert(tag.clone());
            }
        }
        Catalog { resources, tags }
    }

    /// Number of resources.
    pub fn len(&self) -> usize {
        self.resources.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resource(title: &str, tags: &[&str], updated_ms: i64) -> Resource {
        Resource {
            title: title.to_string(),
            description: String::new(),
            url: "https://example.com".to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            updated_ms,
        }
    }

    #[test]
    fn freshness_window() {
        let now_ms = 1_700_000_000_000;
        assert!(resource("a", &[], now_ms - 1_000).is_new(now_ms));
        assert!(!resource("b", &[], now_ms - 90_000_000).is_new(now_ms));
        // Exactly 24h old is no longer new (strict <).
        assert!(!resource("c", &[], now_ms - FRESHNESS_WINDOW_MS).is_new(now_ms));
    }

    #[test]
    fn tag_vocabulary_is_sorted_and_deduplicated() {
        let catalog = Catalog::from_resources(vec![
            resource("a", &["paid", "free"], 0),
            resource("b", &["free", "18-"], 0),
        ]);
        let tags: Vec<&str> = catalog.tags.iter().map(|t| t.as_str()).collect();
        assert_eq!(tags, vec!["18-", "free", "paid"]);
    }

    #[test]
    fn has_tag_checks_membership() {
        let res = resource("a", &["free", "paid"], 0);
        assert!(res.has_tag(TAG_FREE));
        assert!(res.has_tag(TAG_PAID));
        assert!(!res.has_tag(TAG_UNDER_18));
    }
}
