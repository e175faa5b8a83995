use fuzzy_matcher::FuzzyMatcher;
use fuzzy_matcher::skim::SkimMatcherV2;

use super::model::Catalog;

// ---------------------------------------------------------------------------
// Fuzzy-search index over the catalog
// ---------------------------------------------------------------------------

// A title hit outranks the same hit in a description.
const TITLE_WEIGHT: i64 = 2;
const DESCRIPTION_WEIGHT: i64 = 1;

/// Ranked fuzzy search across resource titles and descriptions.
///
/// Built once per loaded catalog and owned by the session state; the filter
/// pipeline receives it by reference. The matcher itself is a black box:
/// candidates it rejects outright (`None` score) fall below the similarity
/// threshold and are excluded.
pub struct SearchIndex {
    matcher: SkimMatcherV2,
    /// Lower-cased (title, description) haystacks, parallel to the catalog.
    haystacks: Vec<(String, String)>,
}

impl SearchIndex {
    /// Build the index from a validated catalog.
    pub fn build(catalog: &Catalog) -> Self {
        let haystacks = catalog
            .resources
            .iter()
            .map(|res| (res.title.to_lowercase(), res.description.to_lowercase()))
            .collect();

        SearchIndex {
            matcher: SkimMatcherV2::default(),
            haystacks,
        }
    }

    /// Indices of resources whose title or description fuzzily match
    /// `query`, best match first.
    ///
    /// Callers treat an empty query as "no search filter" and skip the
    /// index entirely; if one arrives anyway it matches everything.
    pub fn search(&self, query: &str) -> Vec<usize> {
        if query.trim().is_empty() {
            return (0..self.haystacks.len()).collect();
        }

        let query = query.to_lowercase();
        let mut scored: Vec<(usize, i64)> = self
            .haystacks
            .iter()
            .enumerate()
            .filter_map(|(idx, (title, description))| {
                let title_score = self
                    .matcher
                    .fuzzy_match(title, &query)
                    .map(|s| s * TITLE_WEIGHT);
                let description_score = self
                    .matcher
                    .fuzzy_match(description, &query)
                    .map(|s| s * DESCRIPTION_WEIGHT);

                title_score
                    .max(description_score)
                    .map(|score| (idx, score))
            })
            .collect();

        // Sort by score descending (best matches first); stable, so equal
        // scores keep catalog order.
        scored.sort_by(|a, b| b.1.cmp(&a.1));
        scored.into_iter().map(|(idx, _)| idx).collect()
    }
}
