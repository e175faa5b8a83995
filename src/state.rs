use crate::color::TagColors;
use crate::data::filter::{AgeFilter, FilterState, PriceFilter, visible_indices};
use crate::data::model::Catalog;
use crate::data::search::SearchIndex;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Loaded catalog; immutable until replaced wholesale via File → Open.
    pub catalog: Catalog,

    /// Fuzzy-search index, built once per catalog at startup and passed by
    /// reference into the filter pipeline.
    pub index: SearchIndex,

    /// Current search text and categorical filters.
    pub filters: FilterState,

    /// Indices of resources passing the current filters (cached), in
    /// display order.
    pub visible: Vec<usize>,

    /// Chip colour per tag.
    pub tag_colors: TagColors,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    /// Build session state around a freshly loaded catalog.
    pub fn new(catalog: Catalog) -> Self {
        let index = SearchIndex::build(&catalog);
        let tag_colors = TagColors::new(&catalog.tags);
        let filters = FilterState::default();
        let visible = visible_indices(&catalog, &index, &filters);

        AppState {
            catalog,
            index,
            filters,
            visible,
            tag_colors,
            status_message: None,
        }
    }

    /// Swap in a newly loaded catalog: rebuild the index and colours,
    /// reset the filters, recompute visibility.
    pub fn replace_catalog(&mut self, catalog: Catalog) {
        *self = AppState::new(catalog);
    }

    /// Recompute `visible` after a filter change.
    pub fn refilter(&mut self) {
        self.visible = visible_indices(&self.catalog, &self.index, &self.filters);
    }

    pub fn set_search(&mut self, text: String) {
        self.filters.search = text;
        self.refilter();
    }

    pub fn set_age(&mut self, age: AgeFilter) {
        self.filters.age = age;
        self.refilter();
    }

    pub fn set_price(&mut self, price: PriceFilter) {
        self.filters.price = price;
        self.refilter();
    }

    /// The Clear button: drop both categorical filters.
    pub fn clear_categorical(&mut self) {
        self.filters.clear_categorical();
        self.refilter();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Resource;

    fn resource(title: &str, tags: &[&str], updated_ms: i64) -> Resource {
        Resource {
            title: title.to_string(),
            description: String::new(),
            url: "https://example.com".to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            updated_ms,
        }
    }

    fn state() -> AppState {
        AppState::new(Catalog::from_resources(vec![
            resource("Free thing", &["free"], 2_000),
            resource("Paid thing", &["paid"], 1_000),
        ]))
    }

    #[test]
    fn starts_with_everything_visible() {
        let state = state();
        assert_eq!(state.visible.len(), 2);
        assert!(state.status_message.is_none());
    }

    #[test]
    fn intents_recompute_visibility() {
        let mut state = state();

        state.set_price(PriceFilter::Paid);
        assert_eq!(state.visible.len(), 1);

        state.clear_categorical();
        assert_eq!(state.visible.len(), 2);

        state.set_search("free".to_string());
        assert_eq!(state.visible.len(), 1);

        state.set_search(String::new());
        assert_eq!(state.visible.len(), 2);
    }

    #[test]
    fn replacing_the_catalog_resets_filters() {
        let mut state = state();
        state.set_price(PriceFilter::Paid);

        state.replace_catalog(Catalog::from_resources(vec![resource(
            "Only one",
            &["free"],
            1,
        )]));

        assert_eq!(state.filters.price, PriceFilter::Any);
        assert_eq!(state.visible.len(), 1);
    }
}
