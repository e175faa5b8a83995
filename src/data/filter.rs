use std::collections::HashSet;

use super::model::{Catalog, TAG_ADULT, TAG_FREE, TAG_PAID, TAG_UNDER_18};
use super::search::SearchIndex;

// ---------------------------------------------------------------------------
// Filter state
// ---------------------------------------------------------------------------

/// Viewer age bracket. Either exclusion drops the other bracket's records;
/// `18+` hides everything tagged `18-` and vice versa.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AgeFilter {
    #[default]
    Any,
    UnderEighteen,
    EighteenPlus,
}

impl AgeFilter {
    /// Widget text; the unset arm doubles as the combo-box placeholder.
    pub fn label(self) -> &'static str {
        match self {
            AgeFilter::Any => "Age",
            AgeFilter::UnderEighteen => "18-",
            AgeFilter::EighteenPlus => "18+",
        }
    }
}

/// Price bracket requirement. A record tagged both `free` and `paid`
/// passes either setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PriceFilter {
    #[default]
    Any,
    Free,
    Paid,
}

impl PriceFilter {
    pub fn label(self) -> &'static str {
        match self {
            PriceFilter::Any => "Price",
            PriceFilter::Free => "Free",
            PriceFilter::Paid => "Paid",
        }
    }
}

/// The per-session filter triple. The three fields are independent; each is
/// applied on its own and none persists beyond the session.
#[derive(Debug, Clone, Default)]
pub struct FilterState {
    /// Free-text query; empty means "no search filter".
    pub search: String,
    pub age: AgeFilter,
    pub price: PriceFilter,
}

impl FilterState {
    /// Whether either categorical filter is active (drives the Clear
    /// button's enablement).
    pub fn any_categorical(&self) -> bool {
        self.age != AgeFilter::Any || self.price != PriceFilter::Any
    }

    /// Reset the categorical filters; the search text stays.
    pub fn clear_categorical(&mut self) {
        self.age = AgeFilter::Any;
        self.price = PriceFilter::Any;
    }
}

// ---------------------------------------------------------------------------
// The filter/search/sort pipeline
// ---------------------------------------------------------------------------

/// Return indices of resources passing the current filters, most recently
/// updated first.
///
/// Stage order is fixed; every stage narrows or reorders the previous
/// stage's output, never widens it:
/// 1. the full record set
/// 2. age exclusion
/// 3. price tag requirement
/// 4. fuzzy-search intersection (stage 1–3 order preserved)
/// 5. stable sort, `updated` descending
///
/// Pure function of its inputs; an empty result is a valid, renderable
/// outcome rather than an error.
pub fn visible_indices(catalog: &Catalog, index: &SearchIndex, filters: &FilterState) -> Vec<usize> {
    let mut keep: Vec<usize> = (0..catalog.len()).collect();

    match filters.age {
        AgeFilter::Any => {}
        AgeFilter::UnderEighteen => keep.retain(|&i| !catalog.resources[i].has_tag(TAG_ADULT)),
        AgeFilter::EighteenPlus => keep.retain(|&i| !catalog.resources[i].has_tag(TAG_UNDER_18)),
    }

    match filters.price {
        PriceFilter::Any => {}
        PriceFilter::Free => keep.retain(|&i| catalog.resources[i].has_tag(TAG_FREE)),
        PriceFilter::Paid => keep.retain(|&i| catalog.resources[i].has_tag(TAG_PAID)),
    }

    if !filters.search.trim().is_empty() {
        let matched: HashSet<usize> = index.search(&filters.search).into_iter().collect();
        keep.retain(|i| matched.contains(i));
    }

    // slice::sort_by is stable: equal stamps keep the preceding stage's order.
    keep.sort_by(|&a, &b| catalog.resources[b].updated_ms.cmp(&catalog.resources[a].updated_ms));
    keep
}
