use std::collections::BTreeSet;

use super::model::Dataset;

// ---------------------------------------------------------------------------
// Filter predicate: which categories are shown
// ---------------------------------------------------------------------------

/// Set of selected categories.  A category missing from the set is hidden.
pub type CategoryFilter = BTreeSet<String>;

/// Initialise a [`CategoryFilter`] with every category selected.
pub fn init_filter_state(dataset: &Dataset) -> CategoryFilter {
    dataset.categories()
}

/// Categories of `dataset`, in sorted order, that pass the filter.
pub fn visible_categories(dataset: &Dataset, filter: &CategoryFilter) -> Vec<String> {
    dataset
        .categories()
        .into_iter()
        .filter(|c| filter.contains(c))
        .collect()
}
