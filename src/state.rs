use label_hue::ColorMap;
use label_hue::data::filter::{CategoryFilter, init_filter_state, visible_categories};
use label_hue::{Dataset, example_dataset};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Dataset being shown; starts as the built-in example.
    pub dataset: Dataset,

    /// Selected categories.
    pub filter: CategoryFilter,

    /// Categories passing the current filter (cached).
    pub visible: Vec<String>,

    /// Stable colour per category.
    pub color_map: ColorMap,

    /// Stack category bars on top of each other instead of side by side.
    pub stacked: bool,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(example_dataset().clone())
    }
}

impl AppState {
    pub fn new(dataset: Dataset) -> Self {
        let mut state = Self {
            dataset: Dataset::new("", Vec::new()),
            filter: CategoryFilter::new(),
            visible: Vec::new(),
            color_map: ColorMap::default(),
            stacked: true,
            status_message: None,
        };
        state.set_dataset(dataset);
        state
    }

    /// Ingest a dataset, select all of its categories and rebuild colours.
    pub fn set_dataset(&mut self, dataset: Dataset) {
        self.filter = init_filter_state(&dataset);
        self.color_map = ColorMap::new(&dataset.categories());
        self.dataset = dataset;
        self.status_message = None;
        self.refilter();
    }

    /// Recompute `visible` after filter change.
    pub fn refilter(&mut self) {
        self.visible = visible_categories(&self.dataset, &self.filter);
    }

    /// Toggle a single category.
    pub fn toggle_category(&mut self, category: &str) {
        if !self.filter.remove(category) {
            self.filter.insert(category.to_string());
        }
        self.refilter();
    }

    pub fn select_all(&mut self) {
        self.filter = init_filter_state(&self.dataset);
        self.refilter();
    }

    pub fn select_none(&mut self) {
        self.filter.clear();
        self.refilter();
    }

    /// Window title naming the dataset and its row count.
    pub fn window_title(&self) -> String {
        let title = if self.dataset.title.is_empty() {
            "untitled"
        } else {
            self.dataset.title.as_str()
        };
        format!("Label Hue – {title} ({} rows)", self.dataset.len())
    }
}
