use std::sync::LazyLock;

use super::model::{Dataset, Row};

static EXAMPLE_DATASET: LazyLock<Dataset> = LazyLock::new(|| {
    Dataset::new(
        "Project Investments",
        vec![
            Row::new(
                "2020",
                [("Engineering", 0.3), ("Marketing", 0.2), ("Sales", 0.1), ("Other", 0.4)],
            ),
            Row::new(
                "2021",
                [("Engineering", 0.8), ("Marketing", 0.1), ("Sales", 0.1), ("Other", 0.4)],
            ),
            Row::new(
                "2022",
                [("Engineering", 0.2), ("Marketing", 0.3), ("Sales", 0.2), ("Other", 0.7)],
            ),
        ],
    )
});

/// Static example of the shape chart consumers expect: project investment
/// shares per year.
pub fn example_dataset() -> &'static Dataset {
    &EXAMPLE_DATASET
}
