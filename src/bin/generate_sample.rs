use std::path::PathBuf;

use anyhow::Result;
use label_hue::data::loader::save_file;
use label_hue::{example_dataset, key_to_color};

fn main() -> Result<()> {
    env_logger::init();

    // Output stem; `.json` and `.csv` are appended.
    let stem = std::env::args().nth(1).unwrap_or_else(|| "sample_dataset".to_string());
    let dataset = example_dataset();

    for ext in ["json", "csv"] {
        let path = PathBuf::from(format!("{stem}.{ext}"));
        save_file(dataset, &path)?;
        log::info!("wrote {}", path.display());
    }

    println!(
        "Wrote '{}' ({} rows) to {stem}.json and {stem}.csv",
        dataset.title,
        dataset.len()
    );
    for category in dataset.categories() {
        println!("  {category:<12} {}", key_to_color(&category));
    }
    Ok(())
}
