use eframe::egui::Ui;
use egui_plot::{Bar, BarChart, Legend, Plot};

use crate::state::AppState;

/// Horizontal space one row occupies on the x axis.
const GROUP_WIDTH: f64 = 0.8;

// ---------------------------------------------------------------------------
// Bar chart (central panel)
// ---------------------------------------------------------------------------

/// Render the dataset as one bar group per row and one series per category.
pub fn bar_chart(ui: &mut Ui, state: &AppState) {
    let dataset = &state.dataset;
    if dataset.is_empty() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Dataset has no rows  (File → Open…)");
        });
        return;
    }

    let labels: Vec<String> = dataset.rows.iter().map(|r| r.label.clone()).collect();
    let n_series = state.visible.len().max(1) as f64;
    let bar_width = if state.stacked {
        GROUP_WIDTH
    } else {
        GROUP_WIDTH / n_series
    };

    let mut charts: Vec<BarChart> = Vec::with_capacity(state.visible.len());
    for (series_idx, category) in state.visible.iter().enumerate() {
        let color = state.color_map.color_for(category);
        let offset = if state.stacked {
            0.0
        } else {
            (series_idx as f64 + 0.5) * bar_width - GROUP_WIDTH / 2.0
        };

        let bars: Vec<Bar> = dataset
            .rows
            .iter()
            .enumerate()
            .map(|(row_idx, row)| {
                let value = row.entries.get(category).copied().unwrap_or(0.0);
                let name = match row.share(category) {
                    Some(share) => {
                        format!("{} – {category} ({:.0}% of row)", row.label, 100.0 * share)
                    }
                    None => format!("{} – {category}", row.label),
                };
                Bar::new(row_idx as f64 + offset, value)
                    .width(bar_width)
                    .name(name)
            })
            .collect();

        let mut chart = BarChart::new(bars).name(category).color(color);
        if state.stacked {
            let below: Vec<&BarChart> = charts.iter().collect();
            chart = chart.stack_on(&below);
        }
        charts.push(chart);
    }

    Plot::new("bar_chart")
        .legend(Legend::default())
        .x_axis_label("Row")
        .y_axis_label("Value")
        .x_axis_formatter(move |mark, _range| {
            let idx = mark.value.round();
            if (mark.value - idx).abs() > f64::EPSILON || idx < 0.0 {
                return String::new();
            }
            labels.get(idx as usize).cloned().unwrap_or_default()
        })
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for chart in charts {
                plot_ui.bar_chart(chart);
            }
        });
}
