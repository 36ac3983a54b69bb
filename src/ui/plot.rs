use std::collections::BTreeMap;
use std::f64::consts::{FRAC_PI_2, TAU};

use eframe::egui::{Color32, RichText, Stroke, Ui};
use egui_plot::{Legend, MarkerShape, Plot, PlotPoint, PlotPoints, Points, Polygon, Text};

use crate::color::generate_palette;
use crate::data::query::{PieSlice, SiteSelector};
use crate::state::AppState;

const PIE_RADIUS: f64 = 1.0;
const PIE_LABEL_RADIUS: f64 = 0.65;

// ---------------------------------------------------------------------------
// Titles
// ---------------------------------------------------------------------------

pub fn pie_title(selector: &SiteSelector) -> String {
    match selector {
        SiteSelector::All => "Total Successful Launches for All Sites".to_string(),
        SiteSelector::Site(site) => format!("Total Success and Failure Launches for {site}"),
    }
}

pub fn scatter_title(selector: &SiteSelector) -> String {
    match selector {
        SiteSelector::All => "Payload Mass vs. Success/Failure for All Sites".to_string(),
        SiteSelector::Site(site) => format!("Payload Mass vs. Success/Failure for {site}"),
    }
}

// ---------------------------------------------------------------------------
// Pie chart
// ---------------------------------------------------------------------------

/// One wedge of the pie in plot coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct Wedge {
    pub label: String,
    pub fraction: f64,
    /// Angle (radians) where the wedge starts; wedges run clockwise from 12 o'clock.
    pub start: f64,
    pub sweep: f64,
}

/// Lay slices out clockwise starting at the top, like plotly does.
pub fn layout_wedges(slices: &[PieSlice]) -> Vec<Wedge> {
    let total: usize = slices.iter().map(|s| s.count).sum();
    if total == 0 {
        return Vec::new();
    }
    let mut start = FRAC_PI_2;
    slices
        .iter()
        .map(|s| {
            let fraction = s.count as f64 / total as f64;
            let sweep = fraction * TAU;
            let wedge = Wedge {
                label: s.key.to_string(),
                fraction,
                start,
                sweep,
            };
            start -= sweep;
            wedge
        })
        .collect()
}

impl Wedge {
    /// Closed outline: centre, then arc points.
    pub fn outline(&self, radius: f64) -> Vec<[f64; 2]> {
        let steps = ((self.sweep / TAU) * 120.0).ceil().max(2.0) as usize;
        let mut pts = Vec::with_capacity(steps + 2);
        pts.push([0.0, 0.0]);
        for i in 0..=steps {
            let angle = self.start - self.sweep * (i as f64 / steps as f64);
            pts.push([radius * angle.cos(), radius * angle.sin()]);
        }
        pts
    }

    pub fn label_position(&self, radius: f64) -> [f64; 2] {
        let mid = self.start - self.sweep / 2.0;
        [radius * mid.cos(), radius * mid.sin()]
    }
}

/// Render the success-distribution pie chart.
pub fn pie_chart(ui: &mut Ui, state: &AppState, height: f32) {
    ui.vertical_centered(|ui: &mut Ui| {
        ui.heading(pie_title(&state.selector));
    });

    let wedges = layout_wedges(&state.pie);
    if wedges.is_empty() {
        no_data(ui, height);
        return;
    }
    let colors = generate_palette(wedges.len());

    Plot::new("success_pie_chart")
        .height(height)
        .legend(Legend::default())
        .data_aspect(1.0)
        .show_axes(false)
        .show_grid(false)
        .show_x(false)
        .show_y(false)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .show(ui, |plot_ui| {
            for (wedge, color) in wedges.iter().zip(colors) {
                let polygon = Polygon::new(PlotPoints::new(wedge.outline(PIE_RADIUS)))
                    .name(&wedge.label)
                    .fill_color(color)
                    .stroke(Stroke::new(1.0, Color32::WHITE));
                plot_ui.polygon(polygon);

                let [x, y] = wedge.label_position(PIE_LABEL_RADIUS);
                let text = RichText::new(format!("{:.1}%", wedge.fraction * 100.0))
                    .color(Color32::WHITE)
                    .strong();
                plot_ui.text(Text::new(PlotPoint::new(x, y), text));
            }
        });
}

// ---------------------------------------------------------------------------
// Scatter plot
// ---------------------------------------------------------------------------

/// Group the filtered records into one point series per booster category.
pub fn scatter_series(state: &AppState) -> BTreeMap<&str, Vec<[f64; 2]>> {
    let records = state.dataset.records();
    let mut series: BTreeMap<&str, Vec<[f64; 2]>> = BTreeMap::new();
    for &idx in &state.scatter_indices {
        let rec = &records[idx];
        series
            .entry(rec.booster_version_category.as_str())
            .or_default()
            .push([rec.payload_mass_kg, rec.outcome.as_f64()]);
    }
    series
}

/// Render the payload mass vs. outcome scatter plot.
pub fn scatter_plot(ui: &mut Ui, state: &AppState, height: f32) {
    ui.vertical_centered(|ui: &mut Ui| {
        ui.heading(scatter_title(&state.selector));
    });

    let series = scatter_series(state);
    if series.is_empty() {
        no_data(ui, height);
        return;
    }

    Plot::new("success_payload_scatter_chart")
        .height(height)
        .legend(Legend::default())
        .x_axis_label("Payload Mass (kg)")
        .y_axis_label("Success (1) / Failure (0)")
        .include_x(state.payload_range.min)
        .include_x(state.payload_range.max)
        .include_y(-0.25)
        .include_y(1.25)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for (category, points) in series {
                let markers = Points::new(PlotPoints::new(points))
                    .name(category)
                    .color(state.color_map.color_for(category))
                    .shape(MarkerShape::Circle)
                    .filled(true)
                    .radius(5.0);
                plot_ui.points(markers);
            }
        });
}

fn no_data(ui: &mut Ui, height: f32) {
    ui.allocate_ui(eframe::egui::vec2(ui.available_width(), height), |ui: &mut Ui| {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.label(RichText::new("No launches match the current selection.").weak());
        });
    });
}
