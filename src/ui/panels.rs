use eframe::egui::{self, Color32, RichText, Ui};

use crate::data::query::{PayloadRange, SiteSelector, ALL_SITES};
use crate::state::AppState;

const HEADING_COLOR: Color32 = Color32::from_rgb(0x50, 0x3D, 0x36);

// ---------------------------------------------------------------------------
// Top bar – dashboard heading and status
// ---------------------------------------------------------------------------

/// Render the heading and the record counts.
pub fn top_bar(ui: &mut Ui, state: &AppState, title: &str) {
    ui.vertical_centered(|ui: &mut Ui| {
        ui.label(RichText::new(title).size(40.0).color(HEADING_COLOR));
    });
    ui.horizontal(|ui: &mut Ui| {
        ui.label(format!(
            "{} launches loaded, {} plotted",
            state.dataset.len(),
            state.scatter_indices.len()
        ));
        ui.separator();
        ui.label(format!(
            "Payload {:.0}–{:.0} kg",
            state.dataset.min_payload, state.dataset.max_payload
        ));
    });
}

// ---------------------------------------------------------------------------
// Left side panel – controls
// ---------------------------------------------------------------------------

/// Render the site dropdown and payload range controls.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Controls");
    ui.separator();

    site_dropdown(ui, state);
    ui.add_space(12.0);
    payload_slider(ui, state);
}

fn dropdown_label(selector: &SiteSelector) -> String {
    match selector {
        SiteSelector::All => "All Sites".to_string(),
        SiteSelector::Site(site) => site.clone(),
    }
}

fn site_dropdown(ui: &mut Ui, state: &mut AppState) {
    ui.strong("Launch Site");

    let mut chosen: Option<SiteSelector> = None;
    egui::ComboBox::from_id_salt("site_dropdown")
        .selected_text(dropdown_label(&state.selector))
        .width(ui.available_width())
        .show_ui(ui, |ui: &mut Ui| {
            if ui
                .selectable_label(state.selector == SiteSelector::All, "All Sites")
                .clicked()
            {
                chosen = Some(SiteSelector::parse(ALL_SITES));
            }
            for site in &state.dataset.launch_sites {
                let is_selected = state.selector.matches(site) && state.selector != SiteSelector::All;
                if ui.selectable_label(is_selected, site).clicked() {
                    chosen = Some(SiteSelector::parse(site));
                }
            }
        });

    if let Some(selector) = chosen {
        state.set_selector(selector);
    }
}

/// Two sliders standing in for a dual-handle range; the handles never cross.
fn payload_slider(ui: &mut Ui, state: &mut AppState) {
    ui.strong("Payload range (Kg):");

    let PayloadRange { mut min, mut max } = state.payload_range;
    let bounds = state.slider_min..=state.slider_max;
    let step = state.slider_step;

    let min_changed = ui
        .add(egui::Slider::new(&mut min, bounds.clone()).step_by(step).text("min"))
        .changed();
    let max_changed = ui
        .add(egui::Slider::new(&mut max, bounds).step_by(step).text("max"))
        .changed();

    if min_changed && min > max {
        max = min;
    } else if max_changed && max < min {
        min = max;
    }

    if min_changed || max_changed {
        state.set_payload_range(PayloadRange::new(min, max));
    }

    if ui.small_button("Reset").clicked() {
        state.set_payload_range(PayloadRange::new(
            state.dataset.min_payload,
            state.dataset.max_payload,
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dropdown_shows_all_sites_label_for_sentinel() {
        assert_eq!(dropdown_label(&SiteSelector::All), "All Sites");
        assert_eq!(dropdown_label(&SiteSelector::parse("CCAFS LC-40")), "CCAFS LC-40");
    }
}
