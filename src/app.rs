use eframe::egui;

use crate::config::DashboardConfig;
use crate::data::model::LaunchDataset;
use crate::state::AppState;
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct SpacexDashApp {
    pub state: AppState,
    title: String,
}

impl SpacexDashApp {
    pub fn new(dataset: LaunchDataset, config: &DashboardConfig) -> Self {
        Self {
            state: AppState::new(dataset, config),
            title: config.window_title.clone(),
        }
    }
}

impl eframe::App for SpacexDashApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: heading + status ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &self.state, &self.title);
        });

        // ---- Left side panel: dropdown + payload range ----
        egui::SidePanel::left("control_panel")
            .default_width(240.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: pie above scatter ----
        egui::CentralPanel::default().show(ctx, |ui| {
            // Leave room for the two chart headings.
            let chart_height = ((ui.available_height() - 80.0) / 2.0).max(150.0);
            plot::pie_chart(ui, &self.state, chart_height);
            ui.separator();
            plot::scatter_plot(ui, &self.state, chart_height);
        });
    }
}
