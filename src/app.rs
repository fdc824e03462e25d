use eframe::egui;

use crate::state::AppState;
use crate::ui::{panels, workbench};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct FitDeckApp {
    pub state: AppState,
}

impl FitDeckApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let state = AppState::default();
        state.theme.apply(&cc.egui_ctx);
        FitDeckApp { state }
    }
}

impl eframe::App for FitDeckApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Tab strip: one tab per open task ----
        egui::TopBottomPanel::top("tab_strip").show(ctx, |ui| {
            panels::tab_strip(ui, &mut self.state);
        });

        // ---- Central panel: selected task or routed view ----
        egui::CentralPanel::default().show(ctx, |ui| {
            workbench::central(ui, &mut self.state);
        });
    }
}
