use eframe::egui::{self, Color32, RichText, Ui};

use crate::state::AppState;
use crate::tasks::{TaskId, TaskKind};
use crate::theme;

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open image…").clicked() {
                open_image_dialog(state);
                ui.close_menu();
            }
        });

        ui.menu_button("Tasks", |ui: &mut Ui| {
            if ui.button("New preview").clicked() {
                state.open_task(TaskKind::Preview);
                ui.close_menu();
            }
            if ui.button("New calculator").clicked() {
                state.open_task(TaskKind::Calculator);
                ui.close_menu();
            }
        });

        ui.menu_button("View", |ui: &mut Ui| {
            // Copy the entries out so we can mutate state inside the loop.
            let entries: Vec<(&'static str, &'static str)> = state
                .routes
                .routes()
                .iter()
                .map(|r| (r.path, r.name))
                .collect();
            for (path, name) in entries {
                if ui.button(name).clicked() {
                    state.navigate(path);
                    ui.close_menu();
                }
            }
        });

        ui.separator();

        if !state.registry.is_empty() {
            ui.label(format!("{} task(s) open", state.registry.len()));
        }

        if let Some(msg) = &state.status_message {
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// Tab strip
// ---------------------------------------------------------------------------

/// One selectable label per open task plus a close button each.
pub fn tab_strip(ui: &mut Ui, state: &mut AppState) {
    if state.registry.is_empty() {
        ui.label(
            RichText::new("No open tasks  (Tasks → New preview / New calculator)")
                .color(theme::disabled(state.theme.light)),
        );
        return;
    }

    let selected = state.registry.selected();
    let tabs: Vec<(TaskId, TaskKind, String)> = state
        .registry
        .iter()
        .map(|t| (t.id, t.kind, t.title.clone()))
        .collect();

    ui.horizontal_wrapped(|ui: &mut Ui| {
        for (id, kind, title) in tabs {
            let is_selected = selected == Some(id);
            let text = if is_selected {
                RichText::new(&title).color(state.theme.secondary).strong()
            } else {
                RichText::new(&title).color(state.theme.light)
            };

            let response = ui
                .selectable_label(is_selected, text)
                .on_hover_text(format!("{} task", kind.label()));
            if response.clicked() {
                if let Err(e) = state.registry.select(id) {
                    log::warn!("tab_strip: {e}");
                }
            }
            if ui.small_button("✕").clicked() {
                state.close_task(id);
            }
            ui.separator();
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_image_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open image")
        .add_filter("Images", crate::data::loader::SUPPORTED_EXTENSIONS)
        .pick_file();

    if let Some(path) = file {
        state.open_preview(&path);
    }
}
