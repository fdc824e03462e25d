use eframe::egui::{self, Color32, RichText, Sense, Ui, vec2};

use crate::routes::View;
use crate::theme::{self, Theme};

// ---------------------------------------------------------------------------
// Home
// ---------------------------------------------------------------------------

#[derive(Default)]
pub struct HomeView;

impl View for HomeView {
    fn title(&self) -> &str {
        "Home"
    }

    fn ui(&mut self, ui: &mut Ui, theme: &Theme) {
        ui.heading(RichText::new("FitDeck").color(theme.secondary));
        ui.add_space(8.0);
        ui.label("A workbench for aspect-ratio contain fits.");
        ui.add_space(8.0);
        ui.label("• File → Open image… previews a picture fitted to the panel.");
        ui.label("• Tasks → New calculator evaluates the fit for typed-in dimensions.");
        ui.label("• View → Palette lists the theme tokens.");
    }
}

// ---------------------------------------------------------------------------
// Palette
// ---------------------------------------------------------------------------

#[derive(Default)]
pub struct PaletteView;

impl View for PaletteView {
    fn title(&self) -> &str {
        "Palette"
    }

    fn ui(&mut self, ui: &mut Ui, theme: &Theme) {
        ui.heading("Palette");
        ui.add_space(4.0);

        egui::Grid::new("palette_grid")
            .spacing([12.0, 6.0])
            .show(ui, |ui: &mut Ui| {
                ui.strong("token");
                ui.strong("value");
                ui.strong("base");
                ui.strong("hover");
                ui.strong("disabled");
                ui.end_row();

                for (name, color) in theme.tokens() {
                    ui.label(name);
                    ui.monospace(hex(color));
                    swatch(ui, color);
                    swatch(ui, theme::hover(color));
                    swatch(ui, theme::disabled(color));
                    ui.end_row();
                }
            });
    }
}

fn hex(c: Color32) -> String {
    format!("#{:02x}{:02x}{:02x}", c.r(), c.g(), c.b())
}

fn swatch(ui: &mut Ui, color: Color32) {
    let (rect, _) = ui.allocate_exact_size(vec2(48.0, 18.0), Sense::hover());
    ui.painter().rect_filled(rect, 3.0, color);
}

// ---------------------------------------------------------------------------
// Not found
// ---------------------------------------------------------------------------

pub struct NotFoundView {
    path: String,
}

impl NotFoundView {
    pub fn new(path: String) -> Self {
        NotFoundView { path }
    }
}

impl View for NotFoundView {
    fn title(&self) -> &str {
        "Not found"
    }

    fn ui(&mut self, ui: &mut Ui, theme: &Theme) {
        ui.heading("404");
        ui.label(
            RichText::new(format!("No view is registered for '{}'.", self.path))
                .color(theme.light),
        );
    }
}
