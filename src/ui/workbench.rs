use eframe::egui::{
    self, Align2, Color32, FontId, Rect, RichText, Sense, StrokeKind, TextureOptions, Ui, pos2,
    vec2,
};

use crate::layout::{self, FitAxis, Size};
use crate::state::AppState;
use crate::tasks::{CalculatorPanel, PanelState, PreviewPanel};
use crate::theme::Theme;

// ---------------------------------------------------------------------------
// Central panel dispatch
// ---------------------------------------------------------------------------

/// Render the central panel: the selected task, or the current routed view.
pub fn central(ui: &mut Ui, state: &mut AppState) {
    let theme = state.theme.clone();

    let Some(id) = state.registry.selected() else {
        let location = state.location.clone();
        state.routes.resolve(&location).ui(ui, &theme);
        return;
    };

    // The registry keeps the selection pointing at a live task.
    let Some(task) = state.registry.get_mut(id) else {
        return;
    };
    match &mut task.panel {
        PanelState::Preview(panel) => preview_panel(ui, panel, &theme),
        PanelState::Calculator(panel) => calculator_panel(ui, panel, &theme),
    }
}

// ---------------------------------------------------------------------------
// Preview task – paint the image contain-fitted
// ---------------------------------------------------------------------------

fn preview_panel(ui: &mut Ui, panel: &mut PreviewPanel, theme: &Theme) {
    let Some(image) = &panel.image else {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Open an image to preview  (File → Open image…)");
        });
        return;
    };

    ui.horizontal(|ui: &mut Ui| {
        ui.label(RichText::new(image.file_name()).strong());
        ui.label(RichText::new(format!("intrinsic {}", image.size)).color(theme.light));
    });
    ui.separator();

    let avail = ui.available_size();
    let parent = Size::new(avail.x, avail.y);
    let fitted = match layout::fit_size(parent, image.size) {
        Ok(fitted) => fitted,
        Err(e) => {
            // Zero-sized panels occur while the window is collapsing.
            log::debug!("preview fit unavailable: {e}");
            return;
        }
    };

    let texture = panel.texture.get_or_insert_with(|| {
        ui.ctx()
            .load_texture(image.file_name(), image.pixels.clone(), TextureOptions::LINEAR)
    });

    let (rect, _response) = ui.allocate_exact_size(avail, Sense::hover());
    let offset = vec2((avail.x - fitted.width) * 0.5, (avail.y - fitted.height) * 0.5);
    let target = Rect::from_min_size(rect.min + offset, vec2(fitted.width, fitted.height));

    let uv = Rect::from_min_max(pos2(0.0, 0.0), pos2(1.0, 1.0));
    ui.painter().image(texture.id(), target, uv, Color32::WHITE);
    ui.painter()
        .rect_stroke(target, 0.0, (1.0, theme.grey), StrokeKind::Middle);
    ui.painter().text(
        rect.left_bottom() + vec2(4.0, -4.0),
        Align2::LEFT_BOTTOM,
        format!("{} → {}", image.size, fitted),
        FontId::proportional(12.0),
        theme.secondary,
    );
}

// ---------------------------------------------------------------------------
// Calculator task – evaluate the fit for typed-in dimensions
// ---------------------------------------------------------------------------

fn calculator_panel(ui: &mut Ui, panel: &mut CalculatorPanel, theme: &Theme) {
    ui.heading("Fit calculator");
    ui.add_space(4.0);

    egui::Grid::new("fit_inputs")
        .spacing([12.0, 6.0])
        .show(ui, |ui: &mut Ui| {
            ui.label("Container");
            dimension_input(ui, &mut panel.parent_width, &mut panel.parent_height);
            ui.end_row();

            ui.label("Item");
            dimension_input(ui, &mut panel.item_width, &mut panel.item_height);
            ui.end_row();
        });

    ui.separator();

    let parent = Size::new(panel.parent_width, panel.parent_height);
    let item = Size::new(panel.item_width, panel.item_height);

    let width = layout::fit(parent, item, FitAxis::Width);
    let height = layout::fit(parent, item, FitAxis::Height);
    match (width, height) {
        (Ok(w), Ok(h)) => {
            ui.label(RichText::new(format!("Fitted width: {w:.2}")).color(theme.secondary));
            ui.label(RichText::new(format!("Fitted height: {h:.2}")).color(theme.secondary));
            let bound = if parent.ratio() > item.ratio() {
                "width"
            } else {
                "height"
            };
            ui.label(RichText::new(format!("Constrained by {bound}.")).color(theme.light));
        }
        (Err(e), _) | (_, Err(e)) => {
            ui.label(RichText::new(e.to_string()).color(Color32::RED));
        }
    }
}

fn dimension_input(ui: &mut Ui, width: &mut f32, height: &mut f32) {
    ui.horizontal(|ui: &mut Ui| {
        ui.add(egui::DragValue::new(width).speed(1.0).prefix("w "));
        ui.add(egui::DragValue::new(height).speed(1.0).prefix("h "));
    });
}
