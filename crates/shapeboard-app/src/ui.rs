//! UI components using egui.

use egui::{Align2, Color32, Context, CornerRadius, Frame, Margin, RichText, Stroke, Vec2};

/// Actions triggered from the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiAction {
    /// Remove every shape.
    Clear,
}

/// State the panel displays.
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// Number of shapes on the board.
    pub shape_count: usize,
}

const PANEL_BG: Color32 = Color32::from_rgba_premultiplied(250, 250, 252, 250);
const TEXT_MUTED: Color32 = Color32::from_gray(110);

/// Render all UI and return any triggered action.
pub fn render_ui(ctx: &Context, ui_state: &UiState) -> Option<UiAction> {
    let mut action = None;

    egui::Area::new(egui::Id::new("board_panel"))
        .anchor(Align2::LEFT_TOP, Vec2::new(12.0, 12.0))
        .show(ctx, |ui| {
            panel_frame().show(ui, |ui| {
                ui.spacing_mut().item_spacing = Vec2::new(6.0, 4.0);
                ui.label(RichText::new(shape_count_label(ui_state.shape_count)).strong());
                ui.label(
                    RichText::new("Click a shape to remove it, empty space to add one")
                        .small()
                        .color(TEXT_MUTED),
                );
                if ui.button("Clear").on_hover_text("Remove all shapes (C)").clicked() {
                    action = Some(UiAction::Clear);
                }
            });
        });

    action
}

fn shape_count_label(count: usize) -> String {
    match count {
        1 => "1 shape".to_string(),
        n => format!("{} shapes", n),
    }
}

/// Common panel frame style.
fn panel_frame() -> Frame {
    Frame::new()
        .fill(PANEL_BG)
        .corner_radius(CornerRadius::same(8))
        .stroke(Stroke::new(1.0, Color32::from_gray(220)))
        .shadow(egui::epaint::Shadow {
            spread: 0,
            blur: 8,
            offset: [0, 2],
            color: Color32::from_black_alpha(15),
        })
        .inner_margin(Margin::same(8))
}
