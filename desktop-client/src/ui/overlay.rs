use common::{ControlCommand, GamePhase, GameState, InputEvent};

use crate::input::ButtonInput;

const SCRIM: egui::Color32 = egui::Color32::from_black_alpha(170);

pub fn render_overlay(
    ui: &mut egui::Ui,
    board: egui::Rect,
    state: &GameState,
    buttons: &mut ButtonInput,
) {
    let (title, subtitle) = match state.phase() {
        GamePhase::Running => return,
        GamePhase::NotStarted => (
            "Classic Snake",
            "Press Space, an arrow key or tap the board".to_string(),
        ),
        GamePhase::Paused => ("Paused", "Press Space or P to resume".to_string()),
        GamePhase::GameOver => ("Game Over", format!("Score: {}", state.score)),
    };

    let painter = ui.painter_at(board);
    painter.rect_filled(board, 0.0, SCRIM);

    let center = board.center();
    painter.text(
        center - egui::vec2(0.0, 40.0),
        egui::Align2::CENTER_CENTER,
        title,
        egui::FontId::proportional(36.0),
        egui::Color32::WHITE,
    );
    painter.text(
        center,
        egui::Align2::CENTER_CENTER,
        subtitle,
        egui::FontId::proportional(18.0),
        egui::Color32::LIGHT_GRAY,
    );

    if state.is_game_over {
        let button_rect =
            egui::Rect::from_center_size(center + egui::vec2(0.0, 50.0), egui::vec2(120.0, 36.0));
        if ui.put(button_rect, egui::Button::new("Restart")).clicked() {
            buttons.press(InputEvent::Command(ControlCommand::Restart));
        }
    }
}
