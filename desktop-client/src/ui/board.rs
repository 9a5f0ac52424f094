use common::{FeedbackCue, GameState, GridPoint, GRID_HEIGHT, GRID_WIDTH};

const LINE_WIDTH: f32 = 1.0;
const FLASH_WIDTH: f32 = 6.0;

const BACKGROUND: egui::Color32 = egui::Color32::from_rgb(24, 28, 32);
const GRID_LINE: egui::Color32 = egui::Color32::from_rgb(44, 50, 56);
const SNAKE_BODY: egui::Color32 = egui::Color32::from_rgb(70, 170, 90);
const SNAKE_HEAD: egui::Color32 = egui::Color32::from_rgb(150, 230, 120);
const FOOD: egui::Color32 = egui::Color32::from_rgb(220, 50, 50);

pub fn render_board(
    ui: &mut egui::Ui,
    state: &GameState,
    flash: Option<(FeedbackCue, f32)>,
) -> egui::Response {
    let side = ui.available_size().min_elem().max(GRID_WIDTH as f32 * 4.0);
    let cell_size = side / GRID_WIDTH.max(GRID_HEIGHT) as f32;

    let (rect, response) = ui.allocate_exact_size(
        egui::vec2(cell_size * GRID_WIDTH as f32, cell_size * GRID_HEIGHT as f32),
        egui::Sense::click_and_drag(),
    );

    let painter = ui.painter_at(rect);
    painter.rect_filled(rect, 0.0, BACKGROUND);

    let stroke = egui::Stroke::new(LINE_WIDTH, GRID_LINE);
    for i in 0..=GRID_WIDTH {
        let x = rect.left() + i as f32 * cell_size;
        painter.line_segment([egui::pos2(x, rect.top()), egui::pos2(x, rect.bottom())], stroke);
    }
    for i in 0..=GRID_HEIGHT {
        let y = rect.top() + i as f32 * cell_size;
        painter.line_segment([egui::pos2(rect.left(), y), egui::pos2(rect.right(), y)], stroke);
    }

    let food_rect = cell_rect(rect.min, cell_size, state.food);
    painter.circle_filled(food_rect.center(), cell_size * 0.4, FOOD);

    // Tail first so the head is painted on top.
    for (index, segment) in state.snake.iter().enumerate().rev() {
        let color = if index == 0 { SNAKE_HEAD } else { SNAKE_BODY };
        painter.rect_filled(cell_rect(rect.min, cell_size, *segment).shrink(1.0), 3.0, color);
    }

    if let Some((cue, strength)) = flash {
        let [r, g, b, _] = flash_color(cue).to_array();
        let alpha = (strength.clamp(0.0, 1.0) * 255.0) as u8;
        painter.rect_stroke(
            rect,
            0.0,
            egui::Stroke::new(FLASH_WIDTH, egui::Color32::from_rgba_unmultiplied(r, g, b, alpha)),
            egui::StrokeKind::Inside,
        );
    }

    response
}

pub fn cell_rect(origin: egui::Pos2, cell_size: f32, point: GridPoint) -> egui::Rect {
    egui::Rect::from_min_size(
        egui::pos2(
            origin.x + point.x as f32 * cell_size,
            origin.y + point.y as f32 * cell_size,
        ),
        egui::vec2(cell_size, cell_size),
    )
}

fn flash_color(cue: FeedbackCue) -> egui::Color32 {
    match cue {
        FeedbackCue::FoodEaten => egui::Color32::from_rgb(120, 230, 120),
        FeedbackCue::GameOver => FOOD,
    }
}
