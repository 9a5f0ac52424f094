use common::{ControlCommand, Direction, InputEvent, InputSource};

const MIN_SWIPE_DISTANCE: f32 = 20.0;

pub struct PointerInput {
    drag_total: egui::Vec2,
}

impl PointerInput {
    pub fn new() -> Self {
        Self {
            drag_total: egui::Vec2::ZERO,
        }
    }
}

impl InputSource for PointerInput {
    type Frame = egui::Response;

    fn poll(&mut self, response: &egui::Response, emit: &mut dyn FnMut(InputEvent)) {
        if response.drag_started() {
            self.drag_total = egui::Vec2::ZERO;
        }
        if response.dragged() {
            self.drag_total += response.drag_delta();
        }
        if response.drag_stopped() {
            if let Some(direction) = swipe_direction(self.drag_total) {
                emit(InputEvent::Direction(direction));
            }
            self.drag_total = egui::Vec2::ZERO;
        }
        if response.clicked() {
            emit(InputEvent::Command(ControlCommand::Start));
        }
    }
}

// Dominant axis wins, screen y grows downwards.
fn swipe_direction(translation: egui::Vec2) -> Option<Direction> {
    if translation.length() < MIN_SWIPE_DISTANCE {
        return None;
    }

    let direction = if translation.x.abs() > translation.y.abs() {
        if translation.x > 0.0 {
            Direction::Right
        } else {
            Direction::Left
        }
    } else if translation.y > 0.0 {
        Direction::Down
    } else {
        Direction::Up
    };
    Some(direction)
}
