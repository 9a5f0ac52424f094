use common::{ControlCommand, Direction, InputEvent, InputSource};

const KEYS: [egui::Key; 11] = [
    egui::Key::ArrowUp,
    egui::Key::ArrowDown,
    egui::Key::ArrowLeft,
    egui::Key::ArrowRight,
    egui::Key::W,
    egui::Key::A,
    egui::Key::S,
    egui::Key::D,
    egui::Key::Space,
    egui::Key::P,
    egui::Key::R,
];

pub struct KeyboardInput;

impl KeyboardInput {
    pub fn new() -> Self {
        Self
    }
}

impl InputSource for KeyboardInput {
    type Frame = egui::Context;

    fn poll(&mut self, ctx: &egui::Context, emit: &mut dyn FnMut(InputEvent)) {
        let widget_focused = ctx.memory(|m| m.focused().is_some());
        let pressed: Vec<egui::Key> = ctx.input(|i| {
            if i.modifiers.any() {
                return Vec::new();
            }
            captured_keys(widget_focused)
                .filter(|key| i.key_pressed(*key))
                .collect()
        });

        for key in pressed {
            if let Some(event) = key_event(key) {
                emit(event);
            }
        }
    }
}

// A focused widget already reacts to Space itself.
fn captured_keys(widget_focused: bool) -> impl Iterator<Item = egui::Key> {
    KEYS.into_iter()
        .filter(move |key| !(widget_focused && *key == egui::Key::Space))
}

fn key_event(key: egui::Key) -> Option<InputEvent> {
    let event = match key {
        egui::Key::ArrowUp | egui::Key::W => InputEvent::Direction(Direction::Up),
        egui::Key::ArrowDown | egui::Key::S => InputEvent::Direction(Direction::Down),
        egui::Key::ArrowLeft | egui::Key::A => InputEvent::Direction(Direction::Left),
        egui::Key::ArrowRight | egui::Key::D => InputEvent::Direction(Direction::Right),
        egui::Key::Space => InputEvent::Command(ControlCommand::Toggle),
        egui::Key::P => InputEvent::Command(ControlCommand::PauseResume),
        egui::Key::R => InputEvent::Command(ControlCommand::Restart),
        _ => return None,
    };
    Some(event)
}
