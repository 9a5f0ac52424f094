use common::{InputEvent, InputSource};

#[derive(Default)]
pub struct ButtonInput {
    pressed: Vec<InputEvent>,
}

impl ButtonInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, event: InputEvent) {
        self.pressed.push(event);
    }
}

impl InputSource for ButtonInput {
    type Frame = ();

    fn poll(&mut self, _frame: &(), emit: &mut dyn FnMut(InputEvent)) {
        for event in self.pressed.drain(..) {
            emit(event);
        }
    }
}
