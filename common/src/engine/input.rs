use crate::games::snake::Direction;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ControlCommand {
    Start,
    Toggle,
    PauseResume,
    Restart,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputEvent {
    Direction(Direction),
    Command(ControlCommand),
}

pub trait InputSource {
    type Frame: ?Sized;

    fn poll(&mut self, frame: &Self::Frame, emit: &mut dyn FnMut(InputEvent));
}
