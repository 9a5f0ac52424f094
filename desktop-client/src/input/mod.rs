mod buttons;
mod keyboard;
mod pointer;

pub use buttons::ButtonInput;
pub use keyboard::KeyboardInput;
pub use pointer::PointerInput;
