mod app;
mod board;
mod overlay;

pub use app::SnakeApp;
