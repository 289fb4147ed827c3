mod screens;
mod scripts;
mod view;

pub use view::GameView;
