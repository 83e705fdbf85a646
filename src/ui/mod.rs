pub mod app;
pub mod audio;
pub mod board;
pub mod hud;
