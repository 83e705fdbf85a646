pub mod assets;
pub mod game;
pub mod settings;
pub mod ui;
