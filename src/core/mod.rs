pub mod console;
pub mod game;
pub mod menu;
pub mod navigator;
pub mod password_check;
pub mod prompt;
pub mod save;
pub mod story;
