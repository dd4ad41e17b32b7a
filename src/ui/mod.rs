mod app;
mod art;
mod board;
mod cheat;
mod debug_tools;
mod dialogs;
mod hud;
mod presenter;
mod surface;

use thiserror::Error;

pub use app::run;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("failed to register bundled resources: {0}")]
    Resources(glib::Error),
}
