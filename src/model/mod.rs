mod card;
mod concentration;
mod error;
mod event;
mod game;

pub use card::{Card, FACE_COUNT, SLOT_COUNT, slot_position};
pub use concentration::ConcentrationModel;
pub use error::ModelError;
pub use event::ModelEvent;
pub use game::GameModel;
