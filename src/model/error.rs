use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("Slot {0} is outside the board")]
    SlotOutOfRange(usize),
    #[error("Card in slot {0} is already face up")]
    AlreadyFaceUp(usize),
    #[error("Every face must appear exactly twice in a deal")]
    InvalidDeal,
}

pub type Result<T> = core::result::Result<T, ModelError>;
