use serde::Serialize;

pub const BOARD_SIZE: usize = 4;
pub const SLOT_COUNT: usize = BOARD_SIZE * BOARD_SIZE;
pub const FACE_COUNT: usize = SLOT_COUNT / 2;

/// Returns `(row, col)` for a slot index.
pub fn slot_position(slot: usize) -> (usize, usize) {
    (slot / BOARD_SIZE, slot % BOARD_SIZE)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Card {
    face: u8,
    face_up: bool,
}

impl Card {
    pub(super) fn face_down(face: u8) -> Self {
        Card {
            face,
            face_up: false,
        }
    }

    pub fn face(&self) -> u8 {
        self.face
    }

    pub fn is_face_up(&self) -> bool {
        self.face_up
    }

    pub(super) fn set_face_up(&mut self, face_up: bool) {
        self.face_up = face_up;
    }

    pub(super) fn revealed(self) -> Self {
        Card {
            face_up: true,
            ..self
        }
    }
}
