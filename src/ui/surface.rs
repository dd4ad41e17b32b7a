use gtk4 as gtk;

use super::board::CardCell;
use super::cheat::CheatWindow;
use super::hud::{set_moves, set_status};
use super::presenter::{BoardSurface, CellFace, StatusLine};

pub struct GtkBoardSurface {
    cells: Vec<CardCell>,
    status_label: gtk::Label,
    moves_label: gtk::Label,
    cheat_window: CheatWindow,
}

impl GtkBoardSurface {
    pub fn new(
        cells: Vec<CardCell>,
        status_label: gtk::Label,
        moves_label: gtk::Label,
        cheat_window: CheatWindow,
    ) -> Self {
        GtkBoardSurface {
            cells,
            status_label,
            moves_label,
            cheat_window,
        }
    }
}

impl BoardSurface for GtkBoardSurface {
    fn show_cell(&mut self, slot: usize, face: CellFace) {
        // Slot count is fixed by the model; a missing cell is a layout bug.
        self.cells[slot].set_face(face);
    }

    fn show_moves(&mut self, text: &str) {
        set_moves(&self.moves_label, text);
    }

    fn show_status(&mut self, status: StatusLine) {
        set_status(&self.status_label, status);
    }

    fn prepare_cheat(&mut self, faces: &[CellFace]) {
        self.cheat_window.prepare(faces);
    }
}
