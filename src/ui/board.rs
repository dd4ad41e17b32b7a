use std::cell::Cell;
use std::rc::Rc;

use gtk4 as gtk;
use gtk4::prelude::*;
use log::{debug, warn};

use super::art::{draw_card_image, image_for};
use super::presenter::CellFace;
use crate::model::{ConcentrationModel, ModelError, SLOT_COUNT, slot_position};

pub const CARD_SIZE: i32 = 75;
pub const TILE_GAP: i32 = 6;

#[derive(Clone)]
pub struct CardCell {
    widget: gtk::Widget,
    area: gtk::DrawingArea,
    face: Rc<Cell<CellFace>>,
}

impl CardCell {
    fn new(container: gtk::Widget, area: gtk::DrawingArea, face: Rc<Cell<CellFace>>) -> Self {
        CardCell {
            widget: container,
            area,
            face,
        }
    }

    pub fn set_face(&self, face: CellFace) {
        if self.face.get() == face {
            return;
        }
        self.face.set(face);
        if face == CellFace::Hidden {
            self.widget.remove_css_class("face-up");
        } else {
            self.widget.add_css_class("face-up");
        }
        self.area.queue_draw();
    }
}

fn card_drawing_area(face: &Rc<Cell<CellFace>>) -> gtk::DrawingArea {
    let area = gtk::DrawingArea::builder()
        .content_width(CARD_SIZE)
        .content_height(CARD_SIZE)
        .hexpand(true)
        .vexpand(true)
        .build();

    let face_draw = face.clone();
    area.set_draw_func(move |area, cr, width, height| {
        draw_card_image(area, cr, width, height, image_for(face_draw.get()));
    });
    area
}

fn new_grid(css_class: &str) -> gtk::Grid {
    let grid = gtk::Grid::new();
    grid.add_css_class(css_class);
    grid.set_row_spacing(TILE_GAP as u32);
    grid.set_column_spacing(TILE_GAP as u32);
    grid.set_halign(gtk::Align::Center);
    grid.set_valign(gtk::Align::Center);
    grid
}

pub fn build_board_grid(model: &Rc<ConcentrationModel>) -> (gtk::Grid, Vec<CardCell>) {
    let grid = new_grid("concentration-board");
    let mut cells = Vec::with_capacity(SLOT_COUNT);

    for slot in 0..SLOT_COUNT {
        let face = Rc::new(Cell::new(CellFace::Hidden));
        let area = card_drawing_area(&face);

        let button = gtk::Button::builder()
            .css_classes(vec!["concentration-card"])
            .child(&area)
            .build();

        let model = model.clone();
        button.connect_clicked(move |_| {
            match model.select_card(slot) {
                Ok(()) => {}
                Err(err @ ModelError::AlreadyFaceUp(_)) => debug!("selection ignored: {err}"),
                Err(err) => warn!("selection rejected: {err}"),
            }
        });

        let (row, col) = slot_position(slot);
        grid.attach(&button, col as i32, row as i32, 1, 1);
        cells.push(CardCell::new(button.upcast(), area, face));
    }

    (grid, cells)
}

// Read-only, laid out like the board.
pub fn build_reveal_grid(faces: &[CellFace]) -> gtk::Grid {
    let grid = new_grid("concentration-board");

    for (slot, &face) in faces.iter().enumerate() {
        let face = Rc::new(Cell::new(face));
        let area = card_drawing_area(&face);

        let frame = gtk::Box::new(gtk::Orientation::Vertical, 0);
        frame.add_css_class("cheat-card");
        frame.append(&area);

        let (row, col) = slot_position(slot);
        grid.attach(&frame, col as i32, row as i32, 1, 1);
    }

    grid
}
