use gtk4 as gtk;
use gtk4::prelude::*;
use libadwaita as adw;
use adw::prelude::*;

use super::board::build_reveal_grid;
use super::presenter::CellFace;

#[derive(Clone)]
pub struct CheatWindow {
    window: adw::Window,
}

impl CheatWindow {
    pub fn new(parent: &impl IsA<gtk::Window>) -> Self {
        let window = adw::Window::builder()
            .title("Cheat window")
            .transient_for(parent)
            .modal(false)
            .resizable(false)
            .hide_on_close(true)
            .build();
        CheatWindow { window }
    }

    pub fn prepare(&self, faces: &[CellFace]) {
        let grid = build_reveal_grid(faces);
        grid.set_margin_top(12);
        grid.set_margin_bottom(12);
        grid.set_margin_start(12);
        grid.set_margin_end(12);

        let toolbar = adw::ToolbarView::new();
        toolbar.add_top_bar(&adw::HeaderBar::new());
        toolbar.set_content(Some(&grid));
        self.window.set_content(Some(&toolbar));
    }

    pub fn present(&self) {
        if self.window.content().is_some() {
            self.window.present();
        }
    }
}
