use gtk4::gdk;
use log::{info, warn};
use serde::Serialize;

use crate::model::{Card, ConcentrationModel, GameModel};

#[derive(Serialize)]
struct BoardDump {
    moves: u32,
    cards_up: usize,
    solved: bool,
    cards: Vec<Card>,
}

fn board_dump_json(model: &ConcentrationModel) -> serde_json::Result<String> {
    serde_json::to_string(&BoardDump {
        moves: model.move_count(),
        cards_up: model.how_many_cards_up(),
        solved: model.is_solved(),
        cards: model.cards(),
    })
}

/// Ctrl+D dumps the board, Ctrl+Shift+R resets it. Returns true when the
/// key was consumed.
pub fn handle_debug_shortcut(
    model: &ConcentrationModel,
    key: gdk::Key,
    mods: gdk::ModifierType,
) -> bool {
    if !mods.contains(gdk::ModifierType::CONTROL_MASK) {
        return false;
    }

    match key {
        gdk::Key::D | gdk::Key::d => {
            match board_dump_json(model) {
                Ok(json) => info!(target: "debug", "board {json}"),
                Err(err) => warn!(target: "debug", "could not dump board: {err}"),
            }
            true
        }
        gdk::Key::R | gdk::Key::r if mods.contains(gdk::ModifierType::SHIFT_MASK) => {
            info!(target: "debug", "forced reset");
            model.reset();
            true
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dump_reports_board_state() {
        let model =
            ConcentrationModel::with_faces([0, 0, 1, 1, 2, 2, 3, 3, 4, 4, 5, 5, 6, 6, 7, 7])
                .unwrap();
        model.select_card(0).unwrap();

        let value: serde_json::Value = serde_json::from_str(&board_dump_json(&model).unwrap()).unwrap();
        assert_eq!(value["moves"], 1);
        assert_eq!(value["cards_up"], 1);
        assert_eq!(value["solved"], false);
        assert_eq!(value["cards"].as_array().map(Vec::len), Some(16));
        assert_eq!(value["cards"][0]["face_up"], true);
        assert_eq!(value["cards"][1]["face_up"], false);
    }
}
