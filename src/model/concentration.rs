use std::cell::RefCell;

use log::debug;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use super::card::{Card, FACE_COUNT, SLOT_COUNT};
use super::error::{ModelError, Result};
use super::event::ModelEvent;
use super::game::GameModel;
use crate::events::{Channel, EventEmitter, EventObserver, SubscriptionId};

struct Board {
    cards: Vec<Card>,
    // Face-up cards not yet matched, in selection order. Never more than two.
    pending: Vec<usize>,
    matched: Vec<[usize; 2]>,
    move_count: u32,
    rng: StdRng,
}

impl Board {
    fn dealt(mut rng: StdRng) -> Self {
        let cards = shuffled_deal(&mut rng);
        Board {
            cards,
            pending: Vec::new(),
            matched: Vec::new(),
            move_count: 0,
            rng,
        }
    }

    fn redeal(&mut self) {
        self.cards = shuffled_deal(&mut self.rng);
        self.pending.clear();
        self.matched.clear();
        self.move_count = 0;
    }

    fn flip_pending_down(&mut self) {
        for slot in self.pending.drain(..) {
            self.cards[slot].set_face_up(false);
        }
    }
}

fn shuffled_deal(rng: &mut StdRng) -> Vec<Card> {
    let mut faces: Vec<u8> = (0..FACE_COUNT as u8).flat_map(|face| [face, face]).collect();
    faces.shuffle(rng);
    faces.into_iter().map(Card::face_down).collect()
}

/// The Concentration game: sixteen cards in eight pairs.
///
/// All mutators take `&self` and notify subscribers after the internal
/// borrow has been released, so a subscriber may query the model from
/// inside its callback.
pub struct ConcentrationModel {
    board: RefCell<Board>,
    emitter: EventEmitter<ModelEvent>,
    observer: EventObserver<ModelEvent>,
}

impl ConcentrationModel {
    pub fn new() -> Self {
        Self::from_rng(StdRng::from_os_rng())
    }

    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    /// Deals `faces` as given. Later resets shuffle as usual.
    pub fn with_faces(faces: [u8; SLOT_COUNT]) -> Result<Self> {
        let mut counts = [0usize; FACE_COUNT];
        for face in faces {
            let count = counts
                .get_mut(face as usize)
                .ok_or(ModelError::InvalidDeal)?;
            *count += 1;
        }
        if counts.iter().any(|&count| count != 2) {
            return Err(ModelError::InvalidDeal);
        }

        let model = Self::from_rng(StdRng::from_os_rng());
        model.board.borrow_mut().cards = faces.into_iter().map(Card::face_down).collect();
        Ok(model)
    }

    fn from_rng(rng: StdRng) -> Self {
        let (emitter, observer) = Channel::new();
        ConcentrationModel {
            board: RefCell::new(Board::dealt(rng)),
            emitter,
            observer,
        }
    }

    pub fn select_card(&self, slot: usize) -> Result<()> {
        {
            let mut board = self.board.borrow_mut();
            let card = board
                .cards
                .get(slot)
                .ok_or(ModelError::SlotOutOfRange(slot))?;
            if card.is_face_up() {
                return Err(ModelError::AlreadyFaceUp(slot));
            }

            // A shown mismatch is turned back over by the next selection.
            if board.pending.len() == 2 {
                board.flip_pending_down();
            }

            board.cards[slot].set_face_up(true);
            board.pending.push(slot);
            board.move_count = board.move_count.saturating_add(1);

            if board.pending.len() == 2 {
                let (first, second) = (board.pending[0], board.pending[1]);
                if board.cards[first].face() == board.cards[second].face() {
                    debug!("slots {first} and {second} matched");
                    board.pending.clear();
                    board.matched.push([first, second]);
                } else {
                    debug!("slots {first} and {second} do not match");
                }
            }
        }
        self.emitter.emit(&ModelEvent::Updated);
        Ok(())
    }

    pub fn reset(&self) {
        self.board.borrow_mut().redeal();
        debug!("board reset");
        self.emitter.emit(&ModelEvent::Updated);
    }

    /// Turns back the unmatched cards, or the last matched pair when none
    /// are showing. Returns false when there is nothing to undo.
    pub fn undo(&self) -> bool {
        {
            let mut board = self.board.borrow_mut();
            if !board.pending.is_empty() {
                board.flip_pending_down();
            } else if let Some(pair) = board.matched.pop() {
                for slot in pair {
                    board.cards[slot].set_face_up(false);
                }
            } else {
                return false;
            }
        }
        debug!("undo applied");
        self.emitter.emit(&ModelEvent::Updated);
        true
    }

    pub fn cheat(&self) {
        self.emitter.emit(&ModelEvent::CheatRevealed);
    }

    pub fn is_solved(&self) -> bool {
        self.board.borrow().cards.iter().all(Card::is_face_up)
    }
}

impl GameModel for ConcentrationModel {
    fn cards(&self) -> Vec<Card> {
        self.board.borrow().cards.clone()
    }

    fn cheat_cards(&self) -> Vec<Card> {
        self.board
            .borrow()
            .cards
            .iter()
            .map(|card| card.revealed())
            .collect()
    }

    fn move_count(&self) -> u32 {
        self.board.borrow().move_count
    }

    fn how_many_cards_up(&self) -> usize {
        self.board.borrow().pending.len()
    }

    fn subscribe<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&ModelEvent) + 'static,
    {
        self.observer.subscribe(callback)
    }

    fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.observer.unsubscribe(id)
    }
}

impl Default for ConcentrationModel {
    fn default() -> Self {
        Self::new()
    }
}
