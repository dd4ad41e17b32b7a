use std::cell::RefCell;
use std::rc::Rc;

use log::debug;

use crate::config::WinRule;
use crate::events::{EventHandler, SubscriptionId};
use crate::model::{Card, GameModel, ModelEvent, SLOT_COUNT};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellFace {
    Hidden,
    Face(u8),
}

impl CellFace {
    pub fn of(card: &Card) -> Self {
        if card.is_face_up() {
            CellFace::Face(card.face())
        } else {
            CellFace::Hidden
        }
    }

    // 0 is the placeholder, faces follow.
    pub fn image_index(self) -> usize {
        match self {
            CellFace::Hidden => 0,
            CellFace::Face(face) => face as usize + 1,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusLine {
    AwaitingFirst,
    AwaitingSecond,
    NoMatch,
    Win,
}

impl StatusLine {
    // None: the count has no line of its own and the current one stays.
    pub fn for_pending(count: usize) -> Option<Self> {
        match count {
            0 => Some(StatusLine::AwaitingFirst),
            1 => Some(StatusLine::AwaitingSecond),
            2 => Some(StatusLine::NoMatch),
            _ => None,
        }
    }

    pub fn text(self) -> &'static str {
        match self {
            StatusLine::AwaitingFirst => "Select the first card.",
            StatusLine::AwaitingSecond => "Select the second card.",
            StatusLine::NoMatch => "No Match: Undo or select a card.",
            StatusLine::Win => "YOU WIN",
        }
    }
}

pub fn moves_text(count: u32) -> String {
    format!("{count} Moves")
}

pub fn is_won(rule: WinRule, cards: &[Card]) -> bool {
    match rule {
        WinRule::AllFaceUp => !cards.is_empty() && cards.iter().all(Card::is_face_up),
        WinRule::LastSlot => cards.last().is_some_and(Card::is_face_up),
    }
}

pub trait BoardSurface {
    fn show_cell(&mut self, slot: usize, face: CellFace);
    fn show_moves(&mut self, text: &str);
    fn show_status(&mut self, status: StatusLine);
    fn prepare_cheat(&mut self, faces: &[CellFace]);
}

// Re-reads the whole model on every notification. Holds no card state.
pub struct BoardPresenter<M: GameModel, S: BoardSurface> {
    model: Rc<M>,
    surface: S,
    win_rule: WinRule,
    status: StatusLine,
    subscription: Option<SubscriptionId>,
}

impl<M: GameModel + 'static, S: BoardSurface + 'static> BoardPresenter<M, S> {
    pub fn new(model: Rc<M>, surface: S, win_rule: WinRule) -> Self {
        BoardPresenter {
            model,
            surface,
            win_rule,
            status: StatusLine::AwaitingFirst,
            subscription: None,
        }
    }

    pub fn attach(presenter: &Rc<RefCell<Self>>) {
        let model = presenter.borrow().model.clone();
        let weak = Rc::downgrade(presenter);
        let id = model.subscribe(move |event| {
            if let Some(presenter) = weak.upgrade() {
                presenter.borrow_mut().handle_event(event);
            }
        });

        let mut presenter = presenter.borrow_mut();
        presenter.subscription = Some(id);
        presenter.handle_event(&ModelEvent::Updated);
    }
}

impl<M: GameModel, S: BoardSurface> BoardPresenter<M, S> {
    #[cfg(test)]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn status(&self) -> StatusLine {
        self.status
    }

    fn on_model_changed(&mut self, event: ModelEvent) {
        let cards = self.model.cards();
        debug_assert_eq!(cards.len(), SLOT_COUNT, "board must hold every slot");

        for (slot, card) in cards.iter().enumerate() {
            self.surface.show_cell(slot, CellFace::of(card));
        }

        self.surface.show_moves(&moves_text(self.model.move_count()));

        let pending = self.model.how_many_cards_up();
        match StatusLine::for_pending(pending) {
            Some(status) => self.status = status,
            None => debug!("no status for {pending} cards up, keeping {:?}", self.status),
        }
        if is_won(self.win_rule, &cards) {
            self.status = StatusLine::Win;
        }
        self.surface.show_status(self.status);

        if event == ModelEvent::CheatRevealed {
            let faces: Vec<CellFace> = self.model.cheat_cards().iter().map(CellFace::of).collect();
            self.surface.prepare_cheat(&faces);
        }
    }
}

impl<M: GameModel, S: BoardSurface> EventHandler<ModelEvent> for BoardPresenter<M, S> {
    fn handle_event(&mut self, event: &ModelEvent) {
        self.on_model_changed(*event);
    }
}

impl<M: GameModel, S: BoardSurface> Drop for BoardPresenter<M, S> {
    fn drop(&mut self) {
        if let Some(id) = self.subscription.take() {
            self.model.unsubscribe(id);
        }
    }
}
