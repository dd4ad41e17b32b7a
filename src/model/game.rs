use super::card::Card;
use super::event::ModelEvent;
use crate::events::SubscriptionId;

/// Read side of a Concentration game plus its notifications. Everything the
/// board view needs, and nothing it may change.
pub trait GameModel {
    fn cards(&self) -> Vec<Card>;
    fn cheat_cards(&self) -> Vec<Card>;
    fn move_count(&self) -> u32;
    fn how_many_cards_up(&self) -> usize;
    fn subscribe<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&ModelEvent) + 'static;
    fn unsubscribe(&self, id: SubscriptionId) -> bool;
}
