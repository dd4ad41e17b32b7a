/// Notification sent to observers after every state-changing model call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModelEvent {
    /// Board, move count or pending selection changed.
    Updated,
    /// A full reveal was requested; `ConcentrationModel::cheat_cards` is ready.
    CheatRevealed,
}
