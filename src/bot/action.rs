/// What the bot does when it's asked to act.
///
/// Amounts are chips added on top of what the player already has in
/// front of them this round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Action {
    Fold,
    Check,
    Call(u64),
    Raise(u64),
}

impl Action {
    /// Chips this action puts into the pot.
    pub fn amount(&self) -> u64 {
        match self {
            Action::Fold | Action::Check => 0,
            Action::Call(amount) | Action::Raise(amount) => *amount,
        }
    }
}
