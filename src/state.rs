/// Behavioral state of the companion orb — exactly one is active per tick.
///
/// The state is recomputed from scratch every tick from the inputs; nothing
/// here persists except the engine's record of the previous tick's state,
/// which exists only to detect transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompanionState {
    /// Cursor far away, orb settles in place.
    IdlePerch,
    /// Cursor within the attraction radius — spring toward it.
    Curious,
    /// Just poked — flying away from the cursor.
    Bounce,
    /// Focus mode on — orb holds still regardless of the cursor.
    Focus,
    /// User is idle — orb naps.
    Sleep,
}

impl CompanionState {
    pub fn label(self) -> &'static str {
        match self {
            CompanionState::IdlePerch => "Idle",
            CompanionState::Curious => "Curious",
            CompanionState::Bounce => "Bounce",
            CompanionState::Focus => "Focus",
            CompanionState::Sleep => "Sleep",
        }
    }
}
