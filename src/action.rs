//! Moves a player can make on their turn.
//!
//! An [`Action`] only carries the indices needed to locate its operands when
//! it is applied; it is not a snapshot of the cards involved. Each kind has
//! its own payload so a throw can never carry a steal target.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Place a hand card on the table as a loose card.
    Throw { hand_index: usize },
    /// Take one loose card of equal value with a hand card.
    Capture { hand_index: usize, table_index: usize },
    /// Take a whole build with a hand card equal to its total.
    CaptureBuild { hand_index: usize, build_index: usize },
    /// Combine a hand card and a loose card into a new build.
    Build { hand_index: usize, table_index: usize, target_total: u8 },
    /// Combine an opponent's most recent capture with a loose card into a new build.
    StealBuild { table_index: usize, target_total: u8, steal_from: usize },
}

impl Action {
    pub fn kind(&self) -> ActionKind {
        match self {
            Action::Throw { .. } => ActionKind::Throw,
            Action::Capture { .. } => ActionKind::Capture,
            Action::CaptureBuild { .. } => ActionKind::CaptureBuild,
            Action::Build { .. } => ActionKind::Build,
            Action::StealBuild { .. } => ActionKind::StealBuild,
        }
    }

    /// Whether applying this action takes cards into the actor's pile.
    pub fn is_capture(&self) -> bool {
        matches!(self, Action::Capture { .. } | Action::CaptureBuild { .. })
    }

    /// Human-readable description used by move menus.
    pub fn describe(&self) -> String {
        match *self {
            Action::Throw { hand_index } => format!("Throw card #{hand_index}"),
            Action::Capture { hand_index, table_index } => {
                format!("Capture table card #{table_index} with hand #{hand_index}")
            }
            Action::CaptureBuild { hand_index, build_index } => {
                format!("Capture build #{build_index} with hand #{hand_index}")
            }
            Action::Build { hand_index, table_index, target_total } => {
                format!("Build with hand #{hand_index} + table #{table_index} to total {target_total}")
            }
            Action::StealBuild { table_index, target_total, steal_from } => format!(
                "Steal top from player {} + table #{table_index} to total {target_total}",
                steal_from + 1
            ),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKind {
    Throw,
    Capture,
    CaptureBuild,
    Build,
    StealBuild,
}

impl ActionKind {
    pub fn label(self) -> &'static str {
        match self {
            ActionKind::Throw => "throw",
            ActionKind::Capture => "capture",
            ActionKind::CaptureBuild => "capture_build",
            ActionKind::Build => "build",
            ActionKind::StealBuild => "steal_build",
        }
    }
}
