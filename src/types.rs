use serde::Serialize;

/// One of the two seats at the board.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "u8")]
pub enum Player {
    #[default]
    One,
    Two,
}

impl Player {
    pub const ALL: [Player; 2] = [Player::One, Player::Two];

    /// Returns the other player.
    pub fn opponent(self) -> Self {
        match self {
            Self::One => Self::Two,
            Self::Two => Self::One,
        }
    }

    /// Numeric identifier exposed to the page: 1 or 2.
    pub fn id(self) -> u8 {
        match self {
            Self::One => 1,
            Self::Two => 2,
        }
    }

    pub fn from_id(id: u8) -> Option<Self> {
        match id {
            1 => Some(Self::One),
            2 => Some(Self::Two),
            _ => None,
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Self::One => 0,
            Self::Two => 1,
        }
    }
}

impl From<Player> for u8 {
    fn from(player: Player) -> Self {
        player.id()
    }
}

/// Outcome of evaluating the board after a move.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RoundResult {
    #[default]
    InProgress,
    /// `line` holds the first and last cell of the matched triple.
    Win { winner: Player, line: (usize, usize) },
    Stalemate,
}

impl RoundResult {
    pub fn is_over(&self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// Accumulated wins per player.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Scores {
    pub player_one: u32,
    pub player_two: u32,
}

/// Public game state returned from WASM APIs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameState {
    /// 0=empty, 1=player one, 2=player two; row-major.
    pub board: Vec<u8>,
    pub current_player: Player,
    pub scores: Scores,
    pub result: RoundResult,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opponent_flips_between_the_two_players() {
        assert_eq!(Player::One.opponent(), Player::Two);
        assert_eq!(Player::Two.opponent(), Player::One);
        assert_eq!(Player::One.opponent().opponent(), Player::One);
    }

    #[test]
    fn ids_round_trip_and_reject_unknown_values() {
        for player in Player::ALL {
            assert_eq!(Player::from_id(player.id()), Some(player));
        }
        assert_eq!(Player::from_id(0), None);
        assert_eq!(Player::from_id(3), None);
    }

    #[test]
    fn only_in_progress_is_not_over() {
        assert!(!RoundResult::InProgress.is_over());
        assert!(RoundResult::Stalemate.is_over());
        assert!(
            RoundResult::Win {
                winner: Player::Two,
                line: (2, 6)
            }
            .is_over()
        );
    }
}
