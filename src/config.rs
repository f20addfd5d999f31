use serde::Deserialize;

use crate::board::NUM_CELLS;
use crate::types::Player;

/// Page wiring: where the board lives and how marks are styled.
///
/// Deserialized from a (possibly partial) JS object; missing fields keep
/// their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ViewConfig {
    pub title: String,
    pub gameboard: String,
    /// Class carried by every clickable cell.
    pub field_class: String,
    /// Cells have ids `{field_id_prefix}{index}`.
    pub field_id_prefix: String,
    pub line: String,
    pub reset_button: String,
    pub score_one: String,
    pub score_two: String,
    pub player_one_style: String,
    pub player_two_style: String,
    pub player_one_color: String,
    pub player_two_color: String,
    pub hidden_class: String,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            title: ".title".to_string(),
            gameboard: ".gameboard".to_string(),
            field_class: "gameboard__field".to_string(),
            field_id_prefix: "field-".to_string(),
            line: ".gameboard__line".to_string(),
            reset_button: ".reset".to_string(),
            score_one: ".score--one".to_string(),
            score_two: ".score--two".to_string(),
            player_one_style: "circle".to_string(),
            player_two_style: "cross".to_string(),
            player_one_color: "#2f80ed".to_string(),
            player_two_color: "#eb5757".to_string(),
            hidden_class: "hidden".to_string(),
        }
    }
}

impl ViewConfig {
    /// Value written to a marked cell's `data-tile`.
    pub fn mark_style(&self, player: Player) -> &str {
        match player {
            Player::One => &self.player_one_style,
            Player::Two => &self.player_two_style,
        }
    }

    pub fn line_color(&self, player: Player) -> &str {
        match player {
            Player::One => &self.player_one_color,
            Player::Two => &self.player_two_color,
        }
    }

    pub fn score_selector(&self, player: Player) -> &str {
        match player {
            Player::One => &self.score_one,
            Player::Two => &self.score_two,
        }
    }

    pub fn cell_id(&self, index: usize) -> String {
        format!("{}{index}", self.field_id_prefix)
    }

    /// Parses a cell element id back into a board index.
    pub fn cell_index(&self, id: &str) -> Option<usize> {
        id.strip_prefix(&self.field_id_prefix)?
            .parse::<usize>()
            .ok()
            .filter(|&index| index < NUM_CELLS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_ids_round_trip() {
        let config = ViewConfig::default();

        for index in 0..NUM_CELLS {
            assert_eq!(config.cell_index(&config.cell_id(index)), Some(index));
        }
    }

    #[test]
    fn foreign_or_out_of_range_ids_are_rejected() {
        let config = ViewConfig::default();

        assert_eq!(config.cell_index("field-9"), None);
        assert_eq!(config.cell_index("field-x"), None);
        assert_eq!(config.cell_index("cell-1"), None);
        assert_eq!(config.cell_index(""), None);
    }

    #[test]
    fn styles_follow_the_player() {
        let config = ViewConfig::default();

        assert_eq!(config.mark_style(Player::One), "circle");
        assert_eq!(config.mark_style(Player::Two), "cross");
        assert_ne!(config.line_color(Player::One), config.line_color(Player::Two));
    }

    #[test]
    fn custom_prefix_is_honored() {
        let config = ViewConfig {
            field_id_prefix: "sq".to_string(),
            ..ViewConfig::default()
        };

        assert_eq!(config.cell_id(4), "sq4");
        assert_eq!(config.cell_index("sq8"), Some(8));
        assert_eq!(config.cell_index("field-8"), None);
    }
}
