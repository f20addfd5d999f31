use crate::types::Player;

pub const BOARD_WIDTH: usize = 3;
pub const NUM_CELLS: usize = BOARD_WIDTH * BOARD_WIDTH;

/// Rows, then columns, then diagonals. Scan order is fixed.
pub const WIN_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// Contents of a single square.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Cell {
    #[default]
    Empty,
    Marked(Player),
}

impl Cell {
    pub fn is_empty(self) -> bool {
        self == Self::Empty
    }

    pub fn player(self) -> Option<Player> {
        match self {
            Self::Empty => None,
            Self::Marked(player) => Some(player),
        }
    }
}

/// 3x3 board, indexed 0..=8 in row-major order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Board {
    cells: [Cell; NUM_CELLS],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cell at `pos`, or `None` when out of range.
    pub fn get(&self, pos: usize) -> Option<Cell> {
        self.cells.get(pos).copied()
    }

    /// Marks an empty cell.
    /// Returns `false` (and leaves the board untouched) when the cell is
    /// occupied or out of range.
    pub fn mark(&mut self, pos: usize, player: Player) -> bool {
        match self.cells.get_mut(pos) {
            Some(cell) if cell.is_empty() => {
                *cell = Cell::Marked(player);
                true
            }
            _ => false,
        }
    }

    /// First triple in `WIN_LINES` order whose cells all hold the same mark.
    pub fn winning_line(&self) -> Option<[usize; 3]> {
        WIN_LINES.into_iter().find(|&[a, b, c]| {
            let first = self.cells[a];
            !first.is_empty() && first == self.cells[b] && first == self.cells[c]
        })
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_empty()).count()
    }

    /// Converts board to `[u8; 9]` where 0=empty, 1=player one, 2=player two.
    pub fn to_array(&self) -> [u8; NUM_CELLS] {
        self.cells.map(|cell| cell.player().map_or(0, Player::id))
    }
}

/// `(row, col)` of a cell index.
pub fn pos_to_row_col(pos: usize) -> (usize, usize) {
    (pos / BOARD_WIDTH, pos % BOARD_WIDTH)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(marks: &[(usize, Player)]) -> Board {
        let mut board = Board::new();
        for &(pos, player) in marks {
            assert!(board.mark(pos, player));
        }
        board
    }

    #[test]
    fn new_board_is_empty() {
        let board = Board::new();

        assert_eq!(board.empty_count(), NUM_CELLS);
        assert!(!board.is_full());
        assert_eq!(board.winning_line(), None);
        assert_eq!(board.to_array(), [0; NUM_CELLS]);
    }

    #[test]
    fn marking_an_occupied_cell_keeps_the_first_mark() {
        let mut board = board_with(&[(4, Player::One)]);
        let before = board;

        assert!(!board.mark(4, Player::Two));
        assert_eq!(board, before);
        assert_eq!(board.get(4), Some(Cell::Marked(Player::One)));
    }

    #[test]
    fn marking_out_of_range_is_rejected() {
        let mut board = Board::new();

        assert!(!board.mark(NUM_CELLS, Player::One));
        assert_eq!(board.get(NUM_CELLS), None);
        assert_eq!(board, Board::new());
    }

    #[test]
    fn every_line_is_detected() {
        for line in WIN_LINES {
            let marks: Vec<_> = line.iter().map(|&pos| (pos, Player::Two)).collect();
            let board = board_with(&marks);

            assert_eq!(board.winning_line(), Some(line));
        }
    }

    #[test]
    fn mixed_line_does_not_win() {
        let board = board_with(&[(0, Player::One), (1, Player::Two), (2, Player::One)]);

        assert_eq!(board.winning_line(), None);
    }

    #[test]
    fn first_line_in_scan_order_is_reported() {
        // Row 0 and column 0 both complete; the row comes first.
        let board = board_with(&[
            (0, Player::One),
            (1, Player::One),
            (2, Player::One),
            (3, Player::One),
            (6, Player::One),
        ]);

        assert_eq!(board.winning_line(), Some([0, 1, 2]));
    }

    #[test]
    fn to_array_uses_player_ids() {
        let board = board_with(&[(0, Player::One), (8, Player::Two)]);

        let cells = board.to_array();
        assert_eq!(cells[0], 1);
        assert_eq!(cells[8], 2);
        assert_eq!(cells[4], 0);
    }

    #[test]
    fn row_col_is_row_major() {
        assert_eq!(pos_to_row_col(0), (0, 0));
        assert_eq!(pos_to_row_col(5), (1, 2));
        assert_eq!(pos_to_row_col(7), (2, 1));
    }
}
