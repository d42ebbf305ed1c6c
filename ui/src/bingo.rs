//! The 75-ball bingo card shown behind the wallet gate.

use rand::seq::SliceRandom;
use rand::Rng;

pub const SIZE: usize = 5;
pub const COLUMN_LETTERS: [char; SIZE] = ['B', 'I', 'N', 'G', 'O'];
/// Numbers available per column: B is 1-15, I is 16-30, and so on.
const COLUMN_SPAN: u8 = 15;
const CENTER: usize = SIZE / 2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Square {
    Number(u8),
    Free,
}

/// A completed line on the card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::EnumIs)]
pub enum Line {
    Row(usize),
    Column(usize),
    /// Top-left to bottom-right.
    Diagonal,
    /// Top-right to bottom-left.
    AntiDiagonal,
}

impl Line {
    pub fn contains(&self, row: usize, col: usize) -> bool {
        match *self {
            Line::Row(r) => r == row,
            Line::Column(c) => c == col,
            Line::Diagonal => row == col,
            Line::AntiDiagonal => row + col == SIZE - 1,
        }
    }

    fn cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..SIZE)
            .flat_map(|row| (0..SIZE).map(move |col| (row, col)))
            .filter(|&(row, col)| self.contains(row, col))
    }

    fn all() -> impl Iterator<Item = Line> {
        (0..SIZE)
            .map(Line::Row)
            .chain((0..SIZE).map(Line::Column))
            .chain([Line::Diagonal, Line::AntiDiagonal])
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Card {
    squares: [[Square; SIZE]; SIZE],
    marked: [[bool; SIZE]; SIZE],
}

impl Card {
    /// Deals a card: five distinct numbers per column from that column's
    /// range, with the centre square free and already marked.
    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut squares = [[Square::Free; SIZE]; SIZE];
        for col in 0..SIZE {
            let low = col as u8 * COLUMN_SPAN + 1;
            let mut pool: Vec<u8> = (low..low + COLUMN_SPAN).collect();
            pool.shuffle(rng);
            for (row, number) in pool.into_iter().take(SIZE).enumerate() {
                squares[row][col] = Square::Number(number);
            }
        }
        squares[CENTER][CENTER] = Square::Free;

        let mut card = Self {
            squares,
            marked: [[false; SIZE]; SIZE],
        };
        card.reset();
        card
    }

    pub fn random() -> Self {
        Self::generate(&mut rand::thread_rng())
    }

    pub fn square(&self, row: usize, col: usize) -> Square {
        self.squares[row][col]
    }

    pub fn is_marked(&self, row: usize, col: usize) -> bool {
        self.marked[row][col]
    }

    /// Flips the mark on a square and returns the new state.
    /// The free square cannot be unmarked.
    pub fn toggle(&mut self, row: usize, col: usize) -> bool {
        if self.squares[row][col] != Square::Free {
            self.marked[row][col] = !self.marked[row][col];
        }
        self.marked[row][col]
    }

    /// Clears every mark except the free square.
    pub fn reset(&mut self) {
        for row in 0..SIZE {
            for col in 0..SIZE {
                self.marked[row][col] = self.squares[row][col] == Square::Free;
            }
        }
    }

    pub fn winning_lines(&self) -> Vec<Line> {
        Line::all()
            .filter(|line| line.cells().all(|(row, col)| self.marked[row][col]))
            .collect()
    }

    pub fn has_bingo(&self) -> bool {
        !self.winning_lines().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn card() -> Card {
        Card::generate(&mut StdRng::seed_from_u64(7))
    }

    #[test]
    fn columns_draw_distinct_numbers_from_their_range() {
        let card = card();
        for col in 0..SIZE {
            let low = col as u8 * 15 + 1;
            let mut seen = Vec::new();
            for row in 0..SIZE {
                match card.square(row, col) {
                    Square::Number(n) => {
                        assert!((low..low + 15).contains(&n), "{n} outside column {col}");
                        assert!(!seen.contains(&n));
                        seen.push(n);
                    }
                    Square::Free => assert_eq!((row, col), (CENTER, CENTER)),
                }
            }
        }
    }

    #[test]
    fn free_square_starts_marked_and_stays_marked() {
        let mut card = card();
        assert!(card.is_marked(CENTER, CENTER));
        assert!(card.toggle(CENTER, CENTER));
        card.reset();
        assert!(card.is_marked(CENTER, CENTER));
    }

    #[test]
    fn toggle_flips_number_squares() {
        let mut card = card();
        assert!(card.toggle(0, 0));
        assert!(!card.toggle(0, 0));
    }

    #[test]
    fn middle_row_needs_four_marks() {
        let mut card = card();
        for col in [0, 1, 3] {
            card.toggle(CENTER, col);
        }
        assert!(!card.has_bingo());

        card.toggle(CENTER, 4);
        assert_eq!(card.winning_lines(), vec![Line::Row(CENTER)]);
    }

    #[test]
    fn detects_columns_and_both_diagonals() {
        let mut card = card();
        for i in 0..SIZE {
            if i != CENTER {
                card.toggle(i, i);
                card.toggle(i, SIZE - 1 - i);
            }
        }
        let lines = card.winning_lines();
        assert!(lines.contains(&Line::Diagonal));
        assert!(lines.contains(&Line::AntiDiagonal));
        assert!(!lines.iter().any(Line::is_column));

        for row in 0..SIZE {
            if !card.is_marked(row, 1) {
                card.toggle(row, 1);
            }
        }
        assert!(card.winning_lines().contains(&Line::Column(1)));
    }

    #[test]
    fn reset_clears_a_win() {
        let mut card = card();
        for col in 0..SIZE {
            if !card.is_marked(0, col) {
                card.toggle(0, col);
            }
        }
        assert!(card.has_bingo());
        card.reset();
        assert!(!card.has_bingo());
    }
}
