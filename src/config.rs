use std::time::Duration;

use rand::Rng;

use crate::board::Cell;
use crate::{BoardInt, Coords};

/// Apple positions eaten in order; eating the whole sequence wins the game.
pub const DEFAULT_APPLE_TARGETS: [Coords; 10] = [
    (75, 8),
    (75, 39),
    (78, 2),
    (2, 2),
    (8, 5),
    (78, 39),
    (74, 33),
    (2, 38),
    (72, 35),
    (5, 2),
];

#[derive(Copy, Clone)]
pub struct Glyphs {
    pub head: char,
    pub body: char,
    pub border: char,
    pub empty: char,
    pub apple: char,
}

impl Glyphs {
    pub fn for_cell(&self, cell: Cell) -> char {
        match cell {
            Cell::Empty => self.empty,
            Cell::Border => self.border,
            Cell::Apple => self.apple,
            Cell::SnakeBody => self.body,
        }
    }
}

impl Default for Glyphs {
    fn default() -> Self {
        Glyphs { head: 'O', body: 'X', border: '#', empty: ' ', apple: '6' }
    }
}

/// Game constants, overridable before the game starts. Dimensions must be
/// even so the wormhole gaps sit on exact edge midpoints.
#[derive(Clone)]
pub struct GameConfig {
    /// Board columns, border included.
    pub width: BoardInt,
    /// Board rows, border included.
    pub height: BoardInt,
    /// Fixed body length; the snake never grows.
    pub snake_length: usize,
    /// Pause between two simulation ticks.
    pub tick_delay: Duration,
    /// Apple sequence; its length is the win threshold.
    pub apple_targets: Vec<Coords>,
    pub glyphs: Glyphs,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            width: 80,
            height: 40,
            snake_length: 10,
            tick_delay: Duration::from_millis(200),
            apple_targets: DEFAULT_APPLE_TARGETS.to_vec(),
            glyphs: Glyphs::default(),
        }
    }
}

impl GameConfig {
    pub fn start_position(&self) -> Coords {
        (self.width / 2, self.height / 2)
    }

    /// Cells the snake occupies before the first tick: a horizontal line
    /// extending left of the starting head.
    pub fn start_line(&self) -> Vec<Coords> {
        let (x, y) = self.start_position();
        (0..self.snake_length).map(|i| (x - i as BoardInt, y)).collect()
    }

    /// Replaces the built-in apple sequence with random interior targets
    /// that avoid the snake's starting line.
    pub fn randomize_targets(&mut self) {
        let mut rng = rand::thread_rng();
        let start = self.start_line();
        let count = self.apple_targets.len();
        let mut targets = Vec::with_capacity(count);
        while targets.len() < count {
            let pos = (rng.gen_range(2..self.width), rng.gen_range(2..self.height));
            if !start.contains(&pos) {
                targets.push(pos);
            }
        }
        self.apple_targets = targets;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_the_classic_board() {
        let config = GameConfig::default();
        assert_eq!(config.width, 80);
        assert_eq!(config.height, 40);
        assert_eq!(config.snake_length, 10);
        assert_eq!(config.apple_targets.len(), 10);
        assert_eq!(config.start_position(), (40, 20));
    }

    #[test]
    fn start_line_extends_left_of_the_head() {
        let line = GameConfig::default().start_line();
        assert_eq!(line.len(), 10);
        assert_eq!(line[0], (40, 20));
        assert_eq!(line[9], (31, 20));
    }

    #[test]
    fn random_targets_stay_interior_and_off_the_snake() {
        let mut config = GameConfig::default();
        config.randomize_targets();
        let start = config.start_line();
        assert_eq!(config.apple_targets.len(), 10);
        for &(x, y) in &config.apple_targets {
            assert!((2..config.width).contains(&x));
            assert!((2..config.height).contains(&y));
            assert!(!start.contains(&(x, y)));
        }
    }
}
