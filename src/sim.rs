use crate::apples::AppleDispenser;
use crate::board::{Board, Cell};
use crate::config::GameConfig;
use crate::snake::{Direction, Snake};
use crate::{BoardInt, Coords};

/// How a game ends. Abnormal conditions are terminal states, not errors.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum TerminalKind {
    BorderCollision,
    SelfCollision,
    Victory,
    UserStop,
}

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum GameStatus {
    Running,
    Over(TerminalKind),
}

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum TickEvent {
    AppleEaten,
    BorderHit,
    SelfHit,
}

/// Everything one tick changed, for the renderer and the outer loop.
#[derive(Debug)]
pub struct TickOutcome {
    pub new_head: Coords,
    pub old_head: Coords,
    pub freed_tail: Coords,
    pub teleported: bool,
    pub placed_apple: Option<Coords>,
    pub events: Vec<TickEvent>,
}

/// The whole game in one value, owned by the loop that drives it.
pub struct GameState {
    board: Board,
    snake: Snake,
    dispenser: AppleDispenser,
    direction: Direction,
    moves: u64,
    status: GameStatus,
}

impl GameState {
    pub fn new(config: &GameConfig) -> Self {
        let mut board = Board::new(config.width, config.height);
        let snake = Snake::new(config.start_position(), config.snake_length, Direction::Right);
        let dispenser = AppleDispenser::new(config.apple_targets.clone());
        board.place_apple(dispenser.current());

        GameState {
            board,
            snake,
            dispenser,
            direction: Direction::Right,
            moves: 0,
            status: GameStatus::Running,
        }
    }

    /// Runs one simulation step in `direction`. Callers only tick a running
    /// game, and direction legality (no 180° reversal) is their business.
    pub fn tick(&mut self, direction: Direction) -> TickOutcome {
        debug_assert!(self.is_running());
        self.direction = direction;

        let (mut new_head, old_head, freed_tail) = self.snake.advance(direction);

        // wormhole remap, before any occupancy check
        let mut teleported = false;
        if let Some(mapped) = remap_gap_exit(new_head, self.board.width(), self.board.height()) {
            self.snake.relocate_head(mapped);
            new_head = mapped;
            teleported = true;
        }

        let mut events = Vec::new();
        let mut placed_apple = None;
        let mut terminal = None;

        if !self.board.is_in_bounds(new_head) {
            // off the grid without matching a remap rule, e.g. straight up
            // into the border row away from the gap column
            events.push(TickEvent::BorderHit);
            terminal = Some(TerminalKind::BorderCollision);
        } else {
            match self.board.classify(new_head) {
                Cell::Apple => {
                    self.board.clear_apple(new_head);
                    events.push(TickEvent::AppleEaten);
                    match self.dispenser.on_eaten() {
                        Some(next) => {
                            self.board.place_apple(next);
                            placed_apple = Some(next);
                        }
                        None => terminal = Some(TerminalKind::Victory),
                    }
                }
                Cell::Border => {
                    events.push(TickEvent::BorderHit);
                    terminal = Some(TerminalKind::BorderCollision);
                }
                Cell::Empty | Cell::SnakeBody => {}
            }
        }

        // checked after the apple bookkeeping, and it wins the tick
        if self.snake.self_collision() {
            events.push(TickEvent::SelfHit);
            terminal = Some(TerminalKind::SelfCollision);
        }

        self.moves += 1;
        if let Some(kind) = terminal {
            self.status = GameStatus::Over(kind);
        }

        TickOutcome { new_head, old_head, freed_tail, teleported, placed_apple, events }
    }

    pub fn stop(&mut self) {
        if self.is_running() {
            self.status = GameStatus::Over(TerminalKind::UserStop);
        }
    }

    pub fn is_running(&self) -> bool {
        matches!(self.status, GameStatus::Running)
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn head(&self) -> Coords {
        self.snake.head()
    }

    /// Position of the active apple. Only meaningful while the game runs.
    pub fn apple(&self) -> Coords {
        self.dispenser.current()
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn moves(&self) -> u64 {
        self.moves
    }

    pub fn apples_eaten(&self) -> usize {
        self.dispenser.eaten()
    }

    pub fn win_threshold(&self) -> usize {
        self.dispenser.win_threshold()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    /// Terrain with the snake's body overlaid, for whole-board draws. The
    /// grid itself never stores body cells; they derive from the snake.
    pub fn cell_at(&self, pos: Coords) -> Cell {
        if self.snake.body().contains(&pos) {
            Cell::SnakeBody
        } else {
            self.board.classify(pos)
        }
    }

    #[cfg(test)]
    pub(crate) fn set_snake(&mut self, snake: Snake) {
        self.snake = snake;
    }
}

/// Maps a gap-exit coordinate to the landing cell on the opposite side.
/// At most one rule can match a given position: only one coordinate can sit
/// on a boundary value at a time.
fn remap_gap_exit(pos: Coords, width: BoardInt, height: BoardInt) -> Option<Coords> {
    let (x, y) = pos;
    if x == 0 && y == height / 2 {
        Some((width - 1, y))
    } else if x == width && y == height / 2 {
        Some((1, y))
    } else if y == 0 && x == width / 2 {
        Some((x, height - 1))
    } else if y == height && x == width / 2 {
        Some((x, 1))
    } else {
        None
    }
}
