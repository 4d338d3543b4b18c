use std::thread::sleep;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::config::GameConfig;
use crate::navigator::Navigator;
use crate::sim::{GameState, GameStatus, TerminalKind, TickOutcome};
use crate::snake::Direction;
use crate::term::TermManager;

#[derive(Copy, Clone, PartialEq, Eq)]
pub enum ControlMode {
    Auto,
    Manual,
}

enum KeyCommand {
    Stop,
    Turn(Direction),
}

pub struct SnakeGame {
    config: GameConfig,
    term: TermManager,
    state: GameState,
}

impl SnakeGame {
    pub fn new(config: GameConfig) -> Self {
        let state = GameState::new(&config);
        SnakeGame { config, term: TermManager::new(), state }
    }

    pub fn run(&mut self, mode: ControlMode) -> Result<()> {
        self.term.setup(self.config.width, self.config.height)?;
        let started = Instant::now();

        let played = self.play(mode);
        self.term.restore()?;
        played?;

        self.print_report(started.elapsed());
        Ok(())
    }

    ///////////////////////////////////////////////////////////////////////////

    fn play(&mut self, mode: ControlMode) -> Result<()> {
        self.draw_board()?;

        let mut navigator =
            Navigator::new(self.config.width, self.config.height, self.config.snake_length);
        let mut manual_dir = self.state.direction();

        while self.state.is_running() {
            sleep(self.config.tick_delay);

            for key in self.term.drain_key_events()? {
                match interpret_key(&key, mode) {
                    Some(KeyCommand::Stop) => self.state.stop(),
                    Some(KeyCommand::Turn(dir)) => {
                        if !dir.is_opposite(self.state.direction()) {
                            manual_dir = dir;
                        }
                    }
                    None => {}
                }
            }
            if !self.state.is_running() {
                break;
            }

            let dir = match mode {
                ControlMode::Auto => {
                    navigator.choose(self.state.head(), self.state.apple(), self.state.direction())
                }
                ControlMode::Manual => manual_dir,
            };

            let outcome = self.state.tick(dir);
            navigator.observe(&outcome);
            self.render_tick(&outcome)?;
        }

        Ok(())
    }

    fn draw_board(&mut self) -> Result<()> {
        self.term.clear()?;

        for y in 1..=self.config.height {
            for x in 1..=self.config.width {
                let glyph = self.config.glyphs.for_cell(self.state.cell_at((x, y)));
                self.term.draw_cell((x, y), glyph)?;
            }
        }
        self.term.draw_cell(self.state.head(), self.config.glyphs.head)?;

        self.term.flush()
    }

    // Only the cells a tick changed get redrawn: the freed tail, the old
    // head turning into body, a newly placed apple, and the new head.
    fn render_tick(&mut self, outcome: &TickOutcome) -> Result<()> {
        let glyphs = self.config.glyphs;

        self.term.draw_cell(outcome.freed_tail, glyphs.empty)?;
        self.term.draw_cell(outcome.old_head, glyphs.body)?;
        if let Some(apple) = outcome.placed_apple {
            self.term.draw_cell(apple, glyphs.apple)?;
        }
        // a border miss can leave the head off the grid; nothing to draw
        if self.state.board().is_in_bounds(outcome.new_head) {
            self.term.draw_cell(outcome.new_head, glyphs.head)?;
        }

        self.term.flush()
    }

    fn print_report(&self, elapsed: Duration) {
        let GameStatus::Over(kind) = self.state.status() else {
            return;
        };
        let headline = match kind {
            TerminalKind::Victory => "The snake ate every apple!",
            TerminalKind::BorderCollision => "The snake crashed into the border.",
            TerminalKind::SelfCollision => "The snake bit its own body.",
            TerminalKind::UserStop => "Stopped.",
        };

        println!("{headline}");
        println!("Apples eaten: {}/{}", self.state.apples_eaten(), self.state.win_threshold());
        println!("Unit moves: {}", self.state.moves());
        println!("Elapsed: {:.2} s", elapsed.as_secs_f64());
    }
}

fn interpret_key(ev: &KeyEvent, mode: ControlMode) -> Option<KeyCommand> {
    if is_ctrl_c(ev) {
        return Some(KeyCommand::Stop);
    }

    match ev.code {
        KeyCode::Char('a') | KeyCode::Char('q') | KeyCode::Esc => Some(KeyCommand::Stop),
        KeyCode::Up if mode == ControlMode::Manual => Some(KeyCommand::Turn(Direction::Up)),
        KeyCode::Down if mode == ControlMode::Manual => Some(KeyCommand::Turn(Direction::Down)),
        KeyCode::Left if mode == ControlMode::Manual => Some(KeyCommand::Turn(Direction::Left)),
        KeyCode::Right if mode == ControlMode::Manual => Some(KeyCommand::Turn(Direction::Right)),
        _ => None,
    }
}

fn is_ctrl_c(ev: &KeyEvent) -> bool {
    matches!(
        ev,
        KeyEvent { code: KeyCode::Char('c'), modifiers: KeyModifiers::CONTROL, .. }
    )
}
