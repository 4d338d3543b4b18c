use crate::Coords;

/// Hands out apples from a fixed, pre-declared sequence. Exactly one target
/// is active at a time; exhausting the sequence is the win condition.
pub struct AppleDispenser {
    targets: Vec<Coords>,
    eaten: usize,
}

impl AppleDispenser {
    pub fn new(targets: Vec<Coords>) -> Self {
        debug_assert!(!targets.is_empty());
        AppleDispenser { targets, eaten: 0 }
    }

    /// Position of the active apple. Must not be called once every target
    /// has been eaten.
    pub fn current(&self) -> Coords {
        self.targets[self.eaten]
    }

    /// Records the active apple as eaten. Returns the next target to place,
    /// or `None` when the sequence is exhausted and the game is won.
    pub fn on_eaten(&mut self) -> Option<Coords> {
        self.eaten += 1;
        if self.eaten == self.targets.len() {
            None
        } else {
            Some(self.targets[self.eaten])
        }
    }

    pub fn eaten(&self) -> usize {
        self.eaten
    }

    pub fn win_threshold(&self) -> usize {
        self.targets.len()
    }
}
