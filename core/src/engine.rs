use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundState {
    Waiting,
    Playing,
    Won,
    Lost,
}

impl RoundState {
    pub const fn is_playing(self) -> bool {
        matches!(self, Self::Playing)
    }

    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl Default for RoundState {
    fn default() -> Self {
        Self::Waiting
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ClickOutcome {
    NoChange,
    Correct(CellIndex),
    Won(CellIndex),
    Lost(CellIndex),
}

impl ClickOutcome {
    pub const fn has_update(self) -> bool {
        use ClickOutcome::*;
        match self {
            NoChange => false,
            Correct(_) => true,
            Won(_) => true,
            Lost(_) => true,
        }
    }

    /// Forwards the outcome to `listener`. A winning click is also a correct click.
    pub fn notify(self, listener: &mut impl RoundListener) {
        use ClickOutcome::*;
        match self {
            NoChange => {}
            Correct(cell) => listener.on_correct(cell),
            Won(cell) => {
                listener.on_correct(cell);
                listener.on_win();
            }
            Lost(_) => listener.on_lose(),
        }
    }
}

/// Handle for the one-shot timer that ends the reveal window of a round.
///
/// Only the ticket of the most recent round can hide the target, see [`RoundEngine::end_reveal`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevealTicket {
    generation: Generation,
}

impl RevealTicket {
    pub const DELAY_MS: u32 = REVEAL_DELAY_MS;

    pub const fn generation(self) -> Generation {
        self.generation
    }
}

/// Single owner of everything a round consists of.
#[derive(Clone, Debug, PartialEq)]
pub struct RoundEngine {
    grid: GridConfig,
    difficulty: Difficulty,
    target: TargetSet,
    clicked: Cells,
    revealed: bool,
    state: RoundState,
    wrong_click: Option<CellIndex>,
    generation: Generation,
}

impl RoundEngine {
    pub fn new(grid: GridConfig) -> Self {
        Self {
            grid,
            difficulty: Difficulty::DEFAULT.for_grid(grid),
            target: TargetSet::empty(),
            clicked: Cells::new(),
            revealed: false,
            state: Default::default(),
            wrong_click: None,
            generation: 0,
        }
    }

    pub fn grid(&self) -> GridConfig {
        self.grid
    }

    pub fn state(&self) -> RoundState {
        self.state
    }

    /// Target size of the current or last round.
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Empty while waiting for the first round.
    pub fn target(&self) -> &TargetSet {
        &self.target
    }

    /// Correct clicks of the current round, in click order.
    pub fn clicked(&self) -> &[CellIndex] {
        &self.clicked
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    pub fn is_target(&self, cell: CellIndex) -> bool {
        self.target.contains(cell)
    }

    pub fn is_clicked(&self, cell: CellIndex) -> bool {
        self.clicked.contains(&cell)
    }

    /// The click that lost the current round.
    pub fn wrong_click(&self) -> Option<CellIndex> {
        self.wrong_click
    }

    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// Starts a new round with a freshly generated target. Allowed from any state.
    ///
    /// The returned ticket must be passed to [`Self::end_reveal`] after [`REVEAL_DELAY_MS`]. A generator that
    /// returns the wrong number of cells is rejected and the engine is left untouched.
    pub fn start_round(
        &mut self,
        difficulty: Difficulty,
        generator: &mut impl TargetGenerator,
    ) -> Result<RevealTicket> {
        let difficulty = difficulty.for_grid(self.grid);
        let target = generator.generate(self.grid, difficulty);
        if target.len() != usize::from(difficulty.get()) {
            log::warn!(
                "Generated target size mismatch, actual: {}, requested: {}",
                target.len(),
                difficulty
            );
            return Err(GameError::TargetSizeMismatch);
        }
        self.start_round_with(target)
    }

    /// Starts a new round with a known target, its size becomes the difficulty.
    pub fn start_round_with(&mut self, target: TargetSet) -> Result<RevealTicket> {
        if target.is_empty() {
            return Err(GameError::EmptyTarget);
        }
        if target.len() > usize::from(self.grid.max_difficulty()) {
            return Err(GameError::InvalidDifficulty);
        }
        if target.iter().any(|cell| cell >= self.grid.size()) {
            return Err(GameError::InvalidCell);
        }
        Ok(self.begin(target))
    }

    fn begin(&mut self, target: TargetSet) -> RevealTicket {
        self.generation = self.generation.wrapping_add(1);
        // validated to fit in 1..=max_difficulty
        self.difficulty = Difficulty::new(target.len() as CellCount);
        self.target = target;
        self.clicked.clear();
        self.wrong_click = None;
        self.revealed = true;
        self.state = RoundState::Playing;

        log::debug!(
            "round {} started, difficulty: {}",
            self.generation,
            self.difficulty
        );
        log::trace!("target: {:?}", self.target.as_slice());

        RevealTicket {
            generation: self.generation,
        }
    }

    /// Hides the target. Returns whether anything changed, stale tickets from earlier rounds are ignored.
    pub fn end_reveal(&mut self, ticket: RevealTicket) -> bool {
        if ticket.generation != self.generation {
            log::trace!(
                "ignoring reveal ticket of round {}, current round is {}",
                ticket.generation,
                self.generation
            );
            return false;
        }

        core::mem::replace(&mut self.revealed, false)
    }

    pub fn click_cell(&mut self, index: usize) -> ClickOutcome {
        use ClickOutcome::*;

        let Ok(cell) = self.grid.validate_cell(index) else {
            log::debug!("ignoring click outside the grid: {}", index);
            return NoChange;
        };

        if !self.state.is_playing() {
            log::trace!("ignoring click on {} while {:?}", cell, self.state);
            return NoChange;
        }

        if !self.target.contains(cell) {
            self.state = RoundState::Lost;
            self.wrong_click = Some(cell);
            log::debug!("round {} lost on {}", self.generation, cell);
            return Lost(cell);
        }

        if self.clicked.contains(&cell) {
            return NoChange;
        }

        self.clicked.push(cell);
        if self.clicked.len() == self.target.len() {
            self.state = RoundState::Won;
            log::debug!("round {} won", self.generation);
            Won(cell)
        } else {
            Correct(cell)
        }
    }
}

impl Default for RoundEngine {
    fn default() -> Self {
        Self::new(GridConfig::DEFAULT)
    }
}
