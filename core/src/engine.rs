use alloc::collections::VecDeque;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::*;

/// Phase added to the animation accumulator on every tick while flooding.
pub const FLOOD_STEP_PHASE: f64 = 0.1;

/// Accumulated phase at which one queued cell gets painted.
pub const FLOOD_STEP_THRESHOLD: f64 = 0.2;

/// Valid transitions:
/// - Idle -> Animating (accepted click)
/// - Animating -> Idle (flood settled, board not uniform)
/// - Animating -> Won (flood settled, board uniform)
/// - Idle | Animating -> Won | Lost (moves exhausted)
/// - Won | Lost -> Idle (reset)
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum EngineState {
    /// Waiting for the player to pick a color
    Idle,
    /// Painting the queued region one cell at a time
    Animating { target: Color },
    Won,
    Lost,
}

impl EngineState {
    pub const fn is_idle(self) -> bool {
        matches!(self, Self::Idle)
    }

    pub const fn is_animating(self) -> bool {
        matches!(self, Self::Animating { .. })
    }

    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }

    /// Color being flooded towards, only while animating.
    pub const fn target_color(self) -> Option<Color> {
        match self {
            Self::Animating { target } => Some(target),
            _ => None,
        }
    }
}

impl Default for EngineState {
    fn default() -> Self {
        Self::Idle
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ClickOutcome {
    NoChange,
    /// Move accepted, `region` cells are queued for painting
    Flooding { region: usize },
}

impl ClickOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Flooding { .. } => true,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum TickOutcome {
    /// Game already over, nothing advanced
    NoChange,
    /// Only time advanced
    Elapsed,
    Painted(Coord2),
    /// Flood finished without winning, back to idle
    Settled,
    Won,
    Lost,
}

impl TickOutcome {
    pub const fn has_update(self) -> bool {
        use TickOutcome::*;
        match self {
            NoChange => false,
            Elapsed => false,
            Painted(_) => true,
            Settled => true,
            Won => true,
            Lost => true,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ResetOutcome {
    NoChange,
    Reset,
}

impl ResetOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Reset => true,
        }
    }
}

/// Raw input forwarded by the host loop.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum InputEvent<'a> {
    Click(Point),
    Key(&'a str),
    Tick,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum EventOutcome {
    Click(ClickOutcome),
    Tick(TickOutcome),
    Reset(ResetOutcome),
}

impl EventOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::Click(outcome) => outcome.has_update(),
            Self::Tick(outcome) => outcome.has_update(),
            Self::Reset(outcome) => outcome.has_update(),
        }
    }
}

/// Serializable picture of a game, for debugging dumps.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub state: EngineState,
    pub moves_remaining: CellCount,
    pub elapsed_secs: f64,
    pub pending: Vec<Coord2>,
    pub board: Board,
}

/// A game from first board to the last reset.
///
/// Driven by the host through [`click`](Self::click), [`tick`](Self::tick) and
/// [`key`](Self::key); every cell color change happens inside `tick`.
#[derive(Clone, Debug)]
pub struct FloodGame<G = RandomBoardGenerator> {
    config: GameConfig,
    generator: G,
    board: Board,
    state: EngineState,
    moves_remaining: CellCount,
    flood_queue: VecDeque<Coord2>,
    ticks: u64,
    phase: f64,
}

impl FloodGame {
    /// Game on random boards drawn from `seed`.
    pub fn with_seed(config: GameConfig, seed: u64) -> Result<Self> {
        Self::new(config, RandomBoardGenerator::new(seed))
    }
}

impl<G: BoardGenerator> FloodGame<G> {
    pub fn new(config: GameConfig, mut generator: G) -> Result<Self> {
        config.validate()?;
        let board = Self::fresh_board(&config, &mut generator)?;
        let moves_remaining = board.moves();

        Ok(Self {
            config,
            generator,
            board,
            state: Default::default(),
            moves_remaining,
            flood_queue: VecDeque::new(),
            ticks: 0,
            phase: 0.0,
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    pub fn moves_remaining(&self) -> CellCount {
        self.moves_remaining
    }

    /// Time played, counted in whole ticks so it never drifts below a second.
    pub fn elapsed_secs(&self) -> f64 {
        self.ticks as f64 / f64::from(self.config.fps)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn grid(&self) -> &Grid {
        self.board.grid()
    }

    /// Color the flood is heading to: the pending target while animating,
    /// otherwise the origin's color.
    pub fn flood_color(&self) -> Color {
        self.state
            .target_color()
            .unwrap_or_else(|| self.grid().origin().color())
    }

    /// Cells still waiting to be painted, in painting order.
    pub fn pending(&self) -> impl ExactSizeIterator<Item = Coord2> + '_ {
        self.flood_queue.iter().copied()
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            state: self.state,
            moves_remaining: self.moves_remaining,
            elapsed_secs: self.elapsed_secs(),
            pending: self.pending().collect(),
            board: self.board.clone(),
        }
    }

    pub fn handle(&mut self, event: InputEvent<'_>) -> Result<EventOutcome> {
        Ok(match event {
            InputEvent::Click(point) => EventOutcome::Click(self.click(point)),
            InputEvent::Key(key) => EventOutcome::Reset(self.key(key)?),
            InputEvent::Tick => EventOutcome::Tick(self.tick()),
        })
    }

    /// Click at a point of the drawing space, ignored when it hits no cell.
    pub fn click(&mut self, point: Point) -> ClickOutcome {
        match hit_test(point, self.config.cell_size, self.grid().side()) {
            Some(coords) => self.play(coords),
            None => ClickOutcome::NoChange,
        }
    }

    /// Click directly on a cell.
    pub fn click_cell(&mut self, coords: Coord2) -> Result<ClickOutcome> {
        let coords = self.grid().validate_coords(coords)?;
        Ok(self.play(coords))
    }

    pub fn key(&mut self, key: &str) -> Result<ResetOutcome> {
        if key.eq_ignore_ascii_case("r") {
            self.reset()
        } else {
            Ok(ResetOutcome::NoChange)
        }
    }

    /// Starts over on a new board, only once the game has ended.
    pub fn reset(&mut self) -> Result<ResetOutcome> {
        if !self.state.is_finished() {
            return Ok(ResetOutcome::NoChange);
        }

        self.board = Self::fresh_board(&self.config, &mut self.generator)?;
        self.moves_remaining = self.board.moves();
        self.state = EngineState::Idle;
        self.flood_queue.clear();
        self.ticks = 0;
        self.phase = 0.0;
        log::debug!("Reset with {} moves", self.moves_remaining);
        Ok(ResetOutcome::Reset)
    }

    pub fn tick(&mut self) -> TickOutcome {
        if self.state.is_finished() {
            return TickOutcome::NoChange;
        }

        self.ticks += 1;

        if self.moves_remaining == 0 {
            // a board that is already uniform still counts as solved
            let won = self.grid().all_cells_uniform_color();
            return self.end_game(won);
        }

        // a board dealt in one color has nothing left to flood
        if self.state.is_idle() && self.grid().all_cells_uniform_color() {
            return self.end_game(true);
        }

        let EngineState::Animating { target } = self.state else {
            return TickOutcome::Elapsed;
        };

        self.phase += FLOOD_STEP_PHASE;
        if self.phase < FLOOD_STEP_THRESHOLD {
            return TickOutcome::Elapsed;
        }
        self.phase = 0.0;

        match self.flood_queue.pop_front() {
            Some(coords) => {
                self.board.grid_mut().paint(coords, target);
                log::trace!("Painted {:?} with {}", coords, target);
                TickOutcome::Painted(coords)
            }
            None if self.grid().all_cells_uniform_color() => self.end_game(true),
            None => {
                self.state = EngineState::Idle;
                log::debug!("Flood settled, {} moves left", self.moves_remaining);
                TickOutcome::Settled
            }
        }
    }

    fn play(&mut self, coords: Coord2) -> ClickOutcome {
        if !self.state.is_idle() || self.moves_remaining == 0 {
            return ClickOutcome::NoChange;
        }

        let grid = self.board.grid();
        let origin = grid.origin();
        let target = grid[coords];
        if target.matches(origin.color()) {
            return ClickOutcome::NoChange;
        }

        self.flood_queue = flood_region(origin, origin.color())
            .into_iter()
            .map(|cell| cell.coords())
            .collect();
        self.moves_remaining -= 1;
        self.phase = 0.0;
        self.state = EngineState::Animating { target };
        log::debug!(
            "Flooding {} cells with {} from {:?}, {} moves left",
            self.flood_queue.len(),
            target,
            coords,
            self.moves_remaining
        );

        ClickOutcome::Flooding {
            region: self.flood_queue.len(),
        }
    }

    fn end_game(&mut self, won: bool) -> TickOutcome {
        self.flood_queue.clear();
        self.phase = 0.0;
        if won {
            self.state = EngineState::Won;
            log::debug!("Won after {:.1}s", self.elapsed_secs());
            TickOutcome::Won
        } else {
            self.state = EngineState::Lost;
            log::debug!("Lost after {:.1}s", self.elapsed_secs());
            TickOutcome::Lost
        }
    }

    fn fresh_board(config: &GameConfig, generator: &mut G) -> Result<Board> {
        let board = generator.generate(config)?;
        if board.grid().side() != config.size {
            return Err(GameError::InvalidConfiguration(
                "generated board size does not match configuration",
            ));
        }
        Ok(board)
    }
}
