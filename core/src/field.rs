use core::num::Saturating;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameState {
    Playing,
    Solved,
    Failed,
}

impl GameState {
    pub const fn is_playing(self) -> bool {
        matches!(self, Self::Playing)
    }

    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Solved | Self::Failed)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::Playing
    }
}

/// The playing field: every tile of the grid plus the game state they add up to.
///
/// The state only ever moves from [`GameState::Playing`] to one of the finished states, and only
/// [`Field::open`] moves it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "FieldSnapshot")]
pub struct Field {
    config: FieldConfig,
    grid: Array2<Tile>,
    open_count: Saturating<CellCount>,
    marked_count: Saturating<CellCount>,
    state: GameState,
}

/// Serialized form of a [`Field`]; the counters are recomputed from the grid on load.
#[derive(Deserialize)]
struct FieldSnapshot {
    config: FieldConfig,
    grid: Array2<Tile>,
    state: GameState,
}

impl TryFrom<FieldSnapshot> for Field {
    type Error = FieldError;

    fn try_from(snapshot: FieldSnapshot) -> Result<Self> {
        let FieldSnapshot {
            config,
            grid,
            state,
        } = snapshot;
        config.validate()?;

        if grid.dim() != (usize::from(config.rows), usize::from(config.columns)) {
            return Err(FieldError::InvalidConfiguration(
                "grid shape does not match the configuration",
            ));
        }

        let layout = MineLayout::from_mine_mask(grid.map(|tile| tile.is_mine()))?;
        if layout.mine_count() != config.mines {
            return Err(FieldError::InvalidConfiguration(
                "grid mine count does not match the configuration",
            ));
        }

        let mut field = Self::from_layout(layout);
        if field.grid.iter().zip(grid.iter()).any(|(a, b)| a.kind() != b.kind()) {
            return Err(FieldError::InvalidConfiguration(
                "clues do not match the mines around them",
            ));
        }
        field.grid = grid;
        field.open_count = Saturating(field.count_tiles(Tile::is_open));
        field.marked_count = Saturating(field.count_tiles(Tile::is_marked));

        if !field.allows_state(state) {
            return Err(FieldError::InvalidConfiguration(
                "game state does not match the open tiles",
            ));
        }
        field.state = state;
        Ok(field)
    }
}

impl Field {
    /// Generates a field with randomly placed mines.
    pub fn new(config: FieldConfig) -> Result<Self> {
        Self::generate(config, RandomMineGenerator::from_entropy())
    }

    pub fn generate(config: FieldConfig, generator: impl MineGenerator) -> Result<Self> {
        config.validate()?;

        let layout = generator.generate(config)?;
        if layout.field_config() != config {
            log::warn!(
                "Generated layout mismatch, actual: {:?}, requested: {:?}",
                layout.field_config(),
                config
            );
            return Err(FieldError::InvalidConfiguration(
                "generated layout does not match the configuration",
            ));
        }

        Ok(Self::from_layout(layout))
    }

    /// Builds the tiles for `layout`, computing every clue once.
    pub fn from_layout(layout: MineLayout) -> Self {
        let config = layout.field_config();
        let grid = Array2::from_shape_fn(config.size().to_nd_index(), |(row, column)| {
            let coords = (row as Coord, column as Coord);
            if layout.contains_mine(coords) {
                Tile::new(TileKind::Mine)
            } else {
                Tile::new(TileKind::Clue(layout.adjacent_mine_count(coords)))
            }
        });

        log::debug!(
            "New {}x{} field with {} mines",
            config.rows,
            config.columns,
            config.mines
        );

        Self {
            config,
            grid,
            open_count: Saturating(0),
            marked_count: Saturating(0),
            state: Default::default(),
        }
    }

    pub fn config(&self) -> FieldConfig {
        self.config
    }

    pub fn rows(&self) -> Coord {
        self.config.rows
    }

    pub fn columns(&self) -> Coord {
        self.config.columns
    }

    pub fn size(&self) -> Coord2 {
        self.config.size()
    }

    pub fn mine_count(&self) -> CellCount {
        self.config.mines
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    pub fn open_count(&self) -> CellCount {
        self.open_count.0
    }

    pub fn marked_count(&self) -> CellCount {
        self.marked_count.0
    }

    /// Mines minus marks. Goes negative when the player over-marks.
    pub fn remaining_mine_count(&self) -> i64 {
        i64::from(self.config.mines) - i64::from(self.marked_count.0)
    }

    pub fn tile(&self, coords: Coord2) -> Result<Tile> {
        let coords = self.config.validate_coords(coords)?;
        Ok(self.grid[coords.to_nd_index()])
    }

    pub fn has_mine_at(&self, coords: Coord2) -> Result<bool> {
        self.tile(coords).map(Tile::is_mine)
    }

    /// Every tile in row-major order.
    pub fn tiles(&self) -> impl Iterator<Item = (Coord2, Tile)> + '_ {
        self.grid
            .indexed_iter()
            .map(|((row, column), &tile)| ((row as Coord, column as Coord), tile))
    }

    /// Opens a closed tile. Open and marked tiles are left alone.
    ///
    /// Opening a zero clue also opens the region of tiles connected to it through zero clues,
    /// moving only up, down, left and right.
    pub fn open(&mut self, coords: Coord2) -> Result<OpenOutcome> {
        use OpenOutcome::*;

        let coords = self.config.validate_coords(coords)?;

        let tile = &mut self.grid[coords.to_nd_index()];
        if !tile.is_closed() {
            return Ok(NoChange);
        }
        tile.set_status(TileStatus::Open);
        self.open_count += 1;

        let tile = *tile;
        if tile.is_mine() {
            return Ok(if self.end_game(GameState::Failed) {
                HitMine
            } else {
                Opened
            });
        }

        if tile.clue() == Some(0) {
            self.flood_open(coords);
        }

        if self.is_solved() && self.end_game(GameState::Solved) {
            Ok(Solved)
        } else {
            Ok(Opened)
        }
    }

    /// Toggles a closed tile to marked and back.
    pub fn mark(&mut self, coords: Coord2) -> Result<MarkOutcome> {
        use MarkOutcome::*;

        let coords = self.config.validate_coords(coords)?;
        let tile = &mut self.grid[coords.to_nd_index()];

        Ok(match tile.status() {
            TileStatus::Closed => {
                tile.set_status(TileStatus::Marked);
                self.marked_count += 1;
                Marked
            }
            TileStatus::Marked => {
                tile.set_status(TileStatus::Closed);
                self.marked_count -= 1;
                Unmarked
            }
            TileStatus::Open => NoChange,
        })
    }

    fn flood_open(&mut self, start: Coord2) {
        let mut opened: CellCount = 0;
        let mut to_visit = vec![start];

        while let Some(coords) = to_visit.pop() {
            for neighbor in self.grid.iter_orthogonal(coords) {
                let tile = &mut self.grid[neighbor.to_nd_index()];
                if !tile.is_closed() {
                    continue;
                }

                tile.set_status(TileStatus::Open);
                opened += 1;
                if tile.clue() == Some(0) {
                    to_visit.push(neighbor);
                }
            }
        }

        self.open_count += opened;
        log::trace!("Flood from {:?} opened {} more tiles", start, opened);
    }

    fn is_solved(&self) -> bool {
        self.config.total_cells().saturating_sub(self.open_count.0) == self.config.mines
    }

    fn count_tiles(&self, filter: fn(Tile) -> bool) -> CellCount {
        self.grid.iter().filter(|&&tile| filter(tile)).count() as CellCount
    }

    /// Whether `state` could have been reached by opening the currently open tiles.
    fn allows_state(&self, state: GameState) -> bool {
        let mine_opened = self.grid.iter().any(|tile| tile.is_mine() && tile.is_open());
        let safe_tiles = self.config.total_cells() - self.config.mines;
        let safe_open = self.count_tiles(|tile| tile.is_open() && !tile.is_mine());
        let all_safe_open = safe_tiles > 0 && safe_open == safe_tiles;

        match state {
            GameState::Playing => !mine_opened && !all_safe_open,
            GameState::Solved => all_safe_open,
            GameState::Failed => mine_opened,
        }
    }

    /// Returns whether this call finished the game.
    fn end_game(&mut self, state: GameState) -> bool {
        if self.state.is_finished() {
            return false;
        }

        log::debug!(
            "Game ended {:?} with {} of {} tiles open",
            state,
            self.open_count.0,
            self.config.total_cells()
        );
        self.state = state;
        true
    }
}
