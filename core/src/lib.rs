use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

pub use error::*;
pub use field::*;
pub use generator::*;
pub use tile::*;
pub use types::*;

mod error;
mod field;
mod generator;
mod render;
mod tile;
mod types;

/// Dimensions and mine count of a field.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldConfig {
    pub rows: Coord,
    pub columns: Coord,
    pub mines: CellCount,
}

impl FieldConfig {
    pub const fn new_unchecked(rows: Coord, columns: Coord, mines: CellCount) -> Self {
        Self {
            rows,
            columns,
            mines,
        }
    }

    pub fn new(rows: Coord, columns: Coord, mines: CellCount) -> Result<Self> {
        let config = Self::new_unchecked(rows, columns, mines);
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.rows == 0 || self.columns == 0 {
            return Err(FieldError::InvalidConfiguration(
                "field needs at least one row and one column",
            ));
        }
        if self.mines > self.total_cells() {
            return Err(FieldError::InvalidConfiguration(
                "more mines than the field has cells",
            ));
        }
        Ok(())
    }

    pub const fn size(&self) -> Coord2 {
        (self.rows, self.columns)
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.rows, self.columns)
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        if in_bounds(coords, self.size()) {
            Ok(coords)
        } else {
            Err(FieldError::OutOfRange {
                row: coords.0,
                column: coords.1,
            })
        }
    }
}

/// Where the mines are, before any clue is computed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "MineLayoutSnapshot")]
pub struct MineLayout {
    mine_mask: Array2<bool>,
    mine_count: CellCount,
}

#[derive(Deserialize)]
struct MineLayoutSnapshot {
    mine_mask: Array2<bool>,
    mine_count: CellCount,
}

impl TryFrom<MineLayoutSnapshot> for MineLayout {
    type Error = FieldError;

    fn try_from(snapshot: MineLayoutSnapshot) -> Result<Self> {
        let layout = Self::from_mine_mask(snapshot.mine_mask)?;
        if layout.mine_count != snapshot.mine_count {
            return Err(FieldError::InvalidConfiguration(
                "mine count does not match the mine mask",
            ));
        }
        Ok(layout)
    }
}

impl MineLayout {
    pub fn from_mine_mask(mine_mask: Array2<bool>) -> Result<Self> {
        let (rows, columns) = mine_mask.dim();
        if Coord::try_from(rows).is_err() || Coord::try_from(columns).is_err() {
            return Err(FieldError::InvalidConfiguration(
                "field dimensions do not fit a coordinate",
            ));
        }
        if rows == 0 || columns == 0 {
            return Err(FieldError::InvalidConfiguration(
                "field needs at least one row and one column",
            ));
        }

        let mine_count = mine_mask.iter().filter(|&&is_mine| is_mine).count() as CellCount;
        Ok(Self {
            mine_mask,
            mine_count,
        })
    }

    pub fn from_mine_coords(size: Coord2, mine_coords: &[Coord2]) -> Result<Self> {
        let config = FieldConfig::new_unchecked(size.0, size.1, 0);
        config.validate()?;

        let mut mine_mask: Array2<bool> = Array2::default(size.to_nd_index());
        for &coords in mine_coords {
            mine_mask[config.validate_coords(coords)?.to_nd_index()] = true;
        }

        Self::from_mine_mask(mine_mask)
    }

    pub fn field_config(&self) -> FieldConfig {
        let (rows, columns) = self.size();
        FieldConfig::new_unchecked(rows, columns, self.mine_count)
    }

    pub fn size(&self) -> Coord2 {
        self.mine_mask.bounds()
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn contains_mine(&self, coords: Coord2) -> bool {
        self[coords]
    }

    pub fn adjacent_mine_count(&self, coords: Coord2) -> u8 {
        // at most eight neighbours
        self.mine_mask
            .iter_neighbors(coords)
            .filter(|&pos| self[pos])
            .count() as u8
    }
}

impl Index<Coord2> for MineLayout {
    type Output = bool;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.mine_mask[coords.to_nd_index()]
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MarkOutcome {
    NoChange,
    Marked,
    Unmarked,
}

impl MarkOutcome {
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::NoChange)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum OpenOutcome {
    NoChange,
    Opened,
    HitMine,
    Solved,
}

impl OpenOutcome {
    pub const fn has_update(self) -> bool {
        use OpenOutcome::*;
        match self {
            NoChange => false,
            Opened => true,
            HitMine => true,
            Solved => true,
        }
    }
}
