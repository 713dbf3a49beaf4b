use core::fmt;

use serde::{Deserialize, Serialize};

/// Whether the player can see a tile, and whether they suspect a mine under it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TileStatus {
    Closed,
    Open,
    Marked,
}

impl Default for TileStatus {
    fn default() -> Self {
        Self::Closed
    }
}

/// What a tile holds. Fixed once the field is generated.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TileKind {
    Mine,
    /// Number of mines among the up to eight surrounding tiles.
    Clue(u8),
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    kind: TileKind,
    status: TileStatus,
}

impl Tile {
    pub(crate) const fn new(kind: TileKind) -> Self {
        Self {
            kind,
            status: TileStatus::Closed,
        }
    }

    pub const fn kind(self) -> TileKind {
        self.kind
    }

    pub const fn status(self) -> TileStatus {
        self.status
    }

    pub const fn is_mine(self) -> bool {
        matches!(self.kind, TileKind::Mine)
    }

    /// The clue value, `None` for mines.
    pub const fn clue(self) -> Option<u8> {
        match self.kind {
            TileKind::Clue(count) => Some(count),
            TileKind::Mine => None,
        }
    }

    pub const fn is_closed(self) -> bool {
        matches!(self.status, TileStatus::Closed)
    }

    pub const fn is_open(self) -> bool {
        matches!(self.status, TileStatus::Open)
    }

    pub const fn is_marked(self) -> bool {
        matches!(self.status, TileStatus::Marked)
    }

    pub(crate) fn set_status(&mut self, status: TileStatus) {
        self.status = status;
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use TileKind::*;
        use TileStatus::*;

        let glyph = match (self.status, self.kind) {
            (Closed, _) => '-',
            (Marked, _) => 'M',
            (Open, Mine) => 'X',
            (Open, Clue(0)) => '.',
            (Open, Clue(count)) => char::from(b'0' + count),
        };
        f.pad(glyph.encode_utf8(&mut [0; 4]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_tile_starts_closed() {
        let tile = Tile::new(TileKind::Clue(3));
        assert!(tile.is_closed());
        assert_eq!(tile.clue(), Some(3));
        assert!(!tile.is_mine());
    }

    #[test]
    fn glyph_follows_status_then_kind() {
        let mut mine = Tile::new(TileKind::Mine);
        let mut clue = Tile::new(TileKind::Clue(2));
        let mut zero = Tile::new(TileKind::Clue(0));

        assert_eq!(mine.to_string(), "-");
        mine.set_status(TileStatus::Marked);
        assert_eq!(mine.to_string(), "M");
        mine.set_status(TileStatus::Open);
        assert_eq!(mine.to_string(), "X");

        clue.set_status(TileStatus::Open);
        assert_eq!(clue.to_string(), "2");
        zero.set_status(TileStatus::Open);
        assert_eq!(zero.to_string(), ".");
        assert_eq!(format!("{zero:>3}|{clue:<2}|"), "  .|2 |");
    }
}
