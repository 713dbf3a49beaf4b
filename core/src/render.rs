use core::fmt;

use crate::*;

const CELL_WIDTH: usize = 3;

fn row_label(row: Coord) -> String {
    if row < 26 {
        char::from(b'A' + row as u8).to_string()
    } else {
        row.to_string()
    }
}

/// Debug rendering: a header of column indices, then one labelled line per row.
impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:>CELL_WIDTH$}", "")?;
        for column in 0..self.columns() {
            write!(f, "{column:>CELL_WIDTH$}")?;
        }
        writeln!(f)?;

        for row in 0..self.rows() {
            write!(f, "{:>CELL_WIDTH$}", row_label(row))?;
            for column in 0..self.columns() {
                let tile = self.tile((row, column)).map_err(|_| fmt::Error)?;
                write!(f, "{tile:>CELL_WIDTH$}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
