use crate::*;
pub use random::*;

mod random;

pub trait MineGenerator {
    fn generate(self, config: FieldConfig) -> Result<MineLayout>;
}

/// Places mines exactly at the given coordinates; for scripted games and tests.
#[derive(Clone, Debug, PartialEq)]
pub struct FixedMineGenerator {
    mines: Vec<Coord2>,
}

impl FixedMineGenerator {
    pub fn new(mines: impl IntoIterator<Item = Coord2>) -> Self {
        Self {
            mines: mines.into_iter().collect(),
        }
    }
}

impl MineGenerator for FixedMineGenerator {
    fn generate(self, config: FieldConfig) -> Result<MineLayout> {
        MineLayout::from_mine_coords(config.size(), &self.mines)
    }
}

impl MineGenerator for MineLayout {
    fn generate(self, config: FieldConfig) -> Result<MineLayout> {
        if self.size() != config.size() {
            return Err(FieldError::InvalidConfiguration(
                "layout size does not match the field",
            ));
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_generator_places_given_mines() {
        let config = FieldConfig::new(3, 3, 2).unwrap();
        let layout = FixedMineGenerator::new([(0, 1), (2, 0)])
            .generate(config)
            .unwrap();

        assert_eq!(layout.mine_count(), 2);
        assert!(layout.contains_mine((0, 1)));
        assert!(layout.contains_mine((2, 0)));
        assert!(!layout.contains_mine((1, 1)));
    }

    #[test]
    fn fixed_generator_rejects_coords_outside_config() {
        let config = FieldConfig::new(2, 2, 1).unwrap();
        let result = FixedMineGenerator::new([(5, 0)]).generate(config);
        assert_eq!(result, Err(FieldError::OutOfRange { row: 5, column: 0 }));
    }

    #[test]
    fn layout_generator_checks_size() {
        let layout = MineLayout::from_mine_coords((2, 3), &[(1, 1)]).unwrap();
        let config = FieldConfig::new(3, 2, 1).unwrap();
        assert!(matches!(
            layout.generate(config),
            Err(FieldError::InvalidConfiguration(_))
        ));
    }
}
