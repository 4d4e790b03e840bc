use serde::Serialize;

use crate::*;

/// Tiles the player has to reproduce during a round.
///
/// Cells are kept sorted and unique, so `len()` is always the number of distinct tiles.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TargetSet {
    cells: Cells,
}

impl TargetSet {
    pub fn from_cells(grid: GridConfig, cells: &[CellIndex]) -> Result<Self> {
        if cells.is_empty() {
            return Err(GameError::EmptyTarget);
        }
        if cells.len() > usize::from(grid.max_difficulty()) {
            return Err(GameError::InvalidDifficulty);
        }

        let mut sorted = Cells::with_capacity(cells.len());
        for &cell in cells {
            sorted.push(grid.validate_cell(cell.into())?);
        }
        sorted.sort_unstable();

        if sorted.windows(2).any(|pair| pair[0] == pair[1]) {
            return Err(GameError::DuplicateCell);
        }

        Ok(Self { cells: sorted })
    }

    /// Placeholder before the first round, never accepted by the engine as a round target.
    pub(crate) fn empty() -> Self {
        Self {
            cells: Cells::new(),
        }
    }

    /// Caller guarantees `cells` is sorted, unique and inside the grid.
    pub(crate) fn from_sorted_unchecked(cells: Cells) -> Self {
        debug_assert!(cells.windows(2).all(|pair| pair[0] < pair[1]));
        Self { cells }
    }

    pub fn contains(&self, cell: CellIndex) -> bool {
        self.cells.binary_search(&cell).is_ok()
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = CellIndex> + '_ {
        self.cells.iter().copied()
    }

    pub fn as_slice(&self) -> &[CellIndex] {
        &self.cells
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_cells_sorts_and_validates() {
        let grid = GridConfig::default();
        let target = TargetSet::from_cells(grid, &[19, 2, 7]).unwrap();

        assert_eq!(target.as_slice(), &[2, 7, 19]);
        assert!(target.contains(7));
        assert!(!target.contains(5));
    }

    #[test]
    fn from_cells_rejects_bad_input() {
        let grid = GridConfig::default();

        assert_eq!(TargetSet::from_cells(grid, &[]), Err(GameError::EmptyTarget));
        assert_eq!(TargetSet::from_cells(grid, &[3, 25]), Err(GameError::InvalidCell));
        assert_eq!(TargetSet::from_cells(grid, &[3, 9, 3]), Err(GameError::DuplicateCell));

        let too_many: Cells = (0..21).collect();
        assert_eq!(
            TargetSet::from_cells(grid, &too_many),
            Err(GameError::InvalidDifficulty)
        );
    }

    #[test]
    fn serializes_cells_in_order() {
        let grid = GridConfig::default();
        let target = TargetSet::from_cells(grid, &[4, 1]).unwrap();

        assert_eq!(serde_json::to_string(&target).unwrap(), r#"{"cells":[1,4]}"#);
    }
}
