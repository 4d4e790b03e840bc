use serde::{Deserialize, Serialize};

use crate::*;

pub const MIN_DIFFICULTY: CellCount = 1;
pub const MAX_DIFFICULTY: CellCount = 20;
pub const DEFAULT_DIFFICULTY: CellCount = 10;

/// Number of tiles the player has to remember.
///
/// Values outside `MIN_DIFFICULTY..=MAX_DIFFICULTY` are clamped by [`Difficulty::new`] and rejected by
/// [`Difficulty::try_from`]. Deserialization goes through the strict path.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Difficulty(CellCount);

impl Difficulty {
    pub const MIN: Self = Self(MIN_DIFFICULTY);
    pub const MAX: Self = Self(MAX_DIFFICULTY);
    pub const DEFAULT: Self = Self(DEFAULT_DIFFICULTY);

    pub fn new(value: CellCount) -> Self {
        let clamped = value.clamp(MIN_DIFFICULTY, MAX_DIFFICULTY);
        if clamped != value {
            log::warn!("Difficulty {} out of range, clamped to {}", value, clamped);
        }
        Self(clamped)
    }

    pub const fn get(self) -> CellCount {
        self.0
    }

    /// Caps the difficulty so a target of this size always fits on `grid`.
    pub fn for_grid(self, grid: GridConfig) -> Self {
        Self(self.0.min(grid.max_difficulty()).max(MIN_DIFFICULTY))
    }

    pub const fn tier(self) -> DifficultyTier {
        use DifficultyTier::*;
        match self.0 {
            ..=5 => Easy,
            6..=10 => Normal,
            11..=15 => Serious,
            _ => Impossible,
        }
    }
}

impl Default for Difficulty {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<u8> for Difficulty {
    type Error = GameError;

    fn try_from(value: u8) -> Result<Self> {
        if (MIN_DIFFICULTY..=MAX_DIFFICULTY).contains(&value) {
            Ok(Self(value))
        } else {
            Err(GameError::InvalidDifficulty)
        }
    }
}

impl From<Difficulty> for u8 {
    fn from(difficulty: Difficulty) -> Self {
        difficulty.0
    }
}

impl core::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Coarse label shown next to the difficulty slider.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DifficultyTier {
    Easy,
    Normal,
    Serious,
    Impossible,
}

impl DifficultyTier {
    pub const fn label(self) -> &'static str {
        use DifficultyTier::*;
        match self {
            Easy => "Easy 😊",
            Normal => "Normal 🤔",
            Serious => "Serious? 🤨",
            Impossible => "IMPOSSIBLE! 😨",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_clamps_into_supported_range() {
        assert_eq!(Difficulty::new(0), Difficulty::MIN);
        assert_eq!(Difficulty::new(7).get(), 7);
        assert_eq!(Difficulty::new(200), Difficulty::MAX);
    }

    #[test]
    fn try_from_rejects_out_of_range() {
        assert_eq!(Difficulty::try_from(0), Err(GameError::InvalidDifficulty));
        assert_eq!(Difficulty::try_from(21), Err(GameError::InvalidDifficulty));
        assert_eq!(Difficulty::try_from(20), Ok(Difficulty::MAX));
    }

    #[test]
    fn for_grid_leaves_a_free_tile() {
        let grid = GridConfig::new(4, 2);

        assert_eq!(Difficulty::new(10).for_grid(grid).get(), 3);
        assert_eq!(Difficulty::new(2).for_grid(grid).get(), 2);
    }

    #[test]
    fn tiers_follow_slider_bands() {
        assert_eq!(Difficulty::new(1).tier(), DifficultyTier::Easy);
        assert_eq!(Difficulty::new(5).tier(), DifficultyTier::Easy);
        assert_eq!(Difficulty::new(6).tier(), DifficultyTier::Normal);
        assert_eq!(Difficulty::new(10).tier(), DifficultyTier::Normal);
        assert_eq!(Difficulty::new(11).tier(), DifficultyTier::Serious);
        assert_eq!(Difficulty::new(16).tier(), DifficultyTier::Impossible);
        assert_eq!(Difficulty::MAX.tier().label(), "IMPOSSIBLE! 😨");
    }

    #[test]
    fn stored_difficulty_goes_through_validation() {
        let difficulty: Difficulty = serde_json::from_str("12").unwrap();
        assert_eq!(difficulty.get(), 12);
        assert_eq!(serde_json::to_string(&difficulty).unwrap(), "12");

        assert!(serde_json::from_str::<Difficulty>("0").is_err());
        assert!(serde_json::from_str::<Difficulty>("42").is_err());
    }
}
