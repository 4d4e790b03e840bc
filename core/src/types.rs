use smallvec::SmallVec;

use crate::MAX_DIFFICULTY;

/// Position of a tile on the board, counted row by row from the top left.
pub type CellIndex = u8;

/// Count type used for board sizes and target sizes.
pub type CellCount = u8;

/// Identifies a round; bumped every time a round starts.
pub type Generation = u32;

/// Inline storage large enough for any supported target.
pub type Cells = SmallVec<[CellIndex; MAX_DIFFICULTY as usize]>;
