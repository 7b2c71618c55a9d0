pub const MATCH_SCORE: u32 = 10;
pub const ADJACENCY_BONUS: u32 = 40;
pub const BOUNDARY_BONUS: u32 = 10;
pub const LEADING_BOUNDARY_BONUS: u32 = 25;
pub const PREFIX_BONUS: u32 = 25;
pub const LENGTH_BONUS_SCALE: u32 = 20;

/// Score of every haystack against the empty needle.
pub const EMPTY_NEEDLE_SCORE: u32 = 1;

// TODO: treat `-`, `_`, `/` and `.` as word starts once callers agree on path-aware ranking.
pub const DEFAULT_DELIMITERS: &str = " ";
