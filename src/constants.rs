/// Vertex id of the source in every elimination network
pub const SOURCE_VERTEX: usize = 0;

/// Games each team plays over a full season (generated divisions)
pub const SEASON_GAMES: u32 = 162;

/// Maximum distance of a generated team's wins from a .500 record
pub const WIN_SPREAD: u32 = 12;

/// Default cap on games left between two generated teams
pub const DEFAULT_GAMES_PER_PAIR: u32 = 6;
