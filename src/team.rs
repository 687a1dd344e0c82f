use std::fmt;

/// One row of the standings table.
///
/// `against` is indexed by division position and includes the team itself
/// (that entry is always zero once the standings are validated).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Team {
    pub name: String,

    pub wins: u32,

    pub losses: u32,

    /// Games left to play this season
    pub remaining: u32,

    /// Games left against every team in the division, in division order
    pub against: Vec<u32>,
}

impl Team {
    /// Create a new Team.
    pub fn new(
        name: impl Into<String>,
        wins: u32,
        losses: u32,
        remaining: u32,
        against: Vec<u32>,
    ) -> Self {
        Team {
            name: name.into(),
            wins,
            losses,
            remaining,
            against,
        }
    }

    /// Best possible final win total: every remaining game won.
    pub fn max_wins(&self) -> u64 {
        u64::from(self.wins) + u64::from(self.remaining)
    }

    /// Games left against the team at division position `other`.
    pub fn games_against(&self, other: usize) -> u32 {
        self.against.get(other).copied().unwrap_or(0)
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {}-{} | {} left",
            self.name, self.wins, self.losses, self.remaining
        )
    }
}
