use std::io;

use thiserror::Error;

use crate::flow::FlowError;

/// Errors surfaced by standings loading and elimination queries.
#[derive(Debug, Error)]
pub enum EliminationError {
    #[error("unknown team: {0}")]
    UnknownTeam(String),

    #[error("team index {index} out of range for {team_count} teams")]
    TeamOutOfRange { index: usize, team_count: usize },

    #[error("invalid standings: {0}")]
    InvalidStandings(String),

    #[error("failed to read standings: {0}")]
    Io(#[from] io::Error),

    #[error("flow computation failed: {0}")]
    Flow(#[from] FlowError),
}

pub type Result<T> = std::result::Result<T, EliminationError>;

impl EliminationError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        EliminationError::InvalidStandings(message.into())
    }

    /// Check that `index` names one of `team_count` teams.
    pub(crate) fn check_index(index: usize, team_count: usize) -> Result<()> {
        if index < team_count {
            Ok(())
        } else {
            Err(EliminationError::TeamOutOfRange { index, team_count })
        }
    }
}
