//! Elimination Core - decides which teams can no longer finish first in
//! their division.
//!
//! A team is eliminated when no outcome of the remaining games lets it end
//! the season with at least as many wins as everyone else. Each query runs a
//! cheap leader check and, when that is inconclusive, a max-flow over the
//! games left between the other teams. Eliminated teams come with a
//! certificate: the teams that jointly keep them out of first.
//!
//! Python bindings are available via PyO3 with the `python` feature.

#[cfg(feature = "python")]
use pyo3::prelude::*;

pub mod constants;
pub mod elimination;
pub mod error;
pub mod flow;
pub mod generate;
pub mod network;
#[cfg(feature = "python")]
pub mod python;
pub mod report;
pub mod standings;
pub mod team;

pub use elimination::{evaluate, trivial_elimination, Certificate, EliminationKind, Verdict};
pub use error::{EliminationError, Result};
pub use flow::{Capacity, FlowError, FlowNetwork, MaxFlow};
pub use generate::random_division;
pub use network::{pair_count, team_vertex, EliminationNetwork};
pub use report::DivisionReport;
pub use standings::Standings;
pub use team::Team;

/// Python module definition
#[cfg(feature = "python")]
#[pymodule]
fn elimination_core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    python::register(m)
}
