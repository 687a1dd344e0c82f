//! Python bindings, built with `--features python`.

use pyo3::exceptions::{PyIOError, PyIndexError, PyKeyError, PyRuntimeError, PyValueError};
use pyo3::prelude::*;

use crate::constants::DEFAULT_GAMES_PER_PAIR;
use crate::error::EliminationError;
use crate::generate;
use crate::report::DivisionReport;
use crate::standings::Standings;

impl From<EliminationError> for PyErr {
    fn from(err: EliminationError) -> PyErr {
        match err {
            EliminationError::UnknownTeam(name) => PyKeyError::new_err(name),
            e @ EliminationError::TeamOutOfRange { .. } => PyIndexError::new_err(e.to_string()),
            EliminationError::InvalidStandings(msg) => PyValueError::new_err(msg),
            EliminationError::Io(e) => PyIOError::new_err(format!("Failed to read file: {}", e)),
            EliminationError::Flow(e) => PyRuntimeError::new_err(e.to_string()),
        }
    }
}

/// Read-only division standings with elimination queries.
#[pyclass(name = "Division", frozen)]
pub struct PyDivision {
    standings: Standings,
}

#[pymethods]
impl PyDivision {
    /// Load standings from a file.
    #[staticmethod]
    pub fn from_file(path: &str) -> PyResult<Self> {
        Ok(PyDivision {
            standings: Standings::read_from_file(path)?,
        })
    }

    /// Parse standings from a string.
    #[staticmethod]
    #[pyo3(name = "from_str")]
    pub fn parse(text: &str) -> PyResult<Self> {
        Ok(PyDivision {
            standings: Standings::parse(text)?,
        })
    }

    pub fn number_of_teams(&self) -> usize {
        self.standings.team_count()
    }

    pub fn teams(&self) -> Vec<String> {
        self.standings.teams().map(str::to_string).collect()
    }

    pub fn wins(&self, team: &str) -> PyResult<u32> {
        Ok(self.standings.wins(team)?)
    }

    pub fn losses(&self, team: &str) -> PyResult<u32> {
        Ok(self.standings.losses(team)?)
    }

    pub fn remaining(&self, team: &str) -> PyResult<u32> {
        Ok(self.standings.remaining(team)?)
    }

    pub fn against(&self, team1: &str, team2: &str) -> PyResult<u32> {
        Ok(self.standings.against(team1, team2)?)
    }

    pub fn is_eliminated(&self, team: &str) -> PyResult<bool> {
        Ok(self.standings.is_eliminated(team)?)
    }

    /// Teams eliminating `team`, or None if it can still finish first.
    pub fn certificate_of_elimination(&self, team: &str) -> PyResult<Option<Vec<String>>> {
        Ok(self.standings.certificate_of_elimination(team)?)
    }

    /// Text report covering every team.
    #[pyo3(signature = (parallel = false))]
    pub fn report(&self, py: Python<'_>, parallel: bool) -> PyResult<String> {
        let report = py.allow_threads(|| {
            if parallel {
                DivisionReport::evaluate_parallel(&self.standings)
            } else {
                DivisionReport::evaluate(&self.standings)
            }
        })?;
        Ok(report.to_string())
    }

    fn __len__(&self) -> usize {
        self.standings.team_count()
    }

    fn __repr__(&self) -> String {
        format!("Division({} teams)", self.standings.team_count())
    }
}

/// Random consistent division, reproducible with `seed`.
#[pyfunction]
#[pyo3(signature = (team_count, max_games_per_pair = DEFAULT_GAMES_PER_PAIR, seed = None))]
pub fn random_division(
    team_count: usize,
    max_games_per_pair: u32,
    seed: Option<u64>,
) -> PyResult<PyDivision> {
    Ok(PyDivision {
        standings: generate::random_division(team_count, max_games_per_pair, seed)?,
    })
}

pub fn register(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyDivision>()?;
    m.add_function(wrap_pyfunction!(random_division, m)?)?;
    m.add("DEFAULT_GAMES_PER_PAIR", DEFAULT_GAMES_PER_PAIR)?;
    Ok(())
}
