use log::debug;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use crate::elimination::{evaluate, Verdict};
use crate::error::{EliminationError, Result};
use crate::team::Team;

/// Division standings: teams in input order plus a name lookup.
///
/// Validated on construction and never mutated afterwards, so a single
/// instance can be shared freely between concurrent queries.
#[derive(Clone, Debug)]
pub struct Standings {
    teams: Vec<Team>,
    index: HashMap<String, usize>,
}

impl Standings {
    /// Build standings from team rows, checking every table invariant.
    pub fn new(teams: Vec<Team>) -> Result<Self> {
        let index = validate(&teams)?;
        Ok(Standings { teams, index })
    }

    /// Parse standings from text.
    ///
    /// Format: the team count, then one record per team with the name, wins,
    /// losses, games remaining and games left against each team in order.
    /// Tokens may be separated by any whitespace.
    pub fn parse(input: &str) -> Result<Self> {
        let mut tokens = input.split_whitespace();
        let count: usize = next_number(&mut tokens, "team count")?;

        // Grown per record: `count` is untrusted until the records are read
        let mut teams = Vec::new();
        for row in 0..count {
            let name = tokens.next().ok_or_else(|| {
                EliminationError::invalid(format!("missing name for team {}", row))
            })?;
            let wins = next_number(&mut tokens, &format!("wins for {}", name))?;
            let losses = next_number(&mut tokens, &format!("losses for {}", name))?;
            let remaining = next_number(&mut tokens, &format!("remaining for {}", name))?;
            let against = (0..count)
                .map(|col| next_number(&mut tokens, &format!("games {} vs team {}", name, col)))
                .collect::<Result<Vec<u32>>>()?;
            teams.push(Team::new(name, wins, losses, remaining, against));
        }

        if let Some(extra) = tokens.next() {
            return Err(EliminationError::invalid(format!(
                "unexpected token {:?} after {} teams",
                extra, count
            )));
        }

        Standings::new(teams)
    }

    /// Read standings from a file in the `parse` format.
    pub fn read_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)?;
        let standings = Standings::parse(&contents)?;
        debug!(
            "Loaded {} teams from {}",
            standings.team_count(),
            path.display()
        );
        Ok(standings)
    }

    pub fn team_count(&self) -> usize {
        self.teams.len()
    }

    /// Team names in input order.
    pub fn teams(&self) -> impl Iterator<Item = &str> + '_ {
        self.teams.iter().map(|t| t.name.as_str())
    }

    /// All rows in input order.
    pub fn roster(&self) -> &[Team] {
        &self.teams
    }

    pub fn index_of(&self, name: &str) -> Result<usize> {
        self.index
            .get(name)
            .copied()
            .ok_or_else(|| EliminationError::UnknownTeam(name.to_string()))
    }

    pub fn team(&self, name: &str) -> Result<&Team> {
        Ok(&self.teams[self.index_of(name)?])
    }

    pub fn team_at(&self, index: usize) -> Option<&Team> {
        self.teams.get(index)
    }

    pub fn wins(&self, name: &str) -> Result<u32> {
        Ok(self.team(name)?.wins)
    }

    pub fn losses(&self, name: &str) -> Result<u32> {
        Ok(self.team(name)?.losses)
    }

    pub fn remaining(&self, name: &str) -> Result<u32> {
        Ok(self.team(name)?.remaining)
    }

    /// Games left between two teams.
    pub fn against(&self, team1: &str, team2: &str) -> Result<u32> {
        let other = self.index_of(team2)?;
        Ok(self.team(team1)?.against[other])
    }

    /// Decide whether `name` can still finish with the most wins.
    pub fn verdict(&self, name: &str) -> Result<Verdict> {
        evaluate(self, self.index_of(name)?)
    }

    pub fn is_eliminated(&self, name: &str) -> Result<bool> {
        Ok(self.verdict(name)?.is_eliminated())
    }

    /// Teams that jointly eliminate `name`, or `None` if it is still alive.
    pub fn certificate_of_elimination(&self, name: &str) -> Result<Option<Vec<String>>> {
        Ok(self.verdict(name)?.into_certificate())
    }
}

impl FromStr for Standings {
    type Err = EliminationError;

    fn from_str(s: &str) -> Result<Self> {
        Standings::parse(s)
    }
}

fn next_number<'a, T, I>(tokens: &mut I, what: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    I: Iterator<Item = &'a str>,
{
    let token = tokens
        .next()
        .ok_or_else(|| EliminationError::invalid(format!("missing {}", what)))?;
    token
        .parse()
        .map_err(|e| EliminationError::invalid(format!("invalid {} {:?}: {}", what, token, e)))
}

/// Check the table invariants and build the name index.
fn validate(teams: &[Team]) -> Result<HashMap<String, usize>> {
    let n = teams.len();
    if n == 0 {
        return Err(EliminationError::invalid("no teams"));
    }

    let mut index = HashMap::with_capacity(n);
    for (i, team) in teams.iter().enumerate() {
        if index.insert(team.name.clone(), i).is_some() {
            return Err(EliminationError::invalid(format!(
                "duplicate team name {}",
                team.name
            )));
        }
        if team.against.len() != n {
            return Err(EliminationError::invalid(format!(
                "{} has {} schedule entries, expected {}",
                team.name,
                team.against.len(),
                n
            )));
        }
    }

    for (i, team) in teams.iter().enumerate() {
        if team.against[i] != 0 {
            return Err(EliminationError::invalid(format!(
                "{} has {} games left against itself",
                team.name, team.against[i]
            )));
        }
        for (j, other) in teams.iter().enumerate().skip(i + 1) {
            if team.against[j] != other.against[i] {
                return Err(EliminationError::invalid(format!(
                    "{} vs {} is {} but {} vs {} is {}",
                    team.name, other.name, team.against[j], other.name, team.name, other.against[i]
                )));
            }
        }
        let scheduled: u64 = team.against.iter().map(|&g| u64::from(g)).sum();
        if scheduled != u64::from(team.remaining) {
            return Err(EliminationError::invalid(format!(
                "{} has {} games remaining but {} scheduled",
                team.name, team.remaining, scheduled
            )));
        }
    }

    Ok(index)
}
