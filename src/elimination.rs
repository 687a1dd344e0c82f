use log::debug;
use std::fmt;

use crate::error::{EliminationError, Result};
use crate::flow::MaxFlow;
use crate::network::EliminationNetwork;
use crate::standings::Standings;
use crate::team::Team;

/// How an elimination was proven.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EliminationKind {
    /// A single team already has more wins than the target can reach.
    Trivial,
    /// The minimum cut of the elimination network.
    Flow,
}

/// Teams that together keep the target out of first place.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Certificate {
    teams: Vec<String>,
    kind: EliminationKind,
}

impl Certificate {
    pub fn teams(&self) -> &[String] {
        &self.teams
    }

    pub fn into_teams(self) -> Vec<String> {
        self.teams
    }

    pub fn kind(&self) -> EliminationKind {
        self.kind
    }

    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }

    /// Check the elimination inequality for `target`:
    ///
    /// `(sum of wins in R + games left inside R) / |R| > wins + remaining of target`
    ///
    /// evaluated without division.
    pub fn is_sound(&self, standings: &Standings, target: &str) -> Result<bool> {
        let ceiling = standings.team(target)?.max_wins();
        let members = self
            .teams
            .iter()
            .map(|name| standings.index_of(name))
            .collect::<Result<Vec<usize>>>()?;
        if members.is_empty() {
            return Ok(false);
        }

        let roster = standings.roster();
        let mut total: u64 = members.iter().map(|&i| u64::from(roster[i].wins)).sum();
        for (k, &i) in members.iter().enumerate() {
            for &j in &members[k + 1..] {
                total += u64::from(roster[i].games_against(j));
            }
        }
        Ok(total > ceiling * members.len() as u64)
    }
}

impl fmt::Display for Certificate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{ ")?;
        for team in &self.teams {
            write!(f, "{} ", team)?;
        }
        write!(f, "}}")
    }
}

/// Outcome of one elimination query.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Verdict {
    NotEliminated,
    Eliminated(Certificate),
}

impl Verdict {
    pub fn is_eliminated(&self) -> bool {
        matches!(self, Verdict::Eliminated(_))
    }

    pub fn certificate(&self) -> Option<&Certificate> {
        match self {
            Verdict::Eliminated(certificate) => Some(certificate),
            Verdict::NotEliminated => None,
        }
    }

    pub fn into_certificate(self) -> Option<Vec<String>> {
        match self {
            Verdict::Eliminated(certificate) => Some(certificate.into_teams()),
            Verdict::NotEliminated => None,
        }
    }
}

/// Index of a team whose current wins already exceed what `target` can
/// reach, if any.
///
/// Only the leader among the other teams is considered; on ties the first
/// one in division order wins. An out-of-range `target` yields `None`.
pub fn trivial_elimination(teams: &[Team], target: usize) -> Option<usize> {
    let ceiling = teams.get(target)?.max_wins();
    let mut leader: Option<usize> = None;
    for (i, team) in teams.iter().enumerate() {
        if i == target {
            continue;
        }
        if leader.map_or(true, |l| team.wins > teams[l].wins) {
            leader = Some(i);
        }
    }
    leader.filter(|&l| ceiling < u64::from(teams[l].wins))
}

/// Decide whether the team at `target` is eliminated.
pub fn evaluate(standings: &Standings, target: usize) -> Result<Verdict> {
    let teams = standings.roster();
    EliminationError::check_index(target, teams.len())?;
    let name = &teams[target].name;

    if let Some(leader) = trivial_elimination(teams, target) {
        debug!(
            "{} trivially eliminated by {} ({} wins > {} max)",
            name,
            teams[leader].name,
            teams[leader].wins,
            teams[target].max_wins()
        );
        return Ok(Verdict::Eliminated(Certificate {
            teams: vec![teams[leader].name.clone()],
            kind: EliminationKind::Trivial,
        }));
    }

    let net = EliminationNetwork::build(teams, target)?;
    let flow = MaxFlow::solve(net.network(), net.source(), net.sink())?;
    let eliminated = net.pair_vertices().any(|v| flow.in_cut(v));
    debug_assert_eq!(eliminated, flow.value() < net.total_games());
    debug!(
        "{}: max flow {} of {} games between other teams",
        name,
        flow.value(),
        net.total_games()
    );

    if !eliminated {
        return Ok(Verdict::NotEliminated);
    }

    // Team vertices follow division order, so the certificate does too
    let members = net
        .team_vertices()
        .filter(|&v| flow.in_cut(v))
        .filter_map(|v| net.team_of_vertex(v))
        .map(|i| teams[i].name.clone())
        .collect();

    Ok(Verdict::Eliminated(Certificate {
        teams: members,
        kind: EliminationKind::Flow,
    }))
}
