//! Per-query flow network for one target team.
//!
//! Vertex layout for `n` teams with the target `t` left out:
//!
//! ```text
//! 0                      source
//! 1 ..= P                one vertex per pair {i, j}, i < j, i, j != t
//! P + 1 ..= P + n - 1    one vertex per team i != t, in division order
//! P + n                  sink
//! ```
//!
//! where `P = (n - 1)(n - 2) / 2`.

use log::trace;
use std::ops::Range;

use crate::constants::SOURCE_VERTEX;
use crate::error::{EliminationError, Result};
use crate::flow::{Capacity, FlowNetwork};
use crate::team::Team;

/// Number of pair vertices when one of `team_count` teams is excluded.
pub fn pair_count(team_count: usize) -> usize {
    let others = team_count.saturating_sub(1);
    others * others.saturating_sub(1) / 2
}

/// Vertex id of `team` in the network built for `excluded`.
///
/// Teams before the excluded one keep their offset, teams after it shift
/// down by one, so team vertices stay contiguous.
pub fn team_vertex(team: usize, excluded: usize, pair_count: usize) -> usize {
    debug_assert_ne!(team, excluded, "the excluded team has no vertex");
    if team < excluded {
        pair_count + 1 + team
    } else {
        pair_count + team
    }
}

/// Flow network deciding whether `target` can still finish first.
#[derive(Clone, Debug)]
pub struct EliminationNetwork {
    network: FlowNetwork,
    pair_count: usize,
    /// Team index for each team vertex, in vertex order
    vertex_teams: Vec<usize>,
    total_games: u64,
}

impl EliminationNetwork {
    /// Build the network for `target` from the division rows.
    pub fn build(teams: &[Team], target: usize) -> Result<Self> {
        let n = teams.len();
        EliminationError::check_index(target, n)?;
        let pairs = pair_count(n);
        let vertex_count = pairs + n.saturating_sub(1) + 2;
        let sink = vertex_count - 1;
        let ceiling = teams[target].max_wins();

        let mut network = FlowNetwork::new(vertex_count);
        let mut total_games = 0u64;
        let mut pair_vertex = SOURCE_VERTEX;

        for i in 0..n {
            if i == target {
                continue;
            }
            for j in (i + 1)..n {
                if j == target {
                    continue;
                }
                pair_vertex += 1;
                let games = u64::from(teams[i].games_against(j));
                total_games += games;
                network.add_edge(SOURCE_VERTEX, pair_vertex, games)?;
                network.add_edge(pair_vertex, team_vertex(i, target, pairs), Capacity::Infinite)?;
                network.add_edge(pair_vertex, team_vertex(j, target, pairs), Capacity::Infinite)?;
            }
        }
        debug_assert_eq!(pair_vertex, pairs);

        let mut vertex_teams = Vec::with_capacity(n.saturating_sub(1));
        for (i, team) in teams.iter().enumerate() {
            if i == target {
                continue;
            }
            // Team i already out-wins the target's ceiling: no room left
            let room = ceiling.checked_sub(u64::from(team.wins)).unwrap_or_else(|| {
                trace!(
                    "{} has {} wins, above {}'s ceiling of {}; clamping to 0",
                    team.name,
                    team.wins,
                    teams[target].name,
                    ceiling
                );
                0
            });
            network.add_edge(team_vertex(i, target, pairs), sink, room)?;
            vertex_teams.push(i);
        }

        Ok(EliminationNetwork {
            network,
            pair_count: pairs,
            vertex_teams,
            total_games,
        })
    }

    pub fn network(&self) -> &FlowNetwork {
        &self.network
    }

    pub fn source(&self) -> usize {
        SOURCE_VERTEX
    }

    pub fn sink(&self) -> usize {
        self.network.vertex_count() - 1
    }

    pub fn pair_vertices(&self) -> Range<usize> {
        1..self.pair_count + 1
    }

    pub fn team_vertices(&self) -> Range<usize> {
        let start = self.pair_count + 1;
        start..start + self.vertex_teams.len()
    }

    /// Division index of the team behind a team vertex.
    pub fn team_of_vertex(&self, vertex: usize) -> Option<usize> {
        vertex
            .checked_sub(self.pair_count + 1)
            .and_then(|k| self.vertex_teams.get(k).copied())
    }

    /// Sum of the capacities leaving the source.
    pub fn total_games(&self) -> u64 {
        self.total_games
    }
}
