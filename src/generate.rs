use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::constants::{SEASON_GAMES, WIN_SPREAD};
use crate::error::{EliminationError, Result};
use crate::standings::Standings;
use crate::team::Team;

/// Generate a random but consistent division.
///
/// Every pair of teams gets up to `max_games_per_pair` games left; each
/// team's remaining count is its row sum and the rest of a 162 game season
/// is split into wins and losses near .500. The same seed always yields the
/// same division.
///
/// A team's remaining count must fit in a `u32` even if every pair draws
/// the maximum; larger `max_games_per_pair` values are rejected.
pub fn random_division(
    team_count: usize,
    max_games_per_pair: u32,
    seed: Option<u64>,
) -> Result<Standings> {
    let fits = (team_count.saturating_sub(1) as u64)
        .checked_mul(u64::from(max_games_per_pair))
        .is_some_and(|most| most <= u64::from(u32::MAX));
    if !fits {
        return Err(EliminationError::invalid(format!(
            "{} games per pair overflows the remaining count of {} teams",
            max_games_per_pair, team_count
        )));
    }

    let mut rng = match seed {
        Some(s) => ChaCha8Rng::seed_from_u64(s),
        None => ChaCha8Rng::from_entropy(),
    };

    let mut schedule = vec![vec![0u32; team_count]; team_count];
    for i in 0..team_count {
        for j in (i + 1)..team_count {
            let games = rng.gen_range(0..=max_games_per_pair);
            schedule[i][j] = games;
            schedule[j][i] = games;
        }
    }

    let teams = schedule
        .into_iter()
        .enumerate()
        .map(|(i, against)| {
            let remaining: u32 = against.iter().sum();
            let played = SEASON_GAMES.saturating_sub(remaining);
            let half = played / 2;
            let low = half.saturating_sub(WIN_SPREAD);
            let high = (half + WIN_SPREAD).min(played);
            let wins = rng.gen_range(low..=high);
            Team::new(format!("Team{}", i), wins, played - wins, remaining, against)
        })
        .collect();

    Standings::new(teams)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_division() {
        let a = random_division(8, 6, Some(42)).unwrap();
        let b = random_division(8, 6, Some(42)).unwrap();
        assert_eq!(a.roster(), b.roster());
    }

    #[test]
    fn test_generated_rows_are_consistent() {
        let standings = random_division(10, 4, Some(7)).unwrap();
        assert_eq!(standings.team_count(), 10);
        for team in standings.roster() {
            assert!(team.wins + team.losses + team.remaining <= SEASON_GAMES);
            assert!(team.against.iter().all(|&g| g <= 4));
        }
    }

    #[test]
    fn test_oversized_schedule_rejected() {
        assert!(matches!(
            random_division(4, u32::MAX, Some(1)),
            Err(EliminationError::InvalidStandings(_))
        ));
        // two teams share a single pair, so any per-pair cap fits
        let standings = random_division(2, u32::MAX, Some(1)).unwrap();
        assert_eq!(standings.team_count(), 2);
    }

    #[test]
    fn test_zero_teams_rejected() {
        assert!(random_division(0, 6, Some(1)).is_err());
    }
}
