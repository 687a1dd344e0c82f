use log::info;
use rayon::prelude::*;
use std::fmt;

use crate::elimination::{evaluate, Verdict};
use crate::error::Result;
use crate::standings::Standings;

/// One verdict per team, in division order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DivisionReport {
    rows: Vec<(String, Verdict)>,
}

impl DivisionReport {
    /// Evaluate every team one after another.
    pub fn evaluate(standings: &Standings) -> Result<Self> {
        let rows = standings
            .roster()
            .iter()
            .enumerate()
            .map(|(i, team)| evaluate(standings, i).map(|verdict| (team.name.clone(), verdict)))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::finish(rows))
    }

    /// Evaluate every team on the rayon pool.
    ///
    /// Each query builds its own network; only the standings are shared.
    pub fn evaluate_parallel(standings: &Standings) -> Result<Self> {
        let rows = standings
            .roster()
            .par_iter()
            .enumerate()
            .map(|(i, team)| evaluate(standings, i).map(|verdict| (team.name.clone(), verdict)))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::finish(rows))
    }

    fn finish(rows: Vec<(String, Verdict)>) -> Self {
        let report = DivisionReport { rows };
        info!(
            "Evaluated {} teams, {} eliminated",
            report.rows.len(),
            report.eliminated_count()
        );
        report
    }

    pub fn rows(&self) -> &[(String, Verdict)] {
        &self.rows
    }

    pub fn verdict(&self, team: &str) -> Option<&Verdict> {
        self.rows
            .iter()
            .find(|(name, _)| name == team)
            .map(|(_, verdict)| verdict)
    }

    /// Names of eliminated teams, in division order.
    pub fn eliminated(&self) -> impl Iterator<Item = &str> + '_ {
        self.rows
            .iter()
            .filter(|(_, verdict)| verdict.is_eliminated())
            .map(|(name, _)| name.as_str())
    }

    pub fn eliminated_count(&self) -> usize {
        self.eliminated().count()
    }
}

impl fmt::Display for DivisionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (team, verdict) in &self.rows {
            match verdict.certificate() {
                Some(certificate) => {
                    writeln!(f, "{} is eliminated by the subset R = {}", team, certificate)?
                }
                None => writeln!(f, "{} is not eliminated", team)?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::team::Team;

    fn make_division() -> Standings {
        Standings::new(vec![
            Team::new("A", 83, 71, 6, vec![0, 3, 3, 0]),
            Team::new("B", 80, 79, 6, vec![3, 0, 3, 0]),
            Team::new("C", 78, 78, 6, vec![3, 3, 0, 0]),
            Team::new("D", 2, 124, 0, vec![0, 0, 0, 0]),
        ])
        .unwrap()
    }

    #[test]
    fn test_report_text() {
        let report = DivisionReport::evaluate(&make_division()).unwrap();
        assert_eq!(
            report.to_string(),
            "A is not eliminated\n\
             B is not eliminated\n\
             C is not eliminated\n\
             D is eliminated by the subset R = { A }\n"
        );
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let standings = make_division();
        let sequential = DivisionReport::evaluate(&standings).unwrap();
        let parallel = DivisionReport::evaluate_parallel(&standings).unwrap();
        assert_eq!(sequential, parallel);
    }

    #[test]
    fn test_eliminated_listing() {
        let report = DivisionReport::evaluate(&make_division()).unwrap();
        assert_eq!(report.eliminated().collect::<Vec<_>>(), ["D"]);
        assert_eq!(report.eliminated_count(), 1);
        assert!(report.verdict("D").unwrap().is_eliminated());
        assert_eq!(report.verdict("A"), Some(&Verdict::NotEliminated));
        assert_eq!(report.verdict("Z"), None);
    }
}
