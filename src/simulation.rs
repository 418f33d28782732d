//! Running many matches on one board and summarising how each strategy did.

use log::info;
use serde::Serialize;
use std::fmt;

use crate::game::{Board, Dice, GameError, MatchResult, Strategy};

/// Play `games` matches on `board`, stopping at the first error.
pub fn simulate<D: Dice>(board: &mut Board<D>, games: usize) -> Result<Vec<MatchResult>, GameError> {
    if games == 0 {
        return Err(GameError::configuration("number of matches must be > 0"));
    }

    let mut results = Vec::with_capacity(games);

    for game in 0..games {
        results.push(board.run_match()?);

        if (game + 1) % 100 == 0 {
            info!("{} of {} matches played", game + 1, games);
        }
    }

    Ok(results)
}

#[derive(Clone, Debug, PartialEq, Serialize)]
/// How often a strategy won.
pub struct WinRate {
    pub strategy: Strategy,
    pub wins: usize,
    /// Share of all matches won, from 0 to 100.
    pub percentage: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
/// Aggregate statistics over a batch of matches.
pub struct SimulationReport {
    pub games: usize,
    /// Matches that hit the round limit without a sole survivor.
    pub timeouts: usize,
    pub average_rounds: f64,
    /// One entry per strategy, in seating order.
    pub win_rates: Vec<WinRate>,
    /// The strategy with the most wins. Ties go to the earlier seat.
    pub top_strategy: Strategy,
}

impl SimulationReport {
    /// Summarise a non-empty batch of match results.
    pub fn from_results(results: &[MatchResult]) -> Result<Self, GameError> {
        if results.is_empty() {
            return Err(GameError::configuration(
                "at least one match is needed for a report",
            ));
        }

        let games = results.len();
        let timeouts = results.iter().filter(|r| r.timed_out).count();
        let total_rounds: u64 = results.iter().map(|r| u64::from(r.total_rounds)).sum();

        let win_rates: Vec<WinRate> = Strategy::ALL
            .iter()
            .map(|&strategy| {
                let wins = results
                    .iter()
                    .filter(|r| r.winner.strategy == strategy)
                    .count();

                WinRate {
                    strategy,
                    wins,
                    percentage: wins as f64 / games as f64 * 100.,
                }
            })
            .collect();

        let mut top = &win_rates[0];
        for rate in &win_rates[1..] {
            if rate.wins > top.wins {
                top = rate;
            }
        }
        let top_strategy = top.strategy;

        Ok(Self {
            games,
            timeouts,
            average_rounds: total_rounds as f64 / games as f64,
            win_rates,
            top_strategy,
        })
    }
}

impl fmt::Display for SimulationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "**********************************")?;
        writeln!(f, " RESULTS ({} matches)", self.games)?;
        writeln!(f, "**********************************")?;
        writeln!(f)?;
        writeln!(f, " Matches ended by timeout: {}", self.timeouts)?;
        writeln!(f, " Average rounds per match: {:.2}", self.average_rounds)?;
        writeln!(f)?;
        writeln!(f, " Wins per strategy:")?;
        for rate in &self.win_rates {
            writeln!(f, " --- {:<10}: {:>5.1} %", rate.strategy, rate.percentage)?;
        }
        writeln!(f)?;
        writeln!(f, " Most winning strategy: {}", self.top_strategy)?;
        write!(f, "**********************************")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{BoardConfig, PlayerSnapshot};
    use assert_matches::assert_matches;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn result(strategy: Strategy, total_rounds: u32, timed_out: bool) -> MatchResult {
        MatchResult {
            total_rounds,
            timed_out,
            winner: PlayerSnapshot {
                balance: 300,
                lost: false,
                won: !timed_out,
                strategy,
            },
        }
    }

    #[test]
    fn summarises_a_batch() {
        let results = [
            result(Strategy::Cautious, 10, false),
            result(Strategy::Cautious, 20, false),
            result(Strategy::Impulsive, 1000, true),
            result(Strategy::Random, 30, false),
        ];

        let report = SimulationReport::from_results(&results).unwrap();

        assert_eq!(report.games, 4);
        assert_eq!(report.timeouts, 1);
        assert_eq!(report.average_rounds, 265.);
        assert_eq!(report.top_strategy, Strategy::Cautious);

        let percentages: Vec<f64> = report.win_rates.iter().map(|r| r.percentage).collect();
        assert_eq!(percentages, vec![25., 0., 50., 25.]);
    }

    #[test]
    fn ties_go_to_the_earlier_seat() {
        let results = [
            result(Strategy::Random, 5, false),
            result(Strategy::Demanding, 5, false),
        ];

        let report = SimulationReport::from_results(&results).unwrap();

        assert_eq!(report.top_strategy, Strategy::Demanding);
    }

    #[test]
    fn empty_batch_is_rejected() {
        assert_matches!(
            SimulationReport::from_results(&[]),
            Err(GameError::Configuration(_))
        );
    }

    #[test]
    fn simulates_every_requested_match() {
        let mut board = Board::new(BoardConfig::default(), StdRng::seed_from_u64(8)).unwrap();

        let results = simulate(&mut board, 25).unwrap();
        let report = SimulationReport::from_results(&results).unwrap();

        assert_eq!(results.len(), 25);
        assert_eq!(report.win_rates.iter().map(|r| r.wins).sum::<usize>(), 25);
        assert!(report.average_rounds >= 1.);
    }

    #[test]
    fn zero_matches_is_rejected_before_playing() {
        let mut board = Board::new(BoardConfig::default(), StdRng::seed_from_u64(8)).unwrap();

        assert_matches!(simulate(&mut board, 0), Err(GameError::Configuration(_)));
        assert_eq!(board.current_round(), 0);
    }

    #[test]
    fn report_renders_every_strategy() {
        let report = SimulationReport::from_results(&[result(Strategy::Impulsive, 3, false)]).unwrap();
        let text = report.to_string();

        for strategy in Strategy::ALL {
            assert!(text.contains(strategy.name()));
        }
        assert!(text.contains("Most winning strategy: Impulsive"));

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["topStrategy"], "Impulsive");
        assert_eq!(json["winRates"][0]["wins"], 1);
    }
}
