use crate::post::race_result::RaceResult;
use std::fmt::Write;

/// BatchSummary condenses the results of several independent races.
#[derive(Debug, Clone)]
pub struct BatchSummary {
    pub no_races: u32,
    pub avg_no_ticks: f64,
    pub wins: Vec<(String, u32)>,
}

impl BatchSummary {
    /// from_results counts the wins per horse (in competitor order of the first race) and averages
    /// the number of ticks per race.
    pub fn from_results(race_results: &[RaceResult]) -> BatchSummary {
        let mut wins: Vec<(String, u32)> = race_results
            .first()
            .map(|race_result| {
                race_result
                    .finish_ticks
                    .iter()
                    .map(|(name, _)| (name.to_owned(), 0))
                    .collect()
            })
            .unwrap_or_default();

        for race_result in race_results.iter() {
            if let Some(winner) = race_result.get_winner() {
                if let Some(entry) = wins.iter_mut().find(|(name, _)| name == winner) {
                    entry.1 += 1;
                }
            }
        }

        let avg_no_ticks = if race_results.is_empty() {
            0.0
        } else {
            race_results
                .iter()
                .map(|race_result| race_result.tot_no_ticks as f64)
                .sum::<f64>()
                / race_results.len() as f64
        };

        BatchSummary {
            no_races: race_results.len() as u32,
            avg_no_ticks,
            wins,
        }
    }

    pub fn print_summary(&self) {
        let mut tmp_string_wins = String::from("horse, wins, win rate\n");

        for (name, no_wins) in self.wins.iter() {
            writeln!(
                &mut tmp_string_wins,
                "{}, {:5}, {:5.1}%",
                name,
                no_wins,
                *no_wins as f64 / self.no_races.max(1) as f64 * 100.0
            )
            .unwrap();
        }

        println!(
            "RESULT: {} races, {:.2} ticks per race on average",
            self.no_races, self.avg_no_ticks
        );
        println!("{}", tmp_string_wins);
    }
}
