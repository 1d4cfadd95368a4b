use chrono::{DateTime, Local};
use std::fmt::Write;

/// ResultEntry pairs a horse name with its completion timestamp.
#[derive(Debug, Clone)]
pub struct ResultEntry {
    pub name: String,
    pub time: DateTime<Local>,
}

impl ResultEntry {
    /// Completion time as displayed in the results table (HH:MM:SS).
    pub fn get_time_str(&self) -> String {
        self.time.format("%H:%M:%S").to_string()
    }
}

/// RaceResult contains all race information that is required for post-processing the results.
#[derive(Debug, Clone)]
pub struct RaceResult {
    pub entries: Vec<ResultEntry>,
    pub tot_no_ticks: u32,
    pub finish_ticks: Vec<(String, Option<u32>)>,
}

impl RaceResult {
    /// get_winner returns the horse that reached the finish line in the earliest tick. Ties are
    /// resolved by competitor order.
    pub fn get_winner(&self) -> Option<&str> {
        self.finish_ticks
            .iter()
            .filter_map(|(name, finish_tick)| finish_tick.map(|tick| (name, tick)))
            .min_by_key(|&(_, tick)| tick)
            .map(|(name, _)| name.as_str())
    }

    /// print_results prints the results table and the finish ticks to the console output.
    pub fn print_results(&self) {
        let mut tmp_string_results = String::from("horse, time\n");

        for entry in self.entries.iter() {
            writeln!(&mut tmp_string_results, "{}, {}", entry.name, entry.get_time_str()).unwrap();
        }

        let mut tmp_string_ticks = String::from("horse, finish tick\n");

        for (name, finish_tick) in self.finish_ticks.iter() {
            match finish_tick {
                Some(tick) => writeln!(&mut tmp_string_ticks, "{}, {:4}", name, tick).unwrap(),
                None => writeln!(&mut tmp_string_ticks, "{},  DNF", name).unwrap(),
            }
        }

        println!("RESULT: Results ({} ticks)", self.tot_no_ticks);
        println!("{}", tmp_string_results);

        println!("RESULT: Finish ticks");
        println!("{}", tmp_string_ticks);
    }
}
