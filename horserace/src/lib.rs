pub mod core {
    pub mod competitor;
    pub mod handle_race;
    pub mod race;
    pub mod step_source;
}

pub mod interfaces {
    pub mod gui_interface;
}

pub mod post {
    pub mod batch_summary;
    pub mod race_result;
}

pub mod pre {
    pub mod check_race_opts_pars;
    pub mod race_opts;
    pub mod read_sim_pars;
}




#[cfg(test)]
mod handle_race_tests {
    use crate::core::handle_race::{drive_race_realtime, handle_race, simulate_race};
    use crate::interfaces::gui_interface::{DriverLink, EngineCommand, RaceSnapshot};
    use crate::pre::read_sim_pars::SimPars;
    use crate::test_helpers::const_race;
    use std::thread;
    use std::time::Duration;

    #[test]
    fn test_simulate_race() {
        let mut race = const_race(5, 4);
        simulate_race(&mut race);
        assert!(race.get_finished());
        assert_eq!(race.get_race_result().tot_no_ticks, 25);
    }
    #[test]
    fn test_handle_race_invalid_step_range() {
        let mut sim_pars = SimPars::default();
        sim_pars.race_pars.step_min = 5;
        sim_pars.race_pars.step_max = 4;
        assert!(handle_race(&sim_pars, Some(1), None).is_err());
    }
    #[test]
    fn test_handle_race_headless() {
        let race_result = handle_race(&SimPars::default(), Some(1), None).unwrap();
        assert_eq!(race_result.entries.len(), 5);
        assert!(race_result.finish_ticks.iter().all(|(_, tick)| tick.is_some()));
        assert!(race_result.get_winner().is_some());
    }
    #[test]
    fn test_drive_race_realtime() {
        let (tx, rx) = flume::unbounded::<RaceSnapshot>();
        let (cmd_tx, cmd_rx) = flume::unbounded();

        let handle = thread::spawn(move || {
            let mut race = const_race(2, 50);
            let last_race_result =
                drive_race_realtime(&mut race, Duration::from_millis(10), &DriverLink { tx, cmd_rx });
            (race, last_race_result)
        });

        // initial snapshot
        let snapshot = rx.recv().unwrap();
        assert!(!snapshot.running);
        assert_eq!(snapshot.tick_count, 0);

        cmd_tx.send(EngineCommand::Start).unwrap();
        let mut snapshot = rx.recv().unwrap();
        assert!(snapshot.running);

        while !snapshot.finished {
            snapshot = rx.recv().unwrap();
        }
        assert_eq!(snapshot.tick_count, 2);
        assert!(!snapshot.running);
        assert_eq!(snapshot.results.len(), 2);

        cmd_tx.send(EngineCommand::Reset).unwrap();
        let snapshot = rx.recv().unwrap();
        assert!(!snapshot.finished);
        assert!(snapshot.results.is_empty());
        assert!(snapshot.horse_states.iter().all(|state| state.progress == 0));

        cmd_tx.send(EngineCommand::Shutdown).unwrap();
        let (race, last_race_result) = handle.join().unwrap();
        assert!(!race.get_running());

        // the finished race is kept although the engine was reset afterwards
        let last_race_result = last_race_result.unwrap();
        assert_eq!(last_race_result.entries.len(), 2);
        assert_eq!(last_race_result.tot_no_ticks, 2);
        assert!(race.get_race_result().entries.is_empty());
    }
    #[test]
    fn test_drive_race_realtime_disconnect() {
        let (tx, rx) = flume::unbounded::<RaceSnapshot>();
        let (cmd_tx, cmd_rx) = flume::unbounded::<EngineCommand>();

        let handle = thread::spawn(move || {
            let mut race = const_race(2, 1);
            let last_race_result =
                drive_race_realtime(&mut race, Duration::from_millis(10), &DriverLink { tx, cmd_rx });
            assert!(last_race_result.is_none());
            race
        });

        cmd_tx.send(EngineCommand::Start).unwrap();
        let _ = rx.recv().unwrap();
        drop(rx);
        drop(cmd_tx);

        // the driver stops without finishing the race
        let race = handle.join().unwrap();
        assert!(!race.get_running());
        assert!(!race.get_finished());
    }
}

#[cfg(test)]
mod post_tests {
    use crate::post::batch_summary::BatchSummary;
    use crate::post::race_result::{RaceResult, ResultEntry};
    use approx::assert_ulps_eq;
    use chrono::{Local, TimeZone};

    fn race_result(finish_ticks: Vec<u32>) -> RaceResult {
        RaceResult {
            entries: vec![],
            tot_no_ticks: *finish_ticks.iter().max().unwrap(),
            finish_ticks: finish_ticks
                .iter()
                .enumerate()
                .map(|(i, &tick)| (format!("Horse {}", i + 1), Some(tick)))
                .collect(),
        }
    }

    #[test]
    fn test_result_entry_time_str() {
        let entry = ResultEntry {
            name: String::from("Horse 1"),
            time: Local.with_ymd_and_hms(2024, 5, 1, 13, 4, 9).unwrap(),
        };
        assert_eq!(entry.get_time_str(), "13:04:09");
    }
    #[test]
    fn test_winner_tie_break() {
        assert_eq!(race_result(vec![30, 28, 28]).get_winner(), Some("Horse 2"));
    }
    #[test]
    fn test_batch_summary() {
        let x = BatchSummary::from_results(&[
            race_result(vec![30, 28, 29]),
            race_result(vec![25, 28, 29]),
            race_result(vec![31, 28, 27]),
            race_result(vec![26, 28, 29]),
        ]);
        assert_eq!(x.no_races, 4);
        assert_ulps_eq!(x.avg_no_ticks, 29.75);
        assert_eq!(
            x.wins,
            vec![
                (String::from("Horse 1"), 2),
                (String::from("Horse 2"), 1),
                (String::from("Horse 3"), 1)
            ]
        );
    }
    #[test]
    fn test_batch_summary_empty() {
        let x = BatchSummary::from_results(&[]);
        assert_eq!(x.no_races, 0);
        assert!(x.wins.is_empty());
    }
}
