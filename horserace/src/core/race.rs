use crate::core::competitor::{Competitor, HorsePars};
use crate::core::step_source::StepSource;
use crate::interfaces::gui_interface::{HorseState, RaceSnapshot};
use crate::post::race_result::{RaceResult, ResultEntry};
use crate::pre::check_race_opts_pars::check_step_range;
use chrono::Local;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, warn};

/// * `interval_ms` - (ms) Interval between two ticks in real-time simulation
/// * `step_min` - Minimum progress increment per tick (inclusive)
/// * `step_max` - Maximum progress increment per tick (inclusive)
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct RacePars {
    pub interval_ms: u64,
    pub step_min: u32,
    pub step_max: u32,
}

impl Default for RacePars {
    fn default() -> Self {
        RacePars {
            interval_ms: 100,
            step_min: 1,
            step_max: 4,
        }
    }
}

impl RacePars {
    pub fn get_interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }
}

/// RaceState contains everything that changes during a race. Competitor order is the display
/// order and the order of the result entries.
#[derive(Debug, Clone)]
pub struct RaceState {
    pub competitors: Vec<Competitor>,
    pub running: bool,
    pub finished: bool,
    pub tick_count: u32,
    pub results: Vec<ResultEntry>,
}

pub struct RaceEngine {
    step_min: u32,
    step_max: u32,
    state: RaceState,
    step_source: Box<dyn StepSource>,
}

impl std::fmt::Debug for RaceEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RaceEngine")
            .field("step_min", &self.step_min)
            .field("step_max", &self.step_max)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

impl RaceEngine {
    pub fn new(
        race_pars: &RacePars,
        horse_pars_all: &[HorsePars],
        step_source: Box<dyn StepSource>,
    ) -> anyhow::Result<RaceEngine> {
        check_step_range(race_pars)?;

        // create competitors (order of the parameter file is kept)
        let competitors = horse_pars_all
            .iter()
            .map(Competitor::new)
            .collect::<anyhow::Result<Vec<Competitor>>>()?;

        Ok(RaceEngine {
            step_min: race_pars.step_min,
            step_max: race_pars.step_max,
            state: RaceState {
                competitors,
                running: false,
                finished: false,
                tick_count: 0,
                results: vec![],
            },
            step_source,
        })
    }

    // ---------------------------------------------------------------------------------------------
    // CONTROL METHODS -----------------------------------------------------------------------------
    // ---------------------------------------------------------------------------------------------

    /// The method returns all horses to the start and clears the results. Calling it during a race
    /// cancels that race without completing it.
    pub fn reset(&mut self) {
        for competitor in self.state.competitors.iter_mut() {
            competitor.reset();
        }

        self.state.running = false;
        self.state.finished = false;
        self.state.tick_count = 0;
        self.state.results.clear();
        debug!("Race reset");
    }

    /// The method marks the race as running. Ticks are delivered by the caller afterwards. Starting
    /// a running race is a caller error and is ignored, a finished race must be reset first.
    pub fn start(&mut self) {
        if self.state.running {
            warn!("Race is already running, start request ignored");
            return;
        }
        if self.state.finished {
            warn!("Race is finished, start request ignored until reset");
            return;
        }

        self.state.running = true;
        debug!("Race started");
    }

    /// The method stops the repeating advancement without touching the progress.
    pub fn cancel(&mut self) {
        if self.state.running {
            debug!("Race cancelled at tick {}", self.state.tick_count);
        }
        self.state.running = false;
    }

    // ---------------------------------------------------------------------------------------------
    // MAIN METHOD ---------------------------------------------------------------------------------
    // ---------------------------------------------------------------------------------------------

    /// The method executes one advancement step and returns true if the race finished in this
    /// step. Execution order:
    /// 1. Add a random increment to every horse that has not yet reached the finish line.
    /// 2. If all horses reached the finish line, capture the current time once and pair it with
    /// every horse name (in competitor order) to create the results.
    ///
    /// A tick on a finished race does nothing. The running flag is not checked here: the caller
    /// owns the schedule and must stop ticking after cancel(), otherwise the race keeps advancing.
    pub fn tick(&mut self) -> bool {
        if self.state.finished {
            return false;
        }

        self.state.tick_count += 1;

        for competitor in self.state.competitors.iter_mut() {
            if !competitor.get_finished() {
                let increment = self.step_source.next_step(self.step_min, self.step_max);
                competitor.advance(increment, self.state.tick_count);
            }
        }

        if !self.get_all_finished() {
            return false;
        }

        let t_finish = Local::now();

        self.state.results = self
            .state
            .competitors
            .iter()
            .map(|competitor| ResultEntry {
                name: competitor.get_name().to_owned(),
                time: t_finish,
            })
            .collect();
        self.state.finished = true;
        self.state.running = false;

        true
    }

    // ---------------------------------------------------------------------------------------------
    // GETTERS -------------------------------------------------------------------------------------
    // ---------------------------------------------------------------------------------------------

    pub fn get_state(&self) -> &RaceState {
        &self.state
    }

    pub fn get_all_finished(&self) -> bool {
        self.state.competitors.iter().all(|competitor| competitor.get_finished())
    }

    pub fn get_running(&self) -> bool {
        self.state.running
    }

    pub fn get_finished(&self) -> bool {
        self.state.finished
    }

    /// The method returns an owned copy of the current state for the presentation layer.
    pub fn get_snapshot(&self) -> RaceSnapshot {
        RaceSnapshot {
            horse_states: self
                .state
                .competitors
                .iter()
                .map(|competitor| HorseState {
                    name: competitor.get_name().to_owned(),
                    color: competitor.color.to_owned(),
                    progress: competitor.get_progress(),
                })
                .collect(),
            running: self.state.running,
            finished: self.state.finished,
            tick_count: self.state.tick_count,
            results: self.state.results.to_owned(),
        }
    }

    pub fn get_race_result(&self) -> RaceResult {
        RaceResult {
            entries: self.state.results.to_owned(),
            tot_no_ticks: self.state.tick_count,
            finish_ticks: self
                .state
                .competitors
                .iter()
                .map(|competitor| (competitor.get_name().to_owned(), competitor.get_finish_tick()))
                .collect(),
        }
    }
}
