use crate::core::race::RaceEngine;
use crate::core::step_source::RandomSteps;
use crate::interfaces::gui_interface::{DriverLink, EngineCommand};
use crate::post::race_result::RaceResult;
use crate::pre::read_sim_pars::SimPars;
use flume::RecvTimeoutError;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// handle_race creates a race engine on the basis of the inserted parameters and drives it. Without
/// a driver link the race is simulated as fast as possible, otherwise it is driven in real-time by
/// the commands of the presentation layer. The results of the last finished race are returned, or
/// those of the current race if no race was finished.
pub fn handle_race(
    sim_pars: &SimPars,
    seed: Option<u64>,
    link: Option<&DriverLink>,
) -> anyhow::Result<RaceResult> {
    // create the race
    let mut race = RaceEngine::new(
        &sim_pars.race_pars,
        &sim_pars.horse_pars_all,
        Box::new(RandomSteps::new(seed)),
    )?;

    let last_race_result = match link {
        None => {
            simulate_race(&mut race);
            None
        }
        Some(link) => drive_race_realtime(&mut race, sim_pars.race_pars.get_interval(), link),
    };

    Ok(last_race_result.unwrap_or_else(|| race.get_race_result()))
}

/// simulate_race starts the race and executes ticks until all horses are finished.
pub fn simulate_race(race: &mut RaceEngine) {
    race.start();

    while !race.get_finished() {
        race.tick();
    }

    debug!(
        "Race finished after {} ticks",
        race.get_state().tick_count
    );
}

/// drive_race_realtime executes the command loop of the race driver. While the race is running,
/// a tick is executed every interval. Incoming commands are handled in between. A snapshot is
/// sent after every state change. The loop ends on Shutdown or as soon as one of the channels is
/// disconnected, which is the regular teardown path and therefore not an error. The result of the
/// last finished race is returned, it survives later resets.
pub fn drive_race_realtime(
    race: &mut RaceEngine,
    interval: Duration,
    link: &DriverLink,
) -> Option<RaceResult> {
    let mut last_race_result = None;

    if link.tx.send(race.get_snapshot()).is_err() {
        return last_race_result;
    }

    let mut t_next_tick = Instant::now() + interval;
    let mut t_status_print = Instant::now();

    loop {
        // wait for a command, while running at most until the next tick is due
        let command = if race.get_running() {
            match link
                .cmd_rx
                .recv_timeout(t_next_tick.saturating_duration_since(Instant::now()))
            {
                Ok(command) => Some(command),
                Err(RecvTimeoutError::Timeout) => None,
                Err(RecvTimeoutError::Disconnected) => Some(EngineCommand::Shutdown),
            }
        } else {
            Some(link.cmd_rx.recv().unwrap_or(EngineCommand::Shutdown))
        };

        match command {
            Some(EngineCommand::Start) => {
                race.start();
                t_next_tick = Instant::now() + interval;
            }
            Some(EngineCommand::Reset) => race.reset(),
            Some(EngineCommand::Shutdown) => {
                race.cancel();
                debug!("Race driver shut down");
                return last_race_result;
            }
            None => {
                if race.tick() {
                    info!(
                        "Race finished after {} ticks",
                        race.get_state().tick_count
                    );
                    last_race_result = Some(race.get_race_result());
                }

                // print status (with a maximum of 1 Hz)
                if race.get_running() && t_status_print.elapsed() >= Duration::from_secs(1) {
                    info!(
                        "Simulating... Current tick is {}, leading progress is {}",
                        race.get_state().tick_count,
                        race.get_state()
                            .competitors
                            .iter()
                            .map(|competitor| competitor.get_progress())
                            .max()
                            .unwrap_or(0)
                    );
                    t_status_print = Instant::now();
                }

                // schedule next tick, restart the schedule if we fell behind
                t_next_tick += interval;
                let t_now = Instant::now();

                if t_next_tick < t_now {
                    warn!("Could not keep up with the tick interval!");
                    t_next_tick = t_now + interval;
                }
            }
        }

        // a dropped receiver means the presentation layer is gone
        if link.tx.send(race.get_snapshot()).is_err() {
            race.cancel();
            debug!("Presentation layer disconnected, race driver stopped");
            return last_race_result;
        }
    }
}
