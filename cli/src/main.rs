use clap::Parser;
use gui::core::gui::RaceBoard;
use horserace::interfaces::gui_interface::DriverLink;
use horserace::post::batch_summary::BatchSummary;
use horserace::post::race_result::RaceResult;
use horserace::pre::check_race_opts_pars::check_race_opts_pars;
use horserace::pre::race_opts::RaceOpts;
use horserace::pre::read_sim_pars::{read_sim_pars, SimPars};
use rayon::prelude::*;
use std::cmp::min;
use std::thread;
use std::time::Instant;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

// set maximum number of concurrently running jobs in case of running more than a single simulation
const MAX_NO_CONCURRENT_JOBS: u32 = 200;

fn main() -> anyhow::Result<()> {
    // PRE-PROCESSING ------------------------------------------------------------------------------
    // get race options from the command line arguments and read race parameters
    let race_opts: RaceOpts = RaceOpts::parse();

    let default_level = if race_opts.debug { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let sim_pars = match race_opts.parfile_path.as_deref() {
        Some(parfile_path) => read_sim_pars(parfile_path)?,
        None => SimPars::default(),
    };

    // check race options and parameters
    check_race_opts_pars(&race_opts, &sim_pars)?;

    // create vector for the race results and simulate race(s)
    let mut race_results: Vec<RaceResult> = Vec::with_capacity(race_opts.no_sim_runs as usize);

    info!(
        "Racing {} horses with a tick interval of {}ms and steps in [{}, {}]",
        sim_pars.horse_pars_all.len(),
        sim_pars.race_pars.interval_ms,
        sim_pars.race_pars.step_min,
        sim_pars.race_pars.step_max
    );

    // EXECUTION -----------------------------------------------------------------------------------
    if !race_opts.gui {
        // NON-GUI CASE ----------------------------------------------------------------------------
        let t_start = Instant::now();

        if race_opts.no_sim_runs == 1 {
            // SINGLE THREAD -----------------------------------------------------------------------
            race_results.push(horserace::core::handle_race::handle_race(
                &sim_pars,
                race_opts.seed,
                None,
            )?);
        } else {
            // MULTIPLE THREADS --------------------------------------------------------------------
            let mut no_races_left = race_opts.no_sim_runs;

            while no_races_left > 0 {
                // calculate number of simulation runs to execute in current loop
                let tmp_no_sim_runs = min(no_races_left, MAX_NO_CONCURRENT_JOBS);
                let run_offset = race_opts.no_sim_runs - no_races_left;

                // simulate the races, a given seed is varied per run to keep the races distinct
                let tmp_results = (0..tmp_no_sim_runs)
                    .into_par_iter()
                    .map(|i| {
                        let seed = race_opts
                            .seed
                            .map(|seed| seed.wrapping_add((run_offset + i) as u64));
                        horserace::core::handle_race::handle_race(&sim_pars, seed, None)
                    })
                    .collect::<anyhow::Result<Vec<RaceResult>>>()?;
                race_results.extend(tmp_results);

                // reduce remaining simulation runs
                no_races_left -= tmp_no_sim_runs;
            }
        }

        info!(
            "Execution time (total): {}ms",
            t_start.elapsed().as_millis()
        );
    } else {
        // GUI CASE --------------------------------------------------------------------------------
        // create channels for communication between GUI and race driver
        let (tx, rx) = flume::unbounded();
        let (cmd_tx, cmd_rx) = flume::unbounded();

        // create a separate thread for the race driver (executed in real-time) -> sim_pars get moved
        // and must therefore be copied to be still available afterwards
        let sim_pars_thread = sim_pars.clone();
        let seed = race_opts.seed;

        let race_thread = thread::spawn(move || {
            horserace::core::handle_race::handle_race(
                &sim_pars_thread,
                seed,
                Some(&DriverLink { tx, cmd_rx }),
            )
        });

        // start GUI (must be done in the main thread), closing the window shuts the driver down
        let gui = RaceBoard::new(rx, cmd_tx, &sim_pars.race_pars);
        let native_options = eframe::NativeOptions {
            viewport: eframe::egui::ViewportBuilder::default()
                .with_inner_size([480.0, 360.0])
                .with_title("Horse Race"),
            ..Default::default()
        };

        eframe::run_native(
            "Horse Race",
            native_options,
            Box::new(|_cc| Ok(Box::new(gui))),
        )
        .map_err(|err| anyhow::anyhow!("Failed to run GUI: {}", err))?;

        // the last race result is only of interest if the race was finished in the GUI
        match race_thread.join() {
            Ok(race_result) => {
                let race_result = race_result?;
                if !race_result.entries.is_empty() {
                    race_results.push(race_result);
                }
            }
            Err(_) => anyhow::bail!("Race driver thread panicked!"),
        }
    }

    // POST-PROCESSING -----------------------------------------------------------------------------
    // print results
    if race_results.len() == 1 {
        race_results[0].print_results();
    } else if race_results.len() > 1 {
        BatchSummary::from_results(&race_results).print_summary();
    }

    Ok(())
}
