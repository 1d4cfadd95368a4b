use crate::core::competitor::PROGRESS_MAX;
use crate::core::race::RacePars;
use crate::pre::race_opts::RaceOpts;
use crate::pre::read_sim_pars::SimPars;
use anyhow::Context;
use std::collections::HashSet;

/// InputValueError is used if some race option or parameter does not fulfill the posed
/// requirements, e.g., by an empty horse list.
#[derive(Debug, Clone, thiserror::Error)]
#[error("Invalid input value")]
pub struct InputValueError;

/// check_race_opts_pars assures that the inserted options and parameters are within reasonable
/// limits and raises an error if not.
pub fn check_race_opts_pars(race_opts: &RaceOpts, sim_pars: &SimPars) -> anyhow::Result<()> {
    // PART 1: RACE OPTIONS
    if race_opts.no_sim_runs < 1 {
        return Err(InputValueError).context(format!(
            "no_sim_runs must be at least equal to one, but is {}!",
            race_opts.no_sim_runs
        ));
    }

    if race_opts.gui && race_opts.no_sim_runs != 1 {
        return Err(InputValueError)
            .context("If gui is activated, no_sim_runs must be equal to one!");
    }

    // PART 2: RACE PARAMETERS
    check_sim_pars(sim_pars)
}

/// check_sim_pars checks the parameters that are independent of the command line options.
pub fn check_sim_pars(sim_pars: &SimPars) -> anyhow::Result<()> {
    // RACE ----------------------------------------------------------------------------------------
    let race_pars = &sim_pars.race_pars;

    if !(10 <= race_pars.interval_ms && race_pars.interval_ms <= 10_000) {
        return Err(InputValueError).context(format!(
            "interval_ms is {}ms, which is not within the reasonable range of [10, 10000]ms!",
            race_pars.interval_ms
        ));
    }

    check_step_range(race_pars)?;

    // HORSES --------------------------------------------------------------------------------------
    if sim_pars.horse_pars_all.is_empty() {
        return Err(InputValueError).context("There must be at least one horse in the race!");
    }

    let mut names = HashSet::with_capacity(sim_pars.horse_pars_all.len());

    for horse_pars in sim_pars.horse_pars_all.iter() {
        if horse_pars.name.trim().is_empty() {
            return Err(InputValueError).context("Horse names must not be empty!");
        }

        if !names.insert(horse_pars.name.as_str()) {
            return Err(InputValueError)
                .context(format!("Horse name {} is not unique!", horse_pars.name));
        }

        if horse_pars
            .color
            .parse::<css_color_parser::Color>()
            .is_err()
        {
            return Err(InputValueError).context(format!(
                "Color {} of horse {} is not a valid CSS color!",
                horse_pars.color, horse_pars.name
            ));
        }
    }

    Ok(())
}

/// check_step_range assures that every tick advances an unfinished horse by at least one and that
/// the range can be sampled.
pub fn check_step_range(race_pars: &RacePars) -> anyhow::Result<()> {
    if !(1 <= race_pars.step_min
        && race_pars.step_min <= race_pars.step_max
        && race_pars.step_max <= PROGRESS_MAX)
    {
        return Err(InputValueError).context(format!(
            "Step range [{}, {}] does not fulfill 1 <= step_min <= step_max <= {}!",
            race_pars.step_min, race_pars.step_max, PROGRESS_MAX
        ));
    }

    Ok(())
}
