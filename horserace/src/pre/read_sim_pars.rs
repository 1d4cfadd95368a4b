use crate::core::competitor::HorsePars;
use crate::core::race::RacePars;
use anyhow::Context;
use serde::Deserialize;
use std::fs::OpenOptions;
use std::path::Path;

/// SimPars is used to store all other parameter structs.
#[derive(Debug, Deserialize, Clone)]
pub struct SimPars {
    #[serde(default)]
    pub race_pars: RacePars,
    pub horse_pars_all: Vec<HorsePars>,
}

impl Default for SimPars {
    /// Five horses with the default tick interval and step range.
    fn default() -> Self {
        const COLORS: [&str; 5] = ["#e6194b", "#3cb44b", "#ffe119", "#4363d8", "#f58231"];

        SimPars {
            race_pars: RacePars::default(),
            horse_pars_all: COLORS
                .iter()
                .enumerate()
                .map(|(i, color)| HorsePars {
                    name: format!("Horse {}", i + 1),
                    color: color.to_string(),
                })
                .collect(),
        }
    }
}

/// read_sim_pars reads the JSON file and decodes the JSON string into the simulation parameters
/// struct.
pub fn read_sim_pars(filepath: &Path) -> anyhow::Result<SimPars> {
    // open file
    let fh = OpenOptions::new()
        .read(true)
        .open(filepath)
        .context(format!(
            "Failed to open parameter file {}!",
            filepath.display()
        ))?;

    // read and parse parameter file content
    let pars = serde_json::from_reader(&fh).context(format!(
        "Failed to parse parameter file {}!",
        filepath.display()
    ))?;
    Ok(pars)
}
