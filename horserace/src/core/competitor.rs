use crate::interfaces::gui_interface::RgbColor;
use anyhow::Context;
use serde::Deserialize;
use std::cmp::min;

/// Progress value at which a horse has crossed the finish line.
pub const PROGRESS_MAX: u32 = 100;

/// * `name` - Name of the horse, e.g. Horse 1 (must be unique within a race)
/// * `color` - Display color as CSS/hex string, e.g. #e6194b
#[derive(Debug, Deserialize, Clone)]
pub struct HorsePars {
    pub name: String,
    pub color: String,
}

#[derive(Debug, Clone)]
pub struct Competitor {
    name: String,
    pub color: RgbColor,
    progress: u32,
    finish_tick: Option<u32>,
}

impl Competitor {
    pub fn new(horse_pars: &HorsePars) -> anyhow::Result<Competitor> {
        // convert hex color to a rgb color
        let tmp_color = horse_pars
            .color
            .parse::<css_color_parser::Color>()
            .context(format!(
                "Could not parse color {} of horse {}!",
                horse_pars.color, horse_pars.name
            ))?;

        Ok(Competitor {
            name: horse_pars.name.to_owned(),
            color: RgbColor {
                r: tmp_color.r,
                g: tmp_color.g,
                b: tmp_color.b,
            },
            progress: 0,
            finish_tick: None,
        })
    }

    pub fn get_name(&self) -> &str {
        &self.name
    }

    pub fn get_progress(&self) -> u32 {
        self.progress
    }

    /// Tick in which the horse reached the finish line (None while still racing).
    pub fn get_finish_tick(&self) -> Option<u32> {
        self.finish_tick
    }

    pub fn get_finished(&self) -> bool {
        self.progress >= PROGRESS_MAX
    }

    /// The method adds the increment to the progress. Progress is clamped to PROGRESS_MAX, finished
    /// horses are left unchanged.
    pub fn advance(&mut self, increment: u32, cur_tick: u32) {
        if self.get_finished() {
            return;
        }

        self.progress = min(self.progress.saturating_add(increment), PROGRESS_MAX);

        if self.get_finished() {
            self.finish_tick = Some(cur_tick);
        }
    }

    pub fn reset(&mut self) {
        self.progress = 0;
        self.finish_tick = None;
    }
}
