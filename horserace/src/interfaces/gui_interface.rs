use crate::post::race_result::ResultEntry;
use flume::{Receiver, Sender};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RgbColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

#[derive(Debug, Clone, Default)]
pub struct HorseState {
    pub name: String,
    pub color: RgbColor,
    pub progress: u32,
}

#[derive(Debug, Clone, Default)]
pub struct RaceSnapshot {
    pub horse_states: Vec<HorseState>,
    pub running: bool,
    pub finished: bool,
    pub tick_count: u32,
    pub results: Vec<ResultEntry>,
}

/// User intent forwarded from the presentation layer to the race driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineCommand {
    Start,
    Reset,
    Shutdown,
}

/// DriverLink bundles the channel ends held by the race driver: snapshots go out, commands come in.
#[derive(Debug)]
pub struct DriverLink {
    pub tx: Sender<RaceSnapshot>,
    pub cmd_rx: Receiver<EngineCommand>,
}
