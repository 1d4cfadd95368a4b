use flume::{Receiver, Sender};
use horserace::interfaces::gui_interface::{EngineCommand, RaceSnapshot};
use tracing::debug;

#[derive(Debug)]
pub struct HorseraceInterface {
    pub rx: Receiver<RaceSnapshot>,
    pub cmd_tx: Sender<EngineCommand>,
    pub race_snapshot: RaceSnapshot,
}

impl HorseraceInterface {
    pub fn new(rx: Receiver<RaceSnapshot>, cmd_tx: Sender<EngineCommand>) -> HorseraceInterface {
        HorseraceInterface {
            rx,
            cmd_tx,
            race_snapshot: Default::default(),
        }
    }

    /// The method takes the latest snapshot from the channel and returns true if there was any.
    pub fn update(&mut self) -> bool {
        // only the latest snapshot is of interest, older ones are skipped
        match self.rx.try_iter().last() {
            Some(x) => {
                self.race_snapshot = x;
                true
            }
            None => false,
        }
    }

    /// The method forwards the command to the race driver. A stopped driver is not an error here,
    /// the command is dropped in that case.
    pub fn send_command(&mut self, command: EngineCommand) {
        if self.cmd_tx.send(command).is_err() {
            debug!("Race driver is not running, {:?} dropped", command);
            return;
        }

        // lock the controls until the driver confirms the new state with the next snapshot
        if command == EngineCommand::Start {
            self.race_snapshot.running = true;
        }
    }

    pub fn get_start_enabled(&self) -> bool {
        !self.race_snapshot.running && !self.race_snapshot.finished
    }

    pub fn get_reset_enabled(&self) -> bool {
        !self.race_snapshot.running
    }
}

impl Drop for HorseraceInterface {
    fn drop(&mut self) {
        let _ = self.cmd_tx.send(EngineCommand::Shutdown);
    }
}
