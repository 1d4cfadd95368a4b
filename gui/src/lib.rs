pub mod core {
    pub mod gui;
}

pub mod interfaces {
    pub mod horserace_interface;
}

#[cfg(test)]
mod horserace_interface_tests {
    use crate::interfaces::horserace_interface::HorseraceInterface;
    use horserace::interfaces::gui_interface::{EngineCommand, RaceSnapshot};

    fn snapshot(tick_count: u32, running: bool, finished: bool) -> RaceSnapshot {
        RaceSnapshot {
            tick_count,
            running,
            finished,
            ..Default::default()
        }
    }

    #[test]
    fn test_update_keeps_latest() {
        let (tx, rx) = flume::unbounded();
        let (cmd_tx, _cmd_rx) = flume::unbounded();
        let mut x = HorseraceInterface::new(rx, cmd_tx);

        assert!(!x.update());
        tx.send(snapshot(1, true, false)).unwrap();
        tx.send(snapshot(2, true, false)).unwrap();
        tx.send(snapshot(3, true, false)).unwrap();
        assert!(x.update());
        assert_eq!(x.race_snapshot.tick_count, 3);
    }
    #[test]
    fn test_controls_enabled() {
        let (tx, rx) = flume::unbounded();
        let (cmd_tx, _cmd_rx) = flume::unbounded();
        let mut x = HorseraceInterface::new(rx, cmd_tx);

        x.update();
        assert!(x.get_start_enabled());
        assert!(x.get_reset_enabled());

        tx.send(snapshot(4, true, false)).unwrap();
        x.update();
        assert!(!x.get_start_enabled());
        assert!(!x.get_reset_enabled());

        tx.send(snapshot(25, false, true)).unwrap();
        x.update();
        assert!(!x.get_start_enabled());
        assert!(x.get_reset_enabled());
    }
    #[test]
    fn test_start_locks_controls() {
        let (_tx, rx) = flume::unbounded();
        let (cmd_tx, cmd_rx) = flume::unbounded();
        let mut x = HorseraceInterface::new(rx, cmd_tx);

        x.send_command(EngineCommand::Start);
        assert_eq!(cmd_rx.try_recv().unwrap(), EngineCommand::Start);
        assert!(!x.get_start_enabled());
        assert!(!x.get_reset_enabled());
    }
    #[test]
    fn test_send_after_driver_stopped() {
        let (_tx, rx) = flume::unbounded();
        let (cmd_tx, cmd_rx) = flume::unbounded();
        let mut x = HorseraceInterface::new(rx, cmd_tx);

        drop(cmd_rx);
        x.send_command(EngineCommand::Start);
        assert!(x.get_start_enabled());
    }
    #[test]
    fn test_drop_sends_shutdown() {
        let (_tx, rx) = flume::unbounded();
        let (cmd_tx, cmd_rx) = flume::unbounded();
        drop(HorseraceInterface::new(rx, cmd_tx));
        assert_eq!(cmd_rx.try_recv().unwrap(), EngineCommand::Shutdown);
    }
}
