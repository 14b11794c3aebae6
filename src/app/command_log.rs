//! Verlauf der ausgeführten Commands für Diagnose und Status-Bar.

use super::AppCommand;
use std::collections::VecDeque;

/// Ringpuffer der jüngsten Commands plus Gesamtzähler seit Programmstart.
#[derive(Debug, Default)]
pub struct CommandLog {
    recent: VecDeque<AppCommand>,
    total: u64,
}

impl CommandLog {
    /// Anzahl der Commands, die im Ring gehalten werden.
    pub const CAPACITY: usize = 64;

    pub fn new() -> Self {
        Self::default()
    }

    /// Nimmt einen Command auf und liefert seine laufende Nummer (ab 1).
    pub fn record(&mut self, command: &AppCommand) -> u64 {
        if self.recent.len() == Self::CAPACITY {
            self.recent.pop_front();
        }
        self.recent.push_back(command.clone());
        self.total += 1;
        self.total
    }

    /// Anzahl aller jemals aufgenommenen Commands.
    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn last(&self) -> Option<&AppCommand> {
        self.recent.back()
    }

    /// Jüngste Commands, ältester zuerst.
    pub fn recent(&self) -> impl DoubleEndedIterator<Item = &AppCommand> + '_ {
        self.recent.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ring_keeps_newest_and_counts_all() {
        let mut log = CommandLog::new();
        for _ in 0..CommandLog::CAPACITY {
            log.record(&AppCommand::EndDrag);
        }
        let sequence = log.record(&AppCommand::ClearDrawing);

        assert_eq!(sequence, CommandLog::CAPACITY as u64 + 1);
        assert_eq!(log.total(), sequence);
        assert_eq!(log.recent().count(), CommandLog::CAPACITY);
        assert!(matches!(log.last(), Some(AppCommand::ClearDrawing)));
    }

    #[test]
    fn test_empty_log_has_no_last_command() {
        let log = CommandLog::new();
        assert_eq!(log.total(), 0);
        assert!(log.last().is_none());
    }
}
