//! Protokoll der vom Controller ausgeführten Commands.

use super::AppCommand;

/// Obergrenze, ab der die ältere Hälfte verworfen wird.
const MAX_ENTRIES: usize = 1000;

/// Ausgeführte Commands in Ausführungsreihenfolge.
#[derive(Default)]
pub struct CommandLog {
    entries: Vec<AppCommand>,
}

impl CommandLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hängt einen Command an. Bei vollem Log wird die ältere Hälfte verworfen.
    pub fn record(&mut self, command: &AppCommand) {
        if self.entries.len() >= MAX_ENTRIES {
            self.entries.drain(..MAX_ENTRIES / 2);
        }
        self.entries.push(command.clone());
    }

    /// Bisher geloggte Commands, ältester zuerst.
    pub fn entries(&self) -> &[AppCommand] {
        &self.entries
    }
}
