pub mod alignjson;
pub mod movejson;

/// Completion summary for one subcommand run, printed on success. Failures
/// never reach a report; they abort with a non-zero exit instead.
#[derive(Debug, Clone)]
pub struct CommandReport {
    pub command: String,
    pub details: Vec<String>,
}

impl CommandReport {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            details: Vec::new(),
        }
    }

    pub fn detail(&mut self, text: impl Into<String>) {
        self.details.push(text.into());
    }

    pub fn render(&self) -> String {
        self.details
            .iter()
            .map(|d| format!("{}: {}", self.command, d))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
