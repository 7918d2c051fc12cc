use std::fmt::{Display, Formatter};

use super::{Diagnostic, Diagnostics};

impl Diagnostics {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn add(&mut self, message: String, consequence: &str) {
        self.entries.push(Diagnostic {
            message,
            consequence: consequence.to_string(),
        });
    }

    pub fn has_errors(&self) -> bool {
        !self.entries.is_empty()
    }

    pub fn entries(&self) -> &[Diagnostic] {
        &self.entries
    }
}

impl Display for Diagnostics {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for entry in &self.entries {
            writeln!(f, "{}; {}", entry.message, entry.consequence)?;
        }
        Ok(())
    }
}
