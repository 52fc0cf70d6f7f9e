use std::process::Command;

use anyhow::Context;
use tracing::trace;
use weather::Fetch;

/// Fetches URLs by spawning an external command and reading the response
/// body from its stdout. `curl -s` by default, but anything that takes a
/// URL as its last argument works.
pub struct CommandFetcher {
    command: String,
}

impl CommandFetcher {
    pub fn new(command: &str) -> Self {
        Self {
            command: String::from(command),
        }
    }
}

impl Fetch for CommandFetcher {
    fn get(&mut self, url: &str) -> anyhow::Result<String> {
        trace!(url, "Fetching");
        let mut words = self.command.split_whitespace();
        let Some(program) = words.next() else {
            anyhow::bail!("The fetcher command is empty");
        };
        let output = Command::new(program)
            .args(words)
            .arg(url)
            .output()
            .with_context(|| format!("Failed to run fetcher '{}'", self.command))?;
        if !output.status.success() {
            anyhow::bail!("Fetcher '{}' exited with {}", self.command, output.status);
        }
        String::from_utf8(output.stdout).context("The fetcher did not print UTF-8")
    }
}
