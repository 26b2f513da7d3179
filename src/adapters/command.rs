use crate::domain::ports::Fetcher;
use crate::utils::error::{AgentError, Result};
use async_trait::async_trait;
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;
use tracing::debug;

/// Fetches URLs by spawning an external fetch command and capturing its
/// stdout. The program and leading arguments are configurable so tests can
/// substitute a shell; production use is `curl -s <url>`.
pub struct CommandFetcher {
    program: String,
    args: Vec<String>,
    timeout: Duration,
}

impl CommandFetcher {
    /// The default external fetch tool: `curl -s <url>`.
    pub fn curl(timeout_secs: u64) -> Self {
        Self::new("curl", &["-s"], Duration::from_secs(timeout_secs))
    }

    pub fn new(program: &str, args: &[&str], timeout: Duration) -> Self {
        Self {
            program: program.to_string(),
            args: args.iter().map(|s| (*s).to_string()).collect(),
            timeout,
        }
    }
}

#[async_trait]
impl Fetcher for CommandFetcher {
    async fn fetch(&self, url: &str) -> Result<String> {
        debug!("Executing: {} {} {}", self.program, self.args.join(" "), url);

        let mut command = Command::new(&self.program);
        command
            .args(&self.args)
            .arg(url)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        let output = match tokio::time::timeout(self.timeout, command.output()).await {
            Ok(result) => result.map_err(|e| AgentError::Fetch {
                message: format!("Error executing {}: {}", self.program, e),
            })?,
            Err(_) => {
                return Err(AgentError::FetchTimeout {
                    seconds: self.timeout.as_secs(),
                })
            }
        };

        if output.status.success() {
            Ok(String::from_utf8_lossy(&output.stdout).into_owned())
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr);
            Err(AgentError::Fetch {
                message: format!("{} command failed: {}", self.program, stderr.trim()),
            })
        }
    }
}
