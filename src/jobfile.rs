use std::io::Write;
use std::path::Path;

use anyhow::Context;
use serde::Deserialize;

use crate::adder::{self, Operand};
use crate::greeter;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct JobFile {
    /// Jobs to run, in order
    #[serde(default)]
    pub job: Vec<Job>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Job {
    /// Print the sum of `x` and `y`
    Calculate { x: Operand, y: Operand },
    /// Print the greeting for `name`
    Greet { name: Operand },
}

impl JobFile {
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        log::debug!("loading job file: {}", path.display());
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read job file '{}'", path.display()))?;
        content
            .parse()
            .with_context(|| format!("failed to parse job file '{}'", path.display()))
    }

    /// Run every job in order, writing each job's output line to `out`.
    ///
    /// Stops at the first job that fails.
    pub fn run(&self, out: &mut impl Write) -> anyhow::Result<()> {
        if self.job.is_empty() {
            log::warn!("job file has no jobs");
        }
        for (i, job) in self.job.iter().enumerate() {
            log::debug!("running job #{i}: {job:?}");
            job.run(out)
                .with_context(|| format!("job #{i} ({}) failed", job.kind()))?;
        }
        log::debug!("ran {} job(s)", self.job.len());
        Ok(())
    }
}

impl std::str::FromStr for JobFile {
    type Err = toml::de::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        toml::from_str(s)
    }
}

impl Job {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Calculate { .. } => "calculate",
            Self::Greet { .. } => "greet",
        }
    }

    pub fn run(&self, out: &mut impl Write) -> anyhow::Result<()> {
        match self {
            Self::Calculate { x, y } => {
                let sum = adder::try_calculate(x.clone(), y.clone())?;
                writeln!(out, "{sum}").context("failed to write result")?;
            }
            Self::Greet { name } => {
                greeter::greet(out, name).context("failed to write greeting")?;
            }
        }
        Ok(())
    }
}
