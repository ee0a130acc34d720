//! Configuration management

use crate::types::CmpyError;
use clap::Parser;

/// Default working buffer capacity per input, in bytes.
pub const DEFAULT_BUFFER_SIZE: usize = 16384;

/// Command-line interface for cmpy
#[derive(Debug, Parser)]
#[command(
    name = "cmpy",
    version,
    about = "Compare two or more inputs byte by byte and report which pairs match"
)]
pub struct Cli {
    /// Inputs to compare; pass `stdin` to read one of them from standard input
    #[arg(required = true, num_args = 2.., value_name = "INPUT")]
    pub inputs: Vec<String>,

    /// Working buffer capacity per input, in bytes
    #[arg(short = 'b', long, default_value_t = DEFAULT_BUFFER_SIZE, value_name = "BYTES")]
    pub buffer_size: usize,

    /// Only report the pairs whose data matched
    #[arg(short = 'm', long)]
    pub only_matching: bool,

    /// Emit the verdict table as JSON on stdout
    #[arg(long)]
    pub json: bool,

    /// Disable the progress spinner
    #[arg(long)]
    pub no_progress: bool,
}

/// Global configuration for a compare run
#[derive(Debug, Clone)]
pub struct Config {
    /// Input identities, in comparison order
    pub inputs: Vec<String>,

    /// Working buffer capacity per input
    pub buffer_size: usize,

    /// Hide pairs that did not match in the report
    pub only_matching: bool,

    /// Machine-readable report
    pub json: bool,

    /// Suppress the progress display
    pub no_progress: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            inputs: Vec::new(),
            buffer_size: DEFAULT_BUFFER_SIZE,
            only_matching: false,
            json: false,
            no_progress: false,
        }
    }
}

impl Config {
    /// Validate configuration
    pub fn validate(&self) -> Result<(), CmpyError> {
        if self.inputs.len() < 2 {
            return Err(CmpyError::Config(
                "at least 2 inputs are required".to_string(),
            ));
        }

        if self.buffer_size == 0 {
            return Err(CmpyError::Config(
                "buffer size must be at least 1 byte".to_string(),
            ));
        }

        Ok(())
    }

    /// Whether the progress spinner should run. JSON output keeps stdout
    /// machine-readable, so it also suppresses the spinner.
    pub fn progress_enabled(&self) -> bool {
        !self.no_progress && !self.json
    }
}

impl TryFrom<Cli> for Config {
    type Error = CmpyError;

    fn try_from(cli: Cli) -> Result<Self, Self::Error> {
        let config = Config {
            inputs: cli.inputs,
            buffer_size: cli.buffer_size,
            only_matching: cli.only_matching,
            json: cli.json,
            no_progress: cli.no_progress,
        };

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_rejects_single_input() {
        let config = Config {
            inputs: vec!["only.bin".to_string()],
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_buffer() {
        let config = Config {
            inputs: vec!["a.bin".to_string(), "b.bin".to_string()],
            buffer_size: 0,
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_json_suppresses_progress() {
        let config = Config {
            inputs: vec!["a.bin".to_string(), "b.bin".to_string()],
            json: true,
            ..Config::default()
        };
        assert!(config.validate().is_ok());
        assert!(!config.progress_enabled());
    }
}
