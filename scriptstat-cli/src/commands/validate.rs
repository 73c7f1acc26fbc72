//! Validate command implementation

use anyhow::Result;
use clap::Args;
use scriptstat_api::config::counting_unit_name;
use std::path::PathBuf;

use crate::config::CliConfig;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to the configuration file to validate
    #[arg(short = 'c', long, value_name = "FILE", required = true)]
    pub config: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        println!("Validating configuration: {}", self.config.display());

        let config = match CliConfig::from_file(&self.config) {
            Ok(config) => config,
            Err(e) => {
                println!("✗ Configuration is invalid!");
                println!("  Error: {e:#}");
                return Err(anyhow::anyhow!("Validation failed: {:#}", e));
            }
        };

        let api = config.api_config()?;
        let format = config.default_format()?;

        println!("✓ Configuration is valid!");
        println!("  Counting unit: {}", counting_unit_name(api.counting_unit()));
        println!("  Detect encoding: {}", api.detect_encoding());
        println!("  Lossy UTF-8: {}", api.lossy_utf8());
        println!("  Default format: {}", format.as_str());
        println!("  Pretty JSON: {}", config.output.pretty_json);
        match config.performance.worker_threads {
            0 => println!("  Worker threads: auto ({})", num_cpus::get()),
            n => println!("  Worker threads: {n}"),
        }

        Ok(())
    }
}
