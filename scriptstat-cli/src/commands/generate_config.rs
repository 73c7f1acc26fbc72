//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::fs;
use std::path::PathBuf;

use crate::config::CliConfig;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        println!("Generating configuration template...");
        println!("  Output file: {}", self.output.display());

        fs::write(&self.output, CliConfig::template())
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Edit the file to change the counting unit or output defaults");
        println!("2. Validate your configuration:");
        println!("   scriptstat validate -c {}", self.output.display());
        println!("3. Use it for analysis:");
        println!(
            "   scriptstat analyze -i input.txt -c {}",
            self.output.display()
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_generate_config_args_debug() {
        let args = GenerateConfigArgs {
            output: PathBuf::from("scriptstat.toml"),
        };

        let debug_str = format!("{:?}", args);
        assert!(debug_str.contains("GenerateConfigArgs"));
        assert!(debug_str.contains("scriptstat.toml"));
    }

    #[test]
    fn test_execute_success() {
        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("scriptstat.toml");

        let args = GenerateConfigArgs {
            output: output_path.clone(),
        };

        assert!(args.execute().is_ok());

        let content = fs::read_to_string(&output_path).unwrap();
        assert!(content.contains("[analysis]"));
        assert!(content.contains("counting_unit = \"code-units\""));
        assert!(CliConfig::from_file(&output_path).is_ok());
    }

    #[test]
    fn test_execute_unwritable_path() {
        let temp_dir = TempDir::new().unwrap();
        let args = GenerateConfigArgs {
            output: temp_dir.path().join("missing").join("scriptstat.toml"),
        };

        let err = args.execute().unwrap_err();
        assert!(err.to_string().contains("Failed to write to"));
    }
}
