//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        use std::fs;

        let template = Self::template();
        let Some(output) = &self.output else {
            print!("{template}");
            return Ok(());
        };

        fs::write(output, template)
            .with_context(|| format!("Failed to write to {}", output.display()))?;

        println!("✓ Configuration template written to {}", output.display());
        println!();
        println!("Use it with:");
        println!("   tally reduce -i input.txt --config {}", output.display());

        Ok(())
    }

    /// Commented configuration holding every default value
    pub fn template() -> &'static str {
        r#"# Tally configuration

[processing]
# Reducer used when --reducer is not given: chars, words, lines, sum or stats
default_reducer = "words"

# adaptive picks parallel reduction once an input reaches parallel_threshold
# elements; sequential and parallel force one strategy
execution_mode = "adaptive"

[output]
# text or json
default_format = "text"

# Attach mode, timing and thread count to every report
include_metadata = false

# Indent JSON output
pretty_json = true

[performance]
# Minimum element count before adaptive mode goes parallel
parallel_threshold = 10000

# Elements per shard; 0 splits each input into one shard per worker
shard_size = 0

# Worker threads; 0 uses every core
worker_threads = 0
"#
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CliConfig;
    use tempfile::TempDir;

    #[test]
    fn test_template_matches_defaults() {
        let config: CliConfig = toml::from_str(GenerateConfigArgs::template()).unwrap();
        assert_eq!(config, CliConfig::default());
    }

    #[test]
    fn test_write_template() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("tally.toml");

        let args = GenerateConfigArgs {
            output: Some(path.clone()),
        };
        args.execute().unwrap();

        let loaded = CliConfig::load(&path).unwrap();
        assert_eq!(loaded.processing.default_reducer, "words");
    }
}
