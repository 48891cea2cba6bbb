//! Init command implementation
//!
//! Writes a starter configuration file.

use super::exit_code;
use clap::Args;
use std::fs;
use std::path::Path;

const TEMPLATE: &str = r#"# Cosmos Bootstrap configuration

[application]
# trace, debug, info, warn, error
log_level = "info"

[cosmos]
database_id = "AppDb"
account_url = "https://your-account.documents.azure.com:443/"
# Read from the environment; never commit the key itself
auth_key = "${COSMOS_AUTH_KEY}"

[logging]
local_enabled = false
local_path = "./logs"
# daily or hourly
local_rotation = "daily"
"#;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = "bootstrap.toml")]
    pub output: String,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output, "Initializing configuration file");

        if Path::new(&self.output).exists() && !self.force {
            println!("❌ Configuration file already exists: {}", self.output);
            println!("   Use --force to overwrite");
            return Ok(exit_code::CONFIGURATION);
        }

        match fs::write(&self.output, TEMPLATE) {
            Ok(_) => {
                println!("✅ Configuration file created: {}", self.output);
                println!();
                println!("Next steps:");
                println!("  1. Edit {} with your account URL and database", self.output);
                println!("  2. Set COSMOS_AUTH_KEY (or add it to a .env file)");
                println!("  3. Validate configuration: cosmos-bootstrap validate-config");
                println!("  4. Ensure collections: cosmos-bootstrap ensure <COLLECTION>...");
                println!();
                Ok(exit_code::SUCCESS)
            }
            Err(e) => {
                println!("❌ Failed to write configuration file");
                println!("   Error: {e}");
                Ok(exit_code::FATAL)
            }
        }
    }
}
