use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

// ============================================================================
// CLI Argument Parsing (clap derive)
// ============================================================================

#[derive(Parser, Debug)]
#[command(
    name = "contact-page",
    version,
    about = "Contact page interaction harness"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Submission endpoint URL (overrides config file)
    #[arg(long, global = true)]
    pub endpoint: Option<String>,

    /// Path to config file (default: contact-page.yaml in current dir)
    #[arg(long, global = true)]
    pub config: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fill the contact form and drive one submission end to end
    Submit {
        /// Value for the full_name field
        #[arg(long, default_value = "Jane Doe")]
        full_name: String,

        /// Value for the email field
        #[arg(long, default_value = "user@example.com")]
        email: String,

        /// Value for the phone field
        #[arg(long, default_value = "555-0100")]
        phone: String,

        /// Value for the message field
        #[arg(long, default_value = "Hello from the harness")]
        message: String,

        /// Transport: http or mock
        #[arg(long)]
        transport: Option<String>,
    },

    /// Exercise the dialog, accordion and slider and print state transitions
    Smoke,
}

// ============================================================================
// Config File Model (optional YAML)
// ============================================================================

/// Optional YAML config file: `contact-page.yaml`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub endpoint: Option<String>,

    #[serde(default = "default_http")]
    pub transport: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            transport: "http".to_string(),
        }
    }
}

// Serde default helper
fn default_http() -> String {
    "http".to_string()
}

// ============================================================================
// Config File Loading
// ============================================================================

/// Load config from a YAML file. Returns defaults if file is missing or malformed.
pub fn load_config(path: Option<&str>) -> AppConfig {
    let config_path = path.unwrap_or("contact-page.yaml");
    match std::fs::read_to_string(config_path) {
        Ok(content) => serde_yaml::from_str(&content).unwrap_or_default(),
        Err(_) => AppConfig::default(),
    }
}
