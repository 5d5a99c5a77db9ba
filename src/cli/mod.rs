use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

pub mod build;
pub mod config;
pub mod init_config;
pub mod keygen;
pub mod proof_id;
pub mod version;

use config::StakeProofConfig;

#[derive(Parser)]
#[command(name = "stakeproof")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Build signed stake proofs", long_about = None)]
pub struct Cli {
    /// Path to config file (default: ~/.config/stakeproof/config.toml)
    #[arg(long, global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build and sign a proof from a JSON request
    Build {
        /// Path to the request file ("-" for stdin)
        #[arg(long)]
        request: String,

        /// Write the proof here instead of stdout
        #[arg(long)]
        output: Option<String>,
    },

    /// Print the id a request would produce, without signing
    ProofId {
        /// Path to the request file ("-" for stdin)
        #[arg(long)]
        request: String,
    },

    /// Generate a fresh private key
    Keygen,

    /// Write a default config file
    InitConfig {
        /// Where to write it (default: the default config path)
        #[arg(long)]
        path: Option<String>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Display version information
    Version,
}

pub fn execute(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = match cli.command {
        Commands::Build { .. } | Commands::ProofId { .. } => {
            StakeProofConfig::resolve(cli.config.as_deref().map(std::path::Path::new))?
        }
        _ => StakeProofConfig::default(),
    };
    init_logging(&config.logging.level);

    match cli.command {
        Commands::Build { request, output } => build::execute(&config, request, output),
        Commands::ProofId { request } => proof_id::execute(&config, request),
        Commands::Keygen => {
            keygen::execute();
            Ok(())
        }
        Commands::InitConfig { path, force } => init_config::execute(path, force),
        Commands::Version => {
            version::execute();
            Ok(())
        }
    }
}

/// Install the stderr log subscriber. `RUST_LOG` takes precedence over `level`.
fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    // A subscriber may already be installed (tests); keep the existing one
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Read a request document from a file, or stdin for "-".
pub(crate) fn read_input(path: &str) -> Result<String, Box<dyn std::error::Error>> {
    if path == "-" {
        let mut contents = String::new();
        std::io::Read::read_to_string(&mut std::io::stdin(), &mut contents)?;
        Ok(contents)
    } else {
        std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read request file '{}': {}", path, e).into())
    }
}
