use clap::Parser;

/// Command-line flags. Storage settings come from the environment, see
/// [`crate::config::load_config`].
#[derive(Debug, Clone, Parser)]
#[command(name = "s3-file-fetcher")]
#[command(about = "Fetch a single object from S3 and print its content")]
pub struct CliArgs {
    #[arg(long, short, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,
}
