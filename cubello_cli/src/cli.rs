//! Command-line options.

use clap::{Parser, ValueEnum};

/// Play 4x4x4 Reversi in the terminal, one command per line on stdin.
#[derive(Parser, Debug)]
#[command(name = "cubello")]
#[command(about = "Terminal front end for the 4x4x4 Reversi rules engine", long_about = None)]
#[command(version)]
pub struct Args {
    /// Log output format (logs go to stderr)
    #[arg(long, value_enum, default_value_t = LogFormat::Pretty)]
    pub log_format: LogFormat,

    /// Log filter directive, used when RUST_LOG is not set
    #[arg(long, default_value = "warn")]
    pub log_level: String,

    /// Start with legal-move markers shown on the board
    #[arg(long)]
    pub hints: bool,
}

/// How tracing events are written.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum LogFormat {
    /// Human-readable lines
    Pretty,
    /// One JSON object per event
    Json,
}

#[cfg(test)]
mod tests {
    use super::{Args, LogFormat};
    use clap::Parser;

    #[test]
    fn defaults() {
        let args = Args::parse_from(["cubello"]);
        assert_eq!(args.log_format, LogFormat::Pretty);
        assert_eq!(args.log_level, "warn");
        assert!(!args.hints);
    }

    #[test]
    fn json_logging_with_hints() {
        let args = Args::parse_from(["cubello", "--log-format", "json", "--log-level", "debug", "--hints"]);
        assert_eq!(args.log_format, LogFormat::Json);
        assert_eq!(args.log_level, "debug");
        assert!(args.hints);
    }
}
