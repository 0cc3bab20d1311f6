//! CLI argument definitions using clap derive macros.

use std::net::SocketAddr;

use clap::Parser;

use speech_evaluator_core::fetch::constants::{
    CONNECT_TIMEOUT_SECS, MAX_BODY_BYTES, REQUEST_TIMEOUT_SECS,
};
use speech_evaluator_core::{DEFAULT_CONCURRENCY, DEFAULT_EVALUATION_YEAR, DEFAULT_TOPIC};

/// Aggregate political speech statistics from remote CSV files.
///
/// Serves `GET /evaluation?url=...&url=...`, downloading every CSV in
/// parallel and reporting who spoke most in a year, most on a topic, and
/// least overall.
#[derive(Parser, Debug)]
#[command(name = "speech-evaluator")]
#[command(author, version, about)]
pub struct Args {
    /// Increase output verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(short, long)]
    pub quiet: bool,

    /// Address to listen on
    #[arg(short, long, default_value = "127.0.0.1:8080")]
    pub bind: SocketAddr,

    /// Maximum concurrent CSV downloads across all requests (1-100)
    #[arg(short = 'c', long, default_value_t = DEFAULT_CONCURRENCY as u8, value_parser = clap::value_parser!(u8).range(1..=100))]
    pub concurrency: u8,

    /// Connect timeout for CSV downloads in seconds (1-3600)
    #[arg(long, default_value_t = CONNECT_TIMEOUT_SECS, value_parser = clap::value_parser!(u64).range(1..=3600))]
    pub connect_timeout: u64,

    /// Whole-request timeout for CSV downloads in seconds (1-3600)
    #[arg(long, default_value_t = REQUEST_TIMEOUT_SECS, value_parser = clap::value_parser!(u64).range(1..=3600))]
    pub request_timeout: u64,

    /// Largest accepted CSV body in bytes
    #[arg(long, default_value_t = MAX_BODY_BYTES as u64, value_parser = clap::value_parser!(u64).range(1..))]
    pub max_body_bytes: u64,

    /// Year counted by the "mostSpeeches" statistic
    #[arg(long, default_value_t = DEFAULT_EVALUATION_YEAR)]
    pub year: i32,

    /// Topic counted by the "mostSecurity" statistic
    #[arg(long, default_value = DEFAULT_TOPIC)]
    pub topic: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_default_args_parses_successfully() {
        let args = Args::try_parse_from(["speech-evaluator"]).unwrap();
        assert_eq!(args.verbose, 0);
        assert!(!args.quiet);
        assert_eq!(args.bind, "127.0.0.1:8080".parse::<SocketAddr>().unwrap());
        assert_eq!(args.concurrency, 10); // DEFAULT_CONCURRENCY
        assert_eq!(args.connect_timeout, 10);
        assert_eq!(args.request_timeout, 30);
        assert_eq!(args.max_body_bytes, 16 * 1024 * 1024);
        assert_eq!(args.year, 2013);
        assert_eq!(args.topic, "Internal Security");
    }

    #[test]
    fn test_cli_verbose_flag_increments_count() {
        let args = Args::try_parse_from(["speech-evaluator", "-v"]).unwrap();
        assert_eq!(args.verbose, 1);

        let args = Args::try_parse_from(["speech-evaluator", "-vv"]).unwrap();
        assert_eq!(args.verbose, 2);
    }

    #[test]
    fn test_cli_quiet_flag_sets_quiet() {
        let args = Args::try_parse_from(["speech-evaluator", "--quiet"]).unwrap();
        assert!(args.quiet);
    }

    #[test]
    fn test_cli_help_flag_shows_usage() {
        let err = Args::try_parse_from(["speech-evaluator", "--help"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_cli_invalid_flag_returns_error() {
        let err = Args::try_parse_from(["speech-evaluator", "--invalid-flag"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::UnknownArgument);
    }

    #[test]
    fn test_cli_bind_accepts_socket_address() {
        let args = Args::try_parse_from(["speech-evaluator", "-b", "0.0.0.0:9000"]).unwrap();
        assert_eq!(args.bind.port(), 9000);
    }

    #[test]
    fn test_cli_bind_rejects_garbage() {
        let err = Args::try_parse_from(["speech-evaluator", "--bind", "localhost"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
    }

    // ==================== Concurrency Tests ====================

    #[test]
    fn test_cli_concurrency_bounds() {
        let args = Args::try_parse_from(["speech-evaluator", "-c", "1"]).unwrap();
        assert_eq!(args.concurrency, 1);

        let args = Args::try_parse_from(["speech-evaluator", "--concurrency", "100"]).unwrap();
        assert_eq!(args.concurrency, 100);
    }

    #[test]
    fn test_cli_concurrency_out_of_range_rejected() {
        for value in ["0", "101"] {
            let err = Args::try_parse_from(["speech-evaluator", "-c", value]).unwrap_err();
            assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
        }
    }

    // ==================== Timeout Tests ====================

    #[test]
    fn test_cli_timeouts_override() {
        let args = Args::try_parse_from([
            "speech-evaluator",
            "--connect-timeout",
            "5",
            "--request-timeout",
            "120",
        ])
        .unwrap();
        assert_eq!(args.connect_timeout, 5);
        assert_eq!(args.request_timeout, 120);
    }

    #[test]
    fn test_cli_timeout_zero_rejected() {
        let err =
            Args::try_parse_from(["speech-evaluator", "--request-timeout", "0"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
    }

    // ==================== Criteria Tests ====================

    #[test]
    fn test_cli_year_and_topic_override() {
        let args = Args::try_parse_from([
            "speech-evaluator",
            "--year",
            "2012",
            "--topic",
            "Coal Subsidies",
        ])
        .unwrap();
        assert_eq!(args.year, 2012);
        assert_eq!(args.topic, "Coal Subsidies");
    }
}
