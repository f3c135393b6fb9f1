//! Command-line arguments.

use clap::Parser;
use std::path::PathBuf;

use marquee_render::OutputFormat;

use crate::config::{FailurePolicy, MarqueeConfig};

#[derive(Parser, Debug, Clone)]
#[command(author, version, long_about = None)]
#[command(name = "marquee")]
#[command(about = "Prints billing statements for theatre performances")]
pub struct Args {
    /// Plays file: a JSON object mapping play ids to {name, type}
    #[arg(long, env = "MARQUEE_PLAYS", required_unless_present = "gen_config")]
    pub plays: Option<PathBuf>,

    /// Invoices file: a JSON list of invoices (or a single invoice object)
    #[arg(long, env = "MARQUEE_INVOICES", required_unless_present = "gen_config")]
    pub invoices: Option<PathBuf>,

    /// Output format: text, html or json
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Configuration file path
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// What to do with an invoice that cannot be priced: abort or skip
    #[arg(long)]
    pub on_error: Option<FailurePolicy>,

    /// Log filter directive (e.g. "marquee_core=debug")
    #[arg(long)]
    pub log: Option<String>,

    /// Print a sample configuration file and exit
    #[arg(long)]
    pub gen_config: bool,
}

impl MarqueeConfig {
    /// Applies command-line flags, the highest-priority source.
    pub fn apply_args(&mut self, args: &Args) {
        if let Some(format) = args.format {
            self.output.format = format;
        }
        if let Some(policy) = args.on_error {
            self.billing.on_error = policy;
        }
        if let Some(filter) = &args.log {
            self.logging.filter = filter.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_args_are_well_formed() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_parse_full_command_line() {
        let args = Args::try_parse_from([
            "marquee",
            "--plays",
            "plays.json",
            "--invoices",
            "invoices.json",
            "--format",
            "html",
            "--on-error",
            "skip",
        ])
        .unwrap();

        assert_eq!(args.plays, Some(PathBuf::from("plays.json")));
        assert_eq!(args.invoices, Some(PathBuf::from("invoices.json")));
        assert_eq!(args.format, Some(OutputFormat::Html));
        assert_eq!(args.on_error, Some(FailurePolicy::Skip));
        assert!(!args.gen_config);
    }

    #[test]
    fn test_unknown_format_rejected() {
        let result = Args::try_parse_from([
            "marquee",
            "--plays",
            "p.json",
            "--invoices",
            "i.json",
            "--format",
            "pdf",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_gen_config_needs_no_inputs() {
        let args = Args::try_parse_from(["marquee", "--gen-config"]).unwrap();
        assert!(args.gen_config);
        assert!(args.plays.is_none());
    }

    #[test]
    fn test_flags_override_config() {
        let args = Args::try_parse_from([
            "marquee",
            "--plays",
            "p.json",
            "--invoices",
            "i.json",
            "--format",
            "json",
            "--log",
            "debug",
        ])
        .unwrap();

        let mut config = MarqueeConfig::default();
        config.billing.on_error = FailurePolicy::Skip;
        config.apply_args(&args);

        assert_eq!(config.output.format, OutputFormat::Json);
        assert_eq!(config.billing.on_error, FailurePolicy::Skip);
        assert_eq!(config.logging.filter, "debug");
    }
}
