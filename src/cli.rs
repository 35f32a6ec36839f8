use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Parser;
use log::LevelFilter;

#[derive(Debug, Clone, Parser)]
#[clap(bin_name = env!("CARGO_PKG_NAME"), version = env!("CARGO_PKG_VERSION"), about = env!("CARGO_PKG_DESCRIPTION"))]
pub struct Cli {
    /// Path to the configuration file
    #[clap(name = "config")]
    pub config: Option<PathBuf>,

    /// Open the calendar at this date (YYYY-MM-DD)
    #[clap(long)]
    pub date: Option<NaiveDate>,

    /// Log level used when RUST_LOG is not set
    #[clap(long, default_value = "info")]
    pub log_level: LevelFilter,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn everything_is_optional() {
        let cli = Cli::try_parse_from(["week-calendar"]).unwrap();

        assert_eq!(cli.config, None);
        assert_eq!(cli.date, None);
        assert_eq!(cli.log_level, LevelFilter::Info);
    }

    #[test]
    fn parses_date_and_config() {
        let cli = Cli::try_parse_from([
            "week-calendar",
            "calendar.toml",
            "--date",
            "2025-07-16",
            "--log-level",
            "debug",
        ])
        .unwrap();

        assert_eq!(cli.config, Some(PathBuf::from("calendar.toml")));
        assert_eq!(cli.date, NaiveDate::from_ymd_opt(2025, 7, 16));
        assert_eq!(cli.log_level, LevelFilter::Debug);
    }

    #[test]
    fn rejects_bad_dates() {
        assert!(Cli::try_parse_from(["week-calendar", "--date", "16.07.2025"]).is_err());
    }
}
