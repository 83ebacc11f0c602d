use chrono::Datelike;
use clap::{Args, Parser, Subcommand};
use regex::Regex;

use crate::config::{config_path, Config};
use crate::constants::MIN_YEAR;
use crate::external_api::spacex_api::SpacexApi;
use crate::external_api::ApiError;
use crate::filter::SortOrder;
use crate::launch_fetcher::LaunchFetcher;
use crate::logging::Verbosity;
use crate::{init_config, list_launches};

#[derive(Parser)]
#[command(
    name = "launches",
    version,
    about = "Browse rocket launches from the SpaceX REST API",
    long_about = None,
    propagate_version = true
)]
pub struct Cli {
    /// Show debug logs
    #[arg(long, short, global = true, conflicts_with = "quiet")]
    pub verbose: bool,
    /// Only log errors
    #[arg(long, short, global = true)]
    pub quiet: bool,
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn verbosity(&self) -> Verbosity {
        if self.verbose {
            Verbosity::Verbose
        } else if self.quiet {
            Verbosity::Quiet
        } else {
            Verbosity::Normal
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch and show launches
    List(ListArgs),
    /// Create the config file
    Init,
}

#[derive(Args, Debug, Default)]
pub struct ListArgs {
    /// Only launches from this year
    #[arg(long, short, value_parser = validate_year)]
    pub year: Option<String>,
    /// Only launches from the current year
    #[arg(long, short, conflicts_with = "year")]
    pub current_year: bool,
    /// Only launches with a confirmed success
    #[arg(long, short)]
    pub successful_only: bool,
    /// Order of the list
    #[arg(long, value_enum, default_value_t = SortOrder::Newest)]
    pub sort: SortOrder,
    /// Print the list as JSON
    #[arg(long)]
    pub json: bool,
}

impl ListArgs {
    pub fn year_filter(&self) -> Option<String> {
        if self.current_year {
            Some(current_year().to_string())
        } else {
            self.year.clone()
        }
    }
}

fn current_year() -> i32 {
    chrono::Local::now().year()
}

/// 4 digits, from `MIN_YEAR` up to the current year
fn validate_year(value: &str) -> Result<String, ApiError> {
    let max = current_year();
    let invalid = || ApiError::InvalidYear {
        value: value.to_string(),
        min: MIN_YEAR,
        max,
    };
    let regex = Regex::new(r"^\d{4}$").map_err(|e| ApiError::Parse(e.to_string()))?;
    if !regex.is_match(value) {
        return Err(invalid());
    }
    let year: i32 = value.parse().map_err(|_| invalid())?;
    if !(MIN_YEAR..=max).contains(&year) {
        return Err(invalid());
    }
    Ok(value.to_string())
}

pub async fn handle_command(
    cli: Cli,
    stdin: std::io::Stdin,
    stdout: std::io::Stdout,
) -> Result<(), ApiError> {
    let result = match &cli.command {
        Commands::List(args) => run_list(args, stdout).await,
        Commands::Init => match config_path() {
            Ok(path) => init_config(stdin.lock(), stdout, &path).map(|message| println!("{}", message)),
            Err(e) => Err(e),
        },
    };
    if let Err(e) = &result {
        match &cli.command {
            Commands::List(_) => eprintln!("Failed to list launches: {}", e),
            Commands::Init => eprintln!("Failed to create the config: {}", e),
        }
    }
    result
}

async fn run_list(args: &ListArgs, stdout: std::io::Stdout) -> Result<(), ApiError> {
    let config = Config::load()?;
    let fetcher = LaunchFetcher::new(SpacexApi::new(&config.api_base_url)?);
    list_launches(args, &fetcher, stdout.lock()).await?;
    Ok(())
}

#[cfg(test)]
mod tests {

    use super::*;
    use clap::Parser;
    use rstest::rstest;

    #[rstest]
    #[case("-y")]
    #[case("--year")]
    fn test_list_command_year(#[case] flag: &str) {
        let args = Cli::parse_from(["launches", "list", flag, "2020"]);
        match args.command {
            Commands::List(value) => {
                assert_eq!(value.year.as_deref(), Some("2020"));
                assert_eq!(value.year_filter().as_deref(), Some("2020"));
                assert!(!value.successful_only);
                assert_eq!(value.sort, SortOrder::Newest);
                assert!(!value.json);
            }
            _ => panic!("Expected list command"),
        }
    }

    #[test]
    fn test_list_command_all_flags() {
        let args = Cli::parse_from([
            "launches", "list", "-s", "--sort", "source", "--json", "-v",
        ]);
        assert_eq!(args.verbosity(), Verbosity::Verbose);
        match args.command {
            Commands::List(value) => {
                assert_eq!(value.year_filter(), None);
                assert!(value.successful_only);
                assert_eq!(value.sort, SortOrder::Source);
                assert!(value.json);
            }
            _ => panic!("Expected list command"),
        }
    }

    #[test]
    fn test_list_command_current_year() {
        let args = Cli::parse_from(["launches", "list", "--current-year"]);
        match args.command {
            Commands::List(value) => {
                assert_eq!(value.year_filter(), Some(current_year().to_string()));
            }
            _ => panic!("Expected list command"),
        }
    }

    #[test]
    fn test_year_and_current_year_conflict() {
        let result = Cli::try_parse_from(["launches", "list", "-y", "2020", "-c"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_verbose_and_quiet_conflict() {
        let result = Cli::try_parse_from(["launches", "-v", "-q", "list"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_quiet_verbosity() {
        let args = Cli::parse_from(["launches", "init", "-q"]);
        assert_eq!(args.verbosity(), Verbosity::Quiet);
        assert!(matches!(args.command, Commands::Init));
    }

    #[rstest]
    #[case("2006")]
    #[case("2020")]
    fn test_validate_year_positive(#[case] value: &str) {
        assert_eq!(validate_year(value).unwrap(), value);
    }

    #[test]
    fn test_validate_current_year() {
        let year = current_year().to_string();
        assert_eq!(validate_year(&year).unwrap(), year);
    }

    #[rstest]
    #[case("")]
    #[case("20")]
    #[case("2005")]
    #[case("20201")]
    #[case("abcd")]
    #[case("-2020")]
    #[case("9999")]
    fn test_validate_year_negative(#[case] value: &str) {
        let result = validate_year(value);
        assert!(matches!(result, Err(ApiError::InvalidYear { .. })));
    }

    #[rstest]
    #[case("-h")]
    #[case("--help")]
    fn test_help_output(#[case] flag: &str) {
        let mut cmd = assert_cmd::Command::cargo_bin("launches").unwrap();
        cmd.arg(flag)
            .assert()
            .success()
            .stdout(predicates::str::contains("Browse rocket launches from the SpaceX REST API"))
            .stdout(predicates::str::contains("list  Fetch and show launches"))
            .stdout(predicates::str::contains("init  Create the config file"));
    }

    #[test]
    fn test_list_help_output() {
        let mut cmd = assert_cmd::Command::cargo_bin("launches").unwrap();
        cmd.args(["list", "--help"])
            .assert()
            .success()
            .stdout(predicates::str::contains("--year <YEAR>"))
            .stdout(predicates::str::contains("--successful-only"))
            .stdout(predicates::str::contains("--current-year"))
            .stdout(predicates::str::contains("newest"))
            .stdout(predicates::str::contains("source"));
    }

    #[rstest]
    #[case("1999")]
    #[case("20x0")]
    #[case("9999")]
    fn test_list_rejects_invalid_year(#[case] year: &str) {
        let mut cmd = assert_cmd::Command::cargo_bin("launches").unwrap();
        cmd.args(["list", "--year", year])
            .assert()
            .failure()
            .stderr(predicates::str::contains("Year must be a 4-digit number between 2006 and"));
    }

    #[test]
    fn test_missing_subcommand() {
        let mut cmd = assert_cmd::Command::cargo_bin("launches").unwrap();
        cmd.assert()
            .failure()
            .stderr(predicates::str::contains("Usage: launches"));
    }
}
