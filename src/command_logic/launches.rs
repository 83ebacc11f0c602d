use std::io::Write;

use crate::cli_app::ListArgs;
use crate::constants::Message;
use crate::external_api::spacex_api::models::launch::Launch;
use crate::external_api::ApiError;
use crate::filter::LaunchFilter;
use crate::launch_fetcher::LaunchFetcher;

/// Fetch launches and write them to `output`
///
/// Returns the number of launches written.
pub async fn list_launches<W>(
    args: &ListArgs,
    fetcher: &LaunchFetcher,
    mut output: W,
) -> Result<usize, ApiError>
where
    W: Write,
{
    let year = args.year_filter();
    if !args.json {
        writeln!(output, "{}", Message::SelectedYear(year.clone()).to_formatted_string())?;
    }

    let handle = fetcher.fetch_launches(year.clone());
    if !args.json && fetcher.state().is_loading {
        writeln!(output, "{}", Message::Loading.to_formatted_string())?;
        output.flush()?;
    }
    handle.await.map_err(|e| ApiError::Task(e.to_string()))?;

    let state = fetcher.state();
    if let Some(error) = state.last_error {
        return Err(ApiError::FetchFailed(error));
    }

    let mut launches = LaunchFilter::new(year, args.successful_only).apply(&state.launches);
    args.sort.sort(&mut launches);

    if args.json {
        serde_json::to_writer_pretty(&mut output, &launches)?;
        writeln!(output)?;
    } else {
        for launch in &launches {
            write!(output, "{}", render_launch(launch))?;
        }
        writeln!(output, "{}", Message::LaunchCount(launches.len()).to_formatted_string())?;
    }
    output.flush()?;
    Ok(launches.len())
}

/// Text block for one launch, blank line after it
pub fn render_launch(launch: &Launch) -> String {
    let details = launch
        .details
        .clone()
        .unwrap_or_else(|| Message::NoDetails.to_formatted_string());
    let mut block = format!(
        "{}\n  {}\n  {}\n",
        launch.name, launch.launch_time_utc, details
    );
    if let Some(success) = launch.success {
        block.push_str(&format!("  {}\n", Message::Outcome(success).to_formatted_string()));
    }
    block.push('\n');
    block
}
