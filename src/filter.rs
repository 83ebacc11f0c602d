use clap::ValueEnum;

use crate::external_api::spacex_api::models::launch::Launch;

/// Year and success-only selection over an already fetched list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LaunchFilter {
    pub year: Option<String>,
    pub success_only: bool,
}

impl LaunchFilter {
    pub fn new(year: Option<String>, success_only: bool) -> Self {
        Self { year, success_only }
    }

    pub fn matches(&self, launch: &Launch) -> bool {
        let year_matches = match &self.year {
            Some(year) => launch.year() == Some(year.as_str()),
            None => true,
        };
        // Unknown outcome counts as "not successful" here, never as a failure
        let success_matches = !self.success_only || launch.success == Some(true);
        year_matches && success_matches
    }

    /// Matching launches in source order
    pub fn apply(&self, launches: &[Launch]) -> Vec<Launch> {
        launches
            .iter()
            .filter(|launch| self.matches(launch))
            .cloned()
            .collect()
    }
}

/// Display order of the list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum SortOrder {
    /// Latest launch first
    #[default]
    Newest,
    /// Earliest launch first
    Oldest,
    /// As returned by the API
    Source,
}

impl SortOrder {
    pub fn sort(self, launches: &mut [Launch]) {
        match self {
            SortOrder::Newest => {
                launches.sort_by(|a, b| b.launch_time_utc.cmp(&a.launch_time_utc))
            }
            SortOrder::Oldest => {
                launches.sort_by(|a, b| a.launch_time_utc.cmp(&b.launch_time_utc))
            }
            SortOrder::Source => {}
        }
    }
}
