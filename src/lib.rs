pub mod cli_app;
pub mod command_logic;
pub mod config;
pub mod constants;
pub mod external_api;
pub mod filter;
pub mod launch_fetcher;
pub mod logging;

pub use command_logic::launches::list_launches;
pub use command_logic::setup::init_config;
pub use external_api::spacex_api::models::launch::Launch;
pub use external_api::spacex_api::SpacexApi;
pub use external_api::ApiError;
pub use filter::{LaunchFilter, SortOrder};
pub use launch_fetcher::{LaunchFetcher, LaunchState};
