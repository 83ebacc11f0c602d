use std::io::{BufRead, Write};
use std::path::Path;

use crate::config::Config;
use crate::constants::Message;
use crate::external_api::ApiError;

/// Ask for the config values and write them to `path_to_config`
pub fn init_config<R, W>(input: R, output: W, path_to_config: &Path) -> Result<String, ApiError>
where
    R: BufRead,
    W: Write,
{
    let config = Config::new(input, output)?;
    config.save(path_to_config)?;
    tracing::info!(path = %path_to_config.display(), "Config saved");
    Ok(Message::ConfigSaved(path_to_config.display().to_string()).to_formatted_string())
}
