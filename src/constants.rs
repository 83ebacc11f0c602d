pub const CONFIG_DIR: &str = ".config/launches";
pub const CONFIG_FILE_NAME: &str = "config.json";
pub const API_URL_ENV: &str = "LAUNCHES_API_URL";
/// Earliest year accepted by `--year`
pub const MIN_YEAR: i32 = 2006;

/// Standard message
#[derive(Debug)]
pub enum Message {
    SelectedYear(Option<String>),
    Loading,
    NoDetails,
    Outcome(bool),
    LaunchCount(usize),
    EnterApiBaseUrl(String),
    ConfigSaved(String),
}

impl Message {
    pub fn to_formatted_string(&self) -> String {
        match self {
            Message::SelectedYear(Some(year)) => format!("Selected year: {}", year),
            Message::SelectedYear(None) => "Selected year: all".to_string(),
            Message::Loading => "Loading...".to_string(),
            Message::NoDetails => "No details available".to_string(),
            Message::Outcome(true) => "Success".to_string(),
            Message::Outcome(false) => "Failure".to_string(),
            Message::LaunchCount(count) => format!("Launches shown: {}", count),
            Message::EnterApiBaseUrl(default) => {
                format!("Enter the url of the launches API [{}]: ", default)
            }
            Message::ConfigSaved(path) => format!("Config saved: {}", path),
        }
    }
}
