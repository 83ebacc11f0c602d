use serde::{Deserialize, Serialize};

/// One launch from `GET /launches`
///
/// Fields the API sends beyond these are ignored on decode.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Launch {
    pub id: String,
    pub name: String,
    /// Timestamp exactly as the API sent it, e.g. `2020-01-07T02:19:00.000Z`
    #[serde(rename = "date_utc")]
    pub launch_time_utc: String,
    pub details: Option<String>,
    /// `None` means the outcome is unknown, which is not a failure
    pub success: Option<bool>,
}

impl Launch {
    /// First four characters of the timestamp
    pub fn year(&self) -> Option<&str> {
        self.launch_time_utc.get(..4)
    }

    #[cfg(test)]
    pub fn new_test(id: &str, launch_time_utc: &str, success: Option<bool>) -> Self {
        Self {
            id: id.to_string(),
            name: format!("Launch {id}"),
            launch_time_utc: launch_time_utc.to_string(),
            details: None,
            success,
        }
    }
}
