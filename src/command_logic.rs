pub mod launches;
pub mod setup;
