use std::path::PathBuf;

/// Application configuration, read from the environment.
pub struct AppConfig {
    /// Directory holding the persisted JSON documents.
    pub data_dir: PathBuf,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let data_dir =
            std::env::var("SHOPPING_DATA_DIR").unwrap_or_else(|_| "./data".to_string());

        Self {
            data_dir: PathBuf::from(data_dir),
        }
    }
}
