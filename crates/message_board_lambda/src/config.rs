use thiserror::Error;

pub const TABLE_NAME_ENV: &str = "TABLE_NAME";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("TABLE_NAME must be configured")]
    MissingTableName,
    #[error("TABLE_NAME cannot be empty")]
    EmptyTableName,
}

/// Startup configuration naming the backing table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageTableConfig {
    pub table_name: String,
}

impl MessageTableConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let raw = lookup(TABLE_NAME_ENV).ok_or(ConfigError::MissingTableName)?;
        let table_name = raw.trim();
        if table_name.is_empty() {
            return Err(ConfigError::EmptyTableName);
        }

        Ok(Self {
            table_name: table_name.to_string(),
        })
    }
}
