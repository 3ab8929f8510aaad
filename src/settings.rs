use serde::{Deserialize, Serialize};
use std::{env, io, path::PathBuf};
use tokio::fs;
use tracing::{debug, error};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
struct SettingsFile {
    #[serde(rename = "messageCount", default, skip_serializing_if = "Option::is_none")]
    message_count: Option<StoredCount>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum StoredCount {
    Number(i64),
    Text(String),
}

impl StoredCount {
    fn as_count(&self) -> Option<i64> {
        match self {
            StoredCount::Number(value) => Some(*value),
            StoredCount::Text(raw) => raw.trim().parse().ok(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub async fn load(&self) -> Option<i64> {
        let file = match fs::read(&self.path).await {
            Ok(bytes) => match serde_json::from_slice::<SettingsFile>(&bytes) {
                Ok(file) => file,
                Err(err) => {
                    error!("failed to parse settings file: {err}");
                    return None;
                }
            },
            Err(err) if err.kind() == io::ErrorKind::NotFound => return None,
            Err(err) => {
                error!("failed to read settings file: {err}");
                return None;
            }
        };

        file.message_count.as_ref().and_then(StoredCount::as_count)
    }

    pub async fn save(&self, value: i64) -> io::Result<()> {
        let file = SettingsFile {
            message_count: Some(StoredCount::Number(value)),
        };
        let payload = serde_json::to_vec_pretty(&file)
            .map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))?;
        fs::write(&self.path, payload).await?;
        debug!("saved messageCount={value}");
        Ok(())
    }
}

pub fn resolve_settings_path() -> PathBuf {
    if let Ok(path) = env::var("APP_SETTINGS_PATH") {
        return PathBuf::from(path);
    }

    PathBuf::from("data/settings.json")
}
