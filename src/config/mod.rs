use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    /// Server bind address (e.g., "0.0.0.0:3000").
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,

    /// Path to the wine list JSON document.
    #[serde(default = "default_wines_path")]
    pub wines_path: String,

    /// Path to a winery table JSON document. The built-in table is used when unset.
    pub wineries_path: Option<String>,
}

fn default_bind_addr() -> String {
    "0.0.0.0:3000".to_string()
}

fn default_wines_path() -> String {
    "data/wines.json".to_string()
}

impl AppConfig {
    pub fn from_env() -> Result<Self, envy::Error> {
        dotenvy::dotenv().ok();
        envy::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_apply() {
        let config: AppConfig = envy::from_iter(Vec::<(String, String)>::new()).unwrap();
        assert_eq!(config.bind_addr, "0.0.0.0:3000");
        assert_eq!(config.wines_path, "data/wines.json");
        assert!(config.wineries_path.is_none());
    }

    #[test]
    fn test_overrides_from_environment() {
        let config: AppConfig = envy::from_iter(vec![
            ("BIND_ADDR".to_string(), "127.0.0.1:8080".to_string()),
            ("WINERIES_PATH".to_string(), "/srv/wineries.json".to_string()),
        ])
        .unwrap();
        assert_eq!(config.bind_addr, "127.0.0.1:8080");
        assert_eq!(config.wineries_path.as_deref(), Some("/srv/wineries.json"));
    }
}
