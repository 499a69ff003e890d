/// Storefront configuration from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub mount_id: String,
    pub print_html: bool,
}

impl Config {
    /// Load configuration from environment variables.
    /// STOREFRONT_MOUNT_ID defaults to "app", STOREFRONT_PRINT_HTML to true.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mount_id = std::env::var("STOREFRONT_MOUNT_ID").unwrap_or_else(|_| "app".to_string());
        if mount_id.trim().is_empty() {
            return Err(ConfigError::Invalid("STOREFRONT_MOUNT_ID", "must not be empty"));
        }

        let print_html = match std::env::var("STOREFRONT_PRINT_HTML") {
            Ok(v) => parse_bool(&v).ok_or(ConfigError::Invalid(
                "STOREFRONT_PRINT_HTML",
                "must be one of true, false, 1, 0",
            ))?,
            Err(_) => true,
        };

        Ok(Config {
            mount_id,
            print_html,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            mount_id: "app".to_string(),
            print_html: true,
        }
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" => Some(true),
        "false" | "0" => Some(false),
        _ => None,
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Invalid(&'static str, &'static str),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Invalid(var, msg) => write!(f, "Invalid value for {}: {}", var, msg),
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bool() {
        assert_eq!(parse_bool("true"), Some(true));
        assert_eq!(parse_bool(" TRUE "), Some(true));
        assert_eq!(parse_bool("1"), Some(true));
        assert_eq!(parse_bool("false"), Some(false));
        assert_eq!(parse_bool("0"), Some(false));
        assert_eq!(parse_bool("yes"), None);
    }

    fn clear_env() {
        std::env::remove_var("STOREFRONT_MOUNT_ID");
        std::env::remove_var("STOREFRONT_PRINT_HTML");
    }

    #[test]
    #[serial_test::serial]
    fn test_from_env_defaults() {
        clear_env();

        let config = Config::from_env().unwrap();

        assert_eq!(config.mount_id, "app");
        assert!(config.print_html);
    }

    #[test]
    #[serial_test::serial]
    fn test_from_env_reads_values() {
        clear_env();
        std::env::set_var("STOREFRONT_MOUNT_ID", "shop");
        std::env::set_var("STOREFRONT_PRINT_HTML", "0");

        let config = Config::from_env();
        clear_env();

        let config = config.unwrap();
        assert_eq!(config.mount_id, "shop");
        assert!(!config.print_html);
    }

    #[test]
    #[serial_test::serial]
    fn test_from_env_rejects_bad_print_html() {
        clear_env();
        std::env::set_var("STOREFRONT_PRINT_HTML", "yes");

        let result = Config::from_env();
        clear_env();

        assert!(matches!(
            result,
            Err(ConfigError::Invalid("STOREFRONT_PRINT_HTML", _))
        ));
    }

    #[test]
    #[serial_test::serial]
    fn test_from_env_rejects_empty_mount_id() {
        clear_env();
        std::env::set_var("STOREFRONT_MOUNT_ID", "  ");

        let result = Config::from_env();
        clear_env();

        assert!(matches!(
            result,
            Err(ConfigError::Invalid("STOREFRONT_MOUNT_ID", _))
        ));
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.mount_id, "app");
        assert!(config.print_html);
    }
}
