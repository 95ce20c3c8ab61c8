use crate::config::types::NnsConfig;
use crate::errors::ConfigError;

/// Validate the merged configuration.
pub fn validate_config(config: &NnsConfig) -> Result<(), ConfigError> {
    if config.window_manager.terminal_class().trim().is_empty() {
        return Err(ConfigError::InvalidConfiguration {
            message: "window_manager.terminal_class cannot be empty".to_string(),
        });
    }

    if config.editor.exclude_marker().is_empty() {
        return Err(ConfigError::InvalidConfiguration {
            message: "editor.exclude_marker cannot be empty".to_string(),
        });
    }

    if config.editor.buffers_expr().trim().is_empty() {
        return Err(ConfigError::InvalidConfiguration {
            message: "editor.buffers_expr cannot be empty".to_string(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&NnsConfig::default()).is_ok());
    }

    #[test]
    fn test_empty_terminal_class_rejected() {
        let mut config = NnsConfig::default();
        config.window_manager.terminal_class = Some("  ".to_string());
        assert!(matches!(
            validate_config(&config),
            Err(ConfigError::InvalidConfiguration { .. })
        ));
    }

    #[test]
    fn test_empty_exclude_marker_rejected() {
        // An empty marker would hide every buffer.
        let mut config = NnsConfig::default();
        config.editor.exclude_marker = Some(String::new());
        assert!(validate_config(&config).is_err());
    }
}
