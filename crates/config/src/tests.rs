use std::time::Duration;

use figment::Jail;

use crate::AppConfig;

#[test]
fn test_defaults_without_files() {
    Jail::expect_with(|jail| {
        let dir = jail.directory().to_string_lossy().to_string();
        let config = AppConfig::figment(&dir, "development").extract::<AppConfig>()?;

        assert_eq!(config.app_name, "discussion");
        assert!(config.is_development());
        assert_eq!(config.auth.latency(), Duration::from_millis(100));
        assert_eq!(config.telemetry.log_level, "info");
        assert!(!config.telemetry.json);
        Ok(())
    });
}

#[test]
fn test_env_file_overrides_default_file() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "default.toml",
            r#"
                app_name = "remark"
                app_env = "development"

                [auth]
                latency_ms = 50
            "#,
        )?;
        jail.create_file(
            "production.toml",
            r#"
                app_env = "production"

                [telemetry]
                log_level = "warn"
                json = true
            "#,
        )?;

        let dir = jail.directory().to_string_lossy().to_string();
        let config = AppConfig::figment(&dir, "production").extract::<AppConfig>()?;

        assert_eq!(config.app_name, "remark");
        assert!(config.is_production());
        assert_eq!(config.auth.latency_ms, 50);
        assert_eq!(config.telemetry.log_level, "warn");
        assert!(config.telemetry.json);
        Ok(())
    });
}

#[test]
fn test_environment_variables_win() {
    Jail::expect_with(|jail| {
        jail.create_file("default.toml", "[auth]\nlatency_ms = 50\n")?;
        jail.set_env("REMARK_AUTH__LATENCY_MS", "5");

        let dir = jail.directory().to_string_lossy().to_string();
        let config = AppConfig::figment(&dir, "development").extract::<AppConfig>()?;

        assert_eq!(config.auth.latency(), Duration::from_millis(5));
        Ok(())
    });
}
