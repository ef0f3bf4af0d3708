//! Integration tests for TOML configuration loading.
//!
//! Uses `figment::Jail` for sandboxed files and env vars.

use figment::{
    Figment, Jail,
    providers::{Format, Serialized, Toml},
};
use pretty_assertions::assert_eq;
use reclimit_config::{ConfigError, HOME_ENV, LimitsConfig};
use std::path::PathBuf;

/// Point the user-global config at a directory inside the jail.
fn isolate_user_config(jail: &mut Jail) -> PathBuf {
    let user_dir = jail.directory().join("user");
    jail.set_env(HOME_ENV, user_dir.display());
    user_dir
}

#[test]
fn loads_bounds_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r"
[depth]
bound = 8

[calls]
bound = 0
",
        )?;

        let config: LimitsConfig = Figment::from(Serialized::defaults(LimitsConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.depth.bound.get(), 8);
        assert_eq!(config.calls.bound.get(), 0);
        Ok(())
    });
}

#[test]
fn missing_section_keeps_default() {
    Jail::expect_with(|jail| {
        jail.create_file("config.toml", "[depth]\nbound = 2\n")?;

        let config: LimitsConfig = Figment::from(Serialized::defaults(LimitsConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.depth.bound.get(), 2);
        assert_eq!(config.calls.bound.get(), 1024);
        Ok(())
    });
}

#[test]
fn project_local_file_is_picked_up_by_load() {
    Jail::expect_with(|jail| {
        isolate_user_config(jail);
        std::fs::create_dir(jail.directory().join(".reclimit")).map_err(|e| e.to_string())?;
        jail.create_file(".reclimit/config.toml", "[calls]\nbound = 7\n")?;

        let config = LimitsConfig::load().expect("config loads");
        assert_eq!(config.calls.bound.get(), 7);
        assert_eq!(config.depth.bound.get(), 64);

        let limiter = config.call_limiter(-1);
        assert_eq!(limiter.remaining(), 7);
        Ok(())
    });
}

#[test]
fn fractional_bound_is_rejected() {
    Jail::expect_with(|jail| {
        isolate_user_config(jail);
        std::fs::create_dir(jail.directory().join(".reclimit")).map_err(|e| e.to_string())?;
        jail.create_file(".reclimit/config.toml", "[depth]\nbound = 2.5\n")?;

        let err = LimitsConfig::load().unwrap_err();
        assert!(matches!(err, ConfigError::Figment(_)));
        Ok(())
    });
}

#[test]
fn bound_below_minus_one_fails_validation() {
    Jail::expect_with(|jail| {
        jail.create_file("config.toml", "[depth]\nbound = -3\n")?;

        let figment = Figment::from(Serialized::defaults(LimitsConfig::default()))
            .merge(Toml::file("config.toml"));
        let err = LimitsConfig::from_figment(&figment).unwrap_err();

        assert!(matches!(err, ConfigError::InvalidValue { ref field, .. } if field == "depth.bound"));
        assert_eq!(
            err.to_string(),
            "Invalid configuration value for 'depth.bound': -3 is below -1"
        );
        Ok(())
    });
}
