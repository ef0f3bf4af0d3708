use std::path::PathBuf;

use figment::Jail;
use reclimit_config::{ConfigError, HOME_ENV, LimitsConfig};

/// Point the user-global config at a directory inside the jail.
fn isolate_user_config(jail: &mut Jail) -> PathBuf {
    let user_dir = jail.directory().join("user");
    jail.set_env(HOME_ENV, user_dir.display());
    user_dir
}

#[test]
fn env_overrides_defaults() {
    Jail::expect_with(|jail| {
        isolate_user_config(jail);
        jail.set_env("RECLIMIT_DEPTH__BOUND", "5");
        jail.set_env("RECLIMIT_CALLS__BOUND", "12");

        let config = LimitsConfig::load().expect("config loads");
        assert_eq!(config.depth.bound.get(), 5);
        assert_eq!(config.calls.bound.get(), 12);
        Ok(())
    });
}

#[test]
fn env_beats_project_file() {
    Jail::expect_with(|jail| {
        isolate_user_config(jail);
        std::fs::create_dir(jail.directory().join(".reclimit")).map_err(|e| e.to_string())?;
        jail.create_file(".reclimit/config.toml", "[depth]\nbound = 9\n")?;
        jail.set_env("RECLIMIT_DEPTH__BOUND", "1");

        let config = LimitsConfig::load().expect("config loads");
        assert_eq!(config.depth.bound.get(), 1);
        Ok(())
    });
}

#[test]
fn non_integer_env_value_is_rejected() {
    Jail::expect_with(|jail| {
        isolate_user_config(jail);
        jail.set_env("RECLIMIT_CALLS__BOUND", "lots");

        let err = LimitsConfig::load().unwrap_err();
        assert!(matches!(err, ConfigError::Figment(_)));
        Ok(())
    });
}

#[test]
fn configured_depth_limiter_truncates_recursion() {
    Jail::expect_with(|jail| {
        isolate_user_config(jail);
        jail.set_env("RECLIMIT_DEPTH__BOUND", "2");

        let config = LimitsConfig::load().expect("config loads");
        let fib = config.depth_limiter(0_u64).wrap(|this, n: u64| {
            if n < 2 { n } else { this.call(n - 1) + this.call(n - 2) }
        });
        assert_eq!(fib.call(10), 0);
        Ok(())
    });
}

#[test]
fn user_config_sits_below_project_and_env() {
    Jail::expect_with(|jail| {
        let user_dir = isolate_user_config(jail);
        std::fs::create_dir(&user_dir).map_err(|e| e.to_string())?;
        std::fs::write(
            user_dir.join("config.toml"),
            "[depth]\nbound = 3\n\n[calls]\nbound = 30\n",
        )
        .map_err(|e| e.to_string())?;
        std::fs::create_dir(jail.directory().join(".reclimit")).map_err(|e| e.to_string())?;
        jail.create_file(".reclimit/config.toml", "[calls]\nbound = 40\n")?;

        let config = LimitsConfig::load().expect("config loads");
        assert_eq!(config.depth.bound.get(), 3);
        assert_eq!(config.calls.bound.get(), 40);

        jail.set_env("RECLIMIT_DEPTH__BOUND", "4");
        let config = LimitsConfig::load().expect("config loads");
        assert_eq!(config.depth.bound.get(), 4);
        Ok(())
    });
}
