use std::path::Path;

pub use model::*;

use crate::error::SettingsError;

mod model;

pub const ENV_PREFIX: &str = "APP";
pub const ENV_SEPARATOR: &str = "__";

/// Loads settings from an optional file, then overrides from environment variables.
///
/// Environment variables use the `APP` prefix and `__` as the nesting separator. E.g.
/// `APP_POLICIES__CONSERVATIVE__DEACTIVATION_FRACTION=0.3` sets
/// `Settings.policies.conservative.deactivation_fraction`.
#[tracing::instrument(level = "debug")]
pub fn load_settings(config_path: Option<&Path>) -> Result<Settings, SettingsError> {
    let mut builder = config::Config::builder();

    if let Some(path) = config_path {
        builder = builder.add_source(config::File::from(path).required(true));
    }

    builder = builder.add_source(
        config::Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator(ENV_SEPARATOR)
            .try_parsing(true),
    );

    let settings: Settings = builder.build()?.try_deserialize()?;
    settings.policies.validate()?;
    tracing::debug!(?settings, "settings loaded");
    Ok(settings)
}
