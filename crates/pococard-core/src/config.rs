use config::{Config, ConfigBuilder, builder::DefaultState};
use serde::Deserialize;

use crate::constants::{CONFIG_FILE, DEFAULT_PRODUCT_ID, ENV_PREFIX};
use crate::error::{CoreError, CoreResult};

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub logging: LoggingConfig,
    pub vcard: VCardConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VCardConfig {
    /// Value written to the `PRODID` line of every card.
    pub product_id: String,
}

impl Settings {
    /// ## Summary
    /// Returns a configuration builder seeded with the default values.
    ///
    /// ## Errors
    /// Returns an error if a default cannot be registered.
    pub fn builder() -> CoreResult<ConfigBuilder<DefaultState>> {
        Ok(Config::builder()
            .set_default("logging.level", "warn")?
            .set_default("vcard.product_id", DEFAULT_PRODUCT_ID)?)
    }

    /// ## Summary
    /// Loads configuration from environment variables and the optional
    /// `pococard.toml` file on top of the defaults.
    ///
    /// ## Errors
    /// Returns an error if building, deserializing, or validating the
    /// configuration fails.
    pub fn load() -> CoreResult<Self> {
        let builder = Self::builder()?
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .ignore_empty(true),
            )
            .add_source(config::File::with_name(CONFIG_FILE).required(false));

        Self::from_builder(builder)
    }

    /// ## Summary
    /// Builds and validates settings from an already assembled builder.
    ///
    /// ## Errors
    /// Returns an error if building, deserializing, or validating fails.
    pub fn from_builder(builder: ConfigBuilder<DefaultState>) -> CoreResult<Self> {
        let settings = builder.build()?.try_deserialize::<Self>()?;
        settings.validate()?;
        Ok(settings)
    }

    /// ## Summary
    /// Checks values that would corrupt the generated document.
    ///
    /// ## Errors
    /// Returns [`CoreError::InvalidInput`] if the product identifier is
    /// empty or spans several lines.
    pub fn validate(&self) -> CoreResult<()> {
        let product_id = self.vcard.product_id.as_str();
        if product_id.trim().is_empty() {
            return Err(CoreError::InvalidInput(
                "vcard.product_id must not be empty".to_string(),
            ));
        }
        if product_id.contains(['\r', '\n']) {
            return Err(CoreError::InvalidInput(
                "vcard.product_id must be a single line".to_string(),
            ));
        }
        Ok(())
    }
}

/// ## Summary
/// Loads configuration from environment variables, `.env`, and `pococard.toml`.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config() -> CoreResult<Settings> {
    dotenvy::dotenv().ok();

    let settings = Settings::load()?;
    tracing::debug!(settings = ?settings, "Configuration loaded");
    Ok(settings)
}
