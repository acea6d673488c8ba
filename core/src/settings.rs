//! Process-wide configuration for PlayFab calls.
//!
//! # Design
//! `Settings` is built once by the host's composition root and then shared
//! read-only (usually behind an `Arc`) by every `PlayFabClient`. Dispatch
//! reads it as an explicit argument, never from ambient global state.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::error::{ConfigError, PlayFabError};

pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Callback notified of every failed call before the failure is returned.
pub type ErrorHandler = Arc<dyn Fn(&PlayFabError) + Send + Sync>;

/// Kind of device advertising identifier reported for install attribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdvertisingIdType {
    Idfa,
    Adid,
}

impl AdvertisingIdType {
    pub fn as_str(self) -> &'static str {
        match self {
            AdvertisingIdType::Idfa => "Idfa",
            AdvertisingIdType::Adid => "Adid",
        }
    }
}

impl FromStr for AdvertisingIdType {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Idfa" => Ok(AdvertisingIdType::Idfa),
            "Adid" => Ok(AdvertisingIdType::Adid),
            other => Err(ConfigError::Invalid {
                name: "PLAYFAB_ADVERTISING_ID_TYPE",
                value: other.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdvertisingId {
    pub id_type: AdvertisingIdType,
    pub value: String,
}

#[derive(Clone)]
pub struct Settings {
    title_id: String,
    base_url: Option<String>,
    sdk_version_string: String,
    advertising_id: Option<AdvertisingId>,
    disable_advertising: bool,
    error_handler: Option<ErrorHandler>,
}

impl Settings {
    pub fn new(title_id: impl Into<String>) -> Self {
        Self {
            title_id: title_id.into(),
            base_url: None,
            sdk_version_string: format!("RustSDK-{SDK_VERSION}"),
            advertising_id: None,
            disable_advertising: false,
            error_handler: None,
        }
    }

    /// Read settings from `PLAYFAB_*` environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Same as `from_env`, with the variable source supplied by the caller.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let title_id = lookup("PLAYFAB_TITLE_ID")
            .filter(|v| !v.is_empty())
            .ok_or(ConfigError::Missing("PLAYFAB_TITLE_ID"))?;
        let mut settings = Settings::new(title_id);

        if let Some(url) = lookup("PLAYFAB_BASE_URL").filter(|v| !v.is_empty()) {
            settings = settings.with_base_url(url);
        }

        let id_type = lookup("PLAYFAB_ADVERTISING_ID_TYPE");
        let id_value = lookup("PLAYFAB_ADVERTISING_ID_VALUE");
        if let (Some(id_type), Some(value)) = (id_type, id_value) {
            settings = settings.with_advertising_id(id_type.parse()?, value);
        }

        if let Some(flag) = lookup("PLAYFAB_DISABLE_ADVERTISING") {
            let disabled = flag.parse::<bool>().map_err(|_| ConfigError::Invalid {
                name: "PLAYFAB_DISABLE_ADVERTISING",
                value: flag.clone(),
            })?;
            settings = settings.with_advertising_disabled(disabled);
        }

        Ok(settings)
    }

    /// Send calls to `url` instead of the title's public endpoint.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into().trim_end_matches('/').to_string());
        self
    }

    pub fn with_advertising_id(mut self, id_type: AdvertisingIdType, value: impl Into<String>) -> Self {
        self.advertising_id = Some(AdvertisingId {
            id_type,
            value: value.into(),
        });
        self
    }

    pub fn with_advertising_disabled(mut self, disabled: bool) -> Self {
        self.disable_advertising = disabled;
        self
    }

    pub fn with_error_handler(mut self, handler: impl Fn(&PlayFabError) + Send + Sync + 'static) -> Self {
        self.error_handler = Some(Arc::new(handler));
        self
    }

    pub fn title_id(&self) -> &str {
        &self.title_id
    }

    /// Base URL every endpoint path is appended to.
    pub fn url(&self) -> String {
        match &self.base_url {
            Some(url) => url.clone(),
            None => format!("https://{}.playfabapi.com", self.title_id),
        }
    }

    pub fn sdk_version_string(&self) -> &str {
        &self.sdk_version_string
    }

    pub fn advertising_id(&self) -> Option<&AdvertisingId> {
        self.advertising_id.as_ref()
    }

    pub fn advertising_disabled(&self) -> bool {
        self.disable_advertising
    }

    pub fn error_handler(&self) -> Option<&ErrorHandler> {
        self.error_handler.as_ref()
    }
}

impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("title_id", &self.title_id)
            .field("base_url", &self.base_url)
            .field("sdk_version_string", &self.sdk_version_string)
            .field("advertising_id", &self.advertising_id)
            .field("disable_advertising", &self.disable_advertising)
            .field("error_handler", &self.error_handler.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn url_is_derived_from_title_id() {
        let settings = Settings::new("A1B2");
        assert_eq!(settings.url(), "https://A1B2.playfabapi.com");
    }

    #[test]
    fn base_url_override_strips_trailing_slash() {
        let settings = Settings::new("A1B2").with_base_url("http://127.0.0.1:3000/");
        assert_eq!(settings.url(), "http://127.0.0.1:3000");
    }

    #[test]
    fn sdk_version_string_names_the_crate_version() {
        let settings = Settings::new("A1B2");
        assert_eq!(settings.sdk_version_string(), format!("RustSDK-{SDK_VERSION}"));
    }

    #[test]
    fn from_lookup_requires_title_id() {
        let err = Settings::from_lookup(lookup(&[])).unwrap_err();
        assert_eq!(err, ConfigError::Missing("PLAYFAB_TITLE_ID"));
    }

    #[test]
    fn from_lookup_reads_every_variable() {
        let settings = Settings::from_lookup(lookup(&[
            ("PLAYFAB_TITLE_ID", "F00D"),
            ("PLAYFAB_BASE_URL", "http://localhost:3000"),
            ("PLAYFAB_ADVERTISING_ID_TYPE", "Adid"),
            ("PLAYFAB_ADVERTISING_ID_VALUE", "device-1"),
            ("PLAYFAB_DISABLE_ADVERTISING", "true"),
        ]))
        .unwrap();
        assert_eq!(settings.title_id(), "F00D");
        assert_eq!(settings.url(), "http://localhost:3000");
        assert_eq!(
            settings.advertising_id(),
            Some(&AdvertisingId {
                id_type: AdvertisingIdType::Adid,
                value: "device-1".to_string(),
            })
        );
        assert!(settings.advertising_disabled());
    }

    #[test]
    fn from_lookup_rejects_bad_advertising_type() {
        let err = Settings::from_lookup(lookup(&[
            ("PLAYFAB_TITLE_ID", "F00D"),
            ("PLAYFAB_ADVERTISING_ID_TYPE", "Imei"),
            ("PLAYFAB_ADVERTISING_ID_VALUE", "x"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { name: "PLAYFAB_ADVERTISING_ID_TYPE", .. }));
    }

    #[test]
    fn debug_hides_handler() {
        let settings = Settings::new("A1B2").with_error_handler(|_| {});
        let text = format!("{settings:?}");
        assert!(text.contains("error_handler: true"));
    }
}
