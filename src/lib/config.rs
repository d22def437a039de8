//! Build-time configuration for timing parameters with an optional runtime
//! override. The runtime config is read from `window.AULA_CONFIG` (if present)
//! so static deployments can tune the surface without rebuilding. Template
//! pages additionally inject per-page data through `window.AULA_PAGE`.
//! Configuration values are public; do not store secrets here.

const DEFAULT_TOTP_PERIOD_SECONDS: u32 = 30;
const DEFAULT_AUTO_SUBMIT_DELAY_MS: u32 = 300;
const DEFAULT_COPY_ACK_MS: u32 = 2_000;

/// Frontend configuration derived from build-time environment variables.
#[derive(Clone, Debug)]
pub struct AppConfig {
    /// Rotation period the countdown tracks. The display derives purely from
    /// the local wall clock; the backend's rotation epoch is not consulted.
    pub totp_period_seconds: u32,
    /// Pause between a completed code and the native form submission.
    pub auto_submit_delay_ms: u32,
    /// How long the copy button acknowledges a successful copy.
    pub copy_ack_ms: u32,
}

impl AppConfig {
    /// Loads config from build-time environment variables and applies runtime
    /// overrides.
    pub fn load() -> Self {
        let mut config = Self {
            totp_period_seconds: parse_env(
                option_env!("AULA_TOTP_PERIOD_SECONDS"),
                DEFAULT_TOTP_PERIOD_SECONDS,
            ),
            auto_submit_delay_ms: parse_env(
                option_env!("AULA_AUTO_SUBMIT_DELAY_MS"),
                DEFAULT_AUTO_SUBMIT_DELAY_MS,
            ),
            copy_ack_ms: parse_env(option_env!("AULA_COPY_ACK_MS"), DEFAULT_COPY_ACK_MS),
        };

        if let Some(runtime) = runtime_config() {
            apply_runtime_overrides(&mut config, runtime);
        }

        config
    }
}

/// Template-supplied data for the enrollment route, injected as
/// `window.AULA_PAGE` by the host page. Routes validate the parts they need
/// when they initialize and render an error instead of silently no-opping.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PageData {
    pub totp_secret: Option<String>,
    pub qr_code_url: Option<String>,
    pub two_factor_enabled: bool,
}

impl PageData {
    pub fn load() -> Self {
        page_data().unwrap_or_default()
    }
}

#[derive(Default)]
struct RuntimeConfig {
    totp_period_seconds: Option<u32>,
    auto_submit_delay_ms: Option<u32>,
    copy_ack_ms: Option<u32>,
}

fn parse_env(value: Option<&str>, default: u32) -> u32 {
    value
        .and_then(|raw| raw.trim().parse::<u32>().ok())
        .filter(|parsed| *parsed > 0)
        .unwrap_or(default)
}

fn apply_runtime_overrides(config: &mut AppConfig, runtime: RuntimeConfig) {
    if let Some(value) = runtime.totp_period_seconds {
        config.totp_period_seconds = value;
    }
    if let Some(value) = runtime.auto_submit_delay_ms {
        config.auto_submit_delay_ms = value;
    }
    if let Some(value) = runtime.copy_ack_ms {
        config.copy_ack_ms = value;
    }
}

#[cfg(target_arch = "wasm32")]
fn runtime_config() -> Option<RuntimeConfig> {
    use js_sys::{Object, Reflect};
    use wasm_bindgen::JsValue;

    let window = web_sys::window()?;
    let config = Reflect::get(&window, &JsValue::from_str("AULA_CONFIG")).ok()?;
    if config.is_null() || config.is_undefined() {
        return None;
    }
    let object = Object::from(config);

    Some(RuntimeConfig {
        totp_period_seconds: read_runtime_number(&object, "totp_period_seconds"),
        auto_submit_delay_ms: read_runtime_number(&object, "auto_submit_delay_ms"),
        copy_ack_ms: read_runtime_number(&object, "copy_ack_ms"),
    })
}

#[cfg(not(target_arch = "wasm32"))]
fn runtime_config() -> Option<RuntimeConfig> {
    None
}

#[cfg(target_arch = "wasm32")]
fn page_data() -> Option<PageData> {
    use js_sys::{Object, Reflect};
    use wasm_bindgen::JsValue;

    let window = web_sys::window()?;
    let data = Reflect::get(&window, &JsValue::from_str("AULA_PAGE")).ok()?;
    if data.is_null() || data.is_undefined() {
        return None;
    }
    let object = Object::from(data);

    Some(PageData {
        totp_secret: read_runtime_value(&object, "totp_secret"),
        qr_code_url: read_runtime_value(&object, "qr_code_url"),
        two_factor_enabled: read_runtime_bool(&object, "two_factor_enabled").unwrap_or(false),
    })
}

#[cfg(not(target_arch = "wasm32"))]
fn page_data() -> Option<PageData> {
    None
}

#[cfg(target_arch = "wasm32")]
fn read_runtime_value(object: &js_sys::Object, key: &str) -> Option<String> {
    let value = js_sys::Reflect::get(object, &wasm_bindgen::JsValue::from_str(key))
        .ok()?
        .as_string()?;
    normalize_runtime_value(&value)
}

#[cfg(target_arch = "wasm32")]
fn read_runtime_number(object: &js_sys::Object, key: &str) -> Option<u32> {
    let value = js_sys::Reflect::get(object, &wasm_bindgen::JsValue::from_str(key))
        .ok()?
        .as_f64()?;
    if value >= 1.0 && value <= f64::from(u32::MAX) {
        Some(value as u32)
    } else {
        None
    }
}

#[cfg(target_arch = "wasm32")]
fn read_runtime_bool(object: &js_sys::Object, key: &str) -> Option<bool> {
    js_sys::Reflect::get(object, &wasm_bindgen::JsValue::from_str(key))
        .ok()?
        .as_bool()
}

#[cfg(any(target_arch = "wasm32", test))]
fn normalize_runtime_value(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::{
        AppConfig, RuntimeConfig, apply_runtime_overrides, normalize_runtime_value, parse_env,
    };

    #[test]
    fn parse_env_rejects_garbage_and_zero() {
        assert_eq!(parse_env(None, 30), 30);
        assert_eq!(parse_env(Some(""), 30), 30);
        assert_eq!(parse_env(Some("abc"), 30), 30);
        assert_eq!(parse_env(Some("0"), 30), 30);
        assert_eq!(parse_env(Some(" 45 "), 30), 45);
    }

    #[test]
    fn normalize_runtime_value_trims_and_rejects_empty() {
        assert_eq!(normalize_runtime_value(""), None);
        assert_eq!(normalize_runtime_value("   "), None);
        assert_eq!(
            normalize_runtime_value("  JBSWY3DPEHPK3PXP "),
            Some("JBSWY3DPEHPK3PXP".to_string())
        );
    }

    #[test]
    fn apply_runtime_overrides_ignores_absent_values() {
        let mut config = AppConfig {
            totp_period_seconds: 30,
            auto_submit_delay_ms: 300,
            copy_ack_ms: 2_000,
        };
        apply_runtime_overrides(&mut config, RuntimeConfig::default());

        assert_eq!(config.totp_period_seconds, 30);
        assert_eq!(config.auto_submit_delay_ms, 300);
        assert_eq!(config.copy_ack_ms, 2_000);
    }

    #[test]
    fn apply_runtime_overrides_overwrites_when_present() {
        let mut config = AppConfig {
            totp_period_seconds: 30,
            auto_submit_delay_ms: 300,
            copy_ack_ms: 2_000,
        };
        let runtime = RuntimeConfig {
            totp_period_seconds: Some(60),
            auto_submit_delay_ms: Some(500),
            copy_ack_ms: Some(1_000),
        };

        apply_runtime_overrides(&mut config, runtime);

        assert_eq!(config.totp_period_seconds, 60);
        assert_eq!(config.auto_submit_delay_ms, 500);
        assert_eq!(config.copy_ack_ms, 1_000);
    }
}
