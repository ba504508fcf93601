use ece_shared::error::{ContentError, ContentResult};
use ece_shared::particles::ParticleConfig;
use ece_shared::sphere::SphereConfig;
use log::warn;
use serde::Deserialize;
use web_sys::window;

/// Id of the optional `<script type="application/json">` element holding
/// decoration overrides.
pub const DECORATION_CONFIG_ID: &str = "decoration-config";

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct DecorationConfig {
    pub particles: ParticleConfig,
    pub sphere: SphereConfig,
}

pub fn get_asset_base_url() -> String {
    // Static assets are served next to the page, wherever it is hosted
    if let Some(window) = window() {
        if let Ok(origin) = window.location().origin() {
            return origin;
        }
    }

    String::new()
}

pub fn get_asset_url(path: &str) -> String {
    if path.starts_with("http") {
        path.to_string()
    } else {
        format!("{}{}", get_asset_base_url(), path)
    }
}

pub fn parse_decoration_config(raw: &str) -> ContentResult<DecorationConfig> {
    serde_json::from_str(raw).map_err(|e| ContentError::InvalidConfig(e.to_string()))
}

/// Reads the decoration overrides embedded in the page. A missing element
/// means defaults; a malformed one is logged and also means defaults.
pub fn load_decoration_config() -> DecorationConfig {
    let raw = gloo_utils::document()
        .get_element_by_id(DECORATION_CONFIG_ID)
        .and_then(|element| element.text_content());

    match raw {
        Some(raw) if !raw.trim().is_empty() => parse_decoration_config(&raw).unwrap_or_else(|e| {
            warn!("{}; using defaults", e);
            DecorationConfig::default()
        }),
        _ => DecorationConfig::default(),
    }
}

pub fn device_pixel_ratio() -> f64 {
    window()
        .map(|w| w.device_pixel_ratio())
        .filter(|ratio| ratio.is_finite() && *ratio > 0.0)
        .unwrap_or(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_override() {
        let config = parse_decoration_config(r#"{"particles": {"count": 40}, "sphere": {"rate_y": 0.5}}"#).unwrap();
        assert_eq!(config.particles.count, 40);
        assert_eq!(config.sphere.rate_y, 0.5);
        assert_eq!(config.sphere.rate_x, 0.2);
    }

    #[test]
    fn test_malformed_override_is_invalid_config() {
        assert!(matches!(
            parse_decoration_config("{not json"),
            Err(ContentError::InvalidConfig(_))
        ));
    }
}
