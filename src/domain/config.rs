use serde::{Deserialize, Serialize};

use crate::core::line_buffer::FLOATS_PER_LINE;

// Reference tuning of the network background
pub const DEFAULT_COUNT: u32 = 100;
pub const DEFAULT_RADIUS: f32 = 2.0;
pub const DEFAULT_CONNECTION_DISTANCE: f32 = 1.0;
pub const DEFAULT_MAX_CONNECTIONS: u32 = 2000;
/// Full width of the initial per-axis velocity range, in units/frame
pub const DEFAULT_INITIAL_SPEED: f32 = 0.005;
/// NDC -> simulation space factor for the pointer
pub const DEFAULT_POINTER_SCALE: f32 = 2.0;
pub const DEFAULT_POINTER_RADIUS: f32 = 1.0;
pub const DEFAULT_POINTER_GAIN: f32 = 0.01;
/// Scene rotation around Y, radians/frame
pub const DEFAULT_ROTATION_SPEED: f32 = 0.001;
pub const DEFAULT_PARALLAX_GAIN: f32 = 0.5;

/// Upper bound on `count`; the pair scan is quadratic in it
pub const MAX_COUNT: u32 = 65_536;
/// Upper bound on `maxConnections`
pub const MAX_CONNECTIONS: u32 = 1 << 20;

/// Tunables for one network simulation.
///
/// Deserialized from camelCase JSON; every field is optional and falls back
/// to the reference value.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NetworkConfig {
    pub count: u32,
    pub radius: f32,
    pub connection_distance: f32,
    pub max_connections: u32,
    pub initial_speed: f32,
    pub pointer_scale: f32,
    pub pointer_radius: f32,
    pub pointer_gain: f32,
    pub rotation_speed: f32,
    pub parallax_gain: f32,
    /// Xorshift seed; `None` draws one from the host
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u32>,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            count: DEFAULT_COUNT,
            radius: DEFAULT_RADIUS,
            connection_distance: DEFAULT_CONNECTION_DISTANCE,
            max_connections: DEFAULT_MAX_CONNECTIONS,
            initial_speed: DEFAULT_INITIAL_SPEED,
            pointer_scale: DEFAULT_POINTER_SCALE,
            pointer_radius: DEFAULT_POINTER_RADIUS,
            pointer_gain: DEFAULT_POINTER_GAIN,
            rotation_speed: DEFAULT_ROTATION_SPEED,
            parallax_gain: DEFAULT_PARALLAX_GAIN,
            seed: None,
        }
    }
}

impl NetworkConfig {
    pub fn from_json(json: &str) -> Result<Self, String> {
        let config: NetworkConfig = serde_json::from_str(json).map_err(|e| e.to_string())?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }

    /// Reject values that would break the reflection or distance tests, or
    /// buffer sizes the engine cannot allocate.
    /// Zero `count` or `max_connections` is allowed (nothing to draw).
    pub fn validate(&self) -> Result<(), String> {
        check_buffer_size("count", self.count, MAX_COUNT, 3)?;
        check_buffer_size("maxConnections", self.max_connections, MAX_CONNECTIONS, FLOATS_PER_LINE)?;

        let finite = [
            ("radius", self.radius),
            ("connectionDistance", self.connection_distance),
            ("initialSpeed", self.initial_speed),
            ("pointerScale", self.pointer_scale),
            ("pointerRadius", self.pointer_radius),
            ("pointerGain", self.pointer_gain),
            ("rotationSpeed", self.rotation_speed),
            ("parallaxGain", self.parallax_gain),
        ];
        for (name, value) in finite {
            if !value.is_finite() {
                return Err(format!("{} must be finite, got {}", name, value));
            }
        }

        if self.radius <= 0.0 {
            return Err(format!("radius must be positive, got {}", self.radius));
        }
        if self.connection_distance <= 0.0 {
            return Err(format!(
                "connectionDistance must be positive, got {}",
                self.connection_distance
            ));
        }
        if self.initial_speed < 0.0 {
            return Err(format!("initialSpeed must not be negative, got {}", self.initial_speed));
        }
        if self.pointer_radius < 0.0 {
            return Err(format!("pointerRadius must not be negative, got {}", self.pointer_radius));
        }
        Ok(())
    }

    pub fn count(&self) -> usize {
        self.count as usize
    }

    pub fn max_connections(&self) -> usize {
        self.max_connections as usize
    }
}

/// `value` slots of `stride` floats each must stay under `limit` slots
fn check_buffer_size(name: &str, value: u32, limit: u32, stride: usize) -> Result<(), String> {
    let floats = (value as usize).checked_mul(stride);
    match floats {
        Some(_) if value <= limit => Ok(()),
        _ => Err(format!("{} must be at most {}, got {}", name, limit, value)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_tuning() {
        let c = NetworkConfig::default();
        assert_eq!(c.count, 100);
        assert_eq!(c.radius, 2.0);
        assert_eq!(c.connection_distance, 1.0);
        assert_eq!(c.max_connections, 2000);
        assert_eq!(c.pointer_gain, 0.01);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn partial_json_fills_defaults() {
        let c = NetworkConfig::from_json(r#"{"count": 60, "connectionDistance": 0.8, "seed": 9}"#)
            .unwrap();
        assert_eq!(c.count, 60);
        assert_eq!(c.connection_distance, 0.8);
        assert_eq!(c.seed, Some(9));
        assert_eq!(c.radius, DEFAULT_RADIUS);
        assert_eq!(c.max_connections, DEFAULT_MAX_CONNECTIONS);
    }

    #[test]
    fn rejects_non_positive_radius() {
        let err = NetworkConfig::from_json(r#"{"radius": 0}"#).unwrap_err();
        assert!(err.contains("radius"));
    }

    #[test]
    fn rejects_oversized_buffers() {
        let err = NetworkConfig::from_json(r#"{"count": 4294967295}"#).unwrap_err();
        assert!(err.contains("count"));
        let err = NetworkConfig::from_json(r#"{"maxConnections": 4294967295}"#).unwrap_err();
        assert!(err.contains("maxConnections"));

        let at_limit = NetworkConfig {
            count: MAX_COUNT,
            max_connections: MAX_CONNECTIONS,
            ..NetworkConfig::default()
        };
        assert!(at_limit.validate().is_ok());
        let over = NetworkConfig { count: MAX_COUNT + 1, ..NetworkConfig::default() };
        assert!(over.validate().is_err());
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(NetworkConfig::from_json("{count: }").is_err());
        assert!(NetworkConfig::from_json(r#"{"count": -1}"#).is_err());
    }

    #[test]
    fn manifest_round_trips() {
        let c = NetworkConfig { count: 12, seed: Some(3), ..NetworkConfig::default() };
        let json = c.to_json();
        assert!(json.contains("\"maxConnections\":2000"));
        assert_eq!(NetworkConfig::from_json(&json).unwrap(), c);
    }

    #[test]
    fn seed_is_omitted_when_unset() {
        assert!(!NetworkConfig::default().to_json().contains("seed"));
    }
}
