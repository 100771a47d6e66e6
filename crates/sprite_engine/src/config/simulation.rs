//! Tuning values for the per-frame systems

use serde::{Deserialize, Serialize};

use super::{Config, ConfigError};

/// Simulation tuning shared by the frame pipeline.
///
/// Defaults reproduce the arcade feel the game was balanced around; the
/// values are exposed so level designers can tweak them from a config file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Internal render width in pixels (camera centring)
    pub viewport_width: f32,
    /// Internal render height in pixels (camera centring)
    pub viewport_height: f32,
    /// Player acceleration = `max_speed * input_gain`
    pub input_gain: f32,
    /// AI acceleration = `max_speed * ai_gain`
    pub ai_gain: f32,
    /// Friction deceleration = `friction * friction_scale` units/s²
    pub friction_scale: f32,
    /// Distance under which a patrol waypoint counts as reached
    pub arrival_threshold: f32,
    /// Seconds a patroller idles at each waypoint
    pub patrol_wait: f32,
    /// Seconds an attack hitbox stays live
    pub attack_duration: f32,
    /// Hitbox offset from the attacker's centre along its facing
    pub attack_reach: f32,
    /// Hitbox side length
    pub attack_size: f32,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            viewport_width: 320.0,
            viewport_height: 240.0,
            input_gain: 10.0,
            ai_gain: 5.0,
            friction_scale: 50.0,
            arrival_threshold: 5.0,
            patrol_wait: 1.0,
            attack_duration: 0.25,
            attack_reach: 12.0,
            attack_size: 20.0,
        }
    }
}

impl Config for SimulationConfig {}

impl SimulationConfig {
    /// Reject values that would make the pipeline misbehave
    pub fn validate(&self) -> Result<(), ConfigError> {
        let non_negative = [
            ("input_gain", self.input_gain),
            ("ai_gain", self.ai_gain),
            ("friction_scale", self.friction_scale),
            ("arrival_threshold", self.arrival_threshold),
            ("patrol_wait", self.patrol_wait),
            ("attack_duration", self.attack_duration),
            ("attack_size", self.attack_size),
        ];
        for (field, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::Invalid {
                    field,
                    reason: format!("expected a finite non-negative number, got {value}"),
                });
            }
        }

        if self.viewport_width <= 0.0 || self.viewport_height <= 0.0 {
            return Err(ConfigError::Invalid {
                field: "viewport",
                reason: format!("{}x{} is not a usable size", self.viewport_width, self.viewport_height),
            });
        }

        Ok(())
    }
}
