//! Table settings and tuning
//!
//! Loaded from JSON on native hosts, defaults everywhere else.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// How per-frame velocity damping relates to the frame step
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum DampingMode {
    /// Multiply by the damping factor once per frame, whatever dt is
    #[default]
    PerFrame,
    /// Scale the factor by dt so drag is the same at any frame rate
    TimeScaled { reference_hz: f32 },
}

impl DampingMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            DampingMode::PerFrame => "per_frame",
            DampingMode::TimeScaled { .. } => "time_scaled",
        }
    }

    /// Effective multiplier for a step of `dt` seconds
    pub fn factor(&self, damping: f32, dt: f32) -> f32 {
        match *self {
            DampingMode::PerFrame => damping,
            DampingMode::TimeScaled { reference_hz } => damping.powf(dt * reference_hz),
        }
    }
}

/// Every layout fraction and physics constant used by the table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Layout ===
    pub board_padding: f32,
    pub ball_radius: f32,
    pub ball_rest_radii: f32,
    pub paddle_thickness: f32,
    pub paddle_length: f32,
    pub paddle_pivot_inset: f32,
    pub paddle_pivot_height: f32,
    pub left_rest_deg: f32,
    pub left_flipped_deg: f32,
    pub right_rest_deg: f32,
    pub right_flipped_deg: f32,

    // === Plunger ===
    pub lane_width: f32,
    pub lane_grab_height: f32,
    pub lane_seat_height: f32,
    pub max_pull: f32,
    pub launch_impulse: f32,
    pub launch_jitter: f32,

    // === Physics ===
    pub gravity: f32,
    pub damping: f32,
    pub damping_mode: DampingMode,
    pub bounce: f32,
    pub flip_boost: f32,
    pub flip_boost_scale: f32,
    pub min_contact_dist: f32,

    // === Frame ===
    pub max_frame_ms: u64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            board_padding: BOARD_PADDING,
            ball_radius: BALL_RADIUS,
            ball_rest_radii: BALL_REST_RADII,
            paddle_thickness: PADDLE_THICKNESS,
            paddle_length: PADDLE_LENGTH,
            paddle_pivot_inset: PADDLE_PIVOT_INSET,
            paddle_pivot_height: PADDLE_PIVOT_HEIGHT,
            left_rest_deg: LEFT_REST_DEG,
            left_flipped_deg: LEFT_FLIPPED_DEG,
            right_rest_deg: RIGHT_REST_DEG,
            right_flipped_deg: RIGHT_FLIPPED_DEG,

            lane_width: LANE_WIDTH,
            lane_grab_height: LANE_GRAB_HEIGHT,
            lane_seat_height: LANE_SEAT_HEIGHT,
            max_pull: MAX_PULL,
            launch_impulse: LAUNCH_IMPULSE,
            launch_jitter: LAUNCH_JITTER,

            gravity: GRAVITY,
            damping: DAMPING,
            damping_mode: DampingMode::PerFrame,
            bounce: BOUNCE,
            flip_boost: FLIP_BOOST,
            flip_boost_scale: FLIP_BOOST_SCALE,
            min_contact_dist: MIN_CONTACT_DIST,

            max_frame_ms: MAX_FRAME_MS,
        }
    }
}

impl Tuning {
    /// Velocity multiplier for one step of `dt` seconds
    pub fn damping_factor(&self, dt: f32) -> f32 {
        self.damping_mode.factor(self.damping, dt)
    }
}

/// Table settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Fixed RNG seed; a fresh one is drawn per table when absent
    pub seed: Option<u64>,
    /// Physics and layout tuning
    pub tuning: Tuning,
}

impl Settings {
    /// Parse settings from a JSON document; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("invalid settings JSON")
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("serialize settings")
    }

    /// Read settings from a file
    pub fn read(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json =
            std::fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
        Self::from_json(&json).with_context(|| format!("parse {}", path.display()))
    }

    /// Load settings from `path`, falling back to defaults on any error
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::read(path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("Using default settings ({e:#})");
                Self::default()
            }
        }
    }
}
