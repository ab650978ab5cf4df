//! Tuning knobs for set operations and buffering.
//!
//! The defaults reproduce the well-tested behaviour (32 points per circle, a
//! `0.00001` inflation for touching unions). The configuration can be parsed from
//! YAML using Serde.
//!
//! # Example YAML
//! ```yaml
//! points_per_circle: 64
//! touch_epsilon: 0.0001
//! offset_backend: piecewise
//! ```
use anyhow::{Context, Result, ensure};
use serde::Deserialize;

/// How multi-linestrings are offset after path decomposition.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OffsetBackend {
	/// Hand the whole path set to the exact offset engine in one pass.
	Exact,
	/// Buffer every path on its own and union the results.
	Piecewise,
}

impl Default for OffsetBackend {
	fn default() -> Self {
		if cfg!(feature = "exact-offset") {
			OffsetBackend::Exact
		} else {
			OffsetBackend::Piecewise
		}
	}
}

/// Geometry configuration shared by the set operations and the buffer pipeline.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct GeometryConfig {
	/// Number of points used to approximate a full circle for round joins,
	/// round end caps and point buffers.
	/// Defaults to 32.
	#[serde(default = "default_points_per_circle")]
	pub points_per_circle: u32,

	/// Distance by which touching operands are inflated before a union.
	/// Defaults to 0.00001.
	#[serde(default = "default_touch_epsilon")]
	pub touch_epsilon: f64,

	/// Maximum number of nested inflate-and-retry rounds of a touching union.
	/// Defaults to 4.
	#[serde(default = "default_max_touch_retries")]
	pub max_touch_retries: u8,

	/// Backend used to offset multi-linestrings.
	/// Defaults to `exact` when the `exact-offset` feature is enabled, otherwise `piecewise`.
	#[serde(default)]
	pub offset_backend: OffsetBackend,
}

const DEFAULT_POINTS_PER_CIRCLE: u32 = 32;
const DEFAULT_TOUCH_EPSILON: f64 = 0.00001;

fn default_points_per_circle() -> u32 {
	DEFAULT_POINTS_PER_CIRCLE
}

fn default_touch_epsilon() -> f64 {
	DEFAULT_TOUCH_EPSILON
}

fn default_max_touch_retries() -> u8 {
	4
}

impl Default for GeometryConfig {
	fn default() -> Self {
		Self {
			points_per_circle: default_points_per_circle(),
			touch_epsilon: default_touch_epsilon(),
			max_touch_retries: default_max_touch_retries(),
			offset_backend: OffsetBackend::default(),
		}
	}
}

impl GeometryConfig {
	/// Parses and verifies a configuration from YAML.
	pub fn from_yaml_str(yaml: &str) -> Result<Self> {
		let config: GeometryConfig = serde_yaml_ng::from_str(yaml).context("parsing geometry config")?;
		config.verify()?;
		Ok(config)
	}

	/// Checks that the values can drive the kernel.
	pub fn verify(&self) -> Result<()> {
		ensure!(
			self.points_per_circle >= 4,
			"points_per_circle must be at least 4, got {}",
			self.points_per_circle
		);
		ensure!(
			self.touch_epsilon.is_finite() && self.touch_epsilon > 0.0,
			"touch_epsilon must be a positive finite number, got {}",
			self.touch_epsilon
		);
		Ok(())
	}

	/// Segments per quarter circle, the resolution unit of offset engines.
	#[must_use]
	pub fn quadrant_segments(&self) -> u32 {
		(self.points_per_circle / 4).max(1)
	}
}
