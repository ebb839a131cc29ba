//! Configuration file support for the portfolio page.
//!
//! Loads optional `portfolio.toml`. Every key is optional; a missing file
//! yields the defaults the page was designed around (80 px navbar, probe a
//! third down the viewport, last-match-wins).

use serde::Deserialize;
use std::path::Path;

use crate::error::{Error, Result};

/// File name looked up by [`SiteConfig::load`].
pub const CONFIG_FILE: &str = "portfolio.toml";

/// Root configuration structure
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub tracker: TrackerConfig,
    pub flags: FlagConfig,
    pub typewriter: TypewriterConfig,
    pub glow: GlowConfig,
    pub contact: ContactConfig,
}

/// Which section wins when the probe point lands in more than one.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TieBreak {
    /// Later sections in page order override earlier ones.
    #[default]
    Last,
    /// The first section in page order is kept.
    First,
}

impl std::str::FromStr for TieBreak {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "last" => Ok(Self::Last),
            "first" => Ok(Self::First),
            other => Err(format!("unknown tie-break `{other}` (expected first|last)")),
        }
    }
}

/// Active-section tracking
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    /// Pixels subtracted from a section's top when scrolling to it, so the
    /// fixed navbar does not cover the heading.
    pub navbar_offset: f64,
    /// The probe point sits `viewport_height / probe_divisor` below the
    /// scroll offset.
    pub probe_divisor: f64,
    pub tie_break: TieBreak,
    /// Emit a warning (instead of a debug event) for unknown section ids.
    pub warn_unknown_sections: bool,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            navbar_offset: 80.0,
            probe_divisor: 3.0,
            tie_break: TieBreak::Last,
            warn_unknown_sections: false,
        }
    }
}

/// Scroll thresholds for the navbar background and the back-to-top button.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct FlagConfig {
    pub navbar_opaque_after: f64,
    pub scroll_top_after: f64,
}

impl Default for FlagConfig {
    fn default() -> Self {
        Self {
            navbar_opaque_after: 50.0,
            scroll_top_after: 300.0,
        }
    }
}

/// Hero typewriter timings, in milliseconds.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TypewriterConfig {
    pub typing_ms: u64,
    pub deleting_ms: u64,
    /// Hold time once a phrase is fully typed.
    pub pause_ms: u64,
    /// Extra wait between deleting one phrase and typing the next.
    pub gap_ms: u64,
}

impl Default for TypewriterConfig {
    fn default() -> Self {
        Self {
            typing_ms: 200,
            deleting_ms: 100,
            pause_ms: 2000,
            gap_ms: 0,
        }
    }
}

/// Pointer-following background gradient.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GlowConfig {
    /// How far the purple and pink layers sit from the pointer, diagonally.
    pub offset_px: f64,
}

impl Default for GlowConfig {
    fn default() -> Self {
        Self { offset_px: 100.0 }
    }
}

/// Contact form limits.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ContactConfig {
    pub max_message_len: usize,
    /// Delay the simulated submitter waits before reporting success.
    pub simulated_delay_ms: u64,
    /// How long a sent/failed notice stays up before the form goes idle.
    pub status_reset_ms: u64,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            max_message_len: 5000,
            simulated_delay_ms: 1000,
            status_reset_ms: 3000,
        }
    }
}

impl SiteConfig {
    /// Load config from `portfolio.toml` in the given root directory.
    /// Returns default config if file doesn't exist or is invalid.
    pub fn load(root: &Path) -> Self {
        Self::load_from_path(&root.join(CONFIG_FILE))
    }

    /// Load config from a specific path, falling back to defaults.
    pub fn load_from_path(path: &Path) -> Self {
        match Self::try_load_from_path(path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("ignoring {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Like [`SiteConfig::load_from_path`] but surfaces read/parse errors.
    /// A missing file is not an error.
    pub fn try_load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Self::from_toml_str(&content)
    }

    /// Parse config text and clamp out-of-range values.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        Ok(config.normalized())
    }

    fn normalized(mut self) -> Self {
        let divisor = self.tracker.probe_divisor;
        if !divisor.is_finite() || divisor < 1.0 {
            tracing::warn!(divisor, "tracker.probe_divisor out of range, using 3");
            self.tracker.probe_divisor = TrackerConfig::default().probe_divisor;
        }
        if !self.tracker.navbar_offset.is_finite() {
            self.tracker.navbar_offset = TrackerConfig::default().navbar_offset;
        }
        if !self.glow.offset_px.is_finite() {
            self.glow.offset_px = GlowConfig::default().offset_px;
        }
        self
    }
}
