//! Pointer-following background glow.

use crate::config::GlowConfig;

struct Layer {
    color: &'static str,
    /// Direction of the layer's offset from the pointer, in units of
    /// `offset_px`.
    dx: f64,
    dy: f64,
    fade_pct: u8,
}

const LAYERS: [Layer; 3] = [
    Layer { color: "rgba(59, 130, 246, 0.3)", dx: 0.0, dy: 0.0, fade_pct: 25 },
    Layer { color: "rgba(147, 51, 234, 0.3)", dx: -1.0, dy: 1.0, fade_pct: 35 },
    Layer { color: "rgba(236, 72, 153, 0.3)", dx: 1.0, dy: -1.0, fade_pct: 30 },
];

/// Last known pointer position in viewport (client) coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct PointerGlow {
    x: f64,
    y: f64,
    config: GlowConfig,
}

impl PointerGlow {
    pub fn new(config: GlowConfig) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            config,
        }
    }

    /// Start centred in a viewport of the given size.
    pub fn centred(config: GlowConfig, width: f64, height: f64) -> Self {
        let mut glow = Self::new(config);
        glow.move_to(width / 2.0, height / 2.0);
        glow
    }

    pub fn position(&self) -> (f64, f64) {
        (self.x, self.y)
    }

    /// Record a pointer move. Returns `false` (and keeps the old position)
    /// for non-finite coordinates.
    pub fn move_to(&mut self, x: f64, y: f64) -> bool {
        if !x.is_finite() || !y.is_finite() {
            return false;
        }
        self.x = x;
        self.y = y;
        true
    }

    /// CSS `background` value for the glow layer: blue at the pointer,
    /// purple below-left and pink above-right.
    pub fn css(&self) -> String {
        let (x, y) = (self.x.round(), self.y.round());
        let d = self.config.offset_px;
        LAYERS
            .iter()
            .map(|layer| {
                format!(
                    "radial-gradient(circle at {}px {}px, {}, transparent {}%)",
                    x + layer.dx * d,
                    y + layer.dy * d,
                    layer.color,
                    layer.fade_pct
                )
            })
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl Default for PointerGlow {
    fn default() -> Self {
        Self::new(GlowConfig::default())
    }
}
