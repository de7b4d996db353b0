use serde::{Deserialize, Serialize};

use crate::draw::model::Color;
use crate::draw::palette::{default_palette, OFF_WHITE, TRANSLUCENT_RED};

pub const DEFAULT_MILESTONE_INTERVAL: u32 = 5;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DrawSettings {
    #[serde(default = "default_palette")]
    pub palette: Vec<Color>,
    #[serde(default = "default_background_color")]
    pub background_color: Color,
    #[serde(default = "default_initial_color")]
    pub initial_color: Color,
    /// Fixed color picker seed. `None` means the host seeds from the clock.
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default = "default_milestone_interval")]
    pub milestone_interval: u32,
    #[serde(default)]
    pub debug_logging: bool,
    #[serde(default)]
    pub log_file: Option<String>,
    #[serde(default)]
    pub notification_log: Option<String>,
}

fn default_background_color() -> Color {
    OFF_WHITE
}

fn default_initial_color() -> Color {
    TRANSLUCENT_RED
}

fn default_milestone_interval() -> u32 {
    DEFAULT_MILESTONE_INTERVAL
}

impl Default for DrawSettings {
    fn default() -> Self {
        Self {
            palette: default_palette(),
            background_color: default_background_color(),
            initial_color: default_initial_color(),
            seed: None,
            milestone_interval: default_milestone_interval(),
            debug_logging: false,
            log_file: None,
            notification_log: None,
        }
    }
}

impl DrawSettings {
    pub fn sanitize(&mut self) {
        if self.palette.is_empty() {
            tracing::warn!("draw settings palette is empty; using the default palette");
            self.palette = default_palette();
        }
    }

    pub fn resolved_seed(&self, fallback: impl FnOnce() -> u64) -> u64 {
        self.seed.unwrap_or_else(fallback)
    }
}
