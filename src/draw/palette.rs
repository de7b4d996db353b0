use crate::draw::model::Color;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::{SystemTime, UNIX_EPOCH};

/// Total number of draws per pick. After the last draw the candidate is kept
/// even if it repeats one of the two previous colors.
pub const MAX_PICK_ATTEMPTS: usize = 5;

pub const PURPLE: Color = Color::argb(0xFF99_0099);
pub const RED: Color = Color::argb(0xFFFF_0000);
pub const LIGHT_GREEN: Color = Color::argb(0xFFCC_FFCC);
pub const ORANGE: Color = Color::argb(0xFFFF_9933);
pub const PINK: Color = Color::argb(0xFFFF_99FF);
pub const BROWN: Color = Color::argb(0xFF99_6600);
pub const TRANSLUCENT_RED: Color = Color::argb(0x22FF_0000);
pub const OFF_WHITE: Color = Color::argb(0xFFF8_EFE0);

pub fn default_palette() -> Vec<Color> {
    vec![
        PURPLE,
        RED,
        LIGHT_GREEN,
        ORANGE,
        PINK,
        BROWN,
        TRANSLUCENT_RED,
        Color::BLACK,
        Color::BLUE,
        Color::CYAN,
        Color::MAGENTA,
        Color::YELLOW,
        Color::GRAY,
    ]
}

/// Seed derived from the wall clock, for hosts that do not pin one.
pub fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as u64)
        .unwrap_or_default()
}

/// Draws colors from a fixed palette while trying not to repeat either of the
/// two most recently assigned colors. The generator is seeded once and never
/// reseeded.
#[derive(Debug, Clone)]
pub struct ColorPicker {
    palette: Vec<Color>,
    rng: StdRng,
}

impl ColorPicker {
    /// An empty palette falls back to [`default_palette`].
    pub fn new(palette: Vec<Color>, seed: u64) -> Self {
        let palette = if palette.is_empty() {
            default_palette()
        } else {
            palette
        };
        Self {
            palette,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn palette(&self) -> &[Color] {
        &self.palette
    }

    /// `recent` is `[last, second_to_last]`; either may be absent.
    pub fn pick_next(&mut self, recent: [Option<Color>; 2]) -> Color {
        let mut candidate = self.draw();
        for _ in 1..MAX_PICK_ATTEMPTS {
            if !recent.contains(&Some(candidate)) {
                break;
            }
            candidate = self.draw();
        }
        candidate
    }

    fn draw(&mut self) -> Color {
        self.palette[self.rng.gen_range(0..self.palette.len())]
    }
}
