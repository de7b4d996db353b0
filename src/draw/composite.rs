use crate::draw::model::{Bounds, Color};
use crate::draw::render::DrawCommand;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RgbaBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

impl RgbaBuffer {
    pub fn new(width: u32, height: u32, fill: Color) -> Self {
        let mut pixels = vec![0u8; (width as usize) * (height as usize) * 4];
        for chunk in pixels.chunks_exact_mut(4) {
            chunk.copy_from_slice(&[fill.r, fill.g, fill.b, fill.a]);
        }
        Self {
            width,
            height,
            pixels,
        }
    }

    pub fn pixel(&self, x: u32, y: u32) -> Color {
        let idx = ((y * self.width + x) * 4) as usize;
        Color::rgba(
            self.pixels[idx],
            self.pixels[idx + 1],
            self.pixels[idx + 2],
            self.pixels[idx + 3],
        )
    }

    fn fill(&mut self, color: Color) {
        for px in self.pixels.chunks_exact_mut(4) {
            px.copy_from_slice(&[color.r, color.g, color.b, color.a]);
        }
    }

    fn blend_rect(&mut self, bounds: Bounds, color: Color) {
        let Some((x0, y0, x1, y1)) = pixel_span(bounds, self.width, self.height) else {
            return;
        };
        for y in y0..y1 {
            for x in x0..x1 {
                let idx = ((y * self.width + x) * 4) as usize;
                let px = &mut self.pixels[idx..idx + 4];
                let blended = blend_pixel(Color::rgba(px[0], px[1], px[2], px[3]), color);
                px.copy_from_slice(&[blended.r, blended.g, blended.b, blended.a]);
            }
        }
    }
}

/// Pixels whose centers fall inside `bounds`, clipped to the surface.
fn pixel_span(bounds: Bounds, width: u32, height: u32) -> Option<(u32, u32, u32, u32)> {
    let clip = |v: f32, max: u32| v.round().clamp(0.0, max as f32) as u32;
    let (x0, x1) = (clip(bounds.left, width), clip(bounds.right, width));
    let (y0, y1) = (clip(bounds.top, height), clip(bounds.bottom, height));
    if x1 <= x0 || y1 <= y0 {
        return None;
    }
    Some((x0, y0, x1, y1))
}

pub fn rasterize(commands: &[DrawCommand], width: u32, height: u32) -> RgbaBuffer {
    let mut buffer = RgbaBuffer::new(width, height, Color::default());
    for command in commands {
        match *command {
            DrawCommand::FillSurface { color } => buffer.fill(color),
            DrawCommand::FillRect { bounds, color } => buffer.blend_rect(bounds, color),
        }
    }
    buffer
}

fn blend_pixel(bottom: Color, top: Color) -> Color {
    let sa = top.a as f32 / 255.0;
    let da = bottom.a as f32 / 255.0;
    let out_a = sa + da * (1.0 - sa);

    if out_a <= f32::EPSILON {
        return Color::rgba(0, 0, 0, 0);
    }

    let blend = |s: u8, d: u8| -> u8 {
        (((s as f32 * sa) + (d as f32 * da * (1.0 - sa))) / out_a)
            .round()
            .clamp(0.0, 255.0) as u8
    };

    Color::rgba(
        blend(top.r, bottom.r),
        blend(top.g, bottom.g),
        blend(top.b, bottom.b),
        (out_a * 255.0).round().clamp(0.0, 255.0) as u8,
    )
}
