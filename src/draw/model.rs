use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Normalized edges of a rectangle; `left <= right` and `top <= bottom`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Bounds {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Bounds {
    pub fn width(self) -> f32 {
        self.right - self.left
    }

    pub fn height(self) -> f32 {
        self.bottom - self.top
    }

    pub fn center(self) -> Point {
        Point::new(
            self.left + self.width() / 2.0,
            self.bottom - self.height() / 2.0,
        )
    }
}

/// One dragged box. `origin` is fixed when the gesture starts, `current`
/// follows the pointer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    origin: Point,
    current: Point,
}

impl Rect {
    pub fn new(origin: Point) -> Self {
        Self {
            origin,
            current: origin,
        }
    }

    pub fn spanning(origin: Point, current: Point) -> Self {
        Self { origin, current }
    }

    pub fn origin(&self) -> Point {
        self.origin
    }

    pub fn current(&self) -> Point {
        self.current
    }

    pub fn set_current(&mut self, point: Point) {
        self.current = point;
    }

    pub fn bounds(&self) -> Bounds {
        Bounds {
            left: self.origin.x.min(self.current.x),
            top: self.origin.y.min(self.current.y),
            right: self.origin.x.max(self.current.x),
            bottom: self.origin.y.max(self.current.y),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Self = Self::argb(0xFF00_0000);
    pub const BLUE: Self = Self::argb(0xFF00_00FF);
    pub const CYAN: Self = Self::argb(0xFF00_FFFF);
    pub const MAGENTA: Self = Self::argb(0xFFFF_00FF);
    pub const YELLOW: Self = Self::argb(0xFFFF_FF00);
    pub const GRAY: Self = Self::argb(0xFF88_8888);

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Unpacks a `0xAARRGGBB` value.
    pub const fn argb(packed: u32) -> Self {
        Self {
            a: (packed >> 24) as u8,
            r: (packed >> 16) as u8,
            g: (packed >> 8) as u8,
            b: packed as u8,
        }
    }

    pub const fn to_argb(self) -> u32 {
        ((self.a as u32) << 24) | ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    pub const fn opaque(self) -> Self {
        Self { a: 255, ..self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_rect_starts_collapsed_on_origin() {
        let rect = Rect::new(Point::new(4.0, 5.0));
        assert_eq!(rect.current(), rect.origin());
        assert_eq!(rect.bounds().width(), 0.0);
    }

    #[test]
    fn bounds_are_normalized_for_every_drag_direction() {
        let origin = Point::new(10.0, 10.0);
        for current in [
            Point::new(0.0, 0.0),
            Point::new(20.0, 0.0),
            Point::new(0.0, 20.0),
            Point::new(20.0, 20.0),
            Point::new(-5.5, 3.25),
        ] {
            let mut rect = Rect::new(origin);
            rect.set_current(current);
            let bounds = rect.bounds();
            assert!(bounds.left <= bounds.right, "{bounds:?}");
            assert!(bounds.top <= bounds.bottom, "{bounds:?}");
        }

        let rect = Rect::spanning(Point::new(10.0, 2.0), Point::new(-4.0, 8.0));
        assert_eq!(
            rect.bounds(),
            Bounds {
                left: -4.0,
                top: 2.0,
                right: 10.0,
                bottom: 8.0,
            }
        );
    }

    #[test]
    fn bounds_center_is_the_midpoint() {
        let rect = Rect::spanning(Point::new(0.0, 0.0), Point::new(10.0, 20.0));
        assert_eq!(rect.bounds().center(), Point::new(5.0, 10.0));
    }

    #[test]
    fn argb_packing_matches_channel_layout() {
        let color = Color::argb(0x22FF_0080);
        assert_eq!(color, Color::rgba(0xFF, 0x00, 0x80, 0x22));
        assert_eq!(color.to_argb(), 0x22FF_0080);
        assert_eq!(color.opaque().to_argb(), 0xFFFF_0080);
    }
}
