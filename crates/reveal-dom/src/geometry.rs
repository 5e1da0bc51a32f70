//! Page-coordinate geometry for visibility computation.
//!
//! Element rectangles live in page coordinates (the coordinate space of the
//! laid-out document). A `Viewport` is the scrolled window onto that space;
//! translating a page rect by the scroll offset yields the viewport-relative
//! rect (the `getBoundingClientRect` analog).

use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle in page coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    pub fn area(&self) -> f32 {
        self.w * self.h
    }

    /// Overlap of two rects, or `None` when they share no area.
    pub fn intersection(&self, other: &Rect) -> Option<Rect> {
        let x = self.x.max(other.x);
        let y = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());
        if right > x && bottom > y {
            Some(Rect::new(x, y, right - x, bottom - y))
        } else {
            None
        }
    }
}

/// The scrolled window onto the page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub scroll_x: f32,
    pub scroll_y: f32,
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    /// Create an unscrolled viewport of the given size.
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            scroll_x: 0.0,
            scroll_y: 0.0,
            width,
            height,
        }
    }

    /// Set the scroll offset.
    pub fn with_scroll(mut self, x: f32, y: f32) -> Self {
        self.scroll_x = x;
        self.scroll_y = y;
        self
    }

    pub fn scroll_to(&mut self, x: f32, y: f32) {
        self.scroll_x = x;
        self.scroll_y = y;
    }

    /// Translate a page rect into viewport coordinates.
    pub fn to_viewport(&self, rect: Rect) -> Rect {
        Rect::new(rect.x - self.scroll_x, rect.y - self.scroll_y, rect.w, rect.h)
    }

    /// Whether the rect is entirely inside the viewport: `top >= 0`,
    /// `left >= 0`, `bottom <= height`, `right <= width` in viewport
    /// coordinates.
    pub fn fully_contains(&self, rect: Rect) -> bool {
        let r = self.to_viewport(rect);
        r.y >= 0.0 && r.x >= 0.0 && r.bottom() <= self.height && r.right() <= self.width
    }

    /// Fraction of the rect's area currently inside the viewport, in [0, 1].
    ///
    /// Zero-area rects yield 0.
    pub fn visible_fraction(&self, rect: Rect) -> f32 {
        let r = self.to_viewport(rect);
        let area = r.area();
        if area <= 0.0 {
            return 0.0;
        }
        let bounds = Rect::new(0.0, 0.0, self.width, self.height);
        match bounds.intersection(&r) {
            Some(overlap) => (overlap.area() / area).clamp(0.0, 1.0),
            None => 0.0,
        }
    }
}
