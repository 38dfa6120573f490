//=========================================================================
// Layout
//=========================================================================
//
// Box and grid sizers over items that opt in through `Layoutable`.
//
// Architecture:
//   BoxSizer<T>  ── Horizontal / Vertical run with cross-axis alignment
//   GridSizer<T> ── fixed column count, uniform cells
//
// Both sizers own their children and are `Layoutable` themselves, so they
// nest. `layout(origin)` places every child and returns the occupied size.
//
//=========================================================================

//=== Module Declarations =================================================

mod boxes;
mod grid;

//=== Public API ==========================================================

pub use boxes::{Alignment, BoxSizer, Orientation};
pub use grid::GridSizer;

//=== Rect ================================================================

/// Axis-aligned rectangle in stage pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }
}

//=== Padding =============================================================

/// Space reserved inside a sizer's edges.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Padding {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Padding {
    pub const ZERO: Self = Self::uniform(0.0);

    pub const fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self { left, top, right, bottom }
    }

    pub const fn uniform(amount: f32) -> Self {
        Self::new(amount, amount, amount, amount)
    }

    pub fn horizontal(&self) -> f32 {
        self.left + self.right
    }

    pub fn vertical(&self) -> f32 {
        self.top + self.bottom
    }
}

//=== Layoutable ==========================================================

/// Something a sizer can measure and place.
pub trait Layoutable {
    /// Size the item would like, as `(width, height)`.
    fn preferred_size(&self) -> (f32, f32);

    /// Receives the rectangle the sizer assigned.
    fn set_bounds(&mut self, bounds: Rect);
}

impl<T: Layoutable + ?Sized> Layoutable for Box<T> {
    fn preferred_size(&self) -> (f32, f32) {
        (**self).preferred_size()
    }

    fn set_bounds(&mut self, bounds: Rect) {
        (**self).set_bounds(bounds)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Fixed-size item that remembers where it was put.
    #[derive(Debug, Clone, Copy, PartialEq)]
    pub(crate) struct Block {
        pub(crate) size: (f32, f32),
        pub(crate) bounds: Rect,
    }

    impl Block {
        pub(crate) fn new(width: f32, height: f32) -> Self {
            Self {
                size: (width, height),
                bounds: Rect::default(),
            }
        }
    }

    impl Layoutable for Block {
        fn preferred_size(&self) -> (f32, f32) {
            self.size
        }

        fn set_bounds(&mut self, bounds: Rect) {
            self.bounds = bounds;
        }
    }

    #[test]
    fn rect_edges_and_containment() {
        let rect = Rect::new(10.0, 20.0, 30.0, 40.0);
        assert_eq!(rect.right(), 40.0);
        assert_eq!(rect.bottom(), 60.0);
        assert!(rect.contains(10.0, 20.0));
        assert!(!rect.contains(40.0, 30.0));
    }

    #[test]
    fn padding_totals() {
        let padding = Padding::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(padding.horizontal(), 4.0);
        assert_eq!(padding.vertical(), 6.0);
        assert_eq!(Padding::ZERO, Padding::default());
    }

    #[test]
    fn boxed_items_forward() {
        let mut item: Box<dyn Layoutable> = Box::new(Block::new(5.0, 6.0));
        assert_eq!(item.preferred_size(), (5.0, 6.0));
        item.set_bounds(Rect::new(1.0, 1.0, 5.0, 6.0));
    }
}
