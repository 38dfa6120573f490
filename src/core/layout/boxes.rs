//=========================================================================
// Box Sizer
//=========================================================================
//
// Lays children out in a single row or column.
//
// Main axis: children follow each other at their preferred length,
// separated by `spacing`. Cross axis: every child is aligned within the
// line's cross extent, which is the largest preferred cross size when laid
// out from an origin, or the assigned bounds when nested.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use super::{Layoutable, Padding, Rect};

//=== Orientation & Alignment =============================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// Cross-axis placement of a child within its line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    #[default]
    Start,
    Center,
    End,
    /// Child is resized to fill the cross extent.
    Stretch,
}

//=== BoxSizer ============================================================

pub struct BoxSizer<T: Layoutable = Box<dyn Layoutable>> {
    orientation: Orientation,
    spacing: f32,
    padding: Padding,
    alignment: Alignment,
    children: Vec<T>,
}

impl<T: Layoutable> BoxSizer<T> {
    pub fn new(orientation: Orientation) -> Self {
        Self {
            orientation,
            spacing: 0.0,
            padding: Padding::ZERO,
            alignment: Alignment::Start,
            children: Vec::new(),
        }
    }

    pub fn horizontal() -> Self {
        Self::new(Orientation::Horizontal)
    }

    pub fn vertical() -> Self {
        Self::new(Orientation::Vertical)
    }

    //--- Configuration ----------------------------------------------------

    /// # Panics
    ///
    /// Panics if `spacing` is negative.
    pub fn with_spacing(mut self, spacing: f32) -> Self {
        assert!(spacing >= 0.0, "Spacing must be non-negative, got {}", spacing);
        self.spacing = spacing;
        self
    }

    pub fn with_padding(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self
    }

    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    //--- Children ---------------------------------------------------------

    pub fn add(&mut self, child: T) -> &mut Self {
        self.children.push(child);
        self
    }

    pub fn children(&self) -> &[T] {
        &self.children
    }

    pub fn children_mut(&mut self) -> &mut [T] {
        &mut self.children
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    //--- Layout -----------------------------------------------------------

    /// Places every child starting at `origin` and returns the occupied
    /// `(width, height)`, padding included.
    pub fn layout(&mut self, origin: (f32, f32)) -> (f32, f32) {
        let cross = self.max_cross();
        self.place(origin, cross)
    }

    /// Main and cross length of a size for this orientation.
    fn split(&self, (width, height): (f32, f32)) -> (f32, f32) {
        match self.orientation {
            Orientation::Horizontal => (width, height),
            Orientation::Vertical => (height, width),
        }
    }

    fn join(&self, main: f32, cross: f32) -> (f32, f32) {
        match self.orientation {
            Orientation::Horizontal => (main, cross),
            Orientation::Vertical => (cross, main),
        }
    }

    fn max_cross(&self) -> f32 {
        self.children
            .iter()
            .map(|child| self.split(child.preferred_size()).1)
            .fold(0.0, f32::max)
    }

    fn padding_split(&self) -> ((f32, f32), (f32, f32)) {
        let p = self.padding;
        match self.orientation {
            Orientation::Horizontal => ((p.left, p.right), (p.top, p.bottom)),
            Orientation::Vertical => ((p.top, p.bottom), (p.left, p.right)),
        }
    }

    fn place(&mut self, origin: (f32, f32), cross: f32) -> (f32, f32) {
        let ((main_lead, main_trail), (cross_lead, cross_trail)) = self.padding_split();
        let (origin_main, origin_cross) = self.split(origin);

        let mut cursor = origin_main + main_lead;
        let count = self.children.len();

        for index in 0..count {
            let (length, breadth) = self.split(self.children[index].preferred_size());
            let (offset, breadth) = match self.alignment {
                Alignment::Start => (0.0, breadth),
                Alignment::Center => ((cross - breadth) / 2.0, breadth),
                Alignment::End => (cross - breadth, breadth),
                Alignment::Stretch => (0.0, cross),
            };

            let (x, y) = self.join(cursor, origin_cross + cross_lead + offset);
            let (width, height) = self.join(length, breadth);
            self.children[index].set_bounds(Rect::new(x, y, width, height));

            cursor += length;
            if index + 1 < count {
                cursor += self.spacing;
            }
        }

        let main = cursor + main_trail - origin_main;
        self.join(main, cross_lead + cross + cross_trail)
    }
}

impl<T: Layoutable> Layoutable for BoxSizer<T> {
    fn preferred_size(&self) -> (f32, f32) {
        let ((main_lead, main_trail), (cross_lead, cross_trail)) = self.padding_split();
        let main: f32 = self
            .children
            .iter()
            .map(|child| self.split(child.preferred_size()).0)
            .sum();
        let gaps = self.spacing * self.children.len().saturating_sub(1) as f32;

        self.join(
            main_lead + main + gaps + main_trail,
            cross_lead + self.max_cross() + cross_trail,
        )
    }

    /// Lays out at the bounds' origin, aligning across the bounds' cross
    /// extent.
    fn set_bounds(&mut self, bounds: Rect) {
        let (_, cross_padding) = self.padding_split();
        let (_, available) = self.split((bounds.width, bounds.height));
        let cross = (available - cross_padding.0 - cross_padding.1).max(0.0);
        self.place((bounds.x, bounds.y), cross);
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::layout::tests::Block;

    fn bounds(sizer: &BoxSizer<Block>) -> Vec<Rect> {
        sizer.children().iter().map(|block| block.bounds).collect()
    }

    #[test]
    fn horizontal_run_with_spacing_and_padding() {
        let mut sizer = BoxSizer::horizontal()
            .with_spacing(5.0)
            .with_padding(Padding::uniform(2.0));
        sizer.add(Block::new(10.0, 20.0)).add(Block::new(30.0, 10.0));

        let size = sizer.layout((100.0, 50.0));

        assert_eq!(
            bounds(&sizer),
            vec![
                Rect::new(102.0, 52.0, 10.0, 20.0),
                Rect::new(117.0, 52.0, 30.0, 10.0),
            ]
        );
        assert_eq!(size, (49.0, 24.0));
        assert_eq!(sizer.preferred_size(), size);
    }

    #[test]
    fn vertical_center_alignment() {
        let mut sizer = BoxSizer::vertical().with_alignment(Alignment::Center);
        sizer.add(Block::new(40.0, 10.0)).add(Block::new(20.0, 10.0));

        let size = sizer.layout((0.0, 0.0));

        assert_eq!(
            bounds(&sizer),
            vec![Rect::new(0.0, 0.0, 40.0, 10.0), Rect::new(10.0, 10.0, 20.0, 10.0)]
        );
        assert_eq!(size, (40.0, 20.0));
    }

    #[test]
    fn end_and_stretch_alignment() {
        let mut end = BoxSizer::horizontal().with_alignment(Alignment::End);
        end.add(Block::new(10.0, 30.0)).add(Block::new(10.0, 10.0));
        end.layout((0.0, 0.0));
        assert_eq!(end.children()[1].bounds, Rect::new(10.0, 20.0, 10.0, 10.0));

        let mut stretch = BoxSizer::horizontal().with_alignment(Alignment::Stretch);
        stretch.add(Block::new(10.0, 30.0)).add(Block::new(10.0, 10.0));
        stretch.layout((0.0, 0.0));
        assert_eq!(stretch.children()[1].bounds, Rect::new(10.0, 0.0, 10.0, 30.0));
    }

    #[test]
    fn empty_sizer_occupies_padding() {
        let mut sizer: BoxSizer<Block> = BoxSizer::vertical()
            .with_spacing(8.0)
            .with_padding(Padding::new(1.0, 2.0, 3.0, 4.0));

        assert_eq!(sizer.layout((0.0, 0.0)), (4.0, 6.0));
        assert_eq!(sizer.preferred_size(), (4.0, 6.0));
    }

    #[test]
    fn nested_sizer_stretches_to_assigned_bounds() {
        let mut inner = BoxSizer::horizontal().with_alignment(Alignment::Stretch);
        inner.add(Block::new(10.0, 5.0));

        inner.set_bounds(Rect::new(3.0, 4.0, 50.0, 40.0));

        assert_eq!(inner.children()[0].bounds, Rect::new(3.0, 4.0, 10.0, 40.0));
    }

    #[test]
    fn sizers_nest_as_trait_objects() {
        let mut row: BoxSizer = BoxSizer::horizontal().with_spacing(2.0);
        row.add(Box::new(Block::new(10.0, 10.0)));
        row.add(Box::new(Block::new(10.0, 10.0)));

        let mut column: BoxSizer = BoxSizer::vertical();
        column.add(Box::new(row));
        column.add(Box::new(Block::new(5.0, 5.0)));

        assert_eq!(column.layout((0.0, 0.0)), (22.0, 15.0));
    }

    #[test]
    #[should_panic(expected = "Spacing must be non-negative")]
    fn negative_spacing_panics() {
        let _ = BoxSizer::<Block>::horizontal().with_spacing(-1.0);
    }
}
