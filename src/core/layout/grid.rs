//=========================================================================
// Grid Sizer
//=========================================================================
//
// Lays children out row-major in a fixed number of columns. Every cell has
// the same size: either fixed, or the largest preferred width and height
// among the children. Children are assigned their whole cell.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use super::{Layoutable, Padding, Rect};

//=== GridSizer ===========================================================

pub struct GridSizer<T: Layoutable = Box<dyn Layoutable>> {
    columns: usize,
    cell_size: Option<(f32, f32)>,
    spacing: (f32, f32),
    padding: Padding,
    children: Vec<T>,
}

impl<T: Layoutable> GridSizer<T> {
    /// # Panics
    ///
    /// Panics if `columns` is zero.
    pub fn new(columns: usize) -> Self {
        assert!(columns > 0, "Grid must have at least one column");
        Self {
            columns,
            cell_size: None,
            spacing: (0.0, 0.0),
            padding: Padding::ZERO,
            children: Vec::new(),
        }
    }

    //--- Configuration ----------------------------------------------------

    /// Uses a fixed cell size instead of the largest child's.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is not positive.
    pub fn with_cell_size(mut self, width: f32, height: f32) -> Self {
        assert!(
            width > 0.0 && height > 0.0,
            "Cell size must be positive, got {}x{}",
            width,
            height
        );
        self.cell_size = Some((width, height));
        self
    }

    /// Gaps between columns and between rows.
    ///
    /// # Panics
    ///
    /// Panics if either gap is negative.
    pub fn with_spacing(mut self, horizontal: f32, vertical: f32) -> Self {
        assert!(
            horizontal >= 0.0 && vertical >= 0.0,
            "Spacing must be non-negative, got {}x{}",
            horizontal,
            vertical
        );
        self.spacing = (horizontal, vertical);
        self
    }

    pub fn with_padding(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self
    }

    pub fn columns(&self) -> usize {
        self.columns
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

    /// Rows needed for the current children.
    pub fn rows(&self) -> usize {
        self.children.len().div_ceil(self.columns)
    }

    /// Size of one cell.
    pub fn cell_size(&self) -> (f32, f32) {
        self.cell_size.unwrap_or_else(|| {
            self.children
                .iter()
                .map(Layoutable::preferred_size)
                .fold((0.0, 0.0), |(w, h), (cw, ch)| (f32::max(w, cw), f32::max(h, ch)))
        })
    }

    //--- Layout -----------------------------------------------------------

    /// Places every child starting at `origin` and returns the occupied
    /// `(width, height)`, padding included.
    pub fn layout(&mut self, origin: (f32, f32)) -> (f32, f32) {
        let (cell_w, cell_h) = self.cell_size();
        let (gap_x, gap_y) = self.spacing;
        let left = origin.0 + self.padding.left;
        let top = origin.1 + self.padding.top;

        for (index, child) in self.children.iter_mut().enumerate() {
            let column = (index % self.columns) as f32;
            let row = (index / self.columns) as f32;
            child.set_bounds(Rect::new(
                left + column * (cell_w + gap_x),
                top + row * (cell_h + gap_y),
                cell_w,
                cell_h,
            ));
        }

        self.occupied()
    }

    fn occupied(&self) -> (f32, f32) {
        let (cell_w, cell_h) = self.cell_size();
        let (gap_x, gap_y) = self.spacing;
        let columns = self.children.len().min(self.columns);
        let rows = self.rows();

        let span = |count: usize, cell: f32, gap: f32| {
            if count == 0 {
                0.0
            } else {
                count as f32 * cell + (count - 1) as f32 * gap
            }
        };

        (
            self.padding.horizontal() + span(columns, cell_w, gap_x),
            self.padding.vertical() + span(rows, cell_h, gap_y),
        )
    }
}

impl<T: Layoutable> Layoutable for GridSizer<T> {
    fn preferred_size(&self) -> (f32, f32) {
        self.occupied()
    }

    fn set_bounds(&mut self, bounds: Rect) {
        self.layout((bounds.x, bounds.y));
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
