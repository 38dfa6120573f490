//=========================================================================
// Tile Geometry
//=========================================================================
//
// Tile ↔ pixel conversion for orthogonal, isometric and staggered maps.
//
// Conventions:
// - `tile_to_pixel` returns the top-left corner of the tile's bounding box.
// - Isometric tile (0, 0) has its bounding box at the origin; columns run
//   down-right and rows down-left, so tiles with `row > col` sit at
//   negative x.
// - Staggered maps shift every other row (axis Y) or column (axis X) by
//   half a tile; `index` selects whether odd or even lines are shifted.
// - Non-orthogonal tiles are diamonds inscribed in their bounding box;
//   `pixel_to_tile` resolves points by that diamond, not the box.
//
//=========================================================================

//=== MapOrientation =========================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StaggerAxis {
    X,
    Y,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StaggerIndex {
    Even,
    Odd,
}

impl StaggerIndex {
    fn is_shifted(self, line: i32) -> bool {
        let odd = line.rem_euclid(2) == 1;
        match self {
            Self::Odd => odd,
            Self::Even => !odd,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapOrientation {
    Orthogonal,
    /// Diamond map.
    Isometric,
    Staggered { axis: StaggerAxis, index: StaggerIndex },
}

//=== TileGeometry ========================================================

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TileGeometry {
    orientation: MapOrientation,
    tile_width: f32,
    tile_height: f32,
}

impl TileGeometry {
    /// # Panics
    ///
    /// Panics if either tile dimension is not positive.
    pub fn new(orientation: MapOrientation, tile_width: f32, tile_height: f32) -> Self {
        assert!(
            tile_width > 0.0 && tile_height > 0.0,
            "Tile size must be positive, got {}x{}",
            tile_width,
            tile_height
        );
        Self {
            orientation,
            tile_width,
            tile_height,
        }
    }

    pub fn orthogonal(tile_width: f32, tile_height: f32) -> Self {
        Self::new(MapOrientation::Orthogonal, tile_width, tile_height)
    }

    pub fn isometric(tile_width: f32, tile_height: f32) -> Self {
        Self::new(MapOrientation::Isometric, tile_width, tile_height)
    }

    pub fn staggered(axis: StaggerAxis, index: StaggerIndex, tile_width: f32, tile_height: f32) -> Self {
        Self::new(MapOrientation::Staggered { axis, index }, tile_width, tile_height)
    }

    pub fn orientation(&self) -> MapOrientation {
        self.orientation
    }

    pub fn tile_size(&self) -> (f32, f32) {
        (self.tile_width, self.tile_height)
    }

    //--- Conversions ------------------------------------------------------

    /// Top-left corner of the tile's bounding box.
    pub fn tile_to_pixel(&self, col: i32, row: i32) -> (f32, f32) {
        let (w, h) = (self.tile_width, self.tile_height);
        let (c, r) = (col as f32, row as f32);

        match self.orientation {
            MapOrientation::Orthogonal => (c * w, r * h),
            MapOrientation::Isometric => ((c - r) * w / 2.0, (c + r) * h / 2.0),
            MapOrientation::Staggered { axis: StaggerAxis::Y, index } => {
                let shift = if index.is_shifted(row) { w / 2.0 } else { 0.0 };
                (c * w + shift, r * h / 2.0)
            }
            MapOrientation::Staggered { axis: StaggerAxis::X, index } => {
                let shift = if index.is_shifted(col) { h / 2.0 } else { 0.0 };
                (c * w / 2.0, r * h + shift)
            }
        }
    }

    /// Center of the tile.
    pub fn tile_center(&self, col: i32, row: i32) -> (f32, f32) {
        let (x, y) = self.tile_to_pixel(col, row);
        (x + self.tile_width / 2.0, y + self.tile_height / 2.0)
    }

    /// Tile containing the pixel.
    pub fn pixel_to_tile(&self, x: f32, y: f32) -> (i32, i32) {
        let (w, h) = (self.tile_width, self.tile_height);

        match self.orientation {
            MapOrientation::Orthogonal => ((x / w).floor() as i32, (y / h).floor() as i32),
            MapOrientation::Isometric => {
                let u = y / h;
                let v = (x - w / 2.0) / w;
                ((u + v).floor() as i32, (u - v).floor() as i32)
            }
            MapOrientation::Staggered { axis: StaggerAxis::Y, index } => {
                let band = (y / (h / 2.0)).floor() as i32;
                self.nearest_diamond([band - 1, band].map(|row| {
                    let shift = if index.is_shifted(row) { w / 2.0 } else { 0.0 };
                    (((x - shift) / w).floor() as i32, row)
                }), x, y)
            }
            MapOrientation::Staggered { axis: StaggerAxis::X, index } => {
                let band = (x / (w / 2.0)).floor() as i32;
                self.nearest_diamond([band - 1, band].map(|col| {
                    let shift = if index.is_shifted(col) { h / 2.0 } else { 0.0 };
                    (col, ((y - shift) / h).floor() as i32)
                }), x, y)
            }
        }
    }

    /// Pixel extent of a `cols × rows` map.
    pub fn map_pixel_size(&self, cols: u32, rows: u32) -> (f32, f32) {
        if cols == 0 || rows == 0 {
            return (0.0, 0.0);
        }
        let (w, h) = (self.tile_width, self.tile_height);
        let (c, r) = (cols as f32, rows as f32);

        match self.orientation {
            MapOrientation::Orthogonal => (c * w, r * h),
            MapOrientation::Isometric => ((c + r) * w / 2.0, (c + r) * h / 2.0),
            MapOrientation::Staggered { axis: StaggerAxis::Y, .. } => {
                let overhang = if rows > 1 { w / 2.0 } else { 0.0 };
                (c * w + overhang, (r + 1.0) * h / 2.0)
            }
            MapOrientation::Staggered { axis: StaggerAxis::X, .. } => {
                let overhang = if cols > 1 { h / 2.0 } else { 0.0 };
                ((c + 1.0) * w / 2.0, r * h + overhang)
            }
        }
    }

    //--- Internal Helpers -------------------------------------------------

    /// Picks the candidate whose diamond is closest to containing the point.
    fn nearest_diamond(&self, candidates: [(i32, i32); 2], x: f32, y: f32) -> (i32, i32) {
        let distance = |&(col, row): &(i32, i32)| {
            let (cx, cy) = self.tile_center(col, row);
            (x - cx).abs() / (self.tile_width / 2.0) + (y - cy).abs() / (self.tile_height / 2.0)
        };

        let [first, second] = candidates;
        if distance(&second) < distance(&first) {
            second
        } else {
            first
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
