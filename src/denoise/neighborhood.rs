//! Local intensity estimation from a pixel's 8-connected neighborhood.
//!
//! Each in-bounds pixel classifies into a positional category with a fixed
//! neighbor-offset table: 3 neighbors in a corner, 5 on an edge, 8 in the
//! interior. The estimate is the unweighted integer-truncated mean of the
//! neighbor intensities, excluding the pixel itself, and never reads outside
//! the image bounds.

use crate::error::CoreError;
use crate::image::ImageView;

/// Corner positions of the image rectangle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

/// Non-corner border positions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Edge {
    Top,
    Bottom,
    Left,
    Right,
}

/// Positional category of a pixel; selects the neighbor-offset table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PixelPosition {
    Corner(Corner),
    Edge(Edge),
    Interior,
}

/// Neighbor offsets as (dx, dy) relative to the classified pixel.
type Offsets = &'static [(isize, isize)];

const TOP_LEFT: Offsets = &[(1, 0), (0, 1), (1, 1)];
const TOP_RIGHT: Offsets = &[(-1, 0), (0, 1), (-1, 1)];
const BOTTOM_LEFT: Offsets = &[(1, 0), (0, -1), (1, -1)];
const BOTTOM_RIGHT: Offsets = &[(-1, 0), (0, -1), (-1, -1)];

const TOP: Offsets = &[(-1, 0), (1, 0), (-1, 1), (0, 1), (1, 1)];
const BOTTOM: Offsets = &[(-1, 0), (1, 0), (-1, -1), (0, -1), (1, -1)];
const LEFT: Offsets = &[(0, -1), (0, 1), (1, -1), (1, 0), (1, 1)];
const RIGHT: Offsets = &[(0, -1), (0, 1), (-1, -1), (-1, 0), (-1, 1)];

const INTERIOR: Offsets = &[
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

impl PixelPosition {
    /// Classify an in-bounds coordinate of a `width × height` image with
    /// both dimensions at least 2.
    pub fn classify(x: usize, y: usize, width: usize, height: usize) -> Self {
        let left = x == 0;
        let right = x == width - 1;
        let top = y == 0;
        let bottom = y == height - 1;
        match (left, right, top, bottom) {
            (true, _, true, _) => Self::Corner(Corner::TopLeft),
            (_, true, true, _) => Self::Corner(Corner::TopRight),
            (true, _, _, true) => Self::Corner(Corner::BottomLeft),
            (_, true, _, true) => Self::Corner(Corner::BottomRight),
            (_, _, true, _) => Self::Edge(Edge::Top),
            (_, _, _, true) => Self::Edge(Edge::Bottom),
            (true, _, _, _) => Self::Edge(Edge::Left),
            (_, true, _, _) => Self::Edge(Edge::Right),
            _ => Self::Interior,
        }
    }

    /// Offset table of the existing 8-connected neighbors for this category.
    pub fn neighbor_offsets(self) -> Offsets {
        match self {
            Self::Corner(Corner::TopLeft) => TOP_LEFT,
            Self::Corner(Corner::TopRight) => TOP_RIGHT,
            Self::Corner(Corner::BottomLeft) => BOTTOM_LEFT,
            Self::Corner(Corner::BottomRight) => BOTTOM_RIGHT,
            Self::Edge(Edge::Top) => TOP,
            Self::Edge(Edge::Bottom) => BOTTOM,
            Self::Edge(Edge::Left) => LEFT,
            Self::Edge(Edge::Right) => RIGHT,
            Self::Interior => INTERIOR,
        }
    }
}

/// Integer-truncated mean of the in-bounds 8-connected neighbors of (x, y),
/// excluding the pixel itself.
///
/// Fails with [`CoreError::DegenerateImage`] when either dimension is below 2
/// (a 1-pixel-wide strip has no full neighbor ring anywhere) and with
/// [`CoreError::OutOfBounds`] for coordinates outside the image.
///
/// An all-zero neighborhood returns 0 through an explicit sum check, kept
/// from the reference behavior.
pub fn neighborhood_average<I>(source: &I, x: usize, y: usize) -> Result<u8, CoreError>
where
    I: ImageView<Pixel = u8>,
{
    let (w, h) = (source.width(), source.height());
    if w < 2 || h < 2 {
        return Err(CoreError::DegenerateImage {
            width: w,
            height: h,
        });
    }
    if x >= w || y >= h {
        return Err(CoreError::OutOfBounds {
            x,
            y,
            width: w,
            height: h,
        });
    }

    let offsets = PixelPosition::classify(x, y, w, h).neighbor_offsets();
    let mut sum: u32 = 0;
    for &(dx, dy) in offsets {
        let nx = (x as isize + dx) as usize;
        let ny = (y as isize + dy) as usize;
        sum += source.row(ny)[nx] as u32;
    }

    if sum == 0 {
        return Ok(0);
    }
    Ok((sum / offsets.len() as u32) as u8)
}
