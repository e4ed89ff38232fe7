#![forbid(unsafe_code)]

//! Primary/cross axis projection.
//!
//! The negotiation engine only ever sees one-dimensional sizes. These helpers
//! map a horizontal or vertical layout onto that single axis and back, so the
//! same engine serves both orientations.

use quilt_core::geometry::{Point, Size};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::policy::SizePolicy;

/// Anything a linear layout can place.
///
/// The layout borrows children for the duration of one pass and reads only
/// these accessors. Geometry changes go out as effects, never through this
/// trait.
pub trait LayoutChild {
    /// Whether the child takes part in layout at all.
    fn enabled(&self) -> bool;

    /// Policy along the horizontal axis.
    fn width_policy(&self) -> SizePolicy;

    /// Policy along the vertical axis.
    fn height_policy(&self) -> SizePolicy;
}

impl<T: LayoutChild + ?Sized> LayoutChild for &T {
    fn enabled(&self) -> bool {
        (**self).enabled()
    }

    fn width_policy(&self) -> SizePolicy {
        (**self).width_policy()
    }

    fn height_policy(&self) -> SizePolicy {
        (**self).height_policy()
    }
}

/// The axis along which a linear layout distributes space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Orientation {
    /// Children side by side, left to right.
    #[default]
    Horizontal,
    /// Children stacked, top to bottom.
    Vertical,
}

impl Orientation {
    /// Extent of `size` along the primary axis.
    #[inline]
    pub const fn primary(self, size: Size) -> u16 {
        match self {
            Orientation::Horizontal => size.width,
            Orientation::Vertical => size.height,
        }
    }

    /// Extent of `size` along the cross axis.
    #[inline]
    pub const fn cross(self, size: Size) -> u16 {
        match self {
            Orientation::Horizontal => size.height,
            Orientation::Vertical => size.width,
        }
    }

    /// Build a size from primary and cross extents.
    #[inline]
    pub const fn compose(self, primary: u16, cross: u16) -> Size {
        match self {
            Orientation::Horizontal => Size::new(primary, cross),
            Orientation::Vertical => Size::new(cross, primary),
        }
    }

    /// Offset `origin` by `primary` along the primary axis (saturating).
    #[inline]
    pub const fn advance(self, origin: Point, primary: u16) -> Point {
        match self {
            Orientation::Horizontal => Point::new(origin.x.saturating_add(primary), origin.y),
            Orientation::Vertical => Point::new(origin.x, origin.y.saturating_add(primary)),
        }
    }

    /// The child's policy along the primary axis.
    #[inline]
    pub fn primary_policy<C: LayoutChild + ?Sized>(self, child: &C) -> SizePolicy {
        match self {
            Orientation::Horizontal => child.width_policy(),
            Orientation::Vertical => child.height_policy(),
        }
    }

    /// The child's policy along the cross axis.
    #[inline]
    pub fn cross_policy<C: LayoutChild + ?Sized>(self, child: &C) -> SizePolicy {
        match self {
            Orientation::Horizontal => child.height_policy(),
            Orientation::Vertical => child.width_policy(),
        }
    }
}
