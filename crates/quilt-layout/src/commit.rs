#![forbid(unsafe_code)]

//! Turning negotiated sizes into placement effects.

use quilt_core::event::{ChildId, Effect, EffectSink};
use quilt_core::geometry::{Rect, Size};

use crate::axis::Orientation;

/// One child's result for a single layout pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChildEntry {
    /// Handle into the container's child list.
    pub child: ChildId,
    /// Negotiated width.
    pub width: u16,
    /// Negotiated height.
    pub height: u16,
    /// Set by [`commit`]: false when the child could not be placed.
    pub enabled: bool,
}

impl ChildEntry {
    /// Width and height as a [`Size`].
    #[inline]
    pub const fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

/// A child that received geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    /// Handle into the container's child list.
    pub child: ChildId,
    /// Final position and size.
    pub rect: Rect,
}

/// Place entries one after another along the primary axis of `inner`.
///
/// A child with a zero dimension, or one that would cross the container's
/// far edge on either axis, is disabled instead: it gets a single
/// [`Effect::Disable`] and does not advance the running offset. Every other
/// child gets [`Effect::Move`] then [`Effect::Resize`].
pub fn commit<S: EffectSink + ?Sized>(
    orientation: Orientation,
    inner: Rect,
    entries: &mut [ChildEntry],
    sink: &mut S,
) -> Vec<Placement> {
    let limit = u32::from(orientation.primary(inner.size()));
    let depth = u32::from(orientation.cross(inner.size()));
    let mut offset: u32 = 0;
    let mut placed = Vec::with_capacity(entries.len());

    for entry in entries.iter_mut() {
        let size = entry.size();
        let primary = u32::from(orientation.primary(size));
        let cross = u32::from(orientation.cross(size));

        if size.is_empty() || offset + primary > limit || cross > depth {
            entry.enabled = false;
            quilt_core::debug!(
                child = entry.child.index(),
                width = entry.width,
                height = entry.height,
                offset,
                "child cannot be placed; disabled"
            );
            sink.post(Effect::Disable {
                child: entry.child,
                notify_parent: false,
            });
            continue;
        }

        // offset + primary <= limit <= u16::MAX
        let to = orientation.advance(inner.origin(), offset as u16);
        entry.enabled = true;
        sink.post(Effect::Move {
            child: entry.child,
            to,
        });
        sink.post(Effect::Resize {
            child: entry.child,
            size,
        });
        placed.push(Placement {
            child: entry.child,
            rect: Rect::from_parts(to, size),
        });
        offset += primary;
    }

    placed
}

#[cfg(test)]
mod tests {
    use super::*;
    use quilt_core::geometry::Point;

    fn entry(child: usize, width: u16, height: u16) -> ChildEntry {
        ChildEntry {
            child: ChildId(child),
            width,
            height,
            enabled: true,
        }
    }

    #[test]
    fn places_sequentially_from_inner_origin() {
        let mut entries = [entry(0, 10, 5), entry(1, 20, 5)];
        let mut effects: Vec<Effect> = Vec::new();
        let placed = commit(
            Orientation::Horizontal,
            Rect::new(2, 1, 40, 5),
            &mut entries,
            &mut effects,
        );
        assert_eq!(placed[0].rect, Rect::new(2, 1, 10, 5));
        assert_eq!(placed[1].rect, Rect::new(12, 1, 20, 5));
        assert_eq!(
            effects,
            vec![
                Effect::Move {
                    child: ChildId(0),
                    to: Point::new(2, 1)
                },
                Effect::Resize {
                    child: ChildId(0),
                    size: Size::new(10, 5)
                },
                Effect::Move {
                    child: ChildId(1),
                    to: Point::new(12, 1)
                },
                Effect::Resize {
                    child: ChildId(1),
                    size: Size::new(20, 5)
                },
            ]
        );
    }

    #[test]
    fn vertical_advances_rows() {
        let mut entries = [entry(0, 8, 3), entry(1, 8, 4)];
        let mut effects: Vec<Effect> = Vec::new();
        let placed = commit(
            Orientation::Vertical,
            Rect::new(0, 0, 8, 10),
            &mut entries,
            &mut effects,
        );
        assert_eq!(placed[1].rect, Rect::new(0, 3, 8, 4));
    }

    #[test]
    fn zero_size_is_disabled_without_geometry() {
        let mut entries = [entry(0, 0, 5), entry(1, 6, 5)];
        let mut effects: Vec<Effect> = Vec::new();
        let placed = commit(
            Orientation::Horizontal,
            Rect::new(0, 0, 10, 5),
            &mut entries,
            &mut effects,
        );
        assert!(!entries[0].enabled);
        assert!(entries[1].enabled);
        assert_eq!(placed.len(), 1);
        assert_eq!(placed[0].rect.x, 0);
        assert_eq!(
            effects[0],
            Effect::Disable {
                child: ChildId(0),
                notify_parent: false
            }
        );
        assert_eq!(effects.len(), 3);
    }

    #[test]
    fn overflow_disables_but_later_children_may_fit() {
        let mut entries = [entry(0, 7, 2), entry(1, 5, 2), entry(2, 3, 2)];
        let mut effects: Vec<Effect> = Vec::new();
        let placed = commit(
            Orientation::Horizontal,
            Rect::new(0, 0, 10, 2),
            &mut entries,
            &mut effects,
        );
        let ids: Vec<usize> = placed.iter().map(|p| p.child.index()).collect();
        assert_eq!(ids, vec![0, 2]);
        assert_eq!(placed[1].rect.x, 7);
        assert!(!entries[1].enabled);
    }

    #[test]
    fn cross_overflow_disables() {
        let mut entries = [entry(0, 4, 9)];
        let mut effects: Vec<Effect> = Vec::new();
        let placed = commit(
            Orientation::Horizontal,
            Rect::new(0, 0, 10, 8),
            &mut entries,
            &mut effects,
        );
        assert!(placed.is_empty());
        assert_eq!(effects.len(), 1);
    }
}
