#![forbid(unsafe_code)]

//! Linear (single-axis) layouts: the container-facing entry point.

use std::fmt;

use quilt_core::event::{ChildId, EffectSink};
use quilt_core::geometry::{Rect, Sides, Size};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::axis::{LayoutChild, Orientation};
use crate::commit::{ChildEntry, Placement, commit};
use crate::cross::cross_size;
use crate::negotiate;
use crate::policy::{PolicyError, SizePolicy};

/// Sizes computed for one pass, before any effects are posted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    /// One entry per enabled child, in child order.
    pub entries: Vec<ChildEntry>,
    /// Signed primary-axis space left after baseline allocation.
    pub baseline_leftover: i64,
    /// Space still unresolved after distribution or collection. Negative
    /// means the children overflow the container.
    pub residual: i64,
}

/// What a completed layout pass did.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PassReport {
    /// Signed primary-axis space left after baseline allocation.
    pub baseline_leftover: i64,
    /// Space still unresolved after distribution or collection.
    pub residual: i64,
    /// Children that received geometry, in placement order.
    pub placed: Vec<Placement>,
    /// Enabled children that could not be placed and were disabled.
    pub disabled: Vec<ChildId>,
}

impl PassReport {
    /// Sum of placed primary-axis extents.
    #[must_use]
    pub fn used(&self, orientation: Orientation) -> u32 {
        self.placed
            .iter()
            .map(|p| u32::from(orientation.primary(p.rect.size())))
            .sum()
    }
}

/// A child whose size policy failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChildPolicyError {
    /// Offending child.
    pub child: ChildId,
    /// Axis of the offending policy.
    pub orientation: Orientation,
    /// What is wrong with it.
    pub reason: PolicyError,
}

impl fmt::Display for ChildPolicyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let axis = match self.orientation {
            Orientation::Horizontal => "width",
            Orientation::Vertical => "height",
        };
        write!(
            f,
            "child {} has an invalid {axis} policy: {}",
            self.child.index(),
            self.reason
        )
    }
}

impl std::error::Error for ChildPolicyError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.reason)
    }
}

/// A horizontal or vertical layout negotiating child sizes from their
/// [`SizePolicy`]s.
///
/// The layout holds no per-pass state. Every call recomputes everything from
/// the container size and the children's current policies.
///
/// # Example
///
/// ```
/// use quilt_core::geometry::Rect;
/// use quilt_layout::{Effect, LayoutChild, LinearLayout, SizePolicy};
///
/// struct Pane(SizePolicy);
///
/// impl LayoutChild for Pane {
///     fn enabled(&self) -> bool { true }
///     fn width_policy(&self) -> SizePolicy { self.0 }
///     fn height_policy(&self) -> SizePolicy { SizePolicy::expanding(1) }
/// }
///
/// let children = [Pane(SizePolicy::fixed(20)), Pane(SizePolicy::expanding(10))];
/// let mut effects: Vec<Effect> = Vec::new();
/// let report = LinearLayout::horizontal().update_geometry(
///     Rect::new(0, 0, 80, 24),
///     &children,
///     &mut effects,
/// );
/// assert_eq!(report.placed[1].rect, Rect::new(20, 0, 60, 24));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LinearLayout {
    orientation: Orientation,
    border: Sides,
}

impl LinearLayout {
    /// Children side by side.
    pub fn horizontal() -> Self {
        Self {
            orientation: Orientation::Horizontal,
            ..Default::default()
        }
    }

    /// Children stacked top to bottom.
    pub fn vertical() -> Self {
        Self {
            orientation: Orientation::Vertical,
            ..Default::default()
        }
    }

    /// Set the orientation.
    #[must_use]
    pub fn orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Set the container border; children are placed inside it.
    #[must_use]
    pub fn border(mut self, border: Sides) -> Self {
        self.border = border;
        self
    }

    /// Current orientation.
    #[must_use]
    pub const fn primary_axis(&self) -> Orientation {
        self.orientation
    }

    /// Current border.
    #[must_use]
    pub const fn border_sides(&self) -> Sides {
        self.border
    }

    /// Check every enabled child's policies on both axes.
    pub fn validate_children<C: LayoutChild>(&self, children: &[C]) -> Result<(), ChildPolicyError> {
        for (i, child) in children.iter().enumerate().filter(|(_, c)| c.enabled()) {
            for orientation in [Orientation::Horizontal, Orientation::Vertical] {
                orientation
                    .primary_policy(child)
                    .validate()
                    .map_err(|reason| ChildPolicyError {
                        child: ChildId(i),
                        orientation,
                        reason,
                    })?;
            }
        }
        Ok(())
    }

    /// Negotiate sizes for the enabled children of a container whose inner
    /// area is `inner`. Pure; posts nothing.
    ///
    /// Policies are read through [`SizePolicy::normalized`], so an invalid
    /// policy is repaired for the pass rather than rejected.
    pub fn solve<C: LayoutChild>(&self, inner: Size, children: &[C]) -> Solution {
        let orientation = self.orientation;
        let enabled: Vec<usize> = children
            .iter()
            .enumerate()
            .filter(|(_, c)| c.enabled())
            .map(|(i, _)| i)
            .collect();

        let policies: Vec<SizePolicy> = enabled
            .iter()
            .map(|&i| orientation.primary_policy(&children[i]).normalized())
            .collect();
        let outcome = negotiate(&policies, orientation.primary(inner));

        let extent = orientation.cross(inner);
        let entries = enabled
            .iter()
            .zip(&outcome.sizes)
            .map(|(&i, &primary)| {
                let policy = orientation.cross_policy(&children[i]).normalized();
                let cross = cross_size(&policy, extent);
                let size = orientation.compose(primary, cross);
                ChildEntry {
                    child: ChildId(i),
                    width: size.width,
                    height: size.height,
                    enabled: true,
                }
            })
            .collect();

        Solution {
            entries,
            baseline_leftover: outcome.baseline_leftover,
            residual: outcome.residual,
        }
    }

    /// Run a full pass for a container occupying `area`.
    ///
    /// The border is removed first; children are negotiated against the
    /// inner area, then placed through `sink`.
    pub fn update_geometry<C, S>(&self, area: Rect, children: &[C], sink: &mut S) -> PassReport
    where
        C: LayoutChild,
        S: EffectSink + ?Sized,
    {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!(
            "layout_pass",
            orientation = ?self.orientation,
            x = area.x,
            y = area.y,
            w = area.width,
            h = area.height,
            children = children.len()
        )
        .entered();

        let inner = area.inner(self.border);
        let mut solution = self.solve(inner.size(), children);
        let placed = commit(self.orientation, inner, &mut solution.entries, sink);
        let disabled: Vec<ChildId> = solution
            .entries
            .iter()
            .filter(|e| !e.enabled)
            .map(|e| e.child)
            .collect();

        quilt_core::debug!(
            placed = placed.len(),
            disabled = disabled.len(),
            residual = solution.residual,
            "layout pass committed"
        );

        PassReport {
            baseline_leftover: solution.baseline_leftover,
            residual: solution.residual,
            placed,
            disabled,
        }
    }
}
