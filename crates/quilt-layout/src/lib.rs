#![forbid(unsafe_code)]

//! Size-policy negotiation for linear terminal UI layouts.
//!
//! A [`LinearLayout`] places its children side by side (or stacked) along a
//! primary axis. Each child declares a [`SizePolicy`] per axis. A pass runs:
//!
//! 1. [`allocate`]: baseline sizes from hints and `Ignored` stretch shares.
//! 2. Distribution of any surplus, tier by tier, weighted by stretch.
//! 3. Collection of any deficit, tier by tier, weighted by inverse stretch.
//! 4. Rounding correction in child order after each tier.
//! 5. [`commit`]: `Move`/`Resize` effects, or `Disable` for children that do
//!    not fit.
//!
//! Steps 1 to 4 are available on their own through [`negotiate`].
//!
//! # Example
//!
//! ```
//! use quilt_layout::{SizePolicy, negotiate};
//!
//! let policies = [
//!     SizePolicy::fixed(20),
//!     SizePolicy::expanding(10),
//!     SizePolicy::expanding(10).with_stretch(3),
//! ];
//! let outcome = negotiate(&policies, 100);
//! assert_eq!(outcome.sizes, vec![20, 25, 55]);
//! assert_eq!(outcome.residual, 0);
//! ```

pub mod allocate;
pub mod axis;
mod collect;
pub mod commit;
pub mod cross;
mod distribute;
pub mod linear;
pub mod policy;
mod rounding;
pub mod tier;

use std::cmp::Ordering;

pub use allocate::{Allocation, allocate};
pub use axis::{LayoutChild, Orientation};
pub use commit::{ChildEntry, Placement, commit};
pub use cross::cross_size;
pub use linear::{ChildPolicyError, LinearLayout, PassReport, Solution};
pub use policy::{Policy, PolicyError, SizePolicy};

pub use quilt_core::event::{ChildId, Effect, EffectSink};
pub use quilt_core::geometry::{Point, Rect, Sides, Size};

/// Primary-axis sizes after a full negotiation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Negotiation {
    /// Final size per child, in input order.
    pub sizes: Vec<u16>,
    /// Signed leftover after baseline allocation.
    pub baseline_leftover: i64,
    /// What distribution or collection could not resolve. Positive is unused
    /// space; negative is overflow.
    pub residual: i64,
}

/// Negotiate primary-axis sizes for `policies` within `available` cells.
///
/// Surplus is distributed, deficit is collected, and an exact fit leaves the
/// baseline untouched.
///
/// Policies must already be valid, with `min <= hint <= max`; repair them
/// with [`SizePolicy::normalized`] first. A hint above `max` is otherwise
/// pinned down to `max` as soon as its tier shares out surplus.
/// [`LinearLayout`] normalizes on every pass.
pub fn negotiate(policies: &[SizePolicy], available: u16) -> Negotiation {
    let Allocation {
        mut sizes,
        leftover,
    } = allocate(policies, available);

    quilt_core::debug!(
        children = policies.len(),
        available,
        leftover,
        "baseline allocated"
    );

    let residual = match leftover.cmp(&0) {
        Ordering::Greater => distribute::distribute(policies, &mut sizes, leftover),
        Ordering::Less => -collect::collect(policies, &mut sizes, -leftover),
        Ordering::Equal => 0,
    };

    if residual != 0 {
        quilt_core::warn!(residual, "space left unresolved after negotiation");
    }

    Negotiation {
        sizes,
        baseline_leftover: leftover,
        residual,
    }
}
