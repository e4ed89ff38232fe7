#![forbid(unsafe_code)]

//! Cross-axis sizing. No sharing happens on this axis; each child is clamped
//! on its own, starting from the container's full cross extent.

use crate::policy::{Policy, SizePolicy};

/// Size of a child along the cross axis of a container `extent` cells deep.
pub fn cross_size(policy: &SizePolicy, extent: u16) -> u16 {
    match policy.policy {
        Policy::Fixed => policy.hint,
        Policy::Ignored | Policy::Preferred | Policy::Expanding => policy.clamp(extent),
        Policy::Maximum => extent.min(policy.hint),
        Policy::Minimum | Policy::MinimumExpanding => extent.min(policy.max).max(policy.hint),
    }
}
