#![forbid(unsafe_code)]

//! Priority tiers for sharing surplus and collecting deficit.

use crate::policy::{Policy, SizePolicy};

/// A set of policy categories processed together in one round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tier {
    /// Name used in logs.
    pub name: &'static str,
    members: &'static [Policy],
}

impl Tier {
    const fn new(name: &'static str, members: &'static [Policy]) -> Self {
        Self { name, members }
    }

    /// True if children with `policy` belong to this tier.
    #[inline]
    pub fn contains(&self, policy: Policy) -> bool {
        self.members.contains(&policy)
    }

    /// Indices of the tier's members, in child order.
    pub fn select(&self, policies: &[SizePolicy]) -> Vec<usize> {
        policies
            .iter()
            .enumerate()
            .filter(|(_, p)| self.contains(p.policy))
            .map(|(i, _)| i)
            .collect()
    }
}

/// Surplus tiers: expanding children first, then the ones that merely may grow.
pub const GROW_TIERS: [Tier; 2] = [
    Tier::new(
        "grow-expanding",
        &[Policy::Expanding, Policy::MinimumExpanding],
    ),
    Tier::new(
        "grow-preferred",
        &[Policy::Preferred, Policy::Minimum, Policy::Ignored],
    ),
];

/// Deficit tiers: children that tolerate shrinking first, expanding ones last.
pub const SHRINK_TIERS: [Tier; 2] = [
    Tier::new(
        "shrink-preferred",
        &[Policy::Maximum, Policy::Preferred, Policy::Ignored],
    ),
    Tier::new("shrink-expanding", &[Policy::Expanding]),
];
