#![forbid(unsafe_code)]

//! Baseline allocation along the primary axis.

use crate::policy::{Policy, SizePolicy};

/// Baseline sizes plus the signed space left over.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Allocation {
    /// Baseline size per child, in input order.
    pub sizes: Vec<u16>,
    /// Container extent minus the sum of baselines. Positive is surplus,
    /// negative is deficit.
    pub leftover: i64,
}

/// Assign every child its baseline size.
///
/// Runs in three steps, each seeing the space consumed by the previous one:
///
/// 1. `Fixed`, `Minimum`, `MinimumExpanding` take their hint.
/// 2. `Ignored` takes `stretch / total_stretch` of the full container,
///    truncated and clamped into `[min, max]`. The total covers every child.
///    With zero total stretch the hint is used.
/// 3. `Maximum`, `Preferred`, `Expanding` take their hint.
pub fn allocate(policies: &[SizePolicy], available: u16) -> Allocation {
    let total_stretch: u64 = policies.iter().map(|p| u64::from(p.stretch)).sum();
    let mut sizes = vec![0u16; policies.len()];
    let mut leftover = i64::from(available);

    for (i, p) in policies.iter().enumerate() {
        if matches!(
            p.policy,
            Policy::Fixed | Policy::Minimum | Policy::MinimumExpanding
        ) {
            sizes[i] = p.hint;
            leftover -= i64::from(p.hint);
        }
    }

    for (i, p) in policies.iter().enumerate() {
        if p.policy == Policy::Ignored {
            let size = ignored_share(p, total_stretch, available);
            sizes[i] = size;
            leftover -= i64::from(size);
        }
    }

    for (i, p) in policies.iter().enumerate() {
        if matches!(
            p.policy,
            Policy::Maximum | Policy::Preferred | Policy::Expanding
        ) {
            sizes[i] = p.hint;
            leftover -= i64::from(p.hint);
        }
    }

    Allocation { sizes, leftover }
}

fn ignored_share(policy: &SizePolicy, total_stretch: u64, available: u16) -> u16 {
    if total_stretch == 0 {
        return policy.hint;
    }
    let share = u64::from(policy.stretch) * u64::from(available) / total_stretch;
    // share <= available because stretch <= total_stretch
    policy.clamp(share as u16)
}
