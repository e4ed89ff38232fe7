#![forbid(unsafe_code)]

//! Collecting space back when children ask for more than the container has.
//!
//! The dual of [`crate::distribute`]. Shares are weighted by the inverse of
//! each member's normalized stretch, so heavily stretched children give up
//! the least.

use crate::policy::SizePolicy;
use crate::rounding::{absorb_deficit, remainder_order};
use crate::tier::{SHRINK_TIERS, Tier};

/// Shrink children to cover `deficit` (a positive amount), tier by tier.
///
/// Returns the part of the deficit no tier could absorb because every member
/// reached its minimum.
pub(crate) fn collect(policies: &[SizePolicy], sizes: &mut [u16], mut deficit: i64) -> i64 {
    for tier in &SHRINK_TIERS {
        if deficit <= 0 {
            break;
        }
        deficit = shrink_tier(tier, policies, sizes, deficit);
    }
    deficit
}

#[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
fn shrink_tier(tier: &Tier, policies: &[SizePolicy], sizes: &mut [u16], deficit: i64) -> i64 {
    let members = tier.select(policies);
    if members.is_empty() {
        return deficit;
    }
    if members.iter().all(|&i| policies[i].stretch == 0) {
        quilt_core::debug!(tier = tier.name, deficit, "tier has no stretch; skipped");
        return deficit;
    }

    let remaining = take_proportionally(tier, policies, sizes, members.clone(), deficit);
    absorb_deficit(policies, sizes, &members, remaining)
}

/// Fixed-point scale for inverse weights. Divisible by every stretch in
/// 1..=16, so common weights invert exactly.
const INVERSE_SCALE: i64 = 720_720;

/// Inverse-weighted deductions for the working set.
///
/// Member `i` contributes `(T / s_i) / sum_j(T / s_j)` of the deficit, where
/// `T` is the working set's total stretch. `T` cancels, leaving
/// `(1 / s_i) / sum_j(1 / s_j)`, evaluated in fixed point.
struct Deductions {
    inverse: Vec<i128>,
    total_inverse: i128,
}

impl Deductions {
    fn new(policies: &[SizePolicy], working: &[usize]) -> Self {
        // zero-stretch members are weighted as stretch 1
        let inverse: Vec<i128> = working
            .iter()
            .map(|&i| i128::from(INVERSE_SCALE / i64::from(policies[i].stretch.max(1))))
            .collect();
        let total_inverse = inverse.iter().sum();
        Self {
            inverse,
            total_inverse,
        }
    }

    /// Whether the exact share at `pos` is more than `room` cells.
    fn exceeds(&self, pos: usize, deficit: i64, room: i64) -> bool {
        i128::from(room) * self.total_inverse < i128::from(deficit) * self.inverse[pos]
    }

    /// Floored shares, topped up by largest remainder so they sum to `deficit`.
    fn split(&self, deficit: i64, out: &mut Vec<i64>) {
        let owed: Vec<i128> = self
            .inverse
            .iter()
            .map(|&inv| i128::from(deficit) * inv)
            .collect();
        let remainders: Vec<i128> = owed.iter().map(|&o| o % self.total_inverse).collect();

        out.clear();
        out.extend(owed.iter().map(|&o| (o / self.total_inverse) as i64));
        let floored: i64 = out.iter().sum();
        let units = usize::try_from(deficit - floored).unwrap_or(0);
        for pos in remainder_order(&remainders).into_iter().take(units) {
            out[pos] += 1;
        }
    }
}

/// Proportional pass with renegotiation: a member whose exact share would
/// drop it below its minimum is pinned there and removed, and the rest
/// re-split what is left.
#[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
fn take_proportionally(
    tier: &Tier,
    policies: &[SizePolicy],
    sizes: &mut [u16],
    mut working: Vec<usize>,
    mut deficit: i64,
) -> i64 {
    let mut taken: Vec<i64> = Vec::with_capacity(working.len());
    loop {
        if working.is_empty() || deficit <= 0 {
            return deficit;
        }
        let deductions = Deductions::new(policies, &working);

        let underflow = working.iter().enumerate().position(|(pos, &i)| {
            let room = i64::from(sizes[i]) - i64::from(policies[i].min);
            deductions.exceeds(pos, deficit, room)
        });

        match underflow {
            Some(pos) => {
                let i = working.remove(pos);
                let given = i64::from(sizes[i]) - i64::from(policies[i].min);
                sizes[i] = policies[i].min;
                deficit -= given;
                quilt_core::trace!(
                    tier = tier.name,
                    child = i,
                    size = sizes[i],
                    deficit,
                    "pinned at minimum; renegotiating"
                );
            }
            None => {
                deductions.split(deficit, &mut taken);
                for (&i, &take) in working.iter().zip(&taken) {
                    // size - take >= min >= 0
                    sizes[i] = (i64::from(sizes[i]) - take) as u16;
                    deficit -= take;
                }
                return deficit;
            }
        }
    }
}
