#![forbid(unsafe_code)]

//! Sharing out surplus space.

use crate::policy::SizePolicy;
use crate::rounding::{remainder_order, spread_surplus};
use crate::tier::{GROW_TIERS, Tier};

/// Grow children to consume `surplus`, tier by tier.
///
/// Each tier gets a proportional pass followed by rounding correction; only
/// what the tier cannot absorb moves on to the next one. Returns the surplus
/// no tier could take.
pub(crate) fn distribute(policies: &[SizePolicy], sizes: &mut [u16], mut surplus: i64) -> i64 {
    for tier in &GROW_TIERS {
        if surplus <= 0 {
            break;
        }
        surplus = grow_tier(tier, policies, sizes, surplus);
    }
    surplus
}

#[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
fn grow_tier(tier: &Tier, policies: &[SizePolicy], sizes: &mut [u16], surplus: i64) -> i64 {
    let members = tier.select(policies);
    if members.is_empty() {
        return surplus;
    }
    if members.iter().all(|&i| policies[i].stretch == 0) {
        quilt_core::debug!(tier = tier.name, surplus, "tier has no stretch; skipped");
        return surplus;
    }

    let remaining = share_proportionally(tier, policies, sizes, members.clone(), surplus);
    spread_surplus(policies, sizes, &members, remaining)
}

/// Proportional pass with renegotiation.
///
/// Member `i` is owed `surplus * s_i / T` of the surplus, where `T` is the
/// working set's total stretch. Whenever that exact share would carry a
/// member past its maximum it is pinned there, dropped from the working set,
/// and the shares are recomputed for the rest. Every round removes one
/// member, so this runs at most `working.len() + 1` rounds.
///
/// Once everyone fits, members get the floor of their share and the cells
/// lost to flooring go one each to the largest remainders, ties to the
/// earlier child. A heavier stretch therefore never costs a member a cell.
#[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
fn share_proportionally(
    tier: &Tier,
    policies: &[SizePolicy],
    sizes: &mut [u16],
    mut working: Vec<usize>,
    mut surplus: i64,
) -> i64 {
    let mut additions: Vec<i64> = Vec::with_capacity(working.len());
    let mut remainders: Vec<i64> = Vec::with_capacity(working.len());
    loop {
        if working.is_empty() || surplus <= 0 {
            return surplus;
        }
        let tier_stretch: i64 = working.iter().map(|&i| i64::from(policies[i].stretch)).sum();
        if tier_stretch == 0 {
            return surplus;
        }

        // room * T < surplus * s  <=>  the exact share exceeds the room
        let overflow = working.iter().position(|&i| {
            let room = i64::from(policies[i].max) - i64::from(sizes[i]);
            room * tier_stretch < surplus * i64::from(policies[i].stretch)
        });

        match overflow {
            Some(pos) => {
                let i = working.remove(pos);
                let gained = i64::from(policies[i].max) - i64::from(sizes[i]);
                sizes[i] = policies[i].max;
                surplus -= gained;
                quilt_core::trace!(
                    tier = tier.name,
                    child = i,
                    size = sizes[i],
                    surplus,
                    "pinned at maximum; renegotiating"
                );
            }
            None => {
                additions.clear();
                remainders.clear();
                for &i in &working {
                    let owed = surplus * i64::from(policies[i].stretch);
                    additions.push(owed / tier_stretch);
                    remainders.push(owed % tier_stretch);
                }
                let floored: i64 = additions.iter().sum();
                let units = usize::try_from(surplus - floored).unwrap_or(0);
                for pos in remainder_order(&remainders).into_iter().take(units) {
                    additions[pos] += 1;
                }

                for (&i, &add) in working.iter().zip(&additions) {
                    // add <= max - size, so this fits in u16
                    sizes[i] = (i64::from(sizes[i]) + add) as u16;
                    surplus -= add;
                }
                return surplus;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(policies: &[SizePolicy], sizes: &mut [u16], surplus: i64) -> i64 {
        distribute(policies, sizes, surplus)
    }

    #[test]
    fn splits_by_stretch() {
        let policies = [
            SizePolicy::fixed(20),
            SizePolicy::expanding(10).with_max(1000),
            SizePolicy::expanding(10).with_max(1000).with_stretch(3),
        ];
        let mut sizes = [20u16, 10, 10];
        assert_eq!(run(&policies, &mut sizes, 60), 0);
        assert_eq!(sizes, [20, 25, 55]);
    }

    #[test]
    fn expanding_tier_is_served_before_preferred() {
        let policies = [SizePolicy::preferred(5), SizePolicy::expanding(5)];
        let mut sizes = [5u16, 5];
        assert_eq!(run(&policies, &mut sizes, 30), 0);
        assert_eq!(sizes, [5, 35]);
    }

    #[test]
    fn overflow_moves_to_second_tier() {
        let policies = [
            SizePolicy::minimum(5),
            SizePolicy::minimum_expanding(5).with_max(10),
        ];
        let mut sizes = [5u16, 5];
        assert_eq!(run(&policies, &mut sizes, 20), 0);
        assert_eq!(sizes, [20, 10]);
    }

    #[test]
    fn renegotiates_after_member_hits_max() {
        let policies = [
            SizePolicy::expanding(0).with_max(5),
            SizePolicy::expanding(0),
            SizePolicy::expanding(0),
        ];
        let mut sizes = [0u16, 0, 0];
        // 30 / 3 = 10 would overflow child 0; it pins at 5 and 25 is re-split
        assert_eq!(run(&policies, &mut sizes, 30), 0);
        assert_eq!(sizes, [5, 13, 12]);
    }

    #[test]
    fn rounding_residual_is_placed_in_child_order() {
        let policies = [SizePolicy::expanding(0); 3];
        let mut sizes = [0u16; 3];
        assert_eq!(run(&policies, &mut sizes, 11), 0);
        assert_eq!(sizes, [4, 4, 3]);
    }

    #[test]
    fn larger_remainder_wins_the_rounding_cell() {
        // 5 * 3 / 4 = 3.75 and 5 * 1 / 4 = 1.25
        let policies = [
            SizePolicy::expanding(0),
            SizePolicy::expanding(0).with_stretch(3),
        ];
        let mut sizes = [0u16; 2];
        assert_eq!(run(&policies, &mut sizes, 5), 0);
        assert_eq!(sizes, [1, 4]);
    }

    #[test]
    fn member_already_at_max_is_pinned_even_when_its_floor_is_zero() {
        // child 3 is owed most of a cell it has no room for
        let base = [
            SizePolicy::expanding(2).with_stretch(3),
            SizePolicy::minimum_expanding(6).with_max(16),
            SizePolicy::fixed(7),
            SizePolicy::expanding(1).with_max(1).with_stretch(4),
        ];
        let mut before = [2u16, 6, 7, 1];
        assert_eq!(run(&base, &mut before, 2), 0);
        assert_eq!(before, [4, 6, 7, 1]);

        let mut heavier = base;
        heavier[0] = heavier[0].with_stretch(4);
        let mut after = [2u16, 6, 7, 1];
        assert_eq!(run(&heavier, &mut after, 2), 0);
        assert_eq!(after, [4, 6, 7, 1]);
    }

    #[test]
    fn unabsorbed_surplus_is_returned() {
        let policies = [
            SizePolicy::expanding(2).with_max(4),
            SizePolicy::fixed(3),
            SizePolicy::maximum(1),
        ];
        let mut sizes = [2u16, 3, 1];
        assert_eq!(run(&policies, &mut sizes, 10), 8);
        assert_eq!(sizes, [4, 3, 1]);
    }

    #[test]
    fn zero_stretch_tier_passes_surplus_on() {
        let policies = [
            SizePolicy::expanding(1).with_stretch(0),
            SizePolicy::preferred(1),
        ];
        let mut sizes = [1u16, 1];
        assert_eq!(run(&policies, &mut sizes, 9), 0);
        assert_eq!(sizes, [1, 10]);
    }

    #[test]
    fn cascading_overflow_in_long_tier() {
        // every member overflows in sequence; each round removes one
        let policies: Vec<SizePolicy> = (1..=64u16)
            .map(|m| SizePolicy::expanding(0).with_max(m))
            .collect();
        let mut sizes = vec![0u16; policies.len()];
        let total: i64 = (1..=64).sum();
        assert_eq!(run(&policies, &mut sizes, total + 100), 100);
        for (i, &s) in sizes.iter().enumerate() {
            assert_eq!(s as usize, i + 1);
        }
    }
}
