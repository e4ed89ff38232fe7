#![forbid(unsafe_code)]

//! Unit-by-unit correction of truncation error left by a proportional pass.

use crate::policy::SizePolicy;

/// Order in which the leftover units of a floored proportional split are
/// handed out: largest remainder first, ties to the earlier position.
///
/// Positions with a zero remainder never appear; their share was exact.
pub(crate) fn remainder_order<T: Ord + Copy + Default>(remainders: &[T]) -> Vec<usize> {
    let zero = T::default();
    let mut order: Vec<usize> = (0..remainders.len())
        .filter(|&pos| remainders[pos] > zero)
        .collect();
    order.sort_by(|&a, &b| remainders[b].cmp(&remainders[a]).then(a.cmp(&b)));
    order
}

/// Hand out `surplus` one cell at a time to tier members below their maximum.
///
/// Members are visited in child order, repeatedly, until the surplus is gone
/// or a full sweep changes nothing. Returns what could not be placed.
pub(crate) fn spread_surplus(
    policies: &[SizePolicy],
    sizes: &mut [u16],
    members: &[usize],
    mut surplus: i64,
) -> i64 {
    while surplus > 0 {
        let before = surplus;
        for &i in members {
            if surplus == 0 {
                break;
            }
            if sizes[i] < policies[i].max {
                sizes[i] += 1;
                surplus -= 1;
            }
        }
        if surplus == before {
            break;
        }
    }
    surplus
}

/// Take `deficit` back one cell at a time from tier members above their
/// minimum. Returns what could not be taken.
pub(crate) fn absorb_deficit(
    policies: &[SizePolicy],
    sizes: &mut [u16],
    members: &[usize],
    mut deficit: i64,
) -> i64 {
    while deficit > 0 {
        let before = deficit;
        for &i in members {
            if deficit == 0 {
                break;
            }
            if sizes[i] > policies[i].min {
                sizes[i] -= 1;
                deficit -= 1;
            }
        }
        if deficit == before {
            break;
        }
    }
    deficit
}
