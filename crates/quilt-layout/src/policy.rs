#![forbid(unsafe_code)]

//! Size policies: the sizing contract a child declares for one axis.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How a child wants to be sized along one axis.
///
/// The category decides when the child receives its baseline size and which
/// tier it belongs to when surplus space is shared out or a deficit is
/// collected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Policy {
    /// Always exactly `hint`.
    Fixed,
    /// At least `hint`; grows after expanding siblings are satisfied.
    Minimum,
    /// At least `hint`; grows with the expanding siblings.
    MinimumExpanding,
    /// At most `hint`; gives up space first under pressure.
    Maximum,
    /// Prefers `hint`; may grow or shrink.
    #[default]
    Preferred,
    /// Prefers `hint`; grows first and shrinks last.
    Expanding,
    /// Hint is ignored; baseline is the stretch share of the whole container.
    Ignored,
}

impl Policy {
    /// All categories in declaration order.
    pub const ALL: [Policy; 7] = [
        Policy::Fixed,
        Policy::Minimum,
        Policy::MinimumExpanding,
        Policy::Maximum,
        Policy::Preferred,
        Policy::Expanding,
        Policy::Ignored,
    ];

    /// Short label for logs.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Policy::Fixed => "fixed",
            Policy::Minimum => "minimum",
            Policy::MinimumExpanding => "minimum-expanding",
            Policy::Maximum => "maximum",
            Policy::Preferred => "preferred",
            Policy::Expanding => "expanding",
            Policy::Ignored => "ignored",
        }
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Sizing contract for one axis of a child.
///
/// The layout reads policies but never modifies them. Expected invariant:
/// `min <= hint <= max` and `stretch >= 1`; see [`SizePolicy::validate`].
///
/// # Example
///
/// ```
/// use quilt_layout::{Policy, SizePolicy};
///
/// let sidebar = SizePolicy::expanding(20).with_max(40).with_stretch(2);
/// assert_eq!(sidebar.policy, Policy::Expanding);
/// assert_eq!(sidebar.clamp(55), 40);
/// assert!(sidebar.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SizePolicy {
    /// Allocation category.
    pub policy: Policy,
    /// Preferred/base size in cells.
    pub hint: u16,
    /// Smallest acceptable size.
    pub min: u16,
    /// Largest acceptable size.
    pub max: u16,
    /// Relative weight among peers of the same tier.
    pub stretch: u16,
}

impl Default for SizePolicy {
    fn default() -> Self {
        Self::new(Policy::Preferred, 0)
    }
}

impl SizePolicy {
    /// A policy of the given category with unbounded size and stretch 1.
    #[inline]
    pub const fn new(policy: Policy, hint: u16) -> Self {
        Self {
            policy,
            hint,
            min: 0,
            max: u16::MAX,
            stretch: 1,
        }
    }

    /// Exactly `hint` cells; `min` and `max` are pinned to the hint.
    pub const fn fixed(hint: u16) -> Self {
        Self {
            min: hint,
            max: hint,
            ..Self::new(Policy::Fixed, hint)
        }
    }

    /// [`Policy::Minimum`] with the given hint.
    pub const fn minimum(hint: u16) -> Self {
        Self::new(Policy::Minimum, hint)
    }

    /// [`Policy::MinimumExpanding`] with the given hint.
    pub const fn minimum_expanding(hint: u16) -> Self {
        Self::new(Policy::MinimumExpanding, hint)
    }

    /// [`Policy::Maximum`] with the given hint.
    pub const fn maximum(hint: u16) -> Self {
        Self::new(Policy::Maximum, hint)
    }

    /// [`Policy::Preferred`] with the given hint.
    pub const fn preferred(hint: u16) -> Self {
        Self::new(Policy::Preferred, hint)
    }

    /// [`Policy::Expanding`] with the given hint.
    pub const fn expanding(hint: u16) -> Self {
        Self::new(Policy::Expanding, hint)
    }

    /// [`Policy::Ignored`]; the baseline comes from the stretch share.
    pub const fn ignored() -> Self {
        Self::new(Policy::Ignored, 0)
    }

    /// Set the hint.
    #[must_use]
    pub const fn with_hint(mut self, hint: u16) -> Self {
        self.hint = hint;
        self
    }

    /// Set the minimum size.
    #[must_use]
    pub const fn with_min(mut self, min: u16) -> Self {
        self.min = min;
        self
    }

    /// Set the maximum size.
    #[must_use]
    pub const fn with_max(mut self, max: u16) -> Self {
        self.max = max;
        self
    }

    /// Set the stretch weight.
    #[must_use]
    pub const fn with_stretch(mut self, stretch: u16) -> Self {
        self.stretch = stretch;
        self
    }

    /// Clamp `value` into `[min, max]`.
    ///
    /// `min` wins when the bounds are inverted.
    #[inline]
    pub fn clamp(&self, value: u16) -> u16 {
        value.min(self.max).max(self.min)
    }

    /// Check `min <= hint <= max` and `stretch >= 1`.
    ///
    /// `Ignored` policies skip the hint checks since their hint is unused.
    pub fn validate(&self) -> Result<(), PolicyError> {
        if self.stretch == 0 {
            return Err(PolicyError::ZeroStretch);
        }
        if self.policy == Policy::Ignored {
            if self.min > self.max {
                return Err(PolicyError::MinExceedsMax {
                    min: self.min,
                    max: self.max,
                });
            }
            return Ok(());
        }
        if self.min > self.hint {
            return Err(PolicyError::MinExceedsHint {
                min: self.min,
                hint: self.hint,
            });
        }
        if self.hint > self.max {
            return Err(PolicyError::HintExceedsMax {
                hint: self.hint,
                max: self.max,
            });
        }
        Ok(())
    }

    /// Repair an invalid policy: bounds are widened to include the hint and a
    /// zero stretch becomes 1.
    #[must_use]
    pub fn normalized(self) -> Self {
        let mut out = self;
        out.stretch = out.stretch.max(1);
        if out.policy == Policy::Ignored {
            out.max = out.max.max(out.min);
        } else {
            out.min = out.min.min(out.hint);
            out.max = out.max.max(out.hint);
        }
        out
    }
}

/// A size policy that violates `min <= hint <= max` or has zero stretch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolicyError {
    /// `min` is larger than `hint`.
    MinExceedsHint { min: u16, hint: u16 },
    /// `hint` is larger than `max`.
    HintExceedsMax { hint: u16, max: u16 },
    /// `min` is larger than `max`.
    MinExceedsMax { min: u16, max: u16 },
    /// Stretch weights must be positive.
    ZeroStretch,
}

impl fmt::Display for PolicyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MinExceedsHint { min, hint } => {
                write!(f, "minimum size {min} exceeds hint {hint}")
            }
            Self::HintExceedsMax { hint, max } => {
                write!(f, "hint {hint} exceeds maximum size {max}")
            }
            Self::MinExceedsMax { min, max } => {
                write!(f, "minimum size {min} exceeds maximum size {max}")
            }
            Self::ZeroStretch => f.write_str("stretch weight must be at least 1"),
        }
    }
}

impl std::error::Error for PolicyError {}
