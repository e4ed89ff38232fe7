#![forbid(unsafe_code)]

//! Layout effects handed to the event-dispatch system.
//!
//! A layout pass never writes widget geometry itself. It posts [`Effect`]s
//! into an [`EffectSink`], and the dispatcher delivers them before the next
//! paint. For every placed child the pass posts a [`Effect::Move`] followed by
//! a [`Effect::Resize`]; a child that cannot be placed gets a single
//! [`Effect::Disable`].

use std::collections::VecDeque;

use crate::geometry::{Point, Size};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Positional handle of a child inside its container's child list.
///
/// Valid for one layout pass only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ChildId(pub usize);

impl ChildId {
    /// Index into the container's child list.
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// A geometry or visibility change requested by a layout pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Effect {
    /// Move the child's top-left corner.
    Move {
        /// Target child.
        child: ChildId,
        /// New top-left corner, in the container's coordinate space.
        to: Point,
    },
    /// Resize the child.
    Resize {
        /// Target child.
        child: ChildId,
        /// New width and height.
        size: Size,
    },
    /// Hide the child because it could not be placed.
    Disable {
        /// Target child.
        child: ChildId,
        /// Whether the dispatcher should tell the parent a child was polished.
        /// Layout passes always post `false`.
        notify_parent: bool,
    },
}

impl Effect {
    /// The child this effect targets.
    #[must_use]
    pub const fn child(&self) -> ChildId {
        match *self {
            Effect::Move { child, .. }
            | Effect::Resize { child, .. }
            | Effect::Disable { child, .. } => child,
        }
    }
}

/// Receiver for effects posted during a layout pass.
pub trait EffectSink {
    /// Queue one effect. Effects must be delivered in posting order.
    fn post(&mut self, effect: Effect);
}

impl EffectSink for Vec<Effect> {
    fn post(&mut self, effect: Effect) {
        self.push(effect);
    }
}

impl EffectSink for VecDeque<Effect> {
    fn post(&mut self, effect: Effect) {
        self.push_back(effect);
    }
}

impl<S: EffectSink + ?Sized> EffectSink for &mut S {
    fn post(&mut self, effect: Effect) {
        (**self).post(effect);
    }
}
