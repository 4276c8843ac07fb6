//! Widget id registries
//!
//! Each widget type owns an insertion-ordered set of live ids. Allocation
//! follows an [`IdPolicy`]:
//!
//! - `TailIncrement`: the new id is the id of the most recently appended
//!   live entry plus one, or 1 when the registry is empty. Live ids stay in
//!   increasing order, so a live id is never handed out again. Releasing
//!   the tail and allocating again does hand the released id back, which
//!   the controller may still associate with the old object if its delete
//!   was lost. A tail of 255 is exhausted rather than wrapping into the
//!   reserved 0.
//! - `Compatible`: `TailIncrement`, except that a release leaving exactly
//!   one live id forgets that id too, the way the controller vendor's host
//!   library unlinks its list. The forgotten widget stays on screen while
//!   numbering restarts at 1, so the next allocation aliases it. Only for
//!   talking to firmware that depends on this numbering.
//! - `Monotonic`: a running counter that wraps 255 → 1 and skips ids that
//!   are still live, so a released id is not reissued until the counter
//!   comes around again.
//!
//! Under every policy a registry never holds the same id twice.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use heapless::Vec;
use lcdlink_protocol::{WidgetId, WidgetKind};

/// Live ids tracked per widget type
pub const REGISTRY_CAPACITY: usize = 32;

/// How new ids are chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum IdPolicy {
    /// Tail id + 1; reissues a released tail id
    #[default]
    TailIncrement,
    /// Tail id + 1, forgetting the last survivor of a release
    Compatible,
    /// Wrapping counter that skips live ids
    Monotonic,
}

/// Registry errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RegistryError {
    /// No id can be handed out: storage full or id space used up
    Exhausted,
}

/// Live ids of a single widget type
#[derive(Debug, Clone)]
pub struct Registry<const N: usize> {
    live: Vec<WidgetId, N>,
    policy: IdPolicy,
    /// Last id handed out, 0 if none yet
    last: u8,
}

impl<const N: usize> Registry<N> {
    /// Create an empty registry
    pub const fn new(policy: IdPolicy) -> Self {
        Self {
            live: Vec::new(),
            policy,
            last: 0,
        }
    }

    /// Allocation policy
    pub fn policy(&self) -> IdPolicy {
        self.policy
    }

    /// Hand out a new id and record it as live
    pub fn allocate(&mut self) -> Result<WidgetId, RegistryError> {
        if self.live.is_full() {
            return Err(RegistryError::Exhausted);
        }

        let id = match self.policy {
            IdPolicy::TailIncrement | IdPolicy::Compatible => self.next_after_tail(),
            IdPolicy::Monotonic => self.next_unused(),
        }
        .ok_or(RegistryError::Exhausted)?;

        self.live.push(id).map_err(|_| RegistryError::Exhausted)?;
        self.last = id.get();
        Ok(id)
    }

    fn next_after_tail(&self) -> Option<WidgetId> {
        match self.live.last() {
            Some(tail) => tail.next(),
            None => Some(WidgetId::FIRST),
        }
    }

    fn next_unused(&self) -> Option<WidgetId> {
        let mut candidate = self.last;
        for _ in 0..u8::MAX {
            candidate = if candidate == u8::MAX { 1 } else { candidate + 1 };
            let id = WidgetId::new(candidate)?;
            if !self.contains(id) {
                return Some(id);
            }
        }
        None
    }

    /// Forget an id, keeping the order of the rest
    ///
    /// Returns false if the id was not live. Under [`IdPolicy::Compatible`]
    /// a single remaining id is forgotten along with it.
    pub fn release(&mut self, id: WidgetId) -> bool {
        let Some(index) = self.live.iter().position(|&live| live == id) else {
            return false;
        };
        self.live.remove(index);
        if self.policy == IdPolicy::Compatible && self.live.len() == 1 {
            self.live.clear();
        }
        true
    }

    /// Check whether an id is live
    pub fn contains(&self, id: WidgetId) -> bool {
        self.live.contains(&id)
    }

    /// Most recently appended live id
    pub fn tail(&self) -> Option<WidgetId> {
        self.live.last().copied()
    }

    /// Live ids in allocation order
    pub fn iter(&self) -> impl Iterator<Item = WidgetId> + '_ {
        self.live.iter().copied()
    }

    /// Number of live ids
    pub fn len(&self) -> usize {
        self.live.len()
    }

    /// True when no id is live
    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }

    /// Drop every id and restart numbering
    pub fn clear(&mut self) {
        self.live.clear();
        self.last = 0;
    }
}

/// One registry per widget type
#[derive(Debug, Clone)]
pub struct Registries {
    registries: [Registry<REGISTRY_CAPACITY>; WidgetKind::COUNT],
}

impl Default for Registries {
    fn default() -> Self {
        Self::new(IdPolicy::default())
    }
}

impl Registries {
    /// Create empty registries sharing one policy
    pub fn new(policy: IdPolicy) -> Self {
        Self {
            registries: core::array::from_fn(|_| Registry::new(policy)),
        }
    }

    /// Registry of a widget type
    pub fn get(&self, kind: WidgetKind) -> &Registry<REGISTRY_CAPACITY> {
        &self.registries[kind.index()]
    }

    /// Allocate an id for a widget type
    pub fn allocate(&mut self, kind: WidgetKind) -> Result<WidgetId, RegistryError> {
        self.registries[kind.index()].allocate()
    }

    /// Release an id of a widget type
    pub fn release(&mut self, kind: WidgetKind, id: WidgetId) -> bool {
        self.registries[kind.index()].release(id)
    }

    /// Check whether an id is live for a widget type
    pub fn contains(&self, kind: WidgetKind, id: WidgetId) -> bool {
        self.get(kind).contains(id)
    }

    /// Empty every registry
    pub fn clear(&mut self) {
        for registry in &mut self.registries {
            registry.clear();
        }
    }
}
