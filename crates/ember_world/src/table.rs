//! Per-map drop table with an atomic claim primitive

use crate::drop::DroppedEntity;
use ember_core::{DropId, DropIdGenerator};
use parking_lot::Mutex;
use std::collections::HashMap;
use std::time::Duration;

/// Keyed collection of the drops currently lying on a map
///
/// This is the only mutable state shared across player sessions. `claim`
/// is a single lock-and-remove step, never a separate exists-check
/// followed by a remove, so two sessions racing for the same drop id
/// cannot both succeed.
#[derive(Default)]
pub struct DropTable {
    drops: Mutex<HashMap<DropId, DroppedEntity>>,
    ids: DropIdGenerator,
}

impl DropTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self {
            drops: Mutex::new(HashMap::new()),
            ids: DropIdGenerator::new(),
        }
    }

    /// Insert a drop, assigning it a fresh id
    pub fn insert(&self, entity: DroppedEntity) -> DropId {
        let id = self.ids.next();
        log::debug!("Drop {} appeared at {:?}", id, entity.position);
        self.drops.lock().insert(id, entity);
        id
    }

    /// Snapshot a drop without claiming it
    ///
    /// Returns a clone so no lock is held while the caller inspects it.
    pub fn get(&self, id: DropId) -> Option<DroppedEntity> {
        self.drops.lock().get(&id).cloned()
    }

    /// Atomically claim a drop, removing it from the world
    ///
    /// At most one caller ever receives the entity; every later claim of
    /// the same id returns `None`.
    pub fn claim(&self, id: DropId) -> Option<DroppedEntity> {
        let claimed = self.drops.lock().remove(&id);
        if claimed.is_some() {
            log::debug!("Drop {} claimed", id);
        }
        claimed
    }

    /// Number of drops currently on the ground
    pub fn len(&self) -> usize {
        self.drops.lock().len()
    }

    /// Check whether the table holds no drops
    pub fn is_empty(&self) -> bool {
        self.drops.lock().is_empty()
    }

    /// Remove drops older than `max_age`, returning how many were swept
    pub fn sweep_expired(&self, max_age: Duration) -> usize {
        let mut drops = self.drops.lock();
        let before = drops.len();
        drops.retain(|_, entity| entity.age() <= max_age);
        let swept = before - drops.len();
        if swept > 0 {
            log::debug!("Swept {} expired drops", swept);
        }
        swept
    }
}
