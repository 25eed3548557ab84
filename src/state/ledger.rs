use crate::engine::calculations;
use crate::models::{AggregateTotals, ContainerRecord};

/// Prefix for generated container ids.
const CONTAINER_ID_PREFIX: &str = "box-";

/// Ordered list of containers, unique by id.
#[derive(Debug, Clone, Default)]
pub struct ContainerLedger {
    records: Vec<ContainerRecord>,

    /// Last id suffix handed out. Never decreases, so ids are not reused.
    last_id: u32,
}

impl ContainerLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the record with the same id in place, or append it.
    pub fn upsert(&mut self, record: ContainerRecord) {
        match self.records.iter_mut().find(|r| r.id == record.id) {
            Some(existing) => *existing = record,
            None => self.records.push(record),
        }
    }

    /// Drop every record with this id. Returns how many were removed.
    pub fn remove(&mut self, id: &str) -> usize {
        let before = self.records.len();
        self.records.retain(|r| r.id != id);
        before - self.records.len()
    }

    /// Append an empty container under a fresh `box-N` id.
    ///
    /// Suffixes already taken by caller-chosen ids are skipped.
    pub fn add_container(&mut self) -> String {
        loop {
            self.last_id += 1;
            let id = format!("{}{}", CONTAINER_ID_PREFIX, self.last_id);
            if !self.contains(&id) {
                self.records.push(ContainerRecord::empty(id.clone()));
                return id;
            }
        }
    }

    pub fn get(&self, id: &str) -> Option<&ContainerRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Records in insertion order.
    pub fn records(&self) -> &[ContainerRecord] {
        &self.records
    }

    /// Totals per substance, recomputed from scratch.
    pub fn totals(&self) -> AggregateTotals {
        calculations::aggregate(&self.records)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
