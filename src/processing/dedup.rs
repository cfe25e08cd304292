//! Last-write-wins deduplication by record id.
use std::collections::HashMap;

use log::info;

use crate::pipelines::types::Record;

/// Collapse records sharing an id, keeping the last occurrence.
///
/// Emitted order is the first-seen order of each id, with the winning
/// (last-seen) record occupying that slot.
pub fn dedup(records: Vec<Record>) -> Vec<Record> {
    let total = records.len();
    let mut slots: HashMap<String, usize> = HashMap::with_capacity(total);
    let mut out: Vec<Record> = Vec::with_capacity(total);

    for record in records {
        match slots.get(&record.id) {
            Some(&slot) => out[slot] = record,
            None => {
                slots.insert(record.id.clone(), out.len());
                out.push(record);
            }
        }
    }

    info!("{} uniquely-id'd docs (from {})", out.len(), total);
    out
}
