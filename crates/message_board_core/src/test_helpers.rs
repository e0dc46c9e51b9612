//! Test helpers shared by handler tests across crates.
//!
//! [`InMemoryMessageTable`] stands in for the managed table. It keeps records
//! in insertion order, counts calls, and can be told to fail either operation.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use serde_json::Value;

use crate::contract::Record;
use crate::table::{Item, MessageTable, ScanPage, TableError};

#[derive(Debug, Default)]
pub struct InMemoryMessageTable {
    records: Mutex<Vec<Record>>,
    scan_calls: AtomicUsize,
    put_calls: AtomicUsize,
    fail_scan: bool,
    fail_put: bool,
}

impl InMemoryMessageTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// A table preloaded with `count` records whose messages are `message-<n>`.
    pub fn seeded(count: usize) -> Self {
        let table = Self::new();
        table
            .records
            .lock()
            .expect("poisoned mutex")
            .extend((0..count).map(|n| Record::new(format!("message-{n}"))));
        table
    }

    pub fn failing_scans(mut self) -> Self {
        self.fail_scan = true;
        self
    }

    pub fn failing_puts(mut self) -> Self {
        self.fail_put = true;
        self
    }

    pub fn records(&self) -> Vec<Record> {
        self.records.lock().expect("poisoned mutex").clone()
    }

    pub fn scan_calls(&self) -> usize {
        self.scan_calls.load(Ordering::SeqCst)
    }

    pub fn put_calls(&self) -> usize {
        self.put_calls.load(Ordering::SeqCst)
    }
}

impl MessageTable for InMemoryMessageTable {
    async fn scan(&self, limit: i32) -> Result<ScanPage, TableError> {
        self.scan_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_scan {
            return Err(TableError::Scan("simulated scan failure".to_string()));
        }

        let limit = usize::try_from(limit).unwrap_or(0);
        let records = self.records.lock().expect("poisoned mutex");
        let items: Vec<Item> = records.iter().take(limit).map(record_item).collect();

        let mut page = ScanPage::from_items(items);
        if records.len() > limit {
            page.last_evaluated_key = page.items.last().map(|item| {
                let mut key = Item::new();
                if let Some(id) = item.get("id") {
                    key.insert("id".to_string(), id.clone());
                }
                key
            });
        }
        Ok(page)
    }

    async fn put_record(&self, record: &Record) -> Result<(), TableError> {
        self.put_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_put {
            return Err(TableError::Put("simulated put failure".to_string()));
        }

        self.records
            .lock()
            .expect("poisoned mutex")
            .push(record.clone());
        Ok(())
    }
}

fn record_item(record: &Record) -> Item {
    let mut item = Item::new();
    item.insert("id".to_string(), Value::String(record.id.clone()));
    item.insert("message".to_string(), Value::String(record.message.clone()));
    item
}
