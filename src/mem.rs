//! In-memory backend. Nothing is persisted; contents are lost when the
//! store is dropped.

use std::collections::BTreeMap;
use std::io::{self, Write};

use parking_lot::{Mutex, MutexGuard};
use tracing::{debug, trace};

use crate::batch::MemBatch;
use crate::domain::key_bounds;
use crate::error::Result;
use crate::iterator::MemDBIterator;
use crate::types::{Batch, DBIterator, Stats, DB};

pub(crate) type Tree = BTreeMap<Vec<u8>, Vec<u8>>;

/// A key-value store held in a mutex-protected ordered map.
///
/// Every operation takes the lock for its own duration only. Iterators take
/// it once to snapshot keys and again for each `value` read, see
/// [`MemDBIterator`].
#[derive(Default)]
pub struct MemDB {
    tree: Mutex<Tree>,
}

impl MemDB {
    pub fn new() -> Self {
        Self {
            tree: Mutex::new(BTreeMap::new()),
        }
    }

    pub fn len(&self) -> usize {
        self.tree.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.lock().is_empty()
    }

    /// Writes every entry as `[KEY]:\t[VALUE]` in upper-case hex, one per line.
    pub fn write_to<W: Write>(&self, mut w: W) -> Result<()> {
        let tree = self.tree.lock();
        for (key, value) in tree.iter() {
            writeln!(
                w,
                "[{}]:\t[{}]",
                hex::encode_upper(key),
                hex::encode_upper(value)
            )?;
        }
        Ok(())
    }

    pub(crate) fn lock(&self) -> MutexGuard<'_, Tree> {
        self.tree.lock()
    }

    // snapshot_keys collects the keys in `[start, end)` in ascending order.
    fn snapshot_keys(&self, start: Option<&[u8]>, end: Option<&[u8]>) -> Vec<Vec<u8>> {
        let Some(bounds) = key_bounds(start, end) else {
            return Vec::new();
        };
        let tree = self.tree.lock();
        tree.range::<[u8], _>(bounds).map(|(k, _)| k.clone()).collect()
    }
}

// set_no_lock and delete_no_lock mutate a tree whose lock the caller already holds.
pub(crate) fn set_no_lock(tree: &mut Tree, key: &[u8], value: &[u8]) {
    tree.insert(key.to_vec(), value.to_vec());
}

pub(crate) fn delete_no_lock(tree: &mut Tree, key: &[u8]) {
    tree.remove(key);
}

impl DB for MemDB {
    fn get(&self, key: &[u8]) -> Option<Vec<u8>> {
        self.tree.lock().get(key).cloned()
    }

    fn has(&self, key: &[u8]) -> bool {
        self.tree.lock().contains_key(key)
    }

    fn set(&self, key: &[u8], value: &[u8]) {
        set_no_lock(&mut self.tree.lock(), key, value);
    }

    fn set_sync(&self, key: &[u8], value: &[u8]) {
        self.set(key, value);
    }

    fn delete(&self, key: &[u8]) {
        delete_no_lock(&mut self.tree.lock(), key);
    }

    fn delete_sync(&self, key: &[u8]) {
        self.delete(key);
    }

    // There is nowhere to flush to, and closing must not lose data.
    fn close(&self) {
        trace!("memdb closed");
    }

    fn print(&self) -> Result<()> {
        self.write_to(io::stdout().lock())
    }

    fn stats(&self) -> Stats {
        let mut stats = Stats::new();
        stats.insert("database.type".to_string(), "memDB".to_string());
        stats.insert("database.size".to_string(), self.len().to_string());
        stats
    }

    fn new_batch(&self) -> Box<dyn Batch + '_> {
        Box::new(MemBatch::new(self))
    }

    fn iterator(&self, start: Option<&[u8]>, end: Option<&[u8]>) -> Box<dyn DBIterator + '_> {
        let keys = self.snapshot_keys(start, end);
        debug!(keys = keys.len(), "memdb forward iterator");
        Box::new(MemDBIterator::new(self, keys, start, end))
    }

    fn reverse_iterator(
        &self,
        start: Option<&[u8]>,
        end: Option<&[u8]>,
    ) -> Box<dyn DBIterator + '_> {
        let mut keys = self.snapshot_keys(start, end);
        keys.reverse();
        debug!(keys = keys.len(), "memdb reverse iterator");
        Box::new(MemDBIterator::new(self, keys, start, end))
    }
}
