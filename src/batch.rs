use std::mem;

use tracing::debug;

use crate::error::{Error, Result};
use crate::mem::{delete_no_lock, set_no_lock, MemDB};
use crate::types::Batch;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Op {
    Put(Vec<u8>, Vec<u8>),
    Delete(Vec<u8>),
}

/// Pending writes against one [`MemDB`].
///
/// `write` holds the store's lock across the whole batch, so other callers
/// see either none or all of it.
pub struct MemBatch<'a> {
    db: &'a MemDB,
    ops: Vec<Op>,
    written: bool,
}

impl<'a> MemBatch<'a> {
    pub fn new(db: &'a MemDB) -> Self {
        Self {
            db,
            ops: Vec::new(),
            written: false,
        }
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    fn push(&mut self, op: Op) -> Result<()> {
        if self.written {
            return Err(Error::BatchWritten);
        }
        self.ops.push(op);
        Ok(())
    }
}

impl Batch for MemBatch<'_> {
    fn put(&mut self, key: &[u8], value: &[u8]) -> Result<()> {
        self.push(Op::Put(key.to_vec(), value.to_vec()))
    }

    fn delete(&mut self, key: &[u8]) -> Result<()> {
        self.push(Op::Delete(key.to_vec()))
    }

    fn write(&mut self) -> Result<()> {
        if self.written {
            return Err(Error::BatchWritten);
        }
        self.written = true;

        let ops = mem::take(&mut self.ops);
        debug!(ops = ops.len(), "writing memdb batch");

        let mut tree = self.db.lock();
        for op in ops {
            match op {
                Op::Put(key, value) => set_no_lock(&mut tree, &key, &value),
                Op::Delete(key) => delete_no_lock(&mut tree, &key),
            }
        }
        Ok(())
    }

    fn write_sync(&mut self) -> Result<()> {
        self.write()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DB;

    #[test]
    fn test_batch() {
        let db = MemDB::new();
        db.set(b"b", b"old");

        let mut batch = MemBatch::new(&db);
        batch.put(b"a", b"1").unwrap();
        batch.delete(b"b").unwrap();
        batch.put(b"a", b"2").unwrap();
        assert_eq!(batch.len(), 3);

        // nothing applied before write
        assert_eq!(db.get(b"a"), None);
        assert_eq!(db.get(b"b"), Some(b"old".to_vec()));

        batch.write().unwrap();
        assert_eq!(db.get(b"a"), Some(b"2".to_vec()));
        assert_eq!(db.get(b"b"), None);
        assert!(batch.is_empty());
    }

    #[test]
    fn test_delete_then_put() {
        let db = MemDB::new();
        let mut batch = db.new_batch();
        batch.put(b"k", b"v1").unwrap();
        batch.delete(b"k").unwrap();
        batch.put(b"k", b"v2").unwrap();
        batch.delete(b"gone").unwrap();
        batch.write_sync().unwrap();

        assert_eq!(db.get(b"k"), Some(b"v2".to_vec()));
        assert!(!db.has(b"gone"));
    }

    #[test]
    fn test_empty_batch() {
        let db = MemDB::new();
        db.set(b"k", b"v");
        let mut batch = db.new_batch();
        batch.write().unwrap();
        assert_eq!(db.len(), 1);
    }

    #[test]
    fn test_reuse_rejected() {
        let db = MemDB::new();
        let mut batch = db.new_batch();
        batch.put(b"k", b"v").unwrap();
        batch.write().unwrap();

        assert!(matches!(batch.put(b"x", b"y"), Err(Error::BatchWritten)));
        assert!(matches!(batch.delete(b"k"), Err(Error::BatchWritten)));
        assert!(matches!(batch.write(), Err(Error::BatchWritten)));
        assert!(matches!(batch.write_sync(), Err(Error::BatchWritten)));
        assert!(!db.has(b"x"));
        assert_eq!(db.get(b"k"), Some(b"v".to_vec()));
    }

    #[test]
    fn test_batch_is_atomic_to_readers() {
        let db = MemDB::new();

        std::thread::scope(|s| {
            s.spawn(|| {
                for round in 0u8..50 {
                    let mut batch = db.new_batch();
                    batch.put(b"a", &[round]).unwrap();
                    batch.put(b"b", &[round]).unwrap();
                    batch.write().unwrap();
                }
            });
            s.spawn(|| {
                for _ in 0..200 {
                    // a snapshot taken under one lock must see a and b from the same batch
                    let tree = db.lock();
                    assert_eq!(tree.get(b"a".as_slice()), tree.get(b"b".as_slice()));
                }
            });
        });

        assert_eq!(db.get(b"a"), Some(vec![49]));
        assert_eq!(db.get(b"b"), Some(vec![49]));
    }
}
