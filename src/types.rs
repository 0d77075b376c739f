use std::collections::BTreeMap;

use crate::error::Result;

/// Human-readable statistics, keyed by dotted names such as `database.size`.
pub type Stats = BTreeMap<String, String>;

/// The store contract every backend implements.
///
/// Keys and values are plain byte slices; an empty slice is a valid key or
/// value. `get` returns `None` for a missing key, which is distinct from a
/// stored empty value.
pub trait DB: Send + Sync {
    fn get(&self, key: &[u8]) -> Option<Vec<u8>>;
    fn has(&self, key: &[u8]) -> bool;

    fn set(&self, key: &[u8], value: &[u8]);
    // set_sync flushes to the backing medium before returning, if there is one.
    fn set_sync(&self, key: &[u8], value: &[u8]);

    fn delete(&self, key: &[u8]);
    fn delete_sync(&self, key: &[u8]);

    fn close(&self);

    /// Dumps every entry to stdout for debugging. The format is not stable.
    fn print(&self) -> Result<()>;
    fn stats(&self) -> Stats;

    fn new_batch(&self) -> Box<dyn Batch + '_>;

    /// Iterates keys in `[start, end)` in ascending order. `None` leaves that
    /// side unbounded.
    fn iterator(&self, start: Option<&[u8]>, end: Option<&[u8]>) -> Box<dyn DBIterator + '_>;

    /// Iterates keys in `[start, end)` in descending order.
    fn reverse_iterator(
        &self,
        start: Option<&[u8]>,
        end: Option<&[u8]>,
    ) -> Box<dyn DBIterator + '_>;
}

/// Buffered writes applied to a store as one unit.
///
/// Nothing reaches the store until `write`. Operations apply in the order
/// they were added, so the last one for a key wins. A batch can be written
/// once; later calls fail with [`Error::BatchWritten`](crate::Error).
pub trait Batch {
    fn put(&mut self, key: &[u8], value: &[u8]) -> Result<()>;
    fn delete(&mut self, key: &[u8]) -> Result<()>;
    fn write(&mut self) -> Result<()>;
    fn write_sync(&mut self) -> Result<()>;
}

/// Cursor over a range of keys.
///
/// `next`, `key` and `value` require `valid()`; otherwise they return
/// [`Error::InvalidIterator`](crate::Error).
pub trait DBIterator {
    /// The `(start, end)` bounds the iterator was created with, regardless of
    /// direction.
    fn domain(&self) -> (Option<&[u8]>, Option<&[u8]>);
    fn valid(&self) -> bool;
    fn next(&mut self) -> Result<()>;
    fn key(&self) -> Result<&[u8]>;
    fn value(&self) -> Result<Option<Vec<u8>>>;
    fn close(&mut self);
}
