use crate::error::{Error, Result};
use crate::mem::MemDB;
use crate::types::{DBIterator, DB};

/// Iterator over a snapshot of a [`MemDB`]'s keys.
///
/// The keys in range are copied once, in traversal order, when the iterator
/// is created; later inserts and deletes do not change which keys it visits.
/// Values are not copied: `value` reads the live store each time, so it sees
/// writes made after creation, and returns `None` for a key deleted since.
pub struct MemDBIterator<'a> {
    db: Option<&'a MemDB>,
    cur: usize,
    keys: Vec<Vec<u8>>,
    start: Option<Vec<u8>>,
    end: Option<Vec<u8>>,
}

impl<'a> MemDBIterator<'a> {
    // keys are expected to be in descending order for reverse iterators.
    pub(crate) fn new(
        db: &'a MemDB,
        keys: Vec<Vec<u8>>,
        start: Option<&[u8]>,
        end: Option<&[u8]>,
    ) -> Self {
        Self {
            db: Some(db),
            cur: 0,
            keys,
            start: start.map(<[u8]>::to_vec),
            end: end.map(<[u8]>::to_vec),
        }
    }

    fn current(&self) -> Result<(&'a MemDB, &[u8])> {
        match (self.db, self.keys.get(self.cur)) {
            (Some(db), Some(key)) => Ok((db, key.as_slice())),
            _ => Err(Error::InvalidIterator),
        }
    }
}

impl DBIterator for MemDBIterator<'_> {
    fn domain(&self) -> (Option<&[u8]>, Option<&[u8]>) {
        (self.start.as_deref(), self.end.as_deref())
    }

    fn valid(&self) -> bool {
        self.db.is_some() && self.cur < self.keys.len()
    }

    fn next(&mut self) -> Result<()> {
        self.current()?;
        self.cur += 1;
        Ok(())
    }

    fn key(&self) -> Result<&[u8]> {
        self.current().map(|(_, key)| key)
    }

    fn value(&self) -> Result<Option<Vec<u8>>> {
        let (db, key) = self.current()?;
        Ok(db.get(key))
    }

    fn close(&mut self) {
        self.keys = Vec::new();
        self.db = None;
    }
}
