mod backend;
mod batch;
mod config;
pub mod domain;
mod error;
mod iterator;
mod mem;
mod types;

pub use backend::{new_db, BackendType, Creator, Registry};
pub use batch::MemBatch;
pub use config::DBConfig;
pub use error::{Error, Result};
pub use iterator::MemDBIterator;
pub use mem::MemDB;
pub use types::{Batch, DBIterator, Stats, DB};
