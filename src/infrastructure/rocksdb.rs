use crate::domain::ports::DocumentStore;
use crate::error::{GymError, Result};
use async_trait::async_trait;
use rocksdb::{ColumnFamily, ColumnFamilyDescriptor, DB, Options};
use std::path::Path;
use std::sync::Arc;

/// Column Family holding the JSON collections.
pub const CF_DOCUMENTS: &str = "documents";

/// A persistent document store implementation using RocksDB.
///
/// Each collection is a single value under its collection name, so a write
/// replaces the whole collection atomically.
///
/// This struct is thread-safe (`Clone` shares the underlying `Arc<DB>`).
#[derive(Clone)]
pub struct RocksDBStore {
    db: Arc<DB>,
}

impl RocksDBStore {
    /// Opens or creates a RocksDB instance at the specified path.
    ///
    /// # Arguments
    ///
    /// * `path` - The filesystem path where the database will be stored.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut opts = Options::default();
        opts.create_if_missing(true);
        opts.create_missing_column_families(true);

        let cf_documents = ColumnFamilyDescriptor::new(CF_DOCUMENTS, Options::default());
        let db = DB::open_cf_descriptors(&opts, path, vec![cf_documents])?;

        Ok(Self { db: Arc::new(db) })
    }

    fn documents(&self) -> Result<&ColumnFamily> {
        self.db.cf_handle(CF_DOCUMENTS).ok_or_else(|| {
            GymError::InternalError(Box::new(std::io::Error::other(
                "Documents column family not found",
            )))
        })
    }
}

#[async_trait]
impl DocumentStore for RocksDBStore {
    async fn read(&self, key: &str) -> Result<Option<String>> {
        let cf = self.documents()?;
        match self.db.get_cf(cf, key.as_bytes())? {
            Some(bytes) => {
                let document = String::from_utf8(bytes).map_err(|e| {
                    GymError::InternalError(Box::new(std::io::Error::new(
                        std::io::ErrorKind::InvalidData,
                        format!("Document is not UTF-8: {}", e),
                    )))
                })?;
                Ok(Some(document))
            }
            None => Ok(None),
        }
    }

    async fn write(&self, key: &str, document: String) -> Result<()> {
        let cf = self.documents()?;
        self.db.put_cf(cf, key.as_bytes(), document.as_bytes())?;
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<()> {
        let cf = self.documents()?;
        self.db.delete_cf(cf, key.as_bytes())?;
        Ok(())
    }
}
