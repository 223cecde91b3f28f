use super::migrations::init_with_migrations;
use super::preferences::PreferenceSnapshot;
use crate::libs::config::Config;
use crate::libs::data_storage::DataStorage;
use crate::libs::live::QueryRegistry;
use anyhow::Result;
use parking_lot::Mutex;
use rusqlite::Connection;
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;
use tokio::sync::watch;

pub const DB_FILE_NAME: &str = "simcal.db";

/// Shared handle to the application database.
///
/// The task store and the preference store clone the same connection handle,
/// so all in-process writes go through one lock. Live task queries and
/// preference snapshots are registered here too, so a write through any store
/// built from this handle reaches every reader built from it.
#[derive(Clone)]
pub struct Db {
    pub conn: Arc<Mutex<Connection>>,
    pub(crate) registry: Arc<QueryRegistry>,
    pub(crate) preferences: Arc<Mutex<HashMap<String, Arc<watch::Sender<PreferenceSnapshot>>>>>,
}

impl Db {
    /// Opens the configured database, or `simcal.db` in the data directory.
    pub fn new() -> Result<Db> {
        let config = Config::read()?;
        match config.database {
            Some(path) => Self::open(path),
            None => Self::open(DataStorage::new().get_path(DB_FILE_NAME)?),
        }
    }

    pub fn open(path: impl AsRef<Path>) -> Result<Db> {
        let conn = Connection::open(path)?;
        Self::init(conn)
    }

    pub fn in_memory() -> Result<Db> {
        Self::init(Connection::open_in_memory()?)
    }

    fn init(mut conn: Connection) -> Result<Db> {
        init_with_migrations(&mut conn)?;
        Ok(Db {
            conn: Arc::new(Mutex::new(conn)),
            registry: Arc::new(QueryRegistry::default()),
            preferences: Arc::new(Mutex::new(HashMap::new())),
        })
    }
}
