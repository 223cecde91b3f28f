//! Namespaced key-value preference storage.
//!
//! Every namespace is mirrored in memory as a snapshot and published through a
//! `watch` channel, so readers see each committed edit without re-reading the
//! database. Edits are read-modify-write over the whole namespace and run under
//! the shared connection lock inside one transaction.

use crate::db::db::Db;
use anyhow::Result;
use parking_lot::Mutex;
use rusqlite::{params, Connection};
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::watch;

pub const SETTINGS_NAMESPACE: &str = "settings";

const SELECT_NAMESPACE: &str = "SELECT key, value FROM preferences WHERE namespace = ?1";
const UPSERT_PREFERENCE: &str = "INSERT INTO preferences (namespace, key, value) VALUES (?1, ?2, ?3)
    ON CONFLICT(namespace, key) DO UPDATE SET value = excluded.value";
const DELETE_PREFERENCE: &str = "DELETE FROM preferences WHERE namespace = ?1 AND key = ?2";

/// All key-value pairs of one namespace.
pub type PreferenceSnapshot = BTreeMap<String, String>;

#[derive(Clone)]
pub struct Preferences {
    conn: Arc<Mutex<Connection>>,
    namespace: String,
    tx: Arc<watch::Sender<PreferenceSnapshot>>,
}

impl Preferences {
    /// The `settings` namespace of the default database.
    pub fn new() -> Result<Self> {
        Self::with_db(&Db::new()?, SETTINGS_NAMESPACE)
    }

    /// Handle on `namespace`; every handle on the same `Db` and namespace
    /// shares one snapshot channel, loaded from the table on first use.
    pub fn with_db(db: &Db, namespace: &str) -> Result<Self> {
        let mut channels = db.preferences.lock();
        let tx = match channels.get(namespace) {
            Some(tx) => tx.clone(),
            None => {
                let snapshot = {
                    let conn = db.conn.lock();
                    Self::load(&conn, namespace)?
                };
                let (tx, _) = watch::channel(snapshot);
                let tx = Arc::new(tx);
                channels.insert(namespace.to_string(), tx.clone());
                tx
            }
        };
        Ok(Self {
            conn: db.conn.clone(),
            namespace: namespace.to_string(),
            tx,
        })
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn snapshot(&self) -> PreferenceSnapshot {
        self.tx.borrow().clone()
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.tx.borrow().get(key).cloned()
    }

    /// Receiver that observes every committed edit of this namespace.
    pub fn watch(&self) -> watch::Receiver<PreferenceSnapshot> {
        self.tx.subscribe()
    }

    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        self.edit(|prefs| {
            prefs.insert(key.to_string(), value.to_string());
        })
    }

    /// Applies `f` to the stored namespace and persists the difference.
    ///
    /// The namespace is re-read inside the transaction, so `f` always sees the
    /// committed state and no other in-process edit can interleave.
    pub fn edit<R>(&self, f: impl FnOnce(&mut PreferenceSnapshot) -> R) -> Result<R> {
        let mut conn = self.conn.lock();
        let tx = conn.transaction()?;

        let current = Self::load(&tx, &self.namespace)?;
        let mut updated = current.clone();
        let result = f(&mut updated);
        if updated == current {
            return Ok(result);
        }

        for key in current.keys().filter(|key| !updated.contains_key(*key)) {
            tx.execute(DELETE_PREFERENCE, params![self.namespace, key])?;
        }
        for (key, value) in updated.iter().filter(|(key, value)| current.get(*key) != Some(*value)) {
            tx.execute(UPSERT_PREFERENCE, params![self.namespace, key, value])?;
        }
        tx.commit()?;

        tracing::debug!(namespace = %self.namespace, "preferences updated");
        self.tx.send_replace(updated);
        Ok(result)
    }

    fn load(conn: &Connection, namespace: &str) -> Result<PreferenceSnapshot> {
        let mut stmt = conn.prepare(SELECT_NAMESPACE)?;
        let rows = stmt.query_map(params![namespace], |row| Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?)))?;

        let mut snapshot = PreferenceSnapshot::new();
        for row in rows {
            let (key, value) = row?;
            snapshot.insert(key, value);
        }
        Ok(snapshot)
    }
}
