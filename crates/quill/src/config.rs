//! # Session configuration
//! How a [`crate::Session`] opens its connection.

use rusqlite::OpenFlags;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// Open without write access.
    pub read_only: bool,
    /// Create the database file if it does not exist (ignored when read only).
    pub create: bool,
    /// How long to wait on a lock held by another connection before failing
    /// with `SQLITE_BUSY`. `None` fails immediately.
    pub busy_timeout: Option<Duration>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            read_only: false,
            create: true,
            busy_timeout: None,
        }
    }
}

impl SessionConfig {
    pub fn read_only(mut self, read_only: bool) -> Self {
        self.read_only = read_only;
        self
    }

    pub fn create(mut self, create: bool) -> Self {
        self.create = create;
        self
    }

    pub fn busy_timeout(mut self, timeout: Duration) -> Self {
        self.busy_timeout = Some(timeout);
        self
    }

    /// A session is used from one thread at a time, so SQLite's own
    /// connection mutex is not needed.
    pub(crate) fn open_flags(&self) -> OpenFlags {
        let base = OpenFlags::SQLITE_OPEN_URI | OpenFlags::SQLITE_OPEN_NO_MUTEX;
        if self.read_only {
            base | OpenFlags::SQLITE_OPEN_READ_ONLY
        } else if self.create {
            base | OpenFlags::SQLITE_OPEN_READ_WRITE | OpenFlags::SQLITE_OPEN_CREATE
        } else {
            base | OpenFlags::SQLITE_OPEN_READ_WRITE
        }
    }
}
