//! # Credential Stores
//!
//! The session (token pair plus identity) is the only state the client persists.
//! Two [`CredentialStore`] implementations are provided:
//!
//! - [`MemoryCredentialStore`]: process lifetime only, used by tests and one-shot runs
//! - [`FileCredentialStore`]: a JSON file, cached in memory, written atomically
//!   (temporary file then rename) with owner-only permissions on Unix
//!
//! Both guard the cached session with a `parking_lot::RwLock`, so readers never block
//! on file I/O.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use shared::dto::AuthResponse;

use crate::core::error::CredentialError;
use crate::core::service::CredentialStore;

/// Token pair plus the identity it belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub access_token: String,
    pub refresh_token: String,
    pub user_id: String,
    pub username: String,
    pub email: String,
}

impl From<AuthResponse> for Session {
    fn from(auth: AuthResponse) -> Self {
        Self {
            access_token: auth.access_token,
            refresh_token: auth.refresh_token,
            user_id: auth.user.id,
            username: auth.user.username,
            email: auth.user.email,
        }
    }
}

/// In-memory credential store.
#[derive(Debug, Default)]
pub struct MemoryCredentialStore {
    session: RwLock<Option<Session>>,
}

impl MemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_session(session: Session) -> Self {
        Self {
            session: RwLock::new(Some(session)),
        }
    }
}

impl CredentialStore for MemoryCredentialStore {
    fn session(&self) -> Option<Session> {
        self.session.read().clone()
    }

    fn save_session(&self, session: Session) -> Result<(), CredentialError> {
        *self.session.write() = Some(session);
        Ok(())
    }

    fn clear(&self) -> Result<(), CredentialError> {
        *self.session.write() = None;
        Ok(())
    }
}

/// JSON-file credential store.
#[derive(Debug)]
pub struct FileCredentialStore {
    path: PathBuf,
    session: RwLock<Option<Session>>,
}

impl FileCredentialStore {
    /// Open the store at `path`, loading any saved session.
    ///
    /// A missing file means logged out. An unreadable or corrupt file is logged and
    /// treated the same way, so a damaged file never locks the user out.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let session = match Self::load(&path) {
            Ok(session) => session,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Ignoring unreadable credential file");
                None
            }
        };
        tracing::debug!(path = %path.display(), logged_in = session.is_some(), "Credential store opened");
        Self {
            path,
            session: RwLock::new(session),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(path: &Path) -> Result<Option<Session>, CredentialError> {
        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        if raw.trim().is_empty() {
            return Ok(None);
        }
        Ok(Some(serde_json::from_str(&raw)?))
    }

    fn persist(&self, session: &Session) -> Result<(), CredentialError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_vec_pretty(session)?;

        let tmp_path = self.path.with_extension("json.tmp");
        {
            let mut file = open_private(&tmp_path)?;
            file.write_all(&json)?;
            file.sync_all()?;
        }
        fs::rename(&tmp_path, &self.path)?;
        Ok(())
    }
}

#[cfg(unix)]
fn open_private(path: &Path) -> std::io::Result<fs::File> {
    use std::os::unix::fs::OpenOptionsExt;
    fs::OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .mode(0o600)
        .open(path)
}

#[cfg(not(unix))]
fn open_private(path: &Path) -> std::io::Result<fs::File> {
    fs::OpenOptions::new().write(true).create(true).truncate(true).open(path)
}

impl CredentialStore for FileCredentialStore {
    fn session(&self) -> Option<Session> {
        self.session.read().clone()
    }

    fn save_session(&self, session: Session) -> Result<(), CredentialError> {
        let mut guard = self.session.write();
        self.persist(&session)?;
        *guard = Some(session);
        Ok(())
    }

    fn clear(&self) -> Result<(), CredentialError> {
        let mut guard = self.session.write();
        *guard = None;
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
