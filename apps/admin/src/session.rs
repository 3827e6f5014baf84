//! # Session Persistence
//!
//! Saves the login token and user between runs, the way the browser build
//! of a console keeps them in local storage. One JSON file in the platform
//! data directory:
//!
//! ```text
//! Linux:   ~/.local/share/bolt-admin/session.json
//! macOS:   ~/Library/Application Support/com.bolt-retail.bolt-admin/session.json
//! Windows: %APPDATA%\bolt-retail\bolt-admin\data\session.json
//! ```
//!
//! The file holds a bearer token, so it is written with owner-only
//! permissions on Unix.

use std::fs;
use std::path::PathBuf;

use bolt_core::types::User;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{AppError, AppResult};

/// A persisted login.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub token: String,
    pub user: User,
}

fn session_path() -> AppResult<PathBuf> {
    let dirs = ProjectDirs::from("com", "bolt-retail", "bolt-admin")
        .ok_or_else(|| AppError::session("Could not determine data directory"))?;
    Ok(dirs.data_dir().join("session.json"))
}

/// Saves the session to disk, creating the data directory if needed.
pub fn save(session: &Session) -> AppResult<()> {
    let path = session_path()?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .map_err(|e| AppError::session(format!("Could not create data directory: {e}")))?;
    }

    let json = serde_json::to_string_pretty(session)
        .map_err(|e| AppError::session(format!("Could not encode session: {e}")))?;
    fs::write(&path, json)
        .map_err(|e| AppError::session(format!("Could not write session file: {e}")))?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let _ = fs::set_permissions(&path, fs::Permissions::from_mode(0o600));
    }

    debug!(path = %path.display(), "Session saved");
    Ok(())
}

/// Loads the saved session, if any. A corrupt file reads as no session.
pub fn load() -> AppResult<Option<Session>> {
    let path = session_path()?;
    let json = match fs::read_to_string(&path) {
        Ok(json) => json,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(AppError::session(format!("Could not read session file: {e}"))),
    };

    match serde_json::from_str(&json) {
        Ok(session) => {
            debug!(path = %path.display(), "Session restored");
            Ok(Some(session))
        }
        Err(e) => {
            tracing::warn!("Discarding unreadable session file: {}", e);
            Ok(None)
        }
    }
}

/// Removes the saved session (logout).
pub fn clear() -> AppResult<()> {
    let path = session_path()?;
    match fs::remove_file(&path) {
        Ok(()) => {
            debug!(path = %path.display(), "Session cleared");
            Ok(())
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(AppError::session(format!(
            "Could not remove session file: {e}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_round_trips_through_json() {
        let session = Session {
            token: "jwt-abc".to_string(),
            user: User {
                id: "u1".to_string(),
                name: "Asha".to_string(),
                email: "asha@shop.in".to_string(),
                role: Some("admin".to_string()),
            },
        };
        let json = serde_json::to_string(&session).unwrap();
        let back: Session = serde_json::from_str(&json).unwrap();
        assert_eq!(back.token, "jwt-abc");
        assert_eq!(back.user.email, "asha@shop.in");
    }
}
