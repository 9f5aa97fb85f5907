//! Local profile store backing the authentication interface.
//!
//! A saved profile is what "signed in" means to the rest of the app. The
//! join and share views only ever read it through [`AuthProvider`].

use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use gather_invites::{AuthProvider, UserId};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::Result;

const PROFILE_FILE: &str = "profile.json";

/// A locally persisted identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub user_id: UserId,
    pub display_name: String,
}

/// File-backed profile store.
#[derive(Debug)]
pub struct ProfileStore {
    path: PathBuf,
    current: Mutex<Option<Profile>>,
}

impl ProfileStore {
    /// Open the store, loading any saved profile.
    ///
    /// An unreadable profile file is treated as signed out rather than as
    /// a fatal error.
    pub fn open(data_dir: &Path) -> Self {
        let path = data_dir.join(PROFILE_FILE);
        let current = match std::fs::read_to_string(&path) {
            Ok(raw) => match serde_json::from_str(&raw) {
                Ok(profile) => Some(profile),
                Err(e) => {
                    tracing::warn!("Ignoring unreadable profile at {}: {}", path.display(), e);
                    None
                }
            },
            Err(_) => None,
        };
        Self {
            path,
            current: Mutex::new(current),
        }
    }

    /// The saved profile, if any.
    pub fn profile(&self) -> Option<Profile> {
        self.current
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Create and persist a profile for `display_name`.
    pub fn sign_in(&self, display_name: &str) -> Result<Profile> {
        let profile = Profile {
            user_id: generate_user_id(),
            display_name: display_name.trim().to_string(),
        };
        if let Some(dir) = self.path.parent() {
            std::fs::create_dir_all(dir)?;
        }
        std::fs::write(&self.path, serde_json::to_string_pretty(&profile)?)?;
        *self
            .current
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = Some(profile.clone());
        Ok(profile)
    }
}

impl AuthProvider for ProfileStore {
    fn current_user(&self) -> Option<UserId> {
        self.profile().map(|p| p.user_id)
    }
}

fn generate_user_id() -> UserId {
    let bytes: [u8; 16] = rand::rng().random();
    UserId::new(bytes.iter().map(|b| format!("{:02x}", b)).collect::<String>())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_open_without_profile_is_signed_out() {
        let dir = TempDir::new().unwrap();
        let store = ProfileStore::open(dir.path());
        assert!(store.profile().is_none());
        assert!(store.current_user().is_none());
    }

    #[test]
    fn test_sign_in_round_trips_through_disk() {
        let dir = TempDir::new().unwrap();

        let store = ProfileStore::open(dir.path());
        let profile = store.sign_in("Ada").unwrap();
        assert_eq!(profile.display_name, "Ada");
        assert_eq!(store.current_user(), Some(profile.user_id.clone()));

        // A fresh store sees the saved profile.
        let reopened = ProfileStore::open(dir.path());
        assert_eq!(reopened.profile(), Some(profile));
    }

    #[test]
    fn test_sign_in_trims_name() {
        let dir = TempDir::new().unwrap();
        let store = ProfileStore::open(dir.path());
        let profile = store.sign_in("  Ada  ").unwrap();
        assert_eq!(profile.display_name, "Ada");
    }

    #[test]
    fn test_corrupt_profile_treated_as_signed_out() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(PROFILE_FILE), "not json").unwrap();
        let store = ProfileStore::open(dir.path());
        assert!(store.profile().is_none());
    }

    #[test]
    fn test_generated_user_ids_are_distinct() {
        assert_ne!(generate_user_id(), generate_user_id());
    }
}
