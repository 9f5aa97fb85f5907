//! JSON-file group directory.
//!
//! The data store behind the group listing and the join-group operation.
//! Groups and their memberships live in a single `groups.json` under the
//! data directory; the store is shared across the UI as an `Arc`.

use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use gather_invites::{normalize_code, Group, JoinError, JoinGroups, UserId};
use rand::{distr::Alphanumeric, Rng};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

const GROUPS_FILE: &str = "groups.json";

/// Length of generated invite codes.
const GENERATED_CODE_LEN: usize = 8;

/// One stored group with its membership.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupRecord {
    pub name: String,
    pub invite_code: String,
    pub members: Vec<UserId>,
    pub created_at: DateTime<Utc>,
}

impl GroupRecord {
    /// The read-only view the UI works with.
    pub fn group(&self) -> Group {
        Group::new(&self.name, &self.invite_code)
    }
}

/// File-backed group store.
#[derive(Debug)]
pub struct GroupDirectory {
    path: PathBuf,
    records: Mutex<Vec<GroupRecord>>,
}

impl GroupDirectory {
    /// Open the directory, loading `groups.json` if it exists.
    pub fn open(data_dir: &Path) -> Result<Self> {
        let path = data_dir.join(GROUPS_FILE);
        let records = match std::fs::read_to_string(&path) {
            Ok(raw) => serde_json::from_str(&raw)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Vec::new(),
            Err(e) => return Err(e.into()),
        };
        Ok(Self {
            path,
            records: Mutex::new(records),
        })
    }

    fn records(&self) -> MutexGuard<'_, Vec<GroupRecord>> {
        self.records.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Snapshot of all stored groups.
    pub fn groups(&self) -> Vec<GroupRecord> {
        self.records().clone()
    }

    /// Create a group with a freshly generated invite code, with `owner`
    /// as its first member.
    pub fn create_group(&self, name: &str, owner: &UserId) -> Result<Group> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::InvalidInput("Group name cannot be empty".to_string()));
        }

        let (group, snapshot) = {
            let mut records = self.records();
            let mut code = generate_code();
            while records.iter().any(|r| r.invite_code == code) {
                code = generate_code();
            }
            let record = GroupRecord {
                name: name.to_string(),
                invite_code: code,
                members: vec![owner.clone()],
                created_at: Utc::now(),
            };
            let group = record.group();
            records.push(record);
            (group, records.clone())
        };
        self.save(&snapshot)?;
        Ok(group)
    }

    fn save(&self, records: &[GroupRecord]) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            std::fs::create_dir_all(dir)?;
        }
        std::fs::write(&self.path, serde_json::to_string_pretty(records)?)?;
        Ok(())
    }
}

fn generate_code() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(GENERATED_CODE_LEN)
        .map(char::from)
        .collect::<String>()
        .to_uppercase()
}

#[async_trait]
impl JoinGroups for GroupDirectory {
    async fn join_group(&self, user: &UserId, code: &str) -> std::result::Result<Group, JoinError> {
        let code = normalize_code(code);

        let (group, snapshot) = {
            let mut records = self.records();
            let record = records
                .iter_mut()
                .find(|r| r.invite_code == code)
                .ok_or(JoinError::UnknownCode)?;
            if record.members.contains(user) {
                return Err(JoinError::AlreadyMember {
                    group: record.name.clone(),
                });
            }
            record.members.push(user.clone());
            (record.group(), records.clone())
        };

        self.save(&snapshot)
            .map_err(|e| JoinError::Store(format!("Failed to save membership: {}", e)))?;

        tracing::info!("{} joined '{}'", user, group.name);
        Ok(group)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn user(id: &str) -> UserId {
        UserId::new(id)
    }

    #[test]
    fn test_open_empty() {
        let dir = TempDir::new().unwrap();
        let directory = GroupDirectory::open(dir.path()).unwrap();
        assert!(directory.groups().is_empty());
    }

    #[test]
    fn test_create_group_generates_code() {
        let dir = TempDir::new().unwrap();
        let directory = GroupDirectory::open(dir.path()).unwrap();

        let group = directory.create_group("Book Club", &user("u1")).unwrap();
        assert_eq!(group.name, "Book Club");
        assert_eq!(group.invite_code.len(), GENERATED_CODE_LEN);
        assert!(group
            .invite_code
            .chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()));

        let records = directory.groups();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].members, vec![user("u1")]);
    }

    #[test]
    fn test_create_group_rejects_empty_name() {
        let dir = TempDir::new().unwrap();
        let directory = GroupDirectory::open(dir.path()).unwrap();
        assert!(directory.create_group("   ", &user("u1")).is_err());
    }

    #[tokio::test]
    async fn test_join_adds_member_and_persists() {
        let dir = TempDir::new().unwrap();
        let directory = GroupDirectory::open(dir.path()).unwrap();
        let group = directory.create_group("Book Club", &user("u1")).unwrap();

        let joined = directory
            .join_group(&user("u2"), &group.invite_code)
            .await
            .unwrap();
        assert_eq!(joined.name, "Book Club");

        // Membership survives a reload.
        let reopened = GroupDirectory::open(dir.path()).unwrap();
        assert_eq!(reopened.groups()[0].members.len(), 2);
    }

    #[tokio::test]
    async fn test_join_is_case_insensitive_on_input() {
        let dir = TempDir::new().unwrap();
        let directory = GroupDirectory::open(dir.path()).unwrap();
        let group = directory.create_group("Book Club", &user("u1")).unwrap();

        let lowered = group.invite_code.to_lowercase();
        assert!(directory.join_group(&user("u2"), &lowered).await.is_ok());
    }

    #[tokio::test]
    async fn test_join_unknown_code() {
        let dir = TempDir::new().unwrap();
        let directory = GroupDirectory::open(dir.path()).unwrap();
        let err = directory
            .join_group(&user("u1"), "NOPE1234")
            .await
            .unwrap_err();
        assert_eq!(err, JoinError::UnknownCode);
    }

    #[tokio::test]
    async fn test_join_twice_is_already_member() {
        let dir = TempDir::new().unwrap();
        let directory = GroupDirectory::open(dir.path()).unwrap();
        let group = directory.create_group("Book Club", &user("u1")).unwrap();

        directory
            .join_group(&user("u2"), &group.invite_code)
            .await
            .unwrap();
        let err = directory
            .join_group(&user("u2"), &group.invite_code)
            .await
            .unwrap_err();
        assert_eq!(
            err,
            JoinError::AlreadyMember {
                group: "Book Club".to_string()
            }
        );
    }

    #[test]
    fn test_generated_codes_fit_the_code_rules() {
        for _ in 0..32 {
            let code = generate_code();
            assert_eq!(code, normalize_code(&code));
        }
    }
}
