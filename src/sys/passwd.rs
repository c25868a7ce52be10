//! User account lookups from the password database.

use std::path::PathBuf;

use anyhow::{Context, Result};
use log::debug;
use nix::unistd::{Uid, User, getuid};
use serde::Serialize;

/// One entry of the password database.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Passwd {
    /// Login name
    pub name: String,
    /// Encrypted password field (usually `x` when shadowed)
    pub password: String,
    /// User ID
    pub uid: u32,
    /// Primary group ID
    pub gid: u32,
    /// User information (real name, office, ...)
    pub gecos: String,
    /// Home directory
    pub dir: PathBuf,
    /// Login shell
    pub shell: PathBuf,
}

impl Passwd {
    /// Look up a user by numeric ID. `Ok(None)` when no such user exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the password database cannot be queried.
    pub fn from_uid(uid: u32) -> Result<Option<Self>> {
        debug!("getpwuid {uid}");
        let user = User::from_uid(Uid::from_raw(uid))
            .with_context(|| format!("Failed to look up user id {uid}"))?;
        Ok(user.map(Self::from))
    }

    /// Look up a user by login name. `Ok(None)` when no such user exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the password database cannot be queried.
    pub fn from_name(name: &str) -> Result<Option<Self>> {
        debug!("getpwnam {name}");
        let user = User::from_name(name)
            .with_context(|| format!("Failed to look up user {name}"))?;
        Ok(user.map(Self::from))
    }

    /// Look up a user by name, or by numeric ID when `spec` is all digits.
    ///
    /// # Errors
    ///
    /// Returns an error if the password database cannot be queried.
    pub fn lookup(spec: &str) -> Result<Option<Self>> {
        spec.parse::<u32>()
            .map_or_else(|_| Self::from_name(spec), Self::from_uid)
    }

    /// The entry of the calling process's real user.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be queried or has no entry
    /// for the current user.
    pub fn current() -> Result<Self> {
        let uid = getuid().as_raw();
        Self::from_uid(uid)?.with_context(|| format!("No passwd entry for current user id {uid}"))
    }
}

impl From<User> for Passwd {
    fn from(user: User) -> Self {
        Self {
            name: user.name,
            password: user.passwd.to_string_lossy().into_owned(),
            uid: user.uid.as_raw(),
            gid: user.gid.as_raw(),
            gecos: user.gecos.to_string_lossy().into_owned(),
            dir: user.dir,
            shell: user.shell,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_by_uid() {
        let root = Passwd::from_uid(0).unwrap().expect("root should exist");
        assert_eq!(root.name, "root");
        assert_eq!(root.uid, 0);
        assert_eq!(root.gid, 0);
    }

    #[test]
    fn test_root_by_name() {
        let root = Passwd::from_name("root").unwrap().expect("root should exist");
        assert_eq!(root.uid, 0);
    }

    #[test]
    fn test_lookup_accepts_both_forms() {
        assert_eq!(
            Passwd::lookup("0").unwrap(),
            Passwd::lookup("root").unwrap()
        );
    }

    #[test]
    fn test_missing_user_is_none() {
        assert!(
            Passwd::from_name("no-such-user-leafutils")
                .unwrap()
                .is_none()
        );
    }

    #[test]
    fn test_current_user_matches_uid() {
        let me = Passwd::current().unwrap();
        assert_eq!(me.uid, getuid().as_raw());
        assert!(!me.name.is_empty());
    }
}
