//! Group lookups from the group database.

use anyhow::{Context, Result};
use log::debug;
use nix::unistd::{Gid, Group as NixGroup, getgid};
use serde::Serialize;

/// One entry of the group database.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Group {
    /// Group name
    pub name: String,
    /// Group password field
    pub password: String,
    /// Group ID
    pub gid: u32,
    /// Login names of the supplementary members
    pub members: Vec<String>,
}

impl Group {
    /// Look up a group by numeric ID. `Ok(None)` when no such group exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the group database cannot be queried.
    pub fn from_gid(gid: u32) -> Result<Option<Self>> {
        debug!("getgrgid {gid}");
        let group = NixGroup::from_gid(Gid::from_raw(gid))
            .with_context(|| format!("Failed to look up group id {gid}"))?;
        Ok(group.map(Self::from))
    }

    /// Look up a group by name. `Ok(None)` when no such group exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the group database cannot be queried.
    pub fn from_name(name: &str) -> Result<Option<Self>> {
        debug!("getgrnam {name}");
        let group = NixGroup::from_name(name)
            .with_context(|| format!("Failed to look up group {name}"))?;
        Ok(group.map(Self::from))
    }

    /// Look up a group by name, or by numeric ID when `spec` is all digits.
    ///
    /// # Errors
    ///
    /// Returns an error if the group database cannot be queried.
    pub fn lookup(spec: &str) -> Result<Option<Self>> {
        spec.parse::<u32>()
            .map_or_else(|_| Self::from_name(spec), Self::from_gid)
    }

    /// The primary group of the calling process.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be queried or has no entry
    /// for the current group.
    pub fn current() -> Result<Self> {
        let gid = getgid().as_raw();
        Self::from_gid(gid)?.with_context(|| format!("No group entry for current group id {gid}"))
    }

    /// Whether `user` is listed as a supplementary member.
    #[must_use]
    pub fn has_member(&self, user: &str) -> bool {
        self.members.iter().any(|member| member == user)
    }
}

impl From<NixGroup> for Group {
    fn from(group: NixGroup) -> Self {
        Self {
            name: group.name,
            password: group.passwd.to_string_lossy().into_owned(),
            gid: group.gid.as_raw(),
            members: group.mem,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_group_by_gid() {
        let root = Group::from_gid(0).unwrap().expect("gid 0 should exist");
        assert_eq!(root.gid, 0);
        assert!(!root.name.is_empty());
    }

    #[test]
    fn test_lookup_by_name_round_trips_gid() {
        let by_gid = Group::from_gid(0).unwrap().unwrap();
        let by_name = Group::lookup(&by_gid.name).unwrap().unwrap();
        assert_eq!(by_name.gid, 0);
    }

    #[test]
    fn test_lookup_accepts_both_forms() {
        let by_number = Group::lookup("0").unwrap().unwrap();
        assert_eq!(by_number.gid, 0);
        assert!(Group::lookup("no-such-group-leafutils").unwrap().is_none());
    }

    #[test]
    fn test_missing_group_is_none() {
        assert!(
            Group::from_name("no-such-group-leafutils")
                .unwrap()
                .is_none()
        );
    }

    #[test]
    fn test_current_group() {
        assert_eq!(Group::current().unwrap().gid, getgid().as_raw());
    }

    #[test]
    fn test_has_member() {
        let group = Group {
            name: "wheel".to_string(),
            password: "x".to_string(),
            gid: 10,
            members: vec!["alice".to_string(), "bob".to_string()],
        };
        assert!(group.has_member("bob"));
        assert!(!group.has_member("carol"));
    }
}
