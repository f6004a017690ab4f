//! # Action Clients
//!
//! The [`ActionClient`] trait is the seam between deciding which access
//! changes to make and making them. A reconciler is written once against the
//! trait and can then drive either a live backend client or a
//! [`DryRunClient`], which only renders each requested change as a line of
//! text and hands it to a sink.
//!
//! ```
//! use std::cell::RefCell;
//! use groupsync::client::{ActionClient, DryRunClient};
//! use groupsync::level::Level;
//!
//! let lines = RefCell::new(Vec::new());
//! let client = DryRunClient::new(|line| lines.borrow_mut().push(line));
//!
//! client.add_group_membership("alice", "team-x", Level::Maintainer).unwrap();
//! client.remove_project_sharing("team-x/service", "infra").unwrap();
//!
//! assert_eq!(
//!     lines.into_inner(),
//!     vec![
//!         "add 'alice' to 'team-x' at level 'maintainer'",
//!         "remove project sharing from 'team-x/service' with group 'infra'",
//!     ]
//! );
//! ```

use crate::error::Result;
use crate::level::Level;
use std::fmt;
use std::rc::Rc;
use std::sync::Arc;

/// The mutations a reconciler can request against an access-control backend.
///
/// Implementations must be idempotent from the caller's point of view: a
/// reconciler only issues an action when the desired and live state differ.
pub trait ActionClient {
    /// Adds `username` to `group` at `level`.
    fn add_group_membership(&self, username: &str, group: &str, level: Level) -> Result<()>;

    /// Changes the level of an existing membership of `username` in `group`.
    fn change_group_membership(&self, username: &str, group: &str, level: Level) -> Result<()>;

    /// Removes `username` from `group`.
    fn remove_group_membership(&self, username: &str, group: &str) -> Result<()>;

    /// Shares `project` with `group` at `level`.
    fn add_project_sharing(&self, project: &str, group: &str, level: Level) -> Result<()>;

    /// Stops sharing `project` with `group`.
    fn remove_project_sharing(&self, project: &str, group: &str) -> Result<()>;
}

macro_rules! forward_action_client {
    ($($ptr:ty),*) => {$(
        impl<T: ActionClient + ?Sized> ActionClient for $ptr {
            fn add_group_membership(&self, username: &str, group: &str, level: Level) -> Result<()> {
                (**self).add_group_membership(username, group, level)
            }

            fn change_group_membership(&self, username: &str, group: &str, level: Level) -> Result<()> {
                (**self).change_group_membership(username, group, level)
            }

            fn remove_group_membership(&self, username: &str, group: &str) -> Result<()> {
                (**self).remove_group_membership(username, group)
            }

            fn add_project_sharing(&self, project: &str, group: &str, level: Level) -> Result<()> {
                (**self).add_project_sharing(project, group, level)
            }

            fn remove_project_sharing(&self, project: &str, group: &str) -> Result<()> {
                (**self).remove_project_sharing(project, group)
            }
        }
    )*};
}

forward_action_client!(&T, Box<T>, Rc<T>, Arc<T>);

/// A single requested mutation.
///
/// The `Display` form is the line a [`DryRunClient`] records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    AddGroupMembership {
        username: String,
        group: String,
        level: Level,
    },
    ChangeGroupMembership {
        username: String,
        group: String,
        level: Level,
    },
    RemoveGroupMembership {
        username: String,
        group: String,
    },
    AddProjectSharing {
        project: String,
        group: String,
        level: Level,
    },
    RemoveProjectSharing {
        project: String,
        group: String,
    },
}

impl Action {
    /// Issues this action on `client`.
    pub fn apply<C: ActionClient + ?Sized>(&self, client: &C) -> Result<()> {
        match self {
            Action::AddGroupMembership {
                username,
                group,
                level,
            } => client.add_group_membership(username, group, *level),
            Action::ChangeGroupMembership {
                username,
                group,
                level,
            } => client.change_group_membership(username, group, *level),
            Action::RemoveGroupMembership { username, group } => {
                client.remove_group_membership(username, group)
            }
            Action::AddProjectSharing {
                project,
                group,
                level,
            } => client.add_project_sharing(project, group, *level),
            Action::RemoveProjectSharing { project, group } => {
                client.remove_project_sharing(project, group)
            }
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::AddGroupMembership {
                username,
                group,
                level,
            } => write!(f, "add '{}' to '{}' at level '{}'", username, group, level),
            Action::ChangeGroupMembership {
                username,
                group,
                level,
            } => write!(f, "change '{}' in '{}' at level '{}'", username, group, level),
            Action::RemoveGroupMembership { username, group } => {
                write!(f, "remove '{}' from '{}'", username, group)
            }
            Action::AddProjectSharing {
                project,
                group,
                level,
            } => write!(
                f,
                "share project '{}' with group '{}' at level '{}'",
                project, group, level
            ),
            Action::RemoveProjectSharing { project, group } => write!(
                f,
                "remove project sharing from '{}' with group '{}'",
                project, group
            ),
        }
    }
}

/// An [`ActionClient`] that performs nothing and reports every action to a
/// sink instead.
///
/// The sink is called synchronously, exactly once per action, on the calling
/// thread. Sharing a `DryRunClient` across threads requires a `Sync` sink,
/// which is then responsible for its own locking.
pub struct DryRunClient<F> {
    sink: F,
}

impl<F: Fn(String)> DryRunClient<F> {
    /// Creates a client that passes each rendered action to `sink`.
    pub fn new(sink: F) -> Self {
        Self { sink }
    }

    fn record(&self, action: Action) -> Result<()> {
        (self.sink)(action.to_string());
        Ok(())
    }
}

impl<F> fmt::Debug for DryRunClient<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DryRunClient").finish_non_exhaustive()
    }
}

impl<F: Fn(String)> ActionClient for DryRunClient<F> {
    fn add_group_membership(&self, username: &str, group: &str, level: Level) -> Result<()> {
        self.record(Action::AddGroupMembership {
            username: username.to_string(),
            group: group.to_string(),
            level,
        })
    }

    fn change_group_membership(&self, username: &str, group: &str, level: Level) -> Result<()> {
        self.record(Action::ChangeGroupMembership {
            username: username.to_string(),
            group: group.to_string(),
            level,
        })
    }

    fn remove_group_membership(&self, username: &str, group: &str) -> Result<()> {
        self.record(Action::RemoveGroupMembership {
            username: username.to_string(),
            group: group.to_string(),
        })
    }

    fn add_project_sharing(&self, project: &str, group: &str, level: Level) -> Result<()> {
        self.record(Action::AddProjectSharing {
            project: project.to_string(),
            group: group.to_string(),
            level,
        })
    }

    fn remove_project_sharing(&self, project: &str, group: &str) -> Result<()> {
        self.record(Action::RemoveProjectSharing {
            project: project.to_string(),
            group: group.to_string(),
        })
    }
}
