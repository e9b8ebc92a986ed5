//! Node kind classification.
//!
//! The host reports a node's canonical kind as a GUID property. The facade
//! maps that open vocabulary into the closed [`NodeKind`] enum; GUIDs the
//! facade does not know about map to [`NodeKind::Unknown`] rather than
//! failing, so new host node flavors degrade gracefully.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Canonical kind GUIDs published by the host object model.
pub mod guid {
    use uuid::{uuid, Uuid};

    pub const SOLUTION: Uuid = uuid!("4e3f6c9a-1d2b-4b8e-9f01-6a7c5d4e3f2a");
    pub const SOLUTION_FOLDER: Uuid = uuid!("66a26720-8fb5-11d2-aa7e-00c04f688dde");
    pub const PROJECT: Uuid = uuid!("f184b08f-c81c-45f6-a57f-5abd9991f28f");
    pub const PHYSICAL_FILE: Uuid = uuid!("6bb5f8ee-4483-11d3-8bcf-00c04f8ec28c");
    pub const PHYSICAL_FOLDER: Uuid = uuid!("6bb5f8ef-4483-11d3-8bcf-00c04f8ec28c");
    pub const VIRTUAL_FOLDER: Uuid = uuid!("6bb5f8f0-4483-11d3-8bcf-00c04f8ec28c");
}

/// Kind of a node in the workspace tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NodeKind {
    Solution,
    SolutionFolder,
    Project,
    PhysicalFile,
    PhysicalFolder,
    VirtualFolder,
    /// A kind GUID the facade does not recognize.
    Unknown,
}

impl NodeKind {
    /// Maps a host kind GUID into the closed enum.
    ///
    /// Total: unmapped GUIDs yield [`NodeKind::Unknown`].
    #[must_use]
    pub fn from_guid(guid: Uuid) -> Self {
        match guid {
            g if g == guid::SOLUTION => Self::Solution,
            g if g == guid::SOLUTION_FOLDER => Self::SolutionFolder,
            g if g == guid::PROJECT => Self::Project,
            g if g == guid::PHYSICAL_FILE => Self::PhysicalFile,
            g if g == guid::PHYSICAL_FOLDER => Self::PhysicalFolder,
            g if g == guid::VIRTUAL_FOLDER => Self::VirtualFolder,
            _ => Self::Unknown,
        }
    }

    /// The canonical GUID for this kind, if it has one.
    #[must_use]
    pub fn as_guid(&self) -> Option<Uuid> {
        match self {
            Self::Solution => Some(guid::SOLUTION),
            Self::SolutionFolder => Some(guid::SOLUTION_FOLDER),
            Self::Project => Some(guid::PROJECT),
            Self::PhysicalFile => Some(guid::PHYSICAL_FILE),
            Self::PhysicalFolder => Some(guid::PHYSICAL_FOLDER),
            Self::VirtualFolder => Some(guid::VIRTUAL_FOLDER),
            Self::Unknown => None,
        }
    }

    /// True only for [`NodeKind::Project`].
    ///
    /// Build scoping keys off this: any other kind, including
    /// `SolutionFolder`, falls back to whole-workspace semantics.
    #[must_use]
    pub const fn is_project(&self) -> bool {
        matches!(self, Self::Project)
    }
}
