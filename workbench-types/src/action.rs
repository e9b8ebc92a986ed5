//! Build actions and their translation into the host flag vocabulary.
//!
//! The host build manager accepts a bitmask of build/clean flags plus a
//! separate result-query mask. The facade only ever issues three
//! combinations, derived from [`BuildAction`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::BitOr;

/// A build operation requested by a caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BuildAction {
    /// Incremental build.
    Build,
    /// Clean, then build.
    Rebuild,
    /// Remove build outputs only.
    Clean,
}

impl BuildAction {
    /// Translates the action into host update flags.
    #[must_use]
    pub const fn flags(self) -> BuildFlags {
        match self {
            Self::Build => BuildFlags::BUILD,
            Self::Rebuild => BuildFlags::BUILD.union(BuildFlags::CLEAN),
            Self::Clean => BuildFlags::CLEAN,
        }
    }
}

impl fmt::Display for BuildAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Build => "build",
            Self::Rebuild => "rebuild",
            Self::Clean => "clean",
        };
        f.write_str(s)
    }
}

/// Bitmask of host build-update flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BuildFlags(u32);

impl BuildFlags {
    /// No operation requested.
    pub const NONE: BuildFlags = BuildFlags(0);
    /// Build the target's outputs.
    pub const BUILD: BuildFlags = BuildFlags(0x0000_0001);
    /// Delete the target's outputs before anything else.
    pub const CLEAN: BuildFlags = BuildFlags(0x0000_0004);

    /// Combines two masks.
    #[must_use]
    pub const fn union(self, other: BuildFlags) -> BuildFlags {
        BuildFlags(self.0 | other.0)
    }

    /// True if every bit of `other` is set in `self`.
    #[must_use]
    pub const fn contains(self, other: BuildFlags) -> bool {
        self.0 & other.0 == other.0
    }

    /// Raw bits, as handed to the host.
    #[must_use]
    pub const fn bits(self) -> u32 {
        self.0
    }
}

impl BitOr for BuildFlags {
    type Output = BuildFlags;

    fn bitor(self, rhs: BuildFlags) -> BuildFlags {
        self.union(rhs)
    }
}

/// Bitmask of host result-query flags passed with every update request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QueryFlags(u32);

impl QueryFlags {
    /// No query behavior requested.
    pub const NONE: QueryFlags = QueryFlags(0);
    /// Do not raise a deployment query when the update fails.
    ///
    /// The facade passes this with every build request it issues.
    pub const NO_DEPLOY_ON_ERROR: QueryFlags = QueryFlags(0x0000_0008);

    /// Raw bits, as handed to the host.
    #[must_use]
    pub const fn bits(self) -> u32 {
        self.0
    }
}
