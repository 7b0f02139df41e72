use std::str::FromStr;

#[cfg(test)]
use proptest_derive::Arbitrary;
#[cfg(feature = "serde")]
use serde_with::{DeserializeFromStr, SerializeDisplay};

use crate::{Version, VersionError};

/// One of the named pieces of a version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(DeserializeFromStr, SerializeDisplay))]
#[cfg_attr(test, derive(Arbitrary))]
pub enum VersionPart {
    Major,
    Minor,
    Patch,
    Prerelease,
    Metadata,
}

impl VersionPart {
    pub fn all() -> [Self; 5] {
        [
            Self::Major,
            Self::Minor,
            Self::Patch,
            Self::Prerelease,
            Self::Metadata,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Major => "major",
            Self::Minor => "minor",
            Self::Patch => "patch",
            Self::Prerelease => "prerelease",
            Self::Metadata => "metadata",
        }
    }

    /// Position in the segment array, for the numeric parts only.
    fn segment_index(&self) -> Option<usize> {
        match self {
            Self::Major => Some(0),
            Self::Minor => Some(1),
            Self::Patch => Some(2),
            Self::Prerelease | Self::Metadata => None,
        }
    }
}

impl std::fmt::Display for VersionPart {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VersionPart {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .into_iter()
            .find(|part| part.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| VersionError::UnknownPart { part: s.to_string() })
    }
}

/// The mutation that was attempted, reported back in errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Set,
    Bump,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Set => write!(f, "set"),
            Operation::Bump => write!(f, "bump"),
        }
    }
}

/// Segments are kept within the signed 32-bit range so every value renders
/// back into something `Version::new` accepts.
const MAX_SEGMENT: u32 = i32::MAX as u32;

fn numeric_index(part: VersionPart, operation: Operation) -> Result<usize, VersionError> {
    part.segment_index()
        .ok_or(VersionError::UnsupportedPart { operation, part })
}

impl Version {
    /// Overwrites the major, minor or patch segment.
    pub fn set_part(&mut self, part: VersionPart, value: u32) -> Result<(), VersionError> {
        let index = numeric_index(part, Operation::Set)?;
        if value > MAX_SEGMENT {
            return Err(VersionError::SegmentOverflow {
                part,
                value: value.into(),
            });
        }

        let old = self.segments[index];
        self.segments[index] = value;
        tracing::trace!("Set {part} of version {self} from {old} to {value}");
        Ok(())
    }

    /// Adds one to the major, minor or patch segment, leaving everything
    /// else alone.
    pub fn bump_part(&mut self, part: VersionPart) -> Result<(), VersionError> {
        let index = numeric_index(part, Operation::Bump)?;
        let bumped = self.checked_bump(part, index)?;

        self.segments[index] = bumped;
        tracing::trace!("Bumped {part} of version to {self}");
        Ok(())
    }

    /// Moves to the next release along `part`: drops any prerelease and
    /// metadata, zeroes the lower segments, then bumps.
    ///
    /// `1.1.0-beta1` bumped on minor becomes `1.2.0`.
    pub fn bump_version(&mut self, part: VersionPart) -> Result<(), VersionError> {
        let index = numeric_index(part, Operation::Bump)?;
        let bumped = self.checked_bump(part, index)?;

        let previous = self.to_string();
        self.prerelease.clear();
        self.metadata.clear();
        for segment in &mut self.segments[index + 1..] {
            *segment = 0;
        }
        self.segments[index] = bumped;
        tracing::trace!("Bumped {part} of version {previous} to {self}");
        Ok(())
    }

    fn checked_bump(&self, part: VersionPart, index: usize) -> Result<u32, VersionError> {
        let current = self.segments[index];
        if current >= MAX_SEGMENT {
            return Err(VersionError::SegmentOverflow {
                part,
                value: u64::from(current) + 1,
            });
        }
        Ok(current + 1)
    }
}
