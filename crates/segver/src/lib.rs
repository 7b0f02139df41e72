//! Parsing, ordering and bumping of `major.minor.patch[-prerelease][+metadata]`
//! version strings.
//!
//! ```
//! use segver::{Version, VersionPart};
//!
//! let mut version = Version::new("1.1.0-beta1").unwrap();
//! assert!(version < Version::new("1.1").unwrap());
//!
//! version.bump_version(VersionPart::Minor).unwrap();
//! assert_eq!(version.to_string(), "1.2.0");
//! ```

mod ordering;
mod parse;
mod part;

pub use parse::VERSION_REGEX_RAW;
pub use part::{Operation, VersionPart};

#[cfg(feature = "serde")]
use serde_with::{DeserializeFromStr, SerializeDisplay};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VersionError {
    #[error("Malformed version: {version}")]
    Malformed { version: String },
    #[error("Invalid segment {segment} in version {version}: {source}")]
    InvalidSegment {
        version: String,
        segment: String,
        #[source]
        source: std::num::ParseIntError,
    },
    #[error("Unable to {operation} version part {part}")]
    UnsupportedPart {
        operation: Operation,
        part: VersionPart,
    },
    #[error("Version part {part} cannot be set to {value}")]
    SegmentOverflow { part: VersionPart, value: u64 },
    #[error("Unknown version part: {part}")]
    UnknownPart { part: String },
}

impl VersionError {
    /// True when the error came from reading a version string.
    pub fn is_parse_error(&self) -> bool {
        matches!(self, Self::Malformed { .. } | Self::InvalidSegment { .. })
    }
}

/// A version made of exactly three numeric segments plus optional
/// prerelease and build metadata labels.
///
/// Equality, hashing and ordering ignore the metadata. With the `serde`
/// feature any serde format reads and writes the canonical string form.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(DeserializeFromStr, SerializeDisplay))]
pub struct Version {
    segments: [u32; 3],
    original_segment_count: usize,
    prerelease: String,
    metadata: String,
}

impl Version {
    /// Parses a version string, padding missing minor and patch segments with `0`.
    pub fn new(version: impl AsRef<str>) -> Result<Self, VersionError> {
        parse::parse(version.as_ref())
    }

    /// The numeric segments, always padded to `[major, minor, patch]`.
    pub fn segments(&self) -> [u32; 3] {
        self.segments
    }

    pub fn major(&self) -> u32 {
        self.segments[0]
    }

    pub fn minor(&self) -> u32 {
        self.segments[1]
    }

    pub fn patch(&self) -> u32 {
        self.segments[2]
    }

    /// How many numeric segments the parsed string spelled out, from 1 to 3.
    pub fn original_segment_count(&self) -> usize {
        self.original_segment_count
    }

    /// Everything after the `-`, or an empty string.
    ///
    /// For `1.2.3-beta.2+build` this is `beta.2`.
    pub fn prerelease(&self) -> &str {
        &self.prerelease
    }

    /// Everything after the `+`, or an empty string.
    pub fn metadata(&self) -> &str {
        &self.metadata
    }

    pub fn is_prerelease(&self) -> bool {
        !self.prerelease.is_empty()
    }

    /// The same segments without prerelease or metadata.
    pub fn release(&self) -> Self {
        Self {
            segments: self.segments,
            original_segment_count: self.original_segment_count,
            prerelease: String::new(),
            metadata: String::new(),
        }
    }
}

impl std::fmt::Display for Version {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [major, minor, patch] = self.segments;
        write!(f, "{major}.{minor}.{patch}")?;
        if !self.prerelease.is_empty() {
            write!(f, "-{}", self.prerelease)?;
        }
        if !self.metadata.is_empty() {
            write!(f, "+{}", self.metadata)?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Version {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, VersionError> {
        Version::new(s)
    }
}

impl TryFrom<&str> for Version {
    type Error = VersionError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Version::new(value)
    }
}

impl TryFrom<String> for Version {
    type Error = VersionError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Version::new(value)
    }
}
