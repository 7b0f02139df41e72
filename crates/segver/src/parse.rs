use once_cell::sync::Lazy;
use regex::Regex;

use crate::{Version, VersionError};

/// The unanchored version grammar, for embedding in larger patterns.
pub const VERSION_REGEX_RAW: &str = concat!(
    r"(?P<segments>[0-9]+(?:\.[0-9]+){0,2})",
    r"(?:-(?P<prerelease>[0-9A-Za-z-]+(?:\.[0-9A-Za-z-]+)*))?",
    r"(?:\+(?P<metadata>[0-9A-Za-z-]+(?:\.[0-9A-Za-z-]+)*))?",
);

static VERSION_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(&format!(r"\A{VERSION_REGEX_RAW}\z")).unwrap());

pub(crate) fn parse(input: &str) -> Result<Version, VersionError> {
    let Some(captures) = VERSION_REGEX.captures(input) else {
        tracing::debug!("Rejected malformed version {input:?}");
        return Err(VersionError::Malformed {
            version: input.to_string(),
        });
    };

    let mut segments = [0; 3];
    let mut original_segment_count = 0;
    for (slot, segment) in segments.iter_mut().zip(captures["segments"].split('.')) {
        let value = segment
            .parse::<i32>()
            .map_err(|source| VersionError::InvalidSegment {
                version: input.to_string(),
                segment: segment.to_string(),
                source,
            })?;
        // The grammar only admits digits, so the value is never negative.
        *slot = value.unsigned_abs();
        original_segment_count += 1;
    }

    let label = |name: &str| {
        captures
            .name(name)
            .map(|m| m.as_str().to_string())
            .unwrap_or_default()
    };

    Ok(Version {
        segments,
        original_segment_count,
        prerelease: label("prerelease"),
        metadata: label("metadata"),
    })
}
