use std::cmp::Ordering;

use crate::Version;

impl Version {
    /// Orders two versions by segments, then by prerelease. Metadata is ignored.
    ///
    /// The prerelease rules are not transitive when numeric and alphabetic
    /// suffixes mix (`x.a < x < x.1 < x.a`), so `sort` and `BTreeSet`
    /// results over such sets are unspecified, and `sort` may panic.
    pub fn compare(&self, other: &Self) -> Ordering {
        if self.segments == other.segments
            && self.prerelease == other.prerelease
            && self.metadata == other.metadata
        {
            return Ordering::Equal;
        }

        match self.segments.cmp(&other.segments) {
            Ordering::Equal => {}
            ordering => return ordering,
        }

        match (self.prerelease.as_str(), other.prerelease.as_str()) {
            ("", "") => Ordering::Equal,
            ("", _) => Ordering::Greater,
            (_, "") => Ordering::Less,
            (pre, other_pre) => compare_prereleases(pre, other_pre),
        }
    }
}

/// Walks both prereleases token by token. A side that has run out of tokens
/// sorts below a numeric token and above anything else; two present tokens
/// compare as plain strings, so `9` sorts after `10`.
fn compare_prereleases(pre: &str, other: &str) -> Ordering {
    if pre == other {
        return Ordering::Equal;
    }

    let tokens = pre.split('.').collect::<Vec<_>>();
    let other_tokens = other.split('.').collect::<Vec<_>>();

    let max_len = tokens.len().max(other_tokens.len());

    for i in 0..max_len {
        let token = tokens.get(i).copied().unwrap_or("");
        let other_token = other_tokens.get(i).copied().unwrap_or("");

        match compare_tokens(token, other_token) {
            Ordering::Equal => continue,
            ordering => return ordering,
        }
    }

    Ordering::Equal
}

fn compare_tokens(token: &str, other: &str) -> Ordering {
    match (token, other) {
        (a, b) if a == b => Ordering::Equal,
        ("", b) if is_numeric(b) => Ordering::Less,
        ("", _) => Ordering::Greater,
        (a, "") if is_numeric(a) => Ordering::Greater,
        (_, "") => Ordering::Less,
        (a, b) => a.cmp(b),
    }
}

fn is_numeric(token: &str) -> bool {
    token.parse::<i64>().is_ok()
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.compare(other) == Ordering::Equal
    }
}

impl Eq for Version {}

impl std::hash::Hash for Version {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.segments.hash(state);
        self.prerelease.hash(state);
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// See [`Version::compare`] for where this order stops being total.
impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}
