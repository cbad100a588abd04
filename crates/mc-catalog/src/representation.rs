//! Version-specific platform representations of an identity.
//!
//! A [`RepresentationTable`] is an ordered list of half-open version ranges,
//! each mapped to the platform key (and legacy numeric id) valid inside it.
//!
//! ```text
//!   1.8            1.13                 (unbounded)
//!    ├──── LOG #17 ──┤──── OAK_LOG ───────────▶
//! ```
//!
//! Ranges never overlap, so any version resolves to at most one entry.

use std::{borrow::Cow, fmt};

use smallvec::SmallVec;
use thiserror::Error;

use crate::{CatalogError, Version};

/// A half-open interval of platform versions: `first <= v < until`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct VersionRange {
    first: Version,
    until: Option<Version>,
}

impl VersionRange {
    /// Range starting at `first` with no upper bound.
    #[must_use]
    pub const fn from(first: Version) -> Self {
        Self { first, until: None }
    }

    /// Range covering `first` up to, but excluding, `until`.
    #[must_use]
    pub const fn between(first: Version, until: Version) -> Self {
        Self {
            first,
            until: Some(until),
        }
    }

    /// First version inside the range.
    #[must_use]
    pub const fn first(self) -> Version {
        self.first
    }

    /// Exclusive upper bound, or `None` if the range is unbounded.
    #[must_use]
    pub const fn until(self) -> Option<Version> {
        self.until
    }

    #[must_use]
    pub fn contains(self, version: Version) -> bool {
        version >= self.first && self.until.is_none_or(|until| version < until)
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.until.is_some_and(|until| until <= self.first)
    }

    #[must_use]
    pub fn overlaps(self, other: VersionRange) -> bool {
        let starts_before_other_ends = other.until.is_none_or(|until| self.first < until);
        let other_starts_before_self_ends = self.until.is_none_or(|until| other.first < until);
        starts_before_other_ends && other_starts_before_self_ends
    }
}

impl fmt::Debug for VersionRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.until {
            Some(until) => write!(f, "[{}, {})", self.first, until),
            None => write!(f, "[{}, ..)", self.first),
        }
    }
}

/// The platform key and numeric id of an identity over a version range.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Representation {
    range: VersionRange,
    platform_key: Cow<'static, str>,
    numeric_id: Option<i32>,
}

impl Representation {
    #[must_use]
    pub fn new(
        range: VersionRange,
        platform_key: impl Into<Cow<'static, str>>,
        numeric_id: Option<i32>,
    ) -> Self {
        Self {
            range,
            platform_key: platform_key.into(),
            numeric_id,
        }
    }

    #[must_use]
    pub const fn range(&self) -> VersionRange {
        self.range
    }

    /// Key the platform uses for this identity (e.g. `OAK_LOG`).
    #[must_use]
    pub fn platform_key(&self) -> &str {
        &self.platform_key
    }

    /// Legacy numeric id, absent where the platform no longer has one.
    #[must_use]
    pub const fn numeric_id(&self) -> Option<i32> {
        self.numeric_id
    }
}

/// Authoring defects rejected when a table is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RangeDefect {
    #[error("range {0:?} is empty")]
    Empty(VersionRange),
    #[error("range {1:?} starts before {0:?}")]
    Unordered(VersionRange, VersionRange),
    #[error("range {0:?} overlaps {1:?}")]
    Overlap(VersionRange, VersionRange),
    #[error("unbounded range {0:?} is followed by another range")]
    UnboundedNotLast(VersionRange),
    #[error("no representations")]
    Missing,
}

/// Ordered, disjoint representations of one identity.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RepresentationTable {
    entries: SmallVec<[Representation; 2]>,
}

impl RepresentationTable {
    /// A table without representations; every resolution fails.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Start chaining contiguous ranges at `first`.
    #[must_use]
    pub fn starting(first: Version) -> TableBuilder {
        TableBuilder {
            next_first: first,
            entries: SmallVec::new(),
        }
    }

    /// Build a table from explicit entries, rejecting overlap and mis-ordering.
    pub fn new(
        entries: impl IntoIterator<Item = Representation>,
    ) -> Result<Self, RangeDefect> {
        let entries: SmallVec<[Representation; 2]> = entries.into_iter().collect();

        for entry in &entries {
            if entry.range.is_empty() {
                return Err(RangeDefect::Empty(entry.range));
            }
        }

        for pair in entries.windows(2) {
            let (prev, next) = (pair[0].range, pair[1].range);
            if prev.until.is_none() {
                return Err(RangeDefect::UnboundedNotLast(prev));
            }
            if next.first < prev.first {
                return Err(RangeDefect::Unordered(prev, next));
            }
            if prev.overlaps(next) {
                return Err(RangeDefect::Overlap(prev, next));
            }
        }

        Ok(Self { entries })
    }

    /// Build the table of identity `id` from `(since, until, platform_key,
    /// numeric_id)` rows; an open `until` means unbounded.
    pub(crate) fn from_rows<K>(
        id: &str,
        rows: impl IntoIterator<Item = (Version, Option<Version>, K, Option<i32>)>,
    ) -> crate::Result<Self>
    where
        K: Into<Cow<'static, str>>,
    {
        let entries = rows.into_iter().map(|(since, until, platform_key, numeric_id)| {
            let range = match until {
                Some(until) => VersionRange::between(since, until),
                None => VersionRange::from(since),
            };
            Representation::new(range, platform_key, numeric_id)
        });
        Self::new(entries).map_err(|reason| CatalogError::InvalidRange {
            id: id.to_string(),
            reason,
        })
    }

    /// The representation whose range contains `version`.
    #[must_use]
    pub fn resolve(&self, version: Version) -> Option<&Representation> {
        let idx = self
            .entries
            .partition_point(|entry| entry.range.first <= version);
        let candidate = self.entries.get(idx.checked_sub(1)?)?;
        candidate.range.contains(version).then_some(candidate)
    }

    /// First version with any representation.
    #[must_use]
    pub fn earliest(&self) -> Option<Version> {
        self.entries.first().map(|entry| entry.range.first)
    }

    /// Whether any representation is valid for `version`.
    #[must_use]
    pub fn supports(&self, version: Version) -> bool {
        self.resolve(version).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Representation> {
        self.entries.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Chains ranges so each one starts where the previous ended.
#[derive(Debug)]
pub struct TableBuilder {
    next_first: Version,
    entries: SmallVec<[Representation; 2]>,
}

impl TableBuilder {
    /// Representation valid from the current start up to `until`.
    #[must_use]
    pub fn until(
        mut self,
        until: Version,
        platform_key: impl Into<Cow<'static, str>>,
        numeric_id: Option<i32>,
    ) -> Self {
        let range = VersionRange::between(self.next_first, until);
        self.entries
            .push(Representation::new(range, platform_key, numeric_id));
        self.next_first = until;
        self
    }

    /// Final, unbounded representation.
    pub fn onwards(
        mut self,
        platform_key: impl Into<Cow<'static, str>>,
        numeric_id: Option<i32>,
    ) -> Result<RepresentationTable, RangeDefect> {
        let range = VersionRange::from(self.next_first);
        self.entries
            .push(Representation::new(range, platform_key, numeric_id));
        self.build()
    }

    /// Finish a table whose last range is bounded.
    pub fn build(self) -> Result<RepresentationTable, RangeDefect> {
        RepresentationTable::new(self.entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(minor: u16) -> Version {
        Version::new(1, minor, 0)
    }

    #[test]
    fn test_range_contains() {
        let range = VersionRange::between(v(8), v(13));
        assert!(range.contains(v(8)));
        assert!(range.contains(Version::new(1, 12, 2)));
        assert!(!range.contains(v(13)));
        assert!(!range.contains(Version::new(1, 7, 10)));
        assert!(VersionRange::from(v(13)).contains(v(17)));
    }

    #[test]
    fn test_range_overlap() {
        let a = VersionRange::between(v(8), v(13));
        let b = VersionRange::from(v(13));
        let c = VersionRange::between(v(12), v(14));
        assert!(!a.overlaps(b));
        assert!(!b.overlaps(a));
        assert!(a.overlaps(c));
        assert!(b.overlaps(c));
    }

    #[test]
    fn test_lower_bound_inclusive() {
        // [v1, v2) and [v2, v5): v2 belongs to the second entry
        let table = RepresentationTable::starting(v(8))
            .until(v(10), "FIRST", Some(1))
            .until(v(15), "SECOND", Some(2))
            .build()
            .unwrap();

        assert_eq!(table.resolve(v(8)).unwrap().platform_key(), "FIRST");
        assert_eq!(table.resolve(v(9)).unwrap().platform_key(), "FIRST");
        assert_eq!(table.resolve(v(10)).unwrap().platform_key(), "SECOND");
        assert_eq!(table.resolve(v(10)).unwrap().numeric_id(), Some(2));
        assert!(table.resolve(Version::new(1, 7, 0)).is_none());
        assert!(table.resolve(v(15)).is_none());
        assert!(table.resolve(v(17)).is_none());
    }

    #[test]
    fn test_unbounded_tail() {
        let table = RepresentationTable::starting(v(8))
            .until(v(13), "LOG", Some(17))
            .onwards("OAK_LOG", None)
            .unwrap();

        assert_eq!(table.len(), 2);
        assert_eq!(table.earliest(), Some(v(8)));
        assert_eq!(table.resolve(v(12)).unwrap().platform_key(), "LOG");
        assert_eq!(table.resolve(v(17)).unwrap().platform_key(), "OAK_LOG");
        assert!(table.resolve(v(17)).unwrap().numeric_id().is_none());
    }

    #[test]
    fn test_ranges_disjoint_by_construction() {
        let table = RepresentationTable::starting(v(8))
            .until(v(9), "A", None)
            .until(v(11), "B", None)
            .until(v(13), "C", None)
            .onwards("D", None)
            .unwrap();

        let entries: Vec<_> = table.iter().collect();
        for (i, a) in entries.iter().enumerate() {
            for b in &entries[i + 1..] {
                assert!(!a.range().overlaps(b.range()));
            }
        }
        for minor in 8..18 {
            let hits = entries.iter().filter(|e| e.range().contains(v(minor))).count();
            assert_eq!(hits, 1, "version 1.{minor}");
        }
    }

    #[test]
    fn test_rejects_overlap() {
        let result = RepresentationTable::new([
            Representation::new(VersionRange::between(v(8), v(13)), "A", None),
            Representation::new(VersionRange::from(v(12)), "B", None),
        ]);
        assert!(matches!(result, Err(RangeDefect::Overlap(..))));
    }

    #[test]
    fn test_rejects_unordered() {
        let result = RepresentationTable::new([
            Representation::new(VersionRange::between(v(13), v(14)), "A", None),
            Representation::new(VersionRange::between(v(8), v(9)), "B", None),
        ]);
        assert!(matches!(result, Err(RangeDefect::Unordered(..))));
    }

    #[test]
    fn test_rejects_unbounded_not_last() {
        let result = RepresentationTable::new([
            Representation::new(VersionRange::from(v(8)), "A", None),
            Representation::new(VersionRange::from(v(13)), "B", None),
        ]);
        assert!(matches!(result, Err(RangeDefect::UnboundedNotLast(..))));
    }

    #[test]
    fn test_rejects_empty_range() {
        let result = RepresentationTable::starting(v(13))
            .until(v(13), "A", None)
            .build();
        assert!(matches!(result, Err(RangeDefect::Empty(..))));
    }

    #[test]
    fn test_from_rows() {
        let table = RepresentationTable::from_rows(
            "oak_log",
            [
                (v(8), Some(v(13)), "LOG", Some(17)),
                (v(13), None, "OAK_LOG", None),
            ],
        )
        .unwrap();
        assert_eq!(table.resolve(v(12)).unwrap().numeric_id(), Some(17));
        assert_eq!(table.resolve(v(16)).unwrap().platform_key(), "OAK_LOG");

        let result = RepresentationTable::from_rows(
            "oak_log",
            [(v(8), Some(v(14)), "LOG", None), (v(13), None, "OAK_LOG", None)],
        );
        assert!(matches!(
            result,
            Err(CatalogError::InvalidRange { ref id, reason: RangeDefect::Overlap(..) })
                if id == "oak_log"
        ));
    }

    #[test]
    fn test_empty_table() {
        let table = RepresentationTable::empty();
        assert!(table.is_empty());
        assert!(table.earliest().is_none());
        assert!(!table.supports(v(16)));
    }
}
