//! Ordered route table for the catalog API.
//!
//! Paths are matched after the `/api/` prefix, first match wins. Entries are
//! listed most specific first: `products/category/` must come before the
//! generic `products/` lookup or category requests would resolve to a
//! product ID.

/// How a table entry matches a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pattern {
    Exact(&'static str),
    Prefix(&'static str),
}

impl Pattern {
    fn matches(self, path: &str) -> bool {
        match self {
            Self::Exact(expected) => path == expected,
            Self::Prefix(prefix) => path.starts_with(prefix),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ReadKind {
    ListAll,
    ListByCategory,
    GetProduct,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WriteKind {
    Seed,
}

const READ_TABLE: &[(Pattern, ReadKind)] = &[
    (Pattern::Exact(""), ReadKind::ListAll),
    (Pattern::Exact("products"), ReadKind::ListAll),
    (Pattern::Prefix("products/category/"), ReadKind::ListByCategory),
    (Pattern::Prefix("products/"), ReadKind::GetProduct),
];

const WRITE_TABLE: &[(Pattern, WriteKind)] = &[(Pattern::Exact("products/seed"), WriteKind::Seed)];

/// Final `/`-separated segment of a path.
fn last_segment(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

/// A resolved `GET` request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadRoute<'a> {
    /// Every product in the collection.
    ListAll,
    /// Products whose category equals the final path segment, verbatim.
    ListByCategory(&'a str),
    /// One product, by the final path segment.
    GetProduct(&'a str),
    /// Anything else.
    Welcome,
}

impl<'a> ReadRoute<'a> {
    #[must_use]
    pub fn resolve(path: &'a str) -> Self {
        let kind = READ_TABLE
            .iter()
            .find(|(pattern, _)| pattern.matches(path))
            .map(|(_, kind)| *kind);

        match kind {
            Some(ReadKind::ListAll) => Self::ListAll,
            Some(ReadKind::ListByCategory) => Self::ListByCategory(last_segment(path)),
            Some(ReadKind::GetProduct) => Self::GetProduct(last_segment(path)),
            None => Self::Welcome,
        }
    }
}

/// A resolved `POST` request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteRoute {
    /// Append the demo catalog.
    Seed,
    /// No such endpoint.
    Invalid,
}

impl WriteRoute {
    #[must_use]
    pub fn resolve(path: &str) -> Self {
        WRITE_TABLE
            .iter()
            .find(|(pattern, _)| pattern.matches(path))
            .map_or(Self::Invalid, |(_, kind)| match kind {
                WriteKind::Seed => Self::Seed,
            })
    }
}
