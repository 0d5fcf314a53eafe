//! Resource path derivation
//!
//! A [`ResourcePath`] is an absolute base URL plus the segments appended to
//! it. Every composition goes through [`join`] or [`ResourcePath::derive`],
//! both of which keep exactly one separator between parts.

use std::fmt;
use thiserror::Error;
use url::Url;

/// Path separator used by both the API and raw content hosts
pub const SEPARATOR: char = '/';

/// Joins two path fragments with exactly one separator
///
/// Separators at the joining ends are collapsed. If either side is empty the
/// other side is returned without a dangling separator.
///
/// ```
/// use ghgraph_github::path::join;
///
/// assert_eq!(join("docs", "readme.md"), "docs/readme.md");
/// assert_eq!(join("docs/", "/readme.md"), "docs/readme.md");
/// assert_eq!(join("", "readme.md"), "readme.md");
/// ```
pub fn join(left: &str, right: &str) -> String {
    let left = left.trim_end_matches(SEPARATOR);
    let right = right.trim_start_matches(SEPARATOR);

    match (left.is_empty(), right.is_empty()) {
        (true, _) => right.to_string(),
        (false, true) => left.to_string(),
        (false, false) => format!("{left}{SEPARATOR}{right}"),
    }
}

/// Immutable request path: base URL, appended segments, optional `ref`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResourcePath {
    base: Url,
    segments: Vec<String>,
    reference: Option<String>,
}

impl ResourcePath {
    /// Parses a base URL such as `https://api.github.com/`
    ///
    /// # Errors
    ///
    /// Returns error if the string is not an absolute URL or cannot carry
    /// path segments (e.g. `mailto:`).
    pub fn parse(base: &str) -> Result<Self, PathError> {
        let base = Url::parse(base)?;
        if base.cannot_be_a_base() {
            return Err(PathError::CannotBeABase { url: base });
        }
        Ok(Self {
            base,
            segments: Vec::new(),
            reference: None,
        })
    }

    /// Returns this path followed by one separator and `segment`
    ///
    /// `segment` may itself contain separators (`"docs/readme.md"`); empty
    /// pieces are dropped so the rendered path never holds `//`. `.` and `..`
    /// pieces are resolved here the way URL parsing would resolve them, and
    /// `..` never climbs into the base. Nothing else is validated.
    pub fn derive(&self, segment: &str) -> Self {
        let mut derived = self.clone();
        for piece in segment.split(SEPARATOR) {
            match piece {
                "" | "." => {}
                ".." => {
                    derived.segments.pop();
                }
                _ => derived.segments.push(piece.to_string()),
            }
        }
        derived
    }

    /// Returns this path with `?ref={branch}` attached
    pub fn with_ref(&self, branch: &str) -> Self {
        Self {
            reference: Some(branch.to_string()),
            ..self.clone()
        }
    }

    pub fn base(&self) -> &Url {
        &self.base
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Branch selected through the `ref` query, if any
    pub fn reference(&self) -> Option<&str> {
        self.reference.as_deref()
    }

    /// Path relative to the base, e.g. `repos/o/r/contents/a.md?ref=main`
    pub fn relative(&self) -> String {
        let path = self
            .segments
            .iter()
            .fold(String::new(), |acc, segment| join(&acc, segment));
        match &self.reference {
            Some(reference) => format!("{path}?ref={reference}"),
            None => path,
        }
    }

    /// Full request URL
    ///
    /// Characters that cannot appear in a URL path are percent-encoded here.
    pub fn to_url(&self) -> Url {
        let mut url = self.base.clone();
        // `parse` rejected cannot-be-a-base URLs, so this always succeeds
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(&self.segments);
        }
        if let Some(reference) = &self.reference {
            url.query_pairs_mut().append_pair("ref", reference);
        }
        url
    }
}

impl fmt::Display for ResourcePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_url())
    }
}

/// Base URL errors
#[derive(Debug, Error)]
pub enum PathError {
    /// URL cannot be used as a base
    #[error("URL cannot be a base: {url}")]
    CannotBeABase {
        /// The problematic URL
        url: Url,
    },

    /// Invalid URL parse error
    #[error("Invalid URL: {0}")]
    ParseError(#[from] url::ParseError),
}
