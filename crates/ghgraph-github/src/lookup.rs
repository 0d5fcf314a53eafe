//! Outcome of a single resource query

/// Either the decoded resource or the remote's refusal to serve it
///
/// Any status other than 200 is reported as [`Lookup::NotFound`]; a missing
/// resource and a failing server are not told apart. Transport failures are
/// not a `Lookup` at all, they surface as errors.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub enum Lookup<T> {
    Found(T),
    NotFound {
        /// HTTP status the remote answered with
        status: u16,
    },
}

impl<T> Lookup<T> {
    pub fn is_found(&self) -> bool {
        matches!(self, Lookup::Found(_))
    }

    pub fn is_not_found(&self) -> bool {
        !self.is_found()
    }

    /// Converts into an `Option`, discarding the status
    pub fn found(self) -> Option<T> {
        match self {
            Lookup::Found(value) => Some(value),
            Lookup::NotFound { .. } => None,
        }
    }

    pub fn as_found(&self) -> Option<&T> {
        match self {
            Lookup::Found(value) => Some(value),
            Lookup::NotFound { .. } => None,
        }
    }

    /// Status of a `NotFound`; `None` for `Found`
    pub fn status(&self) -> Option<u16> {
        match self {
            Lookup::Found(_) => None,
            Lookup::NotFound { status } => Some(*status),
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Lookup<U> {
        match self {
            Lookup::Found(value) => Lookup::Found(f(value)),
            Lookup::NotFound { status } => Lookup::NotFound { status },
        }
    }

    /// Like [`Lookup::map`] for conversions that can fail
    pub fn try_map<U, E>(self, f: impl FnOnce(T) -> Result<U, E>) -> Result<Lookup<U>, E> {
        match self {
            Lookup::Found(value) => f(value).map(Lookup::Found),
            Lookup::NotFound { status } => Ok(Lookup::NotFound { status }),
        }
    }
}
