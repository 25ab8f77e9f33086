//! Containment checks.

/// The result of a containment check.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Containment {
    /// The object is fully contained.
    Full,
    /// The object is partially contained.
    Partial,
    /// The object is not contained at all.
    None,
}

impl Containment {
    /// Returns `true` if the containment is full.
    #[inline]
    pub fn is_full(&self) -> bool {
        matches!(self, Containment::Full)
    }
}

/// A trait representing whether a shape contains another shape.
pub trait Contains<T> {
    /// Returns the degree to which `other` is contained in `self`.
    fn contains(&self, other: &T) -> Containment;
}
