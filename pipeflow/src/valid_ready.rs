//! Utilities for valid-ready channels.
//!
//! A valid-ready channel carries [`Valid`] forward (producer to consumer) and [`Ready`] backward. A transfer
//! happens in a cycle iff both `valid` and `ready` are asserted in that cycle.

/// Valid/ready channel's forward signals.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Valid<V> {
    /// Inner data
    pub inner: V,

    /// Valid bit
    pub valid: bool,
}

impl<V> Valid<V> {
    /// Creates a new forward signal.
    pub const fn new(valid: bool, inner: V) -> Self { Self { inner, valid } }

    /// Creates a valid forward signal.
    pub const fn valid(inner: V) -> Self { Self::new(true, inner) }

    /// Creates an invalid forward signal. The data lines carry `V::default()`.
    pub fn invalid() -> Self
    where V: Default {
        Self::new(false, V::default())
    }

    /// Maps the inner value, keeping the valid bit.
    pub fn map_inner<W, F: FnOnce(V) -> W>(self, f: F) -> Valid<W> { Valid { inner: f(self.inner), valid: self.valid } }

    /// Returns whether a transfer happens when the consumer presents `bwd`.
    pub const fn fire(&self, bwd: Ready) -> bool { self.valid && bwd.ready }

    /// Returns the inner value if valid.
    pub fn into_option(self) -> Option<V> {
        if self.valid {
            Some(self.inner)
        } else {
            None
        }
    }
}

impl<V: Default> From<Option<V>> for Valid<V> {
    fn from(value: Option<V>) -> Self {
        match value {
            Some(inner) => Self::valid(inner),
            None => Self::invalid(),
        }
    }
}

/// Ready signal.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ready {
    /// Ready bit
    pub ready: bool,
}

impl Ready {
    /// Creates a new backward signal.
    pub const fn new(ready: bool) -> Self { Self { ready } }
}

impl From<bool> for Ready {
    fn from(ready: bool) -> Self { Self::new(ready) }
}
