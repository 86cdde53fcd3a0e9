use std::{
    fmt,
    fmt::{Debug, Display},
};

use serde::{Deserialize, Deserializer};

/// A wrapper that keeps credentials out of logs.
///
/// Both `Debug` and `Display` print `****`, so a `Secret` can sit inside a config struct that
/// derives `Debug` without leaking. The inner value is only reachable via [`Secret::reveal`].
#[derive(Clone, Default)]
pub struct Secret<T>
where T: Clone + Default
{
    value: T,
}

impl<T: Clone + Default> Secret<T> {
    pub fn new(value: T) -> Self {
        Self { value }
    }

    pub fn reveal(&self) -> &T {
        &self.value
    }
}

impl<T: Clone + Default> From<T> for Secret<T> {
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

impl<T: Clone + Default> Debug for Secret<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("****")
    }
}

impl<T: Clone + Default> Display for Secret<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("****")
    }
}

// Deserializable so credential bundles can be read from config files, but deliberately not
// serializable: round-tripping a config must not write secrets back out.
impl<'de, T> Deserialize<'de> for Secret<T>
where T: Clone + Default + Deserialize<'de>
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        T::deserialize(deserializer).map(Self::new)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn secrets_are_redacted_in_debug_and_display() {
        let key = Secret::new("sk_live_abc123".to_string());
        assert_eq!(format!("{key:?}"), "****");
        assert_eq!(format!("{key}"), "****");
        assert_eq!(key.reveal(), "sk_live_abc123");
    }
}
