//! CreatorId - Cheap-to-clone creator identifier
//!
//! Uses Arc<str> internally for O(1) clone operations.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::borrow::Borrow;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Deref;
use std::sync::Arc;

/// External streaming-platform account identifier with cheap cloning.
///
/// Internally uses `Arc<str>` so cloning only increments a reference count
/// instead of allocating new memory. Creator ids enter the system once per
/// subscription write and are cloned on every index rebuild and lookup.
///
/// # Examples
/// ```
/// use contracts::CreatorId;
///
/// let id: CreatorId = "123456".into();
/// let id2 = id.clone();  // O(1) - just increments ref count
/// assert_eq!(id, id2);
/// assert_eq!(id.as_str(), "123456");
/// ```
#[derive(Clone, Default)]
pub struct CreatorId(Arc<str>);

impl CreatorId {
    /// Create a new CreatorId from a string slice.
    #[inline]
    pub fn new(s: &str) -> Self {
        Self(Arc::from(s))
    }

    /// Get the underlying string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Deref for CreatorId {
    type Target = str;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<str> for CreatorId {
    #[inline]
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// Borrow<str> so HashMap/BTreeMap keyed by CreatorId can be queried with &str
impl Borrow<str> for CreatorId {
    #[inline]
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for CreatorId {
    #[inline]
    fn from(s: &str) -> Self {
        Self(Arc::from(s))
    }
}

impl From<String> for CreatorId {
    #[inline]
    fn from(s: String) -> Self {
        Self(Arc::from(s))
    }
}

impl fmt::Display for CreatorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for CreatorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CreatorId({:?})", self.0)
    }
}

impl PartialEq for CreatorId {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        // Fast path: same Arc pointer
        Arc::ptr_eq(&self.0, &other.0) || self.0 == other.0
    }
}

impl Eq for CreatorId {}

impl PartialEq<str> for CreatorId {
    #[inline]
    fn eq(&self, other: &str) -> bool {
        self.0.as_ref() == other
    }
}

impl PartialEq<&str> for CreatorId {
    #[inline]
    fn eq(&self, other: &&str) -> bool {
        self.0.as_ref() == *other
    }
}

impl PartialOrd for CreatorId {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CreatorId {
    #[inline]
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.0.cmp(&other.0)
    }
}

// Hash - same as str hash for HashMap compatibility
impl Hash for CreatorId {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state)
    }
}

impl Serialize for CreatorId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for CreatorId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Self::from(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_clone_is_cheap() {
        let id1: CreatorId = "141981764".into();
        let id2 = id1.clone();

        // Both should point to same underlying data (Arc clone is O(1))
        assert_eq!(id1.as_str().as_ptr(), id2.as_str().as_ptr());
    }

    #[test]
    fn test_equality() {
        let id: CreatorId = "44445592".into();
        assert_eq!(id, "44445592");
        assert_eq!(id, CreatorId::from("44445592"));
    }

    #[test]
    fn test_hashmap_key() {
        let mut map: HashMap<CreatorId, i32> = HashMap::new();
        map.insert("s1".into(), 1);
        map.insert("s2".into(), 2);

        // Can lookup with &str
        assert_eq!(map.get("s1"), Some(&1));
        assert_eq!(map.get("s2"), Some(&2));
    }

    #[test]
    fn test_ordering() {
        let mut ids: Vec<CreatorId> = vec!["c".into(), "a".into(), "b".into()];
        ids.sort();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_serde() {
        let id: CreatorId = "12345".into();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"12345\"");

        let parsed: CreatorId = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, id);
    }
}
