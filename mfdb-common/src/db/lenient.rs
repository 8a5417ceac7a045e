//! Tolerant deserialization helpers for `db.json` records
//!
//! Hand-edited files drift: a field holds a number where a string belongs, a
//! lineup gains a stray `null`. Scalar fields fall back to their default.
//! Collections keep every element, parsed or not, so a single bad element
//! neither hides its siblings from the checks nor disappears on save.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;
use std::ops::Index;
use tracing::debug;

/// Deserialize `T`, falling back to `T::default()` when the value has the wrong shape
pub(crate) fn lenient<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    match serde_json::from_value(value) {
        Ok(parsed) => Ok(parsed),
        Err(e) => {
            debug!("Malformed field replaced with default: {}", e);
            Ok(T::default())
        }
    }
}

/// One array element: modeled, or kept verbatim because it did not parse
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
enum Slot<T> {
    Parsed(T),
    Raw(Value),
}

impl<'de, T: DeserializeOwned> Deserialize<'de> for Slot<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        match T::deserialize(&value) {
            Ok(parsed) => Ok(Slot::Parsed(parsed)),
            Err(e) => {
                debug!("Unrecognized array element kept as-is: {}", e);
                Ok(Slot::Raw(value))
            }
        }
    }
}

/// Array whose unparseable elements are skipped by every accessor but
/// written back unchanged on serialization
///
/// `len`, iteration and indexing only see parsed elements.
#[derive(Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct LenientVec<T> {
    items: Vec<Slot<T>>,
}

impl<T> LenientVec<T> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Number of parsed elements
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of elements kept verbatim
    pub fn raw_len(&self) -> usize {
        self.items.len() - self.len()
    }

    pub fn push(&mut self, item: T) {
        self.items.push(Slot::Parsed(item));
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter(self.items.iter())
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut(self.items.iter_mut())
    }
}

impl<T> Default for LenientVec<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for LenientVec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.items.iter()).finish()
    }
}

impl<'de, T: DeserializeOwned> Deserialize<'de> for LenientVec<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        Vec::<Slot<T>>::deserialize(deserializer).map(|items| Self { items })
    }
}

impl<T> FromIterator<T> for LenientVec<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().map(Slot::Parsed).collect(),
        }
    }
}

impl<T> From<Vec<T>> for LenientVec<T> {
    fn from(items: Vec<T>) -> Self {
        items.into_iter().collect()
    }
}

impl<T> Index<usize> for LenientVec<T> {
    type Output = T;

    /// The `index`-th parsed element
    fn index(&self, index: usize) -> &T {
        match self.iter().nth(index) {
            Some(item) => item,
            None => panic!("index {} out of range for {} parsed elements", index, self.len()),
        }
    }
}

pub struct Iter<'a, T>(std::slice::Iter<'a, Slot<T>>);

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        self.0.find_map(|slot| match slot {
            Slot::Parsed(item) => Some(item),
            Slot::Raw(_) => None,
        })
    }
}

pub struct IterMut<'a, T>(std::slice::IterMut<'a, Slot<T>>);

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<&'a mut T> {
        self.0.find_map(|slot| match slot {
            Slot::Parsed(item) => Some(item),
            Slot::Raw(_) => None,
        })
    }
}

impl<'a, T> IntoIterator for &'a LenientVec<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut LenientVec<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> IterMut<'a, T> {
        self.iter_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bad_elements_are_skipped_not_dropped() {
        let genres: LenientVec<String> =
            serde_json::from_str(r#"["Power Metal", 7, null, "heavy metal"]"#).unwrap();

        assert_eq!(genres.len(), 2);
        assert_eq!(genres.raw_len(), 2);
        assert_eq!(genres[1], "heavy metal");
        assert_eq!(genres.iter().collect::<Vec<_>>(), vec!["Power Metal", "heavy metal"]);

        let output = serde_json::to_string(&genres).unwrap();
        assert_eq!(output, r#"["Power Metal",7,null,"heavy metal"]"#);
    }

    #[test]
    fn test_iter_mut_edits_in_place() {
        let mut genres: LenientVec<String> = serde_json::from_str(r#"[{}, "thrash metal"]"#).unwrap();
        for genre in &mut genres {
            *genre = genre.to_uppercase();
        }

        assert_eq!(serde_json::to_value(&genres).unwrap(), serde_json::json!([{}, "THRASH METAL"]));
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_index_counts_parsed_elements_only() {
        let genres: LenientVec<String> = serde_json::from_str(r#"[1, "Doom Metal"]"#).unwrap();
        assert_eq!(genres[0], "Doom Metal");
        let _ = &genres[1];
    }
}
