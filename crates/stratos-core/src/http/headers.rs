//! Ordered, case-insensitive, multi-valued HTTP header collection.
//!
//! Response decoding needs three properties that a plain `HashMap` does not
//! give: lookup by name must ignore ASCII case, a name may carry several
//! values in received order, and iteration must preserve the order in which
//! entries were added. `Headers` keeps an ordered list of `(name, values)`
//! entries and does case-insensitive matching on access.

/// An ordered, case-insensitive, multi-valued header collection.
///
/// Entry order is insertion order; the name casing of the first occurrence
/// is retained. Values under one name are kept in the order they were
/// appended.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Headers {
    entries: Vec<(String, Vec<String>)>,
}

impl Headers {
    /// Creates an empty header collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a value under `name`.
    ///
    /// If the name is already present (case-insensitively), the value is
    /// added to its list; otherwise a new entry is created at the end.
    pub fn append(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.entry_mut(&name) {
            Some(values) => values.push(value),
            None => self.entries.push((name, vec![value])),
        }
    }

    /// Inserts `values` under `name`, replacing any existing value list.
    pub fn insert(&mut self, name: impl Into<String>, values: Vec<String>) {
        let name = name.into();
        match self.entry_mut(&name) {
            Some(existing) => *existing = values,
            None => self.entries.push((name, values)),
        }
    }

    /// Returns the first value under `name`, if any.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entry(name)
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Returns every value under `name`, in received order.
    pub fn get_all(&self, name: &str) -> &[String] {
        self.entry(name).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Returns whether `name` is present.
    pub fn contains(&self, name: &str) -> bool {
        self.entry(name).is_some()
    }

    /// Iterates over `(name, values)` entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(name, values)| (name.as_str(), values.as_slice()))
    }

    /// Returns the number of distinct header names.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn entry(&self, name: &str) -> Option<&Vec<String>> {
        self.entries
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, values)| values)
    }

    fn entry_mut(&mut self, name: &str) -> Option<&mut Vec<String>> {
        self.entries
            .iter_mut()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, values)| values)
    }
}

impl<N: Into<String>, V: Into<String>> FromIterator<(N, V)> for Headers {
    fn from_iter<T: IntoIterator<Item = (N, V)>>(iter: T) -> Self {
        let mut headers = Headers::new();
        for (name, value) in iter {
            headers.append(name, value);
        }
        headers
    }
}
