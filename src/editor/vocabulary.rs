//! Candidate vocabularies for completion.
//!
//! Two vocabularies exist per session: the fixed jq builtin list and a
//! per-document identifier list rebuilt whenever the source document
//! changes. Both are kept sorted ascending by code point so a prefix probe
//! is a binary search.

/// The jq functions and keywords offered when no path separator precedes
/// the token. Entries ending in `()` carry the call marker; committing one
/// of those lands the caret between the parens.
///
/// Must stay sorted ascending by code point (checked by test).
pub static JQ_BUILTINS: &[&str] = &[
    "add",
    "all",
    "any",
    "arrays",
    "ascii_downcase",
    "ascii_upcase",
    "booleans",
    "bsearch()",
    "combinations",
    "contains()",
    "del()",
    "delpaths()",
    "empty",
    "endswith()",
    "error()",
    "explode",
    "finites",
    "flatten",
    "floor",
    "from_entries",
    "getpath()",
    "group_by()",
    "halt",
    "halt_error",
    "has()",
    "implode",
    "in",
    "index()",
    "indices()",
    "infinite",
    "inside",
    "isfinite",
    "isinfinite",
    "isnormal",
    "iterables",
    "join()",
    "keys",
    "keys_unsorted",
    "leaf_paths",
    "length",
    "ltrimstr()",
    "map()",
    "map_values()",
    "max",
    "max_by()",
    "min",
    "min_by()",
    "nan",
    "normals",
    "nulls",
    "numbers",
    "objects",
    "path()",
    "paths",
    "range()",
    "recurse",
    "recurse_down",
    "reverse",
    "rindex()",
    "rtrimstr()",
    "scalars",
    "select()",
    "setpath()",
    "sort",
    "sort_by()",
    "split()",
    "sqrt",
    "startswith()",
    "strings",
    "to_entries",
    "tonumber",
    "tostring",
    "transpose",
    "unique",
    "unique_by()",
    "until()",
    "utf8bytelength",
    "values",
    "walk()",
    "while()",
    "with_entries",
];

/// An always-sorted list of completion candidates.
///
/// Duplicates are tolerated (they cannot change what a prefix probe
/// returns), but bulk loading sorts and the single-entry `add` keeps the
/// order, so lookups stay `O(log n)` per keystroke.
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    entries: Vec<String>,
}

impl Vocabulary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a vocabulary from arbitrary entries, sorting them
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut entries: Vec<String> = entries.into_iter().map(Into::into).collect();
        entries.sort();
        Self { entries }
    }

    /// The builtin jq function/keyword vocabulary
    pub fn jq_builtins() -> Self {
        // JQ_BUILTINS is already sorted; from_entries re-sorts anyway so the
        // invariant never depends on the literal's layout.
        Self::from_entries(JQ_BUILTINS.iter().copied())
    }

    /// Replace all entries wholesale (document changed), re-sorting
    pub fn replace<I, S>(&mut self, entries: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.entries = entries.into_iter().map(Into::into).collect();
        self.entries.sort();
    }

    /// Add a single entry, keeping the list sorted
    pub fn add(&mut self, entry: impl Into<String>) {
        let entry = entry.into();
        let at = match self.entries.binary_search(&entry) {
            Ok(i) | Err(i) => i,
        };
        self.entries.insert(at, entry);
    }

    /// Drop all entries
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Find the remainder that would complete `prefix` to the smallest
    /// entry ≥ `prefix`.
    ///
    /// Returns None when no entry starts with `prefix`, and also when an
    /// entry *equals* `prefix`: an exact hit leaves nothing to complete,
    /// so no suggestion is staged for it.
    pub fn completion_for(&self, prefix: &str) -> Option<&str> {
        if prefix.is_empty() {
            return None;
        }
        match self
            .entries
            .binary_search_by(|entry| entry.as_str().cmp(prefix))
        {
            // Exact hit: the token is already a full entry
            Ok(_) => None,
            Err(at) => {
                let candidate = self.entries.get(at)?;
                if candidate.starts_with(prefix) {
                    Some(&candidate[prefix.len()..])
                } else {
                    None
                }
            }
        }
    }
}
