//! Variable name table (§4.13, ambient)
//!
//! Maps variable names to 0-based indices and back, with conflict-resolved
//! auto-naming. Grounded on the teacher's `cover::labels::LabelManager`, kept
//! to the same two-map (`Vec` + `HashMap`) shape but generalized to a single
//! runtime prefix so it can serve both `Problem`'s input-variable table and
//! the expression parser's variable interning without a const-generic
//! parameter per use site.

use std::collections::HashMap;
use std::sync::Arc;

/// Bidirectional name/index table with auto-naming on conflict.
#[derive(Clone, Debug)]
pub struct NameTable {
    prefix: char,
    names: Vec<Arc<str>>,
    index_of: HashMap<Arc<str>, usize>,
}

impl NameTable {
    /// Create an empty table whose auto-generated names use `prefix` (e.g.
    /// `'x'` produces `x0`, `x1`, ...).
    pub fn new(prefix: char) -> Self {
        NameTable {
            prefix,
            names: Vec::new(),
            index_of: HashMap::new(),
        }
    }

    /// Number of names currently registered.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// True iff no names are registered.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// The name at `index`, if any.
    pub fn name_at(&self, index: usize) -> Option<&Arc<str>> {
        self.names.get(index)
    }

    /// The index of `name`, if registered.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.index_of.get(name).copied()
    }

    /// True iff `name` is already registered.
    pub fn contains(&self, name: &str) -> bool {
        self.index_of.contains_key(name)
    }

    /// Register `name` at the next free index, returning that index.
    /// Duplicate registration of an existing name returns its existing
    /// index without creating a second entry.
    pub fn intern(&mut self, name: &str) -> usize {
        if let Some(&i) = self.index_of.get(name) {
            return i;
        }
        let index = self.names.len();
        let arc: Arc<str> = Arc::from(name);
        self.index_of.insert(Arc::clone(&arc), index);
        self.names.push(arc);
        index
    }

    fn next_available_index(&self, start: usize) -> usize {
        let mut n = start;
        loop {
            let candidate = format!("{}{}", self.prefix, n);
            if !self.index_of.contains_key(candidate.as_str()) {
                return n;
            }
            n += 1;
        }
    }

    /// Register a fresh positional name for the next index (`"{prefix}{i}"`),
    /// resolving to the next unused suffix if that name is already taken.
    /// Returns the assigned index.
    pub fn add_positional(&mut self) -> usize {
        let position = self.names.len();
        let natural = format!("{}{}", self.prefix, position);
        let name = if self.index_of.contains_key(natural.as_str()) {
            format!("{}{}", self.prefix, self.next_available_index(position))
        } else {
            natural
        };
        let arc: Arc<str> = Arc::from(name.as_str());
        self.index_of.insert(Arc::clone(&arc), position);
        self.names.push(arc);
        position
    }

    /// Grow the table with positional names until it holds `target_len`
    /// entries.
    pub fn backfill_to(&mut self, target_len: usize) {
        while self.names.len() < target_len {
            self.add_positional();
        }
    }
}
