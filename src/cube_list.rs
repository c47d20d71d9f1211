//! Cube-list container (§3 "Cube list", §4.2)
//!
//! An append-only vector of cubes plus a parallel tombstone flag per cube.
//! Semantically denotes the union (OR) of its live cubes. A [`CubeList::purge`]
//! call compacts the list in place, dropping tombstoned entries.

use crate::cube::Cube;
use crate::error::{CubeListError, ParseError};

/// An ordered sequence of cubes, some of which may be tombstoned (logically
/// deleted but not yet compacted away).
#[derive(Clone, Debug)]
pub struct CubeList {
    nvars: usize,
    cubes: Vec<Cube>,
    /// `true` at index `i` means `cubes[i]` is tombstoned (dead).
    dead: Vec<bool>,
    /// Optional ceiling on `cubes.len()`, enforced by [`CubeList::append`].
    capacity: Option<usize>,
}

impl CubeList {
    /// Create an empty cube list over `nvars` variables.
    pub fn new(nvars: usize) -> Self {
        CubeList {
            nvars,
            cubes: Vec::new(),
            dead: Vec::new(),
            capacity: None,
        }
    }

    /// Create an empty cube list with a pre-sized backing store and an
    /// enforced capacity ceiling (§7 "Out of memory").
    pub fn with_capacity(nvars: usize, capacity: usize) -> Self {
        CubeList {
            nvars,
            cubes: Vec::with_capacity(capacity),
            dead: Vec::with_capacity(capacity),
            capacity: Some(capacity),
        }
    }

    /// Number of variables every cube in this list is defined over.
    pub fn nvars(&self) -> usize {
        self.nvars
    }

    /// Total number of slots, live and tombstoned.
    pub fn count(&self) -> usize {
        self.cubes.len()
    }

    /// Number of live (non-tombstoned) cubes.
    pub fn live_count(&self) -> usize {
        self.dead.iter().filter(|&&d| !d).count()
    }

    /// True iff there are no live cubes.
    pub fn is_empty(&self) -> bool {
        self.live_count() == 0
    }

    /// Fetch the cube at slot `i`, whether live or tombstoned. Returns `None`
    /// if `i` is out of range.
    pub fn get(&self, i: usize) -> Option<&Cube> {
        self.cubes.get(i)
    }

    /// Fetch a mutable handle to the cube at slot `i`, whether live or
    /// tombstoned. Used by in-place widening (expand). Returns `None` if `i`
    /// is out of range.
    pub fn get_mut(&mut self, i: usize) -> Option<&mut Cube> {
        self.cubes.get_mut(i)
    }

    /// True iff the cube at slot `i` is tombstoned. Panics if `i` is out of
    /// range (a usage-contract violation per §7).
    pub fn is_dead(&self, i: usize) -> bool {
        self.dead[i]
    }

    /// Mark the cube at slot `i` dead. Panics if `i` is out of range.
    pub fn kill(&mut self, i: usize) {
        self.dead[i] = true;
    }

    /// Remove all cubes, live or dead.
    pub fn clear(&mut self) {
        self.cubes.clear();
        self.dead.clear();
    }

    fn check_capacity(&self) -> Result<(), CubeListError> {
        if let Some(cap) = self.capacity {
            if self.cubes.len() >= cap {
                return Err(CubeListError::CapacityExceeded { capacity: cap });
            }
        }
        Ok(())
    }

    /// Append a fresh universal (all-dontcare) cube, returning its index.
    pub fn append_empty(&mut self) -> Result<usize, CubeListError> {
        self.check_capacity()?;
        self.cubes.push(Cube::universal(self.nvars));
        self.dead.push(false);
        Ok(self.cubes.len() - 1)
    }

    /// Append a copy of `cube`, returning its index. Precondition: `cube` has
    /// the same width as this list.
    pub fn append_copy(&mut self, cube: &Cube) -> Result<usize, CubeListError> {
        debug_assert_eq!(cube.nvars(), self.nvars);
        self.check_capacity()?;
        self.cubes.push(cube.clone());
        self.dead.push(false);
        Ok(self.cubes.len() - 1)
    }

    /// Append every live cube from `other` (union, no simplification).
    pub fn append_all_from(&mut self, other: &CubeList) -> Result<(), CubeListError> {
        debug_assert_eq!(other.nvars, self.nvars);
        for c in other.live_cubes() {
            self.append_copy(c)?;
        }
        Ok(())
    }

    /// Alias for [`CubeList::append_all_from`] — union without simplification.
    pub fn add_all(&mut self, other: &CubeList) -> Result<(), CubeListError> {
        self.append_all_from(other)
    }

    /// Replace this list's contents with a copy of `other`.
    pub fn copy_from(&mut self, other: &CubeList) {
        self.nvars = other.nvars;
        self.cubes = other.cubes.clone();
        self.dead = other.dead.clone();
    }

    /// Iterate over the live cubes in index order, skipping tombstones.
    pub fn live_cubes(&self) -> impl Iterator<Item = &Cube> {
        self.cubes
            .iter()
            .zip(self.dead.iter())
            .filter(|(_, dead)| !**dead)
            .map(|(c, _)| c)
    }

    /// Iterate over `(index, cube)` for every live cube in index order.
    pub fn live_indices(&self) -> impl Iterator<Item = (usize, &Cube)> {
        self.cubes
            .iter()
            .enumerate()
            .zip(self.dead.iter())
            .filter(|(_, dead)| !**dead)
            .map(|((i, c), _)| (i, c))
    }

    /// Compact the list in place, dropping tombstoned entries. Preserves the
    /// relative order of live cubes. O(count).
    pub fn purge(&mut self) {
        let mut new_cubes = Vec::with_capacity(self.live_count());
        for (c, dead) in self.cubes.drain(..).zip(self.dead.drain(..)) {
            if !dead {
                new_cubes.push(c);
            }
        }
        let len = new_cubes.len();
        self.cubes = new_cubes;
        self.dead = vec![false; len];
    }

    /// Append one cube per non-blank line of `s`, in the textual alphabet of
    /// §6. All lines must have the same variable count as this list.
    pub fn append_from_string(&mut self, s: &str) -> Result<(), ParseError> {
        for (line_no, line) in s.lines().enumerate() {
            let trimmed: String = line.chars().filter(|c| !c.is_whitespace()).collect();
            if trimmed.is_empty() {
                continue;
            }
            if trimmed.chars().count() != self.nvars {
                return Err(ParseError::WidthMismatch {
                    expected: self.nvars,
                    actual: trimmed.chars().count(),
                    line: line_no,
                });
            }
            let cube = Cube::from_bcl_str(&trimmed);
            self.append_copy(&cube)
                .expect("append_from_string: capacity exceeded mid-parse");
        }
        Ok(())
    }

    /// Parse a complete textual cube list (§6), inferring the variable count
    /// from the first non-blank line.
    pub fn parse_bcl(s: &str) -> Result<CubeList, ParseError> {
        let mut nvars = None;
        for line in s.lines() {
            let trimmed: String = line.chars().filter(|c| !c.is_whitespace()).collect();
            if !trimmed.is_empty() {
                nvars = Some(trimmed.chars().count());
                break;
            }
        }
        let nvars = match nvars {
            Some(n) => n,
            None => return Ok(CubeList::new(0)),
        };
        let mut list = CubeList::new(nvars);
        list.append_from_string(s)?;
        Ok(list)
    }

    /// Encode every live cube as one line in the textual alphabet of §6.
    pub fn to_bcl(&self) -> String {
        let mut out = String::new();
        for c in self.live_cubes() {
            out.push_str(&c.to_bcl_string());
            out.push('\n');
        }
        out
    }

    /// Row-dump format (`show`): `NNNN FF string\n` per slot, live or dead.
    pub fn show(&self) -> String {
        let mut out = String::new();
        for (i, c) in self.cubes.iter().enumerate() {
            let flag: u8 = if self.dead[i] { 1 } else { 0 };
            out.push_str(&format!("{:04} {:02} {}\n", i, flag, c.to_bcl_string()));
        }
        out
    }
}
