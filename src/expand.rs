//! Expand (§4.9)
//!
//! Two widening passes: a cheap pairwise scan that only merges cubes one
//! literal apart, and a thorough pass that grows every cube to a prime
//! implicant against a supplied off-set.

use crate::cube::VarValue;
use crate::cube_list::CubeList;

/// The single variable where `a` and `b` disagree (both fixed, opposite
/// polarity), given `a.delta(b) == 1`.
fn differing_var(a: &crate::cube::Cube, b: &crate::cube::Cube) -> Option<usize> {
    for i in 0..a.nvars() {
        if a.get(i).bits() & b.get(i).bits() == 0 {
            return Some(i);
        }
    }
    None
}

/// Nested pairwise scan: whenever two live cubes differ in exactly one
/// variable, widen one of them (preferring the first, trying the second if
/// the first doesn't yield a legal superset) to dontcare at that variable,
/// then kill any other cube the widened cube now subsumes. Monotone (cube
/// sets only grow). Cube order influences which side of a symmetric pair
/// widens first.
pub fn simple_expand(list: &mut CubeList) {
    let n = list.count();
    for i in 0..n {
        if list.is_dead(i) {
            continue;
        }
        for j in 0..n {
            if j == i || list.is_dead(j) {
                continue;
            }
            let ci = list.get(i).unwrap().clone();
            let cj = list.get(j).unwrap().clone();
            if ci.delta(&cj) != 1 {
                continue;
            }
            let v = match differing_var(&ci, &cj) {
                Some(v) => v,
                None => continue,
            };

            let mut trial_i = ci.clone();
            trial_i.set(v, VarValue::DontCare);
            if cj.is_subset_of(&trial_i) {
                list.get_mut(i).unwrap().set(v, VarValue::DontCare);
                kill_subsumed(list, i, &trial_i);
                continue;
            }

            let mut trial_j = cj.clone();
            trial_j.set(v, VarValue::DontCare);
            if ci.is_subset_of(&trial_j) {
                list.get_mut(j).unwrap().set(v, VarValue::DontCare);
                kill_subsumed(list, j, &trial_j);
                if list.is_dead(i) {
                    break;
                }
            }
        }
    }
    list.purge();
}

fn kill_subsumed(list: &mut CubeList, keep: usize, widened: &crate::cube::Cube) {
    let n = list.count();
    for k in 0..n {
        if k == keep || list.is_dead(k) {
            continue;
        }
        if list.get(k).unwrap().is_subset_of(widened) {
            list.kill(k);
        }
    }
}

/// Grow every live cube of `list` to the largest prime implicant that does
/// not intersect `off`. For each non-dontcare variable of a cube, tentatively
/// widen it to dontcare; keep the widening only if no cube of `off`
/// intersects the result. No cube is added or removed; callers should re-run
/// containment afterwards.
///
/// Precondition: `off` is a correct off-set of `list` (disjoint from it).
pub fn expand_with_off_set(list: &mut CubeList, off: &CubeList) {
    let n = list.count();
    for i in 0..n {
        if list.is_dead(i) {
            continue;
        }
        let nvars = list.nvars();
        for v in 0..nvars {
            let current = list.get(i).unwrap().get(v);
            if current == VarValue::DontCare {
                continue;
            }
            let mut trial = list.get(i).unwrap().clone();
            trial.set(v, VarValue::DontCare);
            let intersects_off = off
                .live_cubes()
                .any(|oc| trial.intersect(oc).1);
            if !intersects_off {
                list.get_mut(i).unwrap().set(v, VarValue::DontCare);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_expand_merges_adjacent_pair() {
        let mut list = CubeList::parse_bcl("00\n01\n").unwrap();
        simple_expand(&mut list);
        assert_eq!(list.live_count(), 1);
        assert_eq!(list.get(0).unwrap().to_bcl_string(), "0-");
    }

    #[test]
    fn simple_expand_leaves_non_adjacent_pair_alone() {
        let mut list = CubeList::parse_bcl("00\n11\n").unwrap();
        simple_expand(&mut list);
        assert_eq!(list.live_count(), 2);
    }

    #[test]
    fn expand_with_off_set_grows_to_prime_implicant() {
        // list = {"10"}, off = {"01", "00"} (i.e. off-set covers x0=0).
        // Widening var1 (10 -> 1-) doesn't intersect off; widening var0 would.
        let mut list = CubeList::parse_bcl("10\n").unwrap();
        let off = CubeList::parse_bcl("01\n00\n").unwrap();
        expand_with_off_set(&mut list, &off);
        assert_eq!(list.get(0).unwrap().to_bcl_string(), "1-");
    }
}
