//! Containment — single-cube and multi-cube (§4.5)
//!
//! Single-cube containment (SCC) drops cubes subsumed by another single cube
//! in the same list. Multi-cube containment (MCC / "IRREDUNDANT") drops
//! cubes whose coverage is subsumed by the union of the rest.

use crate::cofactor::cofactor_by_cube;
use crate::config::DEFAULT_MAX_RECURSION_DEPTH;
use crate::cube::Cube;
use crate::cube_list::CubeList;
use crate::decision::is_tautology_with_depth;
use crate::error::MinimizationError;

/// Remove every cube that is a proper subset of some other live cube in the
/// same list, plus one of every equal pair.
///
/// Outer loop fixes the "possibly-containing" cube in ascending index order;
/// ties are broken by keeping the lower-index cube. Comparisons are pruned
/// using each cube's precomputed variable count: a subset has equal-or-
/// greater variable count than its container.
pub fn single_cube_containment(list: &mut CubeList) {
    let n = list.count();
    let vcount: Vec<usize> = (0..n)
        .map(|i| list.get(i).map(Cube::variable_count).unwrap_or(0))
        .collect();

    for i in 0..n {
        if list.is_dead(i) {
            continue;
        }
        let ci = list.get(i).unwrap().clone();
        let vci = vcount[i];
        for j in 0..n {
            if j == i || list.is_dead(j) {
                continue;
            }
            if vcount[j] < vci {
                continue;
            }
            let cj = list.get(j).unwrap();
            if cj.is_subset_of(&ci) {
                list.kill(j);
            }
        }
    }
    list.purge();
}

/// Test whether `list`'s cube at `pos` is redundant: whether
/// `list \ {pos}` still covers it. Builds the cofactor of the list by the
/// cube at `pos`, excluding `pos`, then tests tautology. Uses the default
/// recursion depth bound; see [`is_cube_redundant_with_depth`] to override it.
pub fn is_cube_redundant(list: &CubeList, pos: usize) -> Result<bool, MinimizationError> {
    is_cube_redundant_with_depth(list, pos, DEFAULT_MAX_RECURSION_DEPTH)
}

/// As [`is_cube_redundant`], with an explicit recursion depth bound (from
/// [`crate::config::MinimizeConfig::max_recursion_depth`]) threaded into the
/// underlying tautology check.
pub fn is_cube_redundant_with_depth(
    list: &CubeList,
    pos: usize,
    max_depth: usize,
) -> Result<bool, MinimizationError> {
    let cube = list
        .get(pos)
        .expect("is_cube_redundant: position out of range")
        .clone();
    let cofactor = cofactor_by_cube(list, &cube, Some(pos));
    is_tautology_with_depth(&cofactor, max_depth)
}

/// Test whether an external cube `c` (not necessarily in `list`) is already
/// covered by `list`. Uses the default recursion depth bound; see
/// [`is_cube_covered_with_depth`] to override it.
pub fn is_cube_covered(list: &CubeList, c: &Cube) -> Result<bool, MinimizationError> {
    is_cube_covered_with_depth(list, c, DEFAULT_MAX_RECURSION_DEPTH)
}

/// As [`is_cube_covered`], with an explicit recursion depth bound.
pub fn is_cube_covered_with_depth(
    list: &CubeList,
    c: &Cube,
    max_depth: usize,
) -> Result<bool, MinimizationError> {
    let cofactor = cofactor_by_cube(list, c, None);
    is_tautology_with_depth(&cofactor, max_depth)
}

/// Drop cubes whose coverage is subsumed by the union of the others (the
/// heuristic's IRREDUNDANT step). Uses the default recursion depth bound;
/// see [`multi_cube_containment_with_depth`] to override it.
///
/// Cubes are tried for removal in descending variable-count order (most
/// specific cubes first), since the reference design's experience is that
/// this order tends to leave the broadest cubes — the ones likeliest to
/// still be load-bearing for some other cube's coverage — for last.
pub fn multi_cube_containment(list: &mut CubeList) -> Result<(), MinimizationError> {
    multi_cube_containment_with_depth(list, DEFAULT_MAX_RECURSION_DEPTH)
}

/// As [`multi_cube_containment`], with an explicit recursion depth bound
/// (from [`crate::config::MinimizeConfig::max_recursion_depth`]) threaded
/// into every redundancy check's underlying tautology test.
pub fn multi_cube_containment_with_depth(
    list: &mut CubeList,
    max_depth: usize,
) -> Result<(), MinimizationError> {
    let mut order: Vec<usize> = list.live_indices().map(|(i, _)| i).collect();
    order.sort_by_key(|&i| std::cmp::Reverse(list.get(i).unwrap().variable_count()));

    for i in order {
        if list.is_dead(i) {
            continue;
        }
        if is_cube_redundant_with_depth(list, i, max_depth)? {
            list.kill(i);
        }
    }
    list.purge();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scc_drops_subsumed_cube() {
        // "1-" subsumes "11": drop "11"
        let mut list = CubeList::parse_bcl("1-\n11\n00\n").unwrap();
        single_cube_containment(&mut list);
        let strs: Vec<_> = list.live_cubes().map(|c| c.to_bcl_string()).collect();
        assert_eq!(strs, vec!["1-".to_string(), "00".to_string()]);
    }

    #[test]
    fn scc_drops_one_of_a_duplicate_pair() {
        let mut list = CubeList::parse_bcl("10\n10\n01\n").unwrap();
        single_cube_containment(&mut list);
        assert_eq!(list.live_count(), 2);
    }

    #[test]
    fn mcc_removes_redundant_cube_scenario_1() {
        // V=4 scenario from §8: after MCC, "110" should be gone, leaving the primes.
        let mut list = CubeList::parse_bcl("-11\n110\n11-\n0--\n").unwrap();
        single_cube_containment(&mut list);
        multi_cube_containment(&mut list).unwrap();
        let strs: std::collections::HashSet<_> =
            list.live_cubes().map(|c| c.to_bcl_string()).collect();
        let expected: std::collections::HashSet<_> =
            ["0--", "11-", "-11"].into_iter().map(String::from).collect();
        assert_eq!(strs, expected);
    }

    #[test]
    fn is_cube_covered_true_for_redundant_external_cube() {
        let list = CubeList::parse_bcl("1-\n0-\n").unwrap();
        let c = Cube::from_bcl_str("11");
        assert!(is_cube_covered(&list, &c).unwrap());
    }
}
