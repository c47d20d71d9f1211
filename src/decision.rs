//! Tautology and subset decision procedures (§4.6)
//!
//! Tautology is decided by recursive Shannon decomposition on a binate split
//! variable, bottoming out on a cover containing the universal cube (true)
//! or an empty/unate cover without one (false). Subset is decided two ways:
//! cube-by-cube coverage, and — as a cross-check — via subtraction.

use crate::cofactor::{cofactor_by_var, Polarity};
use crate::containment::is_cube_covered;
use crate::counts::CountsTable;
use crate::cube_list::CubeList;
use crate::error::MinimizationError;
use crate::sharp::subtract;

use crate::config::DEFAULT_MAX_RECURSION_DEPTH;

/// Decide whether `list` denotes the universal function (every minterm is
/// covered). Uses the default recursion depth bound; see
/// [`is_tautology_with_depth`] to override it.
pub fn is_tautology(list: &CubeList) -> Result<bool, MinimizationError> {
    is_tautology_rec(list, 0, DEFAULT_MAX_RECURSION_DEPTH)
}

/// As [`is_tautology`], with an explicit recursion depth bound (from
/// [`crate::config::MinimizeConfig::max_recursion_depth`]).
pub fn is_tautology_with_depth(
    list: &CubeList,
    max_depth: usize,
) -> Result<bool, MinimizationError> {
    is_tautology_rec(list, 0, max_depth)
}

fn is_tautology_rec(
    list: &CubeList,
    depth: usize,
    max_depth: usize,
) -> Result<bool, MinimizationError> {
    if depth > max_depth {
        log::warn!("tautology decision hit recursion depth bound {}", max_depth);
        return Err(MinimizationError::RecursionLimitExceeded { depth });
    }
    if list.live_cubes().any(|c| c.is_tautology()) {
        return Ok(true);
    }
    if list.is_empty() {
        return Ok(false);
    }
    let counts = CountsTable::compute(list);
    let var = match counts.max_binate_split_var() {
        Some(v) => v,
        // unate and no universal cube present: cannot be a tautology
        None => return Ok(false),
    };
    let zero_cf = cofactor_by_var(list, var, Polarity::Zero);
    if !is_tautology_rec(&zero_cf, depth + 1, max_depth)? {
        return Ok(false);
    }
    let one_cf = cofactor_by_var(list, var, Polarity::One);
    is_tautology_rec(&one_cf, depth + 1, max_depth)
}

/// Decide whether `a`'s function is a subset of `b`'s: every cube of `a` is
/// covered by `b`.
pub fn is_subset(a: &CubeList, b: &CubeList) -> Result<bool, MinimizationError> {
    for cube in a.live_cubes() {
        if !is_cube_covered(b, cube)? {
            return Ok(false);
        }
    }
    Ok(true)
}

/// Cross-check variant of [`is_subset`]: `a ⊆ b` iff `a # b` (a subtracted by
/// b) is empty. Used by tests to validate [`is_subset`] against an
/// independently-derived answer (§8 "Subset duality").
pub fn is_subset_by_subtract(a: &CubeList, b: &CubeList) -> Result<bool, MinimizationError> {
    let diff = subtract(a, b)?;
    Ok(diff.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn universal_cube_is_tautology() {
        let list = CubeList::parse_bcl("--\n").unwrap();
        assert!(is_tautology(&list).unwrap());
    }

    #[test]
    fn complementary_pair_is_tautology() {
        let list = CubeList::parse_bcl("0-\n1-\n").unwrap();
        assert!(is_tautology(&list).unwrap());
    }

    #[test]
    fn incomplete_cover_is_not_tautology() {
        let list = CubeList::parse_bcl("00\n01\n10\n").unwrap();
        assert!(!is_tautology(&list).unwrap());
    }

    #[test]
    fn empty_list_is_not_tautology() {
        let list = CubeList::new(2);
        assert!(!is_tautology(&list).unwrap());
    }

    #[test]
    fn subset_agrees_with_subtract_cross_check() {
        let a = CubeList::parse_bcl("11\n").unwrap();
        let b = CubeList::parse_bcl("1-\n").unwrap();
        assert!(is_subset(&a, &b).unwrap());
        assert!(is_subset_by_subtract(&a, &b).unwrap());

        let c = CubeList::parse_bcl("0-\n").unwrap();
        assert!(!is_subset(&a, &c).unwrap());
        assert!(!is_subset_by_subtract(&a, &c).unwrap());
    }
}
