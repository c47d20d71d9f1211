//! Complement (§4.8)
//!
//! Two independent routes to the same function, kept side by side so one can
//! cross-check the other: subtraction from the universal cube, and recursive
//! Shannon cofactor merging.

use crate::cofactor::{cofactor_by_var, Polarity};
use crate::config::{MinimizeConfig, DEFAULT_MAX_RECURSION_DEPTH};
use crate::containment::{multi_cube_containment_with_depth, single_cube_containment};
use crate::counts::CountsTable;
use crate::cube::VarValue;
use crate::cube_list::CubeList;
use crate::decision::is_tautology_with_depth;
use crate::error::MinimizationError;
use crate::expand::{expand_with_off_set, simple_expand};
use crate::sharp::subtract_with_policy;

/// Complement via subtraction from the universal cube: `U # list`, followed
/// by expanding the result against `list` as an off-set and a final
/// multi-cube containment pass. Uses the default [`MinimizeConfig`]; see
/// [`complement_by_subtract_with_config`] to override the MCC policy.
pub fn complement_by_subtract(list: &CubeList) -> Result<CubeList, MinimizationError> {
    complement_by_subtract_with_config(list, &MinimizeConfig::default())
}

/// As [`complement_by_subtract`], honoring [`MinimizeConfig::force_mcc`]
/// instead of always deciding the policy automatically from `list`.
pub fn complement_by_subtract_with_config(
    list: &CubeList,
    cfg: &MinimizeConfig,
) -> Result<CubeList, MinimizationError> {
    let do_mcc = cfg
        .force_mcc
        .unwrap_or_else(|| !CountsTable::compute(list).is_unate());
    let mut universe = CubeList::new(list.nvars());
    universe
        .append_empty()
        .expect("complement_by_subtract: universe list has room for one cube");
    let mut result = subtract_with_policy(&universe, list, do_mcc)?;
    expand_with_off_set(&mut result, list);
    multi_cube_containment_with_depth(&mut result, cfg.max_recursion_depth)?;
    Ok(result)
}

/// Complement via recursive Shannon cofactor merging:
/// `complement(f) = (x=0 ∧ complement(f|x=0)) ∨ (x=1 ∧ complement(f|x=1))`,
/// bottoming out when `list` is empty (complement is the universe) or a
/// tautology (complement is empty). Uses the default recursion depth bound;
/// see [`complement_by_cofactor_with_depth`] to override it.
pub fn complement_by_cofactor(list: &CubeList) -> Result<CubeList, MinimizationError> {
    complement_rec(list, 0, DEFAULT_MAX_RECURSION_DEPTH)
}

/// As [`complement_by_cofactor`], with an explicit recursion depth bound
/// (from [`MinimizeConfig::max_recursion_depth`]).
pub fn complement_by_cofactor_with_depth(
    list: &CubeList,
    max_depth: usize,
) -> Result<CubeList, MinimizationError> {
    complement_rec(list, 0, max_depth)
}

fn complement_rec(
    list: &CubeList,
    depth: usize,
    max_depth: usize,
) -> Result<CubeList, MinimizationError> {
    if depth > max_depth {
        return Err(MinimizationError::RecursionLimitExceeded { depth });
    }
    let nvars = list.nvars();
    if list.is_empty() {
        let mut universe = CubeList::new(nvars);
        universe.append_empty()?;
        return Ok(universe);
    }
    if is_tautology_with_depth(list, max_depth)? {
        return Ok(CubeList::new(nvars));
    }

    let counts = CountsTable::compute(list);
    let var = counts
        .max_split_var()
        .expect("non-empty, non-tautology list has some fixed literal to split on");

    let mut c0 = cofactor_by_var(list, var, Polarity::Zero);
    simple_expand(&mut c0);
    let mut c1 = cofactor_by_var(list, var, Polarity::One);
    simple_expand(&mut c1);
    let comp0 = complement_rec(&c0, depth + 1, max_depth)?;
    let comp1 = complement_rec(&c1, depth + 1, max_depth)?;

    // Merge step: each side is restored to a fixed literal at `var` and
    // unioned. This is a simplified rendering of the merge-by-equal-cube
    // step — it forgoes searching for cubes in `comp0`/`comp1` that become
    // identical once `var` is dropped and widening those in place, in favor
    // of a plain union plus single-cube containment, which is set-
    // equivalent but may leave a handful of extra cubes that `expand_with_off_set`
    // below will often re-absorb anyway.
    let mut result = CubeList::new(nvars);
    for c in comp0.live_cubes() {
        let mut cube = c.clone();
        cube.set(var, VarValue::Zero);
        result.append_copy(&cube)?;
    }
    for c in comp1.live_cubes() {
        let mut cube = c.clone();
        cube.set(var, VarValue::One);
        result.append_copy(&cube)?;
    }
    single_cube_containment(&mut result);
    expand_with_off_set(&mut result, list);
    single_cube_containment(&mut result);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decision::{is_subset, is_tautology};

    #[test]
    fn complement_of_universal_is_empty() {
        let list = CubeList::parse_bcl("--\n").unwrap();
        assert!(complement_by_subtract(&list).unwrap().is_empty());
        assert!(complement_by_cofactor(&list).unwrap().is_empty());
    }

    #[test]
    fn complement_of_empty_is_universal() {
        let list = CubeList::new(2);
        let c1 = complement_by_subtract(&list).unwrap();
        let c2 = complement_by_cofactor(&list).unwrap();
        assert!(is_tautology(&c1).unwrap());
        assert!(is_tautology(&c2).unwrap());
    }

    #[test]
    fn both_routes_agree_on_a_simple_function() {
        let list = CubeList::parse_bcl("10\n01\n").unwrap();
        let by_sub = complement_by_subtract(&list).unwrap();
        let by_cof = complement_by_cofactor(&list).unwrap();
        assert!(is_subset(&by_sub, &by_cof).unwrap());
        assert!(is_subset(&by_cof, &by_sub).unwrap());
    }

    #[test]
    fn complement_law_union_is_tautology() {
        let list = CubeList::parse_bcl("1-\n0-\n").unwrap();
        let comp = complement_by_subtract(&list).unwrap();
        assert!(comp.is_empty());
        let mut combined = list.clone();
        combined.add_all(&comp).unwrap();
        assert!(is_tautology(&combined).unwrap());
    }
}
