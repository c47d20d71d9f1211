//! Sharp and subtract (§4.7)
//!
//! `sharp(a, b)` is the cube-level set difference: the minterms of `a` not in
//! `b`. Lists are subtracted by folding sharp pairwise over every cube of the
//! subtrahend, then simplifying the accumulated result.

use crate::config::MinimizeConfig;
use crate::containment::{multi_cube_containment, single_cube_containment};
use crate::counts::CountsTable;
use crate::cube::{Cube, VarValue};
use crate::cube_list::CubeList;
use crate::error::MinimizationError;

fn complement_literal(v: VarValue) -> VarValue {
    match v {
        VarValue::Zero => VarValue::One,
        VarValue::One => VarValue::Zero,
        other => other,
    }
}

/// `a # b` for a single pair of cubes: the cubes partitioning `a`'s minterms
/// that are not in `b`'s.
///
/// For each variable `i` where `b` is not dontcare, emit a cube equal to `a`
/// restricted to the complement of `b`'s literal at `i`, with every earlier
/// position `j < i` additionally restricted to agree with `b` there (so the
/// emitted cubes are pairwise disjoint). A cube is dropped if any of these
/// restrictions is illegal.
pub fn sharp_cubes(a: &Cube, b: &Cube) -> CubeList {
    let nvars = a.nvars();
    let mut result = CubeList::new(nvars);
    for i in 0..nvars {
        let bi = b.get(i);
        if bi == VarValue::DontCare {
            continue;
        }
        let ai = a.get(i);
        let new_i = ai.bits() & complement_literal(bi).bits();
        if new_i == 0 {
            continue;
        }

        let mut cube = a.clone();
        let mut illegal = false;
        for j in 0..i {
            let bits = a.get(j).bits() & b.get(j).bits();
            if bits == 0 {
                illegal = true;
                break;
            }
            cube.set(j, VarValue::from_bits(bits));
        }
        if illegal {
            continue;
        }
        cube.set(i, VarValue::from_bits(new_i));
        result
            .append_copy(&cube)
            .expect("sharp_cubes: unbounded result list");
    }
    result
}

/// `a # b` for cube lists: the union, over every cube `ca` of `a`, of `ca`
/// sharped successively against every cube of `b`.
pub fn sharp(a: &CubeList, b: &CubeList) -> Result<CubeList, MinimizationError> {
    let nvars = a.nvars();
    let mut out = CubeList::new(nvars);
    for ca in a.live_cubes() {
        let mut remaining = CubeList::new(nvars);
        remaining
            .append_copy(ca)
            .expect("sharp: unbounded remaining list");
        for cb in b.live_cubes() {
            let mut next = CubeList::new(nvars);
            for r in remaining.live_cubes() {
                let pieces = sharp_cubes(r, cb);
                next.append_all_from(&pieces)
                    .expect("sharp: unbounded next list");
            }
            single_cube_containment(&mut next);
            remaining = next;
            if remaining.is_empty() {
                break;
            }
        }
        out.append_all_from(&remaining)
            .expect("sharp: unbounded out list");
    }
    single_cube_containment(&mut out);
    Ok(out)
}

/// List-level subtraction: `sharp` (which already runs single-cube
/// containment), then multi-cube containment if `do_mcc`.
///
/// `do_mcc` should be set when `b` is binate — the case where `sharp`
/// generates many overlapping cubes; for unate `b`, running multi-cube
/// containment costs more than the reduction it buys. [`subtract`] makes
/// this call automatically from `b`'s unate/binate classification;
/// [`crate::config::MinimizeConfig::force_mcc`] lets a caller override it.
pub fn subtract_with_policy(
    a: &CubeList,
    b: &CubeList,
    do_mcc: bool,
) -> Result<CubeList, MinimizationError> {
    let mut result = sharp(a, b)?;
    if do_mcc {
        multi_cube_containment(&mut result)?;
    }
    Ok(result)
}

/// List-level subtraction with the unate/binate `do_mcc` policy decided
/// automatically from `b`.
pub fn subtract(a: &CubeList, b: &CubeList) -> Result<CubeList, MinimizationError> {
    let do_mcc = !CountsTable::compute(b).is_unate();
    subtract_with_policy(a, b, do_mcc)
}

/// As [`subtract`], but honoring [`MinimizeConfig::force_mcc`] instead of
/// always deciding the policy automatically from `b`.
pub fn subtract_with_config(
    a: &CubeList,
    b: &CubeList,
    cfg: &MinimizeConfig,
) -> Result<CubeList, MinimizationError> {
    let do_mcc = cfg
        .force_mcc
        .unwrap_or_else(|| !CountsTable::compute(b).is_unate());
    subtract_with_policy(a, b, do_mcc)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sharp_cubes_single_pair() {
        // a = "1-", b = "11": a # b should cover "10"
        let a = Cube::from_bcl_str("1-");
        let b = Cube::from_bcl_str("11");
        let result = sharp_cubes(&a, &b);
        let strs: Vec<_> = result.live_cubes().map(|c| c.to_bcl_string()).collect();
        assert_eq!(strs, vec!["10".to_string()]);
    }

    #[test]
    fn sharp_cubes_disjoint_is_a_itself() {
        let a = Cube::from_bcl_str("00");
        let b = Cube::from_bcl_str("11");
        let result = sharp_cubes(&a, &b);
        let strs: Vec<_> = result.live_cubes().map(|c| c.to_bcl_string()).collect();
        assert_eq!(strs, vec!["00".to_string()]);
    }

    #[test]
    fn subtract_removes_fully_covered_cube() {
        let a = CubeList::parse_bcl("1-\n0-\n").unwrap();
        let b = CubeList::parse_bcl("--\n").unwrap();
        let result = subtract(&a, &b).unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn subtract_partial_overlap() {
        let a = CubeList::parse_bcl("1-\n").unwrap();
        let b = CubeList::parse_bcl("11\n").unwrap();
        let result = subtract(&a, &b).unwrap();
        let strs: Vec<_> = result.live_cubes().map(|c| c.to_bcl_string()).collect();
        assert_eq!(strs, vec!["10".to_string()]);
    }

    #[test]
    fn subtract_with_config_honors_forced_mcc_override() {
        let a = CubeList::parse_bcl("1-\n0-\n").unwrap();
        let b = CubeList::parse_bcl("--\n").unwrap();
        let mut cfg = MinimizeConfig::default();
        cfg.force_mcc = Some(true);
        let result = subtract_with_config(&a, &b, &cfg).unwrap();
        assert!(result.is_empty());
    }
}
