//! Cofactor computation (§4.4)
//!
//! The Shannon cofactor of a list with respect to (a) a single variable and
//! polarity, or (b) an arbitrary cube (used for coverage testing).

use crate::cube::{Cube, VarValue};
use crate::cube_list::CubeList;
use crate::containment::single_cube_containment;

/// A single-variable polarity, used to pick which half of a Shannon
/// expansion to cofactor against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Polarity {
    Zero,
    One,
}

impl Polarity {
    fn value(self) -> VarValue {
        match self {
            Polarity::Zero => VarValue::Zero,
            Polarity::One => VarValue::One,
        }
    }
}

/// `cofactor_by_var(list, i, polarity)` — the cofactor of `list` with
/// respect to fixing variable `i` to `polarity`.
///
/// Per-cube rule: if the cube's value at `i` is dontcare, keep it unchanged;
/// if the cube's value includes `polarity` (i.e. `(v | polarity) ==
/// dontcare`), replace variable `i` with dontcare in the copied cube;
/// otherwise drop the cube. Single-cube containment is run afterwards
/// because cubes can now subsume one another.
pub fn cofactor_by_var(list: &CubeList, i: usize, polarity: Polarity) -> CubeList {
    let pol_bits = polarity.value().bits();
    let mut result = CubeList::new(list.nvars());
    for cube in list.live_cubes() {
        let v = cube.get(i);
        match v {
            VarValue::DontCare => {
                result
                    .append_copy(cube)
                    .expect("cofactor_by_var: unbounded result list");
            }
            other if (other.bits() | pol_bits) == VarValue::DontCare.bits() => {
                let mut c = cube.clone();
                c.set(i, VarValue::DontCare);
                result
                    .append_copy(&c)
                    .expect("cofactor_by_var: unbounded result list");
            }
            _ => {
                // cube is fixed to the opposite polarity at i — dropped
            }
        }
    }
    single_cube_containment(&mut result);
    result
}

/// `cofactor_by_cube(list, c, exclude_index)` — the simultaneous cofactor of
/// `list` with respect to every non-dontcare literal of `c`.
///
/// For each live cube `l[j]` with `j ≠ exclude_index`, OR it with the
/// complement-within-dontcare of `c` (the bitwise NOT of `c`'s non-dontcare
/// literals, masked to two-bit fields). Single-cube containment is run
/// afterwards. Used for coverage tests (§4.5, §4.6).
pub fn cofactor_by_cube(list: &CubeList, c: &Cube, exclude_index: Option<usize>) -> CubeList {
    let nvars = list.nvars();
    let mut result = CubeList::new(nvars);
    for (j, cube) in list.live_indices() {
        if Some(j) == exclude_index {
            continue;
        }
        let mut widened = cube.clone();
        let mut illegal = false;
        for i in 0..nvars {
            match c.get(i) {
                VarValue::DontCare => {}
                lit => {
                    // widen variable i to dontcare unless the literal
                    // disagrees outright (illegal), which drops the cube
                    let cur = widened.get(i);
                    let complement = complement_literal(lit);
                    let combined = or_fields(cur, complement);
                    match combined {
                        Some(v) => widened.set(i, v),
                        None => {
                            illegal = true;
                            break;
                        }
                    }
                }
            }
        }
        if !illegal {
            result
                .append_copy(&widened)
                .expect("cofactor_by_cube: unbounded result list");
        }
    }
    single_cube_containment(&mut result);
    result
}

/// The complement of a fixed literal within the dontcare lattice: the
/// opposite fixed value. Dontcare has no complement-within-dontcare (it
/// contributes no literal).
fn complement_literal(v: VarValue) -> VarValue {
    match v {
        VarValue::Zero => VarValue::One,
        VarValue::One => VarValue::Zero,
        other => other,
    }
}

/// OR two two-bit fields bit-by-bit (the lattice join, widening towards
/// dontcare). Returns `None` if both bits would be cleared in a way that
/// makes the field collapse to illegal — which cannot happen for an OR of
/// two valid fields, but is represented for symmetry with `intersect`.
fn or_fields(a: VarValue, b: VarValue) -> Option<VarValue> {
    let bits = a.bits() | b.bits();
    if bits == 0 {
        None
    } else {
        Some(VarValue::from_bits(bits))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cofactor_by_var_keeps_dontcare_drops_opposite() {
        let list = CubeList::parse_bcl("0-\n1-\n-0\n").unwrap();
        let cf = cofactor_by_var(&list, 0, Polarity::Zero);
        // "0-" -> "--" (widened), "1-" dropped, "-0" -> "-0" (var0 untouched, dontcare)
        assert_eq!(cf.live_count(), 2);
        let strs: Vec<_> = cf.live_cubes().map(|c| c.to_bcl_string()).collect();
        assert!(strs.contains(&"--".to_string()));
        assert!(strs.contains(&"-0".to_string()));
    }

    #[test]
    fn cofactor_by_cube_widens_matching_literals() {
        let list = CubeList::parse_bcl("10\n01\n").unwrap();
        let c = Cube::from_bcl_str("1-");
        let cf = cofactor_by_cube(&list, &c, None);
        // cube "10": literal at var0 is One; complement is Zero; OR with cur(One)=DontCare
        // cube "01": literal at var0 is One; complement is Zero; OR with cur(Zero)=Zero (unchanged)
        let strs: Vec<_> = cf.live_cubes().map(|c| c.to_bcl_string()).collect();
        assert!(strs.contains(&"-0".to_string()));
    }
}
