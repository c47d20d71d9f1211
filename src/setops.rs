//! Intersection and union (§4.10)
//!
//! Cube-list intersection (AND) and union (OR, via unsimplified append).

use crate::containment::single_cube_containment;
use crate::cube_list::CubeList;
use crate::error::CubeListError;

/// `r := a ∧ b`. `r` must be a list distinct from both `a` and `b` — the
/// borrow checker enforces this at compile time via the `&mut`/`&` split,
/// rather than at runtime via an aliasing check.
pub fn intersection_into(r: &mut CubeList, a: &CubeList, b: &CubeList) -> Result<(), CubeListError> {
    r.clear();
    for ca in a.live_cubes() {
        for cb in b.live_cubes() {
            let (cube, legal) = ca.intersect(cb);
            if legal {
                r.append_copy(&cube)?;
            }
        }
    }
    single_cube_containment(r);
    Ok(())
}

/// `a := a ∧ b`, via an internal scratch list copied back into `a`.
pub fn intersection(a: &mut CubeList, b: &CubeList) -> Result<(), CubeListError> {
    let mut scratch = CubeList::new(a.nvars());
    intersection_into(&mut scratch, a, b)?;
    a.copy_from(&scratch);
    Ok(())
}

/// `a := a ∨ b` — append every live cube of `b` to `a`, unsimplified. Thin
/// wrapper kept for symmetry with `intersection`/`intersection_into`; the
/// implementation lives on [`CubeList::add_all`].
pub fn add_all(a: &mut CubeList, b: &CubeList) -> Result<(), CubeListError> {
    a.add_all(b)
}
