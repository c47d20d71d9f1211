//! Lowering a parsed expression to the cube-list algebra (§4.16)
//!
//! `Or` lowers to union (append + single-cube containment), `And` lowers to
//! intersection, and a literal leaf lowers to the single cube that fixes its
//! variable to the matching polarity. Negation never reaches this stage on a
//! compound node — [`super::ast::negate`] already pushed it to the leaves
//! during parsing.

use crate::containment::single_cube_containment;
use crate::cube::VarValue;
use crate::cube_list::CubeList;
use crate::error::MinimizationError;
use crate::name_table::NameTable;
use crate::setops::intersection;

use super::ast::Expr;

/// Lower `expr` to a [`CubeList`] over `names`'s variables. Every variable
/// referenced by `expr` must already be interned in `names` (the script
/// interpreter's phase-one pass, §6, guarantees this).
pub fn lower(expr: &Expr, names: &NameTable) -> Result<CubeList, MinimizationError> {
    let nvars = names.len();
    match expr {
        Expr::Const(true) => {
            let mut list = CubeList::new(nvars);
            list.append_empty()?;
            Ok(list)
        }
        Expr::Const(false) => Ok(CubeList::new(nvars)),
        Expr::Var(name, negated) => {
            let idx = names
                .index_of(name)
                .unwrap_or_else(|| panic!("variable {:?} was not interned before lowering", name));
            let mut list = CubeList::new(nvars);
            let i = list.append_empty()?;
            let cube = list.get_mut(i).unwrap();
            cube.set(idx, if *negated { VarValue::Zero } else { VarValue::One });
            Ok(list)
        }
        Expr::And(l, r) => {
            let mut a = lower(l, names)?;
            let b = lower(r, names)?;
            intersection(&mut a, &b)?;
            Ok(a)
        }
        Expr::Or(l, r) => {
            let mut a = lower(l, names)?;
            let b = lower(r, names)?;
            a.add_all(&b)?;
            single_cube_containment(&mut a);
            Ok(a)
        }
    }
}
