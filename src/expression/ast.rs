//! Expression AST (§4.16)
//!
//! Negation is never stored as a compound node: a `Not` applied to a
//! variable or constant flips it in place (`negate`); a `Not` applied to an
//! `And`/`Or` is pushed down via De Morgan's law recursively until it only
//! touches leaves. So `complement` (in the cube-list sense) is only ever
//! needed for a single literal, never for a compound subexpression.

use std::sync::Arc;

/// A boolean expression with negation already folded to the leaves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// A named variable, true iff `negated` is false.
    Var(Arc<str>, bool),
    /// A constant truth value.
    Const(bool),
    /// Logical AND.
    And(Box<Expr>, Box<Expr>),
    /// Logical OR.
    Or(Box<Expr>, Box<Expr>),
}

/// Negate `e`, pushing the negation to the leaves via De Morgan's law.
pub fn negate(e: &Expr) -> Expr {
    match e {
        Expr::Var(name, negated) => Expr::Var(Arc::clone(name), !negated),
        Expr::Const(v) => Expr::Const(!v),
        Expr::And(l, r) => Expr::Or(Box::new(negate(l)), Box::new(negate(r))),
        Expr::Or(l, r) => Expr::And(Box::new(negate(l)), Box::new(negate(r))),
    }
}

/// Intern every variable name appearing in `e` into `names`, in left-to-right
/// order. Phase one of the script interpreter's two-phase execution (§6).
pub fn collect_variables(e: &Expr, names: &mut crate::name_table::NameTable) {
    match e {
        Expr::Var(name, _) => {
            names.intern(name);
        }
        Expr::Const(_) => {}
        Expr::And(l, r) | Expr::Or(l, r) => {
            collect_variables(l, names);
            collect_variables(r, names);
        }
    }
}
