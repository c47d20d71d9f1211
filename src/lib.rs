//! # BCL Engine
//!
//! A bit-packed Boolean cube-list algebra and a heuristic two-level
//! minimizer in the style of Espresso: single- and multi-cube containment,
//! tautology and subset decision, sharp/subtract, complement, and expand,
//! composed into a `minimize` pipeline.
//!
//! ## Cube-list algebra
//!
//! [`cube::Cube`] packs two bits per variable (`illegal`, `zero`, `one`,
//! `dontcare`) into `u64` words. A [`cube_list::CubeList`] is an ordered,
//! tombstone-aware collection of cubes denoting the union (OR) of its live
//! members.
//!
//! ```
//! use bcl_engine::cube_list::CubeList;
//! use bcl_engine::containment::single_cube_containment;
//!
//! let mut list = CubeList::parse_bcl("1-\n11\n00\n").unwrap();
//! single_cube_containment(&mut list);
//! assert_eq!(list.live_count(), 2); // "11" is subsumed by "1-"
//! ```
//!
//! ## Minimization
//!
//! [`minimize::Minimizable`] runs single-cube containment, complements the
//! off-set, expands every cube against that off-set to a prime implicant,
//! then re-runs single- and multi-cube containment:
//!
//! ```
//! use bcl_engine::cube_list::CubeList;
//! use bcl_engine::minimize::Minimizable;
//!
//! let on_set = CubeList::parse_bcl("000\n001\n010\n011\n100\n").unwrap();
//! let minimized = on_set.minimize().unwrap();
//! assert!(minimized.live_count() <= on_set.live_count());
//! ```
//!
//! ## Expressions and scripts
//!
//! [`expression::parse_expr`] parses a textual infix Boolean expression
//! (`a & !b | c`) and [`expression::lower`] compiles it to a [`cube_list::CubeList`]
//! over a [`name_table::NameTable`]. [`script::run`] drives the whole
//! algebra from a JSON command script, sizing a [`problem::Problem`] from
//! every `expr`/`bcl` operand before evaluating.
//!
//! ## Ambient stack
//!
//! Every fallible operation returns a `Result` with one of the small,
//! per-source error enums in [`error`] — no blanket `anyhow`-style error
//! type. [`config::MinimizeConfig`] exposes the pipeline's tunables (forced
//! MCC, recursion depth bound, PRNG seed). Diagnostics go through the `log`
//! crate at the call sites that matter (recursion-depth near-misses,
//! pipeline stage transitions), not as a blanket trace.

pub mod cofactor;
pub mod complement;
pub mod config;
pub mod containment;
pub mod counts;
pub mod cube;
pub mod cube_list;
pub mod decision;
pub mod error;
pub mod expand;
pub mod expression;
pub mod minimize;
pub mod name_table;
pub mod problem;
pub mod random;
pub mod script;
pub mod setops;
pub mod sharp;

pub use config::MinimizeConfig;
pub use cube::{Cube, VarValue};
pub use cube_list::CubeList;
pub use error::{
    CubeListError, ExpressionParseError, MinimizationError, ParseError, ScriptError,
};
pub use expression::{parse_expr, Expr};
pub use minimize::Minimizable;
pub use name_table::NameTable;
pub use problem::Problem;
