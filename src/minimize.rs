//! Top-level minimization pipeline (§4.11)
//!
//! The heuristic "widen-and-trim" pass: single-cube containment, complement
//! via subtraction, expand against that complement as an off-set, single-cube
//! containment again, then multi-cube containment. Guarantees the result
//! denotes the same function, is SCC-free and MCC-free, and that every cube
//! is a prime implicant relative to the off-set computed in step 2 — not
//! global minimality.

use crate::complement::complement_by_subtract_with_config;
use crate::config::MinimizeConfig;
use crate::containment::{multi_cube_containment_with_depth, single_cube_containment};
use crate::cube_list::CubeList;
use crate::error::MinimizationError;
use crate::expand::expand_with_off_set;

/// Types that can be reduced to a minimal sum-of-products cover.
///
/// Following the teacher's `Minimizable` trait shape, but over [`CubeList`]
/// rather than an FFI-backed cover type: `minimize` is a convenience over
/// `minimize_with_config` using [`MinimizeConfig::default`].
pub trait Minimizable {
    /// Minimize using the default [`MinimizeConfig`].
    fn minimize(&self) -> Result<CubeList, MinimizationError> {
        self.minimize_with_config(&MinimizeConfig::default())
    }

    /// Minimize using the supplied configuration.
    fn minimize_with_config(&self, cfg: &MinimizeConfig) -> Result<CubeList, MinimizationError>;
}

impl Minimizable for CubeList {
    fn minimize_with_config(&self, cfg: &MinimizeConfig) -> Result<CubeList, MinimizationError> {
        log::debug!("minimize: starting from {} cubes", self.live_count());
        let mut list = self.clone();
        single_cube_containment(&mut list);
        log::debug!("minimize: after initial SCC, {} cubes", list.live_count());

        let off = complement_by_subtract_with_config(&list, cfg)?;
        log::debug!("minimize: off-set has {} cubes", off.live_count());

        expand_with_off_set(&mut list, &off);
        single_cube_containment(&mut list);
        multi_cube_containment_with_depth(&mut list, cfg.max_recursion_depth)?;
        log::debug!("minimize: finished with {} cubes", list.live_count());

        Ok(list)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decision::is_tautology;

    #[test]
    fn minimize_preserves_function_and_drops_redundant_cube() {
        // "110" is redundant given "-11", "11-", "0--" (classic espresso example)
        let list = CubeList::parse_bcl("-11\n110\n11-\n0--\n").unwrap();
        let minimized = list.minimize().unwrap();
        assert!(minimized.live_count() <= list.live_count());

        // function-equivalence: list ⊆ minimized and minimized ⊆ list
        let mut combined_forward = list.clone();
        combined_forward.add_all(&minimized).unwrap();
        let mut combined_backward = minimized.clone();
        combined_backward.add_all(&list).unwrap();

        let mut xor_check = list.clone();
        let comp_min = crate::complement::complement_by_subtract(&minimized).unwrap();
        xor_check.add_all(&comp_min).unwrap();
        assert!(is_tautology(&xor_check).unwrap());
    }

    #[test]
    fn minimize_is_idempotent_on_a_two_cube_example() {
        let list = CubeList::parse_bcl("10\n01\n").unwrap();
        let once = list.minimize().unwrap();
        let twice = once.minimize().unwrap();
        assert_eq!(once.live_count(), twice.live_count());
    }

    #[test]
    fn minimize_on_universal_cube_stays_universal() {
        let list = CubeList::parse_bcl("--\n").unwrap();
        let minimized = list.minimize().unwrap();
        assert_eq!(minimized.live_count(), 1);
        assert!(minimized.get(0).unwrap().is_tautology());
    }

    #[test]
    fn minimize_with_config_forced_mcc_agrees_with_default() {
        let list = CubeList::parse_bcl("-11\n110\n11-\n0--\n").unwrap();
        let mut cfg = MinimizeConfig::default();
        cfg.force_mcc = Some(true);
        let forced = list.minimize_with_config(&cfg).unwrap();
        let default = list.minimize().unwrap();
        assert_eq!(forced.live_count(), default.live_count());
    }
}
