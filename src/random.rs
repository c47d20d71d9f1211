//! Random-tautology generator (§4.12)
//!
//! Builds a cube list provably covering the whole Boolean space, for use as
//! a self-test / regression fixture, plus a mutation that deliberately
//! breaks tautology for negative-test generation.
//!
//! Seeded externally via `rand::rngs::StdRng::seed_from_u64` — never an
//! unseeded thread-local RNG — so regression tests stay reproducible.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::cube::VarValue;
use crate::cube_list::CubeList;

/// Build a cube list over `nvars` variables that is provably a tautology,
/// growing to `target_size` live cubes.
///
/// Starts from the single all-dontcare cube and repeatedly splits a random
/// cube on a random dontcare variable into a zero-half and a one-half — a
/// transformation that always preserves the union (the split halves
/// together cover exactly what the original cube covered).
pub fn random_tautology(nvars: usize, target_size: usize, seed: u64) -> CubeList {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut list = CubeList::new(nvars);
    list.append_empty()
        .expect("random_tautology: fresh list has room for the seed cube");

    if nvars == 0 || target_size <= 1 {
        return list;
    }

    let mut guard = 0usize;
    let max_attempts = target_size.saturating_mul(nvars).saturating_mul(8).max(64);
    while list.live_count() < target_size && guard < max_attempts {
        guard += 1;
        let pos = rng.gen_range(0..list.count());
        if list.is_dead(pos) {
            continue;
        }
        let var = rng.gen_range(0..nvars);
        let cube = list.get(pos).unwrap();
        if cube.get(var) != VarValue::DontCare {
            continue;
        }
        let mut zero_half = cube.clone();
        zero_half.set(var, VarValue::Zero);
        let mut one_half = cube.clone();
        one_half.set(var, VarValue::One);

        list.kill(pos);
        list.append_copy(&zero_half)
            .expect("random_tautology: unbounded list");
        list.append_copy(&one_half)
            .expect("random_tautology: unbounded list");
    }
    list.purge();
    list
}

/// Apply `k` "dontcare-to-one" mutations to `list`, each picking a random
/// live cube and a random dontcare variable within it and fixing that
/// variable to *one*. Each mutation shrinks the cube's coverage, so applying
/// this to a tautology reliably produces a non-tautological list (used to
/// generate negative self-test fixtures).
pub fn mutate_dontcare_to_one(list: &mut CubeList, k: usize, seed: u64) {
    let mut rng = StdRng::seed_from_u64(seed);
    let nvars = list.nvars();
    if nvars == 0 {
        return;
    }
    let mut applied = 0usize;
    let max_attempts = k.saturating_mul(nvars).saturating_mul(8).max(64);
    let mut guard = 0usize;
    while applied < k && guard < max_attempts {
        guard += 1;
        let count = list.count();
        if count == 0 {
            break;
        }
        let pos = rng.gen_range(0..count);
        if list.is_dead(pos) {
            continue;
        }
        let var = rng.gen_range(0..nvars);
        let cube = list.get_mut(pos).unwrap();
        if cube.get(var) != VarValue::DontCare {
            continue;
        }
        cube.set(var, VarValue::One);
        applied += 1;
    }
}
