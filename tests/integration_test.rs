//! End-to-end pipeline: parse a textual cube list, minimize it, and confirm
//! the decision procedures agree that the result denotes the same function.

use bcl_engine::decision::{is_subset, is_tautology};
use bcl_engine::minimize::Minimizable;
use bcl_engine::{CubeList, Problem};

#[test]
fn parse_minimize_decide_round_trip() {
    let list = CubeList::parse_bcl("-11\n110\n11-\n0--\n").unwrap();
    let minimized = list.minimize().unwrap();

    assert!(minimized.live_count() < list.live_count());
    assert!(is_subset(&list, &minimized).unwrap());
    assert!(is_subset(&minimized, &list).unwrap());

    let reparsed = CubeList::parse_bcl(&minimized.to_bcl()).unwrap();
    assert_eq!(reparsed.live_count(), minimized.live_count());
}

#[test]
fn problem_handle_grows_variables_and_sizes_lists_consistently() {
    let mut problem = Problem::new(0);
    let a = problem.intern_variable("enable");
    let b = problem.intern_variable("reset");
    assert_eq!((a, b), (0, 1));
    assert_eq!(problem.nvars(), 2);

    problem.resize(4);
    assert_eq!(problem.nvars(), 4);
    assert_eq!(problem.names().name_at(2).unwrap().as_ref(), "x2");

    let list = problem.new_list();
    assert_eq!(list.nvars(), 4);
}

#[test]
fn scratch_frames_nest_and_reclaim_without_disturbing_sibling_frames() {
    let problem = Problem::new(3);
    let mut outer = problem.acquire_scratch();
    outer.list_mut().append_empty().unwrap();
    assert_eq!(outer.list().count(), 1);
    {
        let mut inner = problem.acquire_scratch();
        inner.list_mut().append_empty().unwrap();
        inner.list_mut().append_empty().unwrap();
        assert_eq!(inner.list().count(), 2);
    }
    assert_eq!(outer.list().count(), 1);
}

#[test]
fn minimizing_an_already_minimal_cover_is_a_fixed_point() {
    let list = CubeList::parse_bcl("1-0\n01-\n--1\n").unwrap();
    let once = list.minimize().unwrap();
    let twice = once.minimize().unwrap();
    assert_eq!(once.live_count(), twice.live_count());
    assert!(is_subset(&once, &twice).unwrap());
    assert!(is_subset(&twice, &once).unwrap());
}

#[test]
fn capacity_ceiling_is_enforced_and_surfaces_as_an_error() {
    let mut list = CubeList::with_capacity(2, 1);
    assert!(list.append_empty().is_ok());
    let err = list.append_empty().unwrap_err();
    assert!(matches!(
        err,
        bcl_engine::CubeListError::CapacityExceeded { capacity: 1 }
    ));
}

#[test]
fn width_mismatch_in_textual_parsing_is_reported_with_offending_line() {
    let err = CubeList::parse_bcl("1-\n101\n").unwrap_err();
    match err {
        bcl_engine::ParseError::WidthMismatch { expected, actual, line } => {
            assert_eq!(expected, 2);
            assert_eq!(actual, 3);
            assert_eq!(line, 1);
        }
        other => panic!("expected WidthMismatch, got {:?}", other),
    }
}

#[test]
fn is_tautology_agrees_across_several_equivalent_covers() {
    let covers = ["--\n", "0-\n1-\n", "00\n01\n10\n11\n"];
    for src in covers {
        let list = CubeList::parse_bcl(src).unwrap();
        assert!(is_tautology(&list).unwrap(), "{src:?} should be a tautology");
    }
}
