use crate::common::axis::{Axes, AxisSpec, RegularAxis};
use crate::error::GfftError;
use crate::mode::{select_mode, Mode};
use ndarray::array;

fn irregular(n: usize) -> Axes {
    Axes::irregular((0..n).map(|_| array![0.1, 0.2]))
}

fn regular(n: usize) -> Axes {
    Axes::regular((0..n).map(|_| (0.5, 8)))
}

#[test]
fn empty_input_axes_select_regular_mode_with_array_rank() {
    assert_eq!(
        select_mode(5, &Axes::none(), &Axes::none()).unwrap(),
        (Mode::RR, 5)
    );
    // out_ax is ignored with a warning
    assert_eq!(
        select_mode(2, &Axes::none(), &regular(3)).unwrap(),
        (Mode::RR, 2)
    );
}

#[test]
fn plain_axes_select_gridding_or_degridding() {
    assert_eq!(
        select_mode(1, &irregular(2), &regular(2)).unwrap(),
        (Mode::IR, 2)
    );
    assert_eq!(
        select_mode(2, &regular(2), &irregular(2)).unwrap(),
        (Mode::RI, 2)
    );
}

#[test]
fn paired_form_on_either_side_selects_ii() {
    let paired = Axes::paired(vec![array![0.0, 1.0]], vec![(1.0, 16)]);
    assert_eq!(
        select_mode(1, &irregular(1), &paired).unwrap(),
        (Mode::II, 1)
    );
    assert_eq!(
        select_mode(1, &paired, &irregular(1)).unwrap(),
        (Mode::II, 1)
    );
    assert!(paired.is_paired());
}

#[test]
fn paired_on_both_sides_is_rejected() {
    let paired = Axes::paired(vec![array![0.0]], vec![RegularAxis::new(1.0, 4)]);
    assert!(matches!(
        select_mode(1, &paired, &paired),
        Err(GfftError::Configuration(_))
    ));
}

#[test]
fn paired_with_regular_plain_side_is_rejected() {
    let paired = Axes::paired(vec![array![0.0]], vec![(1.0, 4)]);
    assert!(matches!(
        select_mode(1, &regular(1), &paired),
        Err(GfftError::Configuration(_))
    ));
}

#[test]
fn inconsistent_axis_kinds_are_rejected() {
    let mixed = Axes::Plain(vec![
        AxisSpec::from((0.5, 8)),
        AxisSpec::from(vec![0.1, 0.2]),
    ]);
    assert!(matches!(
        select_mode(2, &mixed, &irregular(2)),
        Err(GfftError::Configuration(_))
    ));
    assert!(matches!(
        select_mode(1, &irregular(2), &irregular(2)),
        Err(GfftError::Configuration(_))
    ));
}

#[test]
fn mismatched_lengths_are_rejected() {
    assert!(matches!(
        select_mode(1, &irregular(2), &regular(3)),
        Err(GfftError::Configuration(_))
    ));
}

#[test]
fn gridding_beyond_three_dimensions_is_unsupported() {
    assert_eq!(
        select_mode(1, &irregular(4), &regular(4)),
        Err(GfftError::Dimension {
            n: 4,
            mode: Mode::IR
        })
    );
    assert_eq!(
        select_mode(4, &Axes::none(), &Axes::none()).unwrap(),
        (Mode::RR, 4)
    );
}

#[test]
fn zero_rank_regular_request_has_no_dimensions() {
    assert!(matches!(
        select_mode(0, &Axes::none(), &Axes::none()),
        Err(GfftError::Configuration(_))
    ));
}

#[test]
fn mode_names() {
    assert_eq!(Mode::IR.to_string(), "irregular to regular (gridding)");
    assert!(Mode::II.is_gridded());
    assert!(!Mode::RR.is_gridded());
}
