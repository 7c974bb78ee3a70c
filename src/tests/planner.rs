use crate::error::GfftError;
use crate::planner::{AxisSet, Direction, PerAxis, ShiftPlan};

fn plan(
    n: usize,
    ftmachine: impl Into<PerAxis<Direction>>,
    in_zc: impl Into<PerAxis<bool>>,
    out_zc: impl Into<PerAxis<bool>>,
) -> Result<ShiftPlan, GfftError> {
    ShiftPlan::new(
        n,
        &ftmachine.into(),
        &in_zc.into(),
        &out_zc.into(),
        &PerAxis::Scalar(false),
    )
}

#[test]
fn scalar_flag_means_every_axis_of_the_array() {
    let p = plan(2, Direction::Fft, true, false).unwrap();
    assert_eq!(p.preshift, AxisSet::All);
    assert_eq!(p.postshift, AxisSet::none());
    assert_eq!(p.fft_axes, AxisSet::All);
    assert_eq!(p.ifft_axes, AxisSet::none());
}

#[test]
fn list_of_all_true_stays_an_explicit_list() {
    let p = plan(2, Direction::Fft, [true, true], [false, true]).unwrap();
    assert_eq!(p.preshift, AxisSet::Only(vec![0, 1]));
    assert_eq!(p.postshift, AxisSet::Only(vec![1]));
    assert_ne!(p.preshift, AxisSet::All);
}

#[test]
fn mixed_directions_split_into_fft_and_ifft_axes() {
    let p = plan(
        3,
        vec![Direction::Fft, Direction::None, Direction::Ifft],
        false,
        false,
    )
    .unwrap();
    assert_eq!(p.fft_axes, AxisSet::Only(vec![0]));
    assert_eq!(p.ifft_axes, AxisSet::Only(vec![2]));
    assert!(p.transform_requested());

    let flags = p.axes();
    assert_eq!(flags.len(), 3);
    assert!(flags[0].fft && !flags[0].ifft);
    assert!(!flags[1].fft && !flags[1].ifft);
    assert!(flags[2].ifft);
}

#[test]
fn no_direction_means_no_transform() {
    let p = plan(2, Direction::None, true, true).unwrap();
    assert!(!p.transform_requested());
    let p = plan(2, [Direction::None, Direction::None], true, true).unwrap();
    assert!(!p.transform_requested());
}

#[test]
fn list_of_wrong_length_is_rejected() {
    let err = plan(2, Direction::Fft, [true, false, true], true).unwrap_err();
    assert!(matches!(err, GfftError::Configuration(_)));

    let err = plan(3, vec![Direction::Fft], true, true).unwrap_err();
    assert!(matches!(err, GfftError::Configuration(_)));
}

#[test]
fn hermitian_scalar_expands_to_every_axis() {
    let p = ShiftPlan::new(
        3,
        &PerAxis::Scalar(Direction::Fft),
        &PerAxis::Scalar(true),
        &PerAxis::Scalar(true),
        &PerAxis::Scalar(true),
    )
    .unwrap();
    assert_eq!(p.hermitian, vec![true; 3]);
    assert!(p.axes().iter().all(|f| f.hermitian));
}

#[test]
fn resolve_checks_rank() {
    assert_eq!(AxisSet::All.resolve(3).unwrap(), vec![0, 1, 2]);
    assert_eq!(AxisSet::Only(vec![1]).resolve(2).unwrap(), vec![1]);
    assert!(AxisSet::none().resolve(0).unwrap().is_empty());
    assert!(matches!(
        AxisSet::Only(vec![2]).resolve(2),
        Err(GfftError::Configuration(_))
    ));
}

#[test]
fn direction_parses_case_insensitively() {
    assert_eq!("FFT".parse::<Direction>().unwrap(), Direction::Fft);
    assert_eq!("iFFT".parse::<Direction>().unwrap(), Direction::Ifft);
    assert_eq!("none".parse::<Direction>().unwrap(), Direction::None);
    assert!("dct".parse::<Direction>().is_err());
    assert_eq!(Direction::Ifft.to_string(), "ifft");
}
