use super::assert_close;
use crate::common::grid::GridParameters;
use crate::config::{C, F};
use crate::error::GfftError;
use crate::gridding::{degrid, grid};
use crate::kernel::Kernel;
use ndarray::prelude::*;

#[test]
fn single_sample_spreads_kernel_weights() {
    let k = Kernel::new(3, 2.0).unwrap();
    let g = GridParameters::new(1.0, 16, 0.0);
    let x = array![5.25];
    let out = grid(&[x.view()], array![C::new(2.0, 0.0)].view(), &[g], &k, &[false]).unwrap();
    assert_eq!(out.shape(), &[16]);
    for m in 2..=8 {
        assert_close(out[[m].as_slice()].re, 2.0 * k.value(m as F - 5.25), 1e-15);
    }
    assert_eq!(out[[0].as_slice()], C::new(0.0, 0.0));
    assert_eq!(out[[12].as_slice()], C::new(0.0, 0.0));
}

#[test]
fn kernel_support_wraps_around_grid_edges() {
    let k = Kernel::new(3, 2.0).unwrap();
    let g = GridParameters::new(1.0, 16, 0.0);
    let x = array![0.2];
    let out = grid(&[x.view()], array![C::new(1.0, 0.0)].view(), &[g], &k, &[false]).unwrap();
    assert_close(out[[15].as_slice()].re, k.value(-1.2), 1e-15);
    assert_close(out[[13].as_slice()].re, k.value(-3.2), 1e-15);
    assert_close(out[[1].as_slice()].re, k.value(0.8), 1e-15);
}

#[test]
fn far_coordinate_wraps_by_whole_periods() {
    let k = Kernel::new(3, 2.0).unwrap();
    let g = GridParameters::new(1.0, 16, 0.0);
    let v = array![C::new(1.0, -1.0)];
    let near = grid(&[array![5.25].view()], v.view(), &[g], &k, &[false]).unwrap();
    // 2^44 кратно размеру сетки и представимо точно вместе с дробной частью
    let far_x = array![(1u64 << 44) as F + 5.25];
    let far = grid(&[far_x.view()], v.view(), &[g], &k, &[false]).unwrap();
    for (a, b) in near.iter().zip(far.iter()) {
        assert!((a - b).norm() < 1e-15);
    }
    let back = degrid(&[far_x.view()], &near, &[g], &k).unwrap();
    let direct = degrid(&[array![5.25].view()], &near, &[g], &k).unwrap();
    assert!((back[0] - direct[0]).norm() < 1e-15);
}

#[test]
fn huge_finite_coordinate_does_not_panic() {
    let k = Kernel::new(6, 1.5).unwrap();
    let g = GridParameters::centered(1.0 / 24.0, 24, true);
    let x = array![0.1, 1e20, -3e25];
    let v = Array1::from_elem(3, C::new(1.0, 0.0));
    let out = grid(&[x.view()], v.view(), &[g], &k, &[true]).unwrap();
    assert!(out.iter().all(|z| z.is_finite()));
    let back = degrid(&[x.view()], &out, &[g], &k).unwrap();
    assert!(back.iter().all(|z| z.is_finite()));
}

#[test]
fn hermitian_gridding_is_conjugate_symmetric() {
    let k = Kernel::new(6, 1.5).unwrap();
    let g = GridParameters::centered(0.1, 16, true);
    let c = g.fractional_index(0.0).round() as usize;
    assert_eq!(c, 8);

    let x = array![0.23, -0.41];
    let v = array![C::new(1.0, 2.0), C::new(-0.5, 0.3)];
    let out = grid(&[x.view()], v.view(), &[g], &k, &[true]).unwrap();
    for m in 0..16 {
        let mirrored = (2 * c + 16 - m) % 16;
        let d = out[[mirrored].as_slice()] - out[[m].as_slice()].conj();
        assert!(d.norm() < 1e-12, "pixel {m}: {d}");
    }
}

#[test]
fn hermitian_flag_only_mirrors_flagged_axes() {
    let k = Kernel::new(2, 2.0).unwrap();
    let gx = GridParameters::centered(1.0, 8, true);
    let gy = GridParameters::centered(1.0, 8, true);
    let x = array![1.0];
    let y = array![2.0];
    let v = array![C::new(1.0, 1.0)];
    let out = grid(&[x.view(), y.view()], v.view(), &[gx, gy], &k, &[true, false]).unwrap();
    // (1, 2) -> pixel (5, 6), its mirror (-1, 2) -> pixel (3, 6)
    let direct = out[[5, 6].as_slice()];
    let mirror = out[[3, 6].as_slice()];
    assert!((mirror - direct.conj()).norm() < 1e-12);
    assert!(out[[3, 2].as_slice()].norm() < 1e-12);
}

#[test]
fn degrid_of_constant_grid_is_constant() {
    let k = Kernel::new(6, 1.5).unwrap();
    let g = GridParameters::centered(0.5, 32, true);
    let values = ArrayD::from_elem(IxDyn(&[32]), C::new(3.0, -1.0));
    let x = array![-7.9, -0.3, 0.0, 2.71, 7.74];
    let out = degrid(&[x.view()], &values, &[g], &k).unwrap();
    for v in out.iter() {
        assert!((v - C::new(3.0, -1.0)).norm() < 1e-6, "{v}");
    }
}

#[test]
fn degrid_is_adjoint_of_grid() {
    let k = Kernel::new(4, 2.0).unwrap();
    let g = GridParameters::centered(0.25, 12, true);
    let x = array![-1.1, 0.05, 0.9];
    let v = array![C::new(1.0, 0.5), C::new(-2.0, 0.0), C::new(0.3, -0.7)];
    let field = Array::from_shape_fn(IxDyn(&[12]), |i| C::new(i[0] as F, 1.0 - i[0] as F));

    let gridded = grid(&[x.view()], v.view(), &[g], &k, &[false]).unwrap();
    let degridded = degrid(&[x.view()], &field, &[g], &k).unwrap();

    let lhs: C = gridded.iter().zip(field.iter()).map(|(a, b)| a * b).sum();
    let rhs: C = v.iter().zip(degridded.iter()).map(|(a, b)| a * b).sum();
    assert!((lhs - rhs).norm() < 1e-10);
}

#[test]
fn invalid_sample_sets_are_rejected() {
    let k = Kernel::new(2, 2.0).unwrap();
    let g = GridParameters::new(1.0, 8, 0.0);
    let empty: Array1<F> = Array1::zeros(0);
    let no_values: Array1<C> = Array1::zeros(0);
    assert!(matches!(
        grid(&[empty.view()], no_values.view(), &[g], &k, &[false]),
        Err(GfftError::Configuration(_))
    ));

    let x = array![0.5, 1.5];
    let v = array![C::new(1.0, 0.0)];
    assert!(matches!(
        grid(&[x.view()], v.view(), &[g], &k, &[false]),
        Err(GfftError::Configuration(_))
    ));

    let x = array![F::NAN];
    assert!(matches!(
        grid(&[x.view()], v.view(), &[g], &k, &[false]),
        Err(GfftError::Configuration(_))
    ));

    // конечная координата, дробный индекс которой переполняется
    let fine = GridParameters::new(1e-10, 8, 0.0);
    let x = array![1e300];
    assert!(matches!(
        grid(&[x.view()], v.view(), &[fine], &k, &[false]),
        Err(GfftError::Configuration(_))
    ));
}
