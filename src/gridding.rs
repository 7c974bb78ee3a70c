//! Гриддинг и дегриддинг: перенос нерегулярных отсчетов на регулярную
//! рабочую сетку сверткой с ядром и обратная интерполяция.
//!
//! Граничная политика - циклическая: индексы ячеек берутся по модулю размера
//! сетки, поэтому часть носителя ядра, вышедшая за сетку, заходит с другой
//! стороны. Это та же периодичность, которую подразумевает ДПФ рабочей сетки.

use crate::common::grid::GridParameters;
use crate::config::{C, F};
use crate::error::{GfftError, Result};
use crate::kernel::Kernel;
use itertools::Itertools;
use ndarray::prelude::*;

/// Разносит M отсчетов `values` с координатами `coordinates[axis][j]` на сетку
/// `grids`. Для осей с `hermitian[axis] = true` каждый отсчет дополнительно
/// кладется в точку с противоположной координатой с сопряженным значением.
pub fn grid(
    coordinates: &[ArrayView1<F>],
    values: ArrayView1<C>,
    grids: &[GridParameters],
    kernel: &Kernel,
    hermitian: &[bool],
) -> Result<ArrayD<C>> {
    validate_samples(coordinates, values.len(), grids)?;
    if hermitian.len() != grids.len() {
        return Err(GfftError::config(format!(
            "hermitian flags given for {} axes, grid has {}",
            hermitian.len(),
            grids.len()
        )));
    }

    let shape: Vec<usize> = grids.iter().map(|g| g.size).collect();
    let mut out = ArrayD::<C>::zeros(IxDyn(&shape));
    let mirror = hermitian.iter().any(|&h| h);
    let mut point = vec![0.0; grids.len()];

    for (j, value) in values.iter().enumerate() {
        for (axis, coords) in coordinates.iter().enumerate() {
            point[axis] = coords[j];
        }
        scatter(&mut out, &point, *value, grids, kernel);

        if mirror {
            for (x, &h) in point.iter_mut().zip(hermitian) {
                if h {
                    *x = -*x;
                }
            }
            scatter(&mut out, &point, value.conj(), grids, kernel);
        }
    }
    Ok(out)
}

/// Собирает значения сетки `grid_values` в M точках `coordinates`
pub fn degrid(
    coordinates: &[ArrayView1<F>],
    grid_values: &ArrayD<C>,
    grids: &[GridParameters],
    kernel: &Kernel,
) -> Result<Array1<C>> {
    let m = coordinates.first().map_or(0, |c| c.len());
    validate_samples(coordinates, m, grids)?;
    let shape: Vec<usize> = grids.iter().map(|g| g.size).collect();
    if grid_values.shape() != shape.as_slice() {
        return Err(GfftError::config(format!(
            "grid shape {:?} does not match grid parameters {:?}",
            grid_values.shape(),
            shape
        )));
    }

    let mut point = vec![0.0; grids.len()];
    let out = (0..m)
        .map(|j| {
            for (axis, coords) in coordinates.iter().enumerate() {
                point[axis] = coords[j];
            }
            stencils(&point, grids, kernel)
                .iter()
                .map(|s| s.iter())
                .multi_cartesian_product()
                .map(|cell| {
                    let (index, weight) = cell_index(&cell);
                    grid_values[IxDyn(&index)] * weight
                })
                .sum::<C>()
        })
        .collect::<Array1<C>>();
    Ok(out)
}

fn scatter(
    out: &mut ArrayD<C>,
    point: &[F],
    value: C,
    grids: &[GridParameters],
    kernel: &Kernel,
) {
    stencils(point, grids, kernel)
        .iter()
        .map(|s| s.iter())
        .multi_cartesian_product()
        .for_each(|cell| {
            let (index, weight) = cell_index(&cell);
            out[IxDyn(&index)] += value * weight;
        });
}

/// Ячейки ядра вдоль каждой оси: (индекс по модулю размера, вес)
fn stencils(point: &[F], grids: &[GridParameters], kernel: &Kernel) -> Vec<Vec<(usize, F)>> {
    point
        .iter()
        .zip(grids)
        .map(|(&x, g)| axis_stencil(x, g, kernel))
        .collect()
}

pub(crate) fn axis_stencil(x: F, grid: &GridParameters, kernel: &Kernel) -> Vec<(usize, F)> {
    // сетка периодична, поэтому дробный индекс сводится в [0, size) до округления
    let t = grid.fractional_index(x).rem_euclid(grid.size as F);
    let nearest = t.round() as i64;
    let w = kernel.w as i64;
    let size = grid.size as i64;
    (-w..=w)
        .filter_map(|offset| {
            let m = nearest + offset;
            let weight = kernel.value(m as F - t);
            (weight != 0.0).then(|| (m.rem_euclid(size) as usize, weight))
        })
        .collect()
}

fn cell_index(cell: &[&(usize, F)]) -> (Vec<usize>, F) {
    let index = cell.iter().map(|(i, _)| *i).collect();
    let weight = cell.iter().map(|(_, w)| *w).product();
    (index, weight)
}

pub(crate) fn validate_samples(
    coordinates: &[ArrayView1<F>],
    m: usize,
    grids: &[GridParameters],
) -> Result<()> {
    if coordinates.len() != grids.len() {
        return Err(GfftError::config(format!(
            "{} coordinate axes given for a {}-D grid",
            coordinates.len(),
            grids.len()
        )));
    }
    if m == 0 {
        return Err(GfftError::config("sample set is empty"));
    }
    for (axis, coords) in coordinates.iter().enumerate() {
        if coords.len() != m {
            return Err(GfftError::config(format!(
                "axis {axis}: {} coordinates for {m} samples",
                coords.len()
            )));
        }
        if coords.iter().any(|x| !x.is_finite()) {
            return Err(GfftError::config(format!(
                "axis {axis}: coordinates must be finite"
            )));
        }
    }
    if grids.iter().any(|g| g.size == 0) {
        return Err(GfftError::config("working grid has zero size"));
    }
    for (axis, (coords, g)) in coordinates.iter().zip(grids).enumerate() {
        if coords.iter().any(|&x| !g.fractional_index(x).is_finite()) {
            return Err(GfftError::config(format!(
                "axis {axis}: coordinate too large for grid spacing {}",
                g.spacing
            )));
        }
    }
    Ok(())
}
