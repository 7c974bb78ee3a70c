//! Ядро свертки Кайзера-Бесселя и коррекция сетки.
//!
//! Ядро задано в единицах ячеек рабочей сетки, полная ширина L = 2w:
//!
//! C(d) = I0(beta * sqrt(1 - (d/w)^2)) / L,  |d| <= w
//!
//! Его непрерывный Фурье-образ (f - в циклах на ячейку):
//!
//! c(f) = sin(z) / z,  z^2 = (pi L f)^2 - beta^2
//!
//! Оба выражения нормированы на c(0) = sinh(beta) / beta.

use crate::common::grid::GridParameters;
use crate::config::{F, MIN_CORRECTION, PI};
use crate::error::{GfftError, Result};
use ndarray::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Kernel {
    /// полуширина носителя в ячейках
    pub w: usize,
    pub alpha: F,
    pub beta: F,
    // L * c(0), общий нормировочный множитель ядра
    norm: F,
}

impl Kernel {
    pub fn new(w: usize, alpha: F) -> Result<Self> {
        if w == 0 {
            return Err(GfftError::config("W must be a positive integer"));
        }
        if !(alpha.is_finite() && alpha >= 1.0) {
            return Err(GfftError::config(format!(
                "alpha must be finite and >= 1, got {alpha}"
            )));
        }
        let width = 2.0 * w as F;
        let beta = PI * ((width / alpha).powi(2) * (alpha - 0.5).powi(2) - 0.8).sqrt();
        let norm = width * beta.sinh() / beta;
        Ok(Self {
            w,
            alpha,
            beta,
            norm,
        })
    }

    /// Полная ширина ядра в ячейках
    pub fn width(&self) -> F {
        2.0 * self.w as F
    }

    /// Значение ядра на расстоянии d ячеек от центра
    pub fn value(&self, d: F) -> F {
        let r = d / self.w as F;
        if r.abs() > 1.0 {
            return 0.0;
        }
        bessel_i0(self.beta * (1.0 - r * r).sqrt()) / self.norm
    }

    /// Фурье-образ ядра на частоте f (циклов на ячейку), c(0) = 1
    pub fn fourier(&self, f: F) -> F {
        let z2 = (PI * self.width() * f).powi(2) - self.beta * self.beta;
        let raw = if z2 > 0.0 {
            let z = z2.sqrt();
            z.sin() / z
        } else if z2 < 0.0 {
            let z = (-z2).sqrt();
            z.sinh() / z
        } else {
            1.0
        };
        raw * self.beta / self.beta.sinh()
    }
}

/// Делитель коррекции сетки вдоль одной оси.
///
/// `grid` - сетка, на которой лежит результат, `working_spacing` - шаг
/// сопряженной сетки, на которой выполнялась свертка. Частота f = x * du
/// приводится к [-0.5, 0.5): именно ее реализует периодическая рабочая сетка.
pub fn grid_correction(
    grid: &GridParameters,
    working_spacing: F,
    kernel: &Kernel,
) -> Result<Array1<F>> {
    let corr = Array::from_shape_fn(grid.size, |i| {
        let f = grid.point(i) * working_spacing;
        kernel.fourier(f - f.round())
    });
    match corr.iter().position(|&c| !(c > MIN_CORRECTION)) {
        Some(i) => Err(GfftError::Numeric(format!(
            "degenerate grid correction {} at pixel {i}",
            corr[i]
        ))),
        None => Ok(corr),
    }
}

/// N-мерная коррекция: внешнее произведение одномерных коррекций
pub fn grid_correction_nd(
    grids: &[GridParameters],
    working_spacings: &[F],
    kernel: &Kernel,
) -> Result<ArrayD<F>> {
    let per_axis = grids
        .iter()
        .zip(working_spacings)
        .map(|(grid, &du)| grid_correction(grid, du, kernel))
        .collect::<Result<Vec<_>>>()?;
    Ok(outer_product(&per_axis))
}

/// Внешнее произведение одномерных массивов
pub fn outer_product(per_axis: &[Array1<F>]) -> ArrayD<F> {
    let shape: Vec<usize> = per_axis.iter().map(|a| a.len()).collect();
    Array::from_shape_fn(IxDyn(&shape), |idx| {
        per_axis
            .iter()
            .enumerate()
            .map(|(axis, a)| a[idx[axis]])
            .product()
    })
}

/// Модифицированная функция Бесселя первого рода нулевого порядка (ряд)
pub fn bessel_i0(x: F) -> F {
    let mut sum = 1.0;
    let mut term = 1.0;
    let x_sq = x * x / 4.0;
    for k in 1..500 {
        term *= x_sq / (k as F * k as F);
        sum += term;
        if term < 1e-17 * sum {
            break;
        }
    }
    sum
}
