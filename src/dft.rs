//! Прямое суммирование ДПФ между произвольными наборами точек.
//!
//! Работает медленно, O(M * K * N), и служит только эталоном для проверки
//! гриддинга. Нормировка не применяется.

use crate::config::{C, F, I, PI};
use crate::error::{GfftError, Result};
use ndarray::prelude::*;
use rayon::prelude::*;

/// out[i] = sum_j in_vals[j] * exp(-2 pi i sum_k in_ax[k][j] * out_ax[k][i])
pub fn dft(
    in_vals: ArrayView1<C>,
    in_ax: &[ArrayView1<F>],
    out_ax: &[ArrayView1<F>],
) -> Result<Array1<C>> {
    direct_sum(in_vals, in_ax, out_ax, -1.0)
}

/// То же с противоположным знаком экспоненты
pub fn idft(
    in_vals: ArrayView1<C>,
    in_ax: &[ArrayView1<F>],
    out_ax: &[ArrayView1<F>],
) -> Result<Array1<C>> {
    direct_sum(in_vals, in_ax, out_ax, 1.0)
}

fn direct_sum(
    in_vals: ArrayView1<C>,
    in_ax: &[ArrayView1<F>],
    out_ax: &[ArrayView1<F>],
    sign: F,
) -> Result<Array1<C>> {
    if in_ax.len() != out_ax.len() || in_ax.is_empty() {
        return Err(GfftError::config(format!(
            "dft: number of input and output dimensions not equal: {} != {}",
            in_ax.len(),
            out_ax.len()
        )));
    }
    let nin = in_vals.len();
    let nout = out_ax[0].len();
    if in_ax.iter().any(|ax| ax.len() != nin) {
        return Err(GfftError::config("dft: input axis length invalid"));
    }
    if out_ax.iter().any(|ax| ax.len() != nout) {
        return Err(GfftError::config("dft: output axis length invalid"));
    }

    let out: Vec<C> = (0..nout)
        .into_par_iter()
        .map(|i| {
            in_vals
                .iter()
                .enumerate()
                .map(|(j, v)| {
                    let psum: F = in_ax
                        .iter()
                        .zip(out_ax.iter())
                        .map(|(a, b)| a[j] * b[i])
                        .sum();
                    v * (I * (sign * 2.0 * PI * psum)).exp()
                })
                .sum::<C>()
        })
        .collect();
    Ok(Array1::from(out))
}
