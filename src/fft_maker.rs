use crate::config::{C, F};
use crate::traits::fft_maker::FftMaker;
use ndarray::prelude::*;
use ndrustfft::{ndfft, ndifft, FftHandler};
use std::collections::HashMap;

/// Преобразование Фурье N-мерного массива на основе ndrustfft.
///
/// Обработчики FFT создаются лениво и кешируются по длине оси.
#[derive(Default)]
pub struct NdFftMaker {
    handlers: HashMap<usize, FftHandler<F>>,
}

impl NdFftMaker {
    pub fn new() -> Self {
        Self::default()
    }

    fn handler(&mut self, n: usize) -> &mut FftHandler<F> {
        self.handlers.entry(n).or_insert_with(|| FftHandler::new(n))
    }

    fn transform(&mut self, arr: &mut ArrayD<C>, axes: &[usize], inverse: bool) {
        let mut psi_temp: ArrayD<C> = Array::zeros(arr.raw_dim());
        for &axis in axes {
            let n = arr.len_of(Axis(axis));
            let handler = self.handler(n);
            if inverse {
                ndifft(&*arr, &mut psi_temp, handler, axis);
            } else {
                ndfft(&*arr, &mut psi_temp, handler, axis);
            }
            std::mem::swap(arr, &mut psi_temp);
        }
    }
}

impl FftMaker for NdFftMaker {
    fn fft(&mut self, arr: &mut ArrayD<C>, axes: &[usize]) {
        self.transform(arr, axes, false);
    }

    fn ifft(&mut self, arr: &mut ArrayD<C>, axes: &[usize]) {
        self.transform(arr, axes, true);
    }
}
