use super::axis::RegularAxis;
use crate::config::F;
use ndarray::prelude::*;

/// Параметры регулярной сетки вдоль одной оси
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridParameters {
    pub spacing: F,
    pub size: usize,
    pub origin: F,
}

impl GridParameters {
    pub fn new(spacing: F, size: usize, origin: F) -> Self {
        Self {
            spacing,
            size,
            origin,
        }
    }

    /// Сетка с началом в нуле или с нулем в центральном пикселе.
    ///
    /// Центральный пиксель - тот, что циклический сдвиг на size/2 переводит в индекс 0.
    pub fn centered(spacing: F, size: usize, centered: bool) -> Self {
        let origin = if centered {
            -((size / 2) as F) * spacing
        } else {
            0.0
        };
        Self::new(spacing, size, origin)
    }

    pub fn from_axis(axis: &RegularAxis, centered: bool) -> Self {
        Self::centered(axis.spacing, axis.count, centered)
    }

    /// Передискретизированная рабочая сетка для итоговой сетки `axis`.
    ///
    /// Размер floor(alpha * n), шаг 1 / (d * size), так что одно FFT рабочей
    /// сетки дает сетку с шагом `axis.spacing`.
    pub fn oversampled(axis: &RegularAxis, alpha: F, centered: bool) -> Self {
        let size = oversampled_size(axis.count, alpha);
        Self::centered(1.0 / (axis.spacing * size as F), size, centered)
    }

    /// Координата узла с индексом i
    pub fn point(&self, i: usize) -> F {
        self.origin + i as F * self.spacing
    }

    /// Дробный индекс координаты x
    pub fn fractional_index(&self, x: F) -> F {
        (x - self.origin) / self.spacing
    }

    /// Массив координат узлов
    pub fn grid(&self) -> Array1<F> {
        Array::from_shape_fn(self.size, |i| self.point(i))
    }
}

/// Размер передискретизированной оси, floor(alpha * n)
pub fn oversampled_size(n: usize, alpha: F) -> usize {
    (alpha * n as F).floor() as usize
}

/// Смещение, на которое вырезается (или вставляется) массив длины `inner`
/// в массиве длины `outer` так, чтобы их центральные пиксели совпали.
pub fn centered_offset(outer: usize, inner: usize, centered: bool) -> usize {
    if centered {
        outer / 2 - inner / 2
    } else {
        0
    }
}
