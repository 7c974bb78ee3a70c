//! Геометрия осей для режимов с гриддингом.
//!
//! Для каждой оси один раз вычисляются пара сопряженных сеток и смещение,
//! на котором меньший массив вырезается из большего (или вставляется в него).
//! Все этапы конвейера берут эти значения отсюда.
//!
//! | режим | `regular`                         | `working`                          |
//! |-------|-----------------------------------|------------------------------------|
//! | IR    | итоговая сетка, ZCOUT             | рабочая сетка гриддинга, ZCIN      |
//! | RI    | входная сетка, ZCIN               | рабочая сетка дегриддинга, ZCOUT   |
//! | II    | сетка гриддинга, ZCIN             | дважды передискр. сетка, ZCOUT     |

use crate::common::axis::RegularAxis;
use crate::common::grid::{centered_offset, oversampled_size, GridParameters};
use crate::config::F;
use crate::planner::AxisFlags;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisLayout {
    pub flags: AxisFlags,
    /// сетка меньшего массива
    pub regular: GridParameters,
    /// сопряженная сетка, размер которой задает размер массива для FFT
    pub working: GridParameters,
    /// положение `regular` внутри массива размера `working.size`
    pub offset: usize,
}

impl AxisLayout {
    /// Нерегулярный вход, регулярный выход `out_axis`
    pub fn irregular_to_regular(flags: AxisFlags, out_axis: &RegularAxis, alpha: F) -> Self {
        let regular = GridParameters::from_axis(out_axis, flags.out_zero_center);
        let working = GridParameters::oversampled(out_axis, alpha, flags.in_zero_center);
        Self {
            flags,
            regular,
            working,
            offset: centered_offset(working.size, regular.size, flags.out_zero_center),
        }
    }

    /// Регулярный вход `in_axis`, нерегулярный выход
    pub fn regular_to_irregular(flags: AxisFlags, in_axis: &RegularAxis, alpha: F) -> Self {
        let regular = GridParameters::from_axis(in_axis, flags.in_zero_center);
        let working = GridParameters::oversampled(in_axis, alpha, flags.out_zero_center);
        Self {
            flags,
            regular,
            working,
            offset: centered_offset(working.size, regular.size, flags.in_zero_center),
        }
    }

    /// Нерегулярный вход и выход; `aux` - регулярная сетка выходного пространства.
    ///
    /// Вход переносится гриддингом на сетку размера floor(alpha * n), которая затем
    /// дополняется нулями до floor(alpha * floor(alpha * n)).
    pub fn irregular_to_irregular(flags: AxisFlags, aux: &RegularAxis, alpha: F) -> Self {
        let regular = GridParameters::oversampled(aux, alpha, flags.in_zero_center);
        let padded = oversampled_size(regular.size, alpha);
        let working = GridParameters::centered(
            1.0 / (regular.spacing * padded as F),
            padded,
            flags.out_zero_center,
        );
        Self {
            flags,
            regular,
            working,
            offset: centered_offset(working.size, regular.size, flags.in_zero_center),
        }
    }

    /// Диапазон индексов `regular` внутри массива размера `working.size`
    pub fn window(&self) -> std::ops::Range<usize> {
        self.offset..self.offset + self.regular.size
    }
}
