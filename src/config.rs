use crate::planner::{Direction, PerAxis};
use num_complex::Complex;

// тип данных для координат и отсчетов
pub type F = f64;

// комплексный тип данных, согласованный с F
pub type C = Complex<F>;

// константы
pub const PI: F = std::f64::consts::PI;
pub const I: C = Complex::I;

/// Полуширина ядра свертки по умолчанию (в ячейках рабочей сетки)
pub const DEFAULT_W: usize = 6;

/// Коэффициент передискретизации рабочей сетки по умолчанию
pub const DEFAULT_ALPHA: F = 1.5;

/// Минимально допустимое значение делителя коррекции сетки
pub const MIN_CORRECTION: F = 1e-12;

/// Параметры преобразования, общие для всех режимов.
///
/// Каждое поле вида `PerAxis` задается либо одним значением для всех осей,
/// либо списком длины N.
#[derive(Debug, Clone, PartialEq)]
pub struct GfftConfig {
    /// направление преобразования: fft, ifft или none
    pub ftmachine: PerAxis<Direction>,
    /// ноль входного массива находится в центральном пикселе
    pub in_zero_center: PerAxis<bool>,
    /// ноль выходного массива должен оказаться в центральном пикселе
    pub out_zero_center: PerAxis<bool>,
    /// достраивать эрмитово сопряженные отсчеты при гриддинге
    pub enforce_hermitian_symmetry: PerAxis<bool>,
    /// полуширина ядра свертки
    pub w: usize,
    /// коэффициент передискретизации
    pub alpha: F,
    /// подробный отчет через tracing (на результат не влияет)
    pub verbose: bool,
}

impl Default for GfftConfig {
    fn default() -> Self {
        Self {
            ftmachine: PerAxis::Scalar(Direction::Fft),
            in_zero_center: PerAxis::Scalar(true),
            out_zero_center: PerAxis::Scalar(true),
            enforce_hermitian_symmetry: PerAxis::Scalar(false),
            w: DEFAULT_W,
            alpha: DEFAULT_ALPHA,
            verbose: false,
        }
    }
}

impl GfftConfig {
    #[must_use]
    pub fn with_ftmachine(mut self, ftmachine: impl Into<PerAxis<Direction>>) -> Self {
        self.ftmachine = ftmachine.into();
        self
    }

    #[must_use]
    pub fn with_in_zero_center(mut self, in_zero_center: impl Into<PerAxis<bool>>) -> Self {
        self.in_zero_center = in_zero_center.into();
        self
    }

    #[must_use]
    pub fn with_out_zero_center(mut self, out_zero_center: impl Into<PerAxis<bool>>) -> Self {
        self.out_zero_center = out_zero_center.into();
        self
    }

    #[must_use]
    pub fn with_hermitian(mut self, hermitian: impl Into<PerAxis<bool>>) -> Self {
        self.enforce_hermitian_symmetry = hermitian.into();
        self
    }

    #[must_use]
    pub fn with_kernel(mut self, w: usize, alpha: F) -> Self {
        self.w = w;
        self.alpha = alpha;
        self
    }

    #[must_use]
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }
}
