/// # Обобщенное быстрое преобразование Фурье
///
/// Преобразование между регулярными сетками и нерегулярно расположенными
/// отсчетами в 1, 2 и 3 измерениях. Нерегулярные данные переносятся на
/// передискретизированную сетку сверткой с ядром Кайзера-Бесселя, после FFT
/// результат делится на Фурье-образ ядра.
///
/// \\[ \hat f(u) = \sum_j f_j e^{-2\pi i u x_j} \\]
pub mod common;
pub mod config;
pub mod dft;
pub mod error;
pub mod fft_maker;
pub mod gridding;
pub mod kernel;
pub mod layout;
pub mod macros;
pub mod mode;
pub mod planner;
pub mod shift;
pub mod traits;
pub mod transform;

pub use common::axis::{Axes, AxisSpec, RegularAxis};
pub use config::GfftConfig;
pub use error::{GfftError, Result};
pub use mode::Mode;
pub use planner::{Direction, PerAxis};
pub use transform::{gfft, gfft_with};

#[cfg(test)]
mod tests;
