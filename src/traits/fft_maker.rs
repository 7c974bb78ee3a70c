use crate::config::C;
use ndarray::ArrayD;

/// Трейт для дискретного преобразования Фурье вдоль выбранных осей.
///
/// Ядро преобразования пользуется только этим интерфейсом, так что реализацию
/// можно подменить (например, многопоточной). Вызов синхронный, форма массива
/// не меняется.
pub trait FftMaker {
    /// прямое преобразование фурье комплексного массива вдоль осей `axes`
    fn fft(&mut self, arr: &mut ArrayD<C>, axes: &[usize]);

    /// обратное преобразование фурье вдоль осей `axes`, нормировка 1/n на каждую ось
    fn ifft(&mut self, arr: &mut ArrayD<C>, axes: &[usize]);
}
