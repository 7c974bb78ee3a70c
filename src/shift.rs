use ndarray::prelude::*;
use ndarray::{Data, Slice};

/// Сдвигает нулевую частоту в центр вдоль осей `axes` (циклический сдвиг на n/2)
pub fn fftshift<A, S>(arr: &ArrayBase<S, IxDyn>, axes: &[usize]) -> ArrayD<A>
where
    A: Clone,
    S: Data<Elem = A>,
{
    roll_axes(arr, axes, |n| n / 2)
}

/// Обратный сдвиг к [`fftshift`] (циклический сдвиг на n - n/2)
pub fn ifftshift<A, S>(arr: &ArrayBase<S, IxDyn>, axes: &[usize]) -> ArrayD<A>
where
    A: Clone,
    S: Data<Elem = A>,
{
    roll_axes(arr, axes, |n| n - n / 2)
}

fn roll_axes<A, S>(
    arr: &ArrayBase<S, IxDyn>,
    axes: &[usize],
    shift: impl Fn(usize) -> usize,
) -> ArrayD<A>
where
    A: Clone,
    S: Data<Elem = A>,
{
    let mut out = arr.to_owned();
    for &axis in axes {
        let n = out.len_of(Axis(axis));
        if n == 0 {
            continue;
        }
        out = roll(&out, Axis(axis), shift(n) % n);
    }
    out
}

// out[(k + s) mod n] = arr[k]
fn roll<A: Clone>(arr: &ArrayD<A>, axis: Axis, s: usize) -> ArrayD<A> {
    if s == 0 {
        return arr.clone();
    }
    let n = arr.len_of(axis);
    let mut out = arr.clone();
    out.slice_axis_mut(axis, Slice::from(s..))
        .assign(&arr.slice_axis(axis, Slice::from(..n - s)));
    out.slice_axis_mut(axis, Slice::from(..s))
        .assign(&arr.slice_axis(axis, Slice::from(n - s..)));
    out
}
