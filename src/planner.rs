//! Разворачивание настроек "одно значение или по значению на ось" в
//! фиксированные векторы длины N.
//!
//! Скалярное `true` (или скалярное направление) превращается в `AxisSet::All`,
//! а список, отмечающий все оси, остается `AxisSet::Only` со всеми индексами.
//! Для операций над всем массивом это разные вещи: `All` относится ко всем осям
//! массива, какой бы ни была его размерность.

use crate::error::{GfftError, Result};
use std::fmt;

/// Направление преобразования вдоль оси
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Fft,
    Ifft,
    None,
}

impl Direction {
    pub fn as_str(&self) -> &str {
        match self {
            Direction::Fft => "fft",
            Direction::Ifft => "ifft",
            Direction::None => "none",
        }
    }
}

impl std::str::FromStr for Direction {
    type Err = GfftError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "fft" => Ok(Direction::Fft),
            "ifft" => Ok(Direction::Ifft),
            "none" => Ok(Direction::None),
            other => Err(GfftError::config(format!(
                "unknown ftmachine '{other}', expected 'fft', 'ifft' or 'none'"
            ))),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Значение для всех осей сразу или список по осям
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PerAxis<T> {
    Scalar(T),
    Axes(Vec<T>),
}

impl From<bool> for PerAxis<bool> {
    fn from(value: bool) -> Self {
        PerAxis::Scalar(value)
    }
}

impl From<Direction> for PerAxis<Direction> {
    fn from(value: Direction) -> Self {
        PerAxis::Scalar(value)
    }
}

impl<T> From<Vec<T>> for PerAxis<T> {
    fn from(values: Vec<T>) -> Self {
        PerAxis::Axes(values)
    }
}

impl<T, const N: usize> From<[T; N]> for PerAxis<T> {
    fn from(values: [T; N]) -> Self {
        PerAxis::Axes(values.into())
    }
}

impl<T> PerAxis<T> {
    fn check_len(&self, n: usize, name: &str) -> Result<()> {
        match self {
            PerAxis::Axes(values) if values.len() != n => Err(GfftError::config(format!(
                "{name} is a list with invalid length: expected {n}, got {}",
                values.len()
            ))),
            _ => Ok(()),
        }
    }
}

/// Набор осей, к которым применяется операция
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AxisSet {
    /// все оси массива
    All,
    /// только перечисленные оси (возможно, ни одной)
    Only(Vec<usize>),
}

impl AxisSet {
    pub fn none() -> Self {
        AxisSet::Only(Vec::new())
    }

    pub fn contains(&self, axis: usize) -> bool {
        match self {
            AxisSet::All => true,
            AxisSet::Only(axes) => axes.contains(&axis),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, AxisSet::Only(axes) if axes.is_empty())
    }

    /// Конкретные индексы осей для массива ранга `rank`
    pub fn resolve(&self, rank: usize) -> Result<Vec<usize>> {
        match self {
            AxisSet::All => Ok((0..rank).collect()),
            AxisSet::Only(axes) => match axes.iter().find(|&&a| a >= rank) {
                Some(a) => Err(GfftError::config(format!(
                    "axis {a} is out of range for an array of rank {rank}"
                ))),
                None => Ok(axes.clone()),
            },
        }
    }

    fn from_flags(flags: &PerAxis<bool>) -> Self {
        match flags {
            PerAxis::Scalar(true) => AxisSet::All,
            PerAxis::Scalar(false) => AxisSet::none(),
            PerAxis::Axes(values) => AxisSet::Only(
                values
                    .iter()
                    .enumerate()
                    .filter_map(|(i, &v)| v.then_some(i))
                    .collect(),
            ),
        }
    }

    fn from_direction(ftmachine: &PerAxis<Direction>, wanted: Direction) -> Self {
        match ftmachine {
            PerAxis::Scalar(d) if *d == wanted => AxisSet::All,
            PerAxis::Scalar(_) => AxisSet::none(),
            PerAxis::Axes(values) => AxisSet::Only(
                values
                    .iter()
                    .enumerate()
                    .filter_map(|(i, d)| (*d == wanted).then_some(i))
                    .collect(),
            ),
        }
    }
}

/// Флаги одной оси после разворачивания настроек
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AxisFlags {
    pub fft: bool,
    pub ifft: bool,
    pub in_zero_center: bool,
    pub out_zero_center: bool,
    pub hermitian: bool,
}

/// Результат планирования сдвигов и направлений для N осей
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShiftPlan {
    pub n: usize,
    pub fft_axes: AxisSet,
    pub ifft_axes: AxisSet,
    pub preshift: AxisSet,
    pub postshift: AxisSet,
    pub hermitian: Vec<bool>,
}

impl ShiftPlan {
    pub fn new(
        n: usize,
        ftmachine: &PerAxis<Direction>,
        in_zero_center: &PerAxis<bool>,
        out_zero_center: &PerAxis<bool>,
        hermitian: &PerAxis<bool>,
    ) -> Result<Self> {
        ftmachine.check_len(n, "ftmachine")?;
        in_zero_center.check_len(n, "in_zero_center")?;
        out_zero_center.check_len(n, "out_zero_center")?;
        hermitian.check_len(n, "enforce_hermitian_symmetry")?;

        let hermitian = match hermitian {
            PerAxis::Scalar(h) => vec![*h; n],
            PerAxis::Axes(values) => values.clone(),
        };

        Ok(Self {
            n,
            fft_axes: AxisSet::from_direction(ftmachine, Direction::Fft),
            ifft_axes: AxisSet::from_direction(ftmachine, Direction::Ifft),
            preshift: AxisSet::from_flags(in_zero_center),
            postshift: AxisSet::from_flags(out_zero_center),
            hermitian,
        })
    }

    /// Запрошено ли хоть одно преобразование Фурье
    pub fn transform_requested(&self) -> bool {
        !(self.fft_axes.is_empty() && self.ifft_axes.is_empty())
    }

    pub fn axis(&self, i: usize) -> AxisFlags {
        AxisFlags {
            fft: self.fft_axes.contains(i),
            ifft: self.ifft_axes.contains(i),
            in_zero_center: self.preshift.contains(i),
            out_zero_center: self.postshift.contains(i),
            hermitian: self.hermitian.get(i).copied().unwrap_or(false),
        }
    }

    /// Флаги всех N осей, вычисленные один раз
    pub fn axes(&self) -> Vec<AxisFlags> {
        (0..self.n).map(|i| self.axis(i)).collect()
    }
}
