use crate::config::F;
use crate::error::{GfftError, Result};
use ndarray::Array1;

/// Регулярная ось: шаг и число узлов
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegularAxis {
    pub spacing: F,
    pub count: usize,
}

impl RegularAxis {
    pub fn new(spacing: F, count: usize) -> Self {
        Self { spacing, count }
    }

    /// Ось сопряженного пространства с тем же числом узлов: шаг 1/(d*n)
    pub fn conjugate(&self) -> Self {
        Self {
            spacing: 1.0 / (self.spacing * self.count as F),
            count: self.count,
        }
    }

    pub fn validate(&self, axis: usize) -> Result<()> {
        if !(self.spacing.is_finite() && self.spacing > 0.0) {
            return Err(GfftError::config(format!(
                "axis {axis}: spacing must be finite and positive, got {}",
                self.spacing
            )));
        }
        if self.count == 0 {
            return Err(GfftError::config(format!(
                "axis {axis}: count must be greater than zero"
            )));
        }
        Ok(())
    }
}

impl From<(F, usize)> for RegularAxis {
    fn from((spacing, count): (F, usize)) -> Self {
        Self::new(spacing, count)
    }
}

/// Описание одной оси: регулярная сетка или набор нерегулярных координат
#[derive(Debug, Clone, PartialEq)]
pub enum AxisSpec {
    Regular(RegularAxis),
    Irregular(Array1<F>),
}

impl AxisSpec {
    pub fn is_regular(&self) -> bool {
        matches!(self, AxisSpec::Regular(_))
    }
}

impl From<RegularAxis> for AxisSpec {
    fn from(axis: RegularAxis) -> Self {
        AxisSpec::Regular(axis)
    }
}

impl From<(F, usize)> for AxisSpec {
    fn from(axis: (F, usize)) -> Self {
        AxisSpec::Regular(axis.into())
    }
}

impl From<Array1<F>> for AxisSpec {
    fn from(coordinates: Array1<F>) -> Self {
        AxisSpec::Irregular(coordinates)
    }
}

impl From<Vec<F>> for AxisSpec {
    fn from(coordinates: Vec<F>) -> Self {
        AxisSpec::Irregular(Array1::from(coordinates))
    }
}

/// Одна сторона запроса (входная или выходная).
///
/// `Paired` используется только в режиме нерегулярная -> нерегулярная сетка:
/// кроме координат он несет описание промежуточной регулярной сетки.
#[derive(Debug, Clone, PartialEq)]
pub enum Axes {
    Plain(Vec<AxisSpec>),
    Paired {
        coordinates: Vec<Array1<F>>,
        grid: Vec<RegularAxis>,
    },
}

impl Default for Axes {
    fn default() -> Self {
        Axes::Plain(Vec::new())
    }
}

impl Axes {
    /// Пустой список осей (режим регулярная -> регулярная)
    pub fn none() -> Self {
        Self::default()
    }

    pub fn regular<A: Into<RegularAxis>>(axes: impl IntoIterator<Item = A>) -> Self {
        Axes::Plain(
            axes.into_iter()
                .map(|a| AxisSpec::Regular(a.into()))
                .collect(),
        )
    }

    pub fn irregular<A: Into<Array1<F>>>(coordinates: impl IntoIterator<Item = A>) -> Self {
        Axes::Plain(
            coordinates
                .into_iter()
                .map(|c| AxisSpec::Irregular(c.into()))
                .collect(),
        )
    }

    pub fn paired<A, R>(
        coordinates: impl IntoIterator<Item = A>,
        grid: impl IntoIterator<Item = R>,
    ) -> Self
    where
        A: Into<Array1<F>>,
        R: Into<RegularAxis>,
    {
        Axes::Paired {
            coordinates: coordinates.into_iter().map(Into::into).collect(),
            grid: grid.into_iter().map(Into::into).collect(),
        }
    }

    pub fn is_paired(&self) -> bool {
        matches!(self, Axes::Paired { .. })
    }

    /// Число осей в простой форме; для парной формы - число координатных осей
    pub fn len(&self) -> usize {
        match self {
            Axes::Plain(axes) => axes.len(),
            Axes::Paired { coordinates, .. } => coordinates.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
