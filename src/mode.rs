use crate::common::axis::{Axes, AxisSpec};
use crate::error::{GfftError, Result};
use std::fmt;

/// Максимальная размерность, для которой поддерживается гриддинг
pub const MAX_GRIDDED_DIM: usize = 3;

/// Режим работы: какие стороны заданы на регулярной сетке
#[derive(PartialEq, Eq, PartialOrd, Ord, Debug, Clone, Copy, Hash)]
pub enum Mode {
    RR, // регулярная -> регулярная (без гриддинга)
    IR, // нерегулярная -> регулярная (гриддинг)
    RI, // регулярная -> нерегулярная (дегриддинг)
    II, // нерегулярная -> нерегулярная (гриддинг и дегриддинг)
}

impl Mode {
    pub fn as_str(&self) -> &str {
        match self {
            Mode::RR => "regular to regular (no gridding)",
            Mode::IR => "irregular to regular (gridding)",
            Mode::RI => "regular to irregular (de-gridding)",
            Mode::II => "irregular to irregular (gridding and degridding)",
        }
    }

    pub fn is_gridded(&self) -> bool {
        *self != Mode::RR
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Определяет режим и размерность N по описаниям осей.
///
/// `rank` - размерность входного массива, используется только в режиме RR.
pub fn select_mode(rank: usize, in_ax: &Axes, out_ax: &Axes) -> Result<(Mode, usize)> {
    let (mode, n) = classify(rank, in_ax, out_ax)?;

    if n == 0 {
        return Err(GfftError::config(
            "unable to determine the number of dimensions",
        ));
    }
    if n > MAX_GRIDDED_DIM && mode.is_gridded() {
        return Err(GfftError::Dimension { n, mode });
    }
    Ok((mode, n))
}

fn classify(rank: usize, in_ax: &Axes, out_ax: &Axes) -> Result<(Mode, usize)> {
    match (in_ax, out_ax) {
        (Axes::Paired { .. }, Axes::Paired { .. }) => Err(GfftError::config(
            "in_ax and out_ax cannot both be given in paired form",
        )),
        (Axes::Plain(axes), _) if axes.is_empty() => {
            if !out_ax.is_empty() {
                tracing::warn!(
                    "in_ax is empty, indicating regular to regular transformation is \
                     requested, but out_ax is not empty. Ignoring out_ax and proceeding \
                     with regular to regular mode."
                );
            }
            Ok((Mode::RR, rank))
        }
        (Axes::Paired { coordinates, grid }, Axes::Plain(plain))
        | (Axes::Plain(plain), Axes::Paired { coordinates, grid }) => {
            let n = plain.len();
            if coordinates.len() != n || grid.len() != n {
                return Err(GfftError::config(format!(
                    "paired axes must hold {n} coordinate arrays and {n} grid specs, \
                     got {} and {}",
                    coordinates.len(),
                    grid.len()
                )));
            }
            if plain.iter().any(AxisSpec::is_regular) {
                return Err(GfftError::config(
                    "irregular to irregular mode requires coordinate arrays on the plain side",
                ));
            }
            Ok((Mode::II, n))
        }
        (Axes::Plain(inputs), Axes::Plain(outputs)) => {
            let n = inputs.len();
            if outputs.len() != n {
                return Err(GfftError::config(format!(
                    "len(in_ax) must equal len(out_ax): {n} != {}",
                    outputs.len()
                )));
            }
            let mode = if inputs[0].is_regular() {
                Mode::RI
            } else {
                Mode::IR
            };
            let regular_in = mode == Mode::RI;
            if inputs.iter().any(|a| a.is_regular() != regular_in)
                || outputs.iter().any(|a| a.is_regular() == regular_in)
            {
                return Err(GfftError::config(format!(
                    "{mode} mode requires every input axis to be {} and every output axis to be {}",
                    if regular_in { "regular" } else { "irregular" },
                    if regular_in { "irregular" } else { "regular" },
                )));
            }
            Ok((mode, n))
        }
    }
}
