use crate::mode::Mode;
use thiserror::Error;

/// Ошибки обобщенного преобразования Фурье
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GfftError {
    /// Некорректный или противоречивый запрос
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Гриддинг запрошен для неподдерживаемой размерности
    #[error("gridding has been requested for an unsupported number of dimensions: N = {n} in {mode} mode")]
    Dimension { n: usize, mode: Mode },

    /// Вырожденный делитель коррекции сетки
    #[error("numeric error: {0}")]
    Numeric(String),
}

pub type Result<T> = std::result::Result<T, GfftError>;

impl GfftError {
    pub(crate) fn config(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }
}
