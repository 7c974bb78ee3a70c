/// Макрос для замера времени этапа.
/// Результат выполнения блока возвращается, время уходит в tracing на уровне debug.
#[macro_export]
macro_rules! measure_time {
    ($label:expr, $code:block) => {{
        let start = std::time::Instant::now();
        let result = $code;
        let duration = start.elapsed().as_secs_f64();
        tracing::debug!(stage = $label, seconds = duration, "{}: {:.3e}", $label, duration);
        result
    }};
}

/// Макрос для диагностического вывода.
/// При verbose = true сообщение идет на уровне info, иначе debug.
#[macro_export]
macro_rules! report {
    ($verbose:expr, $($arg:tt)*) => {{
        if $verbose {
            tracing::info!($($arg)*);
        } else {
            tracing::debug!($($arg)*);
        }
    }};
}
