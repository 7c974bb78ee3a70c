//! Обобщенное преобразование Фурье: выбор режима и конвейеры RR, IR, RI, II.
//!
//! Все проверки запроса выполняются в `Pipeline::plan` до того, как будет
//! выделен хотя бы один рабочий массив. Дальше конвейер только считает.

use crate::common::axis::{Axes, AxisSpec, RegularAxis};
use crate::common::grid::GridParameters;
use crate::config::{GfftConfig, C, F};
use crate::error::{GfftError, Result};
use crate::fft_maker::NdFftMaker;
use crate::gridding::{degrid, grid, validate_samples};
use crate::kernel::{grid_correction_nd, Kernel};
use crate::layout::AxisLayout;
use crate::mode::{select_mode, Mode};
use crate::planner::{AxisFlags, ShiftPlan};
use crate::shift::{fftshift, ifftshift};
use crate::traits::fft_maker::FftMaker;
use crate::{measure_time, report};
use ndarray::prelude::*;
use ndarray::{AxisDescription, Data, Slice, Zip};

/// Обобщенное преобразование Фурье массива `inp`.
///
/// Вид входа и выхода задается `in_ax` и `out_ax`:
/// пустой `in_ax` - регулярная сетка в регулярную (RR),
/// координаты на входе и шаги на выходе - гриддинг (IR),
/// шаги на входе и координаты на выходе - дегриддинг (RI),
/// координаты с обеих сторон плюс парная форма на одной из них - II.
pub fn gfft<A, S, D>(
    inp: &ArrayBase<S, D>,
    in_ax: &Axes,
    out_ax: &Axes,
    config: &GfftConfig,
) -> Result<ArrayD<C>>
where
    A: Copy + Into<C>,
    S: Data<Elem = A>,
    D: Dimension,
{
    let mut fft_maker = NdFftMaker::new();
    gfft_with(&mut fft_maker, inp, in_ax, out_ax, config)
}

/// То же, что [`gfft`], но с заданной реализацией FFT
pub fn gfft_with<M, A, S, D>(
    fft_maker: &mut M,
    inp: &ArrayBase<S, D>,
    in_ax: &Axes,
    out_ax: &Axes,
    config: &GfftConfig,
) -> Result<ArrayD<C>>
where
    M: FftMaker,
    A: Copy + Into<C>,
    S: Data<Elem = A>,
    D: Dimension,
{
    let pipeline = Pipeline::plan(inp.shape(), in_ax, out_ax, config)?;
    let data: ArrayD<C> = inp.mapv(Into::<C>::into).into_dyn();
    pipeline.execute(fft_maker, data)
}

/// Оси этапов сдвига и преобразования для массива конкретного ранга
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct StageAxes {
    preshift: Vec<usize>,
    fft: Vec<usize>,
    ifft: Vec<usize>,
    postshift: Vec<usize>,
}

impl StageAxes {
    fn resolve(plan: &ShiftPlan, rank: usize) -> Result<Self> {
        Ok(Self {
            preshift: plan.preshift.resolve(rank)?,
            fft: plan.fft_axes.resolve(rank)?,
            ifft: plan.ifft_axes.resolve(rank)?,
            postshift: plan.postshift.resolve(rank)?,
        })
    }
}

/// Проверенный запрос, готовый к выполнению
#[derive(Debug)]
struct Pipeline<'a> {
    mode: Mode,
    stages: StageAxes,
    kernel: Kernel,
    layouts: Vec<AxisLayout>,
    /// координаты входных отсчетов (IR, II)
    samples: Vec<ArrayView1<'a, F>>,
    /// координаты выходных точек (RI, II)
    targets: Vec<ArrayView1<'a, F>>,
    /// коррекция на сетке `regular` (все режимы, кроме RR)
    regular_correction: Option<ArrayD<F>>,
    /// коррекция на сетке `working` (только II)
    working_correction: Option<ArrayD<F>>,
}

impl<'a> Pipeline<'a> {
    fn plan(
        shape: &[usize],
        in_ax: &'a Axes,
        out_ax: &'a Axes,
        config: &GfftConfig,
    ) -> Result<Self> {
        let verbose = config.verbose;
        report!(verbose, "gfft v. {}", env!("CARGO_PKG_VERSION"));

        let kernel = Kernel::new(config.w, config.alpha)?;
        let (mut mode, n) = select_mode(shape.len(), in_ax, out_ax)?;
        report!(verbose, "Requested mode = {mode}");
        report!(verbose, "Number of dimensions = {n}");

        let plan = ShiftPlan::new(
            n,
            &config.ftmachine,
            &config.in_zero_center,
            &config.out_zero_center,
            &config.enforce_hermitian_symmetry,
        )?;
        if !plan.transform_requested() {
            tracing::warn!(
                "no Fourier transform requested along any axis, only the requested \
                 shifts will be applied in regular to regular mode"
            );
            mode = Mode::RR;
        }

        let flags = plan.axes();
        report!(verbose, "Axis#, FFT, IFFT, ZCIN, ZCOUT, HERM");
        for (i, f) in flags.iter().enumerate() {
            report!(
                verbose,
                "{i}, {}, {}, {}, {}, {}",
                f.fft,
                f.ifft,
                f.in_zero_center,
                f.out_zero_center,
                f.hermitian
            );
        }

        let rank = if mode == Mode::RR { shape.len() } else { n };
        let mut pipeline = Self {
            mode,
            stages: StageAxes::resolve(&plan, rank)?,
            kernel,
            layouts: Vec::new(),
            samples: Vec::new(),
            targets: Vec::new(),
            regular_correction: None,
            working_correction: None,
        };

        match mode {
            Mode::RR => return Ok(pipeline),
            Mode::IR => {
                let (Axes::Plain(inputs), Axes::Plain(outputs)) = (in_ax, out_ax) else {
                    return Err(GfftError::config("IR mode requires plain axes on both sides"));
                };
                pipeline.samples = irregular_axes(inputs)?;
                let out_grid = regular_axes(outputs)?;
                pipeline.layouts = layouts(&flags, &out_grid, |f, ax| {
                    AxisLayout::irregular_to_regular(f, ax, kernel.alpha)
                });
            }
            Mode::RI => {
                let (Axes::Plain(inputs), Axes::Plain(outputs)) = (in_ax, out_ax) else {
                    return Err(GfftError::config("RI mode requires plain axes on both sides"));
                };
                let in_grid = regular_axes(inputs)?;
                let counts: Vec<usize> = in_grid.iter().map(|a| a.count).collect();
                if shape != counts.as_slice() {
                    return Err(GfftError::config(format!(
                        "input array shape {shape:?} does not match the input grid {counts:?}"
                    )));
                }
                pipeline.targets = irregular_axes(outputs)?;
                pipeline.layouts = layouts(&flags, &in_grid, |f, ax| {
                    AxisLayout::regular_to_irregular(f, ax, kernel.alpha)
                });
            }
            Mode::II => {
                let aux = match (in_ax, out_ax) {
                    (Axes::Plain(inputs), Axes::Paired { coordinates, grid: out_grid }) => {
                        pipeline.samples = irregular_axes(inputs)?;
                        pipeline.targets = coordinates.iter().map(|c| c.view()).collect();
                        validated(out_grid)?
                    }
                    (Axes::Paired { coordinates, grid: in_grid }, Axes::Plain(outputs)) => {
                        pipeline.samples = coordinates.iter().map(|c| c.view()).collect();
                        pipeline.targets = irregular_axes(outputs)?;
                        validated(in_grid)?
                            .iter()
                            .map(RegularAxis::conjugate)
                            .collect::<Vec<_>>()
                    }
                    _ => {
                        return Err(GfftError::config(
                            "II mode requires exactly one side in paired form",
                        ))
                    }
                };
                pipeline.layouts = layouts(&flags, &aux, |f, ax| {
                    AxisLayout::irregular_to_irregular(f, ax, kernel.alpha)
                });
            }
        }

        let regular = pipeline.grids(|l| l.regular);
        let working = pipeline.grids(|l| l.working);
        if !pipeline.samples.is_empty() {
            let m = shape.iter().product();
            let sample_grids = if mode == Mode::IR { &working } else { &regular };
            validate_samples(&pipeline.samples, m, sample_grids)?;
        }
        if !pipeline.targets.is_empty() {
            let m = pipeline.targets[0].len();
            validate_samples(&pipeline.targets, m, &working)?;
        }

        let spacings = |grids: &[GridParameters]| -> Vec<F> {
            grids.iter().map(|g| g.spacing).collect()
        };
        pipeline.regular_correction =
            Some(grid_correction_nd(&regular, &spacings(&working), &kernel)?);
        if mode == Mode::II {
            pipeline.working_correction =
                Some(grid_correction_nd(&working, &spacings(&regular), &kernel)?);
        }
        for (i, l) in pipeline.layouts.iter().enumerate() {
            tracing::debug!(
                axis = i,
                regular_size = l.regular.size,
                working_size = l.working.size,
                offset = l.offset,
                "axis layout"
            );
        }
        Ok(pipeline)
    }

    fn grids(&self, pick: impl Fn(&AxisLayout) -> GridParameters) -> Vec<GridParameters> {
        self.layouts.iter().map(pick).collect()
    }

    fn hermitian(&self) -> Vec<bool> {
        self.layouts.iter().map(|l| l.flags.hermitian).collect()
    }

    fn execute(&self, fft_maker: &mut impl FftMaker, data: ArrayD<C>) -> Result<ArrayD<C>> {
        match self.mode {
            Mode::RR => Ok(shift_and_transform(fft_maker, data, &self.stages)),
            Mode::IR => {
                let values = Array1::from_iter(data.iter().copied());
                let working = self.grids(|l| l.working);
                let gridded = measure_time!("gridding", {
                    grid(&self.samples, values.view(), &working, &self.kernel, &self.hermitian())
                })?;
                let transformed = shift_and_transform(fft_maker, gridded, &self.stages);
                let mut out = self.crop(&transformed);
                divide(&mut out, self.regular_correction.as_ref());
                Ok(out)
            }
            Mode::RI => {
                let mut scaled = data;
                divide(&mut scaled, self.regular_correction.as_ref());
                let padded = self.pad(&scaled);
                let transformed = shift_and_transform(fft_maker, padded, &self.stages);
                let working = self.grids(|l| l.working);
                let out = measure_time!("degridding", {
                    degrid(&self.targets, &transformed, &working, &self.kernel)
                })?;
                Ok(out.into_dyn())
            }
            Mode::II => {
                let values = Array1::from_iter(data.iter().copied());
                let regular = self.grids(|l| l.regular);
                let mut gridded = measure_time!("gridding", {
                    grid(&self.samples, values.view(), &regular, &self.kernel, &self.hermitian())
                })?;
                divide(&mut gridded, self.regular_correction.as_ref());
                let padded = self.pad(&gridded);
                let mut transformed = shift_and_transform(fft_maker, padded, &self.stages);
                divide(&mut transformed, self.working_correction.as_ref());
                let working = self.grids(|l| l.working);
                let out = measure_time!("degridding", {
                    degrid(&self.targets, &transformed, &working, &self.kernel)
                })?;
                Ok(out.into_dyn())
            }
        }
    }

    /// Вырезает окна `regular` из массива рабочего размера
    fn crop(&self, arr: &ArrayD<C>) -> ArrayD<C> {
        arr.slice_each_axis(|ax: AxisDescription| {
            Slice::from(self.layouts[ax.axis.index()].window())
        })
        .to_owned()
    }

    /// Вставляет массив размера `regular` в нулевой массив рабочего размера
    fn pad(&self, arr: &ArrayD<C>) -> ArrayD<C> {
        let shape: Vec<usize> = self.layouts.iter().map(|l| l.working.size).collect();
        let mut out = ArrayD::<C>::zeros(IxDyn(&shape));
        out.slice_each_axis_mut(|ax: AxisDescription| {
            Slice::from(self.layouts[ax.axis.index()].window())
        })
        .assign(arr);
        out
    }
}

/// Предварительный сдвиг, FFT, IFFT и итоговый сдвиг
fn shift_and_transform(
    fft_maker: &mut impl FftMaker,
    arr: ArrayD<C>,
    stages: &StageAxes,
) -> ArrayD<C> {
    let mut arr = if stages.preshift.is_empty() {
        arr
    } else {
        measure_time!("preshift", { ifftshift(&arr, &stages.preshift) })
    };
    if !stages.fft.is_empty() {
        measure_time!("fft", { fft_maker.fft(&mut arr, &stages.fft) });
    }
    if !stages.ifft.is_empty() {
        measure_time!("ifft", { fft_maker.ifft(&mut arr, &stages.ifft) });
    }
    if stages.postshift.is_empty() {
        arr
    } else {
        measure_time!("postshift", { fftshift(&arr, &stages.postshift) })
    }
}

/// Делит массив на коррекцию той же формы
fn divide(arr: &mut ArrayD<C>, correction: Option<&ArrayD<F>>) {
    if let Some(correction) = correction {
        Zip::from(arr).and(correction).for_each(|v, &c| *v /= c);
    }
}

fn layouts(
    flags: &[AxisFlags],
    axes: &[RegularAxis],
    build: impl Fn(AxisFlags, &RegularAxis) -> AxisLayout,
) -> Vec<AxisLayout> {
    flags.iter().zip(axes).map(|(&f, ax)| build(f, ax)).collect()
}

fn validated(axes: &[RegularAxis]) -> Result<Vec<RegularAxis>> {
    for (i, ax) in axes.iter().enumerate() {
        ax.validate(i)?;
    }
    Ok(axes.to_vec())
}

fn regular_axes(axes: &[AxisSpec]) -> Result<Vec<RegularAxis>> {
    axes.iter()
        .enumerate()
        .map(|(i, spec)| match spec {
            AxisSpec::Regular(ax) => ax.validate(i).map(|_| *ax),
            AxisSpec::Irregular(_) => Err(GfftError::config(format!(
                "axis {i}: expected a regular grid (spacing, count)"
            ))),
        })
        .collect()
}

fn irregular_axes(axes: &[AxisSpec]) -> Result<Vec<ArrayView1<'_, F>>> {
    axes.iter()
        .enumerate()
        .map(|(i, spec)| match spec {
            AxisSpec::Irregular(coords) => Ok(coords.view()),
            AxisSpec::Regular(_) => Err(GfftError::config(format!(
                "axis {i}: expected an array of coordinates"
            ))),
        })
        .collect()
}
