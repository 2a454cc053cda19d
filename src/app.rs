use std::time::Duration;

use crate::config::SampleConfig;
use crate::derive::{CpuDeriver, Deriver, MemoryDeriver};
use crate::error::RunError;
use crate::system::snapshot::{CpuSnapshot, MemorySnapshot};
use crate::system::source::MetricSource;
use crate::ui::axis::Axis;
use crate::ui::layout::{GraphLayout, MEMORY_READOUT_ROW};
use crate::ui::{Canvas, Readout};

/// Wait between two ticks. Never interrupted.
pub trait Pause {
    fn pause(&mut self, duration: Duration);
}

#[derive(Clone, Copy, Debug, Default)]
pub struct ThreadSleep;

impl Pause for ThreadSleep {
    fn pause(&mut self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

impl<P: Pause + ?Sized> Pause for &mut P {
    fn pause(&mut self, duration: Duration) {
        (**self).pause(duration);
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Init,
    MemoryInit,
    CpuInit,
    Sampling(u32),
    Done,
}

/// Values read and derived during one tick, before anything is drawn.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TickSample {
    pub memory: Option<MemorySnapshot>,
    pub cpu_percent: Option<f64>,
}

/// Drives one run: banner, axis skeletons, then one plotted column per tick.
///
/// Any source failure ends the run on the spot; a tick is only drawn once
/// all of its readings succeeded.
pub struct Sampler<S, C, P> {
    config: SampleConfig,
    layout: GraphLayout,
    source: S,
    canvas: C,
    pause: P,
    phase: Phase,
    total_memory_gb: f64,
    prev_cpu: CpuSnapshot,
}

impl<S: MetricSource, C: Canvas, P: Pause> Sampler<S, C, P> {
    pub fn new(config: SampleConfig, source: S, canvas: C, pause: P) -> Self {
        Sampler {
            layout: GraphLayout::new(config.show_memory(), config.show_cpu()),
            config,
            source,
            canvas,
            pause,
            phase: Phase::Init,
            total_memory_gb: 0.0,
            prev_cpu: CpuSnapshot::default(),
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn layout(&self) -> GraphLayout {
        self.layout
    }

    pub fn run(&mut self) -> Result<(), RunError> {
        tracing::info!(
            samples = self.config.samples(),
            interval_us = self.config.interval_micros(),
            "sampling started"
        );
        while self.step()? != Phase::Done {}
        tracing::info!("sampling finished");
        Ok(())
    }

    /// Advances the state machine by one phase and returns the new phase.
    pub fn step(&mut self) -> Result<Phase, RunError> {
        let next = match self.phase {
            Phase::Init => self.init()?,
            Phase::MemoryInit => {
                self.canvas.write_text("\n")?;
                self.canvas.draw_axis_skeleton(
                    Axis::Memory {
                        total_gb: self.total_memory_gb,
                    },
                    self.config.samples(),
                )?;
                if self.config.show_cpu() {
                    Phase::CpuInit
                } else {
                    Phase::Sampling(0)
                }
            }
            Phase::CpuInit => {
                self.canvas
                    .draw_axis_skeleton(Axis::Cpu, self.config.samples())?;
                // Baseline for the first delta; never plotted.
                self.prev_cpu = self.source.cpu_counters()?;
                self.canvas.write_text("\n")?;
                Phase::Sampling(0)
            }
            Phase::Sampling(index) => {
                let sample = self.read_tick()?;
                self.draw_tick(index, &sample)?;
                self.canvas.flush()?;
                if index + 1 < self.config.samples() {
                    self.pause.pause(self.config.interval());
                    Phase::Sampling(index + 1)
                } else {
                    self.canvas.park_cursor(self.layout.end_row)?;
                    Phase::Done
                }
            }
            Phase::Done => Phase::Done,
        };

        self.canvas.flush()?;
        self.phase = next;
        Ok(next)
    }

    fn init(&mut self) -> Result<Phase, RunError> {
        self.canvas
            .draw_banner(self.config.samples(), self.config.interval_micros())?;

        if !self.config.show_memory() && !self.config.show_cpu() {
            self.canvas.park_cursor(self.layout.end_row)?;
            return Ok(Phase::Done);
        }

        self.total_memory_gb = self.source.total_memory_gb()?;
        Ok(if self.config.show_memory() {
            Phase::MemoryInit
        } else {
            Phase::CpuInit
        })
    }

    fn read_tick(&mut self) -> Result<TickSample, RunError> {
        let mut sample = TickSample::default();

        if self.config.show_memory() {
            let deriver = MemoryDeriver {
                total_gb: self.total_memory_gb,
            };
            let ((), used_gb) = deriver.derive(&(), self.source.free_memory_kb()?);
            sample.memory = Some(MemorySnapshot {
                total_gb: self.total_memory_gb,
                used_gb,
            });
        }

        if self.config.show_cpu() {
            let (next, percent) = CpuDeriver.derive(&self.prev_cpu, self.source.cpu_counters()?);
            sample.cpu_percent = Some(percent);
            self.prev_cpu = next;
        }

        Ok(sample)
    }

    fn draw_tick(&mut self, index: u32, sample: &TickSample) -> Result<(), RunError> {
        let _span = tracing::debug_span!("sampler.tick", index).entered();

        if let Some(memory) = sample.memory {
            self.canvas.print_live_value(
                MEMORY_READOUT_ROW,
                Readout::Memory {
                    used_gb: memory.used_gb,
                },
            )?;
            let cell = self
                .canvas
                .place_memory_sample(memory.total_gb, memory.used_gb, index)?;
            tracing::debug!(used_gb = memory.used_gb, row = cell.row, "memory sample");
        }

        if let Some(percent) = sample.cpu_percent {
            self.canvas
                .print_live_value(self.layout.cpu_readout_row, Readout::Cpu { percent })?;
            let cell =
                self.canvas
                    .place_cpu_sample(percent, index, self.layout.cpu_baseline_row)?;
            tracing::debug!(percent, row = cell.row, "cpu sample");
        }

        Ok(())
    }
}
