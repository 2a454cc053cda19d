use crate::config::SampleConfig;
use crate::error::RunError;
use crate::format::cores_readout;
use crate::system::source::MetricSource;
use crate::ui::Canvas;

/// Prints the non-graphical tail of a run: core count, maximum frequency and
/// the core diagram when cores are shown, then a few blank lines.
pub fn report<S, C>(config: &SampleConfig, source: &S, canvas: &mut C) -> Result<(), RunError>
where
    S: MetricSource,
    C: Canvas,
{
    if config.show_cores() {
        let cores = source.core_count()?;
        let max_ghz = source.max_cpu_frequency_ghz()?;
        tracing::info!(cores, max_ghz, "core summary");

        canvas.write_text(&cores_readout(cores, max_ghz))?;
        canvas.write_text("\n\n")?;
        canvas.draw_core_diagram(cores)?;
    }
    canvas.write_text("\n\n\n")?;
    canvas.flush()?;
    Ok(())
}
