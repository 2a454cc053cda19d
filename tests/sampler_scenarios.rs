mod common;

use std::time::Duration;

use common::{GB_IN_KB, RecordedPauses, ScriptedSource};
use insta::assert_snapshot;
use sysplot::app::{Phase, Sampler};
use sysplot::config::{SampleConfig, Tracks};
use sysplot::error::{RunError, SourceError};
use sysplot::summary;
use sysplot::ui::grid::GridCanvas;
use sysplot::ui::layout::Cell;

fn tracks(memory: bool, cpu: bool, cores: bool) -> Tracks {
    Tracks { memory, cpu, cores }
}

fn placements(canvas: &GridCanvas) -> String {
    canvas
        .placements()
        .iter()
        .map(|p| format!("{},{} {}", p.cell.row, p.cell.col, p.glyph))
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn cpu_half_idle_plots_fifty_percent() {
    let config = SampleConfig::new(1, 1, tracks(false, true, false)).unwrap();
    let source = ScriptedSource::new(16.0).with_cpu(&[(100, 50), (200, 100)]);
    let mut canvas = GridCanvas::new();

    Sampler::new(config, &source, &mut canvas, RecordedPauses::default())
        .run()
        .unwrap();

    assert_eq!(canvas.row_text(4), "> CPU  50.00 %");
    // baseline read is not plotted
    assert_eq!(source.cpu_reads.get(), 2);
    assert_eq!(canvas.placements().len(), 1);
    assert_eq!(canvas.placements()[0].cell, Cell { row: 9, col: 9 });
    assert_eq!(canvas.glyph_at(Cell { row: 9, col: 9 }), Some('$'));
}

#[test]
fn half_free_memory_plots_eight_of_sixteen() {
    let config = SampleConfig::new(1, 1, tracks(true, false, false)).unwrap();
    let source = ScriptedSource::new(16.0).with_free_kb(&[8 * GB_IN_KB]);
    let mut canvas = GridCanvas::new();

    Sampler::new(config, &source, &mut canvas, RecordedPauses::default())
        .run()
        .unwrap();

    assert_eq!(canvas.row_text(4), "> Memory  8.00 GB");
    assert_eq!(canvas.row_text(6), " 16 GB |");
    assert_eq!(canvas.glyph_at(Cell { row: 11, col: 9 }), Some('#'));
    assert_eq!(source.cpu_reads.get(), 0);
    assert_eq!(canvas.cursor().row, 21);
}

#[test]
fn stacked_run_places_one_column_per_tick() {
    let config = SampleConfig::new(3, 100, Tracks::ALL).unwrap();
    let source = ScriptedSource::new(16.0)
        .with_free_kb(&[16 * GB_IN_KB, 8 * GB_IN_KB, 0])
        .with_cpu(&[(0, 0), (100, 100), (200, 150), (300, 150)]);
    let mut canvas = GridCanvas::new();
    let mut pauses = RecordedPauses::default();

    Sampler::new(config, &source, &mut canvas, &mut pauses)
        .run()
        .unwrap();

    assert_snapshot!(placements(&canvas), @r"
    17,9 #
    31,9 $
    11,10 #
    26,10 $
    5,11 #
    21,11 $
    ");
    assert_eq!(canvas.row_text(4), "> Memory  16.00 GB");
    assert_eq!(canvas.row_text(20), "> CPU  100.00 %");
    assert_eq!(canvas.row_text(32), "   0%  ____");
    assert_eq!(canvas.cursor().row, 36);
    assert_eq!(pauses.0, vec![Duration::from_micros(100); 2]);
}

#[test]
fn failing_read_ends_the_run_without_a_partial_tick() {
    let config = SampleConfig::new(3, 100, Tracks::ALL).unwrap();
    let source = ScriptedSource::new(16.0)
        .with_free_kb(&[GB_IN_KB, GB_IN_KB, GB_IN_KB])
        .with_cpu(&[(0, 0), (10, 5)]);
    let mut canvas = GridCanvas::new();
    let mut pauses = RecordedPauses::default();
    let mut sampler = Sampler::new(config, &source, &mut canvas, &mut pauses);

    let err = sampler.run().unwrap_err();
    assert!(matches!(err, RunError::Source(SourceError::Malformed { .. })));
    assert_eq!(sampler.phase(), Phase::Sampling(1));
    drop(sampler);

    // tick 0 drew both tracks, tick 1 drew nothing
    assert_eq!(canvas.placements().len(), 2);
    assert!(canvas.placements().iter().all(|p| p.cell.col == 9));
    assert_eq!(pauses.0.len(), 1);
}

#[test]
fn failing_baseline_read_stops_before_sampling() {
    let config = SampleConfig::new(2, 1, tracks(false, true, false)).unwrap();
    let source = ScriptedSource::new(16.0);
    let mut canvas = GridCanvas::new();

    let err = Sampler::new(config, &source, &mut canvas, RecordedPauses::default())
        .run()
        .unwrap_err();

    assert!(matches!(err, RunError::Source(_)));
    assert!(canvas.placements().is_empty());
    // skeleton was already on screen
    assert_eq!(canvas.row_text(5), " 100%  |");
}

#[test]
fn full_run_ends_with_core_summary_below_graphs() {
    let config = SampleConfig::new(2, 1, Tracks::default()).unwrap();
    let source = ScriptedSource::new(8.0)
        .with_free_kb(&[4 * GB_IN_KB, 4 * GB_IN_KB])
        .with_cpu(&[(0, 0), (10, 10), (20, 20)])
        .with_cores(6, 3.2);
    let mut canvas = GridCanvas::new();

    Sampler::new(config, &source, &mut canvas, RecordedPauses::default())
        .run()
        .unwrap();
    summary::report(&config, &source, &mut canvas).unwrap();

    assert_eq!(canvas.row_text(36), "> Number of Cores: 6 @ 3.20 GHz");
    assert_eq!(canvas.row_text(38), "+---+  +---+  +---+  +---+");
    assert_eq!(canvas.row_text(41), "+---+  +---+");
    assert_eq!(canvas.row_text(43), "+---+  +---+");
    assert_eq!(canvas.row_text(44), "");
}
