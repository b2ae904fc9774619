use table_plot_overlay::api::{
    DataTablePlotOverlay, OverlayConfig, OverlayStatus, RequestedPlotMode, ViewportOverlay,
};
use table_plot_overlay::core::{
    DataCollection, DataPoint, DataTable, PlotMode, Viewport, XyArray, YAxis,
};
use table_plot_overlay::error::{ChartError, ChartResult};
use table_plot_overlay::render::{
    ChartInstructions, FigureOutcome, FigureScope, FigureSpec, OverlayRect, PlotSurface,
    RecordingSurface, SeriesCall, SurfaceEvent,
};

fn canvas() -> Viewport {
    Viewport::new(800, 600)
}

fn pipeline_output() -> DataCollection {
    let rdf = XyArray::from_xy(&[0.0, 0.5, 1.0, 1.5], &[0.0, 0.2, 1.8, 1.1]).expect("rdf data");
    let counts = XyArray::from_xy(&[0.0], &[12.0]).expect("counts data");
    [
        DataTable::new("coordination-rdf", PlotMode::Line, rdf)
            .with_y_axis(YAxis::scalar("g(r)")),
        DataTable::new("clusters", PlotMode::Histogram, counts)
            .with_y_axis(YAxis::scalar("Count")),
    ]
    .into_iter()
    .collect()
}

#[test]
fn configured_table_is_drawn_and_composited() {
    let overlay = DataTablePlotOverlay::new(OverlayConfig::new("coordination-rdf"))
        .expect("overlay");
    let mut surface = RecordingSurface::new();

    let status = overlay
        .render(&mut surface, canvas(), &pipeline_output(), 0)
        .expect("render");
    assert_eq!(status, OverlayStatus::Rendered);

    assert_eq!(surface.events.len(), 3);
    assert!(matches!(surface.events[0], SurfaceEvent::Opened(_)));
    assert!(matches!(surface.events[1], SurfaceEvent::Drawn(_)));
    assert_eq!(
        surface.events[2],
        SurfaceEvent::Closed(FigureOutcome::Composited)
    );
    let (figure, instructions) = surface.last_composited().expect("composited");
    assert!(figure.tight_layout);
    assert_eq!(instructions.mode, PlotMode::Line);
    assert_eq!(instructions.y_label, "g(r)");
    assert!(!surface.has_open_figure());
}

#[test]
fn empty_table_reference_is_a_silent_no_op() {
    let overlay = DataTablePlotOverlay::new(OverlayConfig::default()).expect("overlay");
    let mut surface = RecordingSurface::new();

    let status = overlay
        .render(&mut surface, canvas(), &DataCollection::new(), 0)
        .expect("skip is not an error");
    assert_eq!(status, OverlayStatus::Skipped);
    assert!(surface.events.is_empty());
}

#[test]
fn unknown_table_lists_available_identifiers() {
    let overlay = DataTablePlotOverlay::new(OverlayConfig::new("missing")).expect("overlay");
    let mut surface = RecordingSurface::new();

    let err = overlay
        .render(&mut surface, canvas(), &pipeline_output(), 0)
        .expect_err("unknown table");
    match &err {
        ChartError::TableNotFound {
            requested,
            available,
        } => {
            assert_eq!(requested, "missing");
            assert_eq!(
                available,
                &vec!["coordination-rdf".to_owned(), "clusters".to_owned()]
            );
        }
        other => panic!("expected TableNotFound, got {other:?}"),
    }
    let message = format!("{err}");
    assert!(message.contains("\"missing\""));
    assert!(message.contains("coordination-rdf, clusters"));
}

#[test]
fn empty_pipeline_output_reports_no_tables() {
    let overlay = DataTablePlotOverlay::new(OverlayConfig::new("anything")).expect("overlay");
    let mut surface = RecordingSurface::new();

    let err = overlay
        .render(&mut surface, canvas(), &DataCollection::new(), 0)
        .expect_err("no tables");
    assert!(matches!(err, ChartError::NoTablesAvailable));
}

#[test]
fn failed_validation_discards_the_figure() {
    let overlay = DataTablePlotOverlay::new(OverlayConfig::new("clusters")).expect("overlay");
    let mut surface = RecordingSurface::new();

    let err = overlay
        .render(&mut surface, canvas(), &pipeline_output(), 0)
        .expect_err("single-row histogram");
    assert!(matches!(
        err,
        ChartError::InsufficientData {
            mode: PlotMode::Histogram,
            rows: 1
        }
    ));

    assert_eq!(
        surface.events.last(),
        Some(&SurfaceEvent::Closed(FigureOutcome::Discarded))
    );
    assert!(
        !surface
            .events
            .iter()
            .any(|event| matches!(event, SurfaceEvent::Drawn(_)))
    );
    assert_eq!(surface.discarded_count, 1);
    assert_eq!(surface.composited_count, 0);
    assert!(surface.last_composited().is_none());
}

#[test]
fn failure_keeps_previous_composited_frame_and_later_frames_recover() {
    let data = pipeline_output();
    let mut surface = RecordingSurface::new();

    let good = DataTablePlotOverlay::new(OverlayConfig::new("coordination-rdf")).expect("good");
    good.render(&mut surface, canvas(), &data, 0).expect("first render");

    let bad = DataTablePlotOverlay::new(OverlayConfig::new("clusters")).expect("bad");
    assert!(bad.render(&mut surface, canvas(), &data, 1).is_err());

    let (_, instructions) = surface.last_composited().expect("previous chart kept");
    assert_eq!(instructions.y_label, "g(r)");

    let scatter = DataTablePlotOverlay::new(
        OverlayConfig::new("clusters").with_plot_mode(RequestedPlotMode::Scatter),
    )
    .expect("scatter");
    scatter.render(&mut surface, canvas(), &data, 2).expect("scatter render");
    assert_eq!(surface.composited_count, 2);
    assert_eq!(surface.discarded_count, 1);
}

#[test]
fn invalid_config_is_rejected_up_front() {
    let mut config = OverlayConfig::new("coordination-rdf");
    config.placement.alpha = 1.5;
    let err = DataTablePlotOverlay::new(config).expect_err("alpha out of range");
    assert!(format!("{err}").contains("alpha"));

    let mut overlay =
        DataTablePlotOverlay::new(OverlayConfig::new("coordination-rdf")).expect("overlay");
    let mut bad = overlay.config().clone();
    bad.style.font_scale = 0.0;
    assert!(overlay.set_config(bad).is_err());
    assert_eq!(overlay.config().style.font_scale, 1.0);
}

#[test]
fn degenerate_canvas_fails_before_opening_a_figure() {
    let overlay = DataTablePlotOverlay::new(OverlayConfig::new("coordination-rdf"))
        .expect("overlay");
    let mut surface = RecordingSurface::new();
    let err = overlay
        .render(&mut surface, Viewport::new(0, 600), &pipeline_output(), 0)
        .expect_err("zero-width canvas");
    assert!(matches!(
        err,
        ChartError::InvalidViewport {
            width: 0,
            height: 600
        }
    ));
    assert!(surface.events.is_empty());
}

/// Surface whose backend rejects every draw call.
#[derive(Default)]
struct RejectingSurface {
    closed: Vec<FigureOutcome>,
}

impl PlotSurface for RejectingSurface {
    fn open_figure(&mut self, _figure: &FigureSpec) -> ChartResult<()> {
        Ok(())
    }

    fn draw(&mut self, _instructions: &ChartInstructions) -> ChartResult<()> {
        Err(ChartError::InvalidData("backend rejected draw".to_owned()))
    }

    fn close_figure(&mut self, outcome: FigureOutcome) {
        self.closed.push(outcome);
    }
}

#[test]
fn backend_draw_failure_is_reported_and_discarded() {
    let overlay = DataTablePlotOverlay::new(OverlayConfig::new("coordination-rdf"))
        .expect("overlay");
    let mut surface = RejectingSurface::default();

    let err = overlay
        .render(&mut surface, canvas(), &pipeline_output(), 0)
        .expect_err("backend failure");
    assert!(format!("{err}").contains("backend rejected draw"));
    assert_eq!(surface.closed, vec![FigureOutcome::Discarded]);
}

#[test]
fn overlay_has_stable_id() {
    let overlay = DataTablePlotOverlay::new(OverlayConfig::default()).expect("overlay");
    assert_eq!(overlay.id(), "data-table-plot");
}

#[test]
fn scope_rejects_invalid_instructions_before_the_surface_sees_them() {
    let figure = FigureSpec {
        rect: OverlayRect::new(40.0, 30.0, 200.0, 150.0),
        alpha: 0.5,
        font_scale: 1.0,
        tight_layout: true,
    };
    let instructions = ChartInstructions::new(PlotMode::Histogram).with_series(SeriesCall::Bars {
        points: vec![DataPoint::new(0.0, 1.0), DataPoint::new(1.0, 2.0)],
        width: f64::NAN,
        color: None,
    });
    let mut surface = RecordingSurface::new();

    {
        let mut scope = FigureScope::open(&mut surface, &figure).expect("open");
        let err = scope.draw(&instructions).expect_err("nan width");
        assert!(matches!(err, ChartError::InvalidData(_)));
    }

    assert_eq!(
        surface.events,
        vec![
            SurfaceEvent::Opened(figure),
            SurfaceEvent::Closed(FigureOutcome::Discarded),
        ]
    );
    assert_eq!(surface.discarded_count, 1);
    assert!(!surface.has_open_figure());
}
