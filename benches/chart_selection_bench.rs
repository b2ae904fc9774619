use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use table_plot_overlay::api::{OverlayConfig, RequestedPlotMode, select_chart};
use table_plot_overlay::core::{DataTable, ElementType, PlotMode, XAxis, XyArray, YAxis};
use table_plot_overlay::render::Color;

fn bench_line_selection_10k(c: &mut Criterion) {
    let data = XyArray::from_rows((0..10_000).map(|i| {
        let t = f64::from(i);
        [t, t.sin(), t.cos()]
    }))
    .expect("valid generated table");
    let table = DataTable::new("energy", PlotMode::Line, data)
        .with_y_axis(YAxis::vector("Energy", ["Potential", "Kinetic"]));
    let config = OverlayConfig::new("energy").with_time_slider(Color::rgb(1.0, 0.0, 0.0));

    c.bench_function("line_selection_10k", |b| {
        b.iter(|| {
            let _ = select_chart(black_box(&table), black_box(&config), black_box(5_000))
                .expect("select");
        })
    });
}

fn bench_category_bar_selection(c: &mut Criterion) {
    let mut x_axis = XAxis::new("Type");
    for id in (0..100).rev() {
        x_axis = x_axis.with_type(ElementType::new(
            id,
            format!("type-{id}"),
            Color::rgb(0.2, 0.4, 0.6),
        ));
    }
    let data = XyArray::from_rows((0..100).map(|i| [f64::from(i), f64::from(i * 3)]))
        .expect("valid generated table");
    let table = DataTable::new("types", PlotMode::BarChart, data)
        .with_x_axis(x_axis)
        .with_y_axis(YAxis::scalar("Count"));
    let config = OverlayConfig::new("types").with_plot_mode(RequestedPlotMode::BarChart);

    c.bench_function("category_bar_selection_100", |b| {
        b.iter(|| {
            let _ = select_chart(black_box(&table), black_box(&config), 0).expect("select");
        })
    });
}

criterion_group!(
    benches,
    bench_line_selection_10k,
    bench_category_bar_selection
);
criterion_main!(benches);
