use proptest::prelude::*;
use table_plot_overlay::ChartError;
use table_plot_overlay::api::{OverlayConfig, RequestedPlotMode, select_chart};
use table_plot_overlay::core::{DataTable, ElementType, PlotMode, XAxis, XyArray, YAxis};
use table_plot_overlay::render::{Color, SeriesCall};

fn requested_mode() -> impl Strategy<Value = RequestedPlotMode> {
    prop_oneof![
        Just(RequestedPlotMode::Line),
        Just(RequestedPlotMode::Histogram),
        Just(RequestedPlotMode::BarChart),
        Just(RequestedPlotMode::Scatter),
    ]
}

fn hint_mode() -> impl Strategy<Value = PlotMode> {
    prop_oneof![
        Just(PlotMode::NoPlot),
        Just(PlotMode::Line),
        Just(PlotMode::Histogram),
        Just(PlotMode::BarChart),
        Just(PlotMode::Scatter),
    ]
}

fn uniform_table(rows: usize, y_columns: usize, hint: PlotMode) -> DataTable {
    let data = if rows == 0 {
        XyArray::empty(y_columns + 1)
    } else {
        XyArray::from_rows((0..rows).map(|row| {
            let mut values = vec![row as f64];
            values.extend((0..y_columns).map(|column| (row * (column + 1)) as f64));
            values
        }))
    }
    .expect("data");
    DataTable::new("t", hint, data).with_y_axis(YAxis::scalar("y"))
}

proptest! {
    #[test]
    fn row_count_rules_hold_for_every_mode(
        rows in 0usize..140,
        y_columns in 1usize..4,
        requested in requested_mode(),
    ) {
        let table = uniform_table(rows, y_columns, PlotMode::NoPlot);
        let config = OverlayConfig::new("t").with_plot_mode(requested);
        let result = select_chart(&table, &config, 0);

        let mode = requested.explicit().expect("explicit mode");
        if rows < 2 && mode != PlotMode::Scatter {
            let rejected = matches!(result, Err(ChartError::InsufficientData { .. }));
            prop_assert!(rejected);
        } else if rows > 100 && mode.is_bar_like() {
            let rejected = matches!(result, Err(ChartError::TooManyPoints { .. }));
            prop_assert!(rejected);
        } else {
            let chart = result.expect("selection succeeds");
            prop_assert_eq!(chart.mode, mode);
            prop_assert_eq!(chart.series.len(), y_columns);
            for call in &chart.series {
                prop_assert_eq!(call.len(), rows);
            }
            prop_assert!(chart.validate().is_ok());
        }
    }

    #[test]
    fn auto_detect_follows_hint(hint in hint_mode(), rows in 2usize..50) {
        let table = uniform_table(rows, 1, hint);
        let result = select_chart(&table, &OverlayConfig::new("t"), 0);
        if hint == PlotMode::NoPlot {
            let rejected = matches!(result, Err(ChartError::ModeUndetermined));
            prop_assert!(rejected);
        } else {
            prop_assert_eq!(result.expect("chart").mode, hint);
        }
    }

    #[test]
    fn category_bars_are_ordered_by_id(
        ids in proptest::collection::hash_set(-50i64..50, 2..12),
    ) {
        let ids: Vec<i64> = ids.into_iter().collect();
        let mut x_axis = XAxis::new("Type");
        for id in &ids {
            let color = Color::rgb(0.5, 0.5, 0.5);
            x_axis = x_axis.with_type(ElementType::new(*id, format!("T{id}"), color));
        }
        let mut sorted = ids.clone();
        sorted.sort_unstable();
        let data = XyArray::from_rows(sorted.iter().map(|id| [*id as f64, (*id * 2) as f64]))
            .expect("data");
        let table = DataTable::new("t", PlotMode::BarChart, data)
            .with_x_axis(x_axis)
            .with_y_axis(YAxis::scalar("Count"));

        let chart = select_chart(&table, &OverlayConfig::new("t"), 0).expect("chart");
        match &chart.series[0] {
            SeriesCall::CategoryBars { bars, .. } => {
                let bar_ids: Vec<i64> = bars.iter().map(|bar| bar.category_id).collect();
                prop_assert_eq!(&bar_ids, &sorted);
                for bar in bars {
                    prop_assert_eq!(bar.height, (bar.category_id * 2) as f64);
                }
            }
            other => prop_assert!(false, "expected category bars, got {:?}", other),
        }
    }

    #[test]
    fn non_empty_user_labels_always_win(
        title in "[a-zA-Z ]{1,12}",
        x_label in "[a-zA-Z ]{1,12}",
        y_label in "[a-zA-Z ]{1,12}",
    ) {
        let table = uniform_table(3, 1, PlotMode::Line).with_title("table title");
        let config = OverlayConfig::new("t")
            .with_title(title.clone())
            .with_axis_labels(x_label.clone(), y_label.clone());
        let chart = select_chart(&table, &config, 0).expect("chart");
        prop_assert_eq!(chart.title, title);
        prop_assert_eq!(chart.x_label, x_label);
        prop_assert_eq!(chart.y_label, y_label);
    }
}
