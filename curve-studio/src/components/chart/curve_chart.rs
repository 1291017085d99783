use dioxus::prelude::*;
use curve_session::prelude::*;

use crate::hooks::SessionState;

const CHART_WIDTH: f64 = 640.0;
const CHART_HEIGHT: f64 = 400.0;
const CHART_PADDING: f64 = 56.0;
const TICK_COUNT: usize = 5;

struct Tick {
    pos: f64,
    label: String,
}

fn format_tick(value: f64) -> String {
    if value == 0.0 {
        "0".to_string()
    } else if value.abs() < 1.0 {
        format!("{value:.3}")
    } else {
        format!("{value:.0}")
    }
}

/// Multi-series stress-strain chart of every visible material
#[component]
pub fn CurveChart(state: SessionState) -> Element {
    let series = chart_series(&state.session.read());
    let frame = ChartFrame::fit(&series, CHART_WIDTH, CHART_HEIGHT, CHART_PADDING);

    let left = frame.padding;
    let right = frame.width - frame.padding;
    let top = frame.padding;
    let bottom = frame.height - frame.padding;
    let x_label_y = bottom + 20.0;
    let y_label_x = left - 8.0;
    let x_title_y = frame.height - 12.0;
    let x_title_x = frame.width / 2.0;
    let y_title_x = -(frame.height / 2.0);

    let x_ticks: Vec<Tick> = axis_ticks(frame.min_strain, frame.max_strain, TICK_COUNT)
        .into_iter()
        .map(|t| Tick {
            pos: frame.project(&CurvePoint::new(t, frame.min_stress)).0,
            label: format_tick(t),
        })
        .collect();
    let y_ticks: Vec<Tick> = axis_ticks(frame.min_stress, frame.max_stress, TICK_COUNT)
        .into_iter()
        .map(|t| Tick {
            pos: frame.project(&CurvePoint::new(frame.min_strain, t)).1,
            label: format_tick(t),
        })
        .collect();

    let lines: Vec<(EntryId, &'static str, String)> = series
        .iter()
        .map(|s| (s.id, s.color, frame.polyline(&s.points)))
        .collect();

    rsx! {
        div { class: "panel chart-panel",
            svg {
                class: "curve-chart",
                view_box: "0 0 {CHART_WIDTH} {CHART_HEIGHT}",

                for (i, tick) in x_ticks.iter().enumerate() {
                    g { key: "x{i}",
                        line { class: "grid-line", x1: "{tick.pos}", y1: "{top}", x2: "{tick.pos}", y2: "{bottom}" }
                        text { class: "tick-label", x: "{tick.pos}", y: "{x_label_y}", text_anchor: "middle", "{tick.label}" }
                    }
                }
                for (i, tick) in y_ticks.iter().enumerate() {
                    g { key: "y{i}",
                        line { class: "grid-line", x1: "{left}", y1: "{tick.pos}", x2: "{right}", y2: "{tick.pos}" }
                        text { class: "tick-label", x: "{y_label_x}", y: "{tick.pos}", text_anchor: "end", "{tick.label}" }
                    }
                }

                line { class: "axis-line", x1: "{left}", y1: "{bottom}", x2: "{right}", y2: "{bottom}" }
                line { class: "axis-line", x1: "{left}", y1: "{top}", x2: "{left}", y2: "{bottom}" }

                for (id, color, points) in lines {
                    polyline {
                        key: "{id}",
                        class: "curve-line",
                        points: "{points}",
                        fill: "none",
                        stroke: "{color}",
                        stroke_width: "3",
                    }
                }

                text { class: "axis-title", x: "{x_title_x}", y: "{x_title_y}", text_anchor: "middle", "Strain (ε)" }
                text {
                    class: "axis-title",
                    x: "{y_title_x}",
                    y: "16",
                    transform: "rotate(-90)",
                    text_anchor: "middle",
                    "Stress (σ)"
                }
            }

            div { class: "chart-legend",
                for s in series.iter() {
                    span { class: "legend-item", key: "{s.id}",
                        span { class: "material-swatch", style: "background-color: {s.color};" }
                        "{s.name}"
                    }
                }
            }
        }
    }
}
