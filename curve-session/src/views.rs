//! View models for the results table and the comparison chart

use crate::session::{CurvePoint, EntryId, Session};

/// Line colours, assigned by insertion position so a material keeps its
/// colour when others are hidden.
pub const SERIES_PALETTE: [&str; 10] = [
    "#007bff", "#28a745", "#dc3545", "#ffc107", "#6f42c1",
    "#17a2b8", "#fd7e14", "#e83e8c", "#20c997", "#6c757d",
];

/// One visible material on the chart
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSeries {
    pub id: EntryId,
    pub name: String,
    pub color: &'static str,
    pub points: Vec<CurvePoint>,
}

/// Rows for the table: the most recently added visible material
pub fn table_rows(session: &Session) -> &[CurvePoint] {
    session
        .latest_visible()
        .map(|entry| entry.data.as_slice())
        .unwrap_or(&[])
}

pub fn chart_series(session: &Session) -> Vec<ChartSeries> {
    session
        .entries()
        .iter()
        .enumerate()
        .filter(|(_, entry)| entry.visible)
        .map(|(index, entry)| ChartSeries {
            id: entry.id,
            name: entry.name.clone(),
            color: SERIES_PALETTE[index % SERIES_PALETTE.len()],
            points: entry.data.clone(),
        })
        .collect()
}

/// Maps curve coordinates into an SVG viewport (y grows downwards)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartFrame {
    pub width: f64,
    pub height: f64,
    pub padding: f64,
    pub min_strain: f64,
    pub max_strain: f64,
    pub min_stress: f64,
    pub max_stress: f64,
}

impl ChartFrame {
    /// Both axes always include zero and stretch to cover every point shown,
    /// negative values included. A degenerate axis spans one unit from its minimum.
    pub fn fit(series: &[ChartSeries], width: f64, height: f64, padding: f64) -> Self {
        let points = series.iter().flat_map(|s| s.points.iter());
        let ((min_x, max_x), (min_y, max_y)) =
            points.fold(((0.0_f64, 0.0_f64), (0.0_f64, 0.0_f64)), |((lx, hx), (ly, hy)), p| {
                ((lx.min(p.strain), hx.max(p.strain)), (ly.min(p.stress), hy.max(p.stress)))
            });

        Self {
            width,
            height,
            padding,
            min_strain: min_x,
            max_strain: if max_x > min_x { max_x } else { min_x + 1.0 },
            min_stress: min_y,
            max_stress: if max_y > min_y { max_y } else { min_y + 1.0 },
        }
    }

    pub fn plot_width(&self) -> f64 {
        (self.width - 2.0 * self.padding).max(0.0)
    }

    pub fn plot_height(&self) -> f64 {
        (self.height - 2.0 * self.padding).max(0.0)
    }

    pub fn project(&self, point: &CurvePoint) -> (f64, f64) {
        let x_span = self.max_strain - self.min_strain;
        let y_span = self.max_stress - self.min_stress;
        let x = self.padding + (point.strain - self.min_strain) / x_span * self.plot_width();
        let y = self.height - self.padding - (point.stress - self.min_stress) / y_span * self.plot_height();
        (x, y)
    }

    /// `points` attribute of an SVG polyline
    pub fn polyline(&self, points: &[CurvePoint]) -> String {
        points
            .iter()
            .map(|p| {
                let (x, y) = self.project(p);
                format!("{x:.2},{y:.2}")
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// `count + 1` evenly spaced values from `min` to `max` inclusive
pub fn axis_ticks(min: f64, max: f64, count: usize) -> Vec<f64> {
    if count == 0 {
        return vec![min];
    }
    let step = (max - min) / count as f64;
    (0..=count).map(|i| min + step * i as f64).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn session_with(names: &[&str]) -> Session {
        let mut session = Session::new();
        for (i, name) in names.iter().enumerate() {
            let scale = (i + 1) as f64;
            session
                .add_entry(name, vec![CurvePoint::new(0.0, 0.0), CurvePoint::new(0.1 * scale, 200.0 * scale)])
                .unwrap();
        }
        session
    }

    #[test]
    fn table_follows_latest_visible_entry() {
        let mut session = session_with(&["A", "B"]);
        assert_relative_eq!(table_rows(&session)[1].stress, 400.0);

        let b = session.entries()[1].id;
        session.toggle_visibility(b);
        assert_relative_eq!(table_rows(&session)[1].stress, 200.0);

        let a = session.entries()[0].id;
        session.toggle_visibility(a);
        assert!(table_rows(&session).is_empty());
    }

    #[test]
    fn series_keep_colour_when_others_are_hidden() {
        let mut session = session_with(&["A", "B", "C"]);
        let b = session.entries()[1].id;
        session.toggle_visibility(b);

        let series = chart_series(&session);
        assert_eq!(series.len(), 2);
        assert_eq!(series[0].name, "A");
        assert_eq!(series[1].name, "C");
        assert_eq!(series[1].color, SERIES_PALETTE[2]);
    }

    #[test]
    fn frame_maps_extremes_to_plot_corners() {
        let session = session_with(&["A", "B"]);
        let frame = ChartFrame::fit(&chart_series(&session), 600.0, 400.0, 40.0);
        assert_relative_eq!(frame.max_strain, 0.2);
        assert_relative_eq!(frame.max_stress, 400.0);

        let (x0, y0) = frame.project(&CurvePoint::new(0.0, 0.0));
        assert_relative_eq!(x0, 40.0);
        assert_relative_eq!(y0, 360.0);

        let (x1, y1) = frame.project(&CurvePoint::new(0.2, 400.0));
        assert_relative_eq!(x1, 560.0);
        assert_relative_eq!(y1, 40.0);
    }

    #[test]
    fn empty_frame_uses_unit_bounds() {
        let frame = ChartFrame::fit(&[], 100.0, 100.0, 10.0);
        assert_relative_eq!(frame.min_strain, 0.0);
        assert_relative_eq!(frame.max_strain, 1.0);
        assert_relative_eq!(frame.max_stress, 1.0);
        assert_eq!(frame.polyline(&[]), "");
    }

    #[test]
    fn negative_values_stay_inside_the_plot() {
        let mut session = Session::new();
        session
            .add_entry("pasted", vec![CurvePoint::new(0.0, 0.0), CurvePoint::new(0.1, -500.0)])
            .unwrap();
        let frame = ChartFrame::fit(&chart_series(&session), 600.0, 400.0, 40.0);
        assert_relative_eq!(frame.min_stress, -500.0);
        assert_relative_eq!(frame.max_stress, 0.0);

        let (_, y_zero) = frame.project(&CurvePoint::new(0.0, 0.0));
        let (_, y_low) = frame.project(&CurvePoint::new(0.1, -500.0));
        assert_relative_eq!(y_zero, 40.0);
        assert_relative_eq!(y_low, 360.0);
    }

    #[test]
    fn ticks_are_evenly_spaced() {
        let ticks = axis_ticks(0.0, 400.0, 4);
        assert_eq!(ticks.len(), 5);
        assert_relative_eq!(ticks[1], 100.0);
        assert_relative_eq!(ticks[4], 400.0);
        assert_eq!(axis_ticks(0.0, 1.0, 0), vec![0.0]);
    }
}
