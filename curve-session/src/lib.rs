//! Curve Session - material comparison for stress-strain curves
//!
//! The curves themselves are computed by an external service reached over
//! HTTP. This crate holds everything on the client side of that call:
//! - Form parameters and the coercion applied to each edit
//! - The session of named results with visibility toggles (capped at 10)
//! - The requester for `POST /calculate`
//! - CSV export and the table/chart view models
//!
//! ## Example
//! ```rust
//! use curve_session::prelude::*;
//!
//! let mut session = Session::new();
//! session.add_entry("S355", vec![CurvePoint::new(0.0, 0.0), CurvePoint::new(0.1, 21000.0)]).unwrap();
//!
//! let csv = to_csv(session.visible_entries()).unwrap();
//! assert_eq!(csv.lines().count(), 3);
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod export;
pub mod params;
pub mod session;
pub mod views;
pub mod workbench;

// Re-export common types
pub mod prelude {
    pub use crate::client::CurveClient;
    pub use crate::config::CurveConfig;
    pub use crate::error::{CurveError, CurveResult};
    pub use crate::export::{
        export_csv, export_single_curve, to_csv, DownloadSink, FileSink, CSV_FILE_NAME, CSV_MIME,
        SINGLE_CURVE_FILE_NAME,
    };
    pub use crate::params::{accepts_key, parse_numeric, InputParameters, ModelType, NumericField};
    pub use crate::session::{Confirm, CurvePoint, EntryId, MaterialEntry, PendingEntry, Session};
    pub use crate::views::{axis_ticks, chart_series, table_rows, ChartFrame, ChartSeries};
    pub use crate::workbench::Workbench;
}
