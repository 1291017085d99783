//! Inputs, session and requester wired together for one client session

use crate::client::CurveClient;
use crate::config::CurveConfig;
use crate::error::CurveResult;
use crate::export::{export_csv, export_single_curve, DownloadSink};
use crate::params::InputParameters;
use crate::session::{Confirm, EntryId, MaterialEntry, Session};
use crate::views::table_rows;

pub struct Workbench {
    pub inputs: InputParameters,
    session: Session,
    client: CurveClient,
    csv_file_name: String,
}

impl Workbench {
    pub fn new(config: &CurveConfig) -> Self {
        Self {
            inputs: InputParameters::default(),
            session: Session::with_capacity(config.capacity),
            client: CurveClient::new(config.api_url.clone()),
            csv_file_name: config.csv_file_name.clone(),
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Calculate action: blocked when the session is full, and on a failed
    /// request the session is left as it was.
    pub async fn calculate(&mut self) -> CurveResult<Option<&MaterialEntry>> {
        let pending = self.session.begin_request(&self.inputs.material_name)?;
        let points = self.client.calculate(&self.inputs).await?;
        self.session.complete(pending, points)
    }

    pub fn toggle_visibility(&mut self, id: EntryId) -> bool {
        self.session.toggle_visibility(id)
    }

    pub fn clear(&mut self, confirm: &mut impl Confirm) -> bool {
        self.session.clear(confirm)
    }

    /// Every visible material, under the configured file name
    pub fn export(&self, sink: &mut impl DownloadSink) -> CurveResult<()> {
        export_csv(self.session.visible_entries(), &self.csv_file_name, sink)
    }

    /// The curve shown in the table, in the single-curve layout
    pub fn export_table(&self, sink: &mut impl DownloadSink) -> CurveResult<()> {
        export_single_curve(table_rows(&self.session), sink)
    }
}
