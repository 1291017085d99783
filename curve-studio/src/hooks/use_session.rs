use dioxus::prelude::*;
use curve_session::prelude::*;

use crate::browser;

/// Signals backing the comparison page. Everything mutates through the
/// `Session` methods; components only hold copies of these handles.
#[derive(Clone, Copy, PartialEq)]
pub struct SessionState {
    pub inputs: Signal<InputParameters>,
    pub session: Signal<Session>,
    pub client: Signal<CurveClient>,
    pub in_flight: Signal<usize>,
    pub csv_file_name: Signal<String>,
}

pub fn use_session_state() -> SessionState {
    let config = use_hook(CurveConfig::from_build_env);
    let inputs = use_signal(InputParameters::default);
    let session = use_signal(|| Session::with_capacity(config.capacity));
    let client = use_signal(|| CurveClient::new(config.api_url.clone()));
    let in_flight = use_signal(|| 0_usize);
    let csv_file_name = use_signal(|| config.csv_file_name.clone());

    SessionState {
        inputs,
        session,
        client,
        in_flight,
        csv_file_name,
    }
}

impl SessionState {
    /// Calculate action. A full session is refused before anything is sent;
    /// a failed request only raises an alert.
    pub fn calculate(self) {
        let params = self.inputs.cloned();
        let pending = match self.session.read().begin_request(&params.material_name) {
            Ok(pending) => pending,
            Err(e) => {
                browser::alert(&e.to_string());
                return;
            }
        };

        let client = self.client.cloned();
        let mut session = self.session;
        let mut in_flight = self.in_flight;
        *in_flight.write() += 1;

        spawn(async move {
            let outcome = client.calculate(&params).await;
            *in_flight.write() -= 1;

            let added = match outcome {
                Ok(points) => session
                    .write()
                    .complete(pending, points)
                    .map(|entry| entry.map(|e| e.name.clone())),
                Err(e) => Err(e),
            };

            match added {
                Ok(Some(name)) => tracing::info!("Added material '{}'", name),
                Ok(None) => {}
                Err(e) if e.is_request_failure() => browser::alert(&format!(
                    "Error: {e}. Make sure the calculation service is running."
                )),
                Err(e) => browser::alert(&e.to_string()),
            }
        });
    }

    pub fn toggle_visibility(self, id: EntryId) {
        let mut session = self.session;
        session.write().toggle_visibility(id);
    }

    pub fn clear(self) {
        let mut session = self.session;
        session.write().clear(&mut |message: &str| browser::confirm(message));
    }

    pub fn export(self) {
        let session = self.session.read();
        let file_name = self.csv_file_name.read();
        if let Err(e) = export_csv(session.visible_entries(), file_name.as_str(), &mut browser::BrowserDownload) {
            browser::alert(&e.to_string());
        }
    }

    /// Download the table's curve as `Strain,Stress`
    pub fn export_table(self) {
        let session = self.session.read();
        if let Err(e) = export_single_curve(table_rows(&session), &mut browser::BrowserDownload) {
            browser::alert(&e.to_string());
        }
    }

    pub fn is_busy(&self) -> bool {
        *self.in_flight.read() > 0
    }
}
