use dioxus::prelude::*;
use curve_session::views::table_rows;

use crate::hooks::SessionState;

/// Points of the most recently added visible material
#[component]
pub fn ResultsTable(state: SessionState) -> Element {
    let session = state.session.read();
    let title = session
        .latest_visible()
        .map(|entry| entry.name.clone())
        .unwrap_or_else(|| "No visible material".to_string());
    let rows = table_rows(&session).to_vec();
    drop(session);

    rsx! {
        div { class: "panel results-panel",
            div { class: "panel-header",
                h3 { "{title}" }
            }

            div { class: "control-row",
                button {
                    class: "btn-export",
                    onclick: move |_| state.export(),
                    "Export data"
                }
                button {
                    class: "btn-export btn-secondary",
                    title: "Strain,Stress of the curve shown in the table",
                    onclick: move |_| state.export_table(),
                    "Export curve"
                }
            }

            div { class: "table-scroll",
                table { class: "results-table",
                    thead {
                        tr {
                            th { "Strain" }
                            th { "Stress" }
                        }
                    }
                    tbody {
                        for (i, point) in rows.into_iter().enumerate() {
                            tr { key: "{i}",
                                td { "{point.strain}" }
                                td { "{point.stress}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
