use dioxus::prelude::*;

use crate::components::chart::CurveChart;
use crate::components::layout::{MaterialsPanel, ParametersPanel, ResultsTable};
use crate::hooks::use_session_state;

#[component]
pub fn Comparison() -> Element {
    let state = use_session_state();

    rsx! {
        div { class: "comparison-page",
            h2 { class: "page-title", "Stress-strain curve comparison" }

            div { class: "comparison-grid",
                div { class: "left-column",
                    ParametersPanel { state }
                    MaterialsPanel { state }
                }
                ResultsTable { state }
                CurveChart { state }
            }
        }
    }
}
