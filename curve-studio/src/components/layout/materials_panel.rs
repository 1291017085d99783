use dioxus::prelude::*;
use curve_session::views::SERIES_PALETTE;

use crate::hooks::SessionState;

#[component]
pub fn MaterialsPanel(state: SessionState) -> Element {
    let session = state.session.read();
    let count = session.len();
    let capacity = session.capacity();
    let entries: Vec<_> = session
        .entries()
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            (
                entry.id,
                entry.name.clone(),
                entry.visible,
                entry.data.len(),
                SERIES_PALETTE[index % SERIES_PALETTE.len()],
            )
        })
        .collect();
    drop(session);

    rsx! {
        div { class: "panel materials-panel",
            div { class: "panel-header",
                h3 { "Materials" }
                span { class: "materials-count", "{count}/{capacity}" }
            }

            div { class: "panel-content",
                if entries.is_empty() {
                    div { class: "empty-note", "No materials yet. Calculate a curve to add one." }
                }

                for (id, name, visible, points, color) in entries {
                    label { class: "material-row", key: "{id}",
                        input {
                            r#type: "checkbox",
                            checked: visible,
                            onchange: move |_| state.toggle_visibility(id),
                        }
                        span { class: "material-swatch", style: "background-color: {color};" }
                        span { class: "material-name", "{name}" }
                        span { class: "material-points", "{points} pts" }
                    }
                }

                button {
                    class: "btn-clear danger",
                    disabled: count == 0,
                    onclick: move |_| state.clear(),
                    "Clear session"
                }
            }
        }
    }
}
