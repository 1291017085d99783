use dioxus::prelude::*;
use curve_session::prelude::*;

use crate::hooks::SessionState;

#[component]
pub fn ParametersPanel(state: SessionState) -> Element {
    let mut inputs = state.inputs;
    let params = inputs();
    let next_name = format!("Material {}", state.session.read().len() + 1);
    let busy = state.is_busy();

    rsx! {
        div { class: "panel parameters-panel",
            div { class: "panel-header",
                h3 { "Parameters" }
            }

            div { class: "panel-content",
                div { class: "control-row",
                    label { "Material name" }
                    input {
                        r#type: "text",
                        placeholder: "{next_name}",
                        value: "{params.material_name}",
                        oninput: move |evt| inputs.write().material_name = evt.value(),
                    }
                }

                for field in NumericField::ALL {
                    div { class: "control-row", key: "{field.label()}",
                        label { "{field.label()}" }
                        input {
                            r#type: "number",
                            class: "numeric-input",
                            initial_value: "{params.field(field)}",
                            // Exponent and sign keys are masked; pasted text still goes through the parser
                            onkeydown: move |evt: KeyboardEvent| {
                                if let Key::Character(text) = evt.key() {
                                    if !text.chars().all(accepts_key) {
                                        evt.prevent_default();
                                    }
                                }
                            },
                            oninput: move |evt| inputs.write().set_field(field, &evt.value()),
                        }
                    }
                }

                div { class: "control-row",
                    label { "Model type" }
                    select {
                        class: "model-type-select",
                        value: "{params.model_type.label()}",
                        onchange: move |evt| {
                            inputs.write().model_type = ModelType::from_label_or_default(&evt.value());
                        },
                        for model in ModelType::ALL {
                            option { key: "{model.label()}", value: "{model.label()}", "{model.label()}" }
                        }
                    }
                }

                button {
                    class: "btn-calculate",
                    disabled: busy,
                    onclick: move |_| state.calculate(),
                    if busy {
                        "Calculating..."
                    } else {
                        "Calculate curve"
                    }
                }
            }
        }
    }
}
