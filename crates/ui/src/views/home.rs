use dioxus::prelude::*;

use assess_core::model::Fundamental;

use crate::views::ActiveSession;

#[component]
pub fn HomeView() -> Element {
    let session = use_context::<ActiveSession>().0;

    let (responses, counters) = {
        let session = session.read();
        match session.as_ref() {
            Some(session) => (session.answered_count(), session.diagnostics_snapshot()),
            None => (0, Default::default()),
        }
    };
    let diagnostics_line = format!(
        "Diagnostics: Listening {}, Grasping {}, Retention {}, Application {}",
        counters.count(Fundamental::Listening),
        counters.count(Fundamental::Grasping),
        counters.count(Fundamental::Retention),
        counters.count(Fundamental::Application),
    );

    rsx! {
        div { class: "grid",
            div { class: "card",
                h3 { "Quick Overview" }
                p {
                    "Click "
                    em { "Start Adaptive Assessment" }
                    " to begin. The system will adapt difficulty based on recent responses and map mistakes to core fundamentals."
                }
            }
            div { class: "card",
                h3 { "Student Snapshot" }
                p { "Responses: {responses}" }
                p { "{diagnostics_line}" }
            }
        }
    }
}
