use dioxus::prelude::*;
use dioxus_router::Router;

use crate::routes::Route;
use crate::views::{ActiveSession, SignedIn};

#[component]
pub fn App() -> Element {
    // Session and identity live at the root so every route observes the
    // same engine state.
    use_context_provider(|| SignedIn(Signal::new(None)));
    use_context_provider(|| ActiveSession(Signal::new(None)));

    rsx! {
        document::Stylesheet { href: asset!("/assets/style.css") }

        document::Title { "Tutor" }

        div { class: "app-root",
            ErrorBoundary {
                handle_error: |errors: ErrorContext| rsx! {
                    div { class: "fatal",
                        h1 { "Something went wrong" }
                        pre { "{errors:?}" }
                    }
                },
                Router::<Route> {}
            }
        }
    }
}
