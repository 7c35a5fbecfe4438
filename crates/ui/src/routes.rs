use dioxus::prelude::*;
use dioxus_router::{Outlet, Routable, use_navigator};

use crate::context::AppContext;
use crate::views::{
    ActiveSession, AssessmentView, DashboardView, HomeView, LoginView, PracticeView, SignedIn,
};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", HomeView)] Home {},
        #[route("/assessment", AssessmentView)] Assessment {},
        #[route("/practice", PracticeView)] Practice {},
        #[route("/dashboard", DashboardView)] Dashboard {},
}

#[component]
fn Layout() -> Element {
    let signed_in = use_context::<SignedIn>().0;

    rsx! {
        div { class: "app",
            header { class: "masthead",
                h1 { "Adaptive Learning — Prototype" }
            }
            if signed_in().is_some() {
                TopBar {}
                main { class: "content",
                    Outlet::<Route> {}
                }
            } else {
                LoginView {}
            }
            footer { class: "footnote",
                small { "Prototype for Hack-A-Thon: Education for AI — Adaptive Assessment & Practice Tool" }
            }
        }
    }
}

#[component]
fn TopBar() -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let signed_in = use_context::<SignedIn>().0;
    let mut session = use_context::<ActiveSession>().0;
    let assessment_loop = ctx.assessment_loop();

    let student_name = signed_in()
        .map(|student| student.name)
        .unwrap_or_default();

    rsx! {
        div { class: "top-bar",
            div {
                "Signed in as "
                strong { "{student_name}" }
            }
            div { class: "top-bar-actions",
                button {
                    class: "btn btn-small",
                    r#type: "button",
                    onclick: move |_| {
                        let _ = navigator.push(Route::Home {});
                    },
                    "Home"
                }
                button {
                    class: "btn btn-small",
                    r#type: "button",
                    onclick: move |_| {
                        // A fresh run every time, like the original's start
                        // button: previous log and diagnostics are discarded.
                        session.set(assessment_loop.start_session().ok());
                        let _ = navigator.push(Route::Assessment {});
                    },
                    "Start Adaptive Assessment"
                }
                button {
                    class: "btn btn-small",
                    r#type: "button",
                    onclick: move |_| {
                        let _ = navigator.push(Route::Practice {});
                    },
                    "Practice"
                }
                button {
                    class: "btn btn-small",
                    r#type: "button",
                    onclick: move |_| {
                        let _ = navigator.push(Route::Dashboard {});
                    },
                    "Dashboard"
                }
            }
        }
    }
}
