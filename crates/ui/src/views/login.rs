use dioxus::prelude::*;

use crate::context::AppContext;
use crate::views::SignedIn;

#[component]
pub fn LoginView() -> Element {
    let ctx = use_context::<AppContext>();
    let signed_in = use_context::<SignedIn>().0;

    let buttons = ctx.roster().iter().cloned().map(|student| {
        let mut signed_in = signed_in;
        let name = student.name.clone();
        rsx! {
            button {
                class: "btn",
                r#type: "button",
                onclick: move |_| signed_in.set(Some(student.clone())),
                "{name}"
            }
        }
    });

    rsx! {
        div { class: "card",
            h2 { "Choose Student (mock login)" }
            {buttons}
        }
    }
}
