use dioxus::prelude::*;

use crate::context::AppContext;
use crate::views::ActiveSession;
use crate::vm::{
    CHAPTER_ALL, filter_from_choice, map_practice_question, map_recommendation,
};

#[component]
pub fn PracticeView() -> Element {
    let ctx = use_context::<AppContext>();
    let session = use_context::<ActiveSession>().0;
    let mut chapter_choice = use_signal(|| CHAPTER_ALL.to_string());

    let practice = ctx.practice();
    let counters = session
        .read()
        .as_ref()
        .map(|session| session.diagnostics_snapshot())
        .unwrap_or_default();

    let recommended = assess_core::recommend::rank(&counters);
    let recommended_rows = recommended.iter().map(|entry| {
        let vm = map_recommendation(entry);
        let mut chapter_choice = chapter_choice;
        rsx! {
            div { class: "recommend-row",
                strong { "{vm.title}" }
                ": {vm.detail} "
                button {
                    class: "btn btn-small",
                    r#type: "button",
                    onclick: move |_| chapter_choice.set(CHAPTER_ALL.to_string()),
                    "Practice Now"
                }
            }
        }
    });

    let chapters = practice.chapters();
    let filter = filter_from_choice(&chapter_choice());
    let question_rows = practice
        .questions_by_chapter(&filter)
        .iter()
        .map(map_practice_question)
        .map(|vm| {
            rsx! {
                div { class: "practice-q",
                    div {
                        "{vm.text} "
                        em { "({vm.level_label})" }
                    }
                    div {
                        small { "Fundamental: {vm.fundamental_label}" }
                    }
                }
            }
        })
        .collect::<Vec<_>>();

    rsx! {
        div { class: "card",
            h2 { "Practice" }
            h4 { "Recommended based on diagnostics" }
            {recommended_rows}

            h4 { "Or choose chapter" }
            select {
                value: "{chapter_choice()}",
                onchange: move |evt| chapter_choice.set(evt.value()),
                option { value: "{CHAPTER_ALL}", "{CHAPTER_ALL}" }
                for chapter in chapters {
                    option { value: "{chapter}", "{chapter}" }
                }
            }

            div { class: "practice-list",
                {question_rows.into_iter()}
            }
        }
    }
}
