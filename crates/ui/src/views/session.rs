use dioxus::prelude::*;
use dioxus_router::use_navigator;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::ActiveSession;
use crate::vm::{
    AnswerFeedback, FEEDBACK_PAUSE_MS, level_banner, map_question_card, progress_line,
};

#[component]
pub fn AssessmentView() -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let mut session = use_context::<ActiveSession>().0;
    let mut input = use_signal(String::new);
    let feedback = use_signal(|| None::<AnswerFeedback>);

    let assessment_loop = ctx.assessment_loop();
    let on_submit = {
        let assessment_loop = assessment_loop.clone();
        move |_| {
            let mut input = input;
            let mut feedback = feedback;
            let raw = input();
            // Capture the prompt before the engine advances past it; the
            // verdict card keeps showing the answered question.
            let (prompt, outcome) = {
                let mut guard = session.write();
                let Some(active) = guard.as_mut() else {
                    return;
                };
                let prompt = active
                    .active_question()
                    .map(|q| q.text().to_string())
                    .unwrap_or_default();
                (prompt, assessment_loop.answer_current(active, &raw))
            };

            let Ok(result) = outcome else {
                return;
            };
            feedback.set(Some(AnswerFeedback {
                prompt,
                correct: result.event.correct,
            }));
            input.set(String::new());

            // The engine transition already happened; this pause only lets
            // the verdict land before the next question appears.
            let is_complete = result.is_complete;
            spawn(async move {
                tokio::time::sleep(std::time::Duration::from_millis(FEEDBACK_PAUSE_MS)).await;
                feedback.set(None);
                if is_complete {
                    let _ = navigator.push(Route::Dashboard {});
                }
            });
        }
    };

    let finish_early = {
        let assessment_loop = assessment_loop.clone();
        use_callback(move |()| {
            if let Some(active) = session.write().as_mut() {
                assessment_loop.finish(active);
            }
            let _ = navigator.push(Route::Dashboard {});
        })
    };

    let on_start = {
        let assessment_loop = assessment_loop.clone();
        move |_| {
            session.set(assessment_loop.start_session().ok());
        }
    };

    let session_read = session.read();
    let Some(active) = session_read.as_ref() else {
        return rsx! {
            div { class: "card",
                h2 { "Adaptive Assessment" }
                p { "No assessment is running." }
                button { class: "btn", r#type: "button", onclick: on_start, "Start" }
            }
        };
    };

    let banner = level_banner(active.level());
    let progress = progress_line(active);
    let question_card = map_question_card(active);
    let is_complete = active.should_end();
    let current_feedback = feedback();

    rsx! {
        div { class: "card",
            h2 { "{banner}" }
            if let Some(fb) = current_feedback {
                div { class: "question-card",
                    p { strong { "{fb.prompt}" } }
                    if fb.correct {
                        p { class: "verdict verdict-correct", "{fb.verdict_label()}" }
                    } else {
                        p { class: "verdict verdict-incorrect", "{fb.verdict_label()}" }
                    }
                }
            } else if is_complete {
                div { class: "question-card",
                    p { "Assessment complete." }
                    button {
                        class: "btn",
                        r#type: "button",
                        onclick: move |_| {
                            let _ = navigator.push(Route::Dashboard {});
                        },
                        "View dashboard"
                    }
                }
            } else if let Some(card) = question_card {
                p { class: "muted", "{progress}" }
                div { class: "question-card",
                    p { strong { "{card.prompt}" } }
                    input {
                        class: "answer-input",
                        r#type: "text",
                        placeholder: "Type answer here",
                        value: "{input()}",
                        oninput: move |evt| input.set(evt.value()),
                    }
                    div { class: "question-actions",
                        button { class: "btn", r#type: "button", onclick: on_submit, "Submit" }
                    }
                }
                div { class: "quiz-footer",
                    button {
                        class: "btn-link",
                        r#type: "button",
                        onclick: move |_| finish_early.call(()),
                        "Finish assessment early"
                    }
                }
            } else {
                p { "No questions for this level." }
                div { class: "quiz-footer",
                    button {
                        class: "btn-link",
                        r#type: "button",
                        onclick: move |_| finish_early.call(()),
                        "Finish assessment early"
                    }
                }
            }
        }
    }
}
