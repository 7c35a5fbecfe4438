use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};

use assess_core::time::fixed_clock;
use assess_core::Catalog;
use services::{AssessmentLoopService, PracticeService};

use crate::context::{Student, UiApp, build_app_context};
use crate::views::{
    ActiveSession, AssessmentView, DashboardView, HomeView, LoginView, PracticeView, SignedIn,
};

struct TestApp {
    roster: Vec<Student>,
    assessment_loop: Arc<AssessmentLoopService>,
    practice: Arc<PracticeService>,
}

impl UiApp for TestApp {
    fn roster(&self) -> Vec<Student> {
        self.roster.clone()
    }

    fn assessment_loop(&self) -> Arc<AssessmentLoopService> {
        Arc::clone(&self.assessment_loop)
    }

    fn practice(&self) -> Arc<PracticeService> {
        Arc::clone(&self.practice)
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Login,
    Home,
    Assessment,
    Practice,
    Dashboard,
}

/// How much engine state to pre-build before rendering.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum SessionSeed {
    None,
    Fresh,
    TwoMisses,
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
    seed: SessionSeed,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    let ctx = build_app_context(&app);

    let session = match props.seed {
        SessionSeed::None => None,
        SessionSeed::Fresh => Some(ctx.assessment_loop().start_session().expect("start session")),
        SessionSeed::TwoMisses => {
            let svc = ctx.assessment_loop();
            let mut session = svc.start_session().expect("start session");
            svc.answer_current(&mut session, "wrong").expect("answer");
            svc.answer_current(&mut session, "wrong").expect("answer");
            Some(session)
        }
    };
    let student = (props.view != ViewKind::Login).then(|| Student::new("ram", "Ram"));

    use_context_provider(|| ctx);
    use_context_provider(|| SignedIn(Signal::new(student)));
    use_context_provider(|| ActiveSession(Signal::new(session)));
    use_context_provider(|| props.view);

    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::Login => rsx! { LoginView {} },
        ViewKind::Home => rsx! { HomeView {} },
        ViewKind::Assessment => rsx! { AssessmentView {} },
        ViewKind::Practice => rsx! { PracticeView {} },
        ViewKind::Dashboard => rsx! { DashboardView {} },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness(view: ViewKind, seed: SessionSeed) -> ViewHarness {
    let catalog = Arc::new(Catalog::builtin());
    let app = Arc::new(TestApp {
        roster: vec![
            Student::new("ram", "Ram"),
            Student::new("shyam", "Shyam"),
            Student::new("sanga", "Sanga"),
        ],
        assessment_loop: Arc::new(AssessmentLoopService::new(
            fixed_clock(),
            Arc::clone(&catalog),
        )),
        practice: Arc::new(PracticeService::new(catalog)),
    });

    let dom = VirtualDom::new_with_props(ViewRouterHarness, ViewHarnessProps { app, view, seed });

    ViewHarness { dom }
}
