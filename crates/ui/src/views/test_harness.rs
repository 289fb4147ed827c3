use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use services::QuestionService;

use crate::context::{UiApp, build_app_context};
use crate::views::GameView;

#[derive(Clone)]
struct TestApp {
    questions: Arc<QuestionService>,
}

impl UiApp for TestApp {
    fn questions(&self) -> Arc<QuestionService> {
        Arc::clone(&self.questions)
    }
}

#[derive(Props, Clone)]
struct HarnessProps {
    app: Arc<TestApp>,
}

impl PartialEq for HarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for HarnessProps {}

#[component]
fn Harness(props: HarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    rsx! {
        GameView {}
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

/// A harness backed by a disabled provider, so every theme serves the
/// fallback set without touching the network.
pub fn setup_view_harness() -> ViewHarness {
    let app = Arc::new(TestApp {
        questions: Arc::new(QuestionService::new(None)),
    });
    let dom = VirtualDom::new_with_props(Harness, HarnessProps { app });
    ViewHarness { dom }
}
