use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use patterns_core::dataset::QuestionDataset;
use patterns_core::dataset::test_support::small_dataset;
use services::{AnalyticsService, PatternVisibilityService, ProgressService};
use storage::repository::InMemoryRepository;

use crate::context::{UiApp, build_app_context};
use crate::views::QuestionsView;

#[derive(Clone)]
struct TestApp {
    dataset: Arc<QuestionDataset>,
    progress: Arc<ProgressService>,
    visibility: Arc<PatternVisibilityService>,
    analytics: Arc<AnalyticsService>,
}

impl UiApp for TestApp {
    fn dataset(&self) -> Arc<QuestionDataset> {
        Arc::clone(&self.dataset)
    }

    fn progress(&self) -> Arc<ProgressService> {
        Arc::clone(&self.progress)
    }

    fn visibility(&self) -> Arc<PatternVisibilityService> {
        Arc::clone(&self.visibility)
    }

    fn analytics(&self) -> Arc<AnalyticsService> {
        Arc::clone(&self.analytics)
    }
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ViewHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    rsx! { QuestionsView {} }
}

pub struct QuestionsHarness {
    pub dom: VirtualDom,
    pub repo: InMemoryRepository,
}

impl QuestionsHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
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

/// Builds the questions view over a (possibly pre-seeded) in-memory
/// repository and the three-question test dataset.
pub async fn setup_questions_harness(repo: InMemoryRepository) -> QuestionsHarness {
    let dataset = Arc::new(small_dataset());
    let progress = Arc::new(
        ProgressService::load(Arc::clone(&dataset), Arc::new(repo.clone()))
            .await
            .expect("load progress"),
    );
    let visibility = Arc::new(PatternVisibilityService::new(Arc::new(repo.clone())));
    let analytics = Arc::new(AnalyticsService::disabled());

    let app = Arc::new(TestApp {
        dataset,
        progress,
        visibility,
        analytics,
    });

    let dom = VirtualDom::new_with_props(ViewHarness, ViewHarnessProps { app });

    QuestionsHarness { dom, repo }
}
