use codee::string::FromToStringCodec;
use leptos::{ev, prelude::*, task::spawn_local};
use leptos_use::storage::use_local_storage;

use crate::{
    api::Api,
    config::SiteConfig,
    layout::DEFAULT_VIEWPORT_WIDTH,
    store::{
        AuthState, BlogAction, BlogState, LectureAction, LectureState, ProjectAction,
        ProjectState, Reducer,
    },
};

/// Reactive handle to a state container.
pub struct Store<S: Send + Sync + 'static> {
    state: RwSignal<S>,
}

impl<S: Send + Sync + 'static> Clone for Store<S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: Send + Sync + 'static> Copy for Store<S> {}

impl<S> Store<S>
where
    S: Reducer + Default + Clone + Send + Sync + 'static,
{
    fn new() -> Self {
        Self {
            state: RwSignal::new(S::default()),
        }
    }

    pub fn dispatch(&self, action: S::Action) {
        self.state
            .update(|s| *s = std::mem::take(s).reduce(action));
    }

    pub fn with<R>(&self, f: impl FnOnce(&S) -> R) -> R {
        self.state.with(f)
    }

    pub fn with_untracked<R>(&self, f: impl FnOnce(&S) -> R) -> R {
        self.state.with_untracked(f)
    }
}

pub fn provide_stores() {
    provide_context(Store::<ProjectState>::new());
    provide_context(Store::<BlogState>::new());
    provide_context(Store::<LectureState>::new());
    provide_context(Store::<AuthState>::new());
}

pub fn use_store<S>() -> Store<S>
where
    S: Reducer + Default + Clone + Send + Sync + 'static,
{
    expect_context::<Store<S>>()
}

pub fn use_config() -> SiteConfig {
    expect_context::<SiteConfig>()
}

/// Persisted admin token and its setter.
pub fn use_token() -> (Signal<String>, WriteSignal<String>) {
    let key = use_config().token_key;
    let (token, set_token, _) = use_local_storage::<String, FromToStringCodec>(key);
    (token, set_token)
}

fn current_width() -> u32 {
    window()
        .inner_width()
        .ok()
        .and_then(|w| w.as_f64())
        .map(|w| w.round() as u32)
        .unwrap_or(DEFAULT_VIEWPORT_WIDTH)
}

/// Viewport width, kept current on resize.
pub fn use_viewport_width() -> ReadSignal<u32> {
    let (width, set_width) = signal(DEFAULT_VIEWPORT_WIDTH);
    // server render and hydration use the default width
    Effect::new(move |_| set_width.set(current_width()));
    let handle = window_event_listener(ev::resize, move |_| set_width.set(current_width()));
    on_cleanup(move || handle.remove());
    width
}

pub fn load_projects(store: Store<ProjectState>, config: SiteConfig) {
    spawn_local(async move {
        store.dispatch(ProjectAction::FetchStart);
        let res = Api::http(&config).projects().await;
        store.dispatch(ProjectAction::from_fetch(res));
    });
}

pub fn load_project(store: Store<ProjectState>, config: SiteConfig, id: u32) {
    spawn_local(async move {
        store.dispatch(ProjectAction::FetchOneStart(id));
        let res = Api::http(&config).project(id).await;
        store.dispatch(ProjectAction::from_fetch_one(id, res));
    });
}

pub fn load_blogs(store: Store<BlogState>, config: SiteConfig) {
    spawn_local(async move {
        store.dispatch(BlogAction::FetchStart);
        let res = Api::http(&config).blogs().await;
        store.dispatch(BlogAction::from_fetch(res));
    });
}

pub fn load_blog(store: Store<BlogState>, config: SiteConfig, id: u32) {
    spawn_local(async move {
        store.dispatch(BlogAction::FetchOneStart(id));
        let res = Api::http(&config).blog(id).await;
        store.dispatch(BlogAction::from_fetch_one(id, res));
    });
}

pub fn load_lectures(store: Store<LectureState>, config: SiteConfig) {
    spawn_local(async move {
        store.dispatch(LectureAction::FetchStart);
        let res = Api::http(&config).lectures().await;
        store.dispatch(LectureAction::from_fetch(res));
    });
}

#[component]
pub fn Loading() -> impl IntoView {
    view! {
        <div class="space-y-4 w-full">
            <div class="loading-skeleton h-8 rounded"></div>
            <div class="loading-skeleton h-6 rounded w-3/4"></div>
            <div class="loading-skeleton h-8 rounded"></div>
            <div class="loading-skeleton h-6 rounded w-2/3"></div>
        </div>
    }
}

#[component]
pub fn ErrorNote(message: String) -> impl IntoView {
    view! {
        <div class="p-3 rounded-md border border-red/50 bg-red/10 text-red text-sm">{message}</div>
    }
}

#[component]
pub fn OfflineNote() -> impl IntoView {
    view! {
        <div class="p-2 mb-4 rounded-md bg-yellow/10 text-yellow text-sm text-center">
            "Showing offline data - the API is temporarily unavailable."
        </div>
    }
}
