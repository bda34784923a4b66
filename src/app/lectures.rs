use leptos::prelude::*;
use leptos_meta::Title;

use super::state::{load_lectures, use_config, use_store, ErrorNote, Loading, OfflineNote};
use crate::{api::Origin, store::LectureState};

#[component]
pub fn LecturesPage() -> impl IntoView {
    let config = use_config();
    let store = use_store::<LectureState>();
    Effect::new(move |_| load_lectures(store, config.clone()));

    let list = move || {
        let (lectures, loading, error, origin) =
            store.with(|s| (s.lectures.clone(), s.loading, s.error.clone(), s.origin));
        if let Some(e) = error {
            return view! { <ErrorNote message=e /> }.into_any();
        }
        if loading && lectures.is_empty() {
            return view! { <Loading /> }.into_any();
        }
        view! {
            {(origin == Origin::Fallback).then(|| view! { <OfflineNote /> })}
            <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                {lectures
                    .into_iter()
                    .map(|lecture| {
                        view! {
                            <a
                                href=lecture.url
                                target="_blank"
                                rel="noopener noreferrer"
                                class="block p-4 rounded-lg border border-muted/30 bg-brightBlack/20 hover:border-cyan/50"
                            >
                                <h2 class="text-lg font-bold text-blue">{lecture.title}</h2>
                                {lecture.description.map(|d| view! { <p class="text-sm mt-2">{d}</p> })}
                            </a>
                        }
                    })
                    .collect_view()}
            </div>
        }
        .into_any()
    };

    view! {
        <Title text="Lectures" />
        <div class="w-full max-w-5xl mx-auto">
            <h1 class="font-bold text-3xl text-center my-8">"Lectures"</h1>
            {list}
        </div>
    }
}
