use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::{components::*, hooks::use_params_map};

use super::state::{load_blog, load_blogs, use_config, use_store, ErrorNote, Loading, OfflineNote};
use crate::{
    api::Origin,
    models::Blog,
    store::{BlogState, Detail},
};

pub(super) fn format_date(blog: &Blog) -> String {
    blog.created_on()
        .map(|d| d.format("%b %e, %Y").to_string())
        .unwrap_or_default()
}

#[component]
pub fn BlogHome() -> impl IntoView {
    let config = use_config();
    let store = use_store::<BlogState>();
    Effect::new(move |_| load_blogs(store, config.clone()));

    let posts = move || {
        let (blogs, loading, error, origin) =
            store.with(|s| (s.blogs.clone(), s.loading, s.error.clone(), s.origin));
        if let Some(e) = error {
            return view! { <ErrorNote message=e /> }.into_any();
        }
        if loading && blogs.is_empty() {
            return view! { <Loading /> }.into_any();
        }
        view! {
            {(origin == Origin::Fallback).then(|| view! { <OfflineNote /> })}
            <ul class="space-y-8">
                {blogs
                    .into_iter()
                    .map(|blog| {
                        let date = format_date(&blog);
                        let preview = blog.paragraphs().first().map(|p| p.to_string()).unwrap_or_default();
                        view! {
                            <li class="pb-6 border-b border-muted/30">
                                <A
                                    href=format!("/blog/{}", blog.id)
                                    attr:class="text-2xl font-bold text-blue hover:text-cyan"
                                >
                                    {blog.title}
                                </A>
                                <div class="text-sm text-muted my-1">{date}</div>
                                <p class="text-base">{preview}</p>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        }
        .into_any()
    };

    view! {
        <Title text="Blog" />
        <div class="w-full max-w-4xl mx-auto">
            <h1 class="font-bold text-3xl text-center my-8">"Blog"</h1>
            {posts}
        </div>
    }
}

#[component]
pub fn BlogPage() -> impl IntoView {
    let config = use_config();
    let store = use_store::<BlogState>();
    let params = use_params_map();
    let id = Memo::new(move |_| params.get().get("id").and_then(|s| s.parse::<u32>().ok()));

    Effect::new(move |_| {
        if let Some(id) = id.get() {
            load_blog(store, config.clone(), id);
        }
    });

    let post = move || {
        let Some(wanted) = id.get() else {
            return view! { <PostNotFound /> }.into_any();
        };
        let (selected, loading, error) =
            store.with(|s| (s.selected.clone(), s.loading, s.error.clone()));
        match selected {
            Detail::Found(blog) if blog.id == wanted => view! { <Post blog=blog /> }.into_any(),
            Detail::NotFound(missing) if missing == wanted && !loading => view! { <PostNotFound /> }.into_any(),
            _ => match error {
                Some(e) if !loading => view! { <ErrorNote message=e /> }.into_any(),
                _ => view! { <Loading /> }.into_any(),
            },
        }
    };

    view! {
        <Title text="Blog" />
        <div class="w-full max-w-4xl mx-auto my-8">
            <A href="/blog" attr:class="text-sm text-cyan hover:underline">
                "← All posts"
            </A>
            {post}
        </div>
    }
}

#[component]
fn PostNotFound() -> impl IntoView {
    view! {
        <div class="text-center my-12">
            <h2 class="text-2xl font-bold mb-2">"Post not found"</h2>
        </div>
    }
}

#[component]
fn Post(blog: Blog) -> impl IntoView {
    let date = format_date(&blog);
    let paragraphs = blog
        .paragraphs()
        .into_iter()
        .map(str::to_string)
        .collect::<Vec<_>>();
    view! {
        <article class="mt-4">
            <h1 class="text-3xl font-bold mb-2">{blog.title.clone()}</h1>
            <div class="text-sm text-muted mb-6">{date}</div>
            {blog
                .image
                .clone()
                .map(|src| view! { <img src=src alt=blog.title.clone() class="w-full rounded-lg mb-6" /> })}
            {paragraphs
                .into_iter()
                .map(|p| view! { <p class="text-base leading-relaxed mb-4">{p}</p> })
                .collect_view()}
        </article>
    }
}
