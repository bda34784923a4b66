use leptos::{ev::SubmitEvent, prelude::*, task::spawn_local};
use leptos_meta::Title;
use leptos_router::{
    components::*,
    hooks::{use_navigate, use_params_map},
    NavigateOptions,
};

use super::{
    blog::format_date,
    state::{load_blog, load_blogs, use_config, use_store, use_token, ErrorNote, Loading, Store},
};
use crate::{
    api::Api,
    auth::{self, Credentials},
    config::SiteConfig,
    models::BlogDraft,
    store::{AuthAction, AuthState, BlogAction, BlogState},
};

const INPUT_CLASS: &str = "w-full p-2 rounded-md bg-brightBlack/30 border border-muted/30 focus:border-cyan outline-none";
const BUTTON_CLASS: &str = "px-4 py-2 rounded-md border border-cyan/30 bg-cyan/20 hover:bg-cyan/30 text-cyan text-sm";

#[component]
pub fn SignIn() -> impl IntoView {
    let auth = use_store::<AuthState>();
    let (_, set_token) = use_token();
    let navigate = use_navigate();
    let credentials = RwSignal::new(Credentials::default());

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        auth.dispatch(AuthAction::LoginStart);
        match auth::sign_in(&credentials.get_untracked()) {
            Ok(user) => {
                set_token.set(user.token.clone().unwrap_or_default());
                auth.dispatch(AuthAction::LoginSuccess(user));
                navigate("/admin/blogs", NavigateOptions::default());
            }
            Err(e) => auth.dispatch(AuthAction::LoginFailure(e.to_string())),
        }
    };

    view! {
        <Title text="Admin Login" />
        <div class="w-full max-w-sm mx-auto my-12">
            <h1 class="font-bold text-3xl text-center mb-8">"Admin Login"</h1>
            {move || auth.with(|s| s.error.clone()).map(|e| view! { <ErrorNote message=e /> })}
            <form class="space-y-4 mt-4" on:submit=on_submit>
                <div>
                    <label class="block text-sm mb-1" for="username">"Username"</label>
                    <input
                        id="username"
                        type="text"
                        class=INPUT_CLASS
                        prop:value=move || credentials.with(|c| c.username.clone())
                        on:input=move |ev| credentials.update(|c| c.username = event_target_value(&ev))
                    />
                </div>
                <div>
                    <label class="block text-sm mb-1" for="password">"Password"</label>
                    <input
                        id="password"
                        type="password"
                        class=INPUT_CLASS
                        prop:value=move || credentials.with(|c| c.password.clone())
                        on:input=move |ev| credentials.update(|c| c.password = event_target_value(&ev))
                    />
                </div>
                <div class="text-center">
                    <button type="submit" class=BUTTON_CLASS disabled=move || auth.with(|s| s.loading)>
                        "Sign In"
                    </button>
                </div>
            </form>
        </div>
    }
}

fn confirm_delete() -> bool {
    window()
        .confirm_with_message("Delete this post? This cannot be undone.")
        .unwrap_or(false)
}

/// Deletes a post and reports whether it succeeded.
async fn delete_post(store: Store<BlogState>, config: SiteConfig, token: String, id: u32) -> bool {
    let token = match auth::require_token(&token) {
        Ok(t) => t.to_string(),
        Err(e) => {
            store.dispatch(BlogAction::WriteFailure(e.to_string()));
            return false;
        }
    };
    match Api::http(&config).delete_blog(&token, id).await {
        Ok(id) => {
            store.dispatch(BlogAction::Deleted(id));
            true
        }
        Err(e) => {
            store.dispatch(BlogAction::WriteFailure(e.to_string()));
            false
        }
    }
}

#[component]
fn SignInPrompt() -> impl IntoView {
    view! {
        <div class="text-center my-12">
            <p class="mb-4">{auth::AuthError::NotSignedIn.to_string()}</p>
            <A href="/signin" attr:class=BUTTON_CLASS>
                "Sign In"
            </A>
        </div>
    }
}

#[component]
pub fn AdminBlogs() -> impl IntoView {
    let config = use_config();
    let store = use_store::<BlogState>();
    let auth = use_store::<AuthState>();
    let (token, set_token) = use_token();

    {
        let config = config.clone();
        Effect::new(move |_| load_blogs(store, config.clone()));
    }

    let sign_out = move |_| {
        set_token.set(String::new());
        auth.dispatch(AuthAction::Logout);
    };

    let list = move || {
        let (blogs, loading, error) =
            store.with(|s| (s.blogs.clone(), s.loading, s.error.clone()));
        if loading && blogs.is_empty() {
            return view! { <Loading /> }.into_any();
        }
        view! {
            {error.map(|e| view! { <ErrorNote message=e /> })}
            <table class="w-full text-left text-sm mt-4">
                <thead>
                    <tr class="border-b border-muted/30">
                        <th class="py-2">"Title"</th>
                        <th class="py-2">"Created"</th>
                        <th class="py-2"></th>
                    </tr>
                </thead>
                <tbody>
                    {blogs
                        .into_iter()
                        .map(|blog| {
                            let id = blog.id;
                            let date = format_date(&blog);
                            let config = config.clone();
                            view! {
                                <tr class="border-b border-muted/10">
                                    <td class="py-2">{blog.title}</td>
                                    <td class="py-2">{date}</td>
                                    <td class="py-2 flex gap-3 justify-end">
                                        <A href=format!("/admin/blogs/{id}/edit") attr:class="text-cyan">
                                            "Edit"
                                        </A>
                                        <button
                                            class="text-red"
                                            on:click=move |_| {
                                                if !confirm_delete() {
                                                    return;
                                                }
                                                let config = config.clone();
                                                let token = token.get_untracked();
                                                spawn_local(async move {
                                                    delete_post(store, config, token, id).await;
                                                });
                                            }
                                        >
                                            "Delete"
                                        </button>
                                    </td>
                                </tr>
                            }
                        })
                        .collect_view()}
                </tbody>
            </table>
        }
        .into_any()
    };

    view! {
        <Title text="Manage Blogs" />
        <div class="w-full max-w-4xl mx-auto my-8">
            <Show when=move || !token.get().is_empty() fallback=|| view! { <SignInPrompt /> }>
                <div class="flex items-center justify-between">
                    <h1 class="font-bold text-3xl">"Blog Posts"</h1>
                    <div class="flex gap-2">
                        <A href="/admin/blogs/new" attr:class=BUTTON_CLASS>
                            "New Post"
                        </A>
                        <button class="px-4 py-2 text-sm text-muted" on:click=sign_out>
                            "Sign Out"
                        </button>
                    </div>
                </div>
                {list.clone()}
            </Show>
        </div>
    }
}

#[component]
pub fn BlogEditor() -> impl IntoView {
    let config = use_config();
    let store = use_store::<BlogState>();
    let (token, _) = use_token();
    let navigate = use_navigate();
    let params = use_params_map();
    let id = Memo::new(move |_| params.get().get("id").and_then(|s| s.parse::<u32>().ok()));
    let draft = RwSignal::new(BlogDraft::default());
    let (prefilled, set_prefilled) = signal(false);
    let (saving, set_saving) = signal(false);
    let (error, set_error) = signal(None::<String>);

    {
        let config = config.clone();
        Effect::new(move |_| {
            let Some(id) = id.get() else {
                return;
            };
            set_prefilled.set(false);
            let cached = store.with_untracked(|s| s.blogs.iter().find(|b| b.id == id).cloned());
            match cached {
                Some(blog) => {
                    draft.set(BlogDraft::from(&blog));
                    set_prefilled.set(true);
                }
                None => load_blog(store, config.clone(), id),
            }
        });
    }
    Effect::new(move |_| {
        let (Some(id), false) = (id.get(), prefilled.get()) else {
            return;
        };
        if let Some(blog) = store.with(|s| s.selected.found().filter(|b| b.id == id).cloned()) {
            draft.set(BlogDraft::from(&blog));
            set_prefilled.set(true);
        }
    });

    let on_submit = {
        let config = config.clone();
        let navigate = navigate.clone();
        move |ev: SubmitEvent| {
            ev.prevent_default();
            let stored = token.get_untracked();
            let token = match auth::require_token(&stored) {
                Ok(t) => t.to_string(),
                Err(e) => {
                    set_error.set(Some(e.to_string()));
                    return;
                }
            };
            let current = draft.get_untracked();
            if current.title.trim().is_empty() || current.message.trim().is_empty() {
                set_error.set(Some("Title and message are required".to_string()));
                return;
            }
            let editing = id.get_untracked();
            let config = config.clone();
            let navigate = navigate.clone();
            set_saving.set(true);
            set_error.set(None);
            spawn_local(async move {
                let api = Api::http(&config);
                let action = match editing {
                    Some(id) => BlogAction::from_write(
                        api.edit_blog(id, &token, &current).await,
                        BlogAction::Edited,
                    ),
                    None => BlogAction::from_write(
                        api.create_blog(&token, &current).await,
                        BlogAction::Created,
                    ),
                };
                let failure = match &action {
                    BlogAction::WriteFailure(e) => Some(e.clone()),
                    _ => None,
                };
                store.dispatch(action);
                set_saving.set(false);
                match failure {
                    Some(e) => set_error.set(Some(e)),
                    None => navigate("/admin/blogs", NavigateOptions::default()),
                }
            });
        }
    };

    let on_delete = move |_| {
        let Some(id) = id.get_untracked() else {
            return;
        };
        if !confirm_delete() {
            return;
        }
        let config = config.clone();
        let navigate = navigate.clone();
        let token = token.get_untracked();
        spawn_local(async move {
            if delete_post(store, config, token, id).await {
                navigate("/admin/blogs", NavigateOptions::default());
            } else {
                set_error.set(store.with_untracked(|s| s.error.clone()));
            }
        });
    };

    let heading = move || if id.get().is_some() { "Edit Post" } else { "New Post" };

    view! {
        <Title text="Edit Blog" />
        <div class="w-full max-w-3xl mx-auto my-8">
            <Show when=move || !token.get().is_empty() fallback=|| view! { <SignInPrompt /> }>
                <h1 class="font-bold text-3xl mb-6">{heading}</h1>
                {move || error.get().map(|e| view! { <ErrorNote message=e /> })}
                <form class="space-y-4 mt-4" on:submit=on_submit.clone()>
                    <div>
                        <label class="block text-sm mb-1" for="title">"Title"</label>
                        <input
                            id="title"
                            type="text"
                            class=INPUT_CLASS
                            prop:value=move || draft.with(|d| d.title.clone())
                            on:input=move |ev| draft.update(|d| d.title = event_target_value(&ev))
                        />
                    </div>
                    <div>
                        <label class="block text-sm mb-1" for="image">"Image URL"</label>
                        <input
                            id="image"
                            type="url"
                            class=INPUT_CLASS
                            prop:value=move || draft.with(|d| d.image.clone().unwrap_or_default())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                draft.update(|d| d.image = (!value.trim().is_empty()).then_some(value));
                            }
                        />
                    </div>
                    <div>
                        <label class="block text-sm mb-1" for="message">
                            "Message (separate paragraphs with ...)"
                        </label>
                        <textarea
                            id="message"
                            rows="14"
                            class=INPUT_CLASS
                            prop:value=move || draft.with(|d| d.message.clone())
                            on:input=move |ev| draft.update(|d| d.message = event_target_value(&ev))
                        ></textarea>
                    </div>
                    <div class="flex justify-between">
                        <A href="/admin/blogs" attr:class="px-4 py-2 text-sm text-muted">
                            "Cancel"
                        </A>
                        <div class="flex gap-2">
                            <button
                                type="button"
                                class=move || {
                                    if id.get().is_some() { "px-4 py-2 text-sm text-red" } else { "hidden" }
                                }
                                on:click=on_delete.clone()
                            >
                                "Delete"
                            </button>
                            <button type="submit" class=BUTTON_CLASS disabled=move || saving.get()>
                                "Save"
                            </button>
                        </div>
                    </div>
                </form>
            </Show>
        </div>
    }
}
