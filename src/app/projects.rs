use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::{components::*, hooks::use_params_map};

use super::state::{
    load_project, load_projects, use_config, use_store, use_viewport_width, ErrorNote, Loading,
    OfflineNote,
};
use crate::{
    api::Origin,
    filter::{self, filter_projects, is_token_active, ALL},
    layout::{grid_class, menu_item_class, responsive_columns},
    models::Project,
    store::{Detail, ProjectState},
};

#[component]
pub fn ProjectsPage() -> impl IntoView {
    let config = use_config();
    let max_columns = config.max_columns;
    let store = use_store::<ProjectState>();
    let width = use_viewport_width();
    let (active, set_active) = signal(ALL.to_string());

    Effect::new(move |_| load_projects(store, config.clone()));

    let columns = Memo::new(move |_| responsive_columns(width.get(), max_columns));
    let grid = Memo::new(move |_| {
        store.with(|s| filter_projects(&s.projects, columns.get(), &active.get()))
    });

    let menu = move || {
        let width = width.get();
        let active = active.get();
        let tokens = grid
            .get()
            .map(|g| g.tokens)
            .unwrap_or_default();
        std::iter::once(ALL.to_string())
            .chain(tokens)
            .map(|token| {
                let class = menu_item_class(is_token_active(&token, &active), width);
                let label = token.clone();
                view! {
                    <button class=class on:click=move |_| set_active.set(token.clone())>
                        {label}
                    </button>
                }
            })
            .collect_view()
    };

    let top_stack = move || {
        store.with(|s| {
            filter::most_used_technologies(&s.projects, 5)
                .into_iter()
                .map(|(tech, count)| format!("{tech} ({count})"))
                .collect::<Vec<_>>()
                .join(" · ")
        })
    };

    let body = move || {
        let (loading, error, origin, empty) = store.with(|s| {
            (
                s.loading,
                s.error.clone(),
                s.origin,
                s.projects.is_empty(),
            )
        });
        if let Some(e) = error {
            return view! { <ErrorNote message=e /> }.into_any();
        }
        if loading && empty {
            return view! { <Loading /> }.into_any();
        }
        let grid = match grid.get() {
            Ok(g) => g,
            Err(e) => return view! { <ErrorNote message=e.to_string() /> }.into_any(),
        };
        let class = grid_class(columns.get());
        view! {
            {(origin == Origin::Fallback).then(|| view! { <OfflineNote /> })}
            {grid.is_empty().then(|| view! { <p class="text-center text-muted">"No projects match this filter."</p> })}
            <div class="space-y-6">
                {grid
                    .rows
                    .into_iter()
                    .map(|row| {
                        view! {
                            <div class=class>
                                {row
                                    .into_iter()
                                    .map(|project| view! { <ProjectCard project=project /> })
                                    .collect_view()}
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        }
        .into_any()
    };

    view! {
        <Title text="Projects" />
        <div class="w-full max-w-6xl mx-auto">
            <h1 class="font-bold text-3xl text-center my-8">"Project Showcase"</h1>
            <p class="text-center text-sm text-muted mb-4">
                "Most used: " {top_stack}
            </p>
            <nav class="flex flex-wrap justify-center mb-8">{menu}</nav>
            {body}
        </div>
    }
}

#[component]
fn ProjectCard(project: Project) -> impl IntoView {
    let href = format!("/projects/{}", project.id);
    view! {
        <article class="flex flex-col bg-brightBlack/20 rounded-lg border border-muted/30 overflow-hidden hover:border-cyan/50 transition-colors duration-200">
            <img src=project.image alt=project.title.clone() class="w-full h-40 object-cover" />
            <div class="flex flex-col flex-grow p-4 gap-2">
                <A href=href attr:class="text-lg font-bold text-blue hover:text-cyan">
                    {project.title}
                </A>
                {project
                    .status
                    .map(|s| {
                        view! {
                            <span class="self-start rounded px-2 py-0.5 text-xs bg-green/20 text-green">
                                {s.label()}
                            </span>
                        }
                    })}
                <p class="text-sm flex-grow">{project.description}</p>
                <div class="flex flex-wrap gap-1">
                    {project
                        .technologies
                        .into_iter()
                        .map(|t| {
                            view! {
                                <span class="rounded-md px-2 py-1 bg-brightBlack text-xs">{t}</span>
                            }
                        })
                        .collect_view()}
                </div>
                <ProjectLinks github=project.github_url deployment=project.deployment_url plan=None />
            </div>
        </article>
    }
}

#[component]
fn ProjectLinks(
    github: String,
    deployment: Option<String>,
    plan: Option<String>,
) -> impl IntoView {
    let link_class = "text-sm text-cyan hover:underline";
    view! {
        <div class="flex flex-wrap gap-4">
            <a href=github target="_blank" rel="noopener noreferrer" class=link_class>
                <i class="devicon-github-plain"></i>
                " Code"
            </a>
            {deployment
                .map(|url| {
                    view! {
                        <a href=url target="_blank" rel="noopener noreferrer" class=link_class>
                            "Live demo"
                        </a>
                    }
                })}
            {plan
                .map(|url| {
                    view! {
                        <a href=url target="_blank" rel="noopener noreferrer" class=link_class>
                            "Project plan"
                        </a>
                    }
                })}
        </div>
    }
}

#[component]
pub fn ProjectDetail() -> impl IntoView {
    let config = use_config();
    let store = use_store::<ProjectState>();
    let params = use_params_map();
    let id = Memo::new(move |_| {
        params
            .get()
            .get("id")
            .and_then(|s| s.parse::<u32>().ok())
    });

    {
        let config = config.clone();
        Effect::new(move |_| {
            if store.with_untracked(|s| s.projects.is_empty()) {
                load_projects(store, config.clone());
            }
        });
    }
    Effect::new(move |_| {
        if let Some(id) = id.get() {
            load_project(store, config.clone(), id);
        }
    });

    let body = move || {
        let Some(wanted) = id.get() else {
            return view! { <NotFound /> }.into_any();
        };
        let (selected, loading, error) =
            store.with(|s| (s.selected.clone(), s.loading, s.error.clone()));
        match selected {
            Detail::Found(project) if project.id == wanted => {
                let related = store.with(|s| {
                    filter::related_projects(&s.projects, wanted, 3)
                        .into_iter()
                        .cloned()
                        .collect::<Vec<_>>()
                });
                view! { <ProjectBody project=project related=related /> }.into_any()
            }
            Detail::NotFound(missing) if missing == wanted && !loading => view! { <NotFound /> }.into_any(),
            _ => match error {
                Some(e) if !loading => view! { <ErrorNote message=e /> }.into_any(),
                _ => view! { <Loading /> }.into_any(),
            },
        }
    };

    view! {
        <Title text="Project" />
        <div class="w-full max-w-4xl mx-auto my-8">
            <A href="/projects" attr:class="text-sm text-cyan hover:underline">
                "← All projects"
            </A>
            {body}
        </div>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="text-center my-12">
            <h2 class="text-2xl font-bold mb-2">"Project not found"</h2>
            <p class="text-muted">"It may have been renamed or removed."</p>
        </div>
    }
}

#[component]
fn ProjectBody(project: Project, related: Vec<Project>) -> impl IntoView {
    let features = project
        .feature_list()
        .into_iter()
        .map(str::to_string)
        .collect::<Vec<_>>();
    let focus = project.technical_focus.clone();
    let highlights = project.code_highlights.clone();
    view! {
        <article class="mt-4 space-y-6">
            <header class="space-y-2">
                <h1 class="text-3xl font-bold">{project.title.clone()}</h1>
                <div class="flex flex-wrap items-center gap-3 text-sm">
                    <span class="rounded px-2 py-1 bg-blue/20 text-blue">
                        {project.category.as_str()}
                    </span>
                    {project
                        .status
                        .map(|s| {
                            view! {
                                <span class="rounded px-2 py-1 bg-green/20 text-green">
                                    {s.label()}
                                </span>
                            }
                        })}
                </div>
            </header>
            <img src=project.image.clone() alt=project.title.clone() class="w-full rounded-lg" />
            <p class="text-base leading-relaxed">{project.description.clone()}</p>
            <FeatureList title="Features" items=features />
            <FeatureList title="Technical Focus" items=focus />
            <FeatureList title="Code Highlights" items=highlights />
            {project
                .learning_outcomes
                .clone()
                .map(|l| {
                    view! {
                        <section>
                            <h2 class="text-xl font-bold mb-2">"Learning Outcomes"</h2>
                            <p class="text-sm">{l}</p>
                        </section>
                    }
                })}
            {project
                .gif_play
                .clone()
                .map(|src| {
                    view! {
                        <iframe src=src class="w-full h-72 rounded-lg" title="Project demo"></iframe>
                    }
                })}
            <ProjectLinks
                github=project.github_url.clone()
                deployment=project.deployment_url.clone()
                plan=project.plan_url.clone()
            />
            {(!related.is_empty())
                .then(|| {
                    view! {
                        <section>
                            <h2 class="text-xl font-bold mb-2">"Related Projects"</h2>
                            <ul class="list-disc pl-6">
                                {related
                                    .into_iter()
                                    .map(|p| {
                                        view! {
                                            <li>
                                                <A href=format!("/projects/{}", p.id) attr:class="text-cyan">
                                                    {p.title}
                                                </A>
                                            </li>
                                        }
                                    })
                                    .collect_view()}
                            </ul>
                        </section>
                    }
                })}
        </article>
    }
}

#[component]
fn FeatureList(title: &'static str, items: Vec<String>) -> impl IntoView {
    (!items.is_empty()).then(|| {
        view! {
            <section>
                <h2 class="text-xl font-bold mb-2">{title}</h2>
                <ul class="list-disc pl-6 space-y-1 text-sm">
                    {items.into_iter().map(|i| view! { <li>{i}</li> }).collect_view()}
                </ul>
            </section>
        }
    })
}
