mod admin;
mod blog;
mod contact;
mod header;
mod homepage;
mod lectures;
mod projects;
mod resume;
mod state;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::config::SiteConfig;
use admin::{AdminBlogs, BlogEditor, SignIn};
use blog::{BlogHome, BlogPage};
use contact::ContactPage;
use header::{Footer, NavBar};
use homepage::HomePage;
use lectures::LecturesPage;
use projects::{ProjectDetail, ProjectsPage};
use resume::CVPage;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="font-sans">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    let config = SiteConfig::default();
    let owner = config.owner_name.clone();
    provide_context(config);
    state::provide_stores();

    view! {
        <Title formatter=move |title| format!("{owner} - {title}") />

        <Router>
            <NavBar />
            <main class="flex flex-col flex-grow items-center mx-auto w-full max-w-7xl px-4">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/projects") view=ProjectsPage />
                    <Route path=path!("/projects/:id") view=ProjectDetail />
                    <Route path=path!("/resume") view=CVPage />
                    <Route path=path!("/lectures") view=LecturesPage />
                    <Route path=path!("/blog") view=BlogHome />
                    <Route path=path!("/blog/:id") view=BlogPage />
                    <Route path=path!("/contact") view=ContactPage />
                    <Route path=path!("/signin") view=SignIn />
                    <Route path=path!("/admin/blogs") view=AdminBlogs />
                    <Route path=path!("/admin/blogs/new") view=BlogEditor />
                    <Route path=path!("/admin/blogs/:id/edit") view=BlogEditor />
                </Routes>
            </main>
            <Footer />
        </Router>
    }
}
