use leptos::prelude::*;
use leptos_router::{components::*, hooks::use_location};

use super::state::use_config;

const NAV_ITEMS: [(&str, &str); 6] = [
    ("/", "About"),
    ("/projects", "Projects"),
    ("/resume", "Resume"),
    ("/lectures", "Lectures"),
    ("/blog", "Blog"),
    ("/contact", "Contact"),
];

fn is_current(pathname: &str, href: &str) -> bool {
    if href == "/" {
        pathname == "/"
    } else {
        pathname == href || pathname.starts_with(&format!("{href}/"))
    }
}

#[component]
pub fn NavBar() -> impl IntoView {
    let owner = use_config().owner_name;
    let location = use_location();

    view! {
        <header class="bg-gray-800 shadow w-full">
            <div class="mx-auto px-4 sm:px-6 lg:px-8 py-4 max-w-7xl">
                <div class="flex flex-col sm:flex-row items-center justify-between gap-3">
                    <A href="/" attr:class="text-2xl font-bold text-cyan">
                        {owner}
                    </A>
                    <nav class="flex flex-wrap justify-center gap-1">
                        {NAV_ITEMS
                            .into_iter()
                            .map(|(href, label)| {
                                let pathname = location.pathname;
                                view! {
                                    <A
                                        href=href
                                        attr:class=move || {
                                            if is_current(&pathname.get(), href) {
                                                "px-3 py-2 rounded-md bg-cyan/20 text-cyan"
                                            } else {
                                                "px-3 py-2 rounded-md hover:bg-brightBlack/30 transition-colors duration-200"
                                            }
                                        }
                                    >
                                        {label}
                                    </A>
                                }
                            })
                            .collect_view()}
                    </nav>
                </div>
            </div>
        </header>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    let owner = use_config().owner_name;
    view! {
        <footer class="w-full mt-12 py-6 border-t border-muted/30 text-sm text-muted">
            <div class="flex flex-col sm:flex-row items-center justify-between gap-3 mx-auto max-w-7xl px-4">
                <span>{format!("© {owner}")}</span>
                <div class="flex gap-3 text-2xl">
                    <a
                        href="https://www.linkedin.com/in/jonathanjholloway/"
                        target="_blank"
                        rel="noopener noreferrer"
                        class="text-blue hover:text-brightBlue"
                        aria-label="LinkedIn Profile"
                    >
                        <i class="devicon-linkedin-plain"></i>
                    </a>
                    <a
                        href="https://github.com/codejoncode"
                        target="_blank"
                        rel="noopener noreferrer"
                        class="text-white hover:text-brightWhite"
                        aria-label="GitHub Profile"
                    >
                        <i class="devicon-github-plain"></i>
                    </a>
                </div>
                <span>"Built " {env!("BUILD_TIME")}</span>
            </div>
        </footer>
    }
}
