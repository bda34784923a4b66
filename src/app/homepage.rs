use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::*;

use super::state::use_config;

#[component]
pub fn HomePage() -> impl IntoView {
    let config = use_config();
    let email = config.contact_email.clone();
    view! {
        <Title text="About Me" />
        <div class="max-w-6xl mx-auto page-content">
            <h1 class="text-3xl my-8 text-center font-bold section-content">
                {format!("Hi, I'm {} - Full Stack Software Engineer", config.owner_name)}
            </h1>
            <section class="flex flex-col lg:flex-row gap-8 lg:gap-12 section-content">
                <div class="w-full lg:max-w-2xl">
                    <h2 class="text-xl font-bold my-8">"What I Build"</h2>
                    <p class="text-base mb-4 leading-relaxed">
                        "I build web applications end to end: React front ends, Node and Python services, and the PostgreSQL and MongoDB stores behind them."
                    </p>
                    <p class="text-base mb-4 leading-relaxed">
                        "Most recently I led "
                        <strong>"Larkist"</strong>
                        ", an AI-powered platform that detects online bullying and curates healthier timelines, with a cross-functional team of engineers and data scientists."
                    </p>
                    <p class="text-base mb-2">
                        "Browse the " <A href="/projects" attr:class="text-cyan">"project showcase"</A>
                        " or read the " <A href="/resume" attr:class="text-cyan">"resume"</A> "."
                    </p>
                </div>
                <div class="w-full lg:max-w-2xl">
                    <h2 class="text-xl font-bold my-8">"Teaching & Writing"</h2>
                    <p class="text-base mb-4 leading-relaxed">
                        "I enjoy explaining what I learn. The "
                        <A href="/lectures" attr:class="text-cyan">"lectures"</A>
                        " cover React, TypeScript and testing, and the "
                        <A href="/blog" attr:class="text-cyan">"blog"</A>
                        " collects notes on architecture and state management."
                    </p>
                    <div class="bg-brightBlack/30 p-4 rounded-md mb-4">
                        <p class="text-sm font-medium text-green mb-2">"What drives me:"</p>
                        <ul class="text-sm space-y-1">
                            <li>"Shipping products people actually use"</li>
                            <li>"Mentoring engineers and growing teams"</li>
                            <li>"Turning messy requirements into clear plans"</li>
                        </ul>
                    </div>
                </div>
            </section>
            <section class="flex justify-center items-center mt-8 section-content">
                <div class="w-full max-w-2xl text-center">
                    <h3 class="text-xl font-bold my-8">"Let's Connect"</h3>
                    <div class="bg-brightBlack/30 p-6 rounded-lg border border-muted/30">
                        <p class="mb-4">
                            "Whether you have a project, a role or a question, I'd love to hear from you."
                        </p>
                        <div class="flex flex-col sm:flex-row items-center justify-center gap-4 mt-6">
                            <A
                                href="/contact"
                                attr:class="bg-cyan/20 hover:bg-cyan/30 text-cyan px-6 py-3 rounded-md font-medium transition-all duration-200 border border-cyan/30"
                            >
                                "Send a message"
                            </A>
                            <a href=format!("mailto:{email}") class="text-muted hover:text-foreground">
                                {email.clone()}
                            </a>
                        </div>
                    </div>
                </div>
            </section>
        </div>
    }
}
