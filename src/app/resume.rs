use leptos::{ev::SubmitEvent, prelude::*};
use leptos_meta::Title;

use super::{
    contact::FieldError,
    state::{use_config, use_viewport_width},
};
use crate::{
    contact::{Field, Validation},
    resume::{
        content, document_path, find_resume, is_compact, pdf_filename, share_link, ResumeKind,
        ResumeShare, RESUME_OPTIONS,
    },
};

const BUTTON_CLASS: &str = "px-4 py-2 rounded-md border border-cyan/30 bg-cyan/20 hover:bg-cyan/30 text-cyan text-sm text-center";

#[component]
pub fn CVPage() -> impl IntoView {
    let width = use_viewport_width();
    let (active, set_active) = signal(ResumeKind::default());
    let (sharing, set_sharing) = signal(false);

    let selector = move || {
        let current = active.get();
        RESUME_OPTIONS
            .iter()
            .map(|option| {
                let kind = option.kind;
                let class = if kind == current {
                    "w-full text-left p-3 rounded-md border border-cyan bg-cyan/10"
                } else {
                    "w-full text-left p-3 rounded-md border border-muted/30 hover:border-cyan/50"
                };
                view! {
                    <button class=class on:click=move |_| set_active.set(kind)>
                        <div class="font-bold">{option.title}</div>
                        <div class="text-xs text-muted">{option.description}</div>
                    </button>
                }
            })
            .collect_view()
    };

    let actions = move || {
        let resume = find_resume(active.get());
        let docx = resume.map(|r| r.filename).unwrap_or_default();
        let pdf = pdf_filename(resume);
        view! {
            <div class="flex flex-wrap gap-2">
                <a href=document_path(docx) target="_blank" rel="noopener noreferrer" class=BUTTON_CLASS>
                    "View Word"
                </a>
                <a href=document_path(docx) download=docx class=BUTTON_CLASS>
                    "Download Word"
                </a>
                <a href=document_path(&pdf) download=pdf.clone() class=BUTTON_CLASS>
                    "Download PDF"
                </a>
                <button class=BUTTON_CLASS on:click=move |_| set_sharing.set(true)>
                    "Email Resume"
                </button>
                <button
                    class=BUTTON_CLASS
                    on:click=move |_| {
                        if let Err(e) = window().print() {
                            log::error!("Print failed: {e:?}");
                        }
                    }
                >
                    "Print"
                </button>
            </div>
        }
    };

    view! {
        <Title text="Resume" />
        <div class="w-full max-w-6xl mx-auto">
            <h1 class="font-bold text-3xl text-center my-8">"Resume"</h1>
            <div class=move || {
                if is_compact(width.get()) {
                    "flex flex-col gap-6"
                } else {
                    "grid grid-cols-3 gap-8"
                }
            }>
                <aside class="space-y-3">{selector} {actions}</aside>
                <div class="col-span-2">
                    {move || view! { <ResumeBody kind=active.get() /> }}
                </div>
            </div>
            <Show when=move || sharing.get()>
                <ShareForm kind=active.get_untracked() on_close=move || set_sharing.set(false) />
            </Show>
        </div>
    }
}

#[component]
fn ResumeBody(kind: ResumeKind) -> impl IntoView {
    let owner = use_config().owner_name;
    let resume = content(kind);
    view! {
        <div class="p-8 bg-[#FFFFFF] text-background leading-snug shadow-2xl rounded-lg border border-muted/20">
            <h2 class="text-2xl font-bold">{owner}</h2>
            <h3 class="text-lg font-semibold text-blue mb-4">{resume.headline}</h3>
            <p class="text-sm mb-6">{resume.summary}</p>
            <h4 class="font-bold uppercase border-b border-primary mb-2">"Skills"</h4>
            <dl class="text-sm mb-6 space-y-1">
                {resume
                    .skills
                    .iter()
                    .map(|(area, list)| {
                        view! {
                            <div class="flex gap-2">
                                <dt class="font-semibold">{*area}":"</dt>
                                <dd>{*list}</dd>
                            </div>
                        }
                    })
                    .collect_view()}
            </dl>
            <h4 class="font-bold uppercase border-b border-primary mb-2">"Experience"</h4>
            {resume
                .experience
                .iter()
                .map(|role| {
                    view! {
                        <section class="mb-4">
                            <div class="flex justify-between">
                                <span class="font-semibold">
                                    {role.title} " - " {role.organization}
                                </span>
                                <span class="text-sm">{role.period}</span>
                            </div>
                            <ul class="list-disc pl-5 text-sm">
                                {role.highlights.iter().map(|h| view! { <li>{*h}</li> }).collect_view()}
                            </ul>
                        </section>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn ShareForm(kind: ResumeKind, on_close: impl Fn() + Clone + Send + Sync + 'static) -> impl IntoView {
    let config = use_config();
    let share = RwSignal::new(ResumeShare::default());
    let validation = RwSignal::new(None::<Validation>);
    let input_class = "w-full p-2 rounded-md bg-brightBlack/30 border border-muted/30 text-foreground";

    let close = on_close.clone();
    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let current = share.get_untracked();
        let result = current.validate();
        let valid = result.is_valid;
        validation.set(Some(result));
        let Some(resume) = find_resume(kind).filter(|_| valid) else {
            return;
        };
        let origin = window().location().origin().unwrap_or_default();
        let link = share_link(&current, resume, &config.owner_name, &origin);
        if let Err(e) = window().location().set_href(&link) {
            log::error!("Failed to open mail client: {e:?}");
        }
        close();
    };

    view! {
        <div class="fixed inset-0 flex items-center justify-center bg-background/80">
            <form class="w-full max-w-md p-6 space-y-4 rounded-lg bg-brightBlack" on:submit=on_submit>
                <h2 class="text-xl font-bold">"Email Resume"</h2>
                <div>
                    <label class="block text-sm mb-1">"Recipient email"</label>
                    <input
                        type="email"
                        class=input_class
                        prop:value=move || share.with(|s| s.to_email.clone())
                        on:input=move |ev| share.update(|s| s.to_email = event_target_value(&ev))
                    />
                    <FieldError validation=validation.into() field=Field::Email />
                </div>
                <div>
                    <label class="block text-sm mb-1">"Your name"</label>
                    <input
                        type="text"
                        class=input_class
                        prop:value=move || share.with(|s| s.from_name.clone())
                        on:input=move |ev| share.update(|s| s.from_name = event_target_value(&ev))
                    />
                    <FieldError validation=validation.into() field=Field::Name />
                </div>
                <div>
                    <label class="block text-sm mb-1">"Message"</label>
                    <textarea
                        rows="3"
                        class=input_class
                        prop:value=move || share.with(|s| s.message.clone())
                        on:input=move |ev| share.update(|s| s.message = event_target_value(&ev))
                    ></textarea>
                </div>
                <div class="flex justify-end gap-2">
                    <button type="button" class="px-4 py-2 text-sm" on:click=move |_| on_close()>
                        "Cancel"
                    </button>
                    <button type="submit" class=BUTTON_CLASS>
                        "Send"
                    </button>
                </div>
            </form>
        </div>
    }
}
