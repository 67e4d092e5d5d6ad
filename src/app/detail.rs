use leptos::{either::Either, prelude::*};
use leptos_meta::Title;
use leptos_router::{components::A, hooks::use_params_map};

use super::carousel::MediaCarousel;
use crate::lang::Language;
use crate::projects::{project_by_id, Project};

#[component]
pub fn ProjectPage() -> impl IntoView {
    let params = use_params_map();
    let project = move || {
        params
            .get()
            .get("id")
            .and_then(|s| s.parse::<u32>().ok())
            .and_then(project_by_id)
    };

    view! {
        <div class="max-w-4xl mx-auto w-full">
            {move || match project() {
                None => Either::Left(view! { <NotFound /> }),
                Some(p) => Either::Right(view! { <ProjectDetail project=p.clone() /> }),
            }}
        </div>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <Title text="Not Found" />
        <div class="flex flex-col items-center justify-center h-[60vh]">
            <h2 class="text-3xl font-bold text-fuchsia-400 mb-4">"404 - Project Not Found"</h2>
            <A href="/" attr:class="text-cyan-400 hover:underline">
                "Return to Home"
            </A>
        </div>
    }
}

#[component]
fn ProjectDetail(project: Project) -> impl IntoView {
    let lang = expect_context::<RwSignal<Language>>();
    let description = project.description.clone();

    view! {
        <Title text=project.title.clone() />
        <A
            href="/"
            attr:class="inline-flex items-center gap-2 text-gray-400 hover:text-cyan-400 mb-8 transition-colors"
        >
            <svg
                xmlns="http://www.w3.org/2000/svg"
                width="20"
                height="20"
                viewBox="0 0 24 24"
                fill="none"
                stroke="currentColor"
                stroke-width="2"
                stroke-linecap="round"
                stroke-linejoin="round"
            >
                <line x1="19" y1="12" x2="5" y2="12" />
                <polyline points="12 19 5 12 12 5" />
            </svg>
            "Back to Works"
        </A>

        <div class="bg-zinc-900 border border-gray-800 p-6 relative overflow-hidden">
            <div class="absolute top-0 right-0 w-8 h-8 border-t-2 border-r-2 border-fuchsia-400 z-20"></div>
            <div class="absolute bottom-0 left-0 w-8 h-8 border-b-2 border-l-2 border-fuchsia-400 z-20"></div>

            <div class="aspect-video mb-8 overflow-hidden bg-black relative rounded-lg border border-gray-800">
                <MediaCarousel
                    images=project.image_urls.clone()
                    video_url=project.video_url.clone()
                    title=project.title.clone()
                    keyboard=true
                />
            </div>

            <h1 class="text-4xl md:text-5xl font-bold text-white mb-4">{project.title.clone()}</h1>

            <div class="flex flex-wrap gap-3 mb-6">
                {project
                    .technologies
                    .iter()
                    .map(|tech| {
                        view! {
                            <span class="px-3 py-1 bg-zinc-950 border border-cyan-400 text-cyan-400 text-sm font-bold">
                                {tech.clone()}
                            </span>
                        }
                    })
                    .collect_view()}
            </div>

            <p class="text-gray-300 text-lg leading-relaxed mb-8">
                {move || description.get(lang.get()).to_string()}
            </p>

            <div class="flex flex-wrap gap-4">
                {project
                    .source_url
                    .clone()
                    .map(|url| {
                        view! {
                            <a
                                href=url
                                target="_blank"
                                rel="noopener noreferrer"
                                class="flex items-center px-6 py-3 bg-zinc-950 border border-gray-600 hover:border-fuchsia-400 text-white transition-colors"
                            >
                                "View Source"
                            </a>
                        }
                    })}
                {project
                    .download_url
                    .clone()
                    .map(|url| {
                        view! {
                            <a
                                href=url
                                target="_blank"
                                rel="noopener noreferrer"
                                class="flex items-center px-6 py-3 bg-cyan-400/10 border border-cyan-400/50 hover:bg-cyan-400/20 text-cyan-400 transition-colors"
                            >
                                "Download"
                            </a>
                        }
                    })}
            </div>
        </div>
    }
}
