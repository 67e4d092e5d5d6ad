use leptos::{html, prelude::*};
use leptos_router::components::A;

use crate::lang::Language;
use crate::projects::Project;

/// Card linking to a project's detail page. When the record carries a video,
/// hovering plays a muted preview over the cover image.
#[component]
pub fn ProjectCard(project: Project, #[prop(optional)] hero: bool) -> impl IntoView {
    let lang = expect_context::<RwSignal<Language>>();
    let video_ref = NodeRef::<html::Video>::new();
    let (hovered, set_hovered) = signal(false);

    let has_video = project.video_url.is_some();
    let cover = project.image_urls.first().cloned().unwrap_or_default();
    let href = format!("/project/{}", project.id);
    let title = project.title.clone();
    let description = project.description.clone();
    let tags = project
        .technologies
        .iter()
        .take(3)
        .cloned()
        .collect::<Vec<_>>();
    let title_class = if hero {
        "text-2xl md:text-3xl font-bold text-white mb-1 group-hover:text-fuchsia-400 transition-colors"
    } else {
        "text-xl font-bold text-white mb-1 group-hover:text-fuchsia-400 transition-colors"
    };

    view! {
        <A href=href attr:class="block">
            <div
                class="relative bg-zinc-900 border border-gray-800 overflow-hidden group cursor-pointer hover:border-gray-600 transition-colors duration-300"
                on:mouseenter=move |_| {
                    set_hovered(true);
                    if let Some(video) = video_ref.get_untracked() {
                        let _ = video.play();
                    }
                }
                on:mouseleave=move |_| {
                    set_hovered(false);
                    if let Some(video) = video_ref.get_untracked() {
                        let _ = video.pause();
                        video.set_current_time(0.0);
                    }
                }
            >
                <div class="absolute top-0 left-0 w-2 h-2 border-t-2 border-l-2 border-cyan-400 z-20"></div>
                <div class="absolute bottom-0 right-0 w-2 h-2 border-b-2 border-r-2 border-cyan-400 z-20"></div>

                <div class="relative aspect-video">
                    {project
                        .video_url
                        .clone()
                        .map(|url| {
                            view! {
                                <video
                                    node_ref=video_ref
                                    src=url
                                    class=move || {
                                        if hovered() {
                                            "absolute inset-0 w-full h-full object-cover transition-opacity duration-300 opacity-100"
                                        } else {
                                            "absolute inset-0 w-full h-full object-cover transition-opacity duration-300 opacity-0"
                                        }
                                    }
                                    loop=true
                                    muted=true
                                    prop:muted=true
                                    playsinline=true
                                ></video>
                            }
                        })}
                    <img
                        src=cover
                        alt=title.clone()
                        class=move || {
                            if hovered() && has_video {
                                "absolute inset-0 w-full h-full object-cover transition-opacity duration-300 opacity-0"
                            } else {
                                "absolute inset-0 w-full h-full object-cover transition-opacity duration-300 opacity-100"
                            }
                        }
                    />

                    <div class="absolute inset-0 bg-gradient-to-t from-zinc-950 to-transparent opacity-60"></div>

                    <div class="absolute bottom-0 left-0 p-4 w-full">
                        <h3 class=title_class>{title.clone()}</h3>
                        {hero
                            .then(|| {
                                let description = description.clone();
                                view! {
                                    <p class="text-sm text-gray-400 mb-2 line-clamp-2">
                                        {move || description.get(lang.get()).to_string()}
                                    </p>
                                }
                            })}
                        <div class="flex flex-wrap gap-2">
                            {tags
                                .iter()
                                .map(|tech| {
                                    view! {
                                        <span class="text-xs text-cyan-400 bg-zinc-950/80 px-2 py-1 border border-cyan-400/30 rounded-sm">
                                            {tech.clone()}
                                        </span>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </div>
            </div>
        </A>
    }
}
