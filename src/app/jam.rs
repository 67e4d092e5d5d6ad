use leptos::{either::Either, prelude::*};

use super::carousel::MediaCarousel;
use crate::lang::Language;
use crate::projects::Project;

/// Game-jam showcase: an entry list next to a preview monitor. Hovering an
/// entry "jacks" the section background with that entry's artwork; clicking
/// selects it for the preview. Small screens get an accordion list instead.
#[component]
pub fn GameJamMonitor(entries: &'static [Project]) -> impl IntoView {
    if entries.is_empty() {
        return view! {
            <div class="text-center py-12 border border-gray-800 bg-zinc-900/50">
                <p class="text-gray-500 tracking-widest text-sm">"COMING SOON..."</p>
            </div>
        }
        .into_any();
    }

    let lang = expect_context::<RwSignal<Language>>();
    let (selected, set_selected) = signal(0usize);
    let (hovered, set_hovered) = signal(None::<usize>);

    let active = move || {
        hovered
            .get()
            .and_then(|i| entries.get(i))
            .unwrap_or(&entries[selected.get()])
    };
    let background_url = move || {
        let p = active();
        p.background_url
            .clone()
            .or_else(|| p.image_urls.first().cloned())
    };

    view! {
        <div>
            // desktop monitor
            <div class="relative overflow-hidden rounded-sm border border-gray-800 hidden md:block">
            {move || {
                background_url()
                    .map(|url| {
                        view! {
                            <div class="absolute inset-0 z-0">
                                <img src=url alt="" class="w-full h-full object-cover" />
                            </div>
                        }
                    })
            }}
            <div class="absolute inset-0 z-[1] bg-black/70 backdrop-blur-[2px]"></div>

            <div class="relative z-10 flex flex-row gap-4 p-4">
                <div class="w-[30%] flex flex-col gap-1">
                    <div class="text-[10px] text-gray-500 tracking-[0.3em] mb-2 px-1">
                        "SELECT ENTRY"
                    </div>
                    {entries
                        .iter()
                        .enumerate()
                        .map(|(index, entry)| {
                            let thumb = entry.image_urls.first().cloned();
                            let title = entry.title.clone();
                            let tags = entry
                                .technologies
                                .iter()
                                .take(3)
                                .cloned()
                                .collect::<Vec<_>>();
                            view! {
                                <button
                                    on:click=move |_| set_selected(index)
                                    on:mouseenter=move |_| set_hovered(Some(index))
                                    on:mouseleave=move |_| set_hovered(None)
                                    class=move || {
                                        if selected() == index {
                                            "w-full text-left px-4 py-3 border transition-all duration-200 cursor-pointer relative overflow-hidden border-cyan-400/70 bg-cyan-400/15 text-cyan-400"
                                        } else if hovered() == Some(index) {
                                            "w-full text-left px-4 py-3 border transition-all duration-200 cursor-pointer relative overflow-hidden border-cyan-400/40 bg-cyan-400/5 text-gray-200"
                                        } else {
                                            "w-full text-left px-4 py-3 border transition-all duration-200 cursor-pointer relative overflow-hidden border-gray-700/50 bg-black/40 text-gray-400 hover:text-gray-200"
                                        }
                                    }
                                >
                                    {move || {
                                        (selected() == index)
                                            .then(|| {
                                                view! {
                                                    <div class="absolute left-0 top-0 bottom-0 w-[3px] bg-cyan-400"></div>
                                                }
                                            })
                                    }}
                                    <div class="flex items-center gap-3">
                                        {match thumb {
                                            Some(url) => {
                                                Either::Left(
                                                    view! {
                                                        <div class="w-10 h-10 flex-shrink-0 border border-gray-700 overflow-hidden">
                                                            <img
                                                                src=url
                                                                alt=title.clone()
                                                                class="w-full h-full object-cover"
                                                            />
                                                        </div>
                                                    },
                                                )
                                            }
                                            None => {
                                                Either::Right(
                                                    view! {
                                                        <span class="text-[10px] w-10 h-10 flex items-center justify-center border border-gray-700 bg-black/30 text-gray-600">
                                                            {format!("{:02}", index + 1)}
                                                        </span>
                                                    },
                                                )
                                            }
                                        }}
                                        <div class="flex-1 min-w-0">
                                            <div class="text-sm truncate tracking-wide">
                                                {title.clone()}
                                            </div>
                                            <div class="flex flex-wrap gap-1 mt-1">
                                                {tags
                                                    .iter()
                                                    .map(|tech| {
                                                        view! {
                                                            <span class="text-[9px] px-1.5 py-0.5 border border-gray-600 text-gray-500 rounded-sm">
                                                                {tech.clone()}
                                                            </span>
                                                        }
                                                    })
                                                    .collect_view()}
                                            </div>
                                        </div>
                                    </div>
                                </button>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="w-[70%]">
                    <div class="relative border border-gray-700/60 bg-black/50 overflow-hidden">
                        <div class="flex items-center justify-between px-4 py-2 border-b border-gray-700/50 bg-black/50">
                            <div class="flex items-center gap-2">
                                <div class="w-2 h-2 rounded-full bg-cyan-400 animate-pulse"></div>
                                <span class="text-[10px] text-gray-500 tracking-[0.2em]">
                                    "PREVIEW MONITOR"
                                </span>
                            </div>
                        </div>

                        <div class="absolute top-0 left-0 w-3 h-3 border-t-2 border-l-2 border-cyan-400 z-10"></div>
                        <div class="absolute bottom-0 right-0 w-3 h-3 border-b-2 border-r-2 border-cyan-400 z-10"></div>

                        {move || {
                            let entry = &entries[selected.get()];
                            if entry.image_urls.is_empty() {
                                Either::Left(
                                    view! {
                                        <div class="relative aspect-video bg-black/60 flex flex-col items-center justify-center">
                                            <div class="text-cyan-400/30 text-2xl md:text-3xl tracking-[0.5em] mb-2">
                                                "NO DATA"
                                            </div>
                                            <div class="text-gray-600 text-xs tracking-widest">
                                                "AWAITING IMAGE INPUT"
                                            </div>
                                        </div>
                                    },
                                )
                            } else {
                                Either::Right(
                                    view! {
                                        <MediaCarousel
                                            images=entry.image_urls.clone()
                                            title=entry.title.clone()
                                            auto_play=false
                                        />
                                    },
                                )
                            }
                        }}

                        {move || {
                            let p = active();
                            view! {
                                <div class="px-4 py-3 border-t border-gray-700/50 bg-black/50">
                                    <div class="flex items-center justify-between gap-4">
                                        <div class="min-w-0">
                                            <h3 class="text-base font-bold text-white tracking-wide truncate">
                                                {p.title.clone()}
                                            </h3>
                                            <p class="text-xs text-gray-500 mt-0.5">
                                                {p.description.get(lang.get()).to_string()}
                                            </p>
                                        </div>
                                        <div class="flex gap-1.5 flex-wrap justify-end">
                                            {p
                                                .technologies
                                                .iter()
                                                .map(|tech| {
                                                    view! {
                                                        <span class="text-[10px] text-cyan-400 bg-black/60 px-2 py-1 border border-cyan-400/30 rounded-sm">
                                                            {tech.clone()}
                                                        </span>
                                                    }
                                                })
                                                .collect_view()}
                                        </div>
                                    </div>
                                </div>
                            }
                        }}
                    </div>
                </div>
            </div>
        </div>

        // mobile accordion
        <div class="flex flex-col gap-2 md:hidden">
            <div class="text-[10px] text-gray-500 tracking-[0.3em] px-1 mb-1">
                "GAME JAM ENTRIES"
            </div>
            {entries
                .iter()
                .enumerate()
                .map(|(index, entry)| view! { <MobileJamItem entry=entry index=index /> })
                .collect_view()}
        </div>
        </div>
    }
    .into_any()
}

#[component]
fn MobileJamItem(entry: &'static Project, index: usize) -> impl IntoView {
    let lang = expect_context::<RwSignal<Language>>();
    let (expanded, set_expanded) = signal(false);
    let has_images = !entry.image_urls.is_empty();

    view! {
        <div class="border border-gray-700/50 bg-black/40 overflow-hidden">
            <button
                on:click=move |_| set_expanded.update(|e| *e = !*e)
                class="w-full flex items-center gap-3 px-3 py-3 cursor-pointer transition-all duration-200 active:bg-cyan-400/10"
            >
                {match entry.image_urls.first() {
                    Some(url) => {
                        Either::Left(
                            view! {
                                <div class="w-12 h-12 flex-shrink-0 border border-gray-700 overflow-hidden rounded-sm">
                                    <img
                                        src=url.clone()
                                        alt=entry.title.clone()
                                        class="w-full h-full object-cover"
                                    />
                                </div>
                            },
                        )
                    }
                    None => {
                        Either::Right(
                            view! {
                                <div class="w-12 h-12 flex-shrink-0 border border-gray-700 bg-black/30 flex items-center justify-center rounded-sm">
                                    <span class="text-[10px] text-gray-600">
                                        {format!("{:02}", index + 1)}
                                    </span>
                                </div>
                            },
                        )
                    }
                }}
                <div class="flex-1 min-w-0 text-left">
                    <div class="text-sm text-gray-200 truncate tracking-wide">
                        {entry.title.clone()}
                    </div>
                    <div class="flex flex-wrap gap-1 mt-1">
                        {entry
                            .technologies
                            .iter()
                            .take(3)
                            .map(|tech| {
                                view! {
                                    <span class="text-[9px] px-1.5 py-0.5 border border-gray-600 text-gray-500 rounded-sm">
                                        {tech.clone()}
                                    </span>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
                <svg
                    xmlns="http://www.w3.org/2000/svg"
                    width="18"
                    height="18"
                    viewBox="0 0 24 24"
                    fill="none"
                    stroke="currentColor"
                    stroke-width="2"
                    stroke-linecap="round"
                    stroke-linejoin="round"
                    class=move || {
                        if expanded() {
                            "text-cyan-400 flex-shrink-0 rotate-180 transition-transform duration-200"
                        } else {
                            "text-cyan-400 flex-shrink-0 transition-transform duration-200"
                        }
                    }
                >
                    <polyline points="6 9 12 15 18 9" />
                </svg>
            </button>
            <div class=move || {
                if expanded() && has_images { "border-t border-gray-700/50" } else { "hidden" }
            }>
                <MediaCarousel
                    images=entry.image_urls.clone()
                    title=entry.title.clone()
                    auto_play=false
                />
                <div class="px-3 py-2 bg-black/40">
                    <p class="text-xs text-gray-500">
                        {move || entry.description.get(lang.get()).to_string()}
                    </p>
                </div>
            </div>
        </div>
    }
}
