use leptos::prelude::*;
use leptos_meta::Title;

use super::card::ProjectCard;
use super::collapse::CollapsibleSection;
use super::jam::GameJamMonitor;
use crate::projects::{jam_entries, projects, tools};

#[component]
pub fn HomePage() -> impl IntoView {
    let works = projects();
    view! {
        <Title text="Works" />
        <header class="mb-8 text-center">
            <h1 class="text-2xl md:text-3xl font-bold tracking-widest text-transparent bg-clip-text bg-gradient-to-r from-gray-400 to-gray-500 mb-3">
                "TOYASOGO PORTFOLIO"
            </h1>
            <p class="text-gray-500 text-sm tracking-widest">"VISUAL / INTERACTIVE / CODE"</p>
        </header>
        {works
            .first()
            .map(|hero| {
                view! {
                    <div class="mb-8">
                        <ProjectCard project=hero.clone() hero=true />
                    </div>
                }
            })}
        <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8">
            {works
                .iter()
                .skip(1)
                .map(|p| view! { <ProjectCard project=p.clone() /> })
                .collect_view()}
        </div>
        <div class="grid grid-cols-1 md:grid-cols-2 gap-8">
            <CollapsibleSection title="GAME JAM">
                <GameJamMonitor entries=jam_entries() />
            </CollapsibleSection>
            <CollapsibleSection title="TOOLS">
                <ToolsSection />
            </CollapsibleSection>
        </div>
    }
}

#[component]
fn ToolsSection() -> impl IntoView {
    let list = tools();
    if list.is_empty() {
        return view! {
            <div class="text-center py-12 border border-gray-800 bg-zinc-900/50">
                <p class="text-gray-500 tracking-widest text-sm">"COMING SOON..."</p>
            </div>
        }
        .into_any();
    }
    view! {
        <div class="grid grid-cols-1 gap-6">
            {list
                .iter()
                .map(|p| view! { <ProjectCard project=p.clone() /> })
                .collect_view()}
        </div>
    }
    .into_any()
}
