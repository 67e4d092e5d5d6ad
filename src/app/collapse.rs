use leptos::prelude::*;

/// Section with a toggle header and a chevron that flips while open.
#[component]
pub fn CollapsibleSection(
    #[prop(into)] title: String,
    #[prop(optional)] default_open: bool,
    children: Children,
) -> impl IntoView {
    let (open, set_open) = signal(default_open);

    view! {
        <div class="mt-10">
            <button
                on:click=move |_| set_open.update(|o| *o = !*o)
                class="w-full flex items-center justify-between group cursor-pointer border border-gray-700 hover:border-cyan-400/70 hover:bg-cyan-400/5 bg-zinc-900 px-6 py-5 relative overflow-hidden transition-all duration-300"
            >
                <div class="flex items-center gap-4 relative z-10">
                    <div class="h-[2px] w-8 group-hover:w-12 bg-gradient-to-r from-cyan-400 to-transparent transition-all duration-300"></div>
                    <h2 class="text-lg md:text-xl font-bold tracking-wider text-gray-300 group-hover:text-cyan-400 transition-colors duration-300">
                        {title}
                    </h2>
                </div>
                <svg
                    xmlns="http://www.w3.org/2000/svg"
                    width="22"
                    height="22"
                    viewBox="0 0 24 24"
                    fill="none"
                    stroke="currentColor"
                    stroke-width="2.5"
                    stroke-linecap="round"
                    stroke-linejoin="round"
                    class=move || {
                        if open() {
                            "text-cyan-400 relative z-10 rotate-180 transition-transform duration-300"
                        } else {
                            "text-cyan-400 relative z-10 transition-transform duration-300"
                        }
                    }
                >
                    <polyline points="6 9 12 15 18 9" />
                </svg>
            </button>
            <div class=move || if open() { "pt-6 pb-2" } else { "hidden" }>{children()}</div>
        </div>
    }
}
