use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use codee::string::JsonSerdeWasmCodec;
#[cfg(feature = "hydrate")]
use leptos_use::storage::use_local_storage;

use crate::lang::Language;

#[component]
pub fn Header() -> impl IntoView {
    let lang = expect_context::<RwSignal<Language>>();

    #[cfg(feature = "hydrate")]
    let (stored_lang, set_stored_lang, _) =
        use_local_storage::<Language, JsonSerdeWasmCodec>("lang");
    #[cfg(feature = "hydrate")]
    Effect::watch(
        || (),
        move |_, _, _| {
            lang.set(stored_lang.get_untracked());
        },
        true,
    );
    #[cfg(feature = "hydrate")]
    Effect::watch(
        move || lang.get(),
        move |l, _, _| {
            set_stored_lang.set(*l);
        },
        false,
    );

    view! {
        <header class="relative z-10 border-b border-gray-800 bg-zinc-950/80 backdrop-blur-sm">
            <div class="mx-auto px-4 sm:px-6 lg:px-8 py-4 max-w-7xl flex items-center justify-between">
                <a href="/" class="text-lg font-bold tracking-widest">
                    <span class="text-cyan-400">"TOYASOGO"</span>
                    <span class="text-gray-500 text-xs ml-2 tracking-[0.3em] hidden sm:inline">
                        "PORTFOLIO"
                    </span>
                </a>
                <button
                    class="px-3 py-1 text-sm border border-gray-700 rounded-sm hover:border-cyan-400 transition-colors duration-200"
                    aria-label="Toggle language"
                    on:click=move |_| lang.update(|l| *l = l.toggled())
                >
                    <span class=move || {
                        if lang.get() == Language::Ja { "text-cyan-400 font-bold" } else { "text-gray-500" }
                    }>"JA"</span>
                    <span class="text-gray-600 mx-1">"/"</span>
                    <span class=move || {
                        if lang.get() == Language::En { "text-cyan-400 font-bold" } else { "text-gray-500" }
                    }>"EN"</span>
                </button>
            </div>
        </header>
    }
}
