mod card;
mod carousel;
mod collapse;
mod detail;
mod header;
mod homepage;
mod jam;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::lang::Language;
use detail::ProjectPage;
use header::Header;
use homepage::HomePage;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="ja">
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
            <body class="bg-zinc-950 text-gray-200">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    // Display language, shared by every page and toggled from the header.
    let lang = RwSignal::new(Language::default());
    provide_context(lang);

    view! {
        // sets the document title
        <Title formatter=|title| format!("TOYASOGO - {title}") />

        <Router>
            <div class="min-h-screen relative overflow-hidden">
                <div class="fixed inset-0 bg-grid opacity-20 pointer-events-none z-0"></div>
                <div class="fixed inset-0 bg-gradient-to-t from-zinc-950 via-transparent to-transparent pointer-events-none z-0"></div>
                <Header />
                <main class="relative z-10 px-4 py-8 max-w-7xl mx-auto">
                    <Routes fallback=|| "Page not found.".into_view()>
                        <Route path=path!("/") view=HomePage />
                        <Route path=path!("/project/:id") view=ProjectPage />
                    </Routes>
                </main>
                <Footer />
            </div>
        </Router>
    }
}

#[component]
fn Footer() -> impl IntoView {
    let build_date = env!("BUILD_TIME").split('T').next().unwrap_or_default();
    view! {
        <footer class="relative z-10 mt-16 py-6 text-center text-xs text-gray-600 border-t border-gray-800/50">
            <p>"© 2026 TOYASOGO"</p>
            <p class="mt-1">{format!("v{} / built {}", env!("CARGO_PKG_VERSION"), build_date)}</p>
        </footer>
    }
}
