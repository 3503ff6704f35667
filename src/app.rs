mod blocks;
mod footer;
mod header;
mod homepage;
mod journal;
mod projects;

use footer::Footer;
use header::Header;
use homepage::HomePage;
use journal::{ArticleDetail, InsightsList};
use leptos::{either::*, prelude::*};
use leptos_meta::*;
use leptos_router::{components::*, path};
use projects::{ProjectDetail, ProjectsList};

use crate::nav::{NavigationState, Screen, View};
use crate::site;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <meta
                    name="description"
                    content="Developer. Designer. Creator. Portfolio and journal of shanDran."
                />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="antialiased">
                <App />
            </body>
        </html>
    }
}

/// Handle to the site-wide navigation state. Any component can pull it out of
/// context and request a view change.
#[derive(Debug, Clone, Copy)]
pub struct Navigator {
    state: RwSignal<NavigationState>,
}

impl Navigator {
    pub(crate) fn new() -> Self {
        Self {
            state: RwSignal::new(NavigationState::new()),
        }
    }

    pub fn navigate(&self, view: View, id: Option<&str>) {
        log::debug!("navigate({view:?}, {id:?})");
        self.state.update(|state| state.navigate(view, id));
        scroll_to_top();
    }

    /// Navigates home and brings one of its sections into view.
    pub fn navigate_to_section(&self, section: &'static str) {
        self.navigate(View::Home, None);
        scroll_to_section(section);
    }

    pub fn screen(&self) -> Screen {
        self.state.with(NavigationState::screen)
    }
}

pub fn use_navigator() -> Navigator {
    expect_context::<Navigator>()
}

/// Light/dark switch. Lives for the page only.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    dark: RwSignal<bool>,
}

impl Theme {
    pub fn is_dark(&self) -> bool {
        self.dark.get()
    }

    pub fn toggle(&self) {
        self.dark.update(|dark| *dark = !*dark);
    }
}

#[cfg(feature = "hydrate")]
fn scroll_to_top() {
    window().scroll_to_with_x_and_y(0.0, 0.0);
}

#[cfg(not(feature = "hydrate"))]
fn scroll_to_top() {}

#[cfg(feature = "hydrate")]
fn scroll_to_section(id: &'static str) {
    // the home view may only mount on the next frame
    request_animation_frame(move || {
        if let Some(el) = document().get_element_by_id(id) {
            el.scroll_into_view();
        } else {
            log::warn!("no section with id {id}");
        }
    });
}

#[cfg(not(feature = "hydrate"))]
fn scroll_to_section(_id: &'static str) {}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    provide_context(Navigator::new());
    let theme = Theme {
        dark: RwSignal::new(false),
    };
    provide_context(theme);

    view! {
        <Title formatter=|title| format!("{title} | {}", site::OWNER) />

        <Router>
            <div
                class="min-h-screen bg-background text-foreground"
                class:dark=move || theme.is_dark()
            >
                <Header />
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=path!("/") view=CurrentView />
                </Routes>
                <Footer />
            </div>
        </Router>
    }
}

/// Mounts whatever the navigation state points at. Detail views without a
/// selection render nothing.
#[component]
fn CurrentView() -> impl IntoView {
    let navigator = use_navigator();
    let screen = Memo::new(move |_| navigator.screen());
    move || match screen.get() {
        Screen::Home => EitherOf6::A(view! { <HomePage /> }),
        Screen::Insights => EitherOf6::B(view! { <InsightsList /> }),
        Screen::Article(id) => EitherOf6::C(view! { <ArticleDetail id /> }),
        Screen::Projects => EitherOf6::D(view! { <ProjectsList /> }),
        Screen::Project(id) => EitherOf6::E(view! { <ProjectDetail id /> }),
        Screen::Blank => EitherOf6::F(()),
    }
}

/// Server-renders `view` under a fresh owner carrying the app contexts.
#[cfg(all(test, feature = "ssr"))]
fn render_html<V: RenderHtml>(view: impl FnOnce() -> V) -> String {
    let owner = Owner::new();
    owner.with(|| {
        provide_meta_context();
        provide_context(Navigator::new());
        view().to_html()
    })
}
