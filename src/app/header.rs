use leptos::prelude::*;

use super::{use_navigator, Theme};
use crate::nav::View;
use crate::site::{MENU, OWNER};

#[component]
pub fn Header() -> impl IntoView {
    let navigator = use_navigator();
    let theme = expect_context::<Theme>();
    let (menu_open, set_menu_open) = signal(false);

    let go_section = move |section: &'static str| {
        set_menu_open(false);
        navigator.navigate_to_section(section);
    };
    let go_view = move |view: View| {
        set_menu_open(false);
        navigator.navigate(view, None);
    };

    // both menus share the same entries
    let menu_items = move |item_class: &'static str| {
        let sections = MENU
            .iter()
            .map(|&(label, section)| {
                view! {
                    <button class=item_class on:click=move |_| go_section(section)>
                        {label}
                    </button>
                }
            })
            .collect_view();
        view! {
            {sections}
            <button class=item_class on:click=move |_| go_view(View::InsightsList)>
                "Journal"
            </button>
            <button class=item_class on:click=move |_| go_view(View::ProjectsList)>
                "Projects"
            </button>
        }
    };

    view! {
        <header class="fixed top-0 left-0 right-0 z-50 glass border-b border-black/5 dark:border-white/5">
            <nav class="max-w-[980px] mx-auto px-5 py-4 md:px-8">
                <div class="flex items-center justify-between">
                    <button
                        on:click=move |_| go_view(View::Home)
                        class="text-[21px] hover:text-primary transition-colors tracking-tight"
                    >
                        {OWNER}
                    </button>

                    <div class="hidden md:flex items-center gap-10">
                        {menu_items(
                            "text-[17px] text-foreground/80 hover:text-foreground transition-colors",
                        )}
                    </div>

                    <div class="flex items-center gap-2">
                        <button
                            on:click=move |_| theme.toggle()
                            aria-label="Toggle theme"
                            class="w-10 h-10 rounded-full hover:bg-muted transition-colors"
                        >
                            {move || if theme.is_dark() { "☀" } else { "☾" }}
                        </button>
                        <button
                            on:click=move |_| set_menu_open.update(|open| *open = !*open)
                            aria-label="Toggle menu"
                            class="md:hidden w-10 h-10 rounded-full hover:bg-muted transition-colors"
                        >
                            {move || if menu_open() { "✕" } else { "☰" }}
                        </button>
                    </div>
                </div>

                <Show when=move || menu_open.get()>
                    <div class="md:hidden mt-6 pb-4 space-y-4 flex flex-col">
                        {menu_items(
                            "block w-full text-left text-[17px] text-foreground/80 hover:text-foreground transition-colors py-2",
                        )}
                    </div>
                </Show>
            </nav>
        </header>
    }
}
