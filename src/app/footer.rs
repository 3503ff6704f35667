use leptos::prelude::*;

use crate::site::{GITHUB_URL, LINKEDIN_URL, OWNER};

const BUILD_YEAR: &str = env!("BUILD_YEAR");

#[component]
pub fn Footer() -> impl IntoView {
    let social = [("GitHub", GITHUB_URL), ("LinkedIn", LINKEDIN_URL)];
    view! {
        <footer class="border-t border-black/5 dark:border-white/5 py-16 px-5 md:px-8 bg-background">
            <div class="max-w-[980px] mx-auto">
                <div class="flex flex-col items-center gap-8">
                    <div class="flex items-center gap-6">
                        {social
                            .into_iter()
                            .map(|(label, href)| {
                                view! {
                                    <a
                                        href=href
                                        target="_blank"
                                        rel="noreferrer"
                                        aria-label=label
                                        class="px-4 h-10 rounded-full bg-muted flex items-center justify-center hover:bg-primary/10 transition-colors text-[15px]"
                                    >
                                        {label}
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                    <p class="text-[13px] text-muted-foreground text-center">
                        {format!("© {BUILD_YEAR} {OWNER}. All rights reserved.")}
                    </p>
                </div>
            </div>
        </footer>
    }
}
