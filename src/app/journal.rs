use leptos::prelude::*;
use leptos_meta::Title;

use super::blocks::{render_blocks, Tags};
use super::use_navigator;
use crate::journal::{resolve, Article, ARTICLES};
use crate::nav::View;

#[component]
pub fn InsightsList() -> impl IntoView {
    let navigator = use_navigator();
    view! {
        <Title text="Journal" />
        <div class="min-h-screen pt-24 pb-32 px-5 md:px-8">
            <div class="max-w-[980px] mx-auto">
                <div class="mb-20">
                    <p class="text-[14px] text-primary mb-3 tracking-wide uppercase">"Journal"</p>
                    <h1 class="text-[48px] md:text-[64px] leading-[1.05] tracking-tight mb-6">
                        "Insights & Learnings"
                    </h1>
                    <p class="text-[21px] text-muted-foreground max-w-[700px] leading-[1.4]">
                        "Real-time problems I face, solutions I discover, and things I'm currently working on."
                    </p>
                </div>
                <div class="space-y-6">
                    {ARTICLES
                        .iter()
                        .map(|entry| {
                            let id = entry.id;
                            view! {
                                <article
                                    on:click=move |_| navigator.navigate(View::ArticleDetail, Some(id))
                                    class="bg-background dark:bg-card rounded-[28px] p-8 md:p-10 border border-black/5 dark:border-white/5 hover:shadow-xl transition-all duration-300 cursor-pointer group"
                                >
                                    <h2 class="text-[28px] md:text-[32px] leading-[1.125] tracking-tight mb-3 group-hover:text-primary transition-colors">
                                        {entry.title}
                                    </h2>
                                    <p class="text-[17px] text-muted-foreground leading-[1.5] mb-4">
                                        {entry.excerpt}
                                    </p>
                                    <div class="flex flex-wrap items-center gap-4 text-[15px] text-muted-foreground mb-6">
                                        <span>{entry.published_display()}</span>
                                        <span>{entry.read_time}</span>
                                    </div>
                                    <Tags tags=entry.tags />
                                </article>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}

/// Full article for `id`. Anything that does not resolve renders nothing.
#[component]
pub fn ArticleDetail(id: String) -> impl IntoView {
    let navigator = use_navigator();
    resolve(&id)
        .inspect_err(|err| log::warn!("{err}"))
        .ok()
        .map(|Article { meta, body }| {
            view! {
                <Title text=meta.title />
                <div class="min-h-screen pt-24 pb-32 px-5 md:px-8">
                    <div class="max-w-[780px] mx-auto">
                        <button
                            on:click=move |_| navigator.navigate(View::InsightsList, None)
                            class="mb-8 -ml-4 px-4 py-2 hover:bg-muted/50 rounded-full"
                        >
                            "← Back to Insights"
                        </button>
                        <header class="mb-12">
                            <div class="mb-6">
                                <Tags tags=meta.tags />
                            </div>
                            <h1 class="text-[40px] md:text-[56px] leading-[1.05] tracking-tight mb-6">
                                {meta.title}
                            </h1>
                            <div class="flex flex-wrap items-center gap-4 text-[15px] text-muted-foreground">
                                <span>{meta.published_display()}</span>
                                <span>{meta.read_time}</span>
                            </div>
                        </header>
                        <article>{render_blocks(body)}</article>
                    </div>
                </div>
            }
        })
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::app::render_html;
    use crate::journal::metadata_of;

    fn detail(id: &str) -> String {
        let id = id.to_string();
        render_html(move || view! { <ArticleDetail id /> })
    }

    #[test]
    fn test_listed_article_renders() {
        let html = detail("typescript-patterns");
        let meta = metadata_of("typescript-patterns").expect("listed");
        assert!(html.contains(meta.title), "{html}");
        assert!(html.contains("<article"));
    }

    #[test]
    fn test_unresolved_article_renders_nothing() {
        // unknown id, then a body that was never listed
        for id in ["missing", "snt-concurrency-architecture", ""] {
            let html = detail(id);
            assert!(!html.contains("<div"), "{id}: {html}");
            assert!(!html.contains("<article"), "{id}: {html}");
        }
    }

    #[test]
    fn test_list_keeps_registry_order() {
        let html = render_html(|| view! { <InsightsList /> });
        let positions: Vec<usize> = ARTICLES
            .iter()
            .map(|entry| html.find(entry.title).expect("listed title rendered"))
            .collect();
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]), "{positions:?}");
    }
}
