use leptos::prelude::*;
use leptos_meta::Title;

use super::blocks::{render_blocks, Tags};
use super::use_navigator;
use crate::nav::View;
use crate::projects::{project_document, project_of, PROJECTS};

#[component]
pub fn ProjectsList() -> impl IntoView {
    let navigator = use_navigator();
    view! {
        <Title text="Projects" />
        <div class="min-h-screen pt-24 pb-32 px-5 md:px-8">
            <div class="max-w-[1200px] mx-auto">
                <div class="mb-20 text-center">
                    <p class="text-[14px] text-primary mb-3 tracking-wide uppercase">"Portfolio"</p>
                    <h1 class="text-[48px] md:text-[64px] leading-[1.05] tracking-tight mb-6">
                        "Featured Projects"
                    </h1>
                    <p class="text-[21px] text-muted-foreground max-w-[700px] mx-auto leading-[1.4]">
                        "A collection of projects I've worked on, each with its own story and challenges."
                    </p>
                </div>
                <div class="grid md:grid-cols-2 gap-8">
                    {PROJECTS
                        .iter()
                        .map(|project| {
                            let id = project.id;
                            view! {
                                <article
                                    on:click=move |_| navigator.navigate(View::ProjectDetail, Some(id))
                                    class="group cursor-pointer bg-background dark:bg-card rounded-[28px] overflow-hidden border border-black/5 dark:border-white/5 hover:shadow-2xl transition-all duration-500"
                                >
                                    <div class="relative aspect-[16/10] overflow-hidden">
                                        <img
                                            src=project.thumbnail
                                            alt=project.title
                                            loading="lazy"
                                            class="w-full h-full object-cover group-hover:scale-105 transition-transform duration-700"
                                        />
                                    </div>
                                    <div class="p-8">
                                        <div class="flex items-center gap-3 text-[13px] text-muted-foreground mb-4">
                                            <span>{project.year}</span>
                                            <span>"•"</span>
                                            <span>{project.role}</span>
                                        </div>
                                        <h2 class="text-[28px] leading-[1.14] tracking-tight mb-2 group-hover:text-primary transition-colors">
                                            {project.title}
                                        </h2>
                                        <p class="text-[17px] text-muted-foreground leading-[1.5] mb-6">
                                            {project.subtitle}
                                        </p>
                                        <div class="mb-6">
                                            <Tags tags=project.tags />
                                        </div>
                                        <div class="text-[17px] text-primary">"View project →"</div>
                                    </div>
                                </article>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}

/// Case study for `id`, rendered from the shared project template.
#[component]
pub fn ProjectDetail(id: String) -> impl IntoView {
    let navigator = use_navigator();
    let project = project_of(&id);
    if project.is_none() {
        log::warn!("project not found: {id}");
    }
    project.map(|project| {
        view! {
            <Title text=project.title />
            <div class="min-h-screen pt-24 pb-32 px-5 md:px-8">
                <div class="max-w-[980px] mx-auto">
                    <button
                        on:click=move |_| navigator.navigate(View::ProjectsList, None)
                        class="mb-8 -ml-4 px-4 py-2 hover:bg-muted/50 rounded-full"
                    >
                        "← Back to Projects"
                    </button>
                    <header class="mb-12">
                        <div class="flex flex-wrap gap-4 mb-6 text-[15px] text-muted-foreground">
                            <span>{project.year}</span>
                            <span>"•"</span>
                            <span>{project.duration}</span>
                            <span>"•"</span>
                            <span>{project.role}</span>
                        </div>
                        <h1 class="text-[40px] md:text-[56px] leading-[1.05] tracking-tight mb-6">
                            {project.title}
                        </h1>
                        <p class="text-[21px] text-muted-foreground leading-[1.4] mb-8">
                            {project.subtitle}
                        </p>
                        <Tags
                            tags=project.tags
                            class="rounded-full px-4 py-1.5 text-[15px] bg-muted text-foreground/80"
                        />
                    </header>
                    <article>{render_blocks(project_document(project))}</article>
                </div>
            </div>
        }
    })
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::app::render_html;

    fn detail(id: &str) -> String {
        let id = id.to_string();
        render_html(move || view! { <ProjectDetail id /> })
    }

    #[test]
    fn test_project_detail_renders_only_known_ids() {
        let html = detail("SNT");
        assert!(html.contains("SeetaNarayan Travels"), "{html}");

        let html = detail("missing");
        assert!(!html.contains("<div"), "{html}");
    }
}
