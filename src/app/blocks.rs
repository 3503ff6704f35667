use leptos::{either::*, prelude::*};
use leptos_use::{use_clipboard, use_timeout_fn, UseClipboardReturn, UseTimeoutFnReturn};

use crate::content::{
    embed_url,
    interaction::{AccordionState, CopyAck, TabState, COPY_ACK_DELAY},
    AccordionItem, AlertVariant, CalloutKind, CodeSnippet, ColumnSplit, ComparisonSide,
    ContentBlock, Document, Feature, Figure, GridColumns, ImageSize, Inline, RichText, Stat, Tab,
    TimelineItem, VideoEmbed,
};

// Blocks nest (tabs, accordions, columns and alerts hold whole documents), so
// the dispatch goes through type-erased views to keep the view types finite.

pub fn render_blocks(blocks: Document) -> AnyView {
    blocks.into_iter().map(render_block).collect_view().into_any()
}

pub fn render_block(block: ContentBlock) -> AnyView {
    match block {
        ContentBlock::Paragraph(spans) => view! {
            <p class="text-[17px] leading-[1.6] text-foreground/90 my-6">{rich_text(spans)}</p>
        }
        .into_any(),
        ContentBlock::Heading(text) => view! {
            <h2 class="text-[32px] md:text-[40px] leading-[1.08] tracking-tight mt-16 mb-6">
                {text}
            </h2>
        }
        .into_any(),
        ContentBlock::Subheading(text) => view! {
            <h3 class="text-[24px] md:text-[28px] leading-[1.14] tracking-tight mt-12 mb-4">
                {text}
            </h3>
        }
        .into_any(),
        ContentBlock::Quote(spans) => view! {
            <blockquote class="text-[21px] leading-[1.5] text-foreground/80 italic border-l-4 border-primary pl-6 my-8">
                {rich_text(spans)}
            </blockquote>
        }
        .into_any(),
        ContentBlock::List(items) => view! {
            <ul class="text-[17px] leading-[1.6] text-foreground/90 my-6 pl-6 space-y-2">
                {items
                    .into_iter()
                    .map(|item| {
                        view! {
                            <li class="flex items-start">
                                <span class="w-1.5 h-1.5 rounded-full bg-primary mr-3 mt-2.5 flex-shrink-0" />
                                <span>{rich_text(item)}</span>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        }
        .into_any(),
        ContentBlock::Code(snippet) => view! { <CodeBlock snippet /> }.into_any(),
        ContentBlock::Image(figure) => view! { <ImageBlock figure /> }.into_any(),
        ContentBlock::Video(video) => view! { <VideoBlock video /> }.into_any(),
        ContentBlock::Callout { kind, body } => view! { <Callout kind body /> }.into_any(),
        ContentBlock::Alert {
            variant,
            title,
            body,
        } => view! { <Alert variant title body /> }.into_any(),
        ContentBlock::Accordion(items) => view! { <Accordion items /> }.into_any(),
        ContentBlock::Comparison { before, after } => {
            view! { <Comparison before after /> }.into_any()
        }
        ContentBlock::Stats { stats, columns } => view! { <StatsGrid stats columns /> }.into_any(),
        ContentBlock::TwoColumn { left, right, split } => view! {
            <div class=format!("grid {} gap-8 my-8", split_class(split))>
                <div>{render_blocks(left)}</div>
                <div>{render_blocks(right)}</div>
            </div>
        }
        .into_any(),
        // nothing to switch between
        ContentBlock::Tabs(tabs) if tabs.is_empty() => ().into_any(),
        ContentBlock::Tabs(tabs) => view! { <TabbedContent tabs /> }.into_any(),
        ContentBlock::Timeline(items) => view! { <Timeline items /> }.into_any(),
        ContentBlock::Features { features, columns } => {
            view! { <FeatureGrid features columns /> }.into_any()
        }
        ContentBlock::Divider => {
            view! { <hr class="my-16 border-t border-black/10 dark:border-white/10" /> }.into_any()
        }
    }
}

fn rich_text(spans: RichText) -> impl IntoView {
    spans
        .into_iter()
        .map(|span| match span {
            Inline::Text(s) => EitherOf4::A(s),
            Inline::Strong(s) => EitherOf4::B(view! { <strong class="font-semibold">{s}</strong> }),
            Inline::Emphasis(s) => EitherOf4::C(view! { <em>{s}</em> }),
            Inline::Code(s) => EitherOf4::D(view! {
                <code class="px-1.5 py-0.5 rounded bg-muted font-mono text-[15px]">{s}</code>
            }),
        })
        .collect_view()
}

fn columns_class(columns: GridColumns) -> &'static str {
    match columns {
        GridColumns::Two => "md:grid-cols-2",
        GridColumns::Three => "md:grid-cols-3",
        GridColumns::Four => "md:grid-cols-2 lg:grid-cols-4",
    }
}

fn split_class(split: ColumnSplit) -> &'static str {
    match split {
        ColumnSplit::Equal => "md:grid-cols-2",
        ColumnSplit::LeftHeavy => "md:grid-cols-[2fr_1fr]",
        ColumnSplit::RightHeavy => "md:grid-cols-[1fr_2fr]",
    }
}

fn image_width(size: ImageSize) -> &'static str {
    match size {
        ImageSize::Small => "max-w-[400px]",
        ImageSize::Medium => "max-w-[600px]",
        ImageSize::Full => "w-full",
    }
}

/// Copies the snippet verbatim and flashes an acknowledgment on the button.
#[component]
fn CodeBlock(snippet: CodeSnippet) -> impl IntoView {
    let ack = RwSignal::new(CopyAck::default());
    // restarting clears the pending timer and the timer is dropped on unmount
    let UseTimeoutFnReturn { start, .. } = use_timeout_fn(
        move |generation: u64| ack.update(|ack| ack.expire(generation)),
        COPY_ACK_DELAY.as_millis() as f64,
    );
    let UseClipboardReturn { copy, .. } = use_clipboard();

    let CodeSnippet {
        code,
        language,
        filename,
    } = snippet;
    let on_copy = {
        let code = code.clone();
        move |_: leptos::ev::MouseEvent| {
            copy(&code);
            if let Some(generation) = ack.try_update(CopyAck::press) {
                start(generation);
            }
        }
    };

    view! {
        <div class="my-8 rounded-[20px] overflow-hidden bg-[#1d1d1f] dark:bg-black border border-white/10">
            {filename
                .map(|filename| {
                    view! {
                        <div class="px-6 py-3 border-b border-white/10 flex items-center justify-between">
                            <span class="text-[13px] text-white/60">{filename}</span>
                            <span class="text-[11px] text-white/40 uppercase tracking-wide">
                                {language}
                            </span>
                        </div>
                    }
                })}
            <div class="relative">
                <pre class="p-6 overflow-x-auto text-[15px] leading-[1.6]">
                    <code class="text-white/90 font-mono">{code}</code>
                </pre>
                <button
                    on:click=on_copy
                    aria-label="Copy code"
                    class="absolute top-4 right-4 px-3 py-1.5 rounded-lg bg-white/10 hover:bg-white/20 text-white text-[13px]"
                >
                    {move || if ack.with(CopyAck::is_shown) { "Copied!" } else { "Copy" }}
                </button>
            </div>
        </div>
    }
}

#[component]
fn ImageBlock(figure: Figure) -> impl IntoView {
    let Figure {
        src,
        alt,
        caption,
        size,
    } = figure;
    view! {
        <figure class=format!("my-8 {} mx-auto", image_width(size))>
            <div class="rounded-[20px] overflow-hidden shadow-lg">
                <img src=src alt=alt loading="lazy" class="w-full h-auto" />
            </div>
            {caption
                .map(|caption| {
                    view! {
                        <figcaption class="mt-3 text-center text-[15px] text-muted-foreground">
                            {caption}
                        </figcaption>
                    }
                })}
        </figure>
    }
}

#[component]
fn VideoBlock(video: VideoEmbed) -> impl IntoView {
    let src = embed_url(&video.src);
    view! {
        <figure class="my-8">
            <div class="relative rounded-[20px] overflow-hidden shadow-lg aspect-video bg-black">
                <iframe
                    src=src
                    title=video.title
                    allow="accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture"
                    allowfullscreen=true
                    class="w-full h-full"
                />
            </div>
            {video
                .caption
                .map(|caption| {
                    view! {
                        <figcaption class="mt-3 text-center text-[15px] text-muted-foreground">
                            {caption}
                        </figcaption>
                    }
                })}
        </figure>
    }
}

#[component]
fn Callout(kind: CalloutKind, body: RichText) -> impl IntoView {
    let (icon, frame, tint) = match kind {
        CalloutKind::Info => (
            "ℹ",
            "bg-blue-500/10 dark:bg-blue-500/20 border-blue-500/30",
            "text-blue-500",
        ),
        CalloutKind::Success => (
            "✓",
            "bg-green-500/10 dark:bg-green-500/20 border-green-500/30",
            "text-green-500",
        ),
        CalloutKind::Warning => (
            "⚠",
            "bg-orange-500/10 dark:bg-orange-500/20 border-orange-500/30",
            "text-orange-500",
        ),
        CalloutKind::Error => (
            "✕",
            "bg-red-500/10 dark:bg-red-500/20 border-red-500/30",
            "text-red-500",
        ),
    };
    view! {
        <div class=format!("my-8 p-6 rounded-[20px] border {frame}")>
            <div class="flex gap-4">
                <span class=format!("w-5 h-5 flex-shrink-0 mt-0.5 {tint}")>{icon}</span>
                <div class="text-[17px] leading-[1.6] text-foreground/90">{rich_text(body)}</div>
            </div>
        </div>
    }
}

#[component]
fn Alert(variant: AlertVariant, title: Option<String>, body: Document) -> impl IntoView {
    let (frame, heading) = match variant {
        AlertVariant::Default => ("bg-muted/50 border-border", "text-foreground"),
        AlertVariant::Primary => ("bg-primary/5 border-primary/20", "text-primary"),
        AlertVariant::Success => ("bg-green-500/5 border-green-500/20", "text-green-500"),
        AlertVariant::Warning => ("bg-orange-500/5 border-orange-500/20", "text-orange-500"),
        AlertVariant::Error => ("bg-red-500/5 border-red-500/20", "text-red-500"),
    };
    view! {
        <div class=format!("my-6 p-5 rounded-[16px] border {frame}")>
            {title.map(|title| view! { <h4 class=format!("text-[17px] mb-2 {heading}")>{title}</h4> })}
            <div class="text-[17px] leading-[1.5] text-foreground/90">{render_blocks(body)}</div>
        </div>
    }
}

/// Single-open accordion. Every item starts collapsed.
#[component]
fn Accordion(items: Vec<AccordionItem>) -> impl IntoView {
    let state = RwSignal::new(AccordionState::new(items.len()));
    view! {
        <div class="my-8 space-y-3">
            {items
                .into_iter()
                .enumerate()
                .map(|(index, item)| {
                    let open = move || state.with(|state| state.is_open(index));
                    view! {
                        <div class="rounded-[16px] border border-black/5 dark:border-white/5 overflow-hidden glass-card">
                            <button
                                on:click=move |_| state.update(|state| state.toggle(index))
                                aria-expanded=move || open().to_string()
                                class="w-full px-6 py-4 flex items-center justify-between text-left hover:bg-muted/30 transition-colors"
                            >
                                <span class="text-[17px] pr-4">{item.title}</span>
                                <span class=move || {
                                    if open() {
                                        "text-muted-foreground transition-transform duration-300 rotate-180"
                                    } else {
                                        "text-muted-foreground transition-transform duration-300"
                                    }
                                }>"⌄"</span>
                            </button>
                            <div
                                class="px-6 pb-4 text-[17px] text-muted-foreground leading-[1.5]"
                                class:hidden=move || !open()
                            >
                                {render_blocks(item.body)}
                            </div>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

/// Tab strip over documents. Inactive panels stay mounted and are only
/// hidden, so state inside them survives switching.
#[component]
fn TabbedContent(tabs: Vec<Tab>) -> impl IntoView {
    let state = RwSignal::new(TabState::new(tabs.iter().map(|tab| tab.id.clone())));

    let buttons = tabs
        .iter()
        .map(|tab| {
            let id = tab.id.clone();
            let active = {
                let id = id.clone();
                move || state.with(|state| state.is_active(&id))
            };
            view! {
                <button
                    on:click=move |_| {
                        state.update(|state| {
                            state.select(&id);
                        })
                    }
                    class="relative px-4 py-2 text-[15px] transition-colors"
                >
                    <span class=move || {
                        if active() {
                            "text-foreground border-b-2 border-primary pb-2"
                        } else {
                            "text-muted-foreground"
                        }
                    }>{tab.label.clone()}</span>
                </button>
            }
        })
        .collect_view();

    let panels = tabs
        .into_iter()
        .map(|tab| {
            let Tab { id, body, .. } = tab;
            view! {
                <div class:hidden=move || !state.with(|state| state.is_active(&id))>
                    {render_blocks(body)}
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="my-8">
            <div class="flex gap-2 mb-6 border-b border-border">{buttons}</div>
            <div>{panels}</div>
        </div>
    }
}

struct SideStyle {
    mark: &'static str,
    frame: &'static str,
    tint: &'static str,
}

const BEFORE: SideStyle = SideStyle {
    mark: "✗",
    frame: "p-6 rounded-[20px] bg-red-500/5 border border-red-500/20",
    tint: "text-red-500",
};

const AFTER: SideStyle = SideStyle {
    mark: "✓",
    frame: "p-6 rounded-[20px] bg-green-500/5 border border-green-500/20",
    tint: "text-green-500",
};

#[component]
fn Comparison(before: ComparisonSide, after: ComparisonSide) -> impl IntoView {
    let side = |side: ComparisonSide, style: SideStyle| {
        view! {
            <div class=style.frame>
                <h3 class="text-[21px] leading-[1.3] tracking-tight mb-4 flex items-center gap-2">
                    <span class=style.tint>{style.mark}</span>
                    {side.title}
                </h3>
                <ul class="space-y-2">
                    {side
                        .items
                        .into_iter()
                        .map(|item| {
                            view! {
                                <li class="text-[17px] text-muted-foreground leading-[1.5] flex items-start gap-2">
                                    <span class=format!("{} mt-1", style.tint)>"•"</span>
                                    <span>{item}</span>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </div>
        }
    };
    view! {
        <div class="my-8 grid md:grid-cols-2 gap-6">
            {side(before, BEFORE)}
            {side(after, AFTER)}
        </div>
    }
}

#[component]
fn StatsGrid(stats: Vec<Stat>, columns: GridColumns) -> impl IntoView {
    view! {
        <div class=format!("grid {} gap-6 my-8", columns_class(columns))>
            {stats
                .into_iter()
                .map(|stat| {
                    view! {
                        <div class="p-6 rounded-[20px] bg-gradient-to-br from-primary/5 to-primary/10 dark:from-primary/10 dark:to-primary/5 border border-primary/20">
                            <div class="text-[40px] md:text-[48px] leading-none tracking-tight text-primary mb-2">
                                {stat.value}
                            </div>
                            <div class="text-[17px] mb-1">{stat.label}</div>
                            {stat
                                .description
                                .map(|d| view! { <div class="text-[15px] text-muted-foreground">{d}</div> })}
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn Timeline(items: Vec<TimelineItem>) -> impl IntoView {
    view! {
        <div class="my-12 space-y-8">
            {items
                .into_iter()
                .map(|item| {
                    view! {
                        <div class="relative pl-8 pb-8 border-l-2 border-primary/20 last:pb-0 last:border-l-0">
                            <div class="absolute left-[-9px] top-0 w-4 h-4 rounded-full bg-primary border-4 border-background" />
                            <div class="space-y-2">
                                <div class="text-[13px] text-primary uppercase tracking-wide">
                                    {item.date}
                                </div>
                                <h3 class="text-[21px] leading-[1.3] tracking-tight">{item.title}</h3>
                                <p class="text-[17px] text-muted-foreground leading-[1.5]">
                                    {item.description}
                                </p>
                            </div>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn FeatureGrid(features: Vec<Feature>, columns: GridColumns) -> impl IntoView {
    view! {
        <div class=format!("grid {} gap-6 my-8", columns_class(columns))>
            {features
                .into_iter()
                .map(|feature| {
                    view! {
                        <div class="p-6 rounded-[20px] glass-card border border-black/5 dark:border-white/5 hover:shadow-lg transition-all">
                            <h3 class="text-[19px] leading-[1.3] tracking-tight mb-2">
                                {feature.title}
                            </h3>
                            <p class="text-[17px] text-muted-foreground leading-[1.5]">
                                {feature.description}
                            </p>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

/// Pill badges for article and project tags, in declared order.
#[component]
pub fn Tags(
    tags: &'static [&'static str],
    #[prop(default = "rounded-full px-3 py-1 text-[13px] bg-muted text-foreground/80")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <div class="flex flex-wrap gap-2">
            {tags.iter().map(|tag| view! { <span class=class>{*tag}</span> }).collect_view()}
        </div>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::app::render_html;
    use crate::content::{code_block, paragraph};

    fn tab(id: &str, body: &str) -> Tab {
        Tab {
            id: id.to_string(),
            label: id.to_uppercase(),
            body: vec![paragraph(body)],
        }
    }

    #[test]
    fn test_tabs_show_only_first_panel() {
        let html = render_html(|| {
            render_block(ContentBlock::Tabs(vec![
                tab("t1", "first body"),
                tab("t2", "second body"),
                tab("t3", "third body"),
            ]))
        });

        // every panel is mounted
        let first = html.find("first body").expect("t1 panel rendered");
        let second = html.find("second body").expect("t2 panel rendered");
        let third = html.find("third body").expect("t3 panel rendered");

        // and only the inactive ones are hidden
        let hidden: Vec<usize> = html.match_indices(r#"class="hidden""#).map(|(at, _)| at).collect();
        assert_eq!(hidden.len(), 2, "{html}");
        assert!(first < hidden[0] && hidden[0] < second);
        assert!(second < hidden[1] && hidden[1] < third);
    }

    #[test]
    fn test_empty_tabs_render_nothing() {
        let html = render_html(|| render_block(ContentBlock::Tabs(Vec::new())));
        assert!(!html.contains("<div"), "{html}");
        assert!(!html.contains("<button"), "{html}");
    }

    #[test]
    fn test_accordion_starts_collapsed() {
        let html = render_html(|| {
            render_block(ContentBlock::Accordion(vec![
                AccordionItem {
                    title: "Question one".to_string(),
                    body: vec![paragraph("answer one")],
                },
                AccordionItem {
                    title: "Question two".to_string(),
                    body: vec![paragraph("answer two")],
                },
            ]))
        });
        assert!(html.contains("answer one") && html.contains("answer two"));
        assert_eq!(html.matches(r#"hidden""#).count(), 2, "{html}");
        assert_eq!(html.matches(r#"aria-expanded="false""#).count(), 2, "{html}");
    }

    #[test]
    fn test_code_block_labels_default_language() {
        let html = render_html(|| render_block(code_block(Some("types.ts"), None, "type A = 1;")));
        assert!(html.contains("types.ts"), "{html}");
        assert!(html.contains(CodeSnippet::DEFAULT_LANGUAGE), "{html}");
        assert!(html.contains("Copy"), "{html}");
    }
}
