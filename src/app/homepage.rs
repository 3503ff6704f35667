use leptos::{either::Either, ev::SubmitEvent, html, prelude::*};
use leptos_meta::Title;

use super::blocks::{render_block, Tags};
use super::{scroll_to_section, use_navigator};
use crate::nav::View;
use crate::site::{
    cycle, faq_block, tech_showcase_accordion, tech_showcase_block, ContactMessage, Testimonial,
    CONTACT_EMAIL, OWNER, PORTRAIT_PATH, PROCESS, RESUME_PATH, SELECTED_WORK, SKILLS, STATS,
    TESTIMONIALS,
};

/// Renders the home page of your application.
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text="Developer. Designer. Creator." />
        <main>
            <Hero />
            <About />
            <Stats />
            <SelectedWork />
            <TechShowcase />
            <Skills />
            <Process />
            <Testimonials />
            <Faq />
            <CallToAction />
            <Contact />
        </main>
    }
}

#[component]
fn SectionHeading(
    eyebrow: &'static str,
    title: &'static str,
    #[prop(optional)] lead: Option<&'static str>,
) -> impl IntoView {
    view! {
        <div class="text-center mb-16">
            <p class="text-[14px] text-primary mb-3 tracking-wide uppercase">{eyebrow}</p>
            <h2 class="text-[40px] md:text-[48px] leading-[1.08] tracking-tight mb-4">{title}</h2>
            {lead
                .map(|lead| {
                    view! {
                        <p class="text-[19px] text-muted-foreground max-w-[600px] mx-auto leading-[1.5]">
                            {lead}
                        </p>
                    }
                })}
        </div>
    }
}

#[component]
fn Hero() -> impl IntoView {
    view! {
        <section class="min-h-screen flex items-center justify-center px-5 pt-20 md:px-8">
            <div class="max-w-[980px] w-full text-center space-y-8 py-20">
                <div class="space-y-6">
                    <h1 class="text-[48px] md:text-[64px] lg:text-[80px] leading-[1.05] tracking-tight">
                        "Developer." <br /> "Designer." <br /> "Creator."
                    </h1>
                    <p class="text-[21px] md:text-[24px] text-muted-foreground max-w-[700px] mx-auto leading-[1.4] tracking-tight">
                        "Crafting beautiful digital experiences that combine thoughtful design with efficiency & powerful technology."
                    </p>
                </div>
                <div class="flex flex-col sm:flex-row items-center justify-center gap-4 pt-4">
                    <button
                        on:click=move |_| scroll_to_section("projects")
                        class="rounded-full px-8 h-12 text-[17px] bg-primary text-white hover:bg-primary/90 transition-all"
                    >
                        "See my work →"
                    </button>
                    <button
                        on:click=move |_| scroll_to_section("contact")
                        class="rounded-full px-8 h-12 text-[17px] text-primary hover:bg-primary/5 transition-all"
                    >
                        "Get in touch"
                    </button>
                </div>
            </div>
        </section>
    }
}

#[component]
fn About() -> impl IntoView {
    view! {
        <section id="about" class="py-32 px-5 md:px-8">
            <div class="max-w-[980px] mx-auto grid lg:grid-cols-2 gap-20 items-center">
                <div class="space-y-8 order-2 lg:order-1">
                    <p class="text-[14px] text-primary mb-3 tracking-wide uppercase">"About"</p>
                    <h2 class="text-[40px] md:text-[48px] leading-[1.08] tracking-tight mb-6">
                        {format!("hi, I'm {OWNER}")}
                    </h2>
                    <div class="space-y-5 text-[19px] text-foreground/80 leading-[1.5] tracking-tight">
                        <p>
                            "I'm a developer and designer who believes that great products come from understanding both the technical possibilities and human needs."
                        </p>
                        <p>
                            "For the past 5 years, I've been building web applications that blend thoughtful design with clean, efficient code. My work spans from early-stage startups to established companies."
                        </p>
                        <p>
                            "When I'm not coding, you'll find me exploring new design systems, contributing to open source, or learning about the latest web technologies."
                        </p>
                    </div>
                </div>
                <div class="order-1 lg:order-2 relative rounded-[28px] overflow-hidden aspect-[4/5] shadow-xl">
                    <img src=PORTRAIT_PATH alt="Workspace" class="w-full h-full object-cover" />
                </div>
            </div>
        </section>
    }
}

#[component]
fn Stats() -> impl IntoView {
    view! {
        <section class="py-32 px-5 md:px-8">
            <div class="max-w-[980px] mx-auto grid grid-cols-2 lg:grid-cols-4 gap-8 lg:gap-16">
                {STATS
                    .iter()
                    .map(|stat| {
                        view! {
                            <div class="p-10 rounded-[28px] glass-card border border-black/5 dark:border-white/5 text-center">
                                <div class="text-[48px] md:text-[56px] leading-none tracking-tight text-primary mb-3">
                                    {stat.value}
                                    {stat.suffix}
                                </div>
                                <p class="text-[17px] text-muted-foreground">{stat.label}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn SelectedWork() -> impl IntoView {
    let navigator = use_navigator();
    view! {
        <section id="projects" class="py-32 px-5 md:px-8">
            <div class="max-w-[980px] mx-auto">
                <SectionHeading
                    eyebrow="Portfolio"
                    title="Selected Work"
                    lead="Recent projects that showcase my approach to design and development."
                />
                <div class="space-y-24">
                    {SELECTED_WORK
                        .iter()
                        .enumerate()
                        .map(|(index, work)| {
                            // alternate the image side on wide screens
                            let (image_order, text_order) = if index % 2 == 1 {
                                ("lg:order-2", "lg:order-1")
                            } else {
                                ("", "")
                            };
                            view! {
                                <div class="overflow-hidden rounded-[28px] shadow-xl bg-background dark:bg-card grid lg:grid-cols-2">
                                    <div class=format!(
                                        "relative aspect-[4/3] lg:aspect-auto overflow-hidden {image_order}",
                                    )>
                                        <img
                                            src=work.image
                                            alt=work.title
                                            loading="lazy"
                                            class="w-full h-full object-contain"
                                        />
                                    </div>
                                    <div class=format!(
                                        "p-12 lg:p-16 flex flex-col justify-center {text_order}",
                                    )>
                                        <h3 class="text-[32px] leading-[1.125] tracking-tight mb-4">
                                            {work.title}
                                        </h3>
                                        <p class="text-[17px] text-muted-foreground leading-[1.5] mb-6">
                                            {work.description}
                                        </p>
                                        <div class="mb-8">
                                            <Tags tags=work.tags />
                                        </div>
                                        {match work.url {
                                            Some(url) => Either::Left(view! {
                                                <a
                                                    href=url
                                                    target="_blank"
                                                    rel="noreferrer"
                                                    class="text-[17px] text-primary hover:text-primary/80 transition-colors"
                                                >
                                                    "View project ↗"
                                                </a>
                                            }),
                                            None => Either::Right(view! {
                                                <span
                                                    aria-disabled="true"
                                                    class="text-[17px] text-muted-foreground opacity-60 cursor-not-allowed"
                                                >
                                                    "View project"
                                                </span>
                                            }),
                                        }}
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="text-center mt-16">
                    <button
                        on:click=move |_| navigator.navigate(View::ProjectsList, None)
                        class="rounded-full px-8 h-12 text-[17px] border border-black/10 dark:border-white/10 hover:bg-muted/50 transition-all"
                    >
                        "All case studies →"
                    </button>
                </div>
            </div>
        </section>
    }
}

#[component]
fn TechShowcase() -> impl IntoView {
    view! {
        <section class="py-32 px-5 md:px-8">
            <div class="max-w-[980px] mx-auto">
                <SectionHeading
                    eyebrow="Expertise"
                    title="Full-stack capabilities"
                    lead="From frontend to backend, mobile to web, delivering complete solutions."
                />
                <div class="hidden md:block">{render_block(tech_showcase_block())}</div>
                <div class="md:hidden">{render_block(tech_showcase_accordion())}</div>
            </div>
        </section>
    }
}

#[component]
fn Skills() -> impl IntoView {
    view! {
        <section id="skills" class="py-32 px-5 md:px-8">
            <div class="max-w-[980px] mx-auto">
                <SectionHeading eyebrow="Tech Stack" title="Technologies I use" />
                <div class="flex flex-wrap justify-center gap-3">
                    {SKILLS
                        .iter()
                        .map(|skill| {
                            view! {
                                <div class="px-5 py-3 bg-muted/50 dark:bg-card rounded-full border border-black/5 dark:border-white/5 text-[15px] hover:shadow-md transition-all cursor-default">
                                    {*skill}
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn Process() -> impl IntoView {
    view! {
        <section id="process" class="py-32 px-5 md:px-8">
            <div class="max-w-[980px] mx-auto">
                <SectionHeading
                    eyebrow="Process"
                    title="How I work"
                    lead="A streamlined approach to turning your ideas into reality."
                />
                <div class="grid md:grid-cols-2 lg:grid-cols-4 gap-8">
                    {PROCESS
                        .iter()
                        .enumerate()
                        .map(|(index, step)| {
                            view! {
                                <div class="relative text-center">
                                    <div class="inline-flex items-center justify-center w-20 h-20 rounded-full bg-background dark:bg-card border-2 border-primary/20 mb-6 text-primary text-[21px]">
                                        {index + 1}
                                    </div>
                                    <h3 class="text-[21px] leading-[1.19] tracking-tight mb-3">
                                        {step.title}
                                    </h3>
                                    <p class="text-[15px] text-muted-foreground leading-[1.5]">
                                        {step.description}
                                    </p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

fn testimonial_card(testimonial: &'static Testimonial) -> impl IntoView {
    view! {
        <div class="relative p-8 rounded-[28px] glass-card">
            <p class="text-[17px] leading-[1.5] mb-6">{format!("\"{}\"", testimonial.quote)}</p>
            <p class="text-[15px] mb-0.5">{testimonial.author}</p>
            <p class="text-[13px] text-muted-foreground">{testimonial.role}</p>
        </div>
    }
}

#[component]
fn Testimonials() -> impl IntoView {
    let (current, set_current) = signal(0usize);
    let step = move |forward: bool| {
        set_current.update(|index| *index = cycle(*index, TESTIMONIALS.len(), forward));
    };

    view! {
        <section class="py-32 px-5 md:px-8">
            <div class="max-w-[980px] mx-auto">
                <SectionHeading eyebrow="Testimonials" title="What people say" />

                <div class="hidden md:grid md:grid-cols-3 gap-8">
                    {TESTIMONIALS.iter().map(testimonial_card).collect_view()}
                </div>

                <div class="md:hidden">
                    {move || TESTIMONIALS.get(current()).map(testimonial_card)}
                    <div class="flex items-center justify-center gap-4 mt-8">
                        <button
                            on:click=move |_| step(false)
                            aria-label="Previous testimonial"
                            class="w-10 h-10 rounded-full glass-card hover:bg-primary hover:text-white transition-all"
                        >
                            "‹"
                        </button>
                        <div class="flex gap-2">
                            {(0..TESTIMONIALS.len())
                                .map(|index| {
                                    view! {
                                        <button
                                            on:click=move |_| set_current(index)
                                            aria-label=format!("Go to testimonial {}", index + 1)
                                            class=move || {
                                                if current() == index {
                                                    "h-2 rounded-full transition-all duration-300 bg-primary w-8"
                                                } else {
                                                    "h-2 rounded-full transition-all duration-300 bg-muted-foreground/30 w-2"
                                                }
                                            }
                                        />
                                    }
                                })
                                .collect_view()}
                        </div>
                        <button
                            on:click=move |_| step(true)
                            aria-label="Next testimonial"
                            class="w-10 h-10 rounded-full glass-card hover:bg-primary hover:text-white transition-all"
                        >
                            "›"
                        </button>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn Faq() -> impl IntoView {
    view! {
        <section class="py-32 px-5 md:px-8">
            <div class="max-w-[780px] mx-auto">
                <SectionHeading eyebrow="FAQ" title="Frequently asked questions" />
                {render_block(faq_block())}
            </div>
        </section>
    }
}

#[component]
fn CallToAction() -> impl IntoView {
    view! {
        <section class="py-32 px-5 md:px-8">
            <div class="max-w-[780px] mx-auto text-center bg-background dark:bg-card rounded-[40px] p-12 md:p-16 shadow-2xl border border-black/5 dark:border-white/5">
                <h2 class="text-[40px] md:text-[48px] leading-[1.08] tracking-tight mb-6">
                    "Ready to start your project?"
                </h2>
                <p class="text-[19px] text-muted-foreground leading-[1.5] mb-10 max-w-[600px] mx-auto">
                    "Let's discuss how we can work together to bring your vision to life with cutting-edge technology and beautiful design."
                </p>
                <div class="flex flex-col sm:flex-row items-center justify-center gap-4">
                    <button
                        on:click=move |_| scroll_to_section("contact")
                        class="rounded-full px-8 h-12 text-[17px] bg-primary text-white hover:bg-primary/90 transition-all"
                    >
                        "Get in touch →"
                    </button>
                    <a
                        href=RESUME_PATH
                        download="HIRE ME ASAP.pdf"
                        class="inline-flex items-center rounded-full px-8 h-12 text-[17px] border border-black/10 dark:border-white/10 hover:bg-muted/50 transition-all"
                    >
                        "Download resume"
                    </a>
                </div>
            </div>
        </section>
    }
}

#[cfg(feature = "hydrate")]
fn open_mail_client(href: &str) {
    if let Err(err) = window().location().set_href(href) {
        log::error!("could not open the mail client: {err:?}");
    }
}

#[cfg(not(feature = "hydrate"))]
fn open_mail_client(_href: &str) {}

#[component]
fn Contact() -> impl IntoView {
    let name_ref = NodeRef::<html::Input>::new();
    let email_ref = NodeRef::<html::Input>::new();
    let message_ref = NodeRef::<html::Textarea>::new();

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let (Some(name), Some(email), Some(message)) = (
            name_ref.get_untracked(),
            email_ref.get_untracked(),
            message_ref.get_untracked(),
        ) else {
            return;
        };
        let href = ContactMessage {
            name: name.value(),
            email: email.value(),
            message: message.value(),
        }
        .mailto_href(CONTACT_EMAIL);
        open_mail_client(&href);
        name.set_value("");
        email.set_value("");
        message.set_value("");
    };

    let field = "h-12 px-4 w-full rounded-[16px] bg-muted/50 dark:bg-background/50 border border-black/10 dark:border-white/10 focus:border-primary transition-all text-[17px]";

    view! {
        <section id="contact" class="py-32 px-5 md:px-8">
            <div class="max-w-[980px] mx-auto">
                <SectionHeading
                    eyebrow="Contact"
                    title="Let's work together"
                    lead="Have a project in mind? Let's discuss how we can bring your ideas to life."
                />
                <form on:submit=on_submit>
                    <div class="glass-card rounded-[32px] p-8 md:p-12 shadow-2xl border border-black/5 dark:border-white/10">
                        <div class="grid md:grid-cols-2 gap-6 mb-6">
                            <div class="space-y-2">
                                <label for="name" class="text-[15px]">"Name"</label>
                                <input
                                    id="name"
                                    type="text"
                                    placeholder="Your name"
                                    required=true
                                    node_ref=name_ref
                                    class=field
                                />
                            </div>
                            <div class="space-y-2">
                                <label for="email" class="text-[15px]">"Email"</label>
                                <input
                                    id="email"
                                    type="email"
                                    placeholder="your.email@example.com"
                                    required=true
                                    node_ref=email_ref
                                    class=field
                                />
                            </div>
                        </div>
                        <div class="space-y-2 mb-8">
                            <label for="message" class="text-[15px]">"Message"</label>
                            <textarea
                                id="message"
                                placeholder="Tell me about your project..."
                                rows=6
                                required=true
                                node_ref=message_ref
                                class="px-4 py-3 w-full rounded-[16px] bg-muted/50 dark:bg-background/50 border border-black/10 dark:border-white/10 focus:border-primary transition-all resize-none text-[17px] leading-[1.6]"
                            />
                        </div>
                        <button
                            type="submit"
                            class="w-full h-12 rounded-full text-[17px] bg-primary text-white hover:bg-primary/90 transition-all shadow-lg"
                        >
                            "Send message"
                        </button>
                    </div>
                </form>
            </div>
        </section>
    }
}
