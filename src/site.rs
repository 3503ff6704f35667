//! Site identity and the static data behind the home page sections.

use crate::content::{AccordionItem, ContentBlock, Document, Feature, GridColumns, Tab};

pub const OWNER: &str = "shanDran";
pub const CONTACT_EMAIL: &str = "chandranshbinjola@outlook.com";
pub const GITHUB_URL: &str = "https://github.com/chandranshB";
pub const LINKEDIN_URL: &str = "https://www.linkedin.com/in/chandranshbinjola/";
pub const RESUME_PATH: &str = "resume.pdf";
pub const PORTRAIT_PATH: &str = "/images/shanDran.webp";

/// Anchors of the home page sections reachable from the header menu.
pub const MENU: &[(&str, &str)] = &[
    ("About", "about"),
    ("Work", "projects"),
    ("Skills", "skills"),
    ("Contact", "contact"),
];

pub struct CounterStat {
    pub value: u32,
    pub label: &'static str,
    pub suffix: &'static str,
}

pub const STATS: &[CounterStat] = &[
    CounterStat {
        value: 5,
        label: "Years Experience",
        suffix: "+",
    },
    CounterStat {
        value: 10,
        label: "Projects Completed",
        suffix: "+",
    },
    CounterStat {
        value: 5,
        label: "Happy Clients",
        suffix: "+",
    },
    CounterStat {
        value: 100,
        label: "Client Satisfaction",
        suffix: "%",
    },
];

pub struct Showcase {
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub url: Option<&'static str>,
    pub tags: &'static [&'static str],
}

pub const SELECTED_WORK: &[Showcase] = &[
    Showcase {
        title: "seetaNarayan Travels web app",
        description: "A complete dynamic travel booking system with proper booking system and authentication.",
        image: "https://seetanarayantravels.in/assets/logo-main.png",
        url: Some("https://seetanarayantravels.in"),
        tags: &["React", "Node.js", "PostgreSQL", "Vite", "ESLint"],
    },
    Showcase {
        title: "Spectra GeoSolutions website",
        description: "A website for Spectra GeoSolutions",
        image: "images/spectraGeosolutions.webp",
        url: Some("https://spectrageosolutions.com"),
        tags: &["PHP", "Jquery", "MySQL", "Linux", "devOps"],
    },
    Showcase {
        title: "Leave Calculator",
        description: "A website that tells you number of days you can miss/attend classes to be able to sit in the exams, i.e. 75%",
        image: "images/attCalc.svg",
        url: Some("https://chandranshb.github.io/attendanceTracker/"),
        tags: &["HTML", "JavaScript", "CSS", "React"],
    },
];

pub const SKILLS: &[&str] = &[
    "React",
    "TypeScript",
    "Next.js",
    "Node.js",
    "Tailwind CSS",
    "PostgreSQL",
    "MongoDB",
    "GraphQL",
    "REST API",
    "Docker",
    "AWS",
    "Git",
    "Figma",
    "UI/UX",
    "Jest",
    "Cypress",
    "React Native",
    "Express",
    "Redis",
    "Vercel",
];

pub struct Step {
    pub title: &'static str,
    pub description: &'static str,
}

pub const PROCESS: &[Step] = &[
    Step {
        title: "Discovery",
        description: "Understanding your goals, target audience, and project requirements.",
    },
    Step {
        title: "Design",
        description: "Creating intuitive interfaces with thoughtful user experiences.",
    },
    Step {
        title: "Development",
        description: "Building robust, scalable solutions with clean, maintainable code.",
    },
    Step {
        title: "Launch",
        description: "Deploying your project and ensuring everything runs smoothly.",
    },
];

pub struct Testimonial {
    pub quote: &'static str,
    pub author: &'static str,
    pub role: &'static str,
}

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        quote: "shanDran's ability to translate complex requirements into elegant, functional designs is exceptional. A true professional.",
        author: "shanDran",
        role: "I love my work tbh",
    },
    Testimonial {
        quote: "Working with shanDran was a game-changer for our project. The attention to detail and technical expertise is unmatched.",
        author: "ChandranshB",
        role: "the GOAT",
    },
    Testimonial {
        quote: "Not only did shanDran deliver beyond expectations, but the collaborative process made the entire project enjoyable.",
        author: "Vipul Panwar",
        role: "Founder, SeetaNarayan Travels",
    },
];

pub const FAQS: &[(&str, &str)] = &[
    (
        "What's your typical project timeline?",
        "Project timelines vary based on scope and complexity. A typical website takes 4-8 weeks from initial consultation to launch, while larger applications can take 3-6 months. I'll provide a detailed timeline during our initial discussion.",
    ),
    (
        "Do you work with clients remotely?",
        "Absolutely! I work with clients worldwide and have established processes for remote collaboration including regular video calls, shared project boards, and real-time communication channels.",
    ),
    (
        "What technologies do you specialize in?",
        "I specialize in modern web technologies including React, Next.js, TypeScript, Node.js, and various databases. I'm always learning new tools and frameworks to deliver the best solutions for each project.",
    ),
    (
        "Do you provide ongoing support after launch?",
        "Yes! I offer maintenance packages and ongoing support to ensure your project continues to run smoothly. This includes updates, bug fixes, and minor enhancements as needed.",
    ),
    (
        "What's your approach to responsive design?",
        "I follow a mobile-first approach, ensuring your project looks and works beautifully on all devices. Every project is thoroughly tested across different screen sizes and browsers before launch.",
    ),
];

/// The FAQ section is an ordinary accordion block.
pub fn faq_block() -> ContentBlock {
    ContentBlock::Accordion(
        FAQS.iter()
            .map(|(question, answer)| AccordionItem {
                title: question.to_string(),
                body: vec![crate::content::paragraph(*answer)],
            })
            .collect(),
    )
}

const SHOWCASE_TABS: &[(&str, &str, &[(&str, &str)])] = &[
    (
        "frontend",
        "Frontend",
        &[
            ("React & Next.js", "Building dynamic, server-rendered applications with the latest React features."),
            ("Performance", "Optimized code and lazy loading for lightning-fast user experiences."),
            ("Responsive Design", "Seamless experiences across all devices and screen sizes."),
        ],
    ),
    (
        "backend",
        "Backend",
        &[
            ("Database Design", "Efficient data modeling with PostgreSQL and MongoDB."),
            ("Security First", "Industry-standard authentication and data protection practices."),
            ("API Development", "RESTful and GraphQL APIs built for scale and performance."),
        ],
    ),
    (
        "mobile",
        "Mobile",
        &[
            ("React Native", "Cross-platform mobile apps with native performance."),
            ("Offline Support", "Apps that work seamlessly even without connectivity."),
            ("App Store Ready", "Deployment expertise for both iOS and Android platforms."),
        ],
    ),
];

/// The tech showcase: one tab per discipline, each a grid of feature cards.
fn showcase_features(features: &[(&str, &str)]) -> Document {
    vec![ContentBlock::Features {
        features: features
            .iter()
            .map(|(title, description)| Feature {
                title: title.to_string(),
                description: description.to_string(),
            })
            .collect(),
        columns: GridColumns::Three,
    }]
}

/// Tech showcase as a tab strip, for wide screens.
pub fn tech_showcase_block() -> ContentBlock {
    ContentBlock::Tabs(
        SHOWCASE_TABS
            .iter()
            .map(|(id, label, features)| Tab {
                id: id.to_string(),
                label: label.to_string(),
                body: showcase_features(features),
            })
            .collect(),
    )
}

/// The same showcase folded into an accordion, for narrow screens.
pub fn tech_showcase_accordion() -> ContentBlock {
    ContentBlock::Accordion(
        SHOWCASE_TABS
            .iter()
            .map(|(_, label, features)| AccordionItem {
                title: label.to_string(),
                body: showcase_features(features),
            })
            .collect(),
    )
}

/// Index of the neighbouring carousel item, wrapping at both ends.
pub fn cycle(index: usize, len: usize, forward: bool) -> usize {
    if len == 0 {
        return 0;
    }
    if forward {
        (index + 1) % len
    } else {
        (index + len - 1) % len
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactMessage {
    /// `mailto:` link that opens the visitor's mail client with the message
    /// filled in.
    pub fn mailto_href(&self, to: &str) -> String {
        let subject = format!("Message from {}", self.name);
        let body = format!(
            "Name: {}\nEmail: {}\n\nMessage:\n{}",
            self.name, self.email, self.message
        );
        format!(
            "mailto:{to}?subject={}&body={}",
            urlencoding::encode(&subject),
            urlencoding::encode(&body)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_wraps() {
        assert_eq!(cycle(0, 3, true), 1);
        assert_eq!(cycle(2, 3, true), 0);
        assert_eq!(cycle(0, 3, false), 2);
        assert_eq!(cycle(1, 3, false), 0);
        assert_eq!(cycle(0, 0, true), 0);
        assert_eq!(cycle(0, 1, false), 0);
    }

    #[test]
    fn test_mailto_encodes_everything() {
        let message = ContactMessage {
            name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            message: "Hi & hello?".to_string(),
        };
        assert_eq!(
            message.mailto_href("me@example.com"),
            "mailto:me@example.com?subject=Message%20from%20Ada%20Lovelace&body=Name%3A%20Ada%20Lovelace%0AEmail%3A%20ada%40example.com%0A%0AMessage%3A%0AHi%20%26%20hello%3F"
        );
    }

    #[test]
    fn test_faq_block_is_accordion() {
        match faq_block() {
            ContentBlock::Accordion(items) => {
                assert_eq!(items.len(), FAQS.len());
                assert_eq!(items[0].title, FAQS[0].0);
            }
            other => panic!("expected accordion, got {other:?}"),
        }
    }

    #[test]
    fn test_showcase_tabs() {
        match tech_showcase_block() {
            ContentBlock::Tabs(tabs) => {
                let ids: Vec<&str> = tabs.iter().map(|t| t.id.as_str()).collect();
                assert_eq!(ids, vec!["frontend", "backend", "mobile"]);
                assert!(tabs.iter().all(|t| t.body.len() == 1));
            }
            other => panic!("expected tabs, got {other:?}"),
        }
    }

    #[test]
    fn test_showcase_accordion_mirrors_tabs() {
        let (ContentBlock::Tabs(tabs), ContentBlock::Accordion(items)) =
            (tech_showcase_block(), tech_showcase_accordion())
        else {
            panic!("expected tabs and an accordion");
        };
        assert_eq!(tabs.len(), items.len());
        for (tab, item) in tabs.iter().zip(&items) {
            assert_eq!(tab.label, item.title);
            assert_eq!(tab.body, item.body);
        }
    }
}
