mod articles;

use chrono::NaiveDate;
use thiserror::Error;

use crate::content::Document;
use crate::registry::{Keyed, Registry};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArticleMeta {
    pub id: &'static str,
    pub title: &'static str,
    pub published: NaiveDate,
    pub excerpt: &'static str,
    pub tags: &'static [&'static str],
    pub read_time: &'static str,
}

impl ArticleMeta {
    /// Long-form date as shown on cards and article headers, e.g.
    /// "January 15, 2025".
    pub fn published_display(&self) -> String {
        self.published.format("%B %-d, %Y").to_string()
    }
}

impl Keyed for ArticleMeta {
    fn key(&self) -> &str {
        self.id
    }
}

/// The body of an article, produced fresh on every render.
#[derive(Debug, Clone, Copy)]
pub struct ArticleBody {
    pub id: &'static str,
    pub render: fn() -> Document,
}

impl Keyed for ArticleBody {
    fn key(&self) -> &str {
        self.id
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Article {
    pub meta: ArticleMeta,
    pub body: Document,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum JournalError {
    #[error("journal entry not found: {0}")]
    UnknownEntry(String),
    #[error("journal entry has no content: {0}")]
    MissingContent(String),
}

pub(crate) const fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    match NaiveDate::from_ymd_opt(year, month, day) {
        Some(date) => date,
        None => panic!("invalid calendar date"),
    }
}

/// Journal entries in display order. Newest first by convention only; the
/// list shows them exactly as declared here.
pub static ARTICLES: Registry<ArticleMeta> = Registry::from_static(&[
    ArticleMeta {
        id: "solving-state-management",
        title: "Solving Complex State Management in React",
        published: ymd(2025, 1, 15),
        excerpt: "Exploring different approaches to managing global state in large React applications and when to use each solution.",
        tags: &["React", "State Management", "Architecture"],
        read_time: "5 min read",
    },
    ArticleMeta {
        id: "performance-optimization",
        title: "Performance Optimization Tips",
        published: ymd(2025, 1, 8),
        excerpt: "Practical techniques I learned while optimizing a production app, reducing load time by 60%.",
        tags: &["Performance", "Web Vitals", "Optimization"],
        read_time: "7 min read",
    },
    ArticleMeta {
        id: "typescript-patterns",
        title: "TypeScript Patterns That Changed My Code",
        published: ymd(2024, 12, 20),
        excerpt: "Advanced TypeScript patterns and generics that made my code more type-safe and maintainable.",
        tags: &["TypeScript", "Best Practices", "Code Quality"],
        read_time: "6 min read",
    },
]);

pub static BODIES: Registry<ArticleBody> = Registry::from_static(&[
    ArticleBody {
        id: "solving-state-management",
        render: articles::state_management,
    },
    ArticleBody {
        id: "performance-optimization",
        render: articles::performance_optimization,
    },
    ArticleBody {
        id: "typescript-patterns",
        render: articles::typescript_patterns,
    },
    // written ahead of its listing
    ArticleBody {
        id: "snt-concurrency-architecture",
        render: articles::snt_concurrency,
    },
]);

pub fn metadata_of(id: &str) -> Option<&'static ArticleMeta> {
    ARTICLES.get(id)
}

pub fn content_of(id: &str) -> Option<Document> {
    BODIES.get(id).map(|body| (body.render)())
}

pub fn resolve(id: &str) -> Result<Article, JournalError> {
    resolve_in(&ARTICLES, &BODIES, id)
}

/// Looks up both halves of an article. Metadata is checked first, so an entry
/// that has a body but no listing is reported as unknown.
pub fn resolve_in(
    meta: &Registry<ArticleMeta>,
    bodies: &Registry<ArticleBody>,
    id: &str,
) -> Result<Article, JournalError> {
    let meta = *meta
        .get(id)
        .ok_or_else(|| JournalError::UnknownEntry(id.to_string()))?;
    let body = bodies
        .get(id)
        .ok_or_else(|| JournalError::MissingContent(id.to_string()))?;
    Ok(Article {
        meta,
        body: (body.render)(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{block_count, paragraph};
    use crate::nav::{NavigationState, Screen, View};

    fn meta(id: &'static str, published: NaiveDate) -> ArticleMeta {
        ArticleMeta {
            id,
            title: id,
            published,
            excerpt: "",
            tags: &[],
            read_time: "1 min read",
        }
    }

    fn one_paragraph() -> Document {
        vec![paragraph("body")]
    }

    fn fixture() -> (Registry<ArticleMeta>, Registry<ArticleBody>) {
        let metas = Registry::new(vec![
            meta("a", ymd(2020, 1, 1)),
            meta("b", ymd(2025, 6, 1)),
            meta("c", ymd(2010, 3, 9)),
        ]);
        let bodies = Registry::new(vec![
            ArticleBody {
                id: "a",
                render: one_paragraph,
            },
            ArticleBody {
                id: "b",
                render: one_paragraph,
            },
            ArticleBody {
                id: "orphan",
                render: one_paragraph,
            },
        ]);
        (metas, bodies)
    }

    /// Follows the root router from a navigation request to what a detail
    /// view would render.
    fn render_after_navigate(
        metas: &Registry<ArticleMeta>,
        bodies: &Registry<ArticleBody>,
        id: &str,
    ) -> Option<Article> {
        let mut state = NavigationState::new();
        state.navigate(View::ArticleDetail, Some(id));
        match state.screen() {
            Screen::Article(id) => resolve_in(metas, bodies, &id).ok(),
            _ => None,
        }
    }

    #[test]
    fn test_renders_iff_content_exists() {
        let (metas, bodies) = fixture();
        for entry in metas.iter() {
            let rendered = render_after_navigate(&metas, &bodies, entry.id);
            assert_eq!(
                rendered.is_some(),
                bodies.contains(entry.id),
                "entry {}",
                entry.id
            );
            if let Some(article) = rendered {
                assert!(block_count(&article.body) > 0);
            }
        }
    }

    #[test]
    fn test_resolution_errors() {
        let (metas, bodies) = fixture();
        assert_eq!(
            resolve_in(&metas, &bodies, "c"),
            Err(JournalError::MissingContent("c".to_string()))
        );
        assert_eq!(
            resolve_in(&metas, &bodies, "nope"),
            Err(JournalError::UnknownEntry("nope".to_string()))
        );
        // a body alone is not enough to be listed or opened
        assert_eq!(
            resolve_in(&metas, &bodies, "orphan"),
            Err(JournalError::UnknownEntry("orphan".to_string()))
        );
    }

    #[test]
    fn test_list_order_ignores_dates() {
        let (metas, _) = fixture();
        let ids: Vec<&str> = metas.ids().collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_every_listed_article_resolves() {
        for entry in ARTICLES.iter() {
            let article = resolve(entry.id).expect("listed article should resolve");
            assert!(!article.body.is_empty());
            assert_eq!(article.meta.id, entry.id);
        }
    }

    #[test]
    fn test_published_display() {
        let entry = metadata_of("solving-state-management").expect("entry exists");
        assert_eq!(entry.published_display(), "January 15, 2025");
        let entry = metadata_of("typescript-patterns").expect("entry exists");
        assert_eq!(entry.published_display(), "December 20, 2024");
    }

    #[test]
    fn test_lookups() {
        assert!(metadata_of("performance-optimization").is_some());
        assert!(metadata_of("missing").is_none());
        assert!(content_of("snt-concurrency-architecture").is_some());
        assert!(metadata_of("snt-concurrency-architecture").is_none());
        assert!(content_of("missing").is_none());
    }

    #[test]
    fn test_ids_are_unique() {
        let mut ids: Vec<&str> = ARTICLES.ids().collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), ARTICLES.len());

        let mut ids: Vec<&str> = BODIES.ids().collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), BODIES.len());
    }
}
