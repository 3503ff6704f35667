use crate::content::{
    callout, heading, image, list, paragraph, quote, rich_list, strong, subheading, text,
    CalloutKind, ContentBlock, Document, ImageSize,
};
use crate::registry::{Keyed, Registry};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectMeta {
    pub id: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub thumbnail: &'static str,
    pub tags: &'static [&'static str],
    pub year: &'static str,
    pub duration: &'static str,
    pub role: &'static str,
}

impl Keyed for ProjectMeta {
    fn key(&self) -> &str {
        self.id
    }
}

pub static PROJECTS: Registry<ProjectMeta> = Registry::from_static(&[ProjectMeta {
    id: "SNT",
    title: "SeetaNarayan Travels",
    subtitle: "A complete shopping experience with seamless checkout",
    thumbnail: "https://images.unsplash.com/photo-1750056393331-82e69d28c9d9?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&q=80&w=1080",
    tags: &["React", "Node.js", "PostgreSQL"],
    year: "2024",
    duration: "4 months",
    role: "Full-stack Developer",
}]);

pub fn project_of(id: &str) -> Option<&'static ProjectMeta> {
    PROJECTS.get(id)
}

/// Case-study body shared by every project. Only the hero image comes from
/// the project itself.
pub fn project_document(project: &ProjectMeta) -> Document {
    vec![
        image(project.thumbnail, project.title, None, ImageSize::Full),
        heading("Overview"),
        paragraph("This project was built to solve real-world problems and provide users with an intuitive, seamless experience. The development process involved careful planning, iterative design, and robust implementation."),
        paragraph("Working on this project taught me valuable lessons about scalability, user experience, and the importance of clean, maintainable code."),
        ContentBlock::Divider,
        heading("The Challenge"),
        paragraph("Every great project starts with a challenge. For this one, the main obstacles were:"),
        list([
            "Building a scalable architecture that could handle growing user demands",
            "Creating an intuitive interface that works seamlessly across all devices",
            "Implementing real-time features without compromising performance",
            "Ensuring data security and user privacy throughout the application",
        ]),
        callout(
            CalloutKind::Info,
            [text("Understanding the problem deeply before jumping into solutions is crucial for successful project outcomes.")],
        ),
        heading("Technical Implementation"),
        subheading("Architecture"),
        paragraph("The application was built using a modern tech stack, with careful consideration for performance, scalability, and developer experience."),
        image(
            "https://images.unsplash.com/photo-1551288049-bebda4e38f71?w=800",
            "Dashboard view",
            Some("The main dashboard interface with real-time data updates"),
            ImageSize::Full,
        ),
        subheading("Key Features"),
        rich_list([
            vec![
                strong("Real-time updates:"),
                text(" Implemented WebSocket connections for instant data synchronization"),
            ],
            vec![
                strong("Responsive design:"),
                text(" Fully optimized for desktop, tablet, and mobile devices"),
            ],
            vec![
                strong("Performance optimization:"),
                text(" Lazy loading, code splitting, and efficient caching strategies"),
            ],
            vec![
                strong("Security:"),
                text(" JWT authentication, input validation, and data encryption"),
            ],
        ]),
        ContentBlock::Divider,
        heading("Results & Impact"),
        paragraph("The project exceeded expectations and delivered measurable results:"),
        callout(
            CalloutKind::Success,
            [text("Achieved a 60% increase in user engagement and reduced page load times by 45% through careful optimization.")],
        ),
        image(
            "https://images.unsplash.com/photo-1460925895917-afdab827c52f?w=800",
            "Analytics dashboard",
            Some("Performance metrics showing significant improvements"),
            ImageSize::Medium,
        ),
        heading("Lessons Learned"),
        list([
            "Start with a solid architecture, it's harder to fix later",
            "User feedback is invaluable throughout the development process",
            "Performance should be a priority from day one, not an afterthought",
            "Documentation and code comments save time in the long run",
            "Testing early and often prevents costly bugs in production",
        ]),
        quote("\"This project pushed me to think differently about scalability and user experience. The challenges we faced became opportunities for innovation.\""),
        ContentBlock::Divider,
        paragraph("Want to discuss this project or collaborate on something similar? Feel free to reach out!"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Figure;
    use crate::nav::{NavigationState, Screen, View};

    #[test]
    fn test_lookup() {
        assert_eq!(project_of("SNT").map(|p| p.year), Some("2024"));
        assert!(project_of("task-management").is_none());
        assert!(project_of("").is_none());
    }

    #[test]
    fn test_shared_template_differs_only_in_hero() {
        let a = ProjectMeta {
            id: "a",
            title: "Alpha",
            subtitle: "",
            thumbnail: "a.png",
            tags: &[],
            year: "2023",
            duration: "1 month",
            role: "Dev",
        };
        let b = ProjectMeta {
            id: "b",
            title: "Beta",
            thumbnail: "b.png",
            ..a
        };
        let doc_a = project_document(&a);
        let doc_b = project_document(&b);
        assert_eq!(doc_a[1..], doc_b[1..]);
        assert_eq!(
            doc_a[0],
            ContentBlock::Image(Figure {
                src: "a.png".to_string(),
                alt: "Alpha".to_string(),
                caption: None,
                size: ImageSize::Full,
            })
        );
    }

    #[test]
    fn test_unknown_project_renders_nothing() {
        let mut state = NavigationState::new();
        state.navigate(View::ProjectDetail, Some("fitness-tracker"));
        let rendered = match state.screen() {
            Screen::Project(id) => project_of(&id).map(project_document),
            _ => None,
        };
        assert!(rendered.is_none());
    }

    #[test]
    fn test_list_is_declared_order() {
        let ids: Vec<&str> = PROJECTS.ids().collect();
        assert_eq!(ids, vec!["SNT"]);
    }
}
