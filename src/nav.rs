//! In-memory navigation state for the whole site.
//!
//! There is no URL routing: the page always starts on [`View::Home`] and the
//! state only lives as long as the page does.

/// The fixed set of top-level views.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum View {
    #[default]
    Home,
    InsightsList,
    ArticleDetail,
    ProjectsList,
    ProjectDetail,
}

/// What the root should mount for the current state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    Home,
    Insights,
    Article(String),
    Projects,
    Project(String),
    /// A detail view without a selected identifier.
    Blank,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavigationState {
    current: View,
    selected_article: Option<String>,
    selected_project: Option<String>,
}

impl NavigationState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Switches to `view`.
    ///
    /// Detail views take `id` as their selection (an empty id counts as none)
    /// without checking it exists; the detail view deals with unknown ids.
    /// Going back to a list view clears that list's selection.
    pub fn navigate(&mut self, view: View, id: Option<&str>) {
        let id = id.filter(|id| !id.is_empty()).map(str::to_string);
        match view {
            View::ArticleDetail => self.selected_article = id,
            View::ProjectDetail => self.selected_project = id,
            View::InsightsList => self.selected_article = None,
            View::ProjectsList => self.selected_project = None,
            View::Home => {}
        }
        self.current = view;
    }

    pub fn current(&self) -> View {
        self.current
    }

    pub fn selected_article(&self) -> Option<&str> {
        self.selected_article.as_deref()
    }

    pub fn selected_project(&self) -> Option<&str> {
        self.selected_project.as_deref()
    }

    pub fn screen(&self) -> Screen {
        match self.current {
            View::Home => Screen::Home,
            View::InsightsList => Screen::Insights,
            View::ProjectsList => Screen::Projects,
            View::ArticleDetail => self
                .selected_article
                .clone()
                .map_or(Screen::Blank, Screen::Article),
            View::ProjectDetail => self
                .selected_project
                .clone()
                .map_or(Screen::Blank, Screen::Project),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_home() {
        let state = NavigationState::new();
        assert_eq!(state.current(), View::Home);
        assert_eq!(state.screen(), Screen::Home);
        assert!(state.selected_article().is_none());
        assert!(state.selected_project().is_none());
    }

    #[test]
    fn test_detail_sets_selection() {
        let mut state = NavigationState::new();
        state.navigate(View::ArticleDetail, Some("typescript-patterns"));
        assert_eq!(state.current(), View::ArticleDetail);
        assert_eq!(state.selected_article(), Some("typescript-patterns"));
        assert_eq!(
            state.screen(),
            Screen::Article("typescript-patterns".to_string())
        );

        state.navigate(View::ProjectDetail, Some("SNT"));
        assert_eq!(state.screen(), Screen::Project("SNT".to_string()));
        // the article selection is untouched by project navigation
        assert_eq!(state.selected_article(), Some("typescript-patterns"));
    }

    #[test]
    fn test_back_clears_selection() {
        let mut state = NavigationState::new();
        state.navigate(View::ArticleDetail, Some("a"));
        state.navigate(View::InsightsList, None);
        assert_eq!(state.current(), View::InsightsList);
        assert!(state.selected_article().is_none());

        state.navigate(View::ProjectDetail, Some("p"));
        state.navigate(View::ProjectsList, Some("ignored"));
        assert!(state.selected_project().is_none());
    }

    #[test]
    fn test_unvalidated_ids_are_kept() {
        let mut state = NavigationState::new();
        state.navigate(View::ArticleDetail, Some("does-not-exist"));
        assert_eq!(state.screen(), Screen::Article("does-not-exist".to_string()));
    }

    #[test]
    fn test_detail_without_id_is_blank() {
        let mut state = NavigationState::new();
        state.navigate(View::ArticleDetail, None);
        assert_eq!(state.screen(), Screen::Blank);

        state.navigate(View::ProjectDetail, Some(""));
        assert_eq!(state.current(), View::ProjectDetail);
        assert_eq!(state.screen(), Screen::Blank);
    }

    #[test]
    fn test_home_keeps_selections() {
        let mut state = NavigationState::new();
        state.navigate(View::ArticleDetail, Some("a"));
        state.navigate(View::Home, None);
        assert_eq!(state.screen(), Screen::Home);
        assert_eq!(state.selected_article(), Some("a"));
    }

    #[test]
    fn test_sequence_tracks_last_request() {
        let steps: &[(View, Option<&str>)] = &[
            (View::InsightsList, None),
            (View::ArticleDetail, Some("a")),
            (View::ArticleDetail, Some("b")),
            (View::ProjectsList, None),
            (View::ProjectDetail, Some("p")),
            (View::Home, None),
            (View::InsightsList, None),
        ];
        let mut state = NavigationState::new();
        let mut last_article: Option<&str> = None;
        let mut last_project: Option<&str> = None;
        for (view, id) in steps {
            state.navigate(*view, *id);
            match view {
                View::ArticleDetail => last_article = *id,
                View::ProjectDetail => last_project = *id,
                View::InsightsList => last_article = None,
                View::ProjectsList => last_project = None,
                View::Home => {}
            }
            assert_eq!(state.current(), *view);
            assert_eq!(state.selected_article(), last_article);
            assert_eq!(state.selected_project(), last_project);
        }
    }
}
