use crate::{
    api::{FetchFailure, Origin, Sourced},
    models::{Blog, Lecture, Project, User},
};

/// A single-item response is stale once a later request for another id has
/// started.
fn is_stale(requested: Option<u32>, id: u32) -> bool {
    requested.is_some_and(|r| r != id)
}

/// A state container updated by replacing itself with the result of an action.
pub trait Reducer: Sized {
    type Action;

    fn reduce(self, action: Self::Action) -> Self;
}

/// The item a detail view is showing.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Detail<T> {
    #[default]
    Idle,
    Found(T),
    NotFound(u32),
}

impl<T> Detail<T> {
    pub fn found(&self) -> Option<&T> {
        match self {
            Detail::Found(t) => Some(t),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectState {
    pub projects: Vec<Project>,
    pub selected: Detail<Project>,
    /// Id of the latest single-item read.
    pub requested: Option<u32>,
    pub loading: bool,
    pub error: Option<String>,
    pub origin: Origin,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ProjectAction {
    FetchStart,
    FetchSuccess(Sourced<Vec<Project>>),
    FetchFailure(String),
    FetchOneStart(u32),
    FetchOneSuccess(Project),
    FetchOneFailure(u32, String),
    FetchOneMissing(u32),
}

impl ProjectAction {
    pub fn from_fetch(res: Result<Sourced<Vec<Project>>, FetchFailure>) -> Self {
        match res {
            Ok(projects) => Self::FetchSuccess(projects),
            Err(e) => Self::FetchFailure(e.to_string()),
        }
    }

    pub fn from_fetch_one(id: u32, res: Result<Sourced<Project>, FetchFailure>) -> Self {
        match res {
            Ok(project) => Self::FetchOneSuccess(project.data),
            Err(FetchFailure::NotFound) => Self::FetchOneMissing(id),
            Err(e) => Self::FetchOneFailure(id, e.to_string()),
        }
    }
}

impl Reducer for ProjectState {
    type Action = ProjectAction;

    fn reduce(self, action: ProjectAction) -> Self {
        match action {
            ProjectAction::FetchStart => Self {
                loading: true,
                error: None,
                ..self
            },
            ProjectAction::FetchOneStart(id) => Self {
                requested: Some(id),
                loading: true,
                error: None,
                ..self
            },
            ProjectAction::FetchSuccess(Sourced { data, origin }) => Self {
                projects: data,
                origin,
                loading: false,
                error: None,
                ..self
            },
            ProjectAction::FetchOneSuccess(project) if is_stale(self.requested, project.id) => self,
            ProjectAction::FetchOneMissing(id) | ProjectAction::FetchOneFailure(id, _)
                if is_stale(self.requested, id) =>
            {
                self
            }
            ProjectAction::FetchOneSuccess(project) => Self {
                selected: Detail::Found(project),
                loading: false,
                error: None,
                ..self
            },
            ProjectAction::FetchOneMissing(id) => Self {
                selected: Detail::NotFound(id),
                loading: false,
                error: None,
                ..self
            },
            ProjectAction::FetchFailure(e) | ProjectAction::FetchOneFailure(_, e) => Self {
                loading: false,
                error: Some(e),
                ..self
            },
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BlogState {
    pub blogs: Vec<Blog>,
    pub selected: Detail<Blog>,
    pub requested: Option<u32>,
    pub loading: bool,
    pub error: Option<String>,
    pub origin: Origin,
}

#[derive(Debug, Clone, PartialEq)]
pub enum BlogAction {
    FetchStart,
    FetchSuccess(Sourced<Vec<Blog>>),
    FetchFailure(String),
    FetchOneStart(u32),
    FetchOneSuccess(Blog),
    FetchOneFailure(u32, String),
    FetchOneMissing(u32),
    Created(Blog),
    Edited(Blog),
    Deleted(u32),
    WriteFailure(String),
}

impl BlogAction {
    pub fn from_fetch(res: Result<Sourced<Vec<Blog>>, FetchFailure>) -> Self {
        match res {
            Ok(blogs) => Self::FetchSuccess(blogs),
            Err(e) => Self::FetchFailure(e.to_string()),
        }
    }

    pub fn from_fetch_one(id: u32, res: Result<Sourced<Blog>, FetchFailure>) -> Self {
        match res {
            Ok(blog) => Self::FetchOneSuccess(blog.data),
            Err(FetchFailure::NotFound) => Self::FetchOneMissing(id),
            Err(e) => Self::FetchOneFailure(id, e.to_string()),
        }
    }

    /// Maps the outcome of a create or edit, picking the success variant.
    pub fn from_write(
        res: Result<Blog, FetchFailure>,
        on_success: fn(Blog) -> BlogAction,
    ) -> Self {
        match res {
            Ok(blog) => on_success(blog),
            Err(e) => Self::WriteFailure(e.to_string()),
        }
    }
}

impl Reducer for BlogState {
    type Action = BlogAction;

    fn reduce(self, action: BlogAction) -> Self {
        match action {
            BlogAction::FetchStart => Self {
                loading: true,
                error: None,
                ..self
            },
            BlogAction::FetchOneStart(id) => Self {
                requested: Some(id),
                loading: true,
                error: None,
                ..self
            },
            BlogAction::FetchSuccess(Sourced { data, origin }) => Self {
                blogs: data,
                origin,
                loading: false,
                error: None,
                ..self
            },
            BlogAction::FetchOneSuccess(blog) if is_stale(self.requested, blog.id) => self,
            BlogAction::FetchOneMissing(id) | BlogAction::FetchOneFailure(id, _)
                if is_stale(self.requested, id) =>
            {
                self
            }
            BlogAction::FetchOneSuccess(blog) => Self {
                selected: Detail::Found(blog),
                loading: false,
                error: None,
                ..self
            },
            BlogAction::FetchOneMissing(id) => Self {
                selected: Detail::NotFound(id),
                loading: false,
                error: None,
                ..self
            },
            BlogAction::Created(blog) => {
                let mut blogs = self.blogs;
                blogs.push(blog);
                Self {
                    blogs,
                    loading: false,
                    error: None,
                    ..self
                }
            }
            BlogAction::Edited(blog) => {
                let blogs = self
                    .blogs
                    .into_iter()
                    .map(|b| if b.id == blog.id { blog.clone() } else { b })
                    .collect();
                Self {
                    blogs,
                    selected: Detail::Found(blog),
                    loading: false,
                    error: None,
                    ..self
                }
            }
            BlogAction::Deleted(id) => {
                let blogs = self.blogs.into_iter().filter(|b| b.id != id).collect();
                Self {
                    blogs,
                    loading: false,
                    error: None,
                    ..self
                }
            }
            BlogAction::FetchFailure(e)
            | BlogAction::FetchOneFailure(_, e)
            | BlogAction::WriteFailure(e) => Self {
                loading: false,
                error: Some(e),
                ..self
            },
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LectureState {
    pub lectures: Vec<Lecture>,
    pub loading: bool,
    pub error: Option<String>,
    pub origin: Origin,
}

#[derive(Debug, Clone, PartialEq)]
pub enum LectureAction {
    FetchStart,
    FetchSuccess(Sourced<Vec<Lecture>>),
    FetchFailure(String),
}

impl LectureAction {
    pub fn from_fetch(res: Result<Sourced<Vec<Lecture>>, FetchFailure>) -> Self {
        match res {
            Ok(lectures) => Self::FetchSuccess(lectures),
            Err(e) => Self::FetchFailure(e.to_string()),
        }
    }
}

impl Reducer for LectureState {
    type Action = LectureAction;

    fn reduce(self, action: LectureAction) -> Self {
        match action {
            LectureAction::FetchStart => Self {
                loading: true,
                error: None,
                ..self
            },
            LectureAction::FetchSuccess(Sourced { data, origin }) => Self {
                lectures: data,
                origin,
                loading: false,
                error: None,
            },
            LectureAction::FetchFailure(e) => Self {
                loading: false,
                error: Some(e),
                ..self
            },
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthState {
    pub user: Option<User>,
    pub is_authenticated: bool,
    pub loading: bool,
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AuthAction {
    LoginStart,
    LoginSuccess(User),
    LoginFailure(String),
    Logout,
}

impl Reducer for AuthState {
    type Action = AuthAction;

    fn reduce(self, action: AuthAction) -> Self {
        match action {
            AuthAction::LoginStart => Self {
                loading: true,
                error: None,
                ..self
            },
            AuthAction::LoginSuccess(user) => Self {
                user: Some(user),
                is_authenticated: true,
                loading: false,
                error: None,
            },
            AuthAction::LoginFailure(e) => Self {
                is_authenticated: false,
                loading: false,
                error: Some(e),
                ..self
            },
            AuthAction::Logout => Self::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;

    fn blog(id: u32, title: &str) -> Blog {
        Blog {
            id,
            title: title.to_string(),
            message: "body".to_string(),
            image: None,
            created_at: "2023-01-15".to_string(),
            updated_at: "2023-01-15".to_string(),
        }
    }

    fn project(id: u32) -> Project {
        Project {
            id,
            title: format!("Project {id}"),
            description: String::new(),
            image: String::new(),
            github_url: String::new(),
            deployment_url: None,
            status: None,
            features: String::new(),
            technologies: vec!["Rust".to_string()],
            category: Category::Backend,
            technical_focus: Vec::new(),
            code_highlights: Vec::new(),
            learning_outcomes: None,
            gif_play: None,
            plan_url: None,
        }
    }

    fn loaded_blogs() -> BlogState {
        BlogState::default().reduce(BlogAction::FetchSuccess(Sourced::remote(vec![
            blog(1, "One"),
            blog(2, "Two"),
        ])))
    }

    #[test]
    fn test_project_fetch_cycle() {
        let state = ProjectState::default().reduce(ProjectAction::FetchStart);
        assert!(state.loading);
        let state = state.reduce(ProjectAction::from_fetch(Ok(Sourced::fallback(vec![
            project(1),
            project(2),
        ]))));
        assert!(!state.loading);
        assert_eq!(state.projects.len(), 2);
        assert_eq!(state.origin, Origin::Fallback);

        let state = state
            .reduce(ProjectAction::FetchStart)
            .reduce(ProjectAction::from_fetch(Err(FetchFailure::Client {
                status: 403,
                message: "Forbidden".to_string(),
            })));
        assert_eq!(state.error.as_deref(), Some("Forbidden"));
        // previous collection is kept until a fetch succeeds
        assert_eq!(state.projects.len(), 2);
    }

    #[test]
    fn test_project_detail_states() {
        let state = ProjectState::default()
            .reduce(ProjectAction::FetchOneStart(5))
            .reduce(ProjectAction::from_fetch_one(5, Ok(Sourced::remote(project(5)))));
        assert_eq!(state.selected.found().map(|p| p.id), Some(5));

        let state = state
            .reduce(ProjectAction::FetchOneStart(9))
            .reduce(ProjectAction::from_fetch_one(9, Err(FetchFailure::NotFound)));
        assert_eq!(state.selected, Detail::NotFound(9));
        assert_eq!(state.error, None);
    }

    #[test]
    fn test_project_detail_ignores_late_miss() {
        // the 404 for 999 lands after navigating on to 1
        let state = ProjectState::default()
            .reduce(ProjectAction::FetchOneStart(999))
            .reduce(ProjectAction::FetchOneStart(1))
            .reduce(ProjectAction::from_fetch_one(1, Ok(Sourced::remote(project(1)))))
            .reduce(ProjectAction::from_fetch_one(999, Err(FetchFailure::NotFound)));
        assert_eq!(state.selected.found().map(|p| p.id), Some(1));
        assert!(!state.loading);
        assert_eq!(state.requested, Some(1));
    }

    #[test]
    fn test_project_detail_ignores_late_success() {
        let state = ProjectState::default()
            .reduce(ProjectAction::FetchOneStart(1))
            .reduce(ProjectAction::FetchOneStart(2))
            .reduce(ProjectAction::from_fetch_one(2, Ok(Sourced::remote(project(2)))))
            .reduce(ProjectAction::from_fetch_one(1, Ok(Sourced::remote(project(1)))));
        assert_eq!(state.selected.found().map(|p| p.id), Some(2));

        let state = state.reduce(ProjectAction::from_fetch_one(1, Err(FetchFailure::Timeout)));
        assert_eq!(state.error, None);
    }

    #[test]
    fn test_blog_detail_ignores_late_miss() {
        let state = loaded_blogs()
            .reduce(BlogAction::FetchOneStart(7))
            .reduce(BlogAction::FetchOneStart(2))
            .reduce(BlogAction::from_fetch_one(2, Ok(Sourced::remote(blog(2, "Two")))))
            .reduce(BlogAction::from_fetch_one(7, Err(FetchFailure::NotFound)));
        assert_eq!(state.selected.found().map(|b| b.id), Some(2));

        let state = state
            .reduce(BlogAction::FetchOneStart(7))
            .reduce(BlogAction::from_fetch_one(7, Err(FetchFailure::NotFound)));
        assert_eq!(state.selected, Detail::NotFound(7));
    }

    #[test]
    fn test_blog_created_appends() {
        let state = loaded_blogs().reduce(BlogAction::from_write(
            Ok(blog(3, "Three")),
            BlogAction::Created,
        ));
        let ids = state.blogs.iter().map(|b| b.id).collect::<Vec<_>>();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_blog_edited_replaces_and_selects() {
        let state = loaded_blogs().reduce(BlogAction::Edited(blog(2, "Two, revised")));
        assert_eq!(state.blogs[1].title, "Two, revised");
        assert_eq!(state.blogs.len(), 2);
        assert_eq!(
            state.selected.found().map(|b| b.title.as_str()),
            Some("Two, revised")
        );
    }

    #[test]
    fn test_blog_deleted_removes() {
        let state = loaded_blogs().reduce(BlogAction::Deleted(1));
        assert_eq!(state.blogs.iter().map(|b| b.id).collect::<Vec<_>>(), vec![2]);
        // unknown ids are a no-op
        let state = state.reduce(BlogAction::Deleted(99));
        assert_eq!(state.blogs.len(), 1);
    }

    #[test]
    fn test_blog_write_failure_surfaces() {
        let state = loaded_blogs().reduce(BlogAction::from_write(
            Err(FetchFailure::Timeout),
            BlogAction::Edited,
        ));
        assert_eq!(state.error.as_deref(), Some("request timed out"));
        assert_eq!(state.blogs.len(), 2);
    }

    #[test]
    fn test_lecture_cycle() {
        let state = LectureState::default()
            .reduce(LectureAction::FetchStart)
            .reduce(LectureAction::FetchFailure("boom".to_string()));
        assert!(!state.loading);
        assert_eq!(state.error.as_deref(), Some("boom"));

        let state = state.reduce(LectureAction::from_fetch(Ok(Sourced::remote(Vec::new()))));
        assert_eq!(state.error, None);
    }

    #[test]
    fn test_auth_cycle() {
        let user = User {
            username: "admin".to_string(),
            email: None,
            token: Some("mock-token".to_string()),
        };
        let state = AuthState::default()
            .reduce(AuthAction::LoginStart)
            .reduce(AuthAction::LoginSuccess(user.clone()));
        assert!(state.is_authenticated);
        assert_eq!(state.user, Some(user));

        let state = state.reduce(AuthAction::Logout);
        assert_eq!(state, AuthState::default());

        let state = state.reduce(AuthAction::LoginFailure("Invalid credentials".to_string()));
        assert!(!state.is_authenticated);
        assert_eq!(state.error.as_deref(), Some("Invalid credentials"));
    }
}
