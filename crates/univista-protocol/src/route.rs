//! Navigation targets.
//!
//! Every place the portal can show is a [`Route`]. Role-scoped pages are
//! nested under the role they belong to, so the set of required roles for a
//! route falls out of an exhaustive `match` instead of a path prefix check.

use std::fmt;

use crate::Role;

/// Pages available to students.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StudentPage {
    Dashboard,
    Courses,
    Lectures,
    Assignments,
    Exams,
    Grades,
}

impl StudentPage {
    pub const ALL: [StudentPage; 6] = [
        Self::Dashboard,
        Self::Courses,
        Self::Lectures,
        Self::Assignments,
        Self::Exams,
        Self::Grades,
    ];

    fn segment(self) -> &'static str {
        match self {
            Self::Dashboard => "dashboard",
            Self::Courses => "courses",
            Self::Lectures => "lectures",
            Self::Assignments => "assignments",
            Self::Exams => "exams",
            Self::Grades => "grades",
        }
    }
}

/// Pages available to professors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProfessorPage {
    Dashboard,
    Courses,
    Lectures,
    Assignments,
    Exams,
    Submissions,
}

impl ProfessorPage {
    pub const ALL: [ProfessorPage; 6] = [
        Self::Dashboard,
        Self::Courses,
        Self::Lectures,
        Self::Assignments,
        Self::Exams,
        Self::Submissions,
    ];

    fn segment(self) -> &'static str {
        match self {
            Self::Dashboard => "dashboard",
            Self::Courses => "courses",
            Self::Lectures => "lectures",
            Self::Assignments => "assignments",
            Self::Exams => "exams",
            Self::Submissions => "submissions",
        }
    }
}

/// A logical navigation target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    /// Public landing page.
    Landing,
    Login,
    Register,
    /// Shown when a signed-in user opens a page for another role.
    Unauthorized,
    /// Catch-all for paths that match nothing.
    NotFound,
    Student(StudentPage),
    Professor(ProfessorPage),
}

impl Route {
    /// The dashboard a role lands on after login.
    pub fn dashboard(role: Role) -> Self {
        match role {
            Role::Student => Self::Student(StudentPage::Dashboard),
            Role::Professor => Self::Professor(ProfessorPage::Dashboard),
        }
    }

    /// Roles allowed to view this route, or `None` if it is public.
    pub fn required_roles(self) -> Option<&'static [Role]> {
        match self {
            Self::Landing
            | Self::Login
            | Self::Register
            | Self::Unauthorized
            | Self::NotFound => None,
            Self::Student(_) => Some(&[Role::Student]),
            Self::Professor(_) => Some(&[Role::Professor]),
        }
    }

    pub fn is_public(self) -> bool {
        self.required_roles().is_none()
    }

    /// The canonical path for this route.
    ///
    /// `NotFound` has no path of its own; it reports `/404` so that it can
    /// still be displayed and logged.
    pub fn path(self) -> String {
        match self {
            Self::Landing => "/".to_string(),
            Self::Login => "/login".to_string(),
            Self::Register => "/register".to_string(),
            Self::Unauthorized => "/unauthorized".to_string(),
            Self::NotFound => "/404".to_string(),
            Self::Student(page) => format!("/student/{}", page.segment()),
            Self::Professor(page) => format!("/professor/{}", page.segment()),
        }
    }

    /// Parses a path into a route. Anything unrecognized is `NotFound`.
    ///
    /// A single trailing slash is tolerated (`/login/` is `Login`).
    pub fn from_path(path: &str) -> Self {
        let trimmed = match path.strip_suffix('/') {
            Some(rest) if !rest.is_empty() => rest,
            _ => path,
        };

        match trimmed {
            "/" | "" => return Self::Landing,
            "/login" => return Self::Login,
            "/register" => return Self::Register,
            "/unauthorized" => return Self::Unauthorized,
            _ => {}
        }

        if let Some(segment) = trimmed.strip_prefix("/student/") {
            return StudentPage::ALL
                .into_iter()
                .find(|page| page.segment() == segment)
                .map_or(Self::NotFound, Self::Student);
        }
        if let Some(segment) = trimmed.strip_prefix("/professor/") {
            return ProfessorPage::ALL
                .into_iter()
                .find(|page| page.segment() == segment)
                .map_or(Self::NotFound, Self::Professor);
        }

        Self::NotFound
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}
