//! Sidebar menus per role.

use univista_protocol::{ProfessorPage, Role, Route, StudentPage};

/// One sidebar entry: a locale key for the label and where it goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub label_key: &'static str,
    pub route: Route,
}

const fn item(label_key: &'static str, route: Route) -> NavItem {
    NavItem { label_key, route }
}

const STUDENT_NAV: [NavItem; 6] = [
    item("dashboard", Route::Student(StudentPage::Dashboard)),
    item("courses", Route::Student(StudentPage::Courses)),
    item("lectures", Route::Student(StudentPage::Lectures)),
    item("assignments", Route::Student(StudentPage::Assignments)),
    item("exams", Route::Student(StudentPage::Exams)),
    item("grades", Route::Student(StudentPage::Grades)),
];

const PROFESSOR_NAV: [NavItem; 6] = [
    item("dashboard", Route::Professor(ProfessorPage::Dashboard)),
    item("myCourses", Route::Professor(ProfessorPage::Courses)),
    item("uploadLectures", Route::Professor(ProfessorPage::Lectures)),
    item("assignments", Route::Professor(ProfessorPage::Assignments)),
    item("exams", Route::Professor(ProfessorPage::Exams)),
    item("viewSubmissions", Route::Professor(ProfessorPage::Submissions)),
];

/// The sidebar menu for `role`, dashboard first.
pub fn navigation(role: Role) -> &'static [NavItem] {
    match role {
        Role::Student => &STUDENT_NAV,
        Role::Professor => &PROFESSOR_NAV,
    }
}
