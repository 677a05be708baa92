//! End-to-end portal flows: forms, redirects, notifications and restarts.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use univista::prelude::*;
use univista_session::{Credentials, Grant, Registration, SessionError};

/// Counts calls, then delegates to the mock backend.
#[derive(Clone, Default)]
struct CountingBackend {
    calls: Arc<AtomicUsize>,
    inner: Arc<MockAuthBackend>,
}

impl CountingBackend {
    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl AuthBackend for CountingBackend {
    async fn login(
        &self,
        credentials: &Credentials,
    ) -> Result<Grant, SessionError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.login(credentials).await
    }

    async fn register(
        &self,
        registration: &Registration,
    ) -> Result<(), SessionError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.register(registration).await
    }
}

fn portal() -> Portal<MockAuthBackend, MemoryStorage> {
    PortalBuilder::new()
        .build(MockAuthBackend::new(), MemoryStorage::new())
        .unwrap()
}

#[tokio::test]
async fn test_submit_login_professor_lands_on_dashboard() {
    let mut portal = portal();
    portal.navigate("/login");

    let notice = portal
        .submit_login(&LoginForm::new("jane@example.com", "x", Role::Professor))
        .await;

    assert_eq!(notice, Notice::LoginSucceeded { name: "jane".into() });
    assert_eq!(portal.current_route().path(), "/professor/dashboard");

    let session = portal.session();
    let identity = session.identity().unwrap();
    assert_eq!(identity.name(), "jane");
    assert_eq!(identity.role(), Role::Professor);

    let notifications = portal.take_notifications();
    assert_eq!(notifications.len(), 1);
    assert_eq!(notifications[0].title, "Login Successful");
    assert_eq!(notifications[0].description, "Welcome back, jane!");
    assert_eq!(notifications[0].variant, Variant::Default);
    assert!(portal.take_notifications().is_empty());
}

#[tokio::test]
async fn test_submit_login_empty_password_never_reaches_backend() {
    let backend = CountingBackend::default();
    let mut portal = PortalBuilder::new()
        .build(backend.clone(), MemoryStorage::new())
        .unwrap();

    let notice = portal
        .submit_login(&LoginForm::new("jane@example.com", "", Role::Student))
        .await;

    assert_eq!(notice, Notice::MissingFields);
    assert_eq!(backend.calls(), 0);
    assert!(!portal.session().is_authenticated());

    let notifications = portal.take_notifications();
    assert_eq!(notifications[0].title, "Missing Fields");
    assert_eq!(notifications[0].description, "Please fill in all fields");
    assert_eq!(notifications[0].variant, Variant::Destructive);
}

#[tokio::test]
async fn test_submit_login_whitespace_password_signs_in() {
    let backend = CountingBackend::default();
    let mut portal = PortalBuilder::new()
        .build(backend.clone(), MemoryStorage::new())
        .unwrap();

    let notice = portal
        .submit_login(&LoginForm::new("jane@example.com", "   ", Role::Student))
        .await;

    assert_eq!(notice, Notice::LoginSucceeded { name: "jane".into() });
    assert_eq!(backend.calls(), 1);
    assert!(portal.session().is_authenticated());
    assert_eq!(portal.current_route(), Route::dashboard(Role::Student));
}

#[tokio::test]
async fn test_submit_login_backend_rejects_stays_signed_out() {
    let mut portal = PortalBuilder::new()
        .build(
            MockAuthBackend::rejecting("Invalid credentials"),
            MemoryStorage::new(),
        )
        .unwrap();
    portal.navigate("/login");

    let notice = portal
        .submit_login(&LoginForm::new("jane@example.com", "x", Role::Student))
        .await;

    assert!(matches!(notice, Notice::LoginFailed { .. }));
    assert_eq!(portal.current_route(), Route::Login);
    let notifications = portal.take_notifications();
    assert_eq!(notifications[0].title, "Login Failed");
    assert_eq!(notifications[0].description, "Invalid credentials");
}

#[tokio::test]
async fn test_submit_register_success_goes_to_login_without_signing_in() {
    let storage = MemoryStorage::new();
    let mut portal = PortalBuilder::new()
        .build(MockAuthBackend::new(), storage.clone())
        .unwrap();
    let changes = portal.subscribe();

    let notice = portal
        .submit_register(&RegisterForm::new(
            "Sam",
            "sam@uni.edu",
            "pw",
            Role::Student,
        ))
        .await;

    assert_eq!(notice, Notice::RegistrationSucceeded);
    assert_eq!(portal.current_route(), Route::Login);
    assert!(!portal.session().is_authenticated());
    assert!(!changes.has_changed().unwrap());
    assert!(storage.get("token").unwrap().is_none());
    assert_eq!(
        portal.take_notifications()[0].title,
        "Registration Successful"
    );
}

#[tokio::test]
async fn test_submit_register_mismatch_never_reaches_backend() {
    let backend = CountingBackend::default();
    let mut portal = PortalBuilder::new()
        .build(backend.clone(), MemoryStorage::new())
        .unwrap();

    let form = RegisterForm::new("Sam", "sam@uni.edu", "pw", Role::Student)
        .with_confirmation("pw2");
    let notice = portal.submit_register(&form).await;

    assert_eq!(
        notice,
        Notice::RegistrationFailed {
            reason: "Passwords do not match".into()
        }
    );
    assert_eq!(backend.calls(), 0);
    let notifications = portal.take_notifications();
    assert_eq!(notifications[0].title, "Registration Failed");
    assert_eq!(notifications[0].variant, Variant::Destructive);
}

#[tokio::test]
async fn test_navigate_guards_protected_routes() {
    let mut portal = portal();

    assert_eq!(
        portal.navigate("/student/courses"),
        Resolution::Redirect {
            from: Route::Student(StudentPage::Courses),
            to: Route::Login,
        }
    );
    assert_eq!(portal.current_route(), Route::Login);

    portal
        .submit_login(&LoginForm::new("sam@uni.edu", "pw", Role::Student))
        .await;

    assert_eq!(
        portal.navigate("/professor/exams"),
        Resolution::Redirect {
            from: Route::Professor(ProfessorPage::Exams),
            to: Route::Unauthorized,
        }
    );
    assert_eq!(
        portal.navigate("/student/courses"),
        Resolution::Render(Route::Student(StudentPage::Courses))
    );
    assert_eq!(
        portal.navigate("/no/such/page"),
        Resolution::Render(Route::NotFound)
    );
}

#[tokio::test]
async fn test_logout_twice_equals_once() {
    let storage = MemoryStorage::new();
    let mut portal = PortalBuilder::new()
        .build(MockAuthBackend::new(), storage.clone())
        .unwrap();
    portal
        .submit_login(&LoginForm::new("sam@uni.edu", "pw", Role::Student))
        .await;

    assert_eq!(portal.logout(), Notice::LoggedOut);
    let snapshot = |portal: &Portal<MockAuthBackend, MemoryStorage>| {
        (portal.session(), portal.current_route(), storage.len().unwrap())
    };
    let after_once = snapshot(&portal);
    assert_eq!(portal.logout(), Notice::LoggedOut);
    let after_twice = snapshot(&portal);

    assert_eq!(after_once, after_twice);
    assert_eq!(portal.current_route(), Route::Landing);
    assert!(storage.get("token").unwrap().is_none());
    assert!(storage.get("user").unwrap().is_none());
    assert!(portal.sidebar().is_empty());
}

#[tokio::test]
async fn test_logout_on_protected_page_leaves_it() {
    let mut portal = portal();
    portal
        .submit_login(&LoginForm::new("sam@uni.edu", "pw", Role::Student))
        .await;
    portal.navigate("/student/grades");

    portal.logout();
    assert_eq!(portal.current_route(), Route::Landing);
    assert_eq!(
        portal.navigate("/student/grades").landed(),
        Some(Route::Login)
    );
}

#[tokio::test]
async fn test_sidebar_lists_role_menu_translated() {
    let mut portal = portal();
    portal
        .submit_login(&LoginForm::new("jane@example.com", "x", Role::Professor))
        .await;

    let sidebar = portal.sidebar();
    let labels: Vec<_> = sidebar.iter().map(|l| l.label.as_str()).collect();
    assert_eq!(
        labels,
        [
            "Dashboard",
            "My Courses",
            "Upload Lectures",
            "Assignments",
            "Exams",
            "View Submissions"
        ]
    );
    assert!(sidebar[0].active);
    assert!(sidebar[1..].iter().all(|l| !l.active));
}

#[tokio::test]
async fn test_arabic_notifications_and_direction() {
    let mut portal = PortalBuilder::new()
        .default_language(Language::Ar)
        .build(MockAuthBackend::new(), MemoryStorage::new())
        .unwrap();
    assert_eq!(portal.direction(), Direction::Rtl);

    portal
        .submit_login(&LoginForm::new("", "", Role::Student))
        .await;
    let notifications = portal.take_notifications();
    assert_eq!(notifications[0].title, "حقول مفقودة");
    assert_eq!(notifications[0].description, "يرجى ملء جميع الحقول");
}

#[tokio::test]
async fn test_restart_restores_session_and_language() {
    let dir = tempfile::tempdir().unwrap();
    let config = PortalConfig::default().with_storage(StorageConfig::File {
        path: dir.path().join("state.json"),
    });

    {
        let mut portal = PortalBuilder::new()
            .config(config.clone())
            .build_configured(MockAuthBackend::new())
            .unwrap();
        portal
            .submit_login(&LoginForm::new(
                "jane@example.com",
                "x",
                Role::Professor,
            ))
            .await;
        portal.change_language(Language::Ar).unwrap();
        portal.shutdown();
    }

    let mut portal = PortalBuilder::new()
        .config(config)
        .build_configured(MockAuthBackend::new())
        .unwrap();

    assert_eq!(portal.language(), Language::Ar);
    let session = portal.session();
    assert!(session.is_authenticated());
    assert_eq!(session.identity().unwrap().name(), "jane");
    assert_eq!(
        portal.navigate("/professor/dashboard"),
        Resolution::Render(Route::Professor(ProfessorPage::Dashboard))
    );
    assert_eq!(portal.navbar().greeting.as_deref(), Some("مرحبًا، jane"));
}

#[test]
fn test_build_configured_corrupt_file_is_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("state.json");
    std::fs::write(&path, "{not json").unwrap();

    let result = PortalBuilder::new()
        .config(
            PortalConfig::default().with_storage(StorageConfig::File { path }),
        )
        .build_configured(MockAuthBackend::new());

    assert!(matches!(result, Err(UniVistaError::Storage(_))));
}
