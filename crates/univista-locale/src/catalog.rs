//! Static translation catalogs.
//!
//! One `(key, text)` table per language. Tables are indexed into a
//! `HashMap` on first use and read-only afterwards. Placeholders are
//! positional: `{0}`, `{1}`, ...

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::Language;

const CATALOG_EN: &[(&str, &str)] = &[
    // Common
    ("welcome", "Welcome to the University Platform"),
    ("login", "Login"),
    ("register", "Register"),
    ("logout", "Logout"),
    ("dashboard", "Dashboard"),
    ("email", "Email"),
    ("password", "Password"),
    ("fullName", "Full Name"),
    ("confirmPassword", "Confirm Password"),
    ("role", "Role"),
    ("student", "Student"),
    ("professor", "Professor"),
    // Navigation
    ("courses", "Courses"),
    ("lectures", "Lectures"),
    ("assignments", "Assignments"),
    ("exams", "Exams"),
    ("grades", "Grades"),
    ("submissions", "Submissions"),
    // Dashboard titles
    ("studentPortal", "Student Portal"),
    ("professorPortal", "Professor Portal"),
    // Login/Register
    ("loginTitle", "Login"),
    ("loginDescription", "Enter your credentials to access your account"),
    ("registerTitle", "Register"),
    ("registerDescription", "Create a new account"),
    ("dontHaveAccount", "Don't have an account?"),
    ("alreadyHaveAccount", "Already have an account?"),
    ("iAmA", "I am a"),
    // Misc
    ("darkMode", "Dark Mode"),
    ("language", "Language"),
    ("english", "English"),
    ("arabic", "Arabic"),
    // Course related
    ("myCourses", "My Courses"),
    ("uploadLectures", "Upload Lectures"),
    ("viewSubmissions", "View Submissions"),
    // Messages
    ("loginSuccess", "Login Successful"),
    ("welcomeBack", "Welcome back, {0}!"),
    ("loginFailed", "Login Failed"),
    ("registrationSuccess", "Registration Successful"),
    ("accountCreated", "Your account has been created. You can now log in."),
    ("registrationFailed", "Registration Failed"),
    ("errorOccurred", "An error occurred"),
    ("passwordsDoNotMatch", "Passwords do not match"),
    ("loggedOut", "Logged Out"),
    ("successfulLogout", "You have been successfully logged out."),
    ("missingFields", "Missing Fields"),
    ("fillAllFields", "Please fill in all fields"),
    // Chrome
    ("welcomeUser", "Welcome, {0}"),
    ("accessDenied", "Access Denied"),
    (
        "accessDeniedDescription",
        "You don't have permission to access this page. Please contact support if you believe this is an error.",
    ),
    ("notFound", "Page not found"),
];

const CATALOG_AR: &[(&str, &str)] = &[
    ("welcome", "مرحبًا بك في منصة الجامعة"),
    ("login", "تسجيل الدخول"),
    ("register", "التسجيل"),
    ("logout", "تسجيل الخروج"),
    ("dashboard", "لوحة التحكم"),
    ("email", "البريد الإلكتروني"),
    ("password", "كلمة المرور"),
    ("fullName", "الاسم الكامل"),
    ("confirmPassword", "تأكيد كلمة المرور"),
    ("role", "الدور"),
    ("student", "طالب"),
    ("professor", "أستاذ"),
    ("courses", "المقررات"),
    ("lectures", "المحاضرات"),
    ("assignments", "الواجبات"),
    ("exams", "الامتحانات"),
    ("grades", "الدرجات"),
    ("submissions", "التسليمات"),
    ("studentPortal", "بوابة الطالب"),
    ("professorPortal", "بوابة الأستاذ"),
    ("loginTitle", "تسجيل الدخول"),
    ("loginDescription", "أدخل بيانات الاعتماد الخاصة بك للوصول إلى حسابك"),
    ("registerTitle", "التسجيل"),
    ("registerDescription", "إنشاء حساب جديد"),
    ("dontHaveAccount", "ليس لديك حساب؟"),
    ("alreadyHaveAccount", "لديك حساب بالفعل؟"),
    ("iAmA", "أنا"),
    ("darkMode", "الوضع المظلم"),
    ("language", "اللغة"),
    ("english", "الإنجليزية"),
    ("arabic", "العربية"),
    ("myCourses", "مقرراتي"),
    ("uploadLectures", "رفع المحاضرات"),
    ("viewSubmissions", "عرض التسليمات"),
    ("loginSuccess", "تم تسجيل الدخول بنجاح"),
    ("welcomeBack", "مرحبًا بعودتك، {0}!"),
    ("loginFailed", "فشل تسجيل الدخول"),
    ("registrationSuccess", "تم التسجيل بنجاح"),
    ("accountCreated", "تم إنشاء حسابك. يمكنك الآن تسجيل الدخول."),
    ("registrationFailed", "فشل التسجيل"),
    ("errorOccurred", "حدث خطأ"),
    ("passwordsDoNotMatch", "كلمتا المرور غير متطابقتين"),
    ("loggedOut", "تم تسجيل الخروج"),
    ("successfulLogout", "تم تسجيل خروجك بنجاح."),
    ("missingFields", "حقول مفقودة"),
    ("fillAllFields", "يرجى ملء جميع الحقول"),
    ("welcomeUser", "مرحبًا، {0}"),
    ("accessDenied", "تم رفض الوصول"),
    (
        "accessDeniedDescription",
        "ليس لديك إذن للوصول إلى هذه الصفحة. يرجى التواصل مع الدعم إذا كنت تعتقد أن هذا خطأ.",
    ),
    ("notFound", "الصفحة غير موجودة"),
];

static INDEX_EN: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| CATALOG_EN.iter().copied().collect());

static INDEX_AR: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| CATALOG_AR.iter().copied().collect());

/// Looks up `key` in the catalog for `language`.
pub fn lookup(language: Language, key: &str) -> Option<&'static str> {
    let index = match language {
        Language::En => &*INDEX_EN,
        Language::Ar => &*INDEX_AR,
    };
    index.get(key).copied()
}

/// All keys defined for `language`.
pub fn keys(language: Language) -> impl Iterator<Item = &'static str> {
    let table = match language {
        Language::En => CATALOG_EN,
        Language::Ar => CATALOG_AR,
    };
    table.iter().map(|(key, _)| *key)
}

/// Replaces `{N}` placeholders in `template` with `args[N]`.
///
/// Single pass: text substituted from `args` is never scanned again.
/// Placeholders without a matching argument are kept verbatim.
pub fn interpolate(template: &str, args: &[&str]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];

        let substituted = after.find('}').and_then(|close| {
            let index: usize = after[..close].parse().ok()?;
            let arg = args.get(index)?;
            Some((arg, close))
        });

        match substituted {
            Some((arg, close)) => {
                out.push_str(arg);
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}
