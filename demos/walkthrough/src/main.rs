use univista::prelude::*;

// ---------------------------------------------------------------------------
// Printing
// ---------------------------------------------------------------------------

fn show<B, S>(portal: &mut Portal<B, S>, step: &str)
where
    B: AuthBackend,
    S: Storage + Clone,
{
    println!("== {step}");
    println!(
        "   route: {}  ({})",
        portal.current_route(),
        portal.direction().as_str()
    );

    let navbar = portal.navbar();
    if let Some(greeting) = &navbar.greeting {
        println!("   navbar: {greeting}");
    }
    for link in &navbar.links {
        println!("   navbar link: {} -> {}", link.label, link.route);
    }
    for link in portal.sidebar() {
        let marker = if link.active { '*' } else { ' ' };
        println!("   {marker} {} -> {}", link.label, link.route);
    }
    for n in portal.take_notifications() {
        let tag = match n.variant {
            Variant::Default => "info",
            Variant::Destructive => "error",
        };
        println!("   [{tag}] {}: {}", n.title, n.description);
    }
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let config = match std::env::args().nth(1) {
        Some(path) => PortalConfig::from_json_file(path)?,
        None => PortalConfig::default(),
    };
    let mut portal = PortalBuilder::new()
        .config(config)
        .build_configured(MockAuthBackend::new())?;
    show(&mut portal, "start");

    portal.navigate("/professor/dashboard");
    show(&mut portal, "open a professor page signed out");

    portal
        .submit_login(&LoginForm::new("jane@example.com", "", Role::Professor))
        .await;
    show(&mut portal, "log in with a blank password");

    portal
        .submit_login(&LoginForm::new("jane@example.com", "x", Role::Professor))
        .await;
    show(&mut portal, "log in as a professor");

    portal.navigate("/student/grades");
    show(&mut portal, "open a student page");

    portal.navigate("/professor/submissions");
    portal.change_language(Language::Ar)?;
    show(&mut portal, "switch to Arabic");

    portal.logout();
    show(&mut portal, "log out");

    portal.change_language(Language::En)?;
    portal
        .submit_register(
            &RegisterForm::new("Sam", "sam@uni.edu", "pw", Role::Student)
                .with_confirmation("pw!"),
        )
        .await;
    show(&mut portal, "register with a typo in the confirmation");

    portal
        .submit_register(&RegisterForm::new(
            "Sam",
            "sam@uni.edu",
            "pw",
            Role::Student,
        ))
        .await;
    show(&mut portal, "register");

    portal.shutdown();
    Ok(())
}
