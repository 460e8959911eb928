//! Login against a running app.
//!
//! Reads `inputs.json` from `CATTY_E2E_INPUTS` or the crate directory and
//! skips when the file is absent.

use std::path::PathBuf;

use catty_e2e::{CattyApi, TestInputs, REMINDERS_TITLE};

fn inputs_path() -> PathBuf {
    std::env::var("CATTY_E2E_INPUTS")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("inputs.json"))
}

fn load_inputs() -> Option<TestInputs> {
    let path = inputs_path();
    if !path.exists() {
        eprintln!("skipping: {} not found", path.display());
        return None;
    }
    Some(TestInputs::load(&path).unwrap())
}

#[tokio::test]
async fn test_successful_api_login() {
    let Some(inputs) = load_inputs() else {
        return;
    };
    let api = CattyApi::new(inputs.base_url().unwrap()).unwrap();
    let user = inputs.user().unwrap();

    let response = api.login(&user).await.unwrap();

    assert!(
        response.status.is_redirection(),
        "expected a redirect, got {}",
        response.status
    );
    assert!(
        response.redirects_to("/reminders"),
        "unexpected redirect: {:?}",
        response.location
    );
    let session = response.session.expect("reminders_session cookie not set");
    assert!(!session.is_empty());
}

#[tokio::test]
async fn test_successful_login_shows_reminders_page() {
    let Some(inputs) = load_inputs() else {
        return;
    };
    let api = CattyApi::new(inputs.base_url().unwrap()).unwrap();
    let user = inputs.user().unwrap();

    let login = api.login(&user).await.unwrap();
    let page = api.follow_login(&login).await.unwrap();

    assert!(page.status.is_success(), "got {}", page.status);
    assert_eq!(page.title().as_deref(), Some(REMINDERS_TITLE));
    assert!(page.has_id("catty-logo"));
    assert_eq!(page.text_by_id("catty-title").as_deref(), Some("Catty"));
    assert!(page.has_button("Logout"));
    assert_eq!(
        page.reminders_message(),
        Some(format!("Reminders for {}", user.username))
    );
}
