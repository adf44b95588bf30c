mod common;

use anyhow::Result;
use auth_screens::{
    forms::{
        validator::{
            INVALID_EMAIL, NAME_TOO_SHORT, REGISTER_PASSWORD_TOO_SHORT, SELECT_ROLE,
        },
        Field, ForgotPasswordForm, LoginForm, RegisterForm, SubmissionState,
    },
    screens::{
        reset_password::{REDIRECT_DELAY, REQUEST_NEW_LINK, RESET_SUCCEEDED},
        BannerKind, ForgotPasswordScreen, LoginScreen, RegisterScreen, ResetPasswordScreen,
        Route,
    },
};
use common::{api, can_bind_localhost, Profiles, Routes};
use secrecy::SecretString;
use serde_json::json;
use std::{sync::Arc, time::Duration};
use wiremock::matchers::{any, body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

macro_rules! skip_without_localhost {
    () => {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return Ok(());
        }
    };
}

async fn no_requests_expected(server: &MockServer) {
    Mock::given(any())
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(server)
        .await;
}

#[tokio::test]
async fn login_posts_once_and_navigates_home() -> Result<()> {
    skip_without_localhost!();
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .and(body_json(json!({ "email": "a@b.com", "password": "secret" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "user": { "email": "a@b.com", "role": "student" }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let routes = Arc::new(Routes::default());
    let profiles = Arc::new(Profiles::default());
    let screen = LoginScreen::new(api(&server)?, routes.clone(), profiles.clone());
    screen.form().set_values(LoginForm {
        email: "a@b.com".to_string(),
        password: SecretString::from("secret"),
    });

    let view = screen.submit().await;

    assert_eq!(view.error_message(), None);
    assert_eq!(routes.visited(), vec![Route::Home]);
    assert_eq!(profiles.received().len(), 1);
    assert_eq!(profiles.received()[0]["user"]["role"], "student");
    Ok(())
}

#[tokio::test]
async fn login_failure_shows_server_message() -> Result<()> {
    skip_without_localhost!();
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({ "message": "Invalid credentials" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let routes = Arc::new(Routes::default());
    let screen = LoginScreen::new(api(&server)?, routes.clone(), Arc::new(Profiles::default()));
    screen.form().set_values(LoginForm {
        email: "a@b.com".to_string(),
        password: SecretString::from("wrong-password"),
    });

    let view = screen.submit().await;

    assert_eq!(view.error_message(), Some("Invalid credentials"));
    assert_eq!(
        view.state,
        SubmissionState::Failed("Invalid credentials".to_string())
    );
    assert!(view.submit_enabled);
    assert!(routes.visited().is_empty());
    Ok(())
}

#[tokio::test]
async fn forgot_password_rejects_bad_email_without_network() -> Result<()> {
    skip_without_localhost!();
    let server = MockServer::start().await;
    no_requests_expected(&server).await;

    let routes = Arc::new(Routes::default());
    let screen = ForgotPasswordScreen::new(api(&server)?, routes.clone());
    screen.form().set_values(ForgotPasswordForm {
        email: "bad-email".to_string(),
    });

    let view = screen.submit().await;

    assert_eq!(view.field_errors.get(Field::Email), Some(INVALID_EMAIL));
    assert_eq!(view.field_errors.len(), 1);
    assert!(routes.visited().is_empty());
    assert_eq!(server.received_requests().await.map(|r| r.len()), Some(0));
    Ok(())
}

#[tokio::test]
async fn forgot_password_success_returns_home() -> Result<()> {
    skip_without_localhost!();
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/forgot-password"))
        .and(body_json(json!({ "email": "a@b.com" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "message": "sent" })))
        .expect(1)
        .mount(&server)
        .await;

    let routes = Arc::new(Routes::default());
    let screen = ForgotPasswordScreen::new(api(&server)?, routes.clone());
    screen.form().set_values(ForgotPasswordForm {
        email: "a@b.com".to_string(),
    });

    let view = screen.submit().await;

    assert_eq!(view.error_message(), None);
    assert_eq!(routes.visited(), vec![Route::Home]);
    assert!(screen.form().values().email.is_empty());
    Ok(())
}

#[tokio::test]
async fn register_without_role_reports_every_field_at_once() -> Result<()> {
    skip_without_localhost!();
    let server = MockServer::start().await;
    no_requests_expected(&server).await;

    let screen = RegisterScreen::new(api(&server)?, Arc::new(Routes::default()));
    screen.form().set_values(RegisterForm {
        role: None,
        name: "A".to_string(),
        email: "nope".to_string(),
        password: SecretString::from("123"),
    });

    let view = screen.submit().await;

    assert_eq!(view.field_errors.get(Field::Role), Some(SELECT_ROLE));
    assert_eq!(view.field_errors.get(Field::Name), Some(NAME_TOO_SHORT));
    assert_eq!(view.field_errors.get(Field::Email), Some(INVALID_EMAIL));
    assert_eq!(
        view.field_errors.get(Field::Password),
        Some(REGISTER_PASSWORD_TOO_SHORT)
    );

    screen.form().set_values(RegisterForm {
        role: None,
        name: "Ada".to_string(),
        email: "ada@example.com".to_string(),
        password: SecretString::from("secret"),
    });
    let view = screen.submit().await;
    assert_eq!(view.field_errors.len(), 1);
    assert_eq!(view.field_errors.get(Field::Role), Some(SELECT_ROLE));
    Ok(())
}

#[tokio::test]
async fn register_conflict_keeps_user_on_screen() -> Result<()> {
    skip_without_localhost!();
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/register"))
        .and(body_json(json!({
            "name": "Ada",
            "email": "ada@example.com",
            "password": "secret",
            "role": "instructor"
        })))
        .respond_with(
            ResponseTemplate::new(409).set_body_json(json!({ "message": "User already exists" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let routes = Arc::new(Routes::default());
    let screen = RegisterScreen::new(api(&server)?, routes.clone());
    screen.form().set_values(RegisterForm {
        role: Some("instructor".to_string()),
        name: "Ada".to_string(),
        email: "ada@example.com".to_string(),
        password: SecretString::from("secret"),
    });

    let view = screen.submit().await;

    assert_eq!(view.error_message(), Some("User already exists"));
    assert!(routes.visited().is_empty());
    assert_eq!(screen.form().values().name, "Ada");
    Ok(())
}

#[tokio::test]
async fn reset_success_sends_user_to_login() -> Result<()> {
    skip_without_localhost!();
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/reset-password/tok123"))
        .and(body_json(json!({ "password": "newpassword" })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let routes = Arc::new(Routes::default());
    let screen = ResetPasswordScreen::new(api(&server)?, routes.clone(), "tok123");
    screen.set_password(SecretString::from("newpassword"));

    let view = screen.submit().await;

    assert_eq!(
        view.banner.as_ref().map(|banner| banner.kind),
        Some(BannerKind::Success)
    );
    assert_eq!(
        view.banner.map(|banner| banner.message),
        Some(RESET_SUCCEEDED.to_string())
    );
    assert_eq!(routes.visited(), vec![Route::Login]);
    Ok(())
}

#[tokio::test]
async fn expired_reset_token_offers_new_link_and_stays() -> Result<()> {
    skip_without_localhost!();
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/reset-password/tok123"))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(json!({ "message": "Token expired" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let routes = Arc::new(Routes::default());
    let screen = ResetPasswordScreen::new(api(&server)?, routes.clone(), "tok123");
    screen.set_password(SecretString::from("newpassword"));

    let view = screen.submit().await;
    tokio::time::pause();
    tokio::time::sleep(REDIRECT_DELAY + Duration::from_millis(500)).await;

    assert_eq!(view.error_message(), Some("Token expired"));
    assert_eq!(view.action, Some(REQUEST_NEW_LINK));
    assert!(!screen.redirect_pending());
    assert!(routes.visited().is_empty());
    Ok(())
}

#[tokio::test]
async fn invalid_reset_token_redirects_after_delay() -> Result<()> {
    skip_without_localhost!();
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/reset-password/tok123"))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(json!({ "message": "Invalid token" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let routes = Arc::new(Routes::default());
    let screen = ResetPasswordScreen::new(api(&server)?, routes.clone(), "tok123");
    screen.set_password(SecretString::from("newpassword"));

    let view = screen.submit().await;
    tokio::time::pause();

    assert_eq!(view.error_message(), Some("Invalid token"));
    assert_eq!(view.action, None);
    assert!(screen.redirect_pending());

    tokio::time::sleep(REDIRECT_DELAY - Duration::from_millis(10)).await;
    assert!(routes.visited().is_empty());

    tokio::time::sleep(Duration::from_millis(20)).await;
    assert_eq!(routes.visited(), vec![Route::ForgotPassword]);
    Ok(())
}

#[tokio::test]
async fn typed_code_overrides_message_text() -> Result<()> {
    skip_without_localhost!();
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/reset-password/tok123"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "message": "This link can no longer be used",
            "code": "token_expired"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let routes = Arc::new(Routes::default());
    let screen = ResetPasswordScreen::new(api(&server)?, routes.clone(), "tok123");
    screen.set_password(SecretString::from("newpassword"));

    let view = screen.submit().await;

    assert_eq!(view.error_message(), Some("This link can no longer be used"));
    assert_eq!(view.action, Some(REQUEST_NEW_LINK));
    assert_eq!(screen.press_action(), Some(Route::ForgotPassword));
    assert_eq!(routes.visited(), vec![Route::ForgotPassword]);
    Ok(())
}

#[tokio::test]
async fn unmounted_reset_screen_never_redirects() -> Result<()> {
    skip_without_localhost!();
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/reset-password/tok123"))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(json!({ "message": "Invalid token" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let routes = Arc::new(Routes::default());
    let screen = ResetPasswordScreen::new(api(&server)?, routes.clone(), "tok123");
    screen.set_password(SecretString::from("newpassword"));

    screen.submit().await;
    tokio::time::pause();
    screen.unmount();
    tokio::time::sleep(REDIRECT_DELAY * 2).await;

    assert!(routes.visited().is_empty());
    Ok(())
}
