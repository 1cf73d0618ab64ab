use crate::common::{self, FIXTURE, FIXTURE_DECODED, SPEC_SUBTITLE, SPEC_TITLE};
use actix_web::http::header;
use actix_web::test;
use specview::server::api::state::App as AppState;
use specview::spec::theme::Theme;
use wiremock::matchers::method;
use wiremock::{Mock, MockServer, ResponseTemplate};

fn body_to_string(body: &[u8]) -> String {
    core::str::from_utf8(body).unwrap().into()
}

#[actix_web::test]
async fn test_refs_with_master_expect_rendered_page() {
    let server = MockServer::start().await;
    let document = common::spec_document();
    common::mount_document(&server, "master", common::encode(&document)).await;
    let app = common::initialize_app(&common::state_for(&server, Theme::Godev)).await;

    let req = test::TestRequest::get()
        .uri("/api/refs?ref=master")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status().as_u16(), 200);
    let headers = resp.headers();
    assert_eq!(
        headers.get(header::CACHE_CONTROL).unwrap(),
        "max-age=0, s-maxage=86400"
    );
    assert_eq!(
        headers.get(header::CONTENT_TYPE).unwrap(),
        "text/html; charset=utf-8"
    );
    assert_eq!(headers.get("X-Spec-Ref").unwrap(), "master");

    let body = body_to_string(&test::read_body(resp).await);
    assert!(body.contains("<html>"));
    assert!(body.contains(r##"<meta name="theme-color" content="#00ADD8">"##));
    assert!(body.contains(&format!("<title>{SPEC_SUBTITLE} - ")));
    assert!(body.contains(SPEC_TITLE));
    assert!(body.contains(r#"<script src="/src/toc.js"></script>"#));
    assert!(body.contains(&document));
}

#[actix_web::test]
async fn test_refs_with_fixture_expect_headings_and_verbatim_content() {
    let server = MockServer::start().await;
    common::mount_document(&server, "go1.22.0", FIXTURE.to_owned()).await;
    let app = common::initialize_app(&common::state_for(&server, Theme::Classic)).await;

    let req = test::TestRequest::get()
        .uri("/api/refs?ref=go1.22.0")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert!(resp.status().is_success());
    assert_eq!(
        resp.headers().get(header::CACHE_CONTROL).unwrap(),
        "s-maxage=3600"
    );
    let body = body_to_string(&test::read_body(resp).await);
    assert!(body.contains("<h1>\n    A\n"));
    assert!(body.contains("<h2>\n    B\n"));
    assert!(body.contains(FIXTURE_DECODED));
}

#[actix_web::test]
async fn test_refs_with_cache_control_override_expect_override() {
    let server = MockServer::start().await;
    common::mount_document(&server, "master", FIXTURE.to_owned()).await;
    let mut config = common::config_for(&server, Theme::Godev);
    config.page.cache_control = Some("no-store".to_owned());
    let app = common::initialize_app(&AppState::from_config(&config).unwrap()).await;

    let req = test::TestRequest::get()
        .uri("/api/refs?ref=master")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert!(resp.status().is_success());
    assert_eq!(resp.headers().get(header::CACHE_CONTROL).unwrap(), "no-store");
}

#[actix_web::test]
async fn test_refs_with_nested_ref_expect_slashes_kept_in_upstream_path() {
    let server = MockServer::start().await;
    common::mount_document(&server, "refs/heads/dev.typeparams", FIXTURE.to_owned()).await;
    let app = common::initialize_app(&common::state_for(&server, Theme::Godev)).await;

    let req = test::TestRequest::get()
        .uri("/api/refs?ref=refs%2Fheads%2Fdev.typeparams")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert!(resp.status().is_success());
}

#[actix_web::test]
async fn test_refs_with_several_refs_expect_first_fetched() {
    let server = MockServer::start().await;
    // Only `go1.21.0` is mounted; a request for `master` would 404 and fail the render.
    common::mount_document(&server, "go1.21.0", FIXTURE.to_owned()).await;
    let app = common::initialize_app(&common::state_for(&server, Theme::Godev)).await;

    let req = test::TestRequest::get()
        .uri("/api/refs?ref=go1.21.0&ref=master")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert!(resp.status().is_success());
    assert_eq!(resp.headers().get("X-Spec-Ref").unwrap(), "go1.21.0");
}

#[actix_web::test]
async fn test_refs_without_ref_expect_client_error_and_no_upstream_request() {
    let server = MockServer::start().await;
    common::forbid_requests(&server).await;
    let app = common::initialize_app(&common::state_for(&server, Theme::Godev)).await;

    for uri in ["/api/refs", "/api/refs?ref=", "/api/refs?commit=master"] {
        let req = test::TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status().as_u16(), 400, "{uri}");
        let body = body_to_string(&test::read_body(resp).await);
        assert_eq!(body, "Error: ref must be given");
    }
}

#[actix_web::test]
async fn test_refs_with_invalid_ref_expect_client_error_and_no_upstream_request() {
    let server = MockServer::start().await;
    common::forbid_requests(&server).await;
    let app = common::initialize_app(&common::state_for(&server, Theme::Godev)).await;

    for uri in [
        "/api/refs?ref=..%2Fbad%20ref",
        "/api/refs?ref=master%3Fformat%3DJSON",
        "/api/refs?ref=%3Cscript%3E",
    ] {
        let req = test::TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status().as_u16(), 400, "{uri}");
        let body = body_to_string(&test::read_body(resp).await);
        assert!(body.starts_with("Error: invalid ref format: "), "{body}");
    }
}

#[actix_web::test]
async fn test_refs_when_upstream_not_found_expect_bad_gateway() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404).set_body_string(FIXTURE))
        .expect(1)
        .mount(&server)
        .await;
    let app = common::initialize_app(&common::state_for(&server, Theme::Godev)).await;

    let req = test::TestRequest::get()
        .uri("/api/refs?ref=no-such-branch")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status().as_u16(), 502);
    assert!(resp.headers().get(header::CACHE_CONTROL).is_none());
}

#[actix_web::test]
async fn test_refs_when_document_has_no_descriptor_expect_bad_gateway() {
    let server = MockServer::start().await;
    common::mount_document(
        &server,
        "master",
        common::encode("<h2 id=\"Introduction\">Introduction</h2>"),
    )
    .await;
    let app = common::initialize_app(&common::state_for(&server, Theme::Godev)).await;

    let req = test::TestRequest::get()
        .uri("/api/refs?ref=master")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status().as_u16(), 502);
    let body = body_to_string(&test::read_body(resp).await);
    assert_eq!(body, "Error: description JSON must exist");
}

#[actix_web::test]
async fn test_refs_when_body_is_not_base64_expect_bad_gateway() {
    let server = MockServer::start().await;
    common::mount_document(&server, "master", "<html>oops</html>".to_owned()).await;
    let app = common::initialize_app(&common::state_for(&server, Theme::Godev)).await;

    let req = test::TestRequest::get()
        .uri("/api/refs?ref=master")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status().as_u16(), 502);
}

#[actix_web::test]
async fn test_refs_with_post_method_expect_client_error() {
    let server = MockServer::start().await;
    common::forbid_requests(&server).await;
    let app = common::initialize_app(&common::state_for(&server, Theme::Godev)).await;

    let req = test::TestRequest::post()
        .uri("/api/refs?ref=master")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert!(resp.status().is_client_error());
}
