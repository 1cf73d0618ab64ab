use crate::common;
use actix_web::test;
use specview::spec::theme::Theme;
use wiremock::MockServer;

#[actix_web::test]
async fn test_health_expect_ok_without_upstream_request() {
    let server = MockServer::start().await;
    common::forbid_requests(&server).await;
    let app = common::initialize_app(&common::state_for(&server, Theme::Godev)).await;

    let req = test::TestRequest::get().uri("/_health").to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());
    let body = test::read_body(resp).await;
    assert_eq!(body, "ok");
}
