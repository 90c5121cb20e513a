#[cfg(test)]
mod tests {
    use crate::helpers::{body_json, get, make_test_app};
    use axum::http::StatusCode;
    use serial_test::serial;
    use tower::ServiceExt;

    #[tokio::test]
    #[serial]
    async fn health_check_returns_ok_json() {
        let (app, _) = make_test_app().await;

        let response = app.oneshot(get("/health", None)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["status"], 200);
        assert_eq!(json["data"], "OK");
    }
}
