#[cfg(test)]
mod tests {
    use crate::helpers::{TestSession, body_json, make_test_app, post_form};
    use axum::http::StatusCode;
    use db::models::section::{Entity as SectionEntity, Model as SectionModel, Weekday};
    use sea_orm::{EntityTrait, PaginatorTrait};
    use serial_test::serial;
    use tower::ServiceExt;

    /// Test Case: create normalises the weekday and returns the new id
    #[tokio::test]
    #[serial]
    async fn create_section_success() {
        let (app, app_state) = make_test_app().await;

        let response = app
            .oneshot(post_form(
                "/sections/change",
                &TestSession::admin(1),
                &[("weekday", "monday"), ("time", "10:00")],
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["status"], 200);
        let id = json["data"].as_i64().unwrap();

        let stored = SectionModel::find(app_state.db(), id).await.unwrap().unwrap();
        assert_eq!(stored.weekday, Weekday::Monday);
        assert_eq!(stored.time, "10:00");
    }

    /// Test Case: fields may come from the query string
    #[tokio::test]
    #[serial]
    async fn create_section_from_query_string() {
        let (app, app_state) = make_test_app().await;

        let response = app
            .oneshot(post_form(
                "/sections/change?weekday=sunday&time=7:30",
                &TestSession::admin(1),
                &[("time", "8:00")],
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let id = body_json(response).await["data"].as_i64().unwrap();
        let stored = SectionModel::find(app_state.db(), id).await.unwrap().unwrap();
        assert_eq!(stored.weekday, Weekday::Sunday);
        assert_eq!(stored.time, "8:00", "body value wins over the query string");
    }

    /// Test Case: unknown weekday
    #[tokio::test]
    #[serial]
    async fn invalid_weekday_is_rejected() {
        let (app, app_state) = make_test_app().await;

        let response = app
            .oneshot(post_form(
                "/sections/change",
                &TestSession::admin(1),
                &[("weekday", "Funday"), ("time", "10:00")],
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = body_json(response).await;
        assert_eq!(json["status"], 400);
        assert_eq!(json["message"], "Invalid weekday name.");
        assert_eq!(SectionEntity::find().count(app_state.db()).await.unwrap(), 0);
    }

    /// Test Case: missing time field
    #[tokio::test]
    #[serial]
    async fn missing_field_is_rejected() {
        let (app, _) = make_test_app().await;

        let response = app
            .oneshot(post_form(
                "/sections/change",
                &TestSession::admin(1),
                &[("weekday", "Monday")],
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await["message"],
            "Missing weekday and/or time field."
        );
    }

    /// Test Case: updating an existing section keeps its id
    #[tokio::test]
    #[serial]
    async fn update_section_success() {
        let (app, app_state) = make_test_app().await;
        let section = SectionModel::create(app_state.db(), Weekday::Monday, "9:00").await.unwrap();
        let id = section.id.to_string();

        let response = app
            .oneshot(post_form(
                "/sections/change",
                &TestSession::admin(1),
                &[("id", id.as_str()), ("weekday", "thursday"), ("time", "13:00")],
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["data"], section.id);

        let stored = SectionModel::find(app_state.db(), section.id).await.unwrap().unwrap();
        assert_eq!(stored.weekday, Weekday::Thursday);
        assert_eq!(stored.time, "13:00");
        assert_eq!(SectionEntity::find().count(app_state.db()).await.unwrap(), 1);
    }

    /// Test Case: updating an unknown id is 410 and writes nothing
    #[tokio::test]
    #[serial]
    async fn update_unknown_section_is_gone() {
        let (app, app_state) = make_test_app().await;

        let response = app
            .oneshot(post_form(
                "/sections/change",
                &TestSession::admin(1),
                &[("id", "9999"), ("weekday", "Monday"), ("time", "9:00")],
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::GONE);

        let json = body_json(response).await;
        assert_eq!(json["status"], 410);
        assert_eq!(json["message"], "Invalid section id.");
        assert_eq!(SectionEntity::find().count(app_state.db()).await.unwrap(), 0);
    }
}
