#[cfg(test)]
mod tests {
    use crate::helpers::{TestSession, body_json, make_test_app, post_form};
    use axum::http::StatusCode;
    use db::models::{
        authcode_user::Model as UserModel,
        section::{Entity as SectionEntity, Model as SectionModel, Weekday},
        user_section_rating::Model as RatingModel,
    };
    use sea_orm::{EntityTrait, PaginatorTrait};
    use serial_test::serial;
    use tower::ServiceExt;

    /// Test Case: deleting removes that section and its ratings only
    #[tokio::test]
    #[serial]
    async fn delete_section_success() {
        let (app, app_state) = make_test_app().await;
        let db = app_state.db();
        let keep = SectionModel::create(db, Weekday::Monday, "9:00").await.unwrap();
        let doomed = SectionModel::create(db, Weekday::Monday, "10:00").await.unwrap();
        let user = UserModel::create(db, "student").await.unwrap();
        RatingModel::create(db, user.id, keep.id, 1).await.unwrap();
        RatingModel::create(db, user.id, doomed.id, 1).await.unwrap();
        let id = doomed.id.to_string();

        let response = app
            .oneshot(post_form("/sections/delete", &TestSession::admin(1), &[("id", id.as_str())]))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["status"], 200);
        assert!(json["data"].is_null());

        assert!(SectionModel::find(db, doomed.id).await.unwrap().is_none());
        assert!(SectionModel::find(db, keep.id).await.unwrap().is_some());
        let remaining: Vec<i64> = RatingModel::for_user(db, user.id)
            .await
            .unwrap()
            .iter()
            .map(|r| r.section_id)
            .collect();
        assert_eq!(remaining, vec![keep.id]);
    }

    /// Test Case: unknown id is 410 and the table is unchanged
    #[tokio::test]
    #[serial]
    async fn delete_unknown_section_is_gone() {
        let (app, app_state) = make_test_app().await;
        SectionModel::create(app_state.db(), Weekday::Friday, "9:00").await.unwrap();

        let response = app
            .oneshot(post_form("/sections/delete", &TestSession::admin(1), &[("id", "424242")]))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::GONE);
        assert_eq!(body_json(response).await["message"], "Invalid section id.");
        assert_eq!(SectionEntity::find().count(app_state.db()).await.unwrap(), 1);
    }

    /// Test Case: no id at all
    #[tokio::test]
    #[serial]
    async fn delete_without_id_is_bad_request() {
        let (app, _) = make_test_app().await;

        let response = app
            .oneshot(post_form("/sections/delete", &TestSession::admin(1), &[]))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["message"], "Missing section id.");
    }
}
