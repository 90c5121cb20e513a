#[cfg(test)]
mod tests {
    use crate::helpers::{TestSession, body_string, make_test_app, post_form};
    use axum::http::StatusCode;
    use db::models::{
        authcode_user::Model as UserModel,
        section::{Model as SectionModel, Weekday},
        user_section_rating::{Entity as RatingEntity, Model as RatingModel},
    };
    use sea_orm::{EntityTrait, PaginatorTrait};
    use serial_test::serial;
    use tower::ServiceExt;

    async fn seed_sections(db: &sea_orm::DatabaseConnection) -> Vec<SectionModel> {
        let mut sections = Vec::new();
        for (day, time) in [
            (Weekday::Monday, "9:00"),
            (Weekday::Wednesday, "11:00"),
            (Weekday::Friday, "15:00"),
        ] {
            sections.push(SectionModel::create(db, day, time).await.unwrap());
        }
        sections
    }

    /// Test Case: picking twice leaves one rating per section
    #[tokio::test]
    #[serial]
    async fn picking_twice_is_idempotent() {
        let (app, app_state) = make_test_app().await;
        let user = UserModel::create(app_state.db(), "student").await.unwrap();
        let sections = seed_sections(app_state.db()).await;
        let session = TestSession::authcode(user.id);
        let field = format!("rating{}", sections[0].id);

        for _ in 0..2 {
            let response = app
                .clone()
                .oneshot(post_form("/sections/pick", &session, &[(field.as_str(), "1")]))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::OK);
            assert!(body_string(response).await.contains("Thanks!"));
        }

        let ratings = RatingModel::for_user(app_state.db(), user.id).await.unwrap();
        let rated: Vec<i64> = ratings.iter().map(|r| r.section_id).collect();
        let expected: Vec<i64> = sections.iter().map(|s| s.id).collect();
        assert_eq!(rated, expected);
        assert!(ratings.iter().all(|r| r.rating == 1));
    }

    /// Test Case: admin sessions cannot record picks
    #[tokio::test]
    #[serial]
    async fn admin_session_is_refused() {
        let (app, app_state) = make_test_app().await;
        seed_sections(app_state.db()).await;

        let response = app
            .oneshot(post_form("/sections/pick", &TestSession::admin(1), &[]))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::FORBIDDEN);
        assert_eq!(RatingEntity::find().count(app_state.db()).await.unwrap(), 0);
    }

    /// Test Case: a session for a user that does not exist
    #[tokio::test]
    #[serial]
    async fn unknown_user_is_refused() {
        let (app, app_state) = make_test_app().await;
        seed_sections(app_state.db()).await;

        let response = app
            .oneshot(post_form("/sections/pick", &TestSession::authcode(999), &[]))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::FORBIDDEN);
        assert_eq!(RatingEntity::find().count(app_state.db()).await.unwrap(), 0);
    }
}
