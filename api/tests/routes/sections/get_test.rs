#[cfg(test)]
mod tests {
    use crate::helpers::{TestSession, body_string, get, make_test_app};
    use axum::http::StatusCode;
    use db::models::{authcode_user::Model as UserModel, section::{Model as SectionModel, Weekday}};
    use serial_test::serial;
    use tower::ServiceExt;

    /// The `<section>` block rendered for `day`.
    fn day_block<'a>(page: &'a str, day: Weekday) -> &'a str {
        let start = page
            .find(&format!("data-weekday=\"{day}\""))
            .unwrap_or_else(|| panic!("no block for {day}"));
        let rest = &page[start..];
        let end = rest.find("</section>").unwrap();
        &rest[..end]
    }

    /// Test Case: sections land under their weekday, in time order
    #[tokio::test]
    #[serial]
    async fn pick_page_groups_sections_by_weekday() {
        let (app, app_state) = make_test_app().await;
        let user = UserModel::create(app_state.db(), "student").await.unwrap();
        // Inserted out of order on purpose.
        let later = SectionModel::create(app_state.db(), Weekday::Monday, "10:00").await.unwrap();
        let earlier = SectionModel::create(app_state.db(), Weekday::Monday, "9:00").await.unwrap();

        let session = TestSession::authcode(user.id);
        let response = app.oneshot(get("/sections/pick", Some(&session))).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let page = body_string(response).await;
        let monday = day_block(&page, Weekday::Monday);
        let first = monday.find(&format!("data-section-id=\"{}\"", earlier.id)).unwrap();
        let second = monday.find(&format!("data-section-id=\"{}\"", later.id)).unwrap();
        assert!(first < second, "9:00 must come before 10:00");

        for day in Weekday::ALL.into_iter().filter(|d| *d != Weekday::Monday) {
            let block = day_block(&page, day);
            assert!(!block.contains("data-section-id"), "{day} should be empty");
            assert!(block.contains("No sections."));
        }

        let sunday = page.find("data-weekday=\"Sunday\"").unwrap();
        let saturday = page.find("data-weekday=\"Saturday\"").unwrap();
        assert!(sunday < saturday);
        assert!(page.contains(&format!("value=\"{}\"", session.csrf)));
    }

    /// Test Case: any session kind may view the pick form
    #[tokio::test]
    #[serial]
    async fn admins_may_view_the_pick_form() {
        let (app, _) = make_test_app().await;

        let response = app
            .oneshot(get("/sections/pick", Some(&TestSession::admin(1))))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    /// Test Case: admin listing shows one row per section
    #[tokio::test]
    #[serial]
    async fn manage_page_lists_every_section() {
        let (app, app_state) = make_test_app().await;
        let a = SectionModel::create(app_state.db(), Weekday::Tuesday, "8:00").await.unwrap();
        let b = SectionModel::create(app_state.db(), Weekday::Saturday, "12:30").await.unwrap();

        let response = app
            .oneshot(get("/sections/manage", Some(&TestSession::admin(1))))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let page = body_string(response).await;
        assert_eq!(page.matches("<tr data-section-id=").count(), 2);
        assert!(day_block(&page, Weekday::Tuesday).contains(&format!("<td>{}</td>", a.id)));
        assert!(day_block(&page, Weekday::Saturday).contains("<td>12:30</td>"));
        assert!(page.contains(&format!("data-section-id=\"{}\"", b.id)));
        assert!(page.contains("action=\"/sections/change\""));
        assert!(page.contains("action=\"/sections/delete\""));
    }

    /// Test Case: authcode users cannot reach the admin listing
    #[tokio::test]
    #[serial]
    async fn manage_page_requires_admin() {
        let (app, _) = make_test_app().await;

        let response = app
            .oneshot(get("/sections/manage", Some(&TestSession::authcode(1))))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }
}
