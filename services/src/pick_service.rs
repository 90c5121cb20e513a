use crate::error::ServiceError;
use db::models::{
    authcode_user::Model as UserModel, section::Model as SectionModel,
    user_section_rating::Model as RatingModel,
};
use sea_orm::{DatabaseConnection, TransactionTrait};
use std::collections::HashMap;

/// Rating stored for every section on each submission.
///
/// The pick form posts one `rating<section_id>` field per section, but the
/// submitted values are not read: every section is recorded with this value.
// TODO: store the submitted `rating<section_id>` values once the pick form offers a real scale.
pub const PICK_RATING: i32 = 1;

/// Name of the pick-form field carrying the rating for `section_id`.
pub fn rating_field(section_id: i64) -> String {
    format!("rating{section_id}")
}

pub struct PickService;

impl PickService {
    /// Replaces all of a user's ratings with one [`PICK_RATING`] row per
    /// existing section.
    ///
    /// Runs in a single transaction, so a failure part-way leaves the user's
    /// previous ratings in place.
    pub async fn record_picks(
        db: &DatabaseConnection,
        user_id: i64,
        submitted: &HashMap<String, String>,
    ) -> Result<Vec<RatingModel>, ServiceError> {
        let txn = db.begin().await?;

        let Some(user) = UserModel::find(&txn, user_id).await? else {
            txn.rollback().await?;
            return Err(ServiceError::UserNotFound);
        };

        let removed = RatingModel::delete_for_user(&txn, user.id).await?;
        let section_ids = SectionModel::ids(&txn).await?;
        let answered = section_ids
            .iter()
            .filter(|id| submitted.contains_key(&rating_field(**id)))
            .count();

        let mut ratings = Vec::with_capacity(section_ids.len());
        for section_id in section_ids {
            ratings.push(RatingModel::create(&txn, user.id, section_id, PICK_RATING).await?);
        }
        txn.commit().await?;

        tracing::info!(
            user_id = user.id,
            removed,
            recorded = ratings.len(),
            answered,
            "Section picks replaced"
        );
        Ok(ratings)
    }
}
