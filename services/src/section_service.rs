use crate::error::ServiceError;
use crate::section_days::SectionDays;
use db::models::{
    section::{Model as SectionModel, Weekday},
    user_section_rating::Model as RatingModel,
};
use sea_orm::{DatabaseConnection, TransactionTrait};

/// Raw admin input for creating or updating a section.
///
/// Fields stay untyped strings so that validation (and its error messages)
/// lives here rather than in the HTTP extractor.
#[derive(Debug, Clone, Default)]
pub struct SectionChange {
    pub id: Option<String>,
    pub weekday: Option<String>,
    pub time: Option<String>,
}

pub struct SectionService;

impl SectionService {
    /// All sections bucketed by weekday.
    pub async fn list_by_weekday(db: &DatabaseConnection) -> Result<SectionDays, ServiceError> {
        let sections = SectionModel::all_ordered(db).await?;
        Ok(SectionDays::from_sections(sections))
    }

    /// Creates a section, or updates it when `id` is given.
    ///
    /// An empty `id` counts as absent. An `id` that does not name an existing
    /// section fails with [`ServiceError::SectionNotFound`] before anything is
    /// written.
    pub async fn save(
        db: &DatabaseConnection,
        change: SectionChange,
    ) -> Result<SectionModel, ServiceError> {
        let (Some(weekday), Some(time)) = (change.weekday, change.time) else {
            return Err(ServiceError::MissingField("Missing weekday and/or time field."));
        };
        let weekday = Weekday::from_title_case(&weekday).ok_or(ServiceError::InvalidWeekday)?;

        match change.id.filter(|id| !id.is_empty()) {
            None => {
                let section = SectionModel::create(db, weekday, &time).await?;
                tracing::info!(section_id = section.id, %weekday, time = %section.time, "Section created");
                Ok(section)
            }
            Some(raw_id) => {
                let id = parse_id(&raw_id).ok_or(ServiceError::SectionNotFound)?;
                let existing = SectionModel::find(db, id)
                    .await?
                    .ok_or(ServiceError::SectionNotFound)?;
                let section = existing.update(db, weekday, &time).await?;
                tracing::info!(section_id = section.id, %weekday, time = %section.time, "Section updated");
                Ok(section)
            }
        }
    }

    /// Deletes a section together with every rating that points at it.
    pub async fn delete(db: &DatabaseConnection, id: Option<String>) -> Result<(), ServiceError> {
        let raw_id = id.ok_or(ServiceError::MissingField("Missing section id."))?;
        let id = parse_id(&raw_id).ok_or(ServiceError::SectionNotFound)?;

        let txn = db.begin().await?;
        if SectionModel::find(&txn, id).await?.is_none() {
            txn.rollback().await?;
            return Err(ServiceError::SectionNotFound);
        }
        let ratings = RatingModel::delete_for_section(&txn, id).await?;
        SectionModel::delete(&txn, id).await?;
        txn.commit().await?;

        tracing::info!(section_id = id, ratings_removed = ratings, "Section deleted");
        Ok(())
    }
}

fn parse_id(raw: &str) -> Option<i64> {
    raw.trim().parse().ok()
}
