use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::{QueryOrder, Set};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum::{Display, EnumString};

/// A schedulable slot, identified by the day of the week and a time label.
///
/// `time` is free-form text ("9:00", "2:30 PM", "after lunch"); nothing here
/// parses it. Weekday + time pairs are not unique.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "sections")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub weekday: Weekday,
    pub time: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Day of the week a section meets on.
///
/// Variants are declared in calendar order starting on Sunday, and the derived
/// `Ord` follows that order.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    EnumIter,
    DeriveActiveEnum,
    Display,
    EnumString,
    Serialize,
    Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "Text")]
pub enum Weekday {
    #[sea_orm(string_value = "Sunday")]
    Sunday,
    #[sea_orm(string_value = "Monday")]
    Monday,
    #[sea_orm(string_value = "Tuesday")]
    Tuesday,
    #[sea_orm(string_value = "Wednesday")]
    Wednesday,
    #[sea_orm(string_value = "Thursday")]
    Thursday,
    #[sea_orm(string_value = "Friday")]
    Friday,
    #[sea_orm(string_value = "Saturday")]
    Saturday,
}

impl Weekday {
    pub const ALL: [Weekday; 7] = [
        Weekday::Sunday,
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
    ];

    /// Parses user input after title-casing it, so `"monday"` and `"MONDAY"`
    /// both become `Monday`. Anything that is not exactly a day name after
    /// title-casing (surrounding whitespace included) is rejected.
    pub fn from_title_case(raw: &str) -> Option<Weekday> {
        Weekday::from_str(&title_case(raw)).ok()
    }
}

/// Upper-cases the first letter of every run of alphabetic characters and
/// lower-cases the rest.
pub fn title_case(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut in_word = false;
    for ch in raw.chars() {
        if ch.is_alphabetic() {
            if in_word {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(ch);
            in_word = false;
        }
    }
    out
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::user_section_rating::Entity")]
    Ratings,
}

impl Related<super::user_section_rating::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Ratings.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub async fn create<C>(db: &C, weekday: Weekday, time: &str) -> Result<Model, DbErr>
    where
        C: ConnectionTrait,
    {
        let now = Utc::now();
        ActiveModel {
            weekday: Set(weekday),
            time: Set(time.to_owned()),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(db)
        .await
    }

    /// Overwrites weekday and time of an existing row.
    pub async fn update<C>(self, db: &C, weekday: Weekday, time: &str) -> Result<Model, DbErr>
    where
        C: ConnectionTrait,
    {
        let mut active: ActiveModel = self.into();
        active.weekday = Set(weekday);
        active.time = Set(time.to_owned());
        active.updated_at = Set(Utc::now());
        active.update(db).await
    }

    pub async fn find<C>(db: &C, id: i64) -> Result<Option<Model>, DbErr>
    where
        C: ConnectionTrait,
    {
        Entity::find_by_id(id).one(db).await
    }

    /// Every section, ordered by weekday, time and id as stored.
    ///
    /// Both columns are text, so this is a lexicographic order; callers that
    /// need clock order re-sort.
    pub async fn all_ordered<C>(db: &C) -> Result<Vec<Model>, DbErr>
    where
        C: ConnectionTrait,
    {
        Entity::find()
            .order_by_asc(Column::Weekday)
            .order_by_asc(Column::Time)
            .order_by_asc(Column::Id)
            .all(db)
            .await
    }

    pub async fn ids<C>(db: &C) -> Result<Vec<i64>, DbErr>
    where
        C: ConnectionTrait,
    {
        Ok(Entity::find()
            .order_by_asc(Column::Id)
            .all(db)
            .await?
            .into_iter()
            .map(|s| s.id)
            .collect())
    }

    /// Returns the number of rows removed.
    pub async fn delete<C>(db: &C, id: i64) -> Result<u64, DbErr>
    where
        C: ConnectionTrait,
    {
        let res = Entity::delete_by_id(id).exec(db).await?;
        Ok(res.rows_affected)
    }
}
