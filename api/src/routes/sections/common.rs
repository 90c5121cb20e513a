use serde::Deserialize;
use services::section_service::SectionChange;

/// Fields accepted by `POST /sections/change`.
///
/// They may arrive in the query string, the URL-encoded body, or both.
#[derive(Debug, Default, Deserialize)]
pub struct SectionParams {
    pub id: Option<String>,
    pub weekday: Option<String>,
    pub time: Option<String>,
}

impl SectionParams {
    /// Combines query and body values; a field present in the body wins.
    pub fn merge(query: Self, body: Self) -> Self {
        Self {
            id: body.id.or(query.id),
            weekday: body.weekday.or(query.weekday),
            time: body.time.or(query.time),
        }
    }
}

impl From<SectionParams> for SectionChange {
    fn from(params: SectionParams) -> Self {
        SectionChange {
            id: params.id,
            weekday: params.weekday,
            time: params.time,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct DeleteParams {
    pub id: Option<String>,
}

impl DeleteParams {
    pub fn merge(query: Self, body: Self) -> Self {
        Self {
            id: body.id.or(query.id),
        }
    }
}
