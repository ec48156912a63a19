use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, ToSchema)]
pub struct PaginationMeta {
    pub total: i64,
    pub per_page: i64,
    pub current_page: i64,
    pub last_page: i64,
}

impl PaginationMeta {
    /// `last_page` is at least 1, even for an empty result.
    pub fn new(total: i64, per_page: i64, current_page: i64) -> Self {
        let per_page = per_page.max(1);
        let last_page = ((total + per_page - 1) / per_page).max(1);

        Self {
            total,
            per_page,
            current_page,
            last_page,
        }
    }
}
