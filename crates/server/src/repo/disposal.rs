use shared_types::{AppError, Disposal};
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::error_convert::SqlxErrorExt;

const DISPOSAL_COLUMNS: &str = "id, property_id, disposal_type, court_order_reference, \
     disposal_date, disposal_authority, remarks, handled_by, created_at";

/// Find the disposal record for a property, if one exists.
pub async fn find_by_property(
    pool: &Pool<Postgres>,
    property_id: Uuid,
) -> Result<Option<Disposal>, AppError> {
    sqlx::query_as::<_, Disposal>(&format!(
        r#"
        SELECT {DISPOSAL_COLUMNS} FROM disposals
        WHERE property_id = $1
        ORDER BY created_at DESC
        LIMIT 1
        "#
    ))
    .bind(property_id)
    .fetch_optional(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)
}
