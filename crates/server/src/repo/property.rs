use chrono::NaiveDate;
use shared_types::{
    property_tag_for, AppError, CreatePropertyRequest, Disposal, DisposalType, Property,
};
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::error_convert::SqlxErrorExt;

const PROPERTY_COLUMNS: &str = "id, case_id, property_tag, category, nature_of_property, \
     belonging_to, quantity, units, storage_location, description, item_image, qr_code, \
     status, last_movement_at, seizing_officer, created_at";

const DISPOSAL_COLUMNS: &str = "id, property_id, disposal_type, court_order_reference, \
     disposal_date, disposal_authority, remarks, handled_by, created_at";

/// Insert a new property under a case. The id is generated here so the
/// human tag and QR payload can be derived from it before the insert.
pub async fn create(
    pool: &Pool<Postgres>,
    req: CreatePropertyRequest,
    case_number: &str,
    qr_tagging: bool,
) -> Result<Property, AppError> {
    let id = Uuid::new_v4();
    let property_tag = property_tag_for(id);
    let qr_code = qr_tagging.then(|| crate::qr::build_qr_payload(id, case_number, &property_tag));

    sqlx::query_as::<_, Property>(&format!(
        r#"
        INSERT INTO properties
            (id, case_id, property_tag, category, nature_of_property, belonging_to,
             quantity, units, storage_location, description, item_image, qr_code,
             seizing_officer)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
        RETURNING {PROPERTY_COLUMNS}
        "#
    ))
    .bind(id)
    .bind(req.case_id)
    .bind(property_tag)
    .bind(req.category.unwrap_or_default())
    .bind(req.nature_of_property.unwrap_or_default())
    .bind(req.belonging_to.unwrap_or_else(|| "UNKNOWN".to_string()))
    .bind(req.quantity.unwrap_or(1.0))
    .bind(req.units.unwrap_or_default())
    .bind(req.storage_location.unwrap_or_default())
    .bind(req.description.trim())
    .bind(req.item_image)
    .bind(qr_code)
    .bind(req.seizing_officer.unwrap_or_default())
    .fetch_one(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)
}

/// Find a property by ID.
pub async fn find_by_id(pool: &Pool<Postgres>, id: Uuid) -> Result<Option<Property>, AppError> {
    sqlx::query_as::<_, Property>(&format!(
        "SELECT {PROPERTY_COLUMNS} FROM properties WHERE id = $1"
    ))
    .bind(id)
    .fetch_optional(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)
}

/// List all properties registered under a case.
pub async fn list_by_case(pool: &Pool<Postgres>, case_id: Uuid) -> Result<Vec<Property>, AppError> {
    sqlx::query_as::<_, Property>(&format!(
        r#"
        SELECT {PROPERTY_COLUMNS} FROM properties
        WHERE case_id = $1
        ORDER BY created_at ASC
        "#
    ))
    .bind(case_id)
    .fetch_all(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)
}

/// List properties across all cases, newest first. Supports optional search
/// over description and property tag, plus pagination.
pub async fn list(
    pool: &Pool<Postgres>,
    q: Option<&str>,
    offset: i64,
    limit: i64,
) -> Result<(Vec<Property>, i64), AppError> {
    let search = q.map(|s| format!("%{}%", s.to_lowercase()));

    let total = sqlx::query_scalar::<_, i64>(
        r#"
        SELECT COUNT(*) FROM properties
        WHERE ($1::TEXT IS NULL
               OR LOWER(description) LIKE $1
               OR LOWER(property_tag) LIKE $1)
        "#,
    )
    .bind(search.as_deref())
    .fetch_one(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)?;

    let rows = sqlx::query_as::<_, Property>(&format!(
        r#"
        SELECT {PROPERTY_COLUMNS} FROM properties
        WHERE ($1::TEXT IS NULL
               OR LOWER(description) LIKE $1
               OR LOWER(property_tag) LIKE $1)
        ORDER BY created_at DESC
        LIMIT $2 OFFSET $3
        "#
    ))
    .bind(search.as_deref())
    .bind(limit)
    .bind(offset)
    .fetch_all(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)?;

    Ok((rows, total))
}

/// Count properties still awaiting disposal, for the admin overview.
pub async fn count_pending_disposal(pool: &Pool<Postgres>) -> Result<i64, AppError> {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM properties WHERE status <> 'DISPOSED'")
        .fetch_one(pool)
        .await
        .map_err(SqlxErrorExt::into_app_error)
}

/// Dispose a property: flip it to the terminal DISPOSED status, append the
/// disposal record, and reconcile the parent case — all in one transaction.
///
/// The status flip is a conditional update (`status <> 'DISPOSED'`), so of
/// two concurrent disposal attempts exactly one claims the row; the loser
/// gets InvalidState and writes nothing.
pub async fn dispose(
    pool: &Pool<Postgres>,
    property_id: Uuid,
    disposal_type: DisposalType,
    court_order_reference: &str,
    disposal_date: NaiveDate,
    disposal_authority: Option<&str>,
    remarks: Option<&str>,
    handled_by: Uuid,
) -> Result<Disposal, AppError> {
    let mut tx = pool.begin().await.map_err(SqlxErrorExt::into_app_error)?;

    let claimed = sqlx::query_scalar::<_, Uuid>(
        r#"
        UPDATE properties SET status = 'DISPOSED', last_movement_at = NOW()
        WHERE id = $1 AND status <> 'DISPOSED'
        RETURNING case_id
        "#,
    )
    .bind(property_id)
    .fetch_optional(&mut *tx)
    .await
    .map_err(SqlxErrorExt::into_app_error)?;

    let case_id = match claimed {
        Some(case_id) => case_id,
        None => {
            // Zero rows: either the property does not exist, or another
            // disposal already claimed it.
            let exists = sqlx::query_scalar::<_, bool>(
                "SELECT EXISTS(SELECT 1 FROM properties WHERE id = $1)",
            )
            .bind(property_id)
            .fetch_one(&mut *tx)
            .await
            .map_err(SqlxErrorExt::into_app_error)?;

            return Err(if exists {
                AppError::invalid_state("Property is already disposed")
            } else {
                AppError::not_found(format!("Property {} not found", property_id))
            });
        }
    };

    let disposal = sqlx::query_as::<_, Disposal>(&format!(
        r#"
        INSERT INTO disposals
            (property_id, disposal_type, court_order_reference, disposal_date,
             disposal_authority, remarks, handled_by)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING {DISPOSAL_COLUMNS}
        "#
    ))
    .bind(property_id)
    .bind(disposal_type.as_str())
    .bind(court_order_reference)
    .bind(disposal_date)
    .bind(disposal_authority)
    .bind(remarks)
    .bind(handled_by)
    .fetch_one(&mut *tx)
    .await
    .map_err(SqlxErrorExt::into_app_error)?;

    let case_closed = crate::repo::case::reconcile_status(&mut *tx, case_id).await?;

    tx.commit().await.map_err(SqlxErrorExt::into_app_error)?;

    if case_closed {
        tracing::info!(%case_id, %property_id, "all properties disposed, case closed");
    }

    Ok(disposal)
}
