use chrono::{DateTime, Utc};
use shared_types::{AppError, CustodyAction, CustodyLog, MovementPurpose};
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::error_convert::SqlxErrorExt;

const CUSTODY_LOG_COLUMNS: &str = "id, property_id, from_officer, to_officer, from_location, \
     to_location, purpose, action, remarks, handler, movement_timestamp, created_at";

/// Record one custody movement: append the audit log entry and advance the
/// property's status per the action's transition table, as one transaction.
///
/// The property update is conditional on the property not being in the
/// terminal DISPOSED state, so no custody entry can ever be appended to a
/// disposed item.
#[allow(clippy::too_many_arguments)]
pub async fn record_movement(
    pool: &Pool<Postgres>,
    property_id: Uuid,
    from_officer: &str,
    to_officer: Option<&str>,
    from_location: &str,
    to_location: &str,
    purpose: MovementPurpose,
    action: CustodyAction,
    remarks: Option<&str>,
    movement_timestamp: Option<DateTime<Utc>>,
    handler: Uuid,
) -> Result<CustodyLog, AppError> {
    let mut tx = pool.begin().await.map_err(SqlxErrorExt::into_app_error)?;

    // MOVED and RECEIVED drive the status; DISPOSED/RELEASED custody entries
    // are audit-only and touch nothing but last_movement_at.
    let claimed = match action.derived_status() {
        Some(status) => {
            sqlx::query_scalar::<_, Uuid>(
                r#"
                UPDATE properties SET status = $2, last_movement_at = NOW()
                WHERE id = $1 AND status <> 'DISPOSED'
                RETURNING id
                "#,
            )
            .bind(property_id)
            .bind(status.as_str())
            .fetch_optional(&mut *tx)
            .await
        }
        None => {
            sqlx::query_scalar::<_, Uuid>(
                r#"
                UPDATE properties SET last_movement_at = NOW()
                WHERE id = $1 AND status <> 'DISPOSED'
                RETURNING id
                "#,
            )
            .bind(property_id)
            .fetch_optional(&mut *tx)
            .await
        }
    }
    .map_err(SqlxErrorExt::into_app_error)?;

    if claimed.is_none() {
        let exists =
            sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM properties WHERE id = $1)")
                .bind(property_id)
                .fetch_one(&mut *tx)
                .await
                .map_err(SqlxErrorExt::into_app_error)?;

        return Err(if exists {
            AppError::invalid_state("cannot log custody on disposed property")
        } else {
            AppError::not_found(format!("Property {} not found", property_id))
        });
    }

    let log = sqlx::query_as::<_, CustodyLog>(&format!(
        r#"
        INSERT INTO custody_logs
            (property_id, from_officer, to_officer, from_location, to_location,
             purpose, action, remarks, handler, movement_timestamp)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, COALESCE($10, NOW()))
        RETURNING {CUSTODY_LOG_COLUMNS}
        "#
    ))
    .bind(property_id)
    .bind(from_officer)
    .bind(to_officer)
    .bind(from_location)
    .bind(to_location)
    .bind(purpose.as_str())
    .bind(action.as_str())
    .bind(remarks)
    .bind(handler)
    .bind(movement_timestamp)
    .fetch_one(&mut *tx)
    .await
    .map_err(SqlxErrorExt::into_app_error)?;

    tx.commit().await.map_err(SqlxErrorExt::into_app_error)?;

    Ok(log)
}

/// List the custody chain for a property, most recent movement first.
pub async fn list_by_property(
    pool: &Pool<Postgres>,
    property_id: Uuid,
) -> Result<Vec<CustodyLog>, AppError> {
    sqlx::query_as::<_, CustodyLog>(&format!(
        r#"
        SELECT {CUSTODY_LOG_COLUMNS} FROM custody_logs
        WHERE property_id = $1
        ORDER BY movement_timestamp DESC
        "#
    ))
    .bind(property_id)
    .fetch_all(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)
}
