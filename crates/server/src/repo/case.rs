use shared_types::{case_number_for, AppError, Case, CreateCaseRequest};
use sqlx::{PgConnection, Pool, Postgres};
use uuid::Uuid;

use crate::error_convert::SqlxErrorExt;

const CASE_COLUMNS: &str = "id, crime_number, crime_year, case_number, police_station, \
     investigating_officer_name, investigating_officer_id, fir_date, seizure_date, \
     act_and_law, section, status, status_updated_at, reporting_officer, created_at";

/// Insert a new case. The display key `case_number` is derived from the
/// `(crime_number, crime_year)` natural key; duplicates surface as Conflict
/// from the unique index.
pub async fn create(
    pool: &Pool<Postgres>,
    req: CreateCaseRequest,
    reporting_officer: Option<Uuid>,
) -> Result<Case, AppError> {
    let case_number = case_number_for(req.crime_number.trim(), req.crime_year);

    sqlx::query_as::<_, Case>(&format!(
        r#"
        INSERT INTO cases
            (crime_number, crime_year, case_number, police_station,
             investigating_officer_name, investigating_officer_id,
             fir_date, seizure_date, act_and_law, section, reporting_officer)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
        RETURNING {CASE_COLUMNS}
        "#
    ))
    .bind(req.crime_number.trim())
    .bind(req.crime_year)
    .bind(case_number)
    .bind(req.police_station.trim())
    .bind(req.investigating_officer_name.trim())
    .bind(req.investigating_officer_id.unwrap_or_default())
    .bind(req.fir_date)
    .bind(req.seizure_date)
    .bind(req.act_and_law.unwrap_or_default())
    .bind(req.section.unwrap_or_default())
    .bind(reporting_officer)
    .fetch_one(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)
}

/// Find a case by ID.
pub async fn find_by_id(pool: &Pool<Postgres>, id: Uuid) -> Result<Option<Case>, AppError> {
    sqlx::query_as::<_, Case>(&format!("SELECT {CASE_COLUMNS} FROM cases WHERE id = $1"))
        .bind(id)
        .fetch_optional(pool)
        .await
        .map_err(SqlxErrorExt::into_app_error)
}

/// List cases, newest first. Supports optional search over case_number and
/// police_station, plus pagination.
pub async fn list(
    pool: &Pool<Postgres>,
    q: Option<&str>,
    offset: i64,
    limit: i64,
) -> Result<(Vec<Case>, i64), AppError> {
    let search = q.map(|s| format!("%{}%", s.to_lowercase()));

    let total = sqlx::query_scalar::<_, i64>(
        r#"
        SELECT COUNT(*) FROM cases
        WHERE ($1::TEXT IS NULL
               OR LOWER(case_number) LIKE $1
               OR LOWER(police_station) LIKE $1)
        "#,
    )
    .bind(search.as_deref())
    .fetch_one(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)?;

    let rows = sqlx::query_as::<_, Case>(&format!(
        r#"
        SELECT {CASE_COLUMNS} FROM cases
        WHERE ($1::TEXT IS NULL
               OR LOWER(case_number) LIKE $1
               OR LOWER(police_station) LIKE $1)
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

/// Explicit administrative status override. Callers validate the vocabulary.
pub async fn update_status(
    pool: &Pool<Postgres>,
    id: Uuid,
    status: &str,
) -> Result<Option<Case>, AppError> {
    sqlx::query_as::<_, Case>(&format!(
        r#"
        UPDATE cases SET status = $2, status_updated_at = NOW()
        WHERE id = $1
        RETURNING {CASE_COLUMNS}
        "#
    ))
    .bind(id)
    .bind(status)
    .fetch_optional(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)
}

/// Case Status Aggregator: close the case when every property under it has
/// been disposed. Monotonic-forward — a DISPOSED case is never reopened
/// here — and guarded against the vacuous zero-property case: a case with
/// no properties at all is left untouched.
///
/// Runs inside the disposal transaction so the property flip and the case
/// closure commit as one unit. Returns true if the case was closed.
pub async fn reconcile_status(conn: &mut PgConnection, case_id: Uuid) -> Result<bool, AppError> {
    let result = sqlx::query(
        r#"
        UPDATE cases SET status = 'DISPOSED', status_updated_at = NOW()
        WHERE id = $1 AND status <> 'DISPOSED'
          AND EXISTS (SELECT 1 FROM properties WHERE case_id = $1)
          AND NOT EXISTS (SELECT 1 FROM properties
                          WHERE case_id = $1 AND status <> 'DISPOSED')
        "#,
    )
    .bind(case_id)
    .execute(conn)
    .await
    .map_err(SqlxErrorExt::into_app_error)?;

    Ok(result.rows_affected() > 0)
}

/// Count cases grouped by status, for the admin overview.
pub async fn status_counts(pool: &Pool<Postgres>) -> Result<Vec<(String, i64)>, AppError> {
    sqlx::query_as::<_, (String, i64)>(
        "SELECT status, COUNT(*) FROM cases GROUP BY status ORDER BY status",
    )
    .fetch_all(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)
}
