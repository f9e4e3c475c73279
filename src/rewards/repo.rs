use serde::Serialize;
use sqlx::{FromRow, PgPool};
use time::{Duration, OffsetDateTime};
use uuid::Uuid;

use super::code;

/// How long an issued coupon stays valid.
pub const COUPON_VALIDITY_DAYS: i64 = 30;

#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Coupon {
    pub id: Uuid,
    pub user_id: Uuid,
    pub code: String,
    pub reward: String,
    #[serde(with = "time::serde::rfc3339")]
    pub expiration_date: OffsetDateTime,
    pub used: bool,
    #[serde(skip_serializing)]
    pub created_at: OffsetDateTime,
}

/// Coupon joined with its owner's identity, for the admin listing.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct CouponWithOwner {
    pub id: Uuid,
    pub code: String,
    pub reward: String,
    #[serde(with = "time::serde::rfc3339")]
    pub expiration_date: OffsetDateTime,
    pub used: bool,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

pub fn expiration_from(issued_at: OffsetDateTime) -> OffsetDateTime {
    issued_at + Duration::days(COUPON_VALIDITY_DAYS)
}

/// Current points balance. None if the user row is gone.
pub async fn points_balance(db: &PgPool, user_id: Uuid) -> anyhow::Result<Option<i32>> {
    let row: Option<(i32,)> = sqlx::query_as("SELECT points FROM users WHERE id = $1")
        .bind(user_id)
        .fetch_optional(db)
        .await?;
    Ok(row.map(|(points,)| points))
}

/// Debit `cost` points if, and only if, the balance covers it. The check and
/// the debit are one statement, so concurrent redeems cannot overdraft.
pub async fn debit_points(db: &PgPool, user_id: Uuid, cost: i32) -> anyhow::Result<bool> {
    let result = sqlx::query("UPDATE users SET points = points - $1 WHERE id = $2 AND points >= $1")
        .bind(cost)
        .bind(user_id)
        .execute(db)
        .await?;
    Ok(result.rows_affected() == 1)
}

/// Debit the cost and insert the coupon in one transaction. None means the
/// balance did not cover the cost; nothing is written in that case.
pub async fn issue_coupon(
    db: &PgPool,
    user_id: Uuid,
    reward: &str,
    cost: i32,
) -> anyhow::Result<Option<Coupon>> {
    let mut tx = db.begin().await?;

    let debited = sqlx::query("UPDATE users SET points = points - $1 WHERE id = $2 AND points >= $1")
        .bind(cost)
        .bind(user_id)
        .execute(&mut *tx)
        .await?
        .rows_affected()
        == 1;

    if !debited {
        tx.rollback().await?;
        return Ok(None);
    }

    let coupon = sqlx::query_as::<_, Coupon>(
        r#"
        INSERT INTO coupons (user_id, code, reward, expiration_date)
        VALUES ($1, $2, $3, $4)
        RETURNING id, user_id, code, reward, expiration_date, used, created_at
        "#,
    )
    .bind(user_id)
    .bind(code::generate())
    .bind(reward)
    .bind(expiration_from(OffsetDateTime::now_utc()))
    .fetch_one(&mut *tx)
    .await?;

    tx.commit().await?;
    Ok(Some(coupon))
}

pub async fn list_by_user(db: &PgPool, user_id: Uuid) -> anyhow::Result<Vec<Coupon>> {
    let coupons = sqlx::query_as::<_, Coupon>(
        r#"
        SELECT id, user_id, code, reward, expiration_date, used, created_at
        FROM coupons
        WHERE user_id = $1
        ORDER BY created_at
        "#,
    )
    .bind(user_id)
    .fetch_all(db)
    .await?;
    Ok(coupons)
}

pub async fn list_with_owner(db: &PgPool) -> anyhow::Result<Vec<CouponWithOwner>> {
    let rows = sqlx::query_as::<_, CouponWithOwner>(
        r#"
        SELECT c.id, c.code, c.reward, c.expiration_date, c.used,
               u.first_name, u.last_name, u.email
        FROM coupons c
        JOIN users u ON c.user_id = u.id
        ORDER BY c.expiration_date DESC
        "#,
    )
    .fetch_all(db)
    .await?;
    Ok(rows)
}

/// Flip the used flag. None if no such coupon exists.
pub async fn set_used(db: &PgPool, id: Uuid, used: bool) -> anyhow::Result<Option<Coupon>> {
    let row = sqlx::query_as::<_, Coupon>(
        r#"
        UPDATE coupons
        SET used = $1
        WHERE id = $2
        RETURNING id, user_id, code, reward, expiration_date, used, created_at
        "#,
    )
    .bind(used)
    .bind(id)
    .fetch_optional(db)
    .await?;
    Ok(row)
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn coupon_expires_exactly_thirty_days_after_issue() {
        let issued = datetime!(2024-06-01 10:00 UTC);
        assert_eq!(expiration_from(issued), datetime!(2024-07-01 10:00 UTC));
    }

    #[test]
    fn coupon_serializes_expiration_as_rfc3339() {
        let coupon = Coupon {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            code: "AB12CD34".into(),
            reward: "Free grooming".into(),
            expiration_date: datetime!(2024-07-01 10:00 UTC),
            used: false,
            created_at: datetime!(2024-06-01 10:00 UTC),
        };
        let json = serde_json::to_string(&coupon).expect("serialize");
        assert!(json.contains(r#""expirationDate":"2024-07-01T10:00:00Z""#));
        assert!(json.contains(r#""code":"AB12CD34""#));
        assert!(!json.contains("createdAt"));
    }
}
