use serde::Serialize;
use sqlx::{FromRow, PgPool};
use time::{Date, OffsetDateTime, Time};
use uuid::Uuid;

use crate::json_time;

/// Points credited to the owner when an appointment is booked.
pub const BOOKING_REWARD_POINTS: i32 = 10;

#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: Uuid,
    pub user_id: Uuid,
    #[serde(rename = "date", with = "json_time::date")]
    pub appointment_date: Date,
    #[serde(rename = "time", with = "json_time::time_of_day")]
    pub appointment_time: Time,
    pub attended: bool,
    #[serde(skip_serializing)]
    pub created_at: OffsetDateTime,
}

/// Appointment joined with its owner's name, for the admin listing.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentWithOwner {
    pub id: Uuid,
    #[serde(rename = "date", with = "json_time::date")]
    pub appointment_date: Date,
    #[serde(rename = "time", with = "json_time::time_of_day")]
    pub appointment_time: Time,
    pub attended: bool,
    pub first_name: String,
    pub last_name: String,
}

impl Appointment {
    /// Insert the appointment and credit the booking reward in one
    /// transaction, so a crash can never record the appointment without
    /// the points (or the other way round).
    pub async fn create_with_reward(
        db: &PgPool,
        user_id: Uuid,
        date: Date,
        time: Time,
    ) -> anyhow::Result<Appointment> {
        let mut tx = db.begin().await?;

        let appointment = sqlx::query_as::<_, Appointment>(
            r#"
            INSERT INTO appointments (user_id, appointment_date, appointment_time)
            VALUES ($1, $2, $3)
            RETURNING id, user_id, appointment_date, appointment_time, attended, created_at
            "#,
        )
        .bind(user_id)
        .bind(date)
        .bind(time)
        .fetch_one(&mut *tx)
        .await?;

        sqlx::query("UPDATE users SET points = points + $1 WHERE id = $2")
            .bind(BOOKING_REWARD_POINTS)
            .bind(user_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(appointment)
    }

    pub async fn list_with_owner(db: &PgPool) -> anyhow::Result<Vec<AppointmentWithOwner>> {
        let rows = sqlx::query_as::<_, AppointmentWithOwner>(
            r#"
            SELECT a.id, a.appointment_date, a.appointment_time, a.attended,
                   u.first_name, u.last_name
            FROM appointments a
            JOIN users u ON a.user_id = u.id
            ORDER BY a.appointment_date, a.appointment_time
            "#,
        )
        .fetch_all(db)
        .await?;
        Ok(rows)
    }

    /// Flip the attended flag. None if no such appointment exists.
    pub async fn set_attended(
        db: &PgPool,
        id: Uuid,
        attended: bool,
    ) -> anyhow::Result<Option<Appointment>> {
        let row = sqlx::query_as::<_, Appointment>(
            r#"
            UPDATE appointments
            SET attended = $1
            WHERE id = $2
            RETURNING id, user_id, appointment_date, appointment_time, attended, created_at
            "#,
        )
        .bind(attended)
        .bind(id)
        .fetch_optional(db)
        .await?;
        Ok(row)
    }
}
