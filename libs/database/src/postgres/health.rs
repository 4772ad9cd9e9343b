use sea_orm::{DatabaseConnection, DbErr};

/// Check PostgreSQL connectivity by pinging the connection pool.
///
/// Intended for readiness probes; returns the underlying error so the
/// caller can log it.
pub async fn check_health(db: &DatabaseConnection) -> Result<(), DbErr> {
    db.ping().await
}
