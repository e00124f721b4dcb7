//! Schema setup, embedded from `migrations/`

use sqlx::migrate::{MigrateError, Migrator};
use sqlx::PgPool;

pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Apply pending migrations. Already-applied ones are skipped.
pub async fn run(pool: &PgPool) -> Result<(), MigrateError> {
    tracing::info!("Running migrations...");
    MIGRATOR.run(pool).await?;
    tracing::info!("Migrations complete");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn users_migration_is_embedded() {
        assert!(MIGRATOR
            .iter()
            .any(|migration| migration.description.contains("create users")));
    }

    #[sqlx::test(migrations = false)]
    #[ignore = "requires database"]
    async fn run_is_idempotent(pool: PgPool) {
        run(&pool).await.unwrap();
        run(&pool).await.unwrap();

        let (exists,): (bool,) = sqlx::query_as(
            "SELECT EXISTS(SELECT 1 FROM information_schema.tables WHERE table_name = 'users')",
        )
        .fetch_one(&pool)
        .await
        .unwrap();

        assert!(exists);
    }
}
