use cg_core::{Applicatie, Rsin};
use cg_db::{ApplicatieRepository, create_in_memory_pool};

use sqlx::SqlitePool;
use uuid::Uuid;

pub const TEST_RSIN: &str = "123456789";

/// In-memory SQLite pool with migrations run
pub async fn create_test_pool() -> SqlitePool {
    create_in_memory_pool()
        .await
        .expect("Failed to create test pool")
}

/// Registers an application so issues can reference it as eigenaar
pub async fn create_test_applicatie(pool: &SqlitePool, organisatie: &str) -> Uuid {
    let applicatie = Applicatie::new(
        Uuid::new_v4(),
        "Test applicatie".to_string(),
        Rsin::parse(organisatie).expect("valid rsin"),
    );

    ApplicatieRepository::ensure(pool, &applicatie)
        .await
        .expect("Failed to create test applicatie");

    applicatie.id
}
