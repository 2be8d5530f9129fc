/// Database connection tests
pub mod db_tests;

/// Entity create helpers and relations against a migrated database
pub mod crud_tests;

/// Transactional car inserts
pub mod transaction_tests;

pub(crate) fn skip_db_tests() -> bool {
    std::env::var("SKIP_DB_TESTS").is_ok() || std::env::var("DATABASE_URL").is_err()
}
