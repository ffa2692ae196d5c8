use thiserror::Error;

#[derive(Error, Debug)]
pub enum TestError {
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    #[error(transparent)]
    AdsbdbError(#[from] adsbdb::server::error::Error),
    #[error(transparent)]
    RedisError(#[from] fred::error::Error),
    #[error(transparent)]
    SerdeError(#[from] serde_json::Error),
    #[error("Fixture error: {0}")]
    FixtureError(String),
}
