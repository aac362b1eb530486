use std::marker::PhantomData;
use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{DbConn, EntityTrait, PrimaryKeyTrait};

use quill_core::error::RepoError;
use quill_core::ports::BaseRepository;

use super::errors::query_error;

/// Generic SeaORM repository; entity-specific traits are implemented on the
/// concrete aliases in `seaorm_repo`. Repositories share one pool through
/// the `Arc`.
pub struct SeaOrmBaseRepository<E>
where
    E: EntityTrait,
{
    pub(crate) db: Arc<DbConn>,
    _entity: PhantomData<E>,
}

impl<E> SeaOrmBaseRepository<E>
where
    E: EntityTrait,
{
    pub fn new(db: Arc<DbConn>) -> Self {
        Self {
            db,
            _entity: PhantomData,
        }
    }
}

#[async_trait]
impl<E, T, ID> BaseRepository<T, ID> for SeaOrmBaseRepository<E>
where
    E: EntityTrait,
    E::Model: Send + Sync,
    E::PrimaryKey: PrimaryKeyTrait<ValueType = ID>,
    ID: Send + Sync + Copy + 'static,
    T: From<E::Model> + Send + Sync + 'static,
{
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError> {
        let result = E::find_by_id(id).one(self.db.as_ref()).await.map_err(query_error)?;

        Ok(result.map(Into::into))
    }

    async fn delete(&self, id: ID) -> Result<(), RepoError> {
        let result = E::delete_by_id(id)
            .exec(self.db.as_ref())
            .await
            .map_err(query_error)?;

        if result.rows_affected == 0 {
            return Err(RepoError::NotFound);
        }

        Ok(())
    }
}
