//! Collision-checked identifier allocation.

use serde::{de::DeserializeOwned, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::errors::ServiceError;
use crate::storage::JsonRecordStore;

/// Random v4 id with no record in `store`.
pub async fn allocate_id<V>(store: &JsonRecordStore<V>) -> Result<Uuid, ServiceError>
where
    V: Serialize + DeserializeOwned,
{
    allocate_id_with(store, Uuid::new_v4).await
}

/// Draw ids from `next` until one is free. Unbounded: a taken id just means
/// drawing again.
pub async fn allocate_id_with<V, G>(store: &JsonRecordStore<V>, mut next: G) -> Result<Uuid, ServiceError>
where
    V: Serialize + DeserializeOwned,
    G: FnMut() -> Uuid,
{
    loop {
        let id = next();
        if !store.exists(id).await? {
            return Ok(id);
        }
        debug!(kind = store.kind(), %id, "generated id already taken; regenerating");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::FsFileStore;
    use models::{NewCart, Cart};
    use std::sync::Arc;

    #[tokio::test]
    async fn taken_ids_are_skipped() -> Result<(), anyhow::Error> {
        let dir = std::env::temp_dir().join(format!("ids_{}", Uuid::new_v4()));
        let store: JsonRecordStore<Cart> = JsonRecordStore::new(Arc::new(FsFileStore::new()), &dir, "cart");

        let taken_a = Uuid::new_v4();
        let taken_b = Uuid::new_v4();
        let free = Uuid::new_v4();
        for id in [taken_a, taken_b] {
            store.save(id, &NewCart { cart_name: "x".into() }.into_cart(id)).await?;
        }

        let mut candidates = vec![taken_a, taken_b, free].into_iter();
        let mut draws = 0;
        let id = allocate_id_with(&store, || {
            draws += 1;
            candidates.next().unwrap_or_else(Uuid::new_v4)
        })
        .await?;

        assert_eq!(id, free);
        assert_eq!(draws, 3);

        let fresh = allocate_id(&store).await?;
        assert!(![taken_a, taken_b].contains(&fresh));
        assert_eq!(fresh.get_version_num(), 4);

        let _ = tokio::fs::remove_dir_all(&dir).await;
        Ok(())
    }
}
