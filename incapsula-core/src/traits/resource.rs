//! Resource lifecycle Trait

use async_trait::async_trait;

use crate::error::CoreResult;
use crate::schema::AttributeSchema;
use crate::types::ResourceData;

/// Lifecycle of one declarative resource type.
///
/// The host owns scheduling and persistence of [`ResourceData`]; each method
/// reconciles one instance against the remote API and writes the outcome
/// back into `data`.
#[async_trait]
pub trait Resource: Send + Sync {
    /// Resource type name, e.g. `incapsula_site`.
    fn type_name(&self) -> &'static str;

    /// Attribute schema of this resource type.
    fn schema(&self) -> Vec<AttributeSchema>;

    /// Create the remote object and set the identifier.
    async fn create(&self, data: &mut ResourceData) -> CoreResult<()>;

    /// Refresh `data` from the remote object.
    async fn read(&self, data: &mut ResourceData) -> CoreResult<()>;

    /// Apply in-place changes.
    async fn update(&self, data: &mut ResourceData) -> CoreResult<()>;

    /// Delete the remote object and clear the identifier.
    async fn delete(&self, data: &mut ResourceData) -> CoreResult<()>;

    /// Adopt an existing remote object by identifier.
    ///
    /// Default implementation is passthrough: the identifier is taken as-is
    /// and the rest of the state comes from [`read`](Self::read).
    async fn import(&self, id: &str, data: &mut ResourceData) -> CoreResult<()> {
        data.set_id(id);
        self.read(data).await
    }
}
