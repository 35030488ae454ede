//! The Gateway contract and its two implementations.
//!
//! [`RemoteGateway`] talks to the modeling service; [`InMemoryGateway`] keeps
//! everything in process for tests and local runs. Both speak domain values
//! at this boundary and route serialization through [`crate::wire::codec`],
//! so callers cannot tell them apart.

mod in_memory;
mod remote;

pub use in_memory::InMemoryGateway;
pub use remote::RemoteGateway;

use async_trait::async_trait;

use crate::backend::Backend;
use crate::diagram::ClassDiagram;
use crate::models::*;
use crate::Result;

/// CRUD and lifecycle operations over projects, models, model members and
/// attribute types.
///
/// Mutating operations take `&mut self`. Implementations do not lock
/// internally, so concurrent callers must serialize access themselves.
///
/// Deletes are idempotent: a missing target yields [`Deletion::Absent`].
/// Archive and restore report [`crate::Error::FailedPrecondition`] when the
/// project is already in the target state.
#[async_trait]
pub trait Gateway: Send + Sync {
    fn backend(&self) -> Backend;

    // Projects
    async fn create_project(&mut self, project: &NewProject) -> Result<Project>;
    /// Active projects only.
    async fn list_projects(&self) -> Result<Vec<Project>>;
    async fn list_archived_projects(&self) -> Result<Vec<Project>>;
    async fn get_project(&self, slug: &str) -> Result<Project>;
    async fn update_project(&mut self, slug: &str, patch: &ProjectPatch) -> Result<Project>;
    async fn archive_project(&mut self, slug: &str) -> Result<Project>;
    async fn restore_project(&mut self, slug: &str) -> Result<Project>;
    async fn delete_project(&mut self, slug: &str) -> Result<Deletion>;

    // Models
    async fn create_model(&mut self, project_slug: &str, model: &NewModel) -> Result<Model>;
    async fn list_models(&self, project_slug: &str) -> Result<Vec<Model>>;
    async fn get_model(&self, project_slug: &str, model_slug: &str) -> Result<ModelOverview>;
    async fn delete_model(&mut self, project_slug: &str, model_slug: &str) -> Result<Deletion>;

    // Model attributes
    async fn create_model_attribute(
        &mut self,
        project_slug: &str,
        model_slug: &str,
        attribute: &NewModelAttribute,
    ) -> Result<ModelAttribute>;
    async fn list_model_attributes(
        &self,
        project_slug: &str,
        model_slug: &str,
    ) -> Result<Vec<ModelAttribute>>;
    async fn get_model_attribute(
        &self,
        project_slug: &str,
        model_slug: &str,
        name: &str,
    ) -> Result<ModelAttribute>;
    async fn delete_model_attribute(
        &mut self,
        project_slug: &str,
        model_slug: &str,
        name: &str,
    ) -> Result<Deletion>;

    // Model associations
    async fn create_model_association(
        &mut self,
        project_slug: &str,
        model_slug: &str,
        association: &NewModelAssociation,
    ) -> Result<ModelAssociation>;
    async fn list_model_associations(
        &self,
        project_slug: &str,
        model_slug: &str,
    ) -> Result<Vec<ModelAssociation>>;
    async fn get_model_association(
        &self,
        project_slug: &str,
        model_slug: &str,
        name: &str,
    ) -> Result<ModelAssociation>;
    async fn delete_model_association(
        &mut self,
        project_slug: &str,
        model_slug: &str,
        name: &str,
    ) -> Result<Deletion>;

    // Class diagrams
    async fn get_project_class_diagram(&self, project_slug: &str) -> Result<ClassDiagram>;
    async fn get_model_class_diagram(
        &self,
        project_slug: &str,
        model_slug: &str,
    ) -> Result<ClassDiagram>;

    // Attribute types
    async fn create_attribute_type(&mut self, attribute_type: &NewAttributeType)
        -> Result<AttributeType>;
    async fn list_attribute_types(&self) -> Result<Vec<AttributeType>>;
    async fn get_attribute_type(&self, slug: &str) -> Result<AttributeType>;
    async fn update_attribute_type(
        &mut self,
        slug: &str,
        patch: &AttributeTypePatch,
    ) -> Result<AttributeType>;
    async fn delete_attribute_type(&mut self, slug: &str) -> Result<Deletion>;
}
