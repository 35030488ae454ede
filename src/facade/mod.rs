//! Domain facade.
//!
//! # Responsibility
//! - Validate input locally; invalid input never reaches the gateway.
//! - Delegate to the injected [`Gateway`] and hand back domain values.
//!
//! # Invariants
//! - Validation failures are [`Error::Validation`] and cost no round trip.
//! - Gateway failures are returned unchanged, so callers can still tell
//!   `NotFound`, `FailedPrecondition` and transport failures apart.
//! - Nothing is cached: every read goes to the gateway.

mod attribute_type;
mod model;
pub mod validation;

use crate::gateway::Gateway;
use crate::models::*;
use crate::{Error, Result};

use validation::{FieldError, Validator};

/// Entry point for callers, wrapping the gateway chosen at startup.
pub struct Workbench {
    gateway: Box<dyn Gateway>,
}

impl Workbench {
    pub fn new(gateway: Box<dyn Gateway>) -> Self {
        Self { gateway }
    }

    pub fn gateway(&self) -> &dyn Gateway {
        self.gateway.as_ref()
    }

    // ============================================================
    // Projects
    // ============================================================

    pub async fn create_project(&mut self, project: &NewProject) -> Result<Project> {
        Validator::new()
            .name("name", &project.name)
            .into_result()?;
        self.gateway.create_project(project).await
    }

    pub async fn list_projects(&self) -> Result<Vec<Project>> {
        self.gateway.list_projects().await
    }

    pub async fn list_archived_projects(&self) -> Result<Vec<Project>> {
        self.gateway.list_archived_projects().await
    }

    pub async fn get_project(&self, slug: &str) -> Result<Project> {
        require_slug("slug", slug)?;
        self.gateway.get_project(slug).await
    }

    /// Apply a partial update. Only fields set on the patch are sent.
    pub async fn update_project(&mut self, slug: &str, patch: &ProjectPatch) -> Result<Project> {
        if patch.mask().is_empty() {
            return Err(Error::Validation(vec![FieldError::required("update_mask")]));
        }
        let mut validator = Validator::new().required("slug", slug);
        if patch.mask().contains(ProjectField::Name) {
            validator = validator.name("name", patch.name().unwrap_or_default());
        }
        validator.into_result()?;

        self.gateway.update_project(slug, patch).await
    }

    pub async fn rename_project(&mut self, slug: &str, name: &str) -> Result<Project> {
        self.update_project(slug, &ProjectPatch::new().rename(name))
            .await
    }

    pub async fn archive_project(&mut self, slug: &str) -> Result<Project> {
        require_slug("slug", slug)?;
        self.gateway.archive_project(slug).await
    }

    pub async fn restore_project(&mut self, slug: &str) -> Result<Project> {
        require_slug("slug", slug)?;
        self.gateway.restore_project(slug).await
    }

    /// A missing project is [`Deletion::Absent`]. A blank slug names no
    /// project at all and is a validation failure like any required field.
    pub async fn delete_project(&mut self, slug: &str) -> Result<Deletion> {
        require_slug("slug", slug)?;
        self.gateway.delete_project(slug).await
    }
}

fn require_slug(field: &str, value: &str) -> Result<()> {
    Validator::new().required(field, value).into_result()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gateway::InMemoryGateway;

    fn workbench() -> Workbench {
        Workbench::new(Box::new(InMemoryGateway::new()))
    }

    #[tokio::test]
    async fn blank_name_is_rejected_before_the_gateway() {
        let mut workbench = workbench();

        let err = workbench
            .create_project(&NewProject::new("   "))
            .await
            .unwrap_err();

        assert!(matches!(err, Error::Validation(_)));
        assert_eq!(workbench.gateway().backend(), crate::backend::Backend::InMemory);
        assert!(workbench.list_projects().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn empty_patch_is_a_validation_failure() {
        let mut workbench = workbench();
        let project = workbench
            .create_project(&NewProject::new("Book store"))
            .await
            .unwrap();

        let err = workbench
            .update_project(&project.slug, &ProjectPatch::new())
            .await
            .unwrap_err();

        match err {
            Error::Validation(errors) => assert_eq!(errors[0].field, "update_mask"),
            other => panic!("unexpected error: {other}"),
        }
    }
}
