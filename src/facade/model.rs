use super::{require_slug, Workbench};
use crate::diagram::ClassDiagram;
use crate::facade::validation::Validator;
use crate::models::*;
use crate::Result;

fn require_parents(project_slug: &str, model_slug: &str) -> Result<()> {
    Validator::new()
        .required("project_slug", project_slug)
        .required("model_slug", model_slug)
        .into_result()
}

impl Workbench {
    // ============================================================
    // Models
    // ============================================================

    pub async fn create_model(&mut self, project_slug: &str, model: &NewModel) -> Result<Model> {
        Validator::new()
            .required("project_slug", project_slug)
            .name("name", &model.name)
            .into_result()?;
        self.gateway.create_model(project_slug, model).await
    }

    pub async fn list_models(&self, project_slug: &str) -> Result<Vec<Model>> {
        require_slug("project_slug", project_slug)?;
        self.gateway.list_models(project_slug).await
    }

    /// The model together with its attributes and associations.
    pub async fn get_model(&self, project_slug: &str, model_slug: &str) -> Result<ModelOverview> {
        require_parents(project_slug, model_slug)?;
        self.gateway.get_model(project_slug, model_slug).await
    }

    /// Blank slugs fail validation; a missing model is [`Deletion::Absent`].
    pub async fn delete_model(&mut self, project_slug: &str, model_slug: &str) -> Result<Deletion> {
        require_parents(project_slug, model_slug)?;
        self.gateway.delete_model(project_slug, model_slug).await
    }

    // ============================================================
    // Model attributes
    // ============================================================

    pub async fn create_model_attribute(
        &mut self,
        project_slug: &str,
        model_slug: &str,
        attribute: &NewModelAttribute,
    ) -> Result<ModelAttribute> {
        Validator::new()
            .required("project_slug", project_slug)
            .required("model_slug", model_slug)
            .name("name", &attribute.name)
            .into_result()?;
        self.gateway
            .create_model_attribute(project_slug, model_slug, attribute)
            .await
    }

    pub async fn list_model_attributes(
        &self,
        project_slug: &str,
        model_slug: &str,
    ) -> Result<Vec<ModelAttribute>> {
        require_parents(project_slug, model_slug)?;
        self.gateway
            .list_model_attributes(project_slug, model_slug)
            .await
    }

    pub async fn get_model_attribute(
        &self,
        project_slug: &str,
        model_slug: &str,
        name: &str,
    ) -> Result<ModelAttribute> {
        require_parents(project_slug, model_slug)?;
        require_slug("name", name)?;
        self.gateway
            .get_model_attribute(project_slug, model_slug, name)
            .await
    }

    pub async fn delete_model_attribute(
        &mut self,
        project_slug: &str,
        model_slug: &str,
        name: &str,
    ) -> Result<Deletion> {
        require_parents(project_slug, model_slug)?;
        require_slug("name", name)?;
        self.gateway
            .delete_model_attribute(project_slug, model_slug, name)
            .await
    }

    // ============================================================
    // Model associations
    // ============================================================

    pub async fn create_model_association(
        &mut self,
        project_slug: &str,
        model_slug: &str,
        association: &NewModelAssociation,
    ) -> Result<ModelAssociation> {
        Validator::new()
            .required("project_slug", project_slug)
            .required("model_slug", model_slug)
            .name("name", &association.name)
            .required("associated_model_slug", &association.associated_model_slug)
            .into_result()?;
        self.gateway
            .create_model_association(project_slug, model_slug, association)
            .await
    }

    pub async fn list_model_associations(
        &self,
        project_slug: &str,
        model_slug: &str,
    ) -> Result<Vec<ModelAssociation>> {
        require_parents(project_slug, model_slug)?;
        self.gateway
            .list_model_associations(project_slug, model_slug)
            .await
    }

    pub async fn get_model_association(
        &self,
        project_slug: &str,
        model_slug: &str,
        name: &str,
    ) -> Result<ModelAssociation> {
        require_parents(project_slug, model_slug)?;
        require_slug("name", name)?;
        self.gateway
            .get_model_association(project_slug, model_slug, name)
            .await
    }

    pub async fn delete_model_association(
        &mut self,
        project_slug: &str,
        model_slug: &str,
        name: &str,
    ) -> Result<Deletion> {
        require_parents(project_slug, model_slug)?;
        require_slug("name", name)?;
        self.gateway
            .delete_model_association(project_slug, model_slug, name)
            .await
    }

    // ============================================================
    // Class diagrams
    // ============================================================

    pub async fn project_class_diagram(&self, project_slug: &str) -> Result<ClassDiagram> {
        require_slug("project_slug", project_slug)?;
        self.gateway.get_project_class_diagram(project_slug).await
    }

    pub async fn model_class_diagram(
        &self,
        project_slug: &str,
        model_slug: &str,
    ) -> Result<ClassDiagram> {
        require_parents(project_slug, model_slug)?;
        self.gateway
            .get_model_class_diagram(project_slug, model_slug)
            .await
    }
}
