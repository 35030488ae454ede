//! In-process gateway used by tests and the local relay.
//!
//! Records are kept as wire messages, one ordered `Vec` per resource kind,
//! re-sorted by name after every mutation so listings are reproducible.
//! Slugs are the lowercased name with whitespace runs replaced by `-`;
//! duplicate names get duplicate slugs.

use async_trait::async_trait;
use chrono::Utc;

use super::Gateway;
use crate::backend::Backend;
use crate::diagram::{self, ClassDiagram};
use crate::facade::validation::Validator;
use crate::models::*;
use crate::wire::{codec, messages as wire};
use crate::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Lifecycle {
    Active,
    Archived,
}

#[derive(Debug, Clone)]
struct ProjectRecord {
    project: wire::Project,
    state: Lifecycle,
}

#[derive(Debug, Clone)]
struct ModelRecord {
    project_slug: String,
    model: wire::Model,
}

#[derive(Debug, Clone)]
struct AttributeRecord {
    project_slug: String,
    model_slug: String,
    attribute: wire::ModelAttribute,
}

#[derive(Debug, Clone)]
struct AssociationRecord {
    project_slug: String,
    model_slug: String,
    association: wire::ModelAssociation,
}

#[derive(Debug, Default)]
pub struct InMemoryGateway {
    projects: Vec<ProjectRecord>,
    models: Vec<ModelRecord>,
    attributes: Vec<AttributeRecord>,
    associations: Vec<AssociationRecord>,
    attribute_types: Vec<wire::AttributeType>,
}

/// Lowercase, whitespace runs collapsed to `-`.
pub(crate) fn slugify(name: &str) -> String {
    name.split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
        .to_lowercase()
}

fn deletion(before: usize, after: usize) -> Deletion {
    if after < before {
        Deletion::Removed
    } else {
        Deletion::Absent
    }
}

impl InMemoryGateway {
    pub fn new() -> Self {
        Self::default()
    }

    fn project_record(&self, slug: &str) -> Result<&ProjectRecord> {
        self.projects
            .iter()
            .find(|record| record.project.slug == slug)
            .ok_or_else(|| Error::not_found("Project not found."))
    }

    fn project_record_mut(&mut self, slug: &str) -> Result<&mut ProjectRecord> {
        self.projects
            .iter_mut()
            .find(|record| record.project.slug == slug)
            .ok_or_else(|| Error::not_found("Project not found."))
    }

    fn model_record(&self, project_slug: &str, model_slug: &str) -> Result<&ModelRecord> {
        self.project_record(project_slug)?;
        self.models
            .iter()
            .find(|record| record.project_slug == project_slug && record.model.slug == model_slug)
            .ok_or_else(|| Error::not_found("Model not found."))
    }

    fn attributes_of<'a>(
        &'a self,
        project_slug: &'a str,
        model_slug: &'a str,
    ) -> impl Iterator<Item = &'a wire::ModelAttribute> + 'a {
        self.attributes
            .iter()
            .filter(move |r| r.project_slug == project_slug && r.model_slug == model_slug)
            .map(|r| &r.attribute)
    }

    /// Associations with the referenced model embedded when it exists.
    fn associations_of(&self, project_slug: &str, model_slug: &str) -> Vec<wire::ModelAssociation> {
        self.associations
            .iter()
            .filter(|r| r.project_slug == project_slug && r.model_slug == model_slug)
            .map(|r| wire::ModelAssociation {
                associated_model: self
                    .models
                    .iter()
                    .find(|m| {
                        m.project_slug == project_slug
                            && m.model.slug == r.association.associated_model_slug
                    })
                    .map(|m| m.model.clone()),
                ..r.association.clone()
            })
            .collect()
    }

    fn overview(&self, project_slug: &str, model: &wire::Model) -> ModelOverview {
        wire::GetModelResponse {
            model: model.clone(),
            attributes: self.attributes_of(project_slug, &model.slug).cloned().collect(),
            associations: self.associations_of(project_slug, &model.slug),
        }
        .into()
    }

    fn transition(&mut self, slug: &str, from: Lifecycle, to: Lifecycle) -> Result<Project> {
        let record = self.project_record_mut(slug)?;
        if record.state != from {
            return Err(Error::failed_precondition(match to {
                Lifecycle::Archived => "Project is already archived.",
                Lifecycle::Active => "Project is not archived.",
            }));
        }
        record.state = to;
        Ok(record.project.clone().into())
    }

    fn projects_in(&self, state: Lifecycle) -> Vec<Project> {
        self.projects
            .iter()
            .filter(|record| record.state == state)
            .map(|record| record.project.clone().into())
            .collect()
    }
}

#[async_trait]
impl Gateway for InMemoryGateway {
    fn backend(&self) -> Backend {
        Backend::InMemory
    }

    // ============================================================
    // Projects
    // ============================================================

    async fn create_project(&mut self, project: &NewProject) -> Result<Project> {
        let request = wire::CreateProjectRequest::from(project);
        Validator::new().required("name", &request.name).into_result()?;

        let project = wire::Project {
            slug: slugify(&request.name),
            name: request.name,
            description: request.description,
            create_time: Utc::now(),
        };

        self.projects.push(ProjectRecord {
            project: project.clone(),
            state: Lifecycle::Active,
        });
        self.projects.sort_by(|a, b| a.project.name.cmp(&b.project.name));

        Ok(project.into())
    }

    async fn list_projects(&self) -> Result<Vec<Project>> {
        Ok(self.projects_in(Lifecycle::Active))
    }

    async fn list_archived_projects(&self) -> Result<Vec<Project>> {
        Ok(self.projects_in(Lifecycle::Archived))
    }

    async fn get_project(&self, slug: &str) -> Result<Project> {
        Ok(self.project_record(slug)?.project.clone().into())
    }

    async fn update_project(&mut self, slug: &str, patch: &ProjectPatch) -> Result<Project> {
        let request = codec::update_project_request(slug, patch);
        let patch = codec::project_patch(&request)?;
        if patch.mask().contains(ProjectField::Name) {
            Validator::new()
                .required("name", &request.project.name)
                .into_result()?;
        }

        let record = self.project_record_mut(slug)?;
        let mut project: Project = record.project.clone().into();
        patch.apply(&mut project);
        record.project = wire::Project::from(&project);
        self.projects.sort_by(|a, b| a.project.name.cmp(&b.project.name));

        Ok(project)
    }

    async fn archive_project(&mut self, slug: &str) -> Result<Project> {
        self.transition(slug, Lifecycle::Active, Lifecycle::Archived)
    }

    async fn restore_project(&mut self, slug: &str) -> Result<Project> {
        self.transition(slug, Lifecycle::Archived, Lifecycle::Active)
    }

    async fn delete_project(&mut self, slug: &str) -> Result<Deletion> {
        let before = self.projects.len();
        self.projects.retain(|record| record.project.slug != slug);
        let deletion = deletion(before, self.projects.len());

        if deletion.removed() {
            self.models.retain(|r| r.project_slug != slug);
            self.attributes.retain(|r| r.project_slug != slug);
            self.associations.retain(|r| r.project_slug != slug);
        }

        Ok(deletion)
    }

    // ============================================================
    // Models
    // ============================================================

    async fn create_model(&mut self, project_slug: &str, model: &NewModel) -> Result<Model> {
        let request = codec::create_model_request(project_slug, model);
        Validator::new().required("name", &request.name).into_result()?;
        self.project_record(&request.project_slug)?;

        let model = wire::Model {
            slug: slugify(&request.name),
            name: request.name,
            description: request.description,
        };

        self.models.push(ModelRecord {
            project_slug: request.project_slug,
            model: model.clone(),
        });
        self.models.sort_by(|a, b| a.model.name.cmp(&b.model.name));

        Ok(model.into())
    }

    async fn list_models(&self, project_slug: &str) -> Result<Vec<Model>> {
        self.project_record(project_slug)?;
        Ok(self
            .models
            .iter()
            .filter(|record| record.project_slug == project_slug)
            .map(|record| record.model.clone().into())
            .collect())
    }

    async fn get_model(&self, project_slug: &str, model_slug: &str) -> Result<ModelOverview> {
        let record = self.model_record(project_slug, model_slug)?;
        Ok(self.overview(project_slug, &record.model))
    }

    async fn delete_model(&mut self, project_slug: &str, model_slug: &str) -> Result<Deletion> {
        let before = self.models.len();
        self.models
            .retain(|r| !(r.project_slug == project_slug && r.model.slug == model_slug));
        let deletion = deletion(before, self.models.len());

        if deletion.removed() {
            self.attributes
                .retain(|r| !(r.project_slug == project_slug && r.model_slug == model_slug));
            self.associations
                .retain(|r| !(r.project_slug == project_slug && r.model_slug == model_slug));
        }

        Ok(deletion)
    }

    // ============================================================
    // Model attributes
    // ============================================================

    async fn create_model_attribute(
        &mut self,
        project_slug: &str,
        model_slug: &str,
        attribute: &NewModelAttribute,
    ) -> Result<ModelAttribute> {
        let request = codec::create_model_attribute_request(project_slug, model_slug, attribute);
        Validator::new().required("name", &request.name).into_result()?;
        self.model_record(project_slug, model_slug)?;

        let attribute = wire::ModelAttribute {
            name: request.name,
            description: request.description,
            kind: request.kind,
        };

        self.attributes.push(AttributeRecord {
            project_slug: request.project_slug,
            model_slug: request.model_slug,
            attribute: attribute.clone(),
        });
        self.attributes
            .sort_by(|a, b| a.attribute.name.cmp(&b.attribute.name));

        Ok(attribute.into())
    }

    async fn list_model_attributes(
        &self,
        project_slug: &str,
        model_slug: &str,
    ) -> Result<Vec<ModelAttribute>> {
        self.model_record(project_slug, model_slug)?;
        Ok(self
            .attributes_of(project_slug, model_slug)
            .cloned()
            .map(Into::into)
            .collect())
    }

    async fn get_model_attribute(
        &self,
        project_slug: &str,
        model_slug: &str,
        name: &str,
    ) -> Result<ModelAttribute> {
        self.model_record(project_slug, model_slug)?;
        self.attributes_of(project_slug, model_slug)
            .find(|attribute| attribute.name == name)
            .cloned()
            .map(Into::into)
            .ok_or_else(|| Error::not_found("Model attribute not found."))
    }

    async fn delete_model_attribute(
        &mut self,
        project_slug: &str,
        model_slug: &str,
        name: &str,
    ) -> Result<Deletion> {
        let before = self.attributes.len();
        self.attributes.retain(|r| {
            !(r.project_slug == project_slug
                && r.model_slug == model_slug
                && r.attribute.name == name)
        });
        Ok(deletion(before, self.attributes.len()))
    }

    // ============================================================
    // Model associations
    // ============================================================

    async fn create_model_association(
        &mut self,
        project_slug: &str,
        model_slug: &str,
        association: &NewModelAssociation,
    ) -> Result<ModelAssociation> {
        let request =
            codec::create_model_association_request(project_slug, model_slug, association);
        Validator::new()
            .required("name", &request.name)
            .required("associated_model_slug", &request.associated_model_slug)
            .into_result()?;
        self.model_record(project_slug, model_slug)?;

        self.associations.push(AssociationRecord {
            project_slug: request.project_slug,
            model_slug: request.model_slug,
            association: wire::ModelAssociation {
                name: request.name.clone(),
                description: request.description,
                kind: request.kind,
                associated_model_slug: request.associated_model_slug,
                associated_model: None,
            },
        });
        self.associations
            .sort_by(|a, b| a.association.name.cmp(&b.association.name));

        self.get_model_association(project_slug, model_slug, &request.name)
            .await
    }

    async fn list_model_associations(
        &self,
        project_slug: &str,
        model_slug: &str,
    ) -> Result<Vec<ModelAssociation>> {
        self.model_record(project_slug, model_slug)?;
        Ok(self
            .associations_of(project_slug, model_slug)
            .into_iter()
            .map(Into::into)
            .collect())
    }

    async fn get_model_association(
        &self,
        project_slug: &str,
        model_slug: &str,
        name: &str,
    ) -> Result<ModelAssociation> {
        self.model_record(project_slug, model_slug)?;
        self.associations_of(project_slug, model_slug)
            .into_iter()
            .find(|association| association.name == name)
            .map(Into::into)
            .ok_or_else(|| Error::not_found("Model association not found."))
    }

    async fn delete_model_association(
        &mut self,
        project_slug: &str,
        model_slug: &str,
        name: &str,
    ) -> Result<Deletion> {
        let before = self.associations.len();
        self.associations.retain(|r| {
            !(r.project_slug == project_slug
                && r.model_slug == model_slug
                && r.association.name == name)
        });
        Ok(deletion(before, self.associations.len()))
    }

    // ============================================================
    // Class diagrams
    // ============================================================

    async fn get_project_class_diagram(&self, project_slug: &str) -> Result<ClassDiagram> {
        self.project_record(project_slug)?;
        let overviews: Vec<ModelOverview> = self
            .models
            .iter()
            .filter(|record| record.project_slug == project_slug)
            .map(|record| self.overview(project_slug, &record.model))
            .collect();

        Ok(diagram::project_class_diagram(&overviews))
    }

    async fn get_model_class_diagram(
        &self,
        project_slug: &str,
        model_slug: &str,
    ) -> Result<ClassDiagram> {
        let overview = self.get_model(project_slug, model_slug).await?;
        Ok(diagram::model_class_diagram(&overview))
    }

    // ============================================================
    // Attribute types
    // ============================================================

    async fn create_attribute_type(
        &mut self,
        attribute_type: &NewAttributeType,
    ) -> Result<AttributeType> {
        let request = wire::CreateAttributeTypeRequest::from(attribute_type);
        Validator::new().required("name", &request.name).into_result()?;

        let attribute_type = wire::AttributeType {
            slug: slugify(&request.name),
            name: request.name,
            description: request.description,
        };

        self.attribute_types.push(attribute_type.clone());
        self.attribute_types.sort_by(|a, b| a.name.cmp(&b.name));

        Ok(attribute_type.into())
    }

    async fn list_attribute_types(&self) -> Result<Vec<AttributeType>> {
        Ok(self
            .attribute_types
            .iter()
            .cloned()
            .map(Into::into)
            .collect())
    }

    async fn get_attribute_type(&self, slug: &str) -> Result<AttributeType> {
        self.attribute_types
            .iter()
            .find(|attribute_type| attribute_type.slug == slug)
            .cloned()
            .map(Into::into)
            .ok_or_else(|| Error::not_found("Attribute type not found."))
    }

    async fn update_attribute_type(
        &mut self,
        slug: &str,
        patch: &AttributeTypePatch,
    ) -> Result<AttributeType> {
        let request = codec::update_attribute_type_request(slug, patch);
        let patch = codec::attribute_type_patch(&request)?;
        if patch.mask().contains(AttributeTypeField::Name) {
            Validator::new()
                .required("name", &request.attribute_type.name)
                .into_result()?;
        }

        let stored = self
            .attribute_types
            .iter_mut()
            .find(|attribute_type| attribute_type.slug == slug)
            .ok_or_else(|| Error::not_found("Attribute type not found."))?;
        let mut attribute_type: AttributeType = stored.clone().into();
        patch.apply(&mut attribute_type);
        *stored = wire::AttributeType::from(&attribute_type);
        self.attribute_types.sort_by(|a, b| a.name.cmp(&b.name));

        Ok(attribute_type)
    }

    async fn delete_attribute_type(&mut self, slug: &str) -> Result<Deletion> {
        let before = self.attribute_types.len();
        self.attribute_types
            .retain(|attribute_type| attribute_type.slug != slug);
        Ok(deletion(before, self.attribute_types.len()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_is_lowercase_and_hyphenated() {
        assert_eq!(slugify("Book store"), "book-store");
        assert_eq!(slugify("  Author  "), "author");
        assert_eq!(slugify("BOOK"), "book");
    }

    #[tokio::test]
    async fn duplicate_names_share_a_slug() {
        let mut gateway = InMemoryGateway::new();
        let first = gateway.create_project(&NewProject::new("Shop")).await.unwrap();
        let second = gateway.create_project(&NewProject::new("Shop")).await.unwrap();

        assert_eq!(first.slug, second.slug);
        assert_eq!(gateway.list_projects().await.unwrap().len(), 2);
    }
}
