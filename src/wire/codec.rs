//! Pure conversions between domain values and wire messages.
//!
//! Both gateways go through these functions; so does the relay on the
//! service side. Decoding is total: empty strings become `None` and unknown
//! kinds resolve through [`super::kind`].

use crate::facade::validation::FieldError;
use crate::models::{self, FieldMask, MaskField};
use crate::wire::kind::{ASSOCIATION_KINDS, ATTRIBUTE_KINDS};
use crate::wire::messages as wire;
use crate::{Error, Result};

fn optional(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_owned())
}

fn text(value: Option<&str>) -> String {
    value.unwrap_or_default().to_owned()
}

fn mask_from_paths<F: MaskField>(paths: &[String]) -> Result<FieldMask<F>> {
    FieldMask::from_paths(paths)
        .map_err(|path| Error::Validation(vec![FieldError::unknown_field(&path)]))
}

// ============================================================
// Projects
// ============================================================

impl From<wire::Project> for models::Project {
    fn from(project: wire::Project) -> Self {
        Self {
            slug: project.slug,
            name: project.name,
            description: optional(&project.description),
            create_time: project.create_time,
        }
    }
}

impl From<&models::Project> for wire::Project {
    fn from(project: &models::Project) -> Self {
        Self {
            slug: project.slug.clone(),
            name: project.name.clone(),
            description: text(project.description.as_deref()),
            create_time: project.create_time,
        }
    }
}

impl From<&models::NewProject> for wire::CreateProjectRequest {
    fn from(project: &models::NewProject) -> Self {
        Self {
            name: project.name.clone(),
            description: text(project.description.as_deref()),
        }
    }
}

impl From<wire::CreateProjectRequest> for models::NewProject {
    fn from(request: wire::CreateProjectRequest) -> Self {
        Self {
            name: request.name,
            description: optional(&request.description),
        }
    }
}

/// Encode a patch; the mask lists only patched fields, in declaration order.
pub fn update_project_request(
    slug: &str,
    patch: &models::ProjectPatch,
) -> wire::UpdateProjectRequest {
    wire::UpdateProjectRequest {
        slug: slug.to_string(),
        project: wire::ProjectUpdate {
            name: text(patch.name()),
            description: text(patch.description()),
        },
        update_mask: patch.mask().paths(),
    }
}

pub fn project_patch(request: &wire::UpdateProjectRequest) -> Result<models::ProjectPatch> {
    let mask = mask_from_paths::<models::ProjectField>(&request.update_mask)?;
    let mut patch = models::ProjectPatch::new();
    for field in mask.iter() {
        patch = match field {
            models::ProjectField::Name => patch.rename(request.project.name.clone()),
            models::ProjectField::Description => {
                patch.describe(optional(&request.project.description))
            }
        };
    }
    Ok(patch)
}

// ============================================================
// Models
// ============================================================

impl From<wire::Model> for models::Model {
    fn from(model: wire::Model) -> Self {
        Self {
            slug: model.slug,
            name: model.name,
            description: optional(&model.description),
        }
    }
}

impl From<&models::Model> for wire::Model {
    fn from(model: &models::Model) -> Self {
        Self {
            slug: model.slug.clone(),
            name: model.name.clone(),
            description: text(model.description.as_deref()),
        }
    }
}

pub fn create_model_request(
    project_slug: &str,
    model: &models::NewModel,
) -> wire::CreateModelRequest {
    wire::CreateModelRequest {
        project_slug: project_slug.to_string(),
        name: model.name.clone(),
        description: text(model.description.as_deref()),
    }
}

impl From<&wire::CreateModelRequest> for models::NewModel {
    fn from(request: &wire::CreateModelRequest) -> Self {
        Self {
            name: request.name.clone(),
            description: optional(&request.description),
        }
    }
}

impl From<wire::GetModelResponse> for models::ModelOverview {
    fn from(response: wire::GetModelResponse) -> Self {
        Self {
            model: response.model.into(),
            attributes: response.attributes.into_iter().map(Into::into).collect(),
            associations: response.associations.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<&models::ModelOverview> for wire::GetModelResponse {
    fn from(overview: &models::ModelOverview) -> Self {
        Self {
            model: (&overview.model).into(),
            attributes: overview.attributes.iter().map(Into::into).collect(),
            associations: overview.associations.iter().map(Into::into).collect(),
        }
    }
}

// ============================================================
// Model attributes
// ============================================================

impl From<wire::ModelAttribute> for models::ModelAttribute {
    fn from(attribute: wire::ModelAttribute) -> Self {
        Self {
            name: attribute.name,
            description: optional(&attribute.description),
            kind: ATTRIBUTE_KINDS.from_wire(&attribute.kind),
        }
    }
}

impl From<&models::ModelAttribute> for wire::ModelAttribute {
    fn from(attribute: &models::ModelAttribute) -> Self {
        Self {
            name: attribute.name.clone(),
            description: text(attribute.description.as_deref()),
            kind: ATTRIBUTE_KINDS.to_wire(attribute.kind).to_string(),
        }
    }
}

pub fn create_model_attribute_request(
    project_slug: &str,
    model_slug: &str,
    attribute: &models::NewModelAttribute,
) -> wire::CreateModelAttributeRequest {
    wire::CreateModelAttributeRequest {
        project_slug: project_slug.to_string(),
        model_slug: model_slug.to_string(),
        name: attribute.name.clone(),
        description: text(attribute.description.as_deref()),
        kind: ATTRIBUTE_KINDS.to_wire(attribute.kind).to_string(),
    }
}

impl From<&wire::CreateModelAttributeRequest> for models::NewModelAttribute {
    fn from(request: &wire::CreateModelAttributeRequest) -> Self {
        Self {
            name: request.name.clone(),
            description: optional(&request.description),
            kind: ATTRIBUTE_KINDS.from_wire(&request.kind),
        }
    }
}

// ============================================================
// Model associations
// ============================================================

impl From<wire::ModelAssociation> for models::ModelAssociation {
    fn from(association: wire::ModelAssociation) -> Self {
        Self {
            name: association.name,
            description: optional(&association.description),
            kind: ASSOCIATION_KINDS.from_wire(&association.kind),
            associated_model_slug: association.associated_model_slug,
            associated_model: association.associated_model.map(Into::into),
        }
    }
}

impl From<&models::ModelAssociation> for wire::ModelAssociation {
    fn from(association: &models::ModelAssociation) -> Self {
        Self {
            name: association.name.clone(),
            description: text(association.description.as_deref()),
            kind: ASSOCIATION_KINDS.to_wire(association.kind).to_string(),
            associated_model_slug: association.associated_model_slug.clone(),
            associated_model: association.associated_model.as_ref().map(Into::into),
        }
    }
}

pub fn create_model_association_request(
    project_slug: &str,
    model_slug: &str,
    association: &models::NewModelAssociation,
) -> wire::CreateModelAssociationRequest {
    wire::CreateModelAssociationRequest {
        project_slug: project_slug.to_string(),
        model_slug: model_slug.to_string(),
        name: association.name.clone(),
        description: text(association.description.as_deref()),
        kind: ASSOCIATION_KINDS.to_wire(association.kind).to_string(),
        associated_model_slug: association.associated_model_slug.clone(),
    }
}

impl From<&wire::CreateModelAssociationRequest> for models::NewModelAssociation {
    fn from(request: &wire::CreateModelAssociationRequest) -> Self {
        Self {
            name: request.name.clone(),
            description: optional(&request.description),
            kind: ASSOCIATION_KINDS.from_wire(&request.kind),
            associated_model_slug: request.associated_model_slug.clone(),
        }
    }
}

// ============================================================
// Attribute types
// ============================================================

impl From<wire::AttributeType> for models::AttributeType {
    fn from(attribute_type: wire::AttributeType) -> Self {
        Self {
            slug: attribute_type.slug,
            name: attribute_type.name,
            description: optional(&attribute_type.description),
        }
    }
}

impl From<&models::AttributeType> for wire::AttributeType {
    fn from(attribute_type: &models::AttributeType) -> Self {
        Self {
            slug: attribute_type.slug.clone(),
            name: attribute_type.name.clone(),
            description: text(attribute_type.description.as_deref()),
        }
    }
}

impl From<&models::NewAttributeType> for wire::CreateAttributeTypeRequest {
    fn from(attribute_type: &models::NewAttributeType) -> Self {
        Self {
            name: attribute_type.name.clone(),
            description: text(attribute_type.description.as_deref()),
        }
    }
}

impl From<wire::CreateAttributeTypeRequest> for models::NewAttributeType {
    fn from(request: wire::CreateAttributeTypeRequest) -> Self {
        Self {
            name: request.name,
            description: optional(&request.description),
        }
    }
}

pub fn update_attribute_type_request(
    slug: &str,
    patch: &models::AttributeTypePatch,
) -> wire::UpdateAttributeTypeRequest {
    wire::UpdateAttributeTypeRequest {
        slug: slug.to_string(),
        attribute_type: wire::AttributeTypeUpdate {
            name: text(patch.name()),
            description: text(patch.description()),
        },
        update_mask: patch.mask().paths(),
    }
}

pub fn attribute_type_patch(
    request: &wire::UpdateAttributeTypeRequest,
) -> Result<models::AttributeTypePatch> {
    let mask = mask_from_paths::<models::AttributeTypeField>(&request.update_mask)?;
    let mut patch = models::AttributeTypePatch::new();
    for field in mask.iter() {
        patch = match field {
            models::AttributeTypeField::Name => patch.rename(request.attribute_type.name.clone()),
            models::AttributeTypeField::Description => {
                patch.describe(optional(&request.attribute_type.description))
            }
        };
    }
    Ok(patch)
}
