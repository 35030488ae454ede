//! Request and response messages, one pair per gateway operation.
//!
//! Optional text travels as an empty string, like proto3 scalars. Enumerated
//! kinds travel as their symbolic names (see [`super::kind`]).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Rpc, ATTRIBUTE_TYPES_SERVICE, PROJECTS_SERVICE};

// ============================================================
// Resources
// ============================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub slug: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub create_time: DateTime<Utc>,
}

/// Values of a project partial update; only masked fields are read.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectUpdate {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Model {
    pub slug: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelAttribute {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub kind: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelAssociation {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub kind: String,
    pub associated_model_slug: String,
    #[serde(default)]
    pub associated_model: Option<Model>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeType {
    pub slug: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeTypeUpdate {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
}

/// Response of every delete call. Absence is reported as `not_found` status.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Empty {}

// ============================================================
// Projects
// ============================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateProjectRequest {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateProjectResponse {
    pub project: Project,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListProjectsRequest {}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListProjectsResponse {
    pub projects: Vec<Project>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListArchivedProjectsRequest {}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListArchivedProjectsResponse {
    pub projects: Vec<Project>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetProjectRequest {
    pub slug: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetProjectResponse {
    pub project: Project,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateProjectRequest {
    pub slug: String,
    pub project: ProjectUpdate,
    pub update_mask: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateProjectResponse {
    pub project: Project,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArchiveProjectRequest {
    pub slug: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArchiveProjectResponse {
    pub project: Project,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestoreProjectRequest {
    pub slug: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestoreProjectResponse {
    pub project: Project,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteProjectRequest {
    pub slug: String,
}

// ============================================================
// Models
// ============================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateModelRequest {
    pub project_slug: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateModelResponse {
    pub model: Model,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListModelsRequest {
    pub project_slug: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListModelsResponse {
    pub models: Vec<Model>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetModelRequest {
    pub project_slug: String,
    pub model_slug: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetModelResponse {
    pub model: Model,
    #[serde(default)]
    pub attributes: Vec<ModelAttribute>,
    #[serde(default)]
    pub associations: Vec<ModelAssociation>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteModelRequest {
    pub project_slug: String,
    pub model_slug: String,
}

// ============================================================
// Model attributes
// ============================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateModelAttributeRequest {
    pub project_slug: String,
    pub model_slug: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub kind: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateModelAttributeResponse {
    pub model_attribute: ModelAttribute,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListModelAttributesRequest {
    pub project_slug: String,
    pub model_slug: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListModelAttributesResponse {
    pub model_attributes: Vec<ModelAttribute>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetModelAttributeRequest {
    pub project_slug: String,
    pub model_slug: String,
    pub model_attribute_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetModelAttributeResponse {
    pub model_attribute: ModelAttribute,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteModelAttributeRequest {
    pub project_slug: String,
    pub model_slug: String,
    pub model_attribute_name: String,
}

// ============================================================
// Model associations
// ============================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateModelAssociationRequest {
    pub project_slug: String,
    pub model_slug: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub kind: String,
    pub associated_model_slug: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateModelAssociationResponse {
    pub model_association: ModelAssociation,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListModelAssociationsRequest {
    pub project_slug: String,
    pub model_slug: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListModelAssociationsResponse {
    pub model_associations: Vec<ModelAssociation>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetModelAssociationRequest {
    pub project_slug: String,
    pub model_slug: String,
    pub model_association_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetModelAssociationResponse {
    pub model_association: ModelAssociation,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteModelAssociationRequest {
    pub project_slug: String,
    pub model_slug: String,
    pub model_association_name: String,
}

// ============================================================
// Class diagrams
// ============================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetProjectClassDiagramRequest {
    pub project_slug: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetModelClassDiagramRequest {
    pub project_slug: String,
    pub model_slug: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassDiagramResponse {
    pub diagram: String,
}

// ============================================================
// Attribute types
// ============================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateAttributeTypeRequest {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListAttributeTypesRequest {}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListAttributeTypesResponse {
    pub attribute_types: Vec<AttributeType>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetAttributeTypeRequest {
    pub slug: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateAttributeTypeRequest {
    pub slug: String,
    pub attribute_type: AttributeTypeUpdate,
    pub update_mask: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteAttributeTypeRequest {
    pub slug: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeTypeResponse {
    pub attribute_type: AttributeType,
}

// ============================================================
// Request/response bindings
// ============================================================

macro_rules! rpc {
    ($service:expr, $($method:literal: $request:ty => $response:ty;)*) => {
        $(
            impl Rpc for $request {
                type Response = $response;

                const SERVICE: &'static str = $service;
                const METHOD: &'static str = $method;
            }
        )*
    };
}

rpc! {
    PROJECTS_SERVICE,
    "CreateProject": CreateProjectRequest => CreateProjectResponse;
    "ListProjects": ListProjectsRequest => ListProjectsResponse;
    "ListArchivedProjects": ListArchivedProjectsRequest => ListArchivedProjectsResponse;
    "GetProject": GetProjectRequest => GetProjectResponse;
    "UpdateProject": UpdateProjectRequest => UpdateProjectResponse;
    "ArchiveProject": ArchiveProjectRequest => ArchiveProjectResponse;
    "RestoreProject": RestoreProjectRequest => RestoreProjectResponse;
    "DeleteProject": DeleteProjectRequest => Empty;
    "CreateModel": CreateModelRequest => CreateModelResponse;
    "ListModels": ListModelsRequest => ListModelsResponse;
    "GetModel": GetModelRequest => GetModelResponse;
    "DeleteModel": DeleteModelRequest => Empty;
    "CreateModelAttribute": CreateModelAttributeRequest => CreateModelAttributeResponse;
    "ListModelAttributes": ListModelAttributesRequest => ListModelAttributesResponse;
    "GetModelAttribute": GetModelAttributeRequest => GetModelAttributeResponse;
    "DeleteModelAttribute": DeleteModelAttributeRequest => Empty;
    "CreateModelAssociation": CreateModelAssociationRequest => CreateModelAssociationResponse;
    "ListModelAssociations": ListModelAssociationsRequest => ListModelAssociationsResponse;
    "GetModelAssociation": GetModelAssociationRequest => GetModelAssociationResponse;
    "DeleteModelAssociation": DeleteModelAssociationRequest => Empty;
    "GetProjectClassDiagram": GetProjectClassDiagramRequest => ClassDiagramResponse;
    "GetModelClassDiagram": GetModelClassDiagramRequest => ClassDiagramResponse;
}

rpc! {
    ATTRIBUTE_TYPES_SERVICE,
    "CreateAttributeType": CreateAttributeTypeRequest => AttributeTypeResponse;
    "ListAttributeTypes": ListAttributeTypesRequest => ListAttributeTypesResponse;
    "GetAttributeType": GetAttributeTypeRequest => AttributeTypeResponse;
    "UpdateAttributeType": UpdateAttributeTypeRequest => AttributeTypeResponse;
    "DeleteAttributeType": DeleteAttributeTypeRequest => Empty;
}
