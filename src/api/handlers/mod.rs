use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use super::SharedGateway;
use crate::models::*;
use crate::wire::{codec, messages as wire, Status, StatusCode as Code};
use crate::Error;

// ============================================================
// Error Handling
// ============================================================

/// Gateway error rendered as a wire [`Status`].
pub struct ApiError(Error);

impl From<Error> for ApiError {
    fn from(error: Error) -> Self {
        Self(error)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message, details) = match self.0 {
            Error::Validation(errors) => {
                let message = Error::Validation(errors.clone()).to_string();
                tracing::warn!("Validation error: {}", message);
                (StatusCode::BAD_REQUEST, Code::InvalidArgument, message, errors)
            }
            Error::NotFound(message) => (StatusCode::NOT_FOUND, Code::NotFound, message, vec![]),
            Error::FailedPrecondition(message) => (
                StatusCode::PRECONDITION_FAILED,
                Code::FailedPrecondition,
                message,
                vec![],
            ),
            other => {
                // Internal details stay in the log.
                tracing::error!("Internal error: {}", other);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Code::Internal,
                    "Internal server error".to_string(),
                    vec![],
                )
            }
        };

        (
            status,
            Json(Status {
                code,
                message,
                details,
            }),
        )
            .into_response()
    }
}

type ApiResult<T> = Result<Json<T>, ApiError>;

fn deleted(deletion: Deletion, what: &str) -> ApiResult<wire::Empty> {
    match deletion {
        Deletion::Removed => Ok(Json(wire::Empty {})),
        Deletion::Absent => Err(Error::not_found(format!("{} not found.", what)).into()),
    }
}

// ============================================================
// Health
// ============================================================

pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

// ============================================================
// Projects
// ============================================================

pub async fn create_project(
    State(gateway): State<SharedGateway>,
    Json(request): Json<wire::CreateProjectRequest>,
) -> ApiResult<wire::CreateProjectResponse> {
    let project = gateway.lock().await.create_project(&request.into()).await?;
    Ok(Json(wire::CreateProjectResponse {
        project: (&project).into(),
    }))
}

pub async fn list_projects(
    State(gateway): State<SharedGateway>,
    Json(_): Json<wire::ListProjectsRequest>,
) -> ApiResult<wire::ListProjectsResponse> {
    let projects = gateway.lock().await.list_projects().await?;
    Ok(Json(wire::ListProjectsResponse {
        projects: projects.iter().map(Into::into).collect(),
    }))
}

pub async fn list_archived_projects(
    State(gateway): State<SharedGateway>,
    Json(_): Json<wire::ListArchivedProjectsRequest>,
) -> ApiResult<wire::ListArchivedProjectsResponse> {
    let projects = gateway.lock().await.list_archived_projects().await?;
    Ok(Json(wire::ListArchivedProjectsResponse {
        projects: projects.iter().map(Into::into).collect(),
    }))
}

pub async fn get_project(
    State(gateway): State<SharedGateway>,
    Json(request): Json<wire::GetProjectRequest>,
) -> ApiResult<wire::GetProjectResponse> {
    let project = gateway.lock().await.get_project(&request.slug).await?;
    Ok(Json(wire::GetProjectResponse {
        project: (&project).into(),
    }))
}

pub async fn update_project(
    State(gateway): State<SharedGateway>,
    Json(request): Json<wire::UpdateProjectRequest>,
) -> ApiResult<wire::UpdateProjectResponse> {
    let patch = codec::project_patch(&request)?;
    let project = gateway
        .lock()
        .await
        .update_project(&request.slug, &patch)
        .await?;
    Ok(Json(wire::UpdateProjectResponse {
        project: (&project).into(),
    }))
}

pub async fn archive_project(
    State(gateway): State<SharedGateway>,
    Json(request): Json<wire::ArchiveProjectRequest>,
) -> ApiResult<wire::ArchiveProjectResponse> {
    let project = gateway.lock().await.archive_project(&request.slug).await?;
    Ok(Json(wire::ArchiveProjectResponse {
        project: (&project).into(),
    }))
}

pub async fn restore_project(
    State(gateway): State<SharedGateway>,
    Json(request): Json<wire::RestoreProjectRequest>,
) -> ApiResult<wire::RestoreProjectResponse> {
    let project = gateway.lock().await.restore_project(&request.slug).await?;
    Ok(Json(wire::RestoreProjectResponse {
        project: (&project).into(),
    }))
}

pub async fn delete_project(
    State(gateway): State<SharedGateway>,
    Json(request): Json<wire::DeleteProjectRequest>,
) -> ApiResult<wire::Empty> {
    let deletion = gateway.lock().await.delete_project(&request.slug).await?;
    deleted(deletion, "Project")
}

// ============================================================
// Models
// ============================================================

pub async fn create_model(
    State(gateway): State<SharedGateway>,
    Json(request): Json<wire::CreateModelRequest>,
) -> ApiResult<wire::CreateModelResponse> {
    let model = gateway
        .lock()
        .await
        .create_model(&request.project_slug, &NewModel::from(&request))
        .await?;
    Ok(Json(wire::CreateModelResponse {
        model: (&model).into(),
    }))
}

pub async fn list_models(
    State(gateway): State<SharedGateway>,
    Json(request): Json<wire::ListModelsRequest>,
) -> ApiResult<wire::ListModelsResponse> {
    let models = gateway.lock().await.list_models(&request.project_slug).await?;
    Ok(Json(wire::ListModelsResponse {
        models: models.iter().map(Into::into).collect(),
    }))
}

pub async fn get_model(
    State(gateway): State<SharedGateway>,
    Json(request): Json<wire::GetModelRequest>,
) -> ApiResult<wire::GetModelResponse> {
    let overview = gateway
        .lock()
        .await
        .get_model(&request.project_slug, &request.model_slug)
        .await?;
    Ok(Json((&overview).into()))
}

pub async fn delete_model(
    State(gateway): State<SharedGateway>,
    Json(request): Json<wire::DeleteModelRequest>,
) -> ApiResult<wire::Empty> {
    let deletion = gateway
        .lock()
        .await
        .delete_model(&request.project_slug, &request.model_slug)
        .await?;
    deleted(deletion, "Model")
}

// ============================================================
// Model attributes
// ============================================================

pub async fn create_model_attribute(
    State(gateway): State<SharedGateway>,
    Json(request): Json<wire::CreateModelAttributeRequest>,
) -> ApiResult<wire::CreateModelAttributeResponse> {
    let attribute = gateway
        .lock()
        .await
        .create_model_attribute(
            &request.project_slug,
            &request.model_slug,
            &NewModelAttribute::from(&request),
        )
        .await?;
    Ok(Json(wire::CreateModelAttributeResponse {
        model_attribute: (&attribute).into(),
    }))
}

pub async fn list_model_attributes(
    State(gateway): State<SharedGateway>,
    Json(request): Json<wire::ListModelAttributesRequest>,
) -> ApiResult<wire::ListModelAttributesResponse> {
    let attributes = gateway
        .lock()
        .await
        .list_model_attributes(&request.project_slug, &request.model_slug)
        .await?;
    Ok(Json(wire::ListModelAttributesResponse {
        model_attributes: attributes.iter().map(Into::into).collect(),
    }))
}

pub async fn get_model_attribute(
    State(gateway): State<SharedGateway>,
    Json(request): Json<wire::GetModelAttributeRequest>,
) -> ApiResult<wire::GetModelAttributeResponse> {
    let attribute = gateway
        .lock()
        .await
        .get_model_attribute(
            &request.project_slug,
            &request.model_slug,
            &request.model_attribute_name,
        )
        .await?;
    Ok(Json(wire::GetModelAttributeResponse {
        model_attribute: (&attribute).into(),
    }))
}

pub async fn delete_model_attribute(
    State(gateway): State<SharedGateway>,
    Json(request): Json<wire::DeleteModelAttributeRequest>,
) -> ApiResult<wire::Empty> {
    let deletion = gateway
        .lock()
        .await
        .delete_model_attribute(
            &request.project_slug,
            &request.model_slug,
            &request.model_attribute_name,
        )
        .await?;
    deleted(deletion, "Model attribute")
}

// ============================================================
// Model associations
// ============================================================

pub async fn create_model_association(
    State(gateway): State<SharedGateway>,
    Json(request): Json<wire::CreateModelAssociationRequest>,
) -> ApiResult<wire::CreateModelAssociationResponse> {
    let association = gateway
        .lock()
        .await
        .create_model_association(
            &request.project_slug,
            &request.model_slug,
            &NewModelAssociation::from(&request),
        )
        .await?;
    Ok(Json(wire::CreateModelAssociationResponse {
        model_association: (&association).into(),
    }))
}

pub async fn list_model_associations(
    State(gateway): State<SharedGateway>,
    Json(request): Json<wire::ListModelAssociationsRequest>,
) -> ApiResult<wire::ListModelAssociationsResponse> {
    let associations = gateway
        .lock()
        .await
        .list_model_associations(&request.project_slug, &request.model_slug)
        .await?;
    Ok(Json(wire::ListModelAssociationsResponse {
        model_associations: associations.iter().map(Into::into).collect(),
    }))
}

pub async fn get_model_association(
    State(gateway): State<SharedGateway>,
    Json(request): Json<wire::GetModelAssociationRequest>,
) -> ApiResult<wire::GetModelAssociationResponse> {
    let association = gateway
        .lock()
        .await
        .get_model_association(
            &request.project_slug,
            &request.model_slug,
            &request.model_association_name,
        )
        .await?;
    Ok(Json(wire::GetModelAssociationResponse {
        model_association: (&association).into(),
    }))
}

pub async fn delete_model_association(
    State(gateway): State<SharedGateway>,
    Json(request): Json<wire::DeleteModelAssociationRequest>,
) -> ApiResult<wire::Empty> {
    let deletion = gateway
        .lock()
        .await
        .delete_model_association(
            &request.project_slug,
            &request.model_slug,
            &request.model_association_name,
        )
        .await?;
    deleted(deletion, "Model association")
}

// ============================================================
// Class diagrams
// ============================================================

pub async fn get_project_class_diagram(
    State(gateway): State<SharedGateway>,
    Json(request): Json<wire::GetProjectClassDiagramRequest>,
) -> ApiResult<wire::ClassDiagramResponse> {
    let diagram = gateway
        .lock()
        .await
        .get_project_class_diagram(&request.project_slug)
        .await?;
    Ok(Json(wire::ClassDiagramResponse {
        diagram: diagram.code,
    }))
}

pub async fn get_model_class_diagram(
    State(gateway): State<SharedGateway>,
    Json(request): Json<wire::GetModelClassDiagramRequest>,
) -> ApiResult<wire::ClassDiagramResponse> {
    let diagram = gateway
        .lock()
        .await
        .get_model_class_diagram(&request.project_slug, &request.model_slug)
        .await?;
    Ok(Json(wire::ClassDiagramResponse {
        diagram: diagram.code,
    }))
}

// ============================================================
// Attribute types
// ============================================================

pub async fn create_attribute_type(
    State(gateway): State<SharedGateway>,
    Json(request): Json<wire::CreateAttributeTypeRequest>,
) -> ApiResult<wire::AttributeTypeResponse> {
    let attribute_type = gateway
        .lock()
        .await
        .create_attribute_type(&request.into())
        .await?;
    Ok(Json(wire::AttributeTypeResponse {
        attribute_type: (&attribute_type).into(),
    }))
}

pub async fn list_attribute_types(
    State(gateway): State<SharedGateway>,
    Json(_): Json<wire::ListAttributeTypesRequest>,
) -> ApiResult<wire::ListAttributeTypesResponse> {
    let attribute_types = gateway.lock().await.list_attribute_types().await?;
    Ok(Json(wire::ListAttributeTypesResponse {
        attribute_types: attribute_types.iter().map(Into::into).collect(),
    }))
}

pub async fn get_attribute_type(
    State(gateway): State<SharedGateway>,
    Json(request): Json<wire::GetAttributeTypeRequest>,
) -> ApiResult<wire::AttributeTypeResponse> {
    let attribute_type = gateway.lock().await.get_attribute_type(&request.slug).await?;
    Ok(Json(wire::AttributeTypeResponse {
        attribute_type: (&attribute_type).into(),
    }))
}

pub async fn update_attribute_type(
    State(gateway): State<SharedGateway>,
    Json(request): Json<wire::UpdateAttributeTypeRequest>,
) -> ApiResult<wire::AttributeTypeResponse> {
    let patch = codec::attribute_type_patch(&request)?;
    let attribute_type = gateway
        .lock()
        .await
        .update_attribute_type(&request.slug, &patch)
        .await?;
    Ok(Json(wire::AttributeTypeResponse {
        attribute_type: (&attribute_type).into(),
    }))
}

pub async fn delete_attribute_type(
    State(gateway): State<SharedGateway>,
    Json(request): Json<wire::DeleteAttributeTypeRequest>,
) -> ApiResult<wire::Empty> {
    let deletion = gateway
        .lock()
        .await
        .delete_attribute_type(&request.slug)
        .await?;
    deleted(deletion, "Attribute type")
}
