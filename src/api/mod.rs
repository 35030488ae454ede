//! HTTP relay serving a [`Gateway`] over the wire contract.
//!
//! Routes mirror [`crate::wire::Rpc::path`], so a [`crate::gateway::RemoteGateway`]
//! pointed at this router behaves like one pointed at the real service. The
//! gateway sits behind a mutex because gateways do not lock internally.

mod handlers;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tokio::sync::Mutex;
use tower_http::trace::TraceLayer;

use crate::gateway::Gateway;
use crate::wire::{messages as wire, Rpc};

pub type SharedGateway = Arc<Mutex<Box<dyn Gateway>>>;

pub fn shared(gateway: Box<dyn Gateway>) -> SharedGateway {
    Arc::new(Mutex::new(gateway))
}

fn path<R: Rpc>() -> String {
    R::path()
}

pub fn create_router(gateway: SharedGateway) -> Router {
    Router::new()
        // Projects
        .route(&path::<wire::CreateProjectRequest>(), post(handlers::create_project))
        .route(&path::<wire::ListProjectsRequest>(), post(handlers::list_projects))
        .route(
            &path::<wire::ListArchivedProjectsRequest>(),
            post(handlers::list_archived_projects),
        )
        .route(&path::<wire::GetProjectRequest>(), post(handlers::get_project))
        .route(&path::<wire::UpdateProjectRequest>(), post(handlers::update_project))
        .route(&path::<wire::ArchiveProjectRequest>(), post(handlers::archive_project))
        .route(&path::<wire::RestoreProjectRequest>(), post(handlers::restore_project))
        .route(&path::<wire::DeleteProjectRequest>(), post(handlers::delete_project))
        // Models
        .route(&path::<wire::CreateModelRequest>(), post(handlers::create_model))
        .route(&path::<wire::ListModelsRequest>(), post(handlers::list_models))
        .route(&path::<wire::GetModelRequest>(), post(handlers::get_model))
        .route(&path::<wire::DeleteModelRequest>(), post(handlers::delete_model))
        // Model attributes
        .route(
            &path::<wire::CreateModelAttributeRequest>(),
            post(handlers::create_model_attribute),
        )
        .route(
            &path::<wire::ListModelAttributesRequest>(),
            post(handlers::list_model_attributes),
        )
        .route(
            &path::<wire::GetModelAttributeRequest>(),
            post(handlers::get_model_attribute),
        )
        .route(
            &path::<wire::DeleteModelAttributeRequest>(),
            post(handlers::delete_model_attribute),
        )
        // Model associations
        .route(
            &path::<wire::CreateModelAssociationRequest>(),
            post(handlers::create_model_association),
        )
        .route(
            &path::<wire::ListModelAssociationsRequest>(),
            post(handlers::list_model_associations),
        )
        .route(
            &path::<wire::GetModelAssociationRequest>(),
            post(handlers::get_model_association),
        )
        .route(
            &path::<wire::DeleteModelAssociationRequest>(),
            post(handlers::delete_model_association),
        )
        // Class diagrams
        .route(
            &path::<wire::GetProjectClassDiagramRequest>(),
            post(handlers::get_project_class_diagram),
        )
        .route(
            &path::<wire::GetModelClassDiagramRequest>(),
            post(handlers::get_model_class_diagram),
        )
        // Attribute types
        .route(
            &path::<wire::CreateAttributeTypeRequest>(),
            post(handlers::create_attribute_type),
        )
        .route(
            &path::<wire::ListAttributeTypesRequest>(),
            post(handlers::list_attribute_types),
        )
        .route(&path::<wire::GetAttributeTypeRequest>(), post(handlers::get_attribute_type))
        .route(
            &path::<wire::UpdateAttributeTypeRequest>(),
            post(handlers::update_attribute_type),
        )
        .route(
            &path::<wire::DeleteAttributeTypeRequest>(),
            post(handlers::delete_attribute_type),
        )
        // Health
        .route("/health", get(handlers::health))
        .layer(TraceLayer::new_for_http())
        .with_state(gateway)
}
