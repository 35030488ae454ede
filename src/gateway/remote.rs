//! Gateway backed by the remote modeling service.
//!
//! Every operation is one `POST {base}/{service}/{method}` carrying a JSON
//! request message and answered with the matching response message. The
//! HTTP client is built once per gateway and shared by every call made
//! through it, including clones. Failures are returned as they happen: no
//! reconnect and no retry.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};

use super::Gateway;
use crate::backend::Backend;
use crate::config::ServerConfig;
use crate::diagram::ClassDiagram;
use crate::models::*;
use crate::wire::{codec, messages as wire, Rpc, Status, StatusCode as Code};
use crate::{Error, Result};

#[derive(Debug, Clone)]
pub struct RemoteGateway {
    base_url: String,
    client: Client,
}

impl RemoteGateway {
    /// Build the client for `http://{address}:{port}`. No request is sent yet,
    /// but an address that does not form a URL fails here with [`Error::Config`].
    pub fn connect(server: &ServerConfig) -> Result<Self> {
        let base_url = server.base_url()?;
        let client = Client::builder().build()?;
        Ok(Self::with_client(base_url.as_str(), client))
    }

    /// Create with an explicit base URL and client.
    pub fn with_client(base_url: impl Into<String>, client: Client) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn call<R: Rpc>(&self, request: &R) -> Result<R::Response> {
        let url = format!("{}{}", self.base_url, R::path());
        tracing::debug!(service = R::SERVICE, method = R::METHOD, "Calling modeling service");

        let response = self.client.post(&url).json(request).send().await?;
        self.handle_response::<R::Response>(R::METHOD, response).await
    }

    /// Map error statuses to the error taxonomy, decode the body otherwise.
    async fn handle_response<T: serde::de::DeserializeOwned>(
        &self,
        method: &str,
        response: reqwest::Response,
    ) -> Result<T> {
        let status = response.status();
        if status.is_success() {
            let body = response.bytes().await?;
            return serde_json::from_slice(&body)
                .map_err(|e| Error::Protocol(format!("{method}: {e}")));
        }

        let body = response.text().await.unwrap_or_default();
        tracing::warn!(method, %status, "Modeling service returned an error");

        let details = serde_json::from_str::<Status>(&body).ok();
        let message = details
            .as_ref()
            .map(|s| s.message.clone())
            .unwrap_or_else(|| body.clone());

        match status {
            // Only a decoded invalid_argument status carries field errors.
            StatusCode::BAD_REQUEST => match details {
                Some(Status {
                    code: Code::InvalidArgument,
                    details,
                    ..
                }) => Err(Error::Validation(details)),
                _ => Err(Error::Protocol(format!("{}: {}", status, message))),
            },
            StatusCode::NOT_FOUND => Err(Error::NotFound(message)),
            StatusCode::PRECONDITION_FAILED => Err(Error::FailedPrecondition(message)),
            _ => Err(Error::Protocol(format!("{}: {}", status, message))),
        }
    }

    /// Deletes answer `not_found` for missing targets; that is not a failure.
    async fn delete<R: Rpc<Response = wire::Empty>>(&self, request: &R) -> Result<Deletion> {
        match self.call(request).await {
            Ok(_) => Ok(Deletion::Removed),
            Err(Error::NotFound(_)) => Ok(Deletion::Absent),
            Err(e) => Err(e),
        }
    }
}

#[async_trait]
impl Gateway for RemoteGateway {
    fn backend(&self) -> Backend {
        Backend::Remote
    }

    // ============================================================
    // Projects
    // ============================================================

    async fn create_project(&mut self, project: &NewProject) -> Result<Project> {
        let request = wire::CreateProjectRequest::from(project);
        Ok(self.call(&request).await?.project.into())
    }

    async fn list_projects(&self) -> Result<Vec<Project>> {
        let response = self.call(&wire::ListProjectsRequest::default()).await?;
        Ok(response.projects.into_iter().map(Into::into).collect())
    }

    async fn list_archived_projects(&self) -> Result<Vec<Project>> {
        let response = self
            .call(&wire::ListArchivedProjectsRequest::default())
            .await?;
        Ok(response.projects.into_iter().map(Into::into).collect())
    }

    async fn get_project(&self, slug: &str) -> Result<Project> {
        let request = wire::GetProjectRequest {
            slug: slug.to_string(),
        };
        Ok(self.call(&request).await?.project.into())
    }

    async fn update_project(&mut self, slug: &str, patch: &ProjectPatch) -> Result<Project> {
        let request = codec::update_project_request(slug, patch);
        Ok(self.call(&request).await?.project.into())
    }

    async fn archive_project(&mut self, slug: &str) -> Result<Project> {
        let request = wire::ArchiveProjectRequest {
            slug: slug.to_string(),
        };
        Ok(self.call(&request).await?.project.into())
    }

    async fn restore_project(&mut self, slug: &str) -> Result<Project> {
        let request = wire::RestoreProjectRequest {
            slug: slug.to_string(),
        };
        Ok(self.call(&request).await?.project.into())
    }

    async fn delete_project(&mut self, slug: &str) -> Result<Deletion> {
        self.delete(&wire::DeleteProjectRequest {
            slug: slug.to_string(),
        })
        .await
    }

    // ============================================================
    // Models
    // ============================================================

    async fn create_model(&mut self, project_slug: &str, model: &NewModel) -> Result<Model> {
        let request = codec::create_model_request(project_slug, model);
        Ok(self.call(&request).await?.model.into())
    }

    async fn list_models(&self, project_slug: &str) -> Result<Vec<Model>> {
        let request = wire::ListModelsRequest {
            project_slug: project_slug.to_string(),
        };
        let response = self.call(&request).await?;
        Ok(response.models.into_iter().map(Into::into).collect())
    }

    async fn get_model(&self, project_slug: &str, model_slug: &str) -> Result<ModelOverview> {
        let request = wire::GetModelRequest {
            project_slug: project_slug.to_string(),
            model_slug: model_slug.to_string(),
        };
        Ok(self.call(&request).await?.into())
    }

    async fn delete_model(&mut self, project_slug: &str, model_slug: &str) -> Result<Deletion> {
        self.delete(&wire::DeleteModelRequest {
            project_slug: project_slug.to_string(),
            model_slug: model_slug.to_string(),
        })
        .await
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
        Ok(self.call(&request).await?.model_attribute.into())
    }

    async fn list_model_attributes(
        &self,
        project_slug: &str,
        model_slug: &str,
    ) -> Result<Vec<ModelAttribute>> {
        let request = wire::ListModelAttributesRequest {
            project_slug: project_slug.to_string(),
            model_slug: model_slug.to_string(),
        };
        let response = self.call(&request).await?;
        Ok(response.model_attributes.into_iter().map(Into::into).collect())
    }

    async fn get_model_attribute(
        &self,
        project_slug: &str,
        model_slug: &str,
        name: &str,
    ) -> Result<ModelAttribute> {
        let request = wire::GetModelAttributeRequest {
            project_slug: project_slug.to_string(),
            model_slug: model_slug.to_string(),
            model_attribute_name: name.to_string(),
        };
        Ok(self.call(&request).await?.model_attribute.into())
    }

    async fn delete_model_attribute(
        &mut self,
        project_slug: &str,
        model_slug: &str,
        name: &str,
    ) -> Result<Deletion> {
        self.delete(&wire::DeleteModelAttributeRequest {
            project_slug: project_slug.to_string(),
            model_slug: model_slug.to_string(),
            model_attribute_name: name.to_string(),
        })
        .await
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
        Ok(self.call(&request).await?.model_association.into())
    }

    async fn list_model_associations(
        &self,
        project_slug: &str,
        model_slug: &str,
    ) -> Result<Vec<ModelAssociation>> {
        let request = wire::ListModelAssociationsRequest {
            project_slug: project_slug.to_string(),
            model_slug: model_slug.to_string(),
        };
        let response = self.call(&request).await?;
        Ok(response
            .model_associations
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
        let request = wire::GetModelAssociationRequest {
            project_slug: project_slug.to_string(),
            model_slug: model_slug.to_string(),
            model_association_name: name.to_string(),
        };
        Ok(self.call(&request).await?.model_association.into())
    }

    async fn delete_model_association(
        &mut self,
        project_slug: &str,
        model_slug: &str,
        name: &str,
    ) -> Result<Deletion> {
        self.delete(&wire::DeleteModelAssociationRequest {
            project_slug: project_slug.to_string(),
            model_slug: model_slug.to_string(),
            model_association_name: name.to_string(),
        })
        .await
    }

    // ============================================================
    // Class diagrams
    // ============================================================

    async fn get_project_class_diagram(&self, project_slug: &str) -> Result<ClassDiagram> {
        let request = wire::GetProjectClassDiagramRequest {
            project_slug: project_slug.to_string(),
        };
        let response = self.call(&request).await?;
        Ok(ClassDiagram {
            code: response.diagram,
        })
    }

    async fn get_model_class_diagram(
        &self,
        project_slug: &str,
        model_slug: &str,
    ) -> Result<ClassDiagram> {
        let request = wire::GetModelClassDiagramRequest {
            project_slug: project_slug.to_string(),
            model_slug: model_slug.to_string(),
        };
        let response = self.call(&request).await?;
        Ok(ClassDiagram {
            code: response.diagram,
        })
    }

    // ============================================================
    // Attribute types
    // ============================================================

    async fn create_attribute_type(
        &mut self,
        attribute_type: &NewAttributeType,
    ) -> Result<AttributeType> {
        let request = wire::CreateAttributeTypeRequest::from(attribute_type);
        Ok(self.call(&request).await?.attribute_type.into())
    }

    async fn list_attribute_types(&self) -> Result<Vec<AttributeType>> {
        let response = self.call(&wire::ListAttributeTypesRequest::default()).await?;
        Ok(response
            .attribute_types
            .into_iter()
            .map(Into::into)
            .collect())
    }

    async fn get_attribute_type(&self, slug: &str) -> Result<AttributeType> {
        let request = wire::GetAttributeTypeRequest {
            slug: slug.to_string(),
        };
        Ok(self.call(&request).await?.attribute_type.into())
    }

    async fn update_attribute_type(
        &mut self,
        slug: &str,
        patch: &AttributeTypePatch,
    ) -> Result<AttributeType> {
        let request = codec::update_attribute_type_request(slug, patch);
        Ok(self.call(&request).await?.attribute_type.into())
    }

    async fn delete_attribute_type(&mut self, slug: &str) -> Result<Deletion> {
        self.delete(&wire::DeleteAttributeTypeRequest {
            slug: slug.to_string(),
        })
        .await
    }
}
