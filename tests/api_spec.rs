use axum::http::StatusCode;
use axum_test::TestServer;
use atelier::api::{create_router, shared};
use atelier::gateway::InMemoryGateway;
use atelier::wire::{messages as wire, Rpc, Status, StatusCode as Code};

fn setup() -> TestServer {
    let app = create_router(shared(Box::new(InMemoryGateway::new())));
    TestServer::new(app).expect("Failed to create test server")
}

async fn create_test_project(server: &TestServer) -> wire::Project {
    server
        .post(&wire::CreateProjectRequest::path())
        .json(&wire::CreateProjectRequest {
            name: "Book store".to_string(),
            description: "Sells books".to_string(),
        })
        .await
        .json::<wire::CreateProjectResponse>()
        .project
}

mod routes {
    use super::*;

    #[test]
    fn follow_service_and_method_names() {
        assert_eq!(
            wire::GetProjectRequest::path(),
            "/atelier.v1.Projects/GetProject"
        );
        assert_eq!(
            wire::UpdateAttributeTypeRequest::path(),
            "/atelier.v1.AttributeTypes/UpdateAttributeType"
        );
    }

    #[tokio::test]
    async fn health_reports_ok() {
        let server = setup();

        let response = server.get("/health").await;

        response.assert_status_ok();
        let body: serde_json::Value = response.json();
        assert_eq!(body["status"], "ok");
    }
}

mod projects {
    use super::*;

    #[tokio::test]
    async fn creates_and_fetches_a_project() {
        let server = setup();
        let project = create_test_project(&server).await;

        let response = server
            .post(&wire::GetProjectRequest::path())
            .json(&wire::GetProjectRequest {
                slug: project.slug.clone(),
            })
            .await;

        response.assert_status_ok();
        let found = response.json::<wire::GetProjectResponse>().project;
        assert_eq!(found.slug, "book-store");
        assert_eq!(found.description, "Sells books");
    }

    #[tokio::test]
    async fn updates_only_masked_fields() {
        let server = setup();
        let project = create_test_project(&server).await;

        let response = server
            .post(&wire::UpdateProjectRequest::path())
            .json(&wire::UpdateProjectRequest {
                slug: project.slug.clone(),
                project: wire::ProjectUpdate {
                    name: "Bookshop".to_string(),
                    description: String::new(),
                },
                update_mask: vec!["name".to_string()],
            })
            .await;

        response.assert_status_ok();
        let updated = response.json::<wire::UpdateProjectResponse>().project;
        assert_eq!(updated.name, "Bookshop");
        assert_eq!(updated.description, "Sells books");
    }

    #[tokio::test]
    async fn rejects_unknown_mask_paths() {
        let server = setup();
        let project = create_test_project(&server).await;

        let response = server
            .post(&wire::UpdateProjectRequest::path())
            .json(&wire::UpdateProjectRequest {
                slug: project.slug.clone(),
                project: wire::ProjectUpdate::default(),
                update_mask: vec!["slug".to_string()],
            })
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let status = response.json::<Status>();
        assert_eq!(status.code, Code::InvalidArgument);
        assert_eq!(status.details[0].field, "slug");
    }

    #[tokio::test]
    async fn reports_missing_projects() {
        let server = setup();

        let response = server
            .post(&wire::GetProjectRequest::path())
            .json(&wire::GetProjectRequest {
                slug: "missing".to_string(),
            })
            .await;

        response.assert_status(StatusCode::NOT_FOUND);
        let status = response.json::<Status>();
        assert_eq!(status.code, Code::NotFound);
        assert_eq!(status.message, "Project not found.");
    }

    #[tokio::test]
    async fn rejects_invalid_transitions() {
        let server = setup();
        let project = create_test_project(&server).await;

        let response = server
            .post(&wire::RestoreProjectRequest::path())
            .json(&wire::RestoreProjectRequest {
                slug: project.slug.clone(),
            })
            .await;

        response.assert_status(StatusCode::PRECONDITION_FAILED);
        assert_eq!(
            response.json::<Status>().code,
            Code::FailedPrecondition
        );
    }

    #[tokio::test]
    async fn answers_deletes_of_missing_projects_with_not_found() {
        let server = setup();

        let response = server
            .post(&wire::DeleteProjectRequest::path())
            .json(&wire::DeleteProjectRequest {
                slug: "missing".to_string(),
            })
            .await;

        response.assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn deletes_existing_projects() {
        let server = setup();
        let project = create_test_project(&server).await;

        let response = server
            .post(&wire::DeleteProjectRequest::path())
            .json(&wire::DeleteProjectRequest {
                slug: project.slug.clone(),
            })
            .await;

        response.assert_status_ok();
        let listed = server
            .post(&wire::ListProjectsRequest::path())
            .json(&wire::ListProjectsRequest::default())
            .await
            .json::<wire::ListProjectsResponse>();
        assert!(listed.projects.is_empty());
    }
}

mod models {
    use super::*;

    #[tokio::test]
    async fn returns_members_with_symbolic_kinds() {
        let server = setup();
        let project = create_test_project(&server).await;

        for name in ["Book", "Author"] {
            server
                .post(&wire::CreateModelRequest::path())
                .json(&wire::CreateModelRequest {
                    project_slug: project.slug.clone(),
                    name: name.to_string(),
                    description: String::new(),
                })
                .await
                .assert_status_ok();
        }
        server
            .post(&wire::CreateModelAttributeRequest::path())
            .json(&wire::CreateModelAttributeRequest {
                project_slug: project.slug.clone(),
                model_slug: "book".to_string(),
                name: "title".to_string(),
                description: String::new(),
                kind: "MODEL_ATTRIBUTE_KIND_STRING".to_string(),
            })
            .await
            .assert_status_ok();
        server
            .post(&wire::CreateModelAssociationRequest::path())
            .json(&wire::CreateModelAssociationRequest {
                project_slug: project.slug.clone(),
                model_slug: "book".to_string(),
                name: "author".to_string(),
                description: String::new(),
                kind: "MODEL_ASSOCIATION_KIND_BELONGS_TO".to_string(),
                associated_model_slug: "author".to_string(),
            })
            .await
            .assert_status_ok();

        let response = server
            .post(&wire::GetModelRequest::path())
            .json(&wire::GetModelRequest {
                project_slug: project.slug.clone(),
                model_slug: "book".to_string(),
            })
            .await;

        response.assert_status_ok();
        let model = response.json::<wire::GetModelResponse>();
        assert_eq!(model.attributes[0].kind, "MODEL_ATTRIBUTE_KIND_STRING");
        assert_eq!(
            model.associations[0].kind,
            "MODEL_ASSOCIATION_KIND_BELONGS_TO"
        );
        assert_eq!(
            model.associations[0]
                .associated_model
                .as_ref()
                .map(|m| m.name.as_str()),
            Some("Author")
        );
    }

    #[tokio::test]
    async fn renders_the_project_diagram() {
        let server = setup();
        let project = create_test_project(&server).await;

        let response = server
            .post(&wire::GetProjectClassDiagramRequest::path())
            .json(&wire::GetProjectClassDiagramRequest {
                project_slug: project.slug.clone(),
            })
            .await;

        response.assert_status_ok();
        assert_eq!(
            response.json::<wire::ClassDiagramResponse>().diagram,
            "classDiagram"
        );
    }
}
