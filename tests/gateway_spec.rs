use atelier::gateway::{Gateway, InMemoryGateway};
use atelier::models::*;
use atelier::Error;
use speculate2::speculate;
use tokio::runtime::Runtime;

async fn create_project(gateway: &mut InMemoryGateway, name: &str) -> Project {
    gateway
        .create_project(&NewProject::new(name))
        .await
        .expect("Failed to create project")
}

async fn create_model(gateway: &mut InMemoryGateway, project: &str, name: &str) -> Model {
    gateway
        .create_model(project, &NewModel::new(name))
        .await
        .expect("Failed to create model")
}

speculate! {
    before {
        let rt = Runtime::new().expect("Failed to start runtime");
        let mut gateway = InMemoryGateway::new();
    }

    describe "projects" {
        describe "create_project" {
            it "returns what get_project finds under the new slug" {
                rt.block_on(async {
                    let created = gateway
                        .create_project(&NewProject::new("Book store").with_description("Sells books"))
                        .await
                        .expect("Failed to create project");

                    let found = gateway.get_project(&created.slug).await.expect("Get failed");

                    assert_eq!(created.slug, "book-store");
                    assert_eq!(found.name, "Book store");
                    assert_eq!(found.description, Some("Sells books".to_string()));
                    assert_eq!(found.create_time, created.create_time);
                });
            }

            it "keeps an absent description absent" {
                rt.block_on(async {
                    let created = create_project(&mut gateway, "Library").await;
                    let found = gateway.get_project(&created.slug).await.expect("Get failed");
                    assert!(found.description.is_none());
                });
            }

            it "lists projects alphabetically" {
                rt.block_on(async {
                    create_project(&mut gateway, "Zoo").await;
                    create_project(&mut gateway, "Aquarium").await;
                    create_project(&mut gateway, "Museum").await;

                    let names: Vec<String> = gateway
                        .list_projects()
                        .await
                        .expect("List failed")
                        .into_iter()
                        .map(|p| p.name)
                        .collect();

                    assert_eq!(names, vec!["Aquarium", "Museum", "Zoo"]);
                });
            }
        }

        describe "get_project" {
            it "reports NotFound for an unknown slug" {
                rt.block_on(async {
                    let err = gateway.get_project("missing").await.unwrap_err();
                    assert!(matches!(err, Error::NotFound(_)));
                });
            }
        }

        describe "update_project" {
            it "leaves unmasked fields unchanged" {
                rt.block_on(async {
                    let created = gateway
                        .create_project(&NewProject::new("A").with_description("B"))
                        .await
                        .expect("Failed to create project");

                    let updated = gateway
                        .update_project(&created.slug, &ProjectPatch::new().rename("C"))
                        .await
                        .expect("Update failed");
                    let found = gateway.get_project(&created.slug).await.expect("Get failed");

                    assert_eq!(updated.name, "C");
                    assert_eq!(found.name, "C");
                    assert_eq!(found.description, Some("B".to_string()));
                });
            }

            it "keeps the slug when the project is renamed" {
                rt.block_on(async {
                    let created = create_project(&mut gateway, "Old name").await;

                    let updated = gateway
                        .update_project(&created.slug, &ProjectPatch::new().rename("New name"))
                        .await
                        .expect("Update failed");

                    assert_eq!(updated.slug, "old-name");
                });
            }

            it "clears the description when it is masked without a value" {
                rt.block_on(async {
                    let created = gateway
                        .create_project(&NewProject::new("Shop").with_description("Old"))
                        .await
                        .expect("Failed to create project");

                    let updated = gateway
                        .update_project(&created.slug, &ProjectPatch::new().describe(None))
                        .await
                        .expect("Update failed");

                    assert_eq!(updated.name, "Shop");
                    assert!(updated.description.is_none());
                });
            }

            it "reports NotFound for an unknown slug" {
                rt.block_on(async {
                    let err = gateway
                        .update_project("missing", &ProjectPatch::new().rename("X"))
                        .await
                        .unwrap_err();
                    assert!(matches!(err, Error::NotFound(_)));
                });
            }
        }

        describe "lifecycle" {
            it "moves an archived project between the two listings" {
                rt.block_on(async {
                    let project = create_project(&mut gateway, "Book store").await;

                    gateway.archive_project(&project.slug).await.expect("Archive failed");
                    assert!(gateway.list_projects().await.expect("List failed").is_empty());
                    assert_eq!(
                        gateway.list_archived_projects().await.expect("List failed").len(),
                        1
                    );

                    gateway.restore_project(&project.slug).await.expect("Restore failed");
                    let active = gateway.list_projects().await.expect("List failed");
                    assert_eq!(active.len(), 1);
                    assert_eq!(active[0].slug, project.slug);
                    assert!(gateway
                        .list_archived_projects()
                        .await
                        .expect("List failed")
                        .is_empty());
                });
            }

            it "refuses to restore an active project" {
                rt.block_on(async {
                    let project = create_project(&mut gateway, "Book store").await;
                    let err = gateway.restore_project(&project.slug).await.unwrap_err();
                    assert!(matches!(err, Error::FailedPrecondition(_)));
                });
            }

            it "refuses to archive twice" {
                rt.block_on(async {
                    let project = create_project(&mut gateway, "Book store").await;
                    gateway.archive_project(&project.slug).await.expect("Archive failed");

                    let err = gateway.archive_project(&project.slug).await.unwrap_err();
                    assert!(matches!(err, Error::FailedPrecondition(_)));
                });
            }

            it "still finds an archived project by slug" {
                rt.block_on(async {
                    let project = create_project(&mut gateway, "Book store").await;
                    gateway.archive_project(&project.slug).await.expect("Archive failed");

                    let found = gateway.get_project(&project.slug).await.expect("Get failed");
                    assert_eq!(found.name, "Book store");
                });
            }
        }

        describe "delete_project" {
            it "is a no-op success for an unknown slug" {
                rt.block_on(async {
                    let deletion = gateway.delete_project("missing").await.expect("Delete failed");
                    assert_eq!(deletion, Deletion::Absent);
                });
            }

            it "removes the project and everything under it" {
                rt.block_on(async {
                    let project = create_project(&mut gateway, "Book store").await;
                    create_model(&mut gateway, &project.slug, "Book").await;

                    let deletion = gateway.delete_project(&project.slug).await.expect("Delete failed");
                    assert_eq!(deletion, Deletion::Removed);

                    assert!(matches!(
                        gateway.list_models(&project.slug).await.unwrap_err(),
                        Error::NotFound(_)
                    ));

                    // A project recreated under the same slug starts empty.
                    let again = create_project(&mut gateway, "Book store").await;
                    assert!(gateway.list_models(&again.slug).await.expect("List failed").is_empty());
                });
            }
        }
    }

    describe "models" {
        before {
            let project = rt.block_on(create_project(&mut gateway, "Book store"));
        }

        it "returns a model with its attribute" {
            rt.block_on(async {
                let book = create_model(&mut gateway, &project.slug, "Book").await;
                gateway
                    .create_model_attribute(
                        &project.slug,
                        &book.slug,
                        &NewModelAttribute::new("title", AttributeKind::String),
                    )
                    .await
                    .expect("Failed to create attribute");

                let overview = gateway.get_model(&project.slug, &book.slug).await.expect("Get failed");

                assert_eq!(overview.model.name, "Book");
                assert_eq!(overview.attributes.len(), 1);
                assert_eq!(overview.attributes[0].name, "title");
                assert_eq!(overview.attributes[0].kind, AttributeKind::String);
                assert!(overview.associations.is_empty());
            });
        }

        it "lists models alphabetically" {
            rt.block_on(async {
                create_model(&mut gateway, &project.slug, "Book").await;
                create_model(&mut gateway, &project.slug, "Author").await;

                let names: Vec<String> = gateway
                    .list_models(&project.slug)
                    .await
                    .expect("List failed")
                    .into_iter()
                    .map(|m| m.name)
                    .collect();

                assert_eq!(names, vec!["Author", "Book"]);
            });
        }

        it "scopes models to their project" {
            rt.block_on(async {
                let other = create_project(&mut gateway, "Library").await;
                create_model(&mut gateway, &project.slug, "Book").await;

                assert!(gateway.list_models(&other.slug).await.expect("List failed").is_empty());
                assert!(matches!(
                    gateway.get_model(&other.slug, "book").await.unwrap_err(),
                    Error::NotFound(_)
                ));
            });
        }

        it "reports NotFound when the project is missing" {
            rt.block_on(async {
                let err = gateway
                    .create_model("missing", &NewModel::new("Book"))
                    .await
                    .unwrap_err();
                assert!(matches!(err, Error::NotFound(_)));
            });
        }

        it "deletes idempotently" {
            rt.block_on(async {
                let book = create_model(&mut gateway, &project.slug, "Book").await;

                assert_eq!(
                    gateway.delete_model(&project.slug, &book.slug).await.expect("Delete failed"),
                    Deletion::Removed
                );
                assert_eq!(
                    gateway.delete_model(&project.slug, &book.slug).await.expect("Delete failed"),
                    Deletion::Absent
                );
            });
        }
    }

    describe "model members" {
        before {
            let project = rt.block_on(create_project(&mut gateway, "Book store"));
            let book = rt.block_on(create_model(&mut gateway, &project.slug, "Book"));
            rt.block_on(create_model(&mut gateway, &project.slug, "Author"));
        }

        it "resolves the associated model" {
            rt.block_on(async {
                let association = gateway
                    .create_model_association(
                        &project.slug,
                        &book.slug,
                        &NewModelAssociation::new("author", AssociationKind::BelongsTo, "author"),
                    )
                    .await
                    .expect("Failed to create association");

                assert_eq!(association.kind, AssociationKind::BelongsTo);
                assert_eq!(association.associated_model_slug, "author");
                assert_eq!(
                    association.associated_model.map(|m| m.name),
                    Some("Author".to_string())
                );
            });
        }

        it "leaves a dangling association unresolved" {
            rt.block_on(async {
                let association = gateway
                    .create_model_association(
                        &project.slug,
                        &book.slug,
                        &NewModelAssociation::new("publisher", AssociationKind::HasOne, "publisher"),
                    )
                    .await
                    .expect("Failed to create association");

                assert!(association.associated_model.is_none());
            });
        }

        it "finds attributes by name" {
            rt.block_on(async {
                gateway
                    .create_model_attribute(
                        &project.slug,
                        &book.slug,
                        &NewModelAttribute::new("pages", AttributeKind::Integer).with_description("Page count"),
                    )
                    .await
                    .expect("Failed to create attribute");

                let found = gateway
                    .get_model_attribute(&project.slug, &book.slug, "pages")
                    .await
                    .expect("Get failed");
                assert_eq!(found.kind, AttributeKind::Integer);
                assert_eq!(found.description, Some("Page count".to_string()));

                assert!(matches!(
                    gateway.get_model_attribute(&project.slug, &book.slug, "isbn").await.unwrap_err(),
                    Error::NotFound(_)
                ));
            });
        }

        it "lists members alphabetically" {
            rt.block_on(async {
                for name in ["title", "available", "pages"] {
                    gateway
                        .create_model_attribute(
                            &project.slug,
                            &book.slug,
                            &NewModelAttribute::new(name, AttributeKind::String),
                        )
                        .await
                        .expect("Failed to create attribute");
                }

                let names: Vec<String> = gateway
                    .list_model_attributes(&project.slug, &book.slug)
                    .await
                    .expect("List failed")
                    .into_iter()
                    .map(|a| a.name)
                    .collect();

                assert_eq!(names, vec!["available", "pages", "title"]);
            });
        }

        it "deletes members idempotently" {
            rt.block_on(async {
                gateway
                    .create_model_association(
                        &project.slug,
                        &book.slug,
                        &NewModelAssociation::new("author", AssociationKind::BelongsTo, "author"),
                    )
                    .await
                    .expect("Failed to create association");

                assert_eq!(
                    gateway
                        .delete_model_association(&project.slug, &book.slug, "author")
                        .await
                        .expect("Delete failed"),
                    Deletion::Removed
                );
                assert_eq!(
                    gateway
                        .delete_model_association(&project.slug, &book.slug, "author")
                        .await
                        .expect("Delete failed"),
                    Deletion::Absent
                );
                assert_eq!(
                    gateway
                        .delete_model_attribute(&project.slug, &book.slug, "missing")
                        .await
                        .expect("Delete failed"),
                    Deletion::Absent
                );
            });
        }

        it "drops members together with their model" {
            rt.block_on(async {
                gateway
                    .create_model_attribute(
                        &project.slug,
                        &book.slug,
                        &NewModelAttribute::new("title", AttributeKind::String),
                    )
                    .await
                    .expect("Failed to create attribute");

                gateway.delete_model(&project.slug, &book.slug).await.expect("Delete failed");
                create_model(&mut gateway, &project.slug, "Book").await;

                let overview = gateway.get_model(&project.slug, "book").await.expect("Get failed");
                assert!(overview.attributes.is_empty());
            });
        }

        it "renders the project class diagram" {
            rt.block_on(async {
                gateway
                    .create_model_attribute(
                        &project.slug,
                        &book.slug,
                        &NewModelAttribute::new("title", AttributeKind::String),
                    )
                    .await
                    .expect("Failed to create attribute");
                gateway
                    .create_model_association(
                        &project.slug,
                        &book.slug,
                        &NewModelAssociation::new("author", AssociationKind::BelongsTo, "author"),
                    )
                    .await
                    .expect("Failed to create association");

                let diagram = gateway
                    .get_project_class_diagram(&project.slug)
                    .await
                    .expect("Diagram failed");

                assert!(diagram.code.starts_with("classDiagram\n"));
                assert!(diagram.code.contains("class Author {"));
                assert!(diagram.code.contains("+string title"));
                assert!(diagram.code.contains("Book --> Author : author"));
            });
        }
    }

    describe "attribute types" {
        it "supports the full lifecycle" {
            rt.block_on(async {
                let created = gateway
                    .create_attribute_type(&NewAttributeType::new("Money").with_description("Decimal amount"))
                    .await
                    .expect("Failed to create attribute type");
                assert_eq!(created.slug, "money");

                let updated = gateway
                    .update_attribute_type(&created.slug, &AttributeTypePatch::new().rename("Currency"))
                    .await
                    .expect("Update failed");
                assert_eq!(updated.name, "Currency");
                assert_eq!(updated.description, Some("Decimal amount".to_string()));

                let found = gateway.get_attribute_type("money").await.expect("Get failed");
                assert_eq!(found, updated);

                assert_eq!(
                    gateway.delete_attribute_type("money").await.expect("Delete failed"),
                    Deletion::Removed
                );
                assert_eq!(
                    gateway.delete_attribute_type("money").await.expect("Delete failed"),
                    Deletion::Absent
                );
                assert!(gateway.list_attribute_types().await.expect("List failed").is_empty());
            });
        }
    }
}
