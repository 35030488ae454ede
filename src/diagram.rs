//! Mermaid class diagrams of a project or a single model.

use crate::models::{AssociationKind, ModelAssociation, ModelOverview};

/// Mermaid `classDiagram` source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassDiagram {
    pub code: String,
}

/// Diagram of every model in a project with their members.
pub fn project_class_diagram(models: &[ModelOverview]) -> ClassDiagram {
    let classes: Vec<String> = models.iter().map(class_code).collect();
    let associations: Vec<String> = models
        .iter()
        .flat_map(|overview| {
            overview
                .associations
                .iter()
                .map(move |association| association_code(&overview.model.name, association))
        })
        .collect();

    render(&classes, &associations)
}

/// Diagram of one model and the models its associations point at.
pub fn model_class_diagram(overview: &ModelOverview) -> ClassDiagram {
    let associations: Vec<String> = overview
        .associations
        .iter()
        .map(|association| association_code(&overview.model.name, association))
        .collect();

    render(&[class_code(overview)], &associations)
}

fn render(classes: &[String], associations: &[String]) -> ClassDiagram {
    let mut code = "classDiagram".to_string();
    if !classes.is_empty() {
        code = format!("{code}\n{}\n", classes.join("\n"));
    }
    if !associations.is_empty() {
        code = format!("{code}\n{}\n", associations.join("\n"));
    }
    ClassDiagram { code }
}

/// Mermaid identifiers cannot contain whitespace.
fn class_name(name: &str) -> String {
    name.split_whitespace().collect()
}

fn class_code(overview: &ModelOverview) -> String {
    let attributes: Vec<String> = overview
        .attributes
        .iter()
        .map(|attribute| format!("        +{} {}", attribute.kind.as_str(), attribute.name))
        .collect();

    format!(
        "    class {} {{\n{}\n    }}",
        class_name(&overview.model.name),
        attributes.join("\n")
    )
}

fn association_code(class: &str, association: &ModelAssociation) -> String {
    let target = association
        .associated_model
        .as_ref()
        .map(|model| class_name(&model.name))
        .unwrap_or_else(|| class_name(&association.associated_model_slug));

    let arrow = match association.kind {
        AssociationKind::BelongsTo => "-->".to_string(),
        AssociationKind::HasOne => "\"1\" --> \"1\"".to_string(),
        AssociationKind::HasMany => "\"1\" --> \"*\"".to_string(),
    };

    format!("    {} {} {} : {}", class_name(class), arrow, target, association.name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AttributeKind, Model, ModelAttribute};

    fn book() -> ModelOverview {
        ModelOverview {
            model: Model {
                slug: "book".to_string(),
                name: "Book".to_string(),
                description: None,
            },
            attributes: vec![ModelAttribute {
                name: "title".to_string(),
                description: None,
                kind: AttributeKind::String,
            }],
            associations: vec![ModelAssociation {
                name: "author".to_string(),
                description: None,
                kind: AssociationKind::BelongsTo,
                associated_model_slug: "author".to_string(),
                associated_model: Some(Model {
                    slug: "author".to_string(),
                    name: "Author".to_string(),
                    description: None,
                }),
            }],
        }
    }

    #[test]
    fn empty_project_renders_header_only() {
        assert_eq!(project_class_diagram(&[]).code, "classDiagram");
    }

    #[test]
    fn renders_model_with_attributes_and_associations() {
        let diagram = model_class_diagram(&book());

        assert_eq!(
            diagram.code,
            "classDiagram\n    class Book {\n        +string title\n    }\n\n    Book --> Author : author\n"
        );
    }

    #[test]
    fn unresolved_association_falls_back_to_slug() {
        let mut overview = book();
        overview.associations[0].associated_model = None;
        overview.associations[0].kind = AssociationKind::HasMany;
        overview.associations[0].associated_model_slug = "writer".to_string();

        let diagram = model_class_diagram(&overview);
        assert!(diagram.code.contains("    Book \"1\" --> \"*\" writer : author"));
    }
}
