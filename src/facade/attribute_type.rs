use super::{require_slug, Workbench};
use crate::facade::validation::{FieldError, Validator};
use crate::models::*;
use crate::{Error, Result};

impl Workbench {
    pub async fn create_attribute_type(
        &mut self,
        attribute_type: &NewAttributeType,
    ) -> Result<AttributeType> {
        Validator::new()
            .name("name", &attribute_type.name)
            .into_result()?;
        self.gateway.create_attribute_type(attribute_type).await
    }

    pub async fn list_attribute_types(&self) -> Result<Vec<AttributeType>> {
        self.gateway.list_attribute_types().await
    }

    pub async fn get_attribute_type(&self, slug: &str) -> Result<AttributeType> {
        require_slug("slug", slug)?;
        self.gateway.get_attribute_type(slug).await
    }

    pub async fn update_attribute_type(
        &mut self,
        slug: &str,
        patch: &AttributeTypePatch,
    ) -> Result<AttributeType> {
        if patch.mask().is_empty() {
            return Err(Error::Validation(vec![FieldError::required("update_mask")]));
        }
        let mut validator = Validator::new().required("slug", slug);
        if patch.mask().contains(AttributeTypeField::Name) {
            validator = validator.name("name", patch.name().unwrap_or_default());
        }
        validator.into_result()?;

        self.gateway.update_attribute_type(slug, patch).await
    }

    pub async fn delete_attribute_type(&mut self, slug: &str) -> Result<Deletion> {
        require_slug("slug", slug)?;
        self.gateway.delete_attribute_type(slug).await
    }
}
