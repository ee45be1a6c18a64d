//! `FavorArrays` parameter directive

use crate::constructor::ConstructorCustomization;
use crate::error::CustomizationError;
use crate::source::{CustomizationKind, ParameterCustomizationSource};
use specimen_kernel::{ArrayFavoringConstructorQuery, Customization, ParameterInfo, TypeKind};
use std::sync::Arc;

/// Build the parameter's type with the constructor taking the most array
/// arguments
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FavorArrays;

impl ParameterCustomizationSource for FavorArrays {
    fn customization(
        &self,
        parameter: &ParameterInfo,
    ) -> Result<Box<dyn Customization>, CustomizationError> {
        let ty = parameter.ty();
        if *ty.kind() != TypeKind::Class || ty.constructors().is_empty() {
            return Err(CustomizationError::not_constructible(ty.name()));
        }
        Ok(Box::new(ConstructorCustomization::new(
            ty,
            Arc::new(ArrayFavoringConstructorQuery),
        )))
    }

    fn kind(&self) -> CustomizationKind {
        CustomizationKind::Construction
    }
}
