//! Entity classifier: syntactic construct kind -> entity type tag.
//!
//! The mapping is exhaustive over the closed construct set and intentionally
//! strict: an out-of-set kind is an error for the whole file, never a silent
//! misclassification. The match below is total, so adding a construct kind
//! without deciding its entity type is a build error.

use crate::error::MapError;
use crate::graph::node::EntityKind;
use crate::syntax::ConstructKind;

/// Classify a syntactic construct into its entity type.
///
/// # Errors
/// `UnrecognizedConstruct` for [`ConstructKind::Other`] (the front end saw
/// syntax this core does not model, and mapping the file must abort) and for
/// [`ConstructKind::ModuleDeclaration`]: module declarations are file-level
/// metadata consumed by the module-kind scan, never declaration nodes of
/// their own.
pub fn classify(construct: &ConstructKind, file: &str) -> Result<EntityKind, MapError> {
    match construct {
        ConstructKind::ClassDeclaration => Ok(EntityKind::Class),
        ConstructKind::InterfaceDeclaration => Ok(EntityKind::Interface),
        // All three function-shaped constructs map to one entity type.
        ConstructKind::FunctionDeclaration
        | ConstructKind::ArrowFunction
        | ConstructKind::FunctionExpression => Ok(EntityKind::Function),
        ConstructKind::MethodDeclaration => Ok(EntityKind::Method),
        ConstructKind::GetAccessor => Ok(EntityKind::Getter),
        ConstructKind::SetAccessor => Ok(EntityKind::Setter),
        ConstructKind::ConstructorDeclaration => Ok(EntityKind::Constructor),
        ConstructKind::PropertyDeclaration | ConstructKind::PropertySignature => {
            Ok(EntityKind::Property)
        }
        ConstructKind::VariableDeclaration => Ok(EntityKind::Variable),
        ConstructKind::EnumDeclaration => Ok(EntityKind::Enum),
        ConstructKind::TypeAliasDeclaration => Ok(EntityKind::TypeAlias),
        ConstructKind::Decorator => Ok(EntityKind::Decorator),
        ConstructKind::ModuleDeclaration => Err(MapError::UnrecognizedConstruct {
            construct: "module_declaration".to_owned(),
            file: file.to_owned(),
        }),
        ConstructKind::Other(raw) => Err(MapError::UnrecognizedConstruct {
            construct: raw.clone(),
            file: file.to_owned(),
        }),
    }
}
