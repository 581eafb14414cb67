//! Domain error types

use thiserror::Error;

/// Problems found while analysing a template or building field identifiers
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    #[error("invalid field id {0:?}: expected one or more word characters")]
    InvalidFieldId(String),

    #[error("conditional block `{field}` contains another conditional block")]
    NestedConditional { field: String },

    #[error("conditional block `{field}` is never closed")]
    UnclosedConditional { field: String },

    #[error("`{{{{/if}}}}` at byte {offset} has no matching `{{{{#if ...}}}}`")]
    UnmatchedClose { offset: usize },
}

/// Errors raised while loading the use-case catalog
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("use case id must not be empty")]
    EmptyUseCaseId,

    #[error("use case `{0}` is defined more than once")]
    DuplicateUseCase(String),

    #[error("use case `{use_case}` declares field `{field}` more than once")]
    DuplicateField { use_case: String, field: String },

    #[error("use case `{use_case}`: enumerated field `{field}` has no options")]
    MissingOptions { use_case: String, field: String },

    #[error("use case `{use_case}`: template references undeclared field `{field}`")]
    UnknownField { use_case: String, field: String },

    #[error("use case `{use_case}`: {source}")]
    Template {
        use_case: String,
        #[source]
        source: TemplateError,
    },
}

/// Errors that block prompt generation from a form
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("Please fill in: {label}")]
    MissingRequired { label: String },

    #[error(transparent)]
    Template(#[from] TemplateError),
}
