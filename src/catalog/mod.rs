//! Use-case catalog
//!
//! The catalog is compiled into the binary and validated once at startup.
//! After that it is read-only.

mod builtin;

use crate::error::CatalogError;
use crate::template::{self, FieldId, FormValues};
use std::collections::HashSet;

/// How a field is edited in the form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    SingleLine,
    MultiLine,
    Numeric,
    Enumerated,
}

/// A single input of a use case
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    pub id: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub placeholder: Option<&'static str>,
    /// Choices, only used by enumerated fields
    pub options: &'static [&'static str],
    pub required: bool,
}

impl Field {
    const fn new(id: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self {
            id,
            label,
            kind,
            placeholder: None,
            options: &[],
            required: false,
        }
    }

    pub const fn text(id: &'static str, label: &'static str) -> Self {
        Self::new(id, label, FieldKind::SingleLine)
    }

    pub const fn textarea(id: &'static str, label: &'static str) -> Self {
        Self::new(id, label, FieldKind::MultiLine)
    }

    pub const fn number(id: &'static str, label: &'static str) -> Self {
        Self::new(id, label, FieldKind::Numeric)
    }

    pub const fn select(
        id: &'static str,
        label: &'static str,
        options: &'static [&'static str],
    ) -> Self {
        let mut field = Self::new(id, label, FieldKind::Enumerated);
        field.options = options;
        field
    }

    pub const fn placeholder(mut self, placeholder: &'static str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }

    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn is_multiline(&self) -> bool {
        self.kind == FieldKind::MultiLine
    }
}

/// A prompt recipe: the fields to ask for and the template to fill
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UseCase {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub fields: &'static [Field],
    pub template: &'static str,
}

impl UseCase {
    /// Declared field ids in form order
    pub fn field_ids(&self) -> impl Iterator<Item = &'static str> {
        self.fields.iter().map(|f| f.id)
    }

    /// Render this use case's template with the given values
    pub fn render(&self, values: &FormValues) -> String {
        template::render(self.template, values, self.field_ids())
    }

    fn validate(&self) -> Result<(), CatalogError> {
        if self.id.is_empty() {
            return Err(CatalogError::EmptyUseCaseId);
        }

        let mut declared = HashSet::new();
        for field in self.fields {
            FieldId::new(field.id).map_err(|source| CatalogError::Template {
                use_case: self.id.to_string(),
                source,
            })?;
            if !declared.insert(field.id) {
                return Err(CatalogError::DuplicateField {
                    use_case: self.id.to_string(),
                    field: field.id.to_string(),
                });
            }
            if field.kind == FieldKind::Enumerated && field.options.is_empty() {
                return Err(CatalogError::MissingOptions {
                    use_case: self.id.to_string(),
                    field: field.id.to_string(),
                });
            }
        }

        let refs = template::check(self.template).map_err(|source| CatalogError::Template {
            use_case: self.id.to_string(),
            source,
        })?;
        if let Some(orphan) = refs.fields().find(|id| !declared.contains(id)) {
            return Err(CatalogError::UnknownField {
                use_case: self.id.to_string(),
                field: orphan.to_string(),
            });
        }

        Ok(())
    }
}

/// The validated, read-only set of use cases
#[derive(Debug, Clone, Copy)]
pub struct Catalog {
    use_cases: &'static [UseCase],
}

impl Catalog {
    /// Validate and wrap a table of use cases
    pub fn new(use_cases: &'static [UseCase]) -> Result<Self, CatalogError> {
        let mut ids = HashSet::new();
        for use_case in use_cases {
            use_case.validate()?;
            if !ids.insert(use_case.id) {
                return Err(CatalogError::DuplicateUseCase(use_case.id.to_string()));
            }
        }
        tracing::debug!("Loaded catalog with {} use cases", use_cases.len());
        Ok(Self { use_cases })
    }

    /// The catalog shipped with the application
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::new(builtin::USE_CASES)
    }

    pub fn all(&self) -> &'static [UseCase] {
        self.use_cases
    }

    /// Find a use case by id
    pub fn get(&self, id: &str) -> Option<&'static UseCase> {
        self.use_cases.iter().find(|u| u.id == id)
    }

    /// Index of a use case in display order
    pub fn position(&self, id: &str) -> Option<usize> {
        self.use_cases.iter().position(|u| u.id == id)
    }

    pub fn len(&self) -> usize {
        self.use_cases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.use_cases.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TemplateError;

    fn use_case(fields: &'static [Field], template: &'static str) -> UseCase {
        UseCase {
            id: "test",
            title: "Test",
            description: "A test use case",
            icon: "🧪",
            fields,
            template,
        }
    }

    mod builtin_catalog {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_builtin_validates() {
            let catalog = Catalog::builtin().unwrap();
            assert_eq!(catalog.len(), 6);
            assert!(!catalog.is_empty());
        }

        #[test]
        fn test_builtin_order() {
            let catalog = Catalog::builtin().unwrap();
            let ids: Vec<&str> = catalog.all().iter().map(|u| u.id).collect();
            assert_eq!(
                ids,
                vec![
                    "real-time-analysis",
                    "lead-followup",
                    "expired-fsbo",
                    "competitive-analysis",
                    "objection-handling",
                    "custom-prompt",
                ]
            );
        }

        #[test]
        fn test_get_known_and_unknown() {
            let catalog = Catalog::builtin().unwrap();
            assert_eq!(catalog.get("lead-followup").unwrap().title, "Lead Follow-Up Automation");
            assert!(catalog.get("does-not-exist").is_none());
        }

        #[test]
        fn test_position() {
            let catalog = Catalog::builtin().unwrap();
            assert_eq!(catalog.position("expired-fsbo"), Some(2));
            assert_eq!(catalog.position("nope"), None);
        }

        #[test]
        fn test_every_enumerated_field_has_options() {
            let catalog = Catalog::builtin().unwrap();
            for use_case in catalog.all() {
                for field in use_case.fields {
                    assert_eq!(
                        field.kind == FieldKind::Enumerated,
                        !field.options.is_empty(),
                        "{}.{}",
                        use_case.id,
                        field.id
                    );
                }
            }
        }

        #[test]
        fn test_render_real_time_analysis() {
            let catalog = Catalog::builtin().unwrap();
            let use_case = catalog.get("real-time-analysis").unwrap();
            let values: FormValues = [
                ("pageType", "MLS Listing"),
                ("analysisGoal", "pricing concerns"),
            ]
            .into_iter()
            .map(|(k, v)| (FieldId::new(k).unwrap(), v.to_string()))
            .collect();

            let out = use_case.render(&values);
            assert!(out.starts_with(
                "Analyze this MLS Listing for pricing concerns.\n\n\n\nPlease provide:"
            ));
            assert!(!out.contains("Context:"));
            assert!(out.ends_with("- Questions I should ask based on this information"));
        }

        #[test]
        fn test_render_lead_followup_with_optional_fields() {
            let catalog = Catalog::builtin().unwrap();
            let use_case = catalog.get("lead-followup").unwrap();
            let values: FormValues = [
                ("leadType", "Past Client"),
                ("leadSituation", "wants to upsize"),
                ("pricePoint", "$450K"),
                ("tone", "Warm & Friendly"),
                ("touchpoints", "5"),
                ("timeframe", "2 weeks"),
            ]
            .into_iter()
            .map(|(k, v)| (FieldId::new(k).unwrap(), v.to_string()))
            .collect();

            let out = use_case.render(&values);
            assert!(out.starts_with(
                "I need a follow-up email sequence for a Past Client who wants to upsize.\n\nPrice Point: $450K\n\n\nTone should be Warm & Friendly. Include 5 touchpoints over 2 weeks."
            ));
            assert!(!out.contains("Market:"));
            assert!(!out.contains("{{"));
        }
    }

    mod validation {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_accepts_valid_use_case() {
            static FIELDS: [Field; 2] = [
                Field::text("name", "Name").required(),
                Field::text("extra", "Extra"),
            ];
            let uc = use_case(&FIELDS, "Hi {{name}}{{#if extra}}, {{extra}}{{/if}}!");
            assert_eq!(uc.validate(), Ok(()));
        }

        #[test]
        fn test_rejects_empty_use_case_id() {
            let mut uc = use_case(&[], "text");
            uc.id = "";
            assert_eq!(uc.validate(), Err(CatalogError::EmptyUseCaseId));
        }

        #[test]
        fn test_rejects_duplicate_field() {
            static FIELDS: [Field; 2] = [
                Field::text("name", "Name"),
                Field::textarea("name", "Again"),
            ];
            let uc = use_case(&FIELDS, "{{name}}");
            assert_eq!(
                uc.validate(),
                Err(CatalogError::DuplicateField {
                    use_case: "test".to_string(),
                    field: "name".to_string()
                })
            );
        }

        #[test]
        fn test_rejects_invalid_field_id() {
            static FIELDS: [Field; 1] = [Field::text("bad id", "Bad")];
            let uc = use_case(&FIELDS, "text");
            assert_eq!(
                uc.validate(),
                Err(CatalogError::Template {
                    use_case: "test".to_string(),
                    source: TemplateError::InvalidFieldId("bad id".to_string())
                })
            );
        }

        #[test]
        fn test_rejects_select_without_options() {
            static FIELDS: [Field; 1] = [Field::select("tone", "Tone", &[])];
            let uc = use_case(&FIELDS, "{{tone}}");
            assert_eq!(
                uc.validate(),
                Err(CatalogError::MissingOptions {
                    use_case: "test".to_string(),
                    field: "tone".to_string()
                })
            );
        }

        #[test]
        fn test_rejects_orphan_placeholder() {
            static FIELDS: [Field; 1] = [Field::text("name", "Name")];
            let uc = use_case(&FIELDS, "{{name}} {{unknown}}");
            assert_eq!(
                uc.validate(),
                Err(CatalogError::UnknownField {
                    use_case: "test".to_string(),
                    field: "unknown".to_string()
                })
            );
        }

        #[test]
        fn test_rejects_orphan_conditional() {
            static FIELDS: [Field; 1] = [Field::text("name", "Name")];
            let uc = use_case(&FIELDS, "{{#if ghost}}boo{{/if}}");
            assert_eq!(
                uc.validate(),
                Err(CatalogError::UnknownField {
                    use_case: "test".to_string(),
                    field: "ghost".to_string()
                })
            );
        }

        #[test]
        fn test_rejects_nested_conditionals() {
            static FIELDS: [Field; 2] = [Field::text("a", "A"), Field::text("b", "B")];
            let uc = use_case(&FIELDS, "{{#if a}}{{#if b}}x{{/if}}{{/if}}");
            assert_eq!(
                uc.validate(),
                Err(CatalogError::Template {
                    use_case: "test".to_string(),
                    source: TemplateError::NestedConditional {
                        field: "a".to_string()
                    }
                })
            );
        }

        #[test]
        fn test_rejects_duplicate_use_case_ids() {
            static TWICE: [UseCase; 2] = [
                UseCase {
                    id: "same",
                    title: "One",
                    description: "",
                    icon: "1",
                    fields: &[],
                    template: "one",
                },
                UseCase {
                    id: "same",
                    title: "Two",
                    description: "",
                    icon: "2",
                    fields: &[],
                    template: "two",
                },
            ];
            assert_eq!(
                Catalog::new(&TWICE).unwrap_err(),
                CatalogError::DuplicateUseCase("same".to_string())
            );
        }
    }

    mod fields {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_builders() {
            let field = Field::text("price", "Price").placeholder("e.g., $450K").required();
            assert_eq!(field.kind, FieldKind::SingleLine);
            assert_eq!(field.placeholder, Some("e.g., $450K"));
            assert!(field.required);
            assert!(field.options.is_empty());
        }

        #[test]
        fn test_select_keeps_options() {
            let field = Field::select("tone", "Tone", &["Warm", "Direct"]);
            assert_eq!(field.kind, FieldKind::Enumerated);
            assert_eq!(field.options, &["Warm", "Direct"]);
            assert!(!field.required);
        }

        #[test]
        fn test_is_multiline() {
            assert!(Field::textarea("a", "A").is_multiline());
            assert!(!Field::number("b", "B").is_multiline());
        }

        #[test]
        fn test_use_case_field_ids() {
            static FIELDS: [Field; 2] = [
                Field::text("name", "Name"),
                Field::number("count", "Count"),
            ];
            let uc = use_case(&FIELDS, "{{name}} {{count}}");
            assert_eq!(uc.field_ids().collect::<Vec<_>>(), vec!["name", "count"]);
        }
    }
}
