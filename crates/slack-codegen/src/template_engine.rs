//! Template engine for the generated TypeScript modules.
//!
//! Wraps Handlebars with the built-in service, method and index layouts.
//! Escaping is disabled: every template emits TypeScript, and type
//! arguments such as `Foo<Bar>` must pass through untouched.
//!
//! # Examples
//!
//! ```
//! use slack_codegen::template_engine::{INDEX_TEMPLATE, TemplateEngine};
//! use serde_json::json;
//!
//! let engine = TemplateEngine::new().unwrap();
//! let index = engine
//!     .render(INDEX_TEMPLATE, &json!({ "services": ["ChatService"] }))
//!     .unwrap();
//! assert!(index.ends_with("export { ChatService } from \"./ChatService.js\"\n"));
//! ```

use handlebars::Handlebars;
use serde::Serialize;
use slack_codegen_core::{Error, Result};

/// Name of the per-namespace service module template.
pub const SERVICE_TEMPLATE: &str = "service";

/// Name of the per-method wrapper template.
pub const METHOD_TEMPLATE: &str = "method";

/// Name of the barrel template.
pub const INDEX_TEMPLATE: &str = "index";

/// Template engine for code generation.
///
/// Strict mode is on, so a context missing a field fails to render instead
/// of silently emitting an empty string.
#[derive(Debug)]
pub struct TemplateEngine {
    handlebars: Handlebars<'static>,
}

impl TemplateEngine {
    /// Creates an engine with every built-in template registered.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TemplateFailed`] if a built-in template does not
    /// compile.
    pub fn new() -> Result<Self> {
        let mut handlebars = Handlebars::new();

        handlebars.set_strict_mode(true);
        handlebars.register_escape_fn(handlebars::no_escape);

        for (name, source) in [
            (SERVICE_TEMPLATE, include_str!("../templates/service.ts.hbs")),
            (METHOD_TEMPLATE, include_str!("../templates/method.ts.hbs")),
            (INDEX_TEMPLATE, include_str!("../templates/index.ts.hbs")),
        ] {
            handlebars
                .register_template_string(name, source)
                .map_err(|e| Error::TemplateFailed {
                    message: format!("failed to register {name} template: {e}"),
                    source: Some(Box::new(e)),
                })?;
        }

        Ok(Self { handlebars })
    }

    /// Renders a registered template with `context`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TemplateFailed`] if the template is unknown or the
    /// context lacks a field the template reads.
    pub fn render<T: Serialize>(&self, template_name: &str, context: &T) -> Result<String> {
        self.handlebars
            .render(template_name, context)
            .map_err(|e| Error::TemplateFailed {
                message: format!("{template_name} template rendering failed: {e}"),
                source: Some(Box::new(e)),
            })
    }

    /// Checks if a template is registered.
    #[inline]
    #[must_use]
    pub fn has_template(&self, name: &str) -> bool {
        self.handlebars.has_template(name)
    }
}
