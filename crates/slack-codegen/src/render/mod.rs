//! Rendering of the namespace tree into TypeScript modules.
//!
//! Layouts live in the Handlebars templates under `templates/`; ordering,
//! naming and nesting are computed here. The same tree always renders to
//! byte-identical output.
//!
//! # Generated Layout
//!
//! ```text
//! <output>/
//! ├── AdminService.ts
//! ├── ChatService.ts
//! ├── ...
//! └── index.ts
//! ```

mod context;
mod method;
mod namespace;

pub use context::{IndexContext, MethodContext, ServiceContext};
pub use namespace::{RenderedNamespace, build_return_object};

use crate::naming::service_name;
use crate::template_engine::{INDEX_TEMPLATE, SERVICE_TEMPLATE, TemplateEngine};
use crate::types::{GeneratedCode, GeneratedFile};
use slack_codegen_core::{NamespaceInfo, Result};
use std::collections::BTreeSet;
use tracing::debug;

/// Prefix of the key each service registers under.
pub const SERVICE_KEY_PREFIX: &str = "@effect-slack/";

/// Identifier of the SDK client inside generated modules.
pub const CLIENT_ROOT: &str = "client";

/// Span attribute carrying the API path.
pub const SPAN_METHOD_ATTRIBUTE: &str = "slack.method";

/// Name of the barrel file.
pub const INDEX_FILE_NAME: &str = "index.ts";

/// Package the argument and response types are imported from.
const TYPES_PACKAGE: &str = "@slack/web-api";

/// Indentation of the return object's entries.
const RETURN_OBJECT_INDENT: usize = 6;

/// File name of the service module for a top-level namespace.
#[must_use]
pub fn service_file_name(namespace: &str) -> String {
    format!("{}.ts", service_name(namespace))
}

/// Renders namespace trees into service modules through the built-in
/// templates.
///
/// # Examples
///
/// ```
/// use slack_codegen::render::ServiceGenerator;
/// use slack_codegen_core::NamespaceInfo;
///
/// let generator = ServiceGenerator::new().unwrap();
/// let file = generator
///     .generate_service_file(&NamespaceInfo::new("workflows"))
///     .unwrap();
/// assert_eq!(file.path, "WorkflowsService.ts");
/// assert!(file.content.contains("class WorkflowsService extends Effect.Service<WorkflowsService>()"));
/// ```
#[derive(Debug)]
pub struct ServiceGenerator {
    engine: TemplateEngine,
}

impl ServiceGenerator {
    /// Creates a generator with the built-in templates registered.
    ///
    /// # Errors
    ///
    /// Returns [`slack_codegen_core::Error::TemplateFailed`] if a built-in
    /// template does not compile.
    pub fn new() -> Result<Self> {
        let engine = TemplateEngine::new()?;
        Ok(Self { engine })
    }

    /// Renders the service module for a top-level namespace.
    ///
    /// # Errors
    ///
    /// Returns [`slack_codegen_core::Error::TemplateFailed`] if a template
    /// fails to render.
    pub fn generate_service_file(&self, namespace: &NamespaceInfo) -> Result<GeneratedFile> {
        let service = service_name(&namespace.name);
        let rendered = self.render_namespace(namespace, &service, &[])?;

        let context = ServiceContext {
            service_key: format!("{SERVICE_KEY_PREFIX}{service}"),
            client_root: CLIENT_ROOT.to_string(),
            type_imports: type_imports(namespace),
            types_package: TYPES_PACKAGE.to_string(),
            implementations: rendered.implementations().map(str::to_string).collect(),
            return_object: build_return_object(&rendered, RETURN_OBJECT_INDENT),
            service_name: service,
        };

        let content = self.engine.render(SERVICE_TEMPLATE, &context)?;
        Ok(GeneratedFile::new(service_file_name(&namespace.name), content))
    }

    /// Renders the barrel re-exporting every service.
    ///
    /// # Errors
    ///
    /// Returns [`slack_codegen_core::Error::TemplateFailed`] if the template
    /// fails to render.
    ///
    /// # Examples
    ///
    /// ```
    /// use slack_codegen::render::ServiceGenerator;
    /// use slack_codegen_core::NamespaceInfo;
    ///
    /// let generator = ServiceGenerator::new().unwrap();
    /// let index = generator
    ///     .generate_index_file(&[NamespaceInfo::new("chat")])
    ///     .unwrap();
    /// assert!(index.content.contains("export { ChatService } from \"./ChatService.js\""));
    /// ```
    pub fn generate_index_file(&self, namespaces: &[NamespaceInfo]) -> Result<GeneratedFile> {
        let context = IndexContext {
            services: namespaces
                .iter()
                .map(|namespace| service_name(&namespace.name))
                .collect(),
        };

        let content = self.engine.render(INDEX_TEMPLATE, &context)?;
        Ok(GeneratedFile::new(INDEX_FILE_NAME, content))
    }

    /// Renders every service module followed by the index.
    ///
    /// Always yields `namespaces.len() + 1` files with `index.ts` last.
    ///
    /// # Errors
    ///
    /// Returns [`slack_codegen_core::Error::TemplateFailed`] if a template
    /// fails to render.
    pub fn generate_all_files(&self, namespaces: &[NamespaceInfo]) -> Result<GeneratedCode> {
        let mut code = GeneratedCode::new();

        for namespace in namespaces {
            let file = self.generate_service_file(namespace)?;
            debug!(
                file = %file.path,
                methods = namespace.method_count(),
                "rendered service"
            );
            code.add_file(file);
        }
        code.add_file(self.generate_index_file(namespaces)?);

        Ok(code)
    }
}

/// Sorted, de-duplicated type names used anywhere in the subtree.
fn type_imports(namespace: &NamespaceInfo) -> Vec<String> {
    namespace
        .all_methods()
        .flat_map(|method| [method.args_type.as_str(), method.response_type.as_str()])
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}
