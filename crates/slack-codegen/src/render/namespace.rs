//! Recursive namespace rendering and return-object assembly.

use super::{CLIENT_ROOT, ServiceGenerator};
use crate::naming::{safe_method_name, unique_method_var_name};
use crate::types::GeneratedMethod;
use slack_codegen_core::{NamespaceInfo, Result};

/// Rendered methods of a namespace and its descendants.
///
/// Both sequences keep declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderedNamespace {
    /// Methods declared directly in the namespace
    pub methods: Vec<GeneratedMethod>,
    /// Rendered sub-namespaces keyed by bare name
    pub sub_namespaces: Vec<(String, RenderedNamespace)>,
}

impl RenderedNamespace {
    /// Every implementation in the subtree, own methods before children.
    pub fn implementations(&self) -> Box<dyn Iterator<Item = &str> + '_> {
        Box::new(
            self.methods
                .iter()
                .map(|method| method.implementation.as_str())
                .chain(
                    self.sub_namespaces
                        .iter()
                        .flat_map(|(_, nested)| nested.implementations()),
                ),
        )
    }

    /// Returns `true` if nothing was rendered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.methods.is_empty() && self.sub_namespaces.is_empty()
    }
}

impl ServiceGenerator {
    /// Renders `namespace` for the service `service_name`.
    ///
    /// `path` holds the namespaces between the service and `namespace`; it
    /// is empty for the service's own namespace.
    ///
    /// # Errors
    ///
    /// Returns [`slack_codegen_core::Error::TemplateFailed`] if a method
    /// template fails to render.
    pub fn render_namespace(
        &self,
        namespace: &NamespaceInfo,
        service_name: &str,
        path: &[&str],
    ) -> Result<RenderedNamespace> {
        let methods: Vec<GeneratedMethod> = namespace
            .methods
            .iter()
            .map(|method| -> Result<GeneratedMethod> {
                let export_name = safe_method_name(&method.name);
                let var_name = unique_method_var_name(path, &method.name);
                let span_name = if path.is_empty() {
                    format!("{service_name}.{export_name}")
                } else {
                    format!("{service_name}.{}.{export_name}", path.join("."))
                };
                let client_path = format!("{CLIENT_ROOT}.{}", method.api_path);

                Ok(GeneratedMethod {
                    implementation: self.generate_method(
                        method,
                        &client_path,
                        &span_name,
                        &var_name,
                    )?,
                    var_name,
                    export_name,
                })
            })
            .collect::<Result<_>>()?;

        let sub_namespaces: Vec<(String, RenderedNamespace)> = namespace
            .sub_namespaces
            .iter()
            .map(|nested| -> Result<(String, RenderedNamespace)> {
                let mut nested_path = path.to_vec();
                nested_path.push(nested.name.as_str());
                let rendered = self.render_namespace(nested, service_name, &nested_path)?;
                Ok((nested.name.clone(), rendered))
            })
            .collect::<Result<_>>()?;

        Ok(RenderedNamespace {
            methods,
            sub_namespaces,
        })
    }
}

/// Builds the object literal returned by the service.
///
/// Entries are written at `indent` spaces; the closing brace two spaces
/// less. Direct methods come first, then one nested object per
/// sub-namespace.
///
/// # Examples
///
/// ```
/// use slack_codegen::GeneratedMethod;
/// use slack_codegen::render::{RenderedNamespace, build_return_object};
///
/// let rendered = RenderedNamespace {
///     methods: vec![GeneratedMethod {
///         implementation: String::new(),
///         var_name: "delete_".to_string(),
///         export_name: "delete_".to_string(),
///     }],
///     sub_namespaces: vec![],
/// };
///
/// assert_eq!(build_return_object(&rendered, 2), "{\n  delete_,\n}");
/// ```
#[must_use]
pub fn build_return_object(rendered: &RenderedNamespace, indent: usize) -> String {
    if rendered.is_empty() {
        return "{}".to_string();
    }

    let pad = " ".repeat(indent);
    let mut out = String::from("{\n");

    for method in &rendered.methods {
        if method.is_shorthand() {
            out.push_str(&format!("{pad}{},\n", method.export_name));
        } else {
            out.push_str(&format!(
                "{pad}{}: {},\n",
                method.export_name, method.var_name
            ));
        }
    }

    for (name, nested) in &rendered.sub_namespaces {
        out.push_str(&format!(
            "{pad}{name}: {},\n",
            build_return_object(nested, indent + 2)
        ));
    }

    out.push_str(&" ".repeat(indent.saturating_sub(2)));
    out.push('}');
    out
}
