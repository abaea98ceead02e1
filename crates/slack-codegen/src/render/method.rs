//! Per-method wrapper rendering.

use super::{MethodContext, SPAN_METHOD_ATTRIBUTE, ServiceGenerator};
use crate::template_engine::METHOD_TEMPLATE;
use slack_codegen_core::{MethodInfo, Result};

impl ServiceGenerator {
    /// Renders the wrapper for one method.
    ///
    /// `client_path` is the expression reaching the SDK call (e.g.
    /// `client.chat.postMessage`), `span_name` the fully qualified span and
    /// `var_name` the local identifier to declare. The block ends with a
    /// newline.
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
    /// use slack_codegen_core::{MethodInfo, TypeText};
    ///
    /// let method = MethodInfo {
    ///     name: "test".to_string(),
    ///     api_path: "api.test".to_string(),
    ///     args_type: TypeText::new("APITestArguments"),
    ///     response_type: TypeText::new("ApiTestResponse"),
    ///     is_optional_args: true,
    ///     description: None,
    ///     deprecated: false,
    /// };
    ///
    /// let generator = ServiceGenerator::new().unwrap();
    /// let code = generator
    ///     .generate_method(&method, "client.api.test", "ApiService.test", "test")
    ///     .unwrap();
    /// assert!(code.contains("const test = (args?: APITestArguments) =>"));
    /// assert!(code.contains("try: () => client.api.test(args),"));
    /// ```
    pub fn generate_method(
        &self,
        method: &MethodInfo,
        client_path: &str,
        span_name: &str,
        var_name: &str,
    ) -> Result<String> {
        let context = MethodContext {
            var_name: var_name.to_string(),
            optional_args: method.is_optional_args,
            args_type: method.args_type.to_string(),
            client_path: client_path.to_string(),
            span_name: span_name.to_string(),
            span_attribute: SPAN_METHOD_ATTRIBUTE.to_string(),
            api_path: method.api_path.clone(),
            description: method
                .description
                .as_deref()
                .map(|description| description.replace("*/", "*\\/")),
            deprecated: method.deprecated,
        };

        self.engine.render(METHOD_TEMPLATE, &context)
    }
}
