//! Handlebars-backed renderer.

use handlebars::Handlebars;
use tracing::{instrument, trace};

use deploygo_core::{
    application::{ApplicationError, ports::TemplateRenderer},
    domain::ProjectConfig,
    error::DeployResult,
};

/// Renders file templates with Handlebars.
///
/// The render context is the serialized [`ProjectConfig`], so templates can
/// reference `{{project_name}}`, `{{language}}`, `{{port}}` and
/// `{{version}}`. HTML escaping is disabled since the output is source code
/// and config files. Strict mode is on: a reference to an unknown variable
/// is a render failure rather than an empty string.
#[derive(Debug)]
pub struct HandlebarsRenderer {
    registry: Handlebars<'static>,
}

impl HandlebarsRenderer {
    pub fn new() -> Self {
        let mut registry = Handlebars::new();
        registry.register_escape_fn(handlebars::no_escape);
        registry.set_strict_mode(true);
        Self { registry }
    }
}

impl Default for HandlebarsRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateRenderer for HandlebarsRenderer {
    #[instrument(skip(self, template, config))]
    fn render(&self, name: &str, template: &str, config: &ProjectConfig) -> DeployResult<String> {
        let rendered = self
            .registry
            .render_template(template, config)
            .map_err(|e| ApplicationError::TemplateExecutionFailed {
                template: name.to_string(),
                reason: e.to_string(),
            })?;
        trace!(bytes = rendered.len(), "Rendered template");
        Ok(rendered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use deploygo_core::{domain::Language, error::DeployError};

    fn config() -> ProjectConfig {
        ProjectConfig::builder()
            .project_name("demo")
            .language(Language::NodeJs)
            .port(9090)
            .version("2.1.0")
            .build()
            .unwrap()
    }

    #[test]
    fn substitutes_every_field() {
        let out = HandlebarsRenderer::new()
            .render(
                "info",
                "{{project_name}} {{language}} {{port}} {{version}}",
                &config(),
            )
            .unwrap();
        assert_eq!(out, "demo nodejs 9090 2.1.0");
    }

    #[test]
    fn exposes_lowercase_slug_next_to_the_name() {
        let config = ProjectConfig::builder().project_name("My Api").build().unwrap();
        let out = HandlebarsRenderer::new()
            .render("x", "{{project_name}}|{{project_slug}}", &config)
            .unwrap();
        assert_eq!(out, "My Api|my-api");
    }

    #[test]
    fn does_not_html_escape() {
        let out = HandlebarsRenderer::new()
            .render("x", "<{{project_name}}> & \"{{port}}\"", &config())
            .unwrap();
        assert_eq!(out, "<demo> & \"9090\"");
    }

    #[test]
    fn text_without_placeholders_passes_through() {
        let text = "FROM alpine:3.19\nCMD [\"./main\"]\n";
        let out = HandlebarsRenderer::new().render("Dockerfile", text, &config()).unwrap();
        assert_eq!(out, text);
    }

    #[test]
    fn malformed_template_is_execution_failure() {
        let err = HandlebarsRenderer::new()
            .render("broken.txt", "{{#if port}}never closed", &config())
            .unwrap_err();

        match err {
            DeployError::Application(ApplicationError::TemplateExecutionFailed {
                template, ..
            }) => assert_eq!(template, "broken.txt"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn unknown_variable_is_execution_failure() {
        let err = HandlebarsRenderer::new()
            .render("x", "{{author}}", &config())
            .unwrap_err();
        assert!(err.is_recoverable());
    }
}
