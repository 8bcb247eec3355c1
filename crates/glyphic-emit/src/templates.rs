//! Template engine for generated source files.

use minijinja::{context, AutoEscape, Environment};

/// One re-export in the barrel file.
#[derive(Debug, Clone, serde::Serialize)]
pub struct ExportEntry {
    /// Exported component identifier
    pub component_name: String,
    /// Module file name without extension
    pub filename: String,
}

/// Context for rendering a component template.
#[derive(Debug, Clone, serde::Serialize)]
pub struct ComponentContext<'a> {
    /// Component identifier
    pub component_name: &'a str,
    /// Serialized `<svg>` element
    pub markup: &'a str,
    /// Prop type import path
    pub props_import: &'a str,
    /// Prop type name
    pub props_type: &'a str,
    /// Wrapper component import path
    pub wrapper_import: &'a str,
    /// Wrapper component name
    pub wrapper_name: &'a str,
}

/// Template engine using minijinja.
pub struct TemplateEngine {
    env: Environment<'static>,
}

impl TemplateEngine {
    /// Create a new template engine with the React templates.
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.set_auto_escape_callback(|_| AutoEscape::None);

        env.add_template("react/component.tsx", REACT_COMPONENT_TEMPLATE)
            .expect("Failed to add component template");

        env.add_template("react/entry.ts", REACT_ENTRY_TEMPLATE)
            .expect("Failed to add entry template");

        Self { env }
    }

    /// Render a component template.
    pub fn render_component(
        &self,
        template: &str,
        ctx: &ComponentContext<'_>,
    ) -> Result<String, minijinja::Error> {
        self.env.get_template(template)?.render(ctx)
    }

    /// Render an entry template.
    pub fn render_entry(
        &self,
        template: &str,
        exports: &[ExportEntry],
    ) -> Result<String, minijinja::Error> {
        self.env
            .get_template(template)?
            .render(context! { exports => exports })
    }
}

impl Default for TemplateEngine {
    fn default() -> Self {
        Self::new()
    }
}

const REACT_COMPONENT_TEMPLATE: &str = r#"
import { {{ props_type }} } from "{{ props_import }}";
import {{ wrapper_name }} from "{{ wrapper_import }}";

const {{ component_name }}: React.FC<{{ props_type }}> = (props) => {
  return (
    <{{ wrapper_name }} {...props}>
      {{ markup }}
    </{{ wrapper_name }}>
  );
};
export default {{ component_name }};
"#;

const REACT_ENTRY_TEMPLATE: &str = r#"
{% for entry in exports -%}
export { default as {{ entry.component_name }} } from "./{{ entry.filename }}";
{% endfor %}
"#;
