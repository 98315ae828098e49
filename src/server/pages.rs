//! Server-rendered HTML pages.

use tera::{Context, Tera};

use crate::suggestions::SUGGESTIONS;

const INDEX_TEMPLATE: &str = "index.html";

/// Template engine with the bundled pages registered.
pub fn load_templates() -> Result<Tera, tera::Error> {
    let mut tera = Tera::default();
    tera.add_raw_template(INDEX_TEMPLATE, include_str!("../../templates/index.html"))?;
    Ok(tera)
}

/// Render the landing page.
pub fn render_index(tera: &Tera) -> Result<String, tera::Error> {
    let mut context = Context::new();
    context.insert("title", "University Admissions Assistant");
    context.insert("version", crate::VERSION);
    context.insert("suggestions", &SUGGESTIONS);
    tera.render(INDEX_TEMPLATE, &context)
}
