/// Embedded HTML page templates
///
/// The two service pages are Jinja templates compiled into the binary and
/// rendered through a shared minijinja environment.
use crate::error::{AppError, AppResult};
use minijinja::{context, Environment};

/// Human-facing service name passed to every page
const SERVICE_NAME: &str = "pdfdrop";

/// Build the template environment with all embedded page templates
pub fn environment() -> AppResult<Environment<'static>> {
    let mut env = Environment::new();

    env.add_template("maintenance.html", include_str!("../templates/maintenance.html"))
        .map_err(|e| AppError::Template(e.to_string()))?;
    env.add_template("index.html", include_str!("../templates/index.html"))
        .map_err(|e| AppError::Template(e.to_string()))?;

    Ok(env)
}

/// Render a page template to an HTML string
pub fn render_page(env: &Environment<'static>, name: &str) -> AppResult<String> {
    let template = env
        .get_template(name)
        .map_err(|_| AppError::Template(format!("Template '{}' not found", name)))?;

    template
        .render(context! { service_name => SERVICE_NAME })
        .map_err(|e| AppError::Template(e.to_string()))
}
