// src/templates.rs
use tera::Tera;

pub const INDEX: &str = "polls/index.html";
pub const DETAIL: &str = "polls/detail.html";
pub const RESULTS: &str = "polls/results.html";

/// Build the template set. Sources are compiled into the binary so the
/// server does not depend on its working directory.
pub fn load() -> Result<Tera, tera::Error> {
    let mut tera = Tera::default();
    tera.add_raw_templates(vec![
        ("base.html", include_str!("../templates/base.html")),
        (INDEX, include_str!("../templates/polls/index.html")),
        (DETAIL, include_str!("../templates/polls/detail.html")),
        (RESULTS, include_str!("../templates/polls/results.html")),
    ])?;
    Ok(tera)
}
