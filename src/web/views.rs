use super::prelude::*;
use crate::constants::TARGET_LANGUAGE;

/// Topics offered as examples under the input box.
const EXAMPLE_TOPICS: &[&str] = &[
    "Kubernetes Security",
    "Serverless Architecture",
    "Multi-Cloud Strategy",
];

#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub(crate) struct HomeTemplate {
    pub(crate) language: &'static str,
    pub(crate) example_topics: &'static [&'static str],
}

/// handles the / GET
pub(crate) async fn root_handler() -> HomeTemplate {
    debug!("Rendering home page");
    HomeTemplate {
        language: TARGET_LANGUAGE,
        example_topics: EXAMPLE_TOPICS,
    }
}
