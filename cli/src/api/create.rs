use serde::Deserialize;

/// Multipart field the handler file is uploaded under
pub const FILE_FIELD: &str = "file";

/// Body the control service sends back once the runner image is built
#[derive(Debug, Default, Deserialize)]
pub struct Response {
    #[serde(rename = "runnerImageName")]
    pub runner_image_name: Option<String>,
}
