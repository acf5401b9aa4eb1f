use super::*;

pub async fn get_text(_url: &str) -> Result<String, ApiError> {
    Err(ApiError::Unavailable)
}

// Native builds only exercise paths in tests; segments stay readable there.
pub fn encode_segment(segment: &str) -> String {
    segment.to_string()
}

pub fn meta_content(_name: &str) -> Option<String> {
    None
}
