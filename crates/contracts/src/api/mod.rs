//! Wire contract between the frontend and the generation service
//!
//! Both crates depend on these types so the multipart field names and the
//! response shape cannot drift apart.

use serde::{Deserialize, Serialize};

/// Multipart form field carrying the GitHub account handle.
pub const FIELD_PROFILE: &str = "profile";

/// Multipart form field carrying the repository name.
pub const FIELD_REPO: &str = "repo";

/// Successful response of `POST /generate-readme`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateReadmeResponse {
    /// The generated README, markdown text.
    pub readme: String,
}

/// Error payload returned with any non-2xx status.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorBody {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_round_trips_readme_field() {
        let json = r##"{"readme":"# Hello"}"##;
        let parsed: GenerateReadmeResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.readme, "# Hello");
    }
}
