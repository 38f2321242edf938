//! POST /generate-readme

use axum::extract::Multipart;
use axum::Json;
use contracts::api::{GenerateReadmeResponse, FIELD_PROFILE, FIELD_REPO};

use crate::api::error::ApiError;
use crate::domain::readme;

/// Multipart fields accepted by the endpoint.
#[derive(Debug, Default, PartialEq)]
struct GenerateForm {
    profile: Option<String>,
    repo: Option<String>,
}

impl GenerateForm {
    fn into_parts(self) -> Result<(String, String), ApiError> {
        match (non_empty(self.profile), non_empty(self.repo)) {
            (Some(profile), Some(repo)) => Ok((profile, repo)),
            _ => Err(ApiError::BadRequest(
                "Both profile and repository are required.".to_owned(),
            )),
        }
    }
}

fn non_empty(field: Option<String>) -> Option<String> {
    field
        .map(|value| value.trim().to_owned())
        .filter(|value| !value.is_empty())
}

pub async fn generate_readme(
    mut multipart: Multipart,
) -> Result<Json<GenerateReadmeResponse>, ApiError> {
    let form = read_form(&mut multipart).await?;
    let (profile, repo) = form.into_parts()?;

    tracing::info!("generating README for {}/{}", profile, repo);
    let readme = readme::service::generate(&profile, &repo).await?;

    Ok(Json(GenerateReadmeResponse { readme }))
}

async fn read_form(multipart: &mut Multipart) -> Result<GenerateForm, ApiError> {
    let mut form = GenerateForm::default();
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("invalid multipart body: {e}")))?
    {
        let Some(name) = field.name().map(str::to_owned) else {
            continue;
        };
        let value = field
            .text()
            .await
            .map_err(|e| ApiError::BadRequest(format!("invalid multipart field: {e}")))?;
        match name.as_str() {
            FIELD_PROFILE => form.profile = Some(value),
            FIELD_REPO => form.repo = Some(value),
            _ => {}
        }
    }
    Ok(form)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_fields_are_required() {
        let form = GenerateForm {
            profile: Some("octocat".into()),
            repo: None,
        };
        assert!(form.into_parts().is_err());

        let form = GenerateForm {
            profile: Some("   ".into()),
            repo: Some("hello-world".into()),
        };
        assert!(form.into_parts().is_err());
    }

    #[test]
    fn fields_are_trimmed() {
        let form = GenerateForm {
            profile: Some(" octocat ".into()),
            repo: Some("hello-world".into()),
        };
        let (profile, repo) = form.into_parts().unwrap();
        assert_eq!(profile, "octocat");
        assert_eq!(repo, "hello-world");
    }
}
