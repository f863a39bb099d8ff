use std::collections::{HashMap, HashSet};

use axum::{
    async_trait,
    body::Bytes,
    extract::{multipart::MultipartError, FromRequest, Multipart, Request},
    http::{header::CONTENT_TYPE, HeaderMap},
    response::{IntoResponse, Response},
    Form,
};

use crate::services::upload_store::UploadedImage;

pub struct UploadedFile {
    pub file_name: String,
    pub bytes: Bytes,
}

impl UploadedFile {
    pub fn as_image(&self) -> UploadedImage<'_> {
        UploadedImage {
            file_name: &self.file_name,
            bytes: &self.bytes,
        }
    }
}

/// A submitted HTML form, urlencoded or multipart. File inputs left empty by
/// the browser are tracked separately from real uploads.
#[derive(Default)]
pub struct SubmittedForm {
    fields: HashMap<String, String>,
    files: HashMap<String, UploadedFile>,
    empty_files: HashSet<String>,
}

impl SubmittedForm {
    pub fn text(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    pub fn text_or_empty(&self, name: &str) -> &str {
        self.text(name).unwrap_or("")
    }

    pub fn file(&self, name: &str) -> Option<&UploadedFile> {
        self.files.get(name)
    }

    /// Some clients send an unchosen file input as an empty text part.
    pub fn has_empty_file(&self, name: &str) -> bool {
        self.empty_files.contains(name) || self.fields.get(name).is_some_and(|v| v.is_empty())
    }

    async fn read_multipart(mut multipart: Multipart) -> Result<Self, MultipartError> {
        let mut form = Self::default();
        while let Some(field) = multipart.next_field().await? {
            let Some(name) = field.name().map(str::to_owned) else {
                continue;
            };
            match field.file_name().map(str::to_owned) {
                Some(file_name) if file_name.trim().is_empty() => {
                    form.empty_files.insert(name);
                }
                Some(file_name) => {
                    let bytes = field.bytes().await?;
                    form.files.insert(name, UploadedFile { file_name, bytes });
                }
                None => {
                    let value = field.text().await?;
                    form.fields.insert(name, value);
                }
            }
        }
        Ok(form)
    }
}

fn is_multipart(headers: &HeaderMap) -> bool {
    headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(|ct| ct.trim_start().to_ascii_lowercase().starts_with("multipart/form-data"))
        .unwrap_or(false)
}

#[async_trait]
impl<S> FromRequest<S> for SubmittedForm
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if is_multipart(req.headers()) {
            let multipart = Multipart::from_request(req, state)
                .await
                .map_err(IntoResponse::into_response)?;
            return Self::read_multipart(multipart)
                .await
                .map_err(IntoResponse::into_response);
        }

        let Form(fields) = Form::<HashMap<String, String>>::from_request(req, state)
            .await
            .map_err(IntoResponse::into_response)?;
        Ok(Self {
            fields,
            ..Self::default()
        })
    }
}
