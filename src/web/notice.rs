use axum::response::Redirect;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::services::ServiceError;

/// Transient messages carried through the redirect as `?notice=<code>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    MemberAdded,
    DuplicateEmail,
    MissingFields,
    EventCreated,
    InvalidDate,
    MemberJoined,
    AlreadyJoined,
    MemberNotFound,
    PhotoUploaded,
    InvalidFileType,
    NoFileSelected,
    Error,
}

impl Notice {
    const ALL: [Notice; 12] = [
        Notice::MemberAdded,
        Notice::DuplicateEmail,
        Notice::MissingFields,
        Notice::EventCreated,
        Notice::InvalidDate,
        Notice::MemberJoined,
        Notice::AlreadyJoined,
        Notice::MemberNotFound,
        Notice::PhotoUploaded,
        Notice::InvalidFileType,
        Notice::NoFileSelected,
        Notice::Error,
    ];

    pub fn code(self) -> &'static str {
        match self {
            Notice::MemberAdded => "member_added",
            Notice::DuplicateEmail => "duplicate_email",
            Notice::MissingFields => "missing_fields",
            Notice::EventCreated => "event_created",
            Notice::InvalidDate => "invalid_date",
            Notice::MemberJoined => "member_joined",
            Notice::AlreadyJoined => "already_joined",
            Notice::MemberNotFound => "member_not_found",
            Notice::PhotoUploaded => "photo_uploaded",
            Notice::InvalidFileType => "invalid_file_type",
            Notice::NoFileSelected => "no_file_selected",
            Notice::Error => "error",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|n| n.code() == code.trim())
    }

    pub fn message(self) -> &'static str {
        match self {
            Notice::MemberAdded => "Member added successfully!",
            Notice::DuplicateEmail => "Email already exists!",
            Notice::MissingFields => "Please fill in all required fields.",
            Notice::EventCreated => "Event created successfully!",
            Notice::InvalidDate => "Invalid date format",
            Notice::MemberJoined => "Member added to event!",
            Notice::AlreadyJoined => "Member already joined this event.",
            Notice::MemberNotFound => "That member does not exist.",
            Notice::PhotoUploaded => "Photo uploaded successfully!",
            Notice::InvalidFileType => "Only png, jpg, jpeg and gif images are allowed.",
            Notice::NoFileSelected => "Please choose a photo to upload.",
            Notice::Error => "Something went wrong, please try again.",
        }
    }

    pub fn is_error(self) -> bool {
        !matches!(
            self,
            Notice::MemberAdded | Notice::EventCreated | Notice::MemberJoined | Notice::PhotoUploaded
        )
    }

    /// Maps a rejected form post to the notice shown after the redirect.
    /// Infrastructure failures are logged here.
    pub fn for_failure(context: &str, err: &ServiceError) -> Self {
        if err.is_user_error() {
            debug!("{} rejected: {}", context, err);
        } else {
            warn!("{} failed: {}", context, err);
        }
        match err {
            ServiceError::MissingField(_) => Notice::MissingFields,
            ServiceError::DuplicateEmail => Notice::DuplicateEmail,
            ServiceError::InvalidDate(_) => Notice::InvalidDate,
            ServiceError::InvalidFileType(_) => Notice::InvalidFileType,
            ServiceError::MemberNotFound(_) => Notice::MemberNotFound,
            ServiceError::EventNotFound(_) | ServiceError::Db(_) | ServiceError::Io(_) => {
                Notice::Error
            }
        }
    }
}

pub fn redirect_with_notice(target: &str, notice: Notice) -> Redirect {
    let sep = if target.contains('?') { "&" } else { "?" };
    Redirect::to(&format!("{}{}notice={}", target, sep, notice.code()))
}

#[derive(Debug, Deserialize, Default)]
pub struct NoticeQuery {
    pub notice: Option<String>,
}

pub struct NoticeView {
    pub message: &'static str,
    pub is_error: bool,
}

impl NoticeQuery {
    /// Unknown codes are ignored.
    pub fn resolve(&self) -> Option<NoticeView> {
        let notice = Notice::from_code(self.notice.as_deref()?)?;
        Some(NoticeView {
            message: notice.message(),
            is_error: notice.is_error(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_code_resolves_back() {
        for notice in Notice::ALL {
            assert_eq!(Notice::from_code(notice.code()), Some(notice));
        }
        assert_eq!(Notice::from_code("bogus"), None);
    }

    #[test]
    fn query_resolves_to_message() {
        let query = NoticeQuery {
            notice: Some("duplicate_email".to_string()),
        };
        let view = query.resolve().unwrap();
        assert_eq!(view.message, "Email already exists!");
        assert!(view.is_error);

        assert!(NoticeQuery::default().resolve().is_none());
    }

    #[test]
    fn service_errors_map_to_notices() {
        assert_eq!(
            Notice::for_failure("test", &ServiceError::InvalidDate("x".into())),
            Notice::InvalidDate
        );
        assert_eq!(
            Notice::for_failure("test", &ServiceError::Db(sqlx::Error::RowNotFound)),
            Notice::Error
        );
    }
}
