pub mod event;
pub mod member;
pub mod participation;
pub mod photo;

pub use event::{EventRow, EventSummaryRow};
pub use member::MemberRow;
pub use participation::ParticipationRow;
pub use photo::PhotoRow;
