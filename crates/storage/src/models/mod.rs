mod achievement;
mod athlete_stats;
mod category;
mod credentials;
mod event;
mod event_participant;
mod follow;
mod news;
mod review;
mod sport;
mod user;
mod user_details;

pub use achievement::{Achievement, Education};
pub use athlete_stats::AthleteStats;
pub use category::{EventCategory, Sponsor};
pub use credentials::{PasswordResetToken, UserCredentials};
pub use event::{Event, EventStatus};
pub use event_participant::{EventParticipant, ParticipantWithUser};
pub use follow::Follow;
pub use news::{NewsArticle, NewsDraft, read_time_minutes};
pub use review::{ReviewWithReviewer, UserReview};
pub use sport::Sport;
pub use user::{User, UserRole, age_on, age_today};
pub use user_details::UserDetails;
