pub mod athlete;
pub mod auth;
pub mod event;
pub mod follow;
pub mod news;
pub mod participant;
pub mod review;
pub mod search;
pub mod stats;
pub mod user;

pub use athlete::AthleteRepository;
pub use auth::AuthRepository;
pub use event::EventRepository;
pub use follow::FollowRepository;
pub use news::NewsRepository;
pub use participant::ParticipantRepository;
pub use review::ReviewRepository;
pub use search::SearchRepository;
pub use stats::StatsRepository;
pub use user::UserRepository;
