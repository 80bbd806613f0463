pub mod podcast;
pub mod real_estate;
pub mod statute;

pub use podcast::PodcastEpisodeRenderer;
pub use real_estate::RealEstateRenderer;
pub use statute::StatuteRenderer;
