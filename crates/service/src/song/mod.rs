pub mod repository;
pub mod service;

pub use repository::{SeaOrmSongRepository, SongRepository};
pub use service::SongService;
