pub mod posts;

pub use posts::PostDto;
