pub mod editor;
pub mod entity;
pub mod policy;
pub mod repository;
pub mod search;
pub mod value_objects;

pub use editor::PostEditor;
pub use entity::{NewPost, Post};
pub use policy::TitlePolicy;
pub use repository::{PostMutation, PostReadRepository, PostWriteRepository};
pub use search::{PageRequest, PostSearch, PostSort, SortDirection, SortField};
pub use value_objects::{PostContent, PostId, PostTitle};
