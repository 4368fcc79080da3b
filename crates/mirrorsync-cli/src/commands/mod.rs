mod mirror;

pub use mirror::Mirror;
