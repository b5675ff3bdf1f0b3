pub mod net;
pub mod slug;
