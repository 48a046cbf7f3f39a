// Domain layer - Feed records and their visual encodings
pub mod earthquake;
pub mod encoding;
pub mod layer;
pub mod map_view;
