// Application layer - Pipeline stages and the service that runs them
pub mod feed_repository;
pub mod layer_composer;
pub mod map_assembler;
pub mod map_service;
