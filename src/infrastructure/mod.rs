// Infrastructure layer module
// Contains the SQLite adapters and database bootstrap
// Follows Hexagonal Architecture

pub mod db;
pub mod repositories;
