pub mod db;
pub mod defrag;
pub mod threads;
