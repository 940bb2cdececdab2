//! Ferrous Inet Infrastructure Layer
pub mod dns;
pub mod idna;
pub mod system;
