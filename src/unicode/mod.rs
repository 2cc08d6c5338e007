pub mod idna;
