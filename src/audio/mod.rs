pub mod amplitude;
