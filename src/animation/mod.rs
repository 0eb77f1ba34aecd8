pub mod interp;
pub mod spring;
