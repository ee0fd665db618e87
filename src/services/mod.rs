pub mod email;
pub mod mail;
