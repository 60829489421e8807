pub mod password;
pub mod request;
