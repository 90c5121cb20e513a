pub mod authcode_user;
pub mod rating;
pub mod section;
