pub mod m202510010001_create_authcode_users;
pub mod m202510010002_create_sections;
pub mod m202510010003_create_user_section_ratings;
