pub mod authcode_user;
pub mod section;
pub mod user_section_rating;

pub use authcode_user::Entity as AuthcodeUser;
pub use section::{Entity as Section, Weekday};
pub use user_section_rating::Entity as UserSectionRating;
