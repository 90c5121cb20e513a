
pub use app::{TestSession, body_json, body_string, get, make_test_app, post_form};
