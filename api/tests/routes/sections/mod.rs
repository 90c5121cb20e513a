mod change_test;
mod delete_test;
mod get_test;
mod pick_test;
