mod utils;

// USER
#[path = "api/user/get_user_list_tests.rs"]
mod get_user_list_tests;

// OTHER
#[path = "api/other/health_tests.rs"]
mod health_tests;
