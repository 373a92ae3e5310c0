mod auth_tests;
mod order_tests;
