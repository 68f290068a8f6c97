pub mod check_store;
