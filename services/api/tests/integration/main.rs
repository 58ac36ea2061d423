mod bootstrap_test;
mod catalog_test;
mod helpers;
mod quiz_test;
