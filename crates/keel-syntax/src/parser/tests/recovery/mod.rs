mod feature_gates_tests;
mod incomplete_tests;
mod nesting_tests;
mod speculation_tests;
mod warnings_tests;
