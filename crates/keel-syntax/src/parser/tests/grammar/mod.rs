mod crefs_tests;
mod declarations_tests;
mod expressions_tests;
mod patterns_tests;
mod statements_tests;
