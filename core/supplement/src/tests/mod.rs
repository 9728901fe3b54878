mod batch_tests;
mod support;
