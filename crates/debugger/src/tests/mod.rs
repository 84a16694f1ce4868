mod helpers;

mod navigation;
mod serde_tests;
mod view_tests;
