//! The CV enhancement workflow: load a stored record, render it, submit it
//! for enhancement, render the result.

pub mod controller;
pub mod handlers;
pub mod page;
pub mod submission;
pub mod view;
