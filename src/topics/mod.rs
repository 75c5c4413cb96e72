/*!
## Rust Topics Module

One handler per tour topic. Each handler writes a header, then numbered
sections of code snippets followed by the live output of the same code.

*/

mod page;

pub use page::Page;

pub mod arrays;
pub mod conditions;
pub mod constants;
pub mod data_types;
pub mod defer;
pub mod functions;
pub mod loops;
pub mod maps;
pub mod operators;
pub mod slices;
pub mod structs;
pub mod variables;
