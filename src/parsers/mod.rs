pub mod html;


pub use html::parse;
