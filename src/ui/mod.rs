pub mod app;
pub mod catalog;
pub mod events;
pub mod footer;
pub mod header;
pub mod input;
pub mod mvi;
pub mod product_card;
pub mod render;
pub mod runtime;
pub mod search_bar;
pub mod terminal_guard;
pub mod theme;

pub use runtime::run;
