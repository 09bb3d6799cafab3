pub mod debug;
pub mod rows;
pub mod scroller;
pub mod status_bar;
