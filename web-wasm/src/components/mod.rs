pub mod header;
pub mod json_input;
pub mod file_input;
pub mod filter_panel;
pub mod result_view;
