pub mod delete_prompt;
pub mod link_editor;
pub mod notice;
pub mod qr_dialog;
