pub mod app_reducer;
pub mod counter_reducer;
pub mod notification_reducer;
pub mod toast_reducer;
