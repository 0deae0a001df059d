pub mod home;
pub mod toast;

pub use home::{HomeViewModel, NotificationLine};
pub use toast::{ToastCard, ToastStackViewModel};
