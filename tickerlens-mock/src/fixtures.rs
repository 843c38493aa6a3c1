pub mod history;
pub mod news;
pub mod options;
