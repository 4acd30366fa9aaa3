mod app;
mod err;
mod input;
mod locale;
mod output;
mod utils;

pub use app::App;
