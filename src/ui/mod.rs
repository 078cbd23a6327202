mod app;
mod components;
mod state;

pub use app::launch_gui;
