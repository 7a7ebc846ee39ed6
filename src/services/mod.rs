// Service module exports

pub mod calendar;
pub mod event;
pub mod grid;
pub mod i18n;
pub mod navigation;
pub mod settings;
pub mod style;
