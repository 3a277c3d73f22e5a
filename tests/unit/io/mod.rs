mod configuration;
mod image;
mod visualization;
