pub mod converter;
pub mod formatter;

pub use converter::Converter;
pub use formatter::render;
