pub mod settings;
pub mod star_rating;
pub mod text_expander;
