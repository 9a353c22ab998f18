pub mod destinations_section;
pub mod hero_section;
pub mod testimonials_section;
