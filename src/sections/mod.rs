mod about;
mod contact;
mod faq;
mod gallery;
mod hero;
mod pricing;
mod services;
mod trainers;

pub use about::AboutSection;
pub use contact::ContactSection;
pub use faq::FaqSection;
pub use gallery::GallerySection;
pub use hero::HeroSection;
pub use pricing::PricingSection;
pub use services::ServicesSection;
pub use trainers::TrainersSection;
