pub mod address_book;
pub mod contact;
pub mod search;
pub mod settings;
pub mod template;
pub mod template_book;
