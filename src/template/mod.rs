//! Built-in and user-supplied templates.

mod builtin;
mod catalog;
mod resolver;

pub use builtin::{BUILTIN_TEMPLATES, BuiltinTemplate, get_builtin, is_builtin};
pub use catalog::{CatalogEntry, available_languages, user_template_langs};
pub use resolver::{
    TEMPLATE_EXTENSIONS, Template, TemplateError, TemplateSource, find_user_template,
    resolve_template,
};
